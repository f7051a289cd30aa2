//! Leaderboard ranking shared by every scored game.
//!
//! Players are ordered by total score, then by a game-specific tie-break
//! statistic. Ranks follow competition ranking ("1224"): entries sharing an
//! exact `(score, tie_break)` pair share a rank and are marked tied. The
//! tie-break value is revealed whenever another player has the same score,
//! since that is exactly when it could have decided the order.

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Input row for the ranking engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub score: i64,
    pub tie_break: i64,
    pub subtitle: Option<String>,
}

/// Displayed rank, e.g. `3` or `T3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank {
    pub position: usize,
    pub tied: bool,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tied {
            write!(f, "T{}", self.position)
        } else {
            write!(f, "{}", self.position)
        }
    }
}

/// Ranked and annotated standing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedStanding {
    pub rank: Rank,
    pub player: PlayerId,
    pub score: i64,
    /// Present only when another player shares this score.
    pub tie_break: Option<i64>,
    pub subtitle: Option<String>,
}

/// Ranks `standings` and returns them in reveal order: lowest rank first,
/// winners last.
pub fn rank_standings(standings: &[Standing]) -> Vec<RankedStanding> {
    let mut sorted: Vec<&Standing> = standings.iter().collect();
    sorted.sort_by_key(|s| (Reverse(s.score), Reverse(s.tie_break)));

    let mut ranked: Vec<RankedStanding> = Vec::with_capacity(sorted.len());
    for (idx, standing) in sorted.iter().enumerate() {
        let same_pair = |other: &Standing| {
            other.score == standing.score && other.tie_break == standing.tie_break
        };
        // Equal pairs are contiguous after sorting.
        let first = sorted[..idx]
            .iter()
            .rposition(|other| !same_pair(*other))
            .map_or(0, |pos| pos + 1);
        let tied = sorted.iter().filter(|other| same_pair(**other)).count() > 1;
        let contested = sorted
            .iter()
            .enumerate()
            .any(|(other_idx, other)| other_idx != idx && other.score == standing.score);

        ranked.push(RankedStanding {
            rank: Rank {
                position: first + 1,
                tied,
            },
            player: standing.player,
            score: standing.score,
            tie_break: contested.then_some(standing.tie_break),
            subtitle: standing.subtitle.clone(),
        });
    }

    ranked.reverse();
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(player: PlayerId, score: i64, tie_break: i64) -> Standing {
        Standing {
            player,
            score,
            tie_break,
            subtitle: None,
        }
    }

    #[test]
    fn rank_display() {
        assert_eq!(Rank { position: 3, tied: true }.to_string(), "T3");
        assert_eq!(Rank { position: 1, tied: false }.to_string(), "1");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(rank_standings(&[]).is_empty());
    }
}
