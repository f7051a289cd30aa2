use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SetupError, TallyError};
use crate::ledger::{Category, Ledgers, PlayerCard};
use crate::player::{Player, PlayerId};
use crate::ranking::{Standing, rank_standings};

/// Points a player earned in one displayed scoring line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Points {
    pub label: &'static str,
    pub value: i64,
}

impl Points {
    pub fn new(label: &'static str, value: i64) -> Self {
        Self { label, value }
    }
}

/// Sum that saturates instead of overflowing on absurd inputs.
pub fn sum_points(values: impl IntoIterator<Item = i64>) -> i64 {
    values.into_iter().fold(0, i64::saturating_add)
}

/// Interface implemented by every game that ends in a leaderboard.
pub trait ScoredGame {
    type Category: Category;

    fn name(&self) -> &'static str;

    /// Every category that receives raw input, in entry order.
    fn categories(&self) -> &'static [Self::Category];

    fn player_range(&self) -> RangeInclusive<usize>;

    /// Called whenever the roster is replaced.
    fn reset_players(&mut self, _players: &[Player]) {}

    /// Per-line points for one player, in display order.
    fn breakdown(&self, card: &PlayerCard<'_, Self::Category>) -> Vec<Points>;

    fn total(&self, card: &PlayerCard<'_, Self::Category>) -> i64 {
        sum_points(self.breakdown(card).iter().map(|points| points.value))
    }

    /// Secondary statistic that orders equal totals.
    fn tie_break(&self, card: &PlayerCard<'_, Self::Category>) -> i64;

    /// Text shown next to a total when the tie-break is revealed.
    fn tie_break_details(&self, value: i64) -> String;

    fn subtitle(&self, _player: PlayerId) -> Option<String> {
        None
    }
}

/// One row of the final leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub rank: String,
    pub player_name: String,
    pub score: i64,
    pub subtitle: Option<String>,
    pub details: Option<String>,
}

/// Per-player values of one displayed scoring line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub values: Vec<i64>,
}

/// Score entry and ranking for a fixed roster.
pub struct ScoreSession<G: ScoredGame> {
    game: G,
    players: Vec<Player>,
    ledgers: Ledgers<G::Category>,
    results: Vec<ScoreResult>,
}

impl<G: ScoredGame> ScoreSession<G> {
    pub fn new(game: G, players: Vec<Player>) -> Result<Self, TallyError> {
        let ledgers = Ledgers::new(game.categories(), 0);
        let mut session = Self {
            game,
            players: Vec::new(),
            ledgers,
            results: Vec::new(),
        };
        session.reset_players(players)?;
        Ok(session)
    }

    /// Replaces the roster. All entries return to zero and prior results
    /// are dropped.
    pub fn reset_players(&mut self, players: Vec<Player>) -> Result<(), TallyError> {
        let range = self.game.player_range();
        if !range.contains(&players.len()) {
            return Err(SetupError::PlayerCount {
                count: players.len(),
                min: *range.start(),
                max: *range.end(),
            }
            .into());
        }
        debug!(game = self.game.name(), players = players.len(), "resetting score sheet");
        self.ledgers.reset(players.len());
        self.game.reset_players(&players);
        self.players = players;
        self.results.clear();
        Ok(())
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn ledgers(&self) -> &Ledgers<G::Category> {
        &self.ledgers
    }

    pub fn set_entry(
        &mut self,
        category: G::Category,
        index: PlayerId,
        text: impl Into<String>,
    ) -> Result<(), TallyError> {
        self.ledgers.set_entry(category, index, text)
    }

    /// Same as [`Self::set_entry`], addressing the category by its key.
    pub fn set_entry_by_key(
        &mut self,
        key: &str,
        index: PlayerId,
        text: impl Into<String>,
    ) -> Result<(), TallyError> {
        let category = self.category_for_key(key)?;
        self.set_entry(category, index, text)
    }

    pub fn category_for_key(&self, key: &str) -> Result<G::Category, TallyError> {
        self.game
            .categories()
            .iter()
            .copied()
            .find(|category| category.key() == key)
            .ok_or_else(|| TallyError::UnknownCategory(key.to_string()))
    }

    pub fn category_values(&self, category: G::Category) -> Result<Vec<i64>, TallyError> {
        self.ledgers.numeric_values(category)
    }

    /// Live per-line subtotals for every player.
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        let cards: Vec<Vec<Points>> = (0..self.players.len())
            .map(|idx| self.game.breakdown(&self.ledgers.card(idx)))
            .collect();
        let Some(first) = cards.first() else {
            return Vec::new();
        };
        first
            .iter()
            .enumerate()
            .map(|(line, points)| BreakdownRow {
                label: points.label.to_string(),
                values: cards
                    .iter()
                    .map(|card| card.get(line).map_or(0, |points| points.value))
                    .collect(),
            })
            .collect()
    }

    pub fn totals(&self) -> Vec<i64> {
        (0..self.players.len())
            .map(|idx| self.game.total(&self.ledgers.card(idx)))
            .collect()
    }

    pub fn standings(&self) -> Vec<Standing> {
        (0..self.players.len())
            .map(|idx| {
                let card = self.ledgers.card(idx);
                Standing {
                    player: idx,
                    score: self.game.total(&card),
                    tie_break: self.game.tie_break(&card),
                    subtitle: self.game.subtitle(idx),
                }
            })
            .collect()
    }

    /// Recomputes the leaderboard from the current entries, replacing any
    /// earlier results. Rows are in reveal order, winners last.
    pub fn calculate(&mut self) -> &[ScoreResult] {
        let ranked = rank_standings(&self.standings());
        self.results = ranked
            .into_iter()
            .map(|standing| ScoreResult {
                rank: standing.rank.to_string(),
                player_name: self.players[standing.player].name.clone(),
                score: standing.score,
                subtitle: standing.subtitle,
                details: standing
                    .tie_break
                    .map(|value| self.game.tie_break_details(value)),
            })
            .collect();
        debug!(game = self.game.name(), rows = self.results.len(), "calculated leaderboard");
        &self.results
    }

    pub fn results(&self) -> &[ScoreResult] {
        &self.results
    }
}
