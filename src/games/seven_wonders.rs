//! 7 Wonders: wonder assignment and end-of-game scoring.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::game::{Points, ScoredGame};
use crate::ledger::{Category, PlayerCard};
use crate::player::{Player, PlayerId};
use crate::random::{pick_one, shuffle};

pub const WONDERS: [&str; 7] = [
    "Rhódos",
    "Alexandria",
    "Éphesos",
    "Babylon",
    "Olympía",
    "Halikarnassós",
    "Gizah",
];

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;

/// Coins per treasury victory point.
pub const COINS_PER_POINT: i64 = 3;
/// Bonus per complete set of the three science symbols.
pub const SCIENCE_SET_BONUS: i64 = 7;
/// Upper bound on wildcards considered by the science search. Extra
/// wildcards beyond this are ignored.
pub const MAX_SCIENCE_WILDCARDS: i64 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SevenWondersCategory {
    Military,
    Treasury,
    Wonder,
    Civilian,
    Commercial,
    Guild,
    ScienceTablet,
    ScienceGear,
    ScienceCompass,
    ScienceWildcard,
}

impl SevenWondersCategory {
    pub const ALL: [Self; 10] = [
        Self::Military,
        Self::Treasury,
        Self::Wonder,
        Self::Civilian,
        Self::Commercial,
        Self::Guild,
        Self::ScienceTablet,
        Self::ScienceGear,
        Self::ScienceCompass,
        Self::ScienceWildcard,
    ];
}

impl Category for SevenWondersCategory {
    fn key(self) -> &'static str {
        match self {
            Self::Military => "military",
            Self::Treasury => "treasury",
            Self::Wonder => "wonder",
            Self::Civilian => "civilian",
            Self::Commercial => "commercial",
            Self::Guild => "guild",
            Self::ScienceTablet => "science-tablet",
            Self::ScienceGear => "science-gear",
            Self::ScienceCompass => "science-compass",
            Self::ScienceWildcard => "science-wildcard",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Military => "Military Conflicts",
            Self::Treasury => "Treasury (coins)",
            Self::Wonder => "Wonder",
            Self::Civilian => "Civilian Structures",
            Self::Commercial => "Commercial Structures",
            Self::Guild => "Guilds",
            Self::ScienceTablet => "Science: tablets",
            Self::ScienceGear => "Science: gears",
            Self::ScienceCompass => "Science: compasses",
            Self::ScienceWildcard => "Science: wildcards",
        }
    }
}

/// Best score for a set of science symbols.
///
/// Every wildcard may stand in for any one symbol, so all splits of the
/// wildcards are tried and the maximum of
/// `T² + G² + C² + 7·min(T, G, C)` is kept. Greedy allocation is not exact
/// because the set bonus competes with the squared terms.
///
/// The search is quadratic in the wildcard count, so `wildcards` is clamped
/// to [`MAX_SCIENCE_WILDCARDS`].
pub fn scientific_score(tablets: i64, gears: i64, compasses: i64, wildcards: i64) -> i64 {
    let wildcards = wildcards.min(MAX_SCIENCE_WILDCARDS);
    let mut best = 0;
    for to_tablets in 0..=wildcards {
        for to_gears in 0..=(wildcards - to_tablets) {
            let to_compasses = wildcards - to_tablets - to_gears;
            let t = tablets.saturating_add(to_tablets);
            let g = gears.saturating_add(to_gears);
            let c = compasses.saturating_add(to_compasses);
            let score = t
                .saturating_mul(t)
                .saturating_add(g.saturating_mul(g))
                .saturating_add(c.saturating_mul(c))
                .saturating_add(SCIENCE_SET_BONUS.saturating_mul(t.min(g).min(c)));
            best = best.max(score);
        }
    }
    best
}

/// Victory points from leftover coins, rounded down.
pub fn treasury_points(coins: i64) -> i64 {
    coins.div_euclid(COINS_PER_POINT)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WonderSide {
    A,
    B,
}

impl WonderSide {
    pub fn flipped(self) -> Self {
        match self {
            WonderSide::A => WonderSide::B,
            WonderSide::B => WonderSide::A,
        }
    }
}

/// How sides are chosen when wonders are randomized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidePolicy {
    #[default]
    AllA,
    AllB,
    /// Each player flips for a side.
    Mixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WonderAssignment {
    pub wonder: &'static str,
    pub side: WonderSide,
}

pub fn wonder_by_name(name: &str) -> Result<&'static str, SetupError> {
    WONDERS
        .iter()
        .copied()
        .find(|wonder| wonder.eq_ignore_ascii_case(name) || *wonder == name)
        .ok_or_else(|| SetupError::UnknownWonder(name.to_string()))
}

#[derive(Clone, Debug, Default)]
pub struct SevenWonders {
    assignments: Vec<WonderAssignment>,
}

impl SevenWonders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assignments(&self) -> &[WonderAssignment] {
        &self.assignments
    }

    pub fn assignment(&self, player: PlayerId) -> Option<&WonderAssignment> {
        self.assignments.get(player)
    }

    /// Wonders in table order, side A for everybody.
    pub fn assign_defaults(&mut self, players: usize) {
        self.assignments = (0..players)
            .map(|idx| WonderAssignment {
                wonder: WONDERS[idx % WONDERS.len()],
                side: WonderSide::A,
            })
            .collect();
    }

    /// Gives `wonder` to `player`; whoever held it receives the player's old
    /// wonder.
    pub fn change_wonder(&mut self, player: PlayerId, wonder: &str) -> Result<(), SetupError> {
        let wonder = wonder_by_name(wonder)?;
        let previous = self
            .assignments
            .get(player)
            .ok_or(SetupError::Index(player))?
            .wonder;
        if let Some(holder) = self
            .assignments
            .iter()
            .enumerate()
            .position(|(idx, a)| idx != player && a.wonder == wonder)
        {
            self.assignments[holder].wonder = previous;
        }
        self.assignments[player].wonder = wonder;
        Ok(())
    }

    pub fn toggle_side(&mut self, player: PlayerId) -> Result<(), SetupError> {
        let assignment = self
            .assignments
            .get_mut(player)
            .ok_or(SetupError::Index(player))?;
        assignment.side = assignment.side.flipped();
        Ok(())
    }

    /// Deals shuffled wonders to every seat and picks sides per `policy`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, policy: SidePolicy, rng: &mut R) {
        let shuffled = shuffle(&WONDERS, rng);
        for (idx, assignment) in self.assignments.iter_mut().enumerate() {
            let side = match policy {
                SidePolicy::AllA => WonderSide::A,
                SidePolicy::AllB => WonderSide::B,
                SidePolicy::Mixed => pick_one(&[WonderSide::A, WonderSide::B], rng)
                    .copied()
                    .unwrap_or(WonderSide::A),
            };
            *assignment = WonderAssignment {
                wonder: shuffled[idx % shuffled.len()],
                side,
            };
        }
    }
}

impl ScoredGame for SevenWonders {
    type Category = SevenWondersCategory;

    fn name(&self) -> &'static str {
        "7 Wonders"
    }

    fn categories(&self) -> &'static [Self::Category] {
        &SevenWondersCategory::ALL
    }

    fn player_range(&self) -> RangeInclusive<usize> {
        MIN_PLAYERS..=MAX_PLAYERS
    }

    fn reset_players(&mut self, players: &[Player]) {
        self.assign_defaults(players.len());
    }

    fn breakdown(&self, card: &PlayerCard<'_, Self::Category>) -> Vec<Points> {
        use SevenWondersCategory::*;
        vec![
            Points::new("Military", card.value(Military)),
            Points::new("Treasury", treasury_points(card.value(Treasury))),
            Points::new("Wonder", card.value(Wonder)),
            Points::new("Civilian", card.value(Civilian)),
            Points::new("Commercial", card.value(Commercial)),
            Points::new("Guild", card.value(Guild)),
            Points::new(
                "Science",
                scientific_score(
                    card.value(ScienceTablet),
                    card.value(ScienceGear),
                    card.value(ScienceCompass),
                    card.value(ScienceWildcard),
                ),
            ),
        ]
    }

    fn tie_break(&self, card: &PlayerCard<'_, Self::Category>) -> i64 {
        card.value(SevenWondersCategory::Treasury)
    }

    fn tie_break_details(&self, value: i64) -> String {
        format!("({value} coins)")
    }

    fn subtitle(&self, player: PlayerId) -> Option<String> {
        self.assignment(player).map(|a| a.wonder.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn science_known_values() {
        assert_eq!(scientific_score(0, 0, 0, 0), 0);
        assert_eq!(scientific_score(2, 2, 2, 0), 26);
        assert_eq!(scientific_score(1, 1, 1, 1), 13);
        assert_eq!(scientific_score(3, 0, 0, 0), 9);
        // Completing a set beats stacking: 1,1,0 + 1 wildcard.
        assert_eq!(scientific_score(1, 1, 0, 1), 10);
        assert_eq!(scientific_score(0, 0, 0, 2), 4);
        assert_eq!(scientific_score(1, 1, 1, -1), 0);
    }

    #[test]
    fn huge_wildcard_counts_are_clamped() {
        let capped = scientific_score(2, 1, 0, MAX_SCIENCE_WILDCARDS);
        assert_eq!(scientific_score(2, 1, 0, 1_000_000), capped);
        assert_eq!(scientific_score(0, 0, 0, i64::MAX), MAX_SCIENCE_WILDCARDS.pow(2));
    }

    #[test]
    fn treasury_rounds_down() {
        assert_eq!(treasury_points(0), 0);
        assert_eq!(treasury_points(2), 0);
        assert_eq!(treasury_points(8), 2);
        assert_eq!(treasury_points(9), 3);
        assert_eq!(treasury_points(-1), -1);
    }

    #[test]
    fn default_assignment_cycles_wonders() {
        let mut game = SevenWonders::new();
        game.assign_defaults(3);
        let names: Vec<_> = game.assignments().iter().map(|a| a.wonder).collect();
        assert_eq!(names, ["Rhódos", "Alexandria", "Éphesos"]);
        assert!(game.assignments().iter().all(|a| a.side == WonderSide::A));
    }

    #[test]
    fn change_wonder_swaps_with_holder() {
        let mut game = SevenWonders::new();
        game.assign_defaults(3);
        game.change_wonder(0, "Éphesos").expect("known wonder");
        assert_eq!(game.assignments()[0].wonder, "Éphesos");
        assert_eq!(game.assignments()[2].wonder, "Rhódos");
        game.change_wonder(1, "Gizah").expect("known wonder");
        assert_eq!(game.assignments()[1].wonder, "Gizah");
        assert!(game.change_wonder(1, "Atlantis").is_err());
        assert_eq!(game.change_wonder(5, "Gizah"), Err(SetupError::Index(5)));
    }
}
