//! Wyrmspan: guild and objective setup plus final scoring.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::SetupError;
use crate::game::{Points, ScoredGame};
use crate::ledger::{Category, PlayerCard};
use crate::random::{pick_many, pick_one};

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 5;

pub const PLAYER_COLORS: [&str; 5] = ["maroon", "gold", "darkgreen", "darkslateblue", "purple"];

/// Dragon guild boards with their display color.
pub const GUILDS: [(&str, &str); 4] = [
    ("Guild of Highlands", "#e1ad01"),
    ("Guild of Seafarers", "#5c6bc0"),
    ("Plains Guild", "#ff8a65"),
    ("Rainforest Guild", "#26a69a"),
];

/// Double-sided public objective tiles.
pub const OBJECTIVE_TILES: [[&str; 2]; 10] = [
    ["Aggressive Dragons", "Playful Dragons"],
    ["Cached Resources", "Position on Dragon Guild"],
    ["Cave Cards", "Dragons & cave cards in your Amethyst Abyss"],
    [
        "Dragons that have a printed cost of 0-2",
        "Dragons that have a printed cost of 3+",
    ],
    [
        "Dragons with \"When Played\" or \"Once Per Round\"",
        "Dragons with \"If Activated by Adventurer\"",
    ],
    [
        "Dragons & cave cards in your Crimson Cavern",
        "Dragons & cave cards in your Golden Grotto",
    ],
    ["Eggs", "Total egg storage capacity on your dragons"],
    ["Hatchlings", "Small Dragons"],
    ["Helpful Dragons", "Shy Dragons"],
    ["Large Dragons", "Medium Dragons"],
];

/// Objective tiles used per game.
pub const OBJECTIVES_PER_GAME: usize = 4;

/// Leftover items per victory point.
pub const EXCESS_ITEMS_PER_POINT: i64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WyrmspanCategory {
    DragonGuild,
    PrintedCard,
    EndGameAbility,
    Egg,
    CachedResource,
    TuckedCard,
    PublicObjective,
    ExcessCoin,
    ExcessResources,
    ExcessDragonCards,
    ExcessCaveCards,
    VisibleDragons,
}

impl WyrmspanCategory {
    pub const ALL: [Self; 12] = [
        Self::DragonGuild,
        Self::PrintedCard,
        Self::EndGameAbility,
        Self::Egg,
        Self::CachedResource,
        Self::TuckedCard,
        Self::PublicObjective,
        Self::ExcessCoin,
        Self::ExcessResources,
        Self::ExcessDragonCards,
        Self::ExcessCaveCards,
        Self::VisibleDragons,
    ];
}

impl Category for WyrmspanCategory {
    fn key(self) -> &'static str {
        match self {
            Self::DragonGuild => "dragon-guild",
            Self::PrintedCard => "printed-card",
            Self::EndGameAbility => "end-game-ability",
            Self::Egg => "egg",
            Self::CachedResource => "cached-resource",
            Self::TuckedCard => "tucked-card",
            Self::PublicObjective => "public-objective",
            Self::ExcessCoin => "excess-coin",
            Self::ExcessResources => "excess-resources",
            Self::ExcessDragonCards => "excess-dragon-cards",
            Self::ExcessCaveCards => "excess-cave-cards",
            Self::VisibleDragons => "visible-dragons",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::DragonGuild => "Dragon Guild",
            Self::PrintedCard => "Printed card points",
            Self::EndGameAbility => "End-game abilities",
            Self::Egg => "Eggs",
            Self::CachedResource => "Cached resources",
            Self::TuckedCard => "Tucked cards",
            Self::PublicObjective => "Public objectives",
            Self::ExcessCoin => "Excess coins",
            Self::ExcessResources => "Excess resources",
            Self::ExcessDragonCards => "Excess dragon cards",
            Self::ExcessCaveCards => "Excess cave cards",
            Self::VisibleDragons => "Visible dragons",
        }
    }
}

/// One point per four leftover resources, dragon cards and cave cards.
pub fn excess_items_score(resources: i64, dragon_cards: i64, cave_cards: i64) -> i64 {
    resources
        .saturating_add(dragon_cards)
        .saturating_add(cave_cards)
        .div_euclid(EXCESS_ITEMS_PER_POINT)
}

#[derive(Clone, Debug, Default)]
pub struct Wyrmspan {
    guild: Option<&'static str>,
    objectives: Vec<&'static str>,
}

impl Wyrmspan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guild(&self) -> Option<&'static str> {
        self.guild
    }

    pub fn objectives(&self) -> &[&'static str] {
        &self.objectives
    }

    pub fn select_guild(&mut self, name: &str) -> Result<(), SetupError> {
        let (guild, _) = GUILDS
            .iter()
            .find(|(guild, _)| guild.eq_ignore_ascii_case(name))
            .ok_or_else(|| SetupError::UnknownGuild(name.to_string()))?;
        self.guild = Some(*guild);
        Ok(())
    }

    pub fn pick_guild<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'static str> {
        self.guild = pick_one(&GUILDS, rng).map(|(guild, _)| *guild);
        self.guild
    }

    /// Draws four tiles and flips each to a random side.
    pub fn pick_objectives<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[&'static str] {
        let tiles = pick_many(&OBJECTIVE_TILES, OBJECTIVES_PER_GAME, rng);
        self.objectives = tiles
            .iter()
            .filter_map(|tile| pick_one(tile, rng).copied())
            .collect();
        &self.objectives
    }
}

impl ScoredGame for Wyrmspan {
    type Category = WyrmspanCategory;

    fn name(&self) -> &'static str {
        "Wyrmspan"
    }

    fn categories(&self) -> &'static [Self::Category] {
        &WyrmspanCategory::ALL
    }

    fn player_range(&self) -> RangeInclusive<usize> {
        MIN_PLAYERS..=MAX_PLAYERS
    }

    fn breakdown(&self, card: &PlayerCard<'_, Self::Category>) -> Vec<Points> {
        use WyrmspanCategory::*;
        vec![
            Points::new("Dragon Guild", card.value(DragonGuild)),
            Points::new("Printed cards", card.value(PrintedCard)),
            Points::new("End-game abilities", card.value(EndGameAbility)),
            Points::new("Eggs", card.value(Egg)),
            Points::new("Cached resources", card.value(CachedResource)),
            Points::new("Tucked cards", card.value(TuckedCard)),
            Points::new("Public objectives", card.value(PublicObjective)),
            Points::new("Excess coins", card.value(ExcessCoin)),
            Points::new(
                "Excess items",
                excess_items_score(
                    card.value(ExcessResources),
                    card.value(ExcessDragonCards),
                    card.value(ExcessCaveCards),
                ),
            ),
        ]
    }

    fn tie_break(&self, card: &PlayerCard<'_, Self::Category>) -> i64 {
        card.value(WyrmspanCategory::VisibleDragons)
    }

    fn tie_break_details(&self, value: i64) -> String {
        format!("({value} dragons)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn excess_items_round_down() {
        assert_eq!(excess_items_score(5, 2, 1), 2);
        assert_eq!(excess_items_score(3, 0, 0), 0);
        assert_eq!(excess_items_score(0, 0, 4), 1);
    }

    #[test]
    fn guild_selection_is_case_insensitive() {
        let mut game = Wyrmspan::new();
        game.select_guild("plains guild").expect("known guild");
        assert_eq!(game.guild(), Some("Plains Guild"));
        assert!(game.select_guild("Moon Guild").is_err());
    }

    #[test]
    fn objectives_come_from_distinct_tiles() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = Wyrmspan::new();
        let picked = game.pick_objectives(&mut rng).to_vec();
        assert_eq!(picked.len(), OBJECTIVES_PER_GAME);
        let mut tiles: Vec<usize> = picked
            .iter()
            .map(|side| {
                OBJECTIVE_TILES
                    .iter()
                    .position(|tile| tile.contains(side))
                    .expect("side belongs to a tile")
            })
            .collect();
        tiles.sort_unstable();
        tiles.dedup();
        assert_eq!(tiles.len(), OBJECTIVES_PER_GAME);
    }
}
