//! Setup helpers and score calculators for tabletop games.

pub mod config;
pub mod error;
pub mod game;
pub mod games;
pub mod ledger;
pub mod player;
pub mod random;
pub mod ranking;
pub mod visualize;

pub use crate::config::ScoreSheetFile;
pub use crate::error::{SetupError, TallyError};
pub use crate::game::{BreakdownRow, Points, ScoreResult, ScoreSession, ScoredGame};
pub use crate::games::{
    GameKind, HeatSetup, QuacksSetup, SevenWonders, SevenWondersCategory, Wyrmspan,
    WyrmspanCategory, normalize_game_name,
};
pub use crate::ledger::{Category, Ledgers, PlayerCard, ScoreLedger, parse_score};
pub use crate::player::{Player, PlayerId, PlayerSetup};
pub use crate::random::{pick_many, pick_one, random_int, shuffle};
pub use crate::ranking::{Rank, RankedStanding, Standing, rank_standings};
pub use crate::visualize::{VisualOptions, render_breakdown, render_leaderboard};
