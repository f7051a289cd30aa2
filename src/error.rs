use thiserror::Error;

use crate::player::PlayerId;

/// Errors that can occur when driving a setup wizard or a scoring session.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("category `{0}` is not scored in this game")]
    UnknownCategory(String),
    #[error("unknown game: {0}")]
    UnknownGame(String),
    #[error("invalid setup: {0}")]
    InvalidSetup(#[from] SetupError),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to read score sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse score sheet: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Details of rejected setup choices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("player count {count} is outside {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error("setup index {0} is out of range")]
    Index(usize),
    #[error("cannot remove a player below the minimum of {0}")]
    BelowMinimum(usize),
    #[error("unknown wonder: {0}")]
    UnknownWonder(String),
    #[error("unknown guild: {0}")]
    UnknownGuild(String),
    #[error("unknown track: {0}")]
    UnknownTrack(String),
    #[error("unknown color: {0}")]
    UnknownColor(String),
    #[error("{selected} colors selected, at least {min} needed")]
    TooFewColors { selected: usize, min: usize },
}
