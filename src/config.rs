//! Score sheets stored as JSON.
//!
//! ```json
//! {
//!   "game": "7-wonders",
//!   "players": [{ "name": "Ada" }, { "name": "Bo", "color": "gold" }],
//!   "scores": { "military": ["3", "-1"], "treasury": ["7", "4"] },
//!   "wonders": ["Gizah", "Babylon"]
//! }
//! ```
//!
//! Categories that are left out stay at zero.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TallyError;
use crate::game::{ScoreSession, ScoredGame};
use crate::games::seven_wonders::{SevenWonders, wonder_by_name};
use crate::player::Player;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheetFile {
    #[serde(default)]
    pub game: Option<String>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub scores: BTreeMap<String, Vec<String>>,
    /// 7 Wonders only: wonder per player, in player order.
    #[serde(default)]
    pub wonders: Option<Vec<String>>,
}

impl ScoreSheetFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TallyError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let sheet = Self::from_json(&text)?;
        debug!(path = %path.display(), players = sheet.players.len(), "loaded score sheet");
        Ok(sheet)
    }

    pub fn from_json(text: &str) -> Result<Self, TallyError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Starts a session for `game` and copies every score column into it.
    pub fn into_session<G: ScoredGame>(&self, game: G) -> Result<ScoreSession<G>, TallyError> {
        let mut session = ScoreSession::new(game, self.players.clone())?;
        self.fill(&mut session)?;
        Ok(session)
    }

    pub fn fill<G: ScoredGame>(&self, session: &mut ScoreSession<G>) -> Result<(), TallyError> {
        for (key, column) in &self.scores {
            if column.len() != session.players().len() {
                return Err(TallyError::InvalidConfiguration(format!(
                    "category `{key}` has {} entries for {} players",
                    column.len(),
                    session.players().len()
                )));
            }
            let category = session.category_for_key(key)?;
            for (idx, entry) in column.iter().enumerate() {
                session.set_entry(category, idx, entry.as_str())?;
            }
        }
        Ok(())
    }

    /// Applies the optional wonder list to a 7 Wonders session.
    pub fn apply_wonders(&self, session: &mut ScoreSession<SevenWonders>) -> Result<(), TallyError> {
        let Some(wonders) = &self.wonders else {
            return Ok(());
        };
        if wonders.len() != session.players().len() {
            return Err(TallyError::InvalidConfiguration(format!(
                "{} wonders listed for {} players",
                wonders.len(),
                session.players().len()
            )));
        }
        let mut seen = Vec::with_capacity(wonders.len());
        for wonder in wonders {
            let wonder = wonder_by_name(wonder)?;
            if seen.contains(&wonder) {
                return Err(TallyError::InvalidConfiguration(format!(
                    "wonder `{wonder}` is listed more than once"
                )));
            }
            seen.push(wonder);
        }
        for (idx, wonder) in seen.into_iter().enumerate() {
            session.game_mut().change_wonder(idx, wonder)?;
        }
        Ok(())
    }
}
