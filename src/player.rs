use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::random::{pick_one, shuffle};

/// Zero-based index of a player within a session.
pub type PlayerId = usize;

/// A finalized player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Name shown for a player whose name was left blank.
pub fn default_name(index: PlayerId) -> String {
    format!("Player {}", index + 1)
}

fn effective_name(name: &str, index: PlayerId) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        default_name(index)
    } else {
        trimmed.to_string()
    }
}

/// Player entry step: names, optional colors, seat order.
#[derive(Clone, Debug)]
pub struct PlayerSetup {
    min_players: usize,
    max_players: usize,
    names: Vec<String>,
    colors: Vec<String>,
    palette: Option<Vec<String>>,
    first_player: Option<String>,
}

impl PlayerSetup {
    pub fn new(min_players: usize, max_players: usize) -> Result<Self, SetupError> {
        if min_players == 0 || min_players > max_players {
            return Err(SetupError::PlayerCount {
                count: min_players,
                min: 1,
                max: max_players,
            });
        }
        Ok(Self {
            min_players,
            max_players,
            names: vec![String::new(); min_players],
            colors: Vec::new(),
            palette: None,
            first_player: None,
        })
    }

    /// Enables color selection; the first colors of the palette are handed
    /// out to the current seats.
    pub fn with_palette<S: Into<String>>(mut self, palette: impl IntoIterator<Item = S>) -> Self {
        let palette: Vec<String> = palette.into_iter().map(Into::into).collect();
        self.colors = palette.iter().take(self.names.len()).cloned().collect();
        self.palette = Some(palette);
        self
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn first_player(&self) -> Option<&str> {
        self.first_player.as_deref()
    }

    pub fn set_count(&mut self, count: usize) -> Result<(), SetupError> {
        if !(self.min_players..=self.max_players).contains(&count) {
            return Err(SetupError::PlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            });
        }
        self.names.resize(count, String::new());
        if let Some(palette) = &self.palette {
            if count > self.colors.len() {
                let missing = count - self.colors.len();
                let unused: Vec<String> = palette
                    .iter()
                    .filter(|color| !self.colors.contains(color))
                    .take(missing)
                    .cloned()
                    .collect();
                self.colors.extend(unused);
            } else {
                self.colors.truncate(count);
            }
        }
        self.first_player = None;
        Ok(())
    }

    pub fn set_name(&mut self, index: PlayerId, name: impl Into<String>) -> Result<(), SetupError> {
        let slot = self.names.get_mut(index).ok_or(SetupError::Index(index))?;
        *slot = name.into();
        self.first_player = None;
        Ok(())
    }

    /// Assigns a palette color, swapping with whoever already holds it.
    pub fn set_color(&mut self, index: PlayerId, color: &str) -> Result<(), SetupError> {
        let palette = self
            .palette
            .as_ref()
            .ok_or_else(|| SetupError::UnknownColor(color.to_string()))?;
        if !palette.iter().any(|c| c == color) {
            return Err(SetupError::UnknownColor(color.to_string()));
        }
        if index >= self.colors.len() {
            return Err(SetupError::Index(index));
        }
        match self.colors.iter().position(|c| c == color) {
            Some(existing) => self.colors.swap(existing, index),
            None => self.colors[index] = color.to_string(),
        }
        Ok(())
    }

    pub fn remove_player(&mut self, index: PlayerId) -> Result<(), SetupError> {
        if self.names.len() <= self.min_players {
            return Err(SetupError::BelowMinimum(self.min_players));
        }
        if index >= self.names.len() {
            return Err(SetupError::Index(index));
        }
        self.names.remove(index);
        if index < self.colors.len() {
            self.colors.remove(index);
        }
        self.first_player = None;
        Ok(())
    }

    /// Shuffles seats, keeping each name with its color.
    pub fn randomize_order<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let seats: Vec<(String, Option<String>)> = self
            .names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), self.colors.get(idx).cloned()))
            .collect();
        let shuffled = shuffle(&seats, rng);
        self.names = shuffled.iter().map(|(name, _)| name.clone()).collect();
        if self.palette.is_some() {
            self.colors = shuffled
                .into_iter()
                .map(|(_, color)| color.unwrap_or_default())
                .collect();
        }
        self.first_player = None;
    }

    pub fn pick_first_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        let names: Vec<String> = self
            .names
            .iter()
            .enumerate()
            .map(|(idx, name)| effective_name(name, idx))
            .collect();
        self.first_player = pick_one(&names, rng).cloned();
        self.first_player.as_deref()
    }

    /// Finalizes the roster; blank names become `Player N`.
    pub fn finish(&self) -> Vec<Player> {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| Player {
                name: effective_name(name, idx),
                color: self.colors.get(idx).filter(|c| !c.is_empty()).cloned(),
            })
            .collect()
    }
}
