//! Heat: Pedal to the Metal: track, weather and grid order setup.

use rand::Rng;
use serde::Serialize;

use crate::error::SetupError;
use crate::random::{pick_many, pick_one, shuffle};

pub const TRACKS: [&str; 6] = ["France", "Great Britain", "Italy", "Japan", "Mexico", "USA"];

pub const WEATHER_TOKENS: [&str; 6] = ["Sunny", "Overcast", "Showers", "Rain", "Snow", "Fog"];

pub const PLAYER_COLORS: [&str; 7] = ["Black", "Blue", "Green", "Orange", "Red", "Silver", "Yellow"];

/// Cars needed before the grid can be drawn.
pub const MIN_GRID_COLORS: usize = 2;

pub const ROAD_TOKENS_POOL: [&str; 12] = [
    "+1",
    "+1",
    "-1",
    "-1",
    "Overheat",
    "Overheat",
    "Slipstream boost",
    "Slipstream boost",
    "Heat control",
    "Heat control",
    "Weather",
    "Weather",
];

/// Road condition tokens placed on a track (one per corner).
pub fn road_condition_count(track: Option<&str>) -> usize {
    match track {
        Some("Italy") => 3,
        Some("USA") => 4,
        Some("Mexico") => 6,
        _ => 5,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeatherDraw {
    pub weather: &'static str,
    pub road_conditions: Vec<&'static str>,
}

#[derive(Clone, Debug, Default)]
pub struct HeatSetup {
    track: Option<&'static str>,
    weather_module: Option<bool>,
    weather: Option<WeatherDraw>,
    selected_colors: Vec<&'static str>,
    player_order: Vec<&'static str>,
}

impl HeatSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self) -> Option<&'static str> {
        self.track
    }

    pub fn weather_module(&self) -> Option<bool> {
        self.weather_module
    }

    pub fn weather(&self) -> Option<&WeatherDraw> {
        self.weather.as_ref()
    }

    pub fn selected_colors(&self) -> &[&'static str] {
        &self.selected_colors
    }

    pub fn player_order(&self) -> &[&'static str] {
        &self.player_order
    }

    pub fn select_track(&mut self, name: &str) -> Result<(), SetupError> {
        let track = TRACKS
            .iter()
            .find(|track| track.eq_ignore_ascii_case(name))
            .ok_or_else(|| SetupError::UnknownTrack(name.to_string()))?;
        self.track = Some(*track);
        Ok(())
    }

    pub fn pick_random_track<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'static str> {
        self.track = pick_one(&TRACKS, rng).copied();
        self.track
    }

    /// Decides on the weather module; when used, draws the weather token
    /// and the track's road condition tokens.
    pub fn choose_weather<R: Rng + ?Sized>(&mut self, use_module: bool, rng: &mut R) {
        self.weather_module = Some(use_module);
        self.weather = if use_module {
            Some(WeatherDraw {
                weather: pick_one(&WEATHER_TOKENS, rng).copied().unwrap_or_default(),
                road_conditions: pick_many(
                    &ROAD_TOKENS_POOL,
                    road_condition_count(self.track),
                    rng,
                ),
            })
        } else {
            None
        };
    }

    pub fn toggle_color(&mut self, color: &str) -> Result<(), SetupError> {
        let color = color_by_name(color)?;
        match self.selected_colors.iter().position(|c| *c == color) {
            Some(idx) => {
                self.selected_colors.remove(idx);
            }
            None => self.selected_colors.push(color),
        }
        self.player_order.clear();
        Ok(())
    }

    /// Adds `color` to the race; selecting it again is a no-op.
    pub fn select_color(&mut self, color: &str) -> Result<(), SetupError> {
        let color = color_by_name(color)?;
        if !self.selected_colors.contains(&color) {
            self.selected_colors.push(color);
            self.player_order.clear();
        }
        Ok(())
    }

    pub fn select_all_colors(&mut self, selected: bool) {
        self.selected_colors = if selected {
            PLAYER_COLORS.to_vec()
        } else {
            Vec::new()
        };
        self.player_order.clear();
    }

    /// Draws the starting grid. Needs at least [`MIN_GRID_COLORS`] cars.
    pub fn randomize_order<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[&'static str], SetupError> {
        if self.selected_colors.len() < MIN_GRID_COLORS {
            return Err(SetupError::TooFewColors {
                selected: self.selected_colors.len(),
                min: MIN_GRID_COLORS,
            });
        }
        self.player_order = shuffle(&self.selected_colors, rng);
        Ok(&self.player_order)
    }
}

fn color_by_name(name: &str) -> Result<&'static str, SetupError> {
    PLAYER_COLORS
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
        .ok_or_else(|| SetupError::UnknownColor(name.to_string()))
}
