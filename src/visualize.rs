use std::fmt::Write;

use crate::game::{BreakdownRow, ScoreResult};
use crate::player::Player;

/// Customize leaderboard rendering.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_subtitles: bool,
    pub show_details: bool,
    /// Winner on top instead of reveal order.
    pub winner_first: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_subtitles: true,
            show_details: true,
            winner_first: true,
        }
    }
}

pub fn render_leaderboard(results: &[ScoreResult]) -> String {
    render_leaderboard_with_options(results, VisualOptions::default())
}

pub fn render_leaderboard_with_options(results: &[ScoreResult], options: VisualOptions) -> String {
    let mut out = String::new();
    if results.is_empty() {
        let _ = writeln!(out, "No results yet.");
        return out;
    }
    let rows: Vec<&ScoreResult> = if options.winner_first {
        results.iter().rev().collect()
    } else {
        results.iter().collect()
    };
    let name_width = rows
        .iter()
        .map(|row| row.player_name.chars().count())
        .max()
        .unwrap_or(0);
    for row in rows {
        let mut line = format!(
            "{:>4}  {:<width$}  {:>4}",
            row.rank,
            row.player_name,
            row.score,
            width = name_width
        );
        if options.show_subtitles {
            if let Some(subtitle) = &row.subtitle {
                let _ = write!(line, "  [{subtitle}]");
            }
        }
        if options.show_details {
            if let Some(details) = &row.details {
                let _ = write!(line, "  {details}");
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// Per-line points table with a total row, one column per player.
pub fn render_breakdown(players: &[Player], rows: &[BreakdownRow], totals: &[i64]) -> String {
    let mut out = String::new();
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .chain(std::iter::once(5))
        .max()
        .unwrap_or(5);
    let column_width = players
        .iter()
        .map(|player| player.name.chars().count())
        .chain(std::iter::once(4))
        .max()
        .unwrap_or(4);

    let mut header = format!("{:<label_width$}", "");
    for player in players {
        let _ = write!(header, " | {:>column_width$}", player.name);
    }
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));
    for row in rows {
        let mut line = format!("{:<label_width$}", row.label);
        for value in &row.values {
            let _ = write!(line, " | {value:>column_width$}");
        }
        let _ = writeln!(out, "{line}");
    }
    let mut total_line = format!("{:<label_width$}", "Total");
    for total in totals {
        let _ = write!(total_line, " | {total:>column_width$}");
    }
    let _ = writeln!(out, "{total_line}");
    out
}
