//! Raw per-category score entries and their numeric coercion.

use std::collections::BTreeMap;
use std::fmt::Debug;

use tracing::trace;

use crate::error::TallyError;
use crate::player::PlayerId;

/// Textual zero every entry starts from.
pub const DEFAULT_ENTRY: &str = "0";

/// Coerces raw input to an integer.
///
/// Leading whitespace is skipped, an optional sign is accepted and the
/// longest run of ASCII digits that follows is used. Empty or non-numeric
/// input yields zero. Out-of-range values saturate.
pub fn parse_score(raw: &str) -> i64 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Ordered raw entries for one scoring category, one per player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    entries: Vec<String>,
}

impl ScoreLedger {
    pub fn new(players: usize) -> Self {
        let mut ledger = Self::default();
        ledger.reset(players);
        ledger
    }

    /// Replaces every entry with the textual zero. This is the only way the
    /// number of entries changes.
    pub fn reset(&mut self, players: usize) {
        self.entries = vec![DEFAULT_ENTRY.to_string(); players];
    }

    /// Stores `text` verbatim for the given player.
    pub fn set_entry(&mut self, index: PlayerId, text: impl Into<String>) -> Result<(), TallyError> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(TallyError::InvalidPlayer(index))?;
        *slot = text.into();
        Ok(())
    }

    pub fn entry(&self, index: PlayerId) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numeric value for one player; missing players count as zero.
    pub fn value(&self, index: PlayerId) -> i64 {
        self.entry(index).map(parse_score).unwrap_or(0)
    }

    /// Derived numeric values, recomputed from the current entries.
    pub fn numeric_values(&self) -> Vec<i64> {
        self.entries.iter().map(|entry| parse_score(entry)).collect()
    }
}

/// Scoring category of a particular game.
pub trait Category: Copy + Ord + Debug + 'static {
    /// Stable machine key, used by score sheets.
    fn key(self) -> &'static str;
    /// Human readable label.
    fn label(self) -> &'static str;
}

/// One ledger per category, all sized to the same player count.
#[derive(Clone, Debug)]
pub struct Ledgers<C: Category> {
    players: usize,
    ledgers: BTreeMap<C, ScoreLedger>,
}

impl<C: Category> Ledgers<C> {
    pub fn new(categories: &[C], players: usize) -> Self {
        let ledgers = categories
            .iter()
            .map(|category| (*category, ScoreLedger::new(players)))
            .collect();
        Self { players, ledgers }
    }

    pub fn players(&self) -> usize {
        self.players
    }

    /// Resizes every ledger, discarding all entries.
    pub fn reset(&mut self, players: usize) {
        self.players = players;
        for ledger in self.ledgers.values_mut() {
            ledger.reset(players);
        }
    }

    pub fn ledger(&self, category: C) -> Result<&ScoreLedger, TallyError> {
        self.ledgers
            .get(&category)
            .ok_or_else(|| TallyError::UnknownCategory(category.key().to_string()))
    }

    pub fn set_entry(
        &mut self,
        category: C,
        index: PlayerId,
        text: impl Into<String>,
    ) -> Result<(), TallyError> {
        let text = text.into();
        trace!(category = category.key(), index, %text, "score entry changed");
        self.ledgers
            .get_mut(&category)
            .ok_or_else(|| TallyError::UnknownCategory(category.key().to_string()))?
            .set_entry(index, text)
    }

    /// Numeric value of a category for one player; unknown categories count
    /// as zero.
    pub fn value(&self, category: C, index: PlayerId) -> i64 {
        self.ledgers
            .get(&category)
            .map(|ledger| ledger.value(index))
            .unwrap_or(0)
    }

    pub fn numeric_values(&self, category: C) -> Result<Vec<i64>, TallyError> {
        Ok(self.ledger(category)?.numeric_values())
    }

    /// Read-only view of one player's values across all categories.
    pub fn card(&self, index: PlayerId) -> PlayerCard<'_, C> {
        PlayerCard {
            ledgers: self,
            index,
        }
    }
}

/// One player's column of a score sheet.
#[derive(Clone, Copy, Debug)]
pub struct PlayerCard<'a, C: Category> {
    ledgers: &'a Ledgers<C>,
    index: PlayerId,
}

impl<C: Category> PlayerCard<'_, C> {
    pub fn value(&self, category: C) -> i64 {
        self.ledgers.value(category, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_score_is_permissive() {
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("0"), 0);
        assert_eq!(parse_score("07"), 7);
        assert_eq!(parse_score("abc"), 0);
        assert_eq!(parse_score("-4"), -4);
        assert_eq!(parse_score("+9"), 9);
        assert_eq!(parse_score("  12"), 12);
        assert_eq!(parse_score("12abc"), 12);
        assert_eq!(parse_score("-"), 0);
        assert_eq!(parse_score("3.9"), 3);
        assert_eq!(parse_score("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_score("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn reset_yields_zeros() {
        let ledger = ScoreLedger::new(4);
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.numeric_values(), vec![0, 0, 0, 0]);
        assert!(ledger.entries().iter().all(|entry| entry == DEFAULT_ENTRY));
    }

    #[test]
    fn set_entry_keeps_text_and_rederives() {
        let mut ledger = ScoreLedger::new(3);
        ledger.set_entry(0, "abc").expect("in range");
        ledger.set_entry(1, "07").expect("in range");
        ledger.set_entry(2, "").expect("in range");
        assert_eq!(ledger.entry(0), Some("abc"));
        assert_eq!(ledger.numeric_values(), vec![0, 7, 0]);
        ledger.set_entry(0, "5").expect("in range");
        assert_eq!(ledger.numeric_values()[0], 5);
    }

    #[test]
    fn set_entry_rejects_out_of_range() {
        let mut ledger = ScoreLedger::new(2);
        assert!(matches!(
            ledger.set_entry(2, "1"),
            Err(TallyError::InvalidPlayer(2))
        ));
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    enum Sample {
        Eggs,
        Coins,
    }

    impl Category for Sample {
        fn key(self) -> &'static str {
            match self {
                Sample::Eggs => "eggs",
                Sample::Coins => "coins",
            }
        }

        fn label(self) -> &'static str {
            self.key()
        }
    }

    #[test]
    fn keyed_ledgers_reset_together() {
        let mut ledgers = Ledgers::new(&[Sample::Eggs], 2);
        ledgers.set_entry(Sample::Eggs, 1, "4").expect("known category");
        assert_eq!(ledgers.card(1).value(Sample::Eggs), 4);
        assert!(matches!(
            ledgers.set_entry(Sample::Coins, 0, "1"),
            Err(TallyError::UnknownCategory(_))
        ));
        ledgers.reset(3);
        assert_eq!(ledgers.players(), 3);
        assert_eq!(ledgers.numeric_values(Sample::Eggs).expect("known"), vec![0, 0, 0]);
    }
}
