//! The Quacks of Quedlinburg: ingredient book and expansion setup.

use rand::Rng;
use serde::Serialize;

use crate::random::{pick_many, pick_one, random_int};

pub const HERB_WITCHES_SILVER: [&str; 4] = [
    "Use your flask after your pot explodes.",
    "Draw 6 chips and decide what order to place them in.",
    "If your pot has not exploded yet, you can return the last 2 white chips placed to the bag.",
    "Receive the full bonus even though your pot exploded.",
];

pub const HERB_WITCHES_BRONZE: [&str; 4] = [
    "Exchange your last 2 chips placed or one placed of your choice for the next higher chip of the same color.",
    "You can shop for twice the value.",
    "Take 1 of your chips you just purchased a second time for free.",
    "For every ruby in your possession, your purchase value increases by 2.",
];

pub const HERB_WITCHES_GOLD: [&str; 4] = [
    "According to the number of different chip colors in the pot, you receive the following victory points.",
    "Empty out your bag.",
    "Instead of just one ruby, take as many rubies as you have victory points.",
    "In this round, the price for moving the droplet and filling the flask is 1 ruby each.",
];

pub const ESSENCES: [&str; 8] = [
    "Nervousness",
    "Ear worm",
    "Carrot nose",
    "Wing ears",
    "Chicken eyes",
    "Witch's hump",
    "Forgetfulness",
    "Vampirism",
];

/// Ingredient colors that get a book when books are mixed.
pub const BOOK_COLORS: [&str; 5] = ["Blue", "Red", "Yellow", "Green", "Purple"];

pub const BASE_BOOK_SETS: i64 = 4;
pub const HERB_WITCHES_BOOK_SETS: i64 = 6;
pub const ALCHEMIST_ESSENCES: usize = 3;

/// Chosen ingredient books.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum BookSelection {
    /// One numbered set for every ingredient.
    Set(i64),
    /// A book number per ingredient color.
    Mixed(Vec<(&'static str, i64)>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HerbWitchDraw {
    pub silver: &'static str,
    pub bronze: &'static str,
    pub gold: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionDraw {
    pub herb_witches: Option<HerbWitchDraw>,
    pub essences: Option<Vec<&'static str>>,
}

/// Expansion switches for a Quacks setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuacksSetup {
    pub herb_witches: bool,
    pub alchemists: bool,
    pub mix_and_match: bool,
}

impl QuacksSetup {
    pub fn max_book_set(&self) -> i64 {
        if self.herb_witches {
            HERB_WITCHES_BOOK_SETS
        } else {
            BASE_BOOK_SETS
        }
    }

    pub fn randomize_books<R: Rng + ?Sized>(&self, rng: &mut R) -> BookSelection {
        let max = self.max_book_set();
        if !self.mix_and_match {
            return BookSelection::Set(random_int(1, max, rng));
        }
        let mut books: Vec<(&'static str, i64)> = BOOK_COLORS
            .iter()
            .map(|color| (*color, random_int(1, max, rng)))
            .collect();
        if self.herb_witches {
            books.push(("Locoweed", random_int(1, 6, rng)));
            books.push(("Black", random_int(1, 3, rng)));
        } else {
            books.push(("Black", 1));
        }
        BookSelection::Mixed(books)
    }

    pub fn randomize_expansions<R: Rng + ?Sized>(&self, rng: &mut R) -> ExpansionDraw {
        let herb_witches = if self.herb_witches {
            let mut draw = |cards: &[&'static str]| pick_one(cards, rng).copied().unwrap_or_default();
            Some(HerbWitchDraw {
                silver: draw(&HERB_WITCHES_SILVER),
                bronze: draw(&HERB_WITCHES_BRONZE),
                gold: draw(&HERB_WITCHES_GOLD),
            })
        } else {
            None
        };
        let essences = self
            .alchemists
            .then(|| pick_many(&ESSENCES, ALCHEMIST_ESSENCES, rng));
        ExpansionDraw {
            herb_witches,
            essences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn base_game_uses_single_set_up_to_four() {
        let mut rng = StdRng::seed_from_u64(2);
        let setup = QuacksSetup::default();
        for _ in 0..50 {
            match setup.randomize_books(&mut rng) {
                BookSelection::Set(n) => assert!((1..=4).contains(&n)),
                other => panic!("unexpected selection {other:?}"),
            }
        }
    }

    #[test]
    fn mixed_books_without_herb_witches_fix_black() {
        let mut rng = StdRng::seed_from_u64(4);
        let setup = QuacksSetup {
            mix_and_match: true,
            ..QuacksSetup::default()
        };
        let BookSelection::Mixed(books) = setup.randomize_books(&mut rng) else {
            panic!("expected mixed books");
        };
        assert_eq!(books.len(), 6);
        assert_eq!(books.last(), Some(&("Black", 1)));
        assert!(books[..5].iter().all(|(_, n)| (1..=4).contains(n)));
    }

    #[test]
    fn herb_witches_add_locoweed_and_wider_ranges() {
        let mut rng = StdRng::seed_from_u64(8);
        let setup = QuacksSetup {
            herb_witches: true,
            mix_and_match: true,
            ..QuacksSetup::default()
        };
        let BookSelection::Mixed(books) = setup.randomize_books(&mut rng) else {
            panic!("expected mixed books");
        };
        assert_eq!(books.len(), 7);
        let black = books.iter().find(|(color, _)| *color == "Black").expect("black book");
        assert!((1..=3).contains(&black.1));
        assert!(books.iter().any(|(color, _)| *color == "Locoweed"));
    }

    #[test]
    fn expansions_only_draw_when_enabled() {
        let mut rng = StdRng::seed_from_u64(12);
        assert_eq!(
            QuacksSetup::default().randomize_expansions(&mut rng),
            ExpansionDraw::default()
        );
        let draw = QuacksSetup {
            herb_witches: true,
            alchemists: true,
            mix_and_match: false,
        }
        .randomize_expansions(&mut rng);
        let witches = draw.herb_witches.expect("herb witches drawn");
        assert!(HERB_WITCHES_GOLD.contains(&witches.gold));
        assert_eq!(draw.essences.map(|e| e.len()), Some(ALCHEMIST_ESSENCES));
    }
}
