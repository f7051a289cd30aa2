//! Random picks used by the setup wizards.
//!
//! Every helper draws from a caller-supplied RNG so that setups can be
//! replayed from a seed. Scoring never touches these.

use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one item uniformly, or `None` when `items` is empty.
pub fn pick_one<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Returns a uniformly shuffled copy of `items` (Fisher-Yates).
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Samples `count` items without replacement. `count` is clamped to the
/// number of available items.
pub fn pick_many<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut picked = shuffle(items, rng);
    picked.truncate(count);
    picked
}

/// Uniform integer in `min..=max`. Reversed bounds are swapped.
pub fn random_int<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}
