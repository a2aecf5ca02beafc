//! Word selection
//!
//! Picks a uniformly random word that has not been shown yet in this game.

use crate::core::Word;
use rand::Rng;
use rand::seq::IteratorRandom;
use rustc_hash::FxHashSet;

/// Random draws before scanning for the remaining unused words
pub const MAX_DRAW_ATTEMPTS: usize = 64;

/// Pick the index of a word not in `used`
///
/// Draws uniformly from the whole list and retries on a used word, up to
/// [`MAX_DRAW_ATTEMPTS`] times. After that it picks uniformly among the
/// unused words directly. Both paths are uniform over the unused words.
///
/// Returns `None` only when every word has been used.
pub fn pick_unused<R: Rng>(
    words: &[Word],
    used: &FxHashSet<usize>,
    rng: &mut R,
) -> Option<usize> {
    if used.len() >= words.len() {
        return None;
    }

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let index = rng.random_range(0..words.len());
        if !used.contains(&index) {
            return Some(index);
        }
    }

    tracing::warn!(
        used = used.len(),
        total = words.len(),
        "random draws kept hitting used words, picking from the remainder"
    );
    (0..words.len())
        .filter(|index| !used.contains(index))
        .choose(rng)
}
