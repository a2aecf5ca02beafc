//! Letter scrambling
//!
//! Produces a random permutation of a word that differs from the word itself.

use super::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle attempts before falling back to a rotation
///
/// For a word with two distinct letters out of n, a uniform shuffle hits the
/// identity with probability at most 1/2, so 16 misses in a row is rare.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 16;

/// Scramble the letters of a word
///
/// Shuffles until the result differs from the original, at most
/// [`MAX_SHUFFLE_ATTEMPTS`] times. If every attempt reproduces the word, the
/// letters are rotated left by one instead. A rotation only equals the
/// original when all letters are identical, which `Word` rules out.
///
/// # Examples
/// ```
/// use unscramble::core::{Word, scramble};
///
/// let word = Word::new("kotlin").unwrap();
/// let scrambled = scramble(&word, &mut rand::rng());
/// assert_ne!(scrambled, "kotlin");
/// assert_eq!(scrambled.len(), 6);
/// ```
pub fn scramble<R: Rng>(word: &Word, rng: &mut R) -> String {
    let original = word.text().as_bytes();
    let mut letters = original.to_vec();

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().map(char::from).collect();
        }
    }

    tracing::warn!(
        word = word.text(),
        attempts = MAX_SHUFFLE_ATTEMPTS,
        "shuffle kept returning the original word, rotating instead"
    );
    rotate_left(word)
}

/// Deterministic fallback: move the first letter to the end
fn rotate_left(word: &Word) -> String {
    let text = word.text();
    let mut rotated = String::with_capacity(text.len());
    rotated.push_str(&text[1..]);
    rotated.push_str(&text[..1]);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted_letters(s: &str) -> Vec<u8> {
        let mut bytes = s.as_bytes().to_vec();
        bytes.sort_unstable();
        bytes
    }

    #[test]
    fn scramble_differs_from_original() {
        let mut rng = StdRng::seed_from_u64(7);
        let word = Word::new("android").unwrap();

        for _ in 0..100 {
            let scrambled = scramble(&word, &mut rng);
            assert_ne!(scrambled, "android");
            assert_eq!(sorted_letters(&scrambled), sorted_letters("android"));
        }
    }

    #[test]
    fn scramble_two_letter_word_swaps() {
        // Only one distinct permutation exists
        let mut rng = StdRng::seed_from_u64(1);
        let word = Word::new("ox").unwrap();

        for _ in 0..50 {
            assert_eq!(scramble(&word, &mut rng), "xo");
        }
    }

    #[test]
    fn scramble_handles_repeated_letters() {
        let mut rng = StdRng::seed_from_u64(3);
        let word = Word::new("aab").unwrap();

        for _ in 0..50 {
            let scrambled = scramble(&word, &mut rng);
            assert!(scrambled == "aba" || scrambled == "baa", "got {scrambled}");
        }
    }

    #[test]
    fn scramble_is_deterministic_for_a_seed() {
        let word = Word::new("kaleidoscope").unwrap();
        let a = scramble(&word, &mut StdRng::seed_from_u64(42));
        let b = scramble(&word, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn rotate_left_moves_first_letter() {
        let word = Word::new("kotlin").unwrap();
        assert_eq!(rotate_left(&word), "otlink");

        let word = Word::new("abab").unwrap();
        assert_eq!(rotate_left(&word), "baba");
    }

    proptest! {
        #[test]
        fn scramble_is_a_different_permutation(text in "[a-z]{2,12}", seed in any::<u64>()) {
            let first = text.as_bytes()[0];
            prop_assume!(text.bytes().any(|b| b != first));

            let word = Word::new(text.clone()).unwrap();
            let scrambled = scramble(&word, &mut StdRng::seed_from_u64(seed));

            prop_assert_ne!(&scrambled, &text);
            prop_assert_eq!(sorted_letters(&scrambled), sorted_letters(&text));
        }

        #[test]
        fn rotation_differs_for_valid_words(text in "[a-z]{2,12}") {
            let first = text.as_bytes()[0];
            prop_assume!(text.bytes().any(|b| b != first));

            let word = Word::new(text.clone()).unwrap();
            prop_assert_ne!(rotate_left(&word), text);
        }
    }
}
