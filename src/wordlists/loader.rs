//! Word list loading utilities
//!
//! Reads raw word lists from files. Validation happens later, when the list
//! is turned into a `GameConfig`, so a bad entry is reported instead of being
//! silently dropped.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file
///
/// One word per line. Lines are trimmed; blank lines and lines starting with
/// `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse word list text into owned words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Convert the embedded string slice to owned words
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::words_from_slice;
/// use unscramble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let text = "# animals\nkoala\n\n  zebra  \n# more\nturtle\n";
        assert_eq!(parse_word_list(text), vec!["koala", "zebra", "turtle"]);
    }

    #[test]
    fn parse_keeps_invalid_entries_for_validation() {
        // Loader does not judge words; GameConfig does
        let text = "kotlin\nr2d2\na\n";
        assert_eq!(parse_word_list(text), vec!["kotlin", "r2d2", "a"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n# nothing\n").is_empty());
    }

    #[test]
    fn words_from_slice_copies_everything() {
        let words = words_from_slice(&["kotlin", "android"]);
        assert_eq!(words, vec!["kotlin", "android"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
