//! Dictionary-backed spelling suggestions.
//!
//! Words are stored in a 26-way prefix tree together with the number of times
//! they occurred in the source word list. A query that is not itself a stored
//! word is corrected by generating every string one edit away (deletion,
//! adjacent transposition, substitution, insertion), then, if none of those is
//! known, every string one edit away from those. The most frequent known
//! candidate wins; among equally frequent candidates the lexicographically
//! smallest is chosen.
//!
//! ```ignore
//! use trie_spell::{LoadOptions, SpellCorrector};
//!
//! let corrector = SpellCorrector::from_file("words.txt", &LoadOptions::default())?;
//! assert_eq!(corrector.suggest("helo")?.as_deref(), Some("hello"));
//! ```

pub mod corrector;
pub mod edits;
pub mod error;
pub mod loader;
pub mod trie;

pub use corrector::{SpellCorrector, Stage, Suggestion};
pub use edits::{edits1, edits2};
pub use error::{Error, Result};
pub use loader::{load_file, load_tokens, LoadOptions};
pub use trie::{Entry, PrefixIndex};

/// The letters a dictionary word may contain, in index order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ALPHABET_LEN: usize = 26;

macro_rules! insert_prefix_str {
    ($filename:expr) => {
        if cfg!(feature = "onedir") {
            concat!("./", $filename)
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/", $filename)
        }
    };
}

/// Location of the word list bundled with the crate.
pub fn default_dictionary_path() -> String {
    insert_prefix_str!("words.txt").to_owned()
}

/// Slot of `b` in a node's child table, if it belongs to the alphabet.
#[inline]
pub(crate) fn letter_index(b: u8) -> Option<usize> {
    b.is_ascii_lowercase().then(|| usize::from(b - b'a'))
}

pub fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Checks that `word` is non-empty and uses only [`ALPHABET`] letters.
pub fn validate(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(Error::EmptyWord);
    }
    match word.char_indices().find(|&(_, c)| !is_alphabet_char(c)) {
        Some((position, ch)) => Err(Error::InvalidCharacter {
            word: word.to_owned(),
            ch,
            position,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_matches_letter_index() {
        assert_eq!(ALPHABET.len(), ALPHABET_LEN);
        for (i, b) in ALPHABET.bytes().enumerate() {
            assert_eq!(letter_index(b), Some(i));
        }
        assert_eq!(letter_index(b'A'), None);
        assert_eq!(letter_index(b'{'), None);
    }

    #[test]
    fn validate_rejects_outside_alphabet() {
        assert!(validate("hello").is_ok());
        assert!(matches!(validate(""), Err(Error::EmptyWord)));
        match validate("don't") {
            Err(Error::InvalidCharacter { ch, position, .. }) => {
                assert_eq!(ch, '\'');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(validate("Hello").is_err());
        assert!(validate("café").is_err());
    }

    #[test]
    fn bundled_dictionary_path_points_at_words_file() {
        assert!(default_dictionary_path().ends_with("words.txt"));
    }
}
