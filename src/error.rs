use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The word holds a character outside `a..=z`.
    #[error("invalid character {ch:?} at byte {position} in {word:?}: only a-z are allowed")]
    InvalidCharacter {
        word: String,
        ch: char,
        position: usize,
    },

    #[error("empty word")]
    EmptyWord,

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn is_invalid_character(&self) -> bool {
        matches!(self, Error::InvalidCharacter { .. })
    }
}
