//! Builds a [`PrefixIndex`] from a word list.
//!
//! Tokens are whitespace separated and may share lines. Each token is
//! lowercased before it is checked and inserted.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::trie::PrefixIndex;
use crate::{Error, Result};

/// Ingestion policy for [`load_tokens`] and [`load_file`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Skip tokens outside the alphabet instead of failing the load.
    pub skip_invalid: bool,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            skip_invalid: false,
            min_len: 1,
            max_len: usize::MAX,
        }
    }
}

impl LoadOptions {
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = len;
        self
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = len;
        self
    }

    fn keep(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min_len && len <= self.max_len
    }
}

pub fn load_tokens<I, S>(tokens: I, options: &LoadOptions) -> Result<PrefixIndex>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = PrefixIndex::new();
    let mut skipped = 0usize;

    for token in tokens {
        let word = token.as_ref().to_lowercase();
        if word.is_empty() || !options.keep(&word) {
            continue;
        }
        match index.insert(&word) {
            Ok(()) => {}
            Err(e) if options.skip_invalid && e.is_invalid_character() => {
                warn!("skipping dictionary token: {e}");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "loaded {} words ({} nodes, {} skipped)",
        index.word_count(),
        index.node_count(),
        skipped
    );
    Ok(index)
}

pub fn load_file<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<PrefixIndex> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_tokens(text.split_whitespace(), options)
}
