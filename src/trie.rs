//! Prefix tree over the 26 lowercase letters.
//!
//! Each node owns one child slot per letter. A node terminates a stored word
//! once its occurrence count is non-zero; the exact spelling is kept on that
//! node so lookups can hand back the canonical word without rebuilding it from
//! the path.

use crate::{letter_index, validate, Result, ALPHABET_LEN};

#[derive(Debug, Default)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET_LEN],
    count: usize,
    word: Option<String>,
}

impl Node {
    fn entry(&self) -> Option<Entry<'_>> {
        match (&self.word, self.count) {
            (Some(word), count) if count > 0 => Some(Entry {
                frequency: count,
                word,
            }),
            _ => None,
        }
    }
}

/// A stored word and how many times it was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub frequency: usize,
    pub word: &'a str,
}

/// Insert-only dictionary index.
///
/// Built once, then only read. Shared references are `Sync`, so a finished
/// index can serve lookups from any number of threads.
#[derive(Debug)]
pub struct PrefixIndex {
    root: Node,
    node_count: usize,
    word_count: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        PrefixIndex {
            root: Node::default(),
            node_count: 1,
            word_count: 0,
        }
    }

    /// Builds an index from `words`, stopping at the first rejected token.
    pub fn try_from_iter<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = PrefixIndex::new();
        for word in words {
            index.insert(word.as_ref())?;
        }
        Ok(index)
    }

    /// Records one occurrence of `word`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyWord`](crate::Error::EmptyWord) for `""` and
    /// [`Error::InvalidCharacter`](crate::Error::InvalidCharacter) when any
    /// character falls outside `a..=z`. The index is untouched on error.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        validate(word)?;

        let mut node = &mut self.root;
        // validated above, every byte is in b'a'..=b'z'
        for slot in word.bytes().map(|b| usize::from(b - b'a')) {
            node = &mut **node.children[slot].get_or_insert_with(|| {
                self.node_count += 1;
                Box::default()
            });
        }

        if node.count == 0 {
            node.word = Some(word.to_owned());
            self.word_count += 1;
        }
        node.count += 1;
        Ok(())
    }

    /// Returns the stored entry for `word`, or `None` if it was never inserted.
    ///
    /// # Errors
    ///
    /// Same input checks as [`PrefixIndex::insert`].
    pub fn lookup(&self, word: &str) -> Result<Option<Entry<'_>>> {
        validate(word)?;
        Ok(self.get(word))
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.lookup(word)?.is_some())
    }

    /// Occurrence count of `word`, 0 when absent.
    pub fn frequency(&self, word: &str) -> Result<usize> {
        Ok(self.lookup(word)?.map_or(0, |e| e.frequency))
    }

    /// Unchecked walk used for generated candidates. Any byte outside the
    /// alphabet simply ends the walk with `None`.
    pub(crate) fn get(&self, word: &str) -> Option<Entry<'_>> {
        let mut node = &self.root;
        for b in word.bytes() {
            node = node.children[letter_index(b)?].as_deref()?;
        }
        node.entry()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// All stored words in lexicographic order.
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![&self.root],
        }
    }
}

/// Depth-first iterator returned by [`PrefixIndex::words`].
pub struct Words<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Words<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // reversed so that 'a' is popped first
            self.stack
                .extend(node.children.iter().rev().filter_map(|c| c.as_deref()));
            if let Some(entry) = node.entry() {
                return Some(entry);
            }
        }
        None
    }
}
