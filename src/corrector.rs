use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use crate::edits::{edits1, edits_of, par_edits_of};
use crate::loader::{load_file, LoadOptions};
use crate::trie::{Entry, PrefixIndex};
use crate::{validate, Result};

/// Which search round produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The query is itself a dictionary word.
    ExactMatch,
    Distance1,
    /// Found among the edits of the one-edit candidates.
    Distance2,
}

/// A dictionary word proposed for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub frequency: usize,
    pub stage: Stage,
}

impl Suggestion {
    fn from_entry(entry: Entry<'_>, stage: Stage) -> Self {
        Suggestion {
            word: entry.word.to_owned(),
            frequency: entry.frequency,
            stage,
        }
    }
}

/// Suggests the most frequent dictionary word within two rounds of edits.
pub struct SpellCorrector {
    index: PrefixIndex,
    parallel: bool,
}

impl SpellCorrector {
    pub fn new(index: PrefixIndex) -> Self {
        SpellCorrector {
            index,
            parallel: false,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        Ok(Self::new(load_file(path, options)?))
    }

    /// Run candidate expansion and ranking on the rayon pool. Results are the
    /// same as the sequential scan.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn is_known(&self, word: &str) -> Result<bool> {
        self.index.contains(word)
    }

    /// Best dictionary word for `input`, or `None` when nothing is within
    /// reach. `input` is lowercased first; an empty query yields `None`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`](crate::Error::InvalidCharacter) when the
    /// lowercased query holds anything besides `a..=z`.
    pub fn suggest(&self, input: &str) -> Result<Option<String>> {
        Ok(self.suggest_with_stage(input)?.map(|s| s.word))
    }

    /// Like [`SpellCorrector::suggest`], keeping frequency and stage.
    pub fn suggest_with_stage(&self, input: &str) -> Result<Option<Suggestion>> {
        let word = input.to_lowercase();
        if word.is_empty() {
            return Ok(None);
        }
        validate(&word)?;

        if let Some(entry) = self.index.get(&word) {
            debug!("{word:?} is a dictionary word");
            return Ok(Some(Suggestion::from_entry(entry, Stage::ExactMatch)));
        }

        let start = Instant::now();
        let first = edits1(&word);
        let best = self.best_known(&first);
        debug!(
            "distance 1: {} candidates for {word:?} in {:?}",
            first.len(),
            start.elapsed()
        );
        if let Some(entry) = best {
            return Ok(Some(Suggestion::from_entry(entry, Stage::Distance1)));
        }

        let start = Instant::now();
        let second = if self.parallel {
            par_edits_of(&first)
        } else {
            edits_of(&first)
        };
        let best = self.best_known(&second);
        debug!(
            "distance 2: {} candidates for {word:?} in {:?}",
            second.len(),
            start.elapsed()
        );

        Ok(best.map(|entry| Suggestion::from_entry(entry, Stage::Distance2)))
    }

    /// Highest-frequency known candidate; ties go to the lexicographically
    /// smallest word.
    fn best_known(&self, candidates: &BTreeSet<String>) -> Option<Entry<'_>> {
        if self.parallel {
            return candidates
                .par_iter()
                .filter_map(|c| self.index.get(c))
                .max_by(|a, b| {
                    a.frequency
                        .cmp(&b.frequency)
                        .then_with(|| b.word.cmp(a.word))
                });
        }

        let mut best: Option<Entry<'_>> = None;
        for entry in candidates.iter().filter_map(|c| self.index.get(c)) {
            // strict: an equal count keeps the earlier, smaller word
            if best.map_or(true, |b| entry.frequency > b.frequency) {
                best = Some(entry);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector(words: &[(&str, usize)]) -> SpellCorrector {
        let tokens = words
            .iter()
            .flat_map(|&(w, n)| std::iter::repeat(w).take(n));
        SpellCorrector::new(PrefixIndex::try_from_iter(tokens).unwrap())
    }

    #[test]
    fn exact_match_short_circuits() {
        let c = corrector(&[("cat", 5), ("cot", 2)]);
        let s = c.suggest_with_stage("cot").unwrap().unwrap();
        assert_eq!(s.word, "cot");
        assert_eq!(s.frequency, 2);
        assert_eq!(s.stage, Stage::ExactMatch);
    }

    #[test]
    fn input_is_lowercased() {
        let c = corrector(&[("hello", 1)]);
        assert_eq!(c.suggest("HeLLo").unwrap().as_deref(), Some("hello"));
        assert_eq!(c.suggest("HELO").unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn empty_query_has_no_suggestion() {
        let c = corrector(&[("a", 1)]);
        assert_eq!(c.suggest("").unwrap(), None);
    }

    #[test]
    fn invalid_query_is_an_error() {
        let c = corrector(&[("a", 1)]);
        assert!(c.suggest("a1").unwrap_err().is_invalid_character());
        assert!(c.suggest("it's").unwrap_err().is_invalid_character());
    }

    #[test]
    fn frequency_beats_order() {
        let c = corrector(&[("bat", 1), ("cat", 5)]);
        let s = c.suggest_with_stage("xat").unwrap().unwrap();
        assert_eq!(s.word, "cat");
        assert_eq!(s.stage, Stage::Distance1);
    }

    #[test]
    fn tie_prefers_smaller_word() {
        let c = corrector(&[("dog", 3), ("bog", 3)]);
        assert_eq!(c.suggest("og").unwrap().as_deref(), Some("bog"));
        let c = c.parallel(true);
        assert_eq!(c.suggest("og").unwrap().as_deref(), Some("bog"));
    }

    #[test]
    fn falls_back_to_second_round() {
        let c = corrector(&[("hello", 1)]);
        let s = c.suggest_with_stage("hllo").unwrap().unwrap();
        assert_eq!(s.stage, Stage::Distance1);
        let s = c.suggest_with_stage("hlo").unwrap().unwrap();
        assert_eq!(s.word, "hello");
        assert_eq!(s.stage, Stage::Distance2);
    }

    #[test]
    fn nothing_within_two_edits() {
        let c = corrector(&[("dictionary", 4)]);
        assert_eq!(c.suggest("zzz").unwrap(), None);
        assert_eq!(c.parallel(true).suggest("zzz").unwrap(), None);
    }
}
