//! Candidate generation.
//!
//! All generators return a [`BTreeSet`], so iteration is lexicographic and free
//! of duplicates. The corrector's tie-break depends on that order.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::ALPHABET;

/// Every string exactly one deletion, adjacent transposition, substitution or
/// insertion away from `word`.
///
/// Deletions are only produced for words longer than one character. The
/// substitution pass also re-creates `word` itself; it is kept, as it is
/// harmless once deduplicated.
pub fn edits1(word: &str) -> BTreeSet<String> {
    let mut edits = BTreeSet::new();
    let mut splits: Vec<(&str, &str)> = Vec::new();
    for (i, _) in word.char_indices() {
        splits.push(word.split_at(i));
    }
    splits.push((word, ""));

    // Deletes
    if word.chars().nth(1).is_some() {
        for (l, r) in &splits {
            let mut chars = r.chars();
            if chars.next().is_some() {
                edits.insert(format!("{}{}", l, chars.as_str()));
            }
        }
    }

    // Transposes
    for (l, r) in &splits {
        let mut chars = r.chars();
        if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
            edits.insert(format!("{}{}{}{}", l, b, a, chars.as_str()));
        }
    }

    // Replaces
    for (l, r) in &splits {
        let mut chars = r.chars();
        if chars.next().is_some() {
            let rest = chars.as_str();
            for c in ALPHABET.chars() {
                edits.insert(format!("{}{}{}", l, c, rest));
            }
        }
    }

    // Inserts
    for (l, r) in &splits {
        for c in ALPHABET.chars() {
            edits.insert(format!("{}{}{}", l, c, r));
        }
    }

    edits
}

/// One more round of [`edits1`] over each of `candidates`, merged.
///
/// This is edits-of-edits rather than an exact distance-2 enumeration: the
/// result also contains strings at distance 0 and 1 from the original word.
pub fn edits_of(candidates: &BTreeSet<String>) -> BTreeSet<String> {
    candidates.iter().flat_map(|e1| edits1(e1)).collect()
}

/// [`edits_of`] computed on the rayon pool. Same output.
pub fn par_edits_of(candidates: &BTreeSet<String>) -> BTreeSet<String> {
    candidates
        .par_iter()
        .flat_map_iter(|e1| edits1(e1))
        .collect()
}

pub fn edits2(word: &str) -> BTreeSet<String> {
    edits_of(&edits1(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits1_covers_each_operation() {
        let edits = edits1("cat");
        // deletion
        assert!(edits.contains("ct"));
        assert!(edits.contains("at"));
        // transposition
        assert!(edits.contains("act"));
        assert!(edits.contains("cta"));
        // substitution
        assert!(edits.contains("cot"));
        assert!(edits.contains("cat"));
        // insertion
        assert!(edits.contains("cats"));
        assert!(edits.contains("scat"));
        assert!(edits.contains("coat"));
    }

    #[test]
    fn edits1_size_for_three_letters() {
        // 3 deletes + 2 transposes + 78 replaces + 104 inserts, minus overlaps
        let edits = edits1("cat");
        let deletes = ["at", "ct", "ca"];
        let transposes = ["act", "cta"];
        assert!(deletes.iter().all(|d| edits.contains(*d)));
        assert!(transposes.iter().all(|t| edits.contains(*t)));
        assert!(edits.len() <= 3 + 2 + 78 + 104);
        assert!(edits.iter().all(|e| (2..=4).contains(&e.len())));
    }

    #[test]
    fn single_letter_has_no_deletion() {
        let edits = edits1("a");
        assert!(!edits.contains(""));
        // 26 substitutions + 26 * 2 insertions, "aa" counted once
        assert_eq!(edits.len(), 26 + 52 - 1);
    }

    #[test]
    fn empty_word_only_inserts() {
        let edits = edits1("");
        assert_eq!(edits.len(), 26);
        assert_eq!(edits.iter().next().map(String::as_str), Some("a"));
    }

    #[test]
    fn iteration_is_lexicographic() {
        let edits: Vec<String> = edits1("og").into_iter().collect();
        let mut sorted = edits.clone();
        sorted.sort();
        assert_eq!(edits, sorted);
        let bog = edits.iter().position(|e| e == "bog").unwrap();
        let dog = edits.iter().position(|e| e == "dog").unwrap();
        assert!(bog < dog);
    }

    #[test]
    fn edits2_reaches_two_edits_and_back() {
        let edits = edits2("hlo");
        assert!(edits.contains("hello"));
        assert!(edits.contains("hlo"));
    }

    #[test]
    fn parallel_expansion_matches_sequential() {
        let first = edits1("spel");
        assert_eq!(par_edits_of(&first), edits_of(&first));
    }
}
