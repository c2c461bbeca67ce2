use std::cmp::{Ordering, Reverse};

use log::debug;

use crate::knowledge::Knowledge;
use crate::word::{letter_index, Word};

pub const ALPHABET: usize = 26;

/// How many times each letter a-z appears across all the words, in any position.
pub fn letter_counts(words: &[Word]) -> [usize; ALPHABET] {
    let mut counts = [0; ALPHABET];
    for word in words {
        for c in word.letters() {
            counts[letter_index(c)] += 1;
        }
    }
    counts
}

/// Letter counts scaled so the most common letter is 1.0. All zero for an empty list.
pub fn normalized_frequencies(words: &[Word]) -> [f64; ALPHABET] {
    let counts = letter_counts(words);
    let max = counts.iter().copied().max().unwrap_or(0);
    let mut freqs = [0.; ALPHABET];
    if max > 0 {
        for (f, &n) in freqs.iter_mut().zip(&counts) {
            *f = n as f64 / max as f64;
        }
    }
    freqs
}

/// Euclidean norm of the frequencies of the word's letters, each distinct letter counted once.
pub fn word_score(word: &Word, freqs: &[f64; ALPHABET]) -> f64 {
    word.distinct_letters()
        .into_iter()
        .map(|c| freqs[letter_index(c)].powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Sort the candidates so the ones that test the most common remaining letters come first.
///
/// Frequencies come from the candidates themselves, so the ranking adapts as the list shrinks.
/// The knowledge isn't consulted yet; ties keep their existing order.
pub fn rank(candidates: &mut [Word], _knowledge: &Knowledge) {
    let freqs = normalized_frequencies(candidates);
    candidates.sort_by_cached_key(|word| Reverse(Score(word_score(word, &freqs))));
    if let Some(best) = candidates.first() {
        debug!("best of {} candidates: {}", candidates.len(), best);
    }
}

/// Each candidate paired with its score, in the order given.
pub fn scored(candidates: &[Word]) -> Vec<(Word, f64)> {
    let freqs = normalized_frequencies(candidates);
    candidates
        .iter()
        .map(|word| (*word, word_score(word, &freqs)))
        .collect()
}

/// A score that can be used as a sort key.
#[derive(Debug, Clone, Copy)]
struct Score(f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| w.parse().unwrap()).collect()
    }

    #[test]
    fn test_letter_counts() {
        let counts = letter_counts(&words(&["sense", "panic"]));
        assert_eq!(counts[letter_index('s')], 2);
        assert_eq!(counts[letter_index('e')], 2);
        assert_eq!(counts[letter_index('n')], 2);
        assert_eq!(counts[letter_index('a')], 1);
        assert_eq!(counts[letter_index('z')], 0);
        assert_eq!(counts.iter().sum::<usize>(), 10);
        assert_eq!(letter_counts(&[]), [0; ALPHABET]);
    }

    #[test]
    fn test_normalized() {
        let freqs = normalized_frequencies(&words(&["rhino", "inset", "admin", "panic", "magic"]));
        // i is in all five words; n in four.
        assert_eq!(freqs[letter_index('i')], 1.0);
        assert_eq!(freqs[letter_index('n')], 0.8);
        assert_eq!(freqs[letter_index('z')], 0.0);
        assert!(freqs.iter().all(|f| (0.0..=1.0).contains(f)));
        assert_eq!(freqs.iter().filter(|&&f| f == 1.0).count(), 1);

        assert_eq!(normalized_frequencies(&[]), [0.; ALPHABET]);
    }

    #[test]
    fn test_normalized_ties() {
        let freqs = normalized_frequencies(&words(&["abcde", "fghij"]));
        assert_eq!(freqs.iter().filter(|&&f| f == 1.0).count(), 10);
    }

    #[test]
    fn test_repeated_letter_counts_once() {
        let list = words(&["sense", "tense"]);
        let freqs = normalized_frequencies(&list);
        // e: 4, s: 3, n: 2, t: 1
        assert_eq!(freqs[letter_index('s')], 0.75);
        assert_eq!(freqs[letter_index('n')], 0.5);

        let sense = word_score(&list[0], &freqs);
        assert!((sense - (0.75f64.powi(2) + 1. + 0.25).sqrt()).abs() < 1e-12);
        let doubled = (2. * 0.75f64.powi(2) + 2. + 0.25).sqrt();
        assert!(sense < doubled);
        assert!(sense < word_score(&list[1], &freqs));
    }

    #[test]
    fn test_rank() {
        let mut list = words(&["magic", "panic", "inset", "admin", "rhino"]);
        rank(&mut list, &Knowledge::new());
        let scores = scored(&list);
        assert!(scores.windows(2).all(|w| w[0].1 >= w[1].1));
        // i, n and a are the common letters here.
        let mut top = [list[0].as_str(), list[1].as_str()];
        top.sort_unstable();
        assert_eq!(top, ["admin", "panic"]);
        assert_eq!(list[4].as_str(), "magic");
    }

    #[test]
    fn test_rank_ties_keep_order() {
        let mut list = words(&["abcde", "edcba", "fghij", "jihgf"]);
        rank(&mut list, &Knowledge::new());
        assert_eq!(list, words(&["abcde", "edcba", "fghij", "jihgf"]));

        let mut empty: Vec<Word> = vec![];
        rank(&mut empty, &Knowledge::new());
        assert!(empty.is_empty());
    }
}
