use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};

use crate::error::Result;
use crate::feedback::{Code, Response};
use crate::word::Word;
use crate::WORD_LEN;

/// Represents everything learned about the hidden word so far.
#[derive(Debug, Clone, Default)]
pub struct Knowledge {
    /// How many rounds of feedback have been applied.
    attempts: usize,

    /// Letters that don't appear anywhere in the word.
    absent: BTreeSet<char>,

    /// Letters known to be in the word but not yet placed. A `false` flag means the letter is not
    /// at that position.
    present: HashMap<char, [bool; WORD_LEN]>,

    /// Letters known to be at exactly that position.
    placed: [Option<char>; WORD_LEN],
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn absent_letters(&self) -> &BTreeSet<char> {
        &self.absent
    }

    pub fn present_constraints(&self) -> &HashMap<char, [bool; WORD_LEN]> {
        &self.present
    }

    pub fn placed_letters(&self) -> &[Option<char>; WORD_LEN] {
        &self.placed
    }

    /// True once every position has a placed letter.
    pub fn is_solved(&self) -> bool {
        self.placed.iter().all(Option::is_some)
    }

    /// Parse `response` and apply it along with `guess`. If the response doesn't parse, nothing
    /// is changed.
    pub fn apply_feedback(&mut self, guess: &Word, response: &str) -> Result<()> {
        let response = response.parse::<Response>()?;
        self.apply_response(guess, &response);
        Ok(())
    }

    /// Fold one round of feedback into what we know, left to right.
    ///
    /// A green tile drops any yellow-tile bookkeeping for its letter. With a doubled letter, a
    /// yellow to the right of the green re-creates it, but one to the left is lost, so double
    /// letters can end up less constrained than they could be.
    ///
    /// A gray tile only marks its letter absent if the letter isn't green or yellow elsewhere in
    /// the same guess, and isn't already known to be in the word. Otherwise it just means the
    /// letter isn't at that position.
    pub fn apply_response(&mut self, guess: &Word, response: &Response) {
        let codes = response.codes();
        for (idx, (c, code)) in guess.letters().zip(codes).enumerate() {
            match code {
                Code::Absent => {
                    let found_elsewhere = guess
                        .letters()
                        .zip(codes)
                        .any(|(x, &other)| x == c && other != Code::Absent);
                    if let Some(allowed) = self.present.get_mut(&c) {
                        allowed[idx] = false;
                        debug!("{} is present, but not at {}", c, idx + 1);
                    } else if found_elsewhere || self.placed.contains(&Some(c)) {
                        debug!("{} is in the word, but not at {}", c, idx + 1);
                    } else if self.absent.insert(c) {
                        debug!("{} is absent", c);
                    }
                }
                Code::WrongPosition => {
                    self.present.entry(c).or_insert([true; WORD_LEN])[idx] = false;
                    debug!("{} is present, but not at {}", c, idx + 1);
                }
                Code::Correct => {
                    self.placed[idx] = Some(c);
                    if self.present.remove(&c).is_some() {
                        debug!("{} placed at {}; dropping its other exclusions", c, idx + 1);
                    } else {
                        debug!("{} placed at {}", c, idx + 1);
                    }
                }
            }
        }
        self.attempts += 1;
    }

    /// Whether `word` is still a possible answer.
    pub fn check_word(&self, word: &Word) -> bool {
        for (i, c) in word.letters().enumerate() {
            if self.absent.contains(&c) {
                trace!("{}: contains absent letter {}", word, c);
                return false;
            }
            if let Some(p) = self.placed[i] {
                if p != c {
                    trace!("{}: {} at {} should be {}", word, c, i + 1, p);
                    return false;
                }
            }
        }

        for (&c, allowed) in &self.present {
            if !word.contains(c) {
                trace!("{}: lacks required letter {}", word, c);
                return false;
            }
            if let Some(i) = (0..WORD_LEN).find(|&i| !allowed[i] && word.letter(i) == c) {
                trace!("{}: {} can't be at {}", word, c, i + 1);
                return false;
            }
        }

        true
    }

    /// Remove every candidate that no longer fits. Survivors keep their order.
    pub fn filter_candidates(&self, candidates: &mut Vec<Word>) {
        let before = candidates.len();
        candidates.retain(|word| self.check_word(word));
        debug!("filtered {} candidates down to {}", before, candidates.len());
    }
}
