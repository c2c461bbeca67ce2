use log::{debug, info};

use crate::error::Result;
use crate::feedback::Response;
use crate::knowledge::Knowledge;
use crate::rank::{self, ALPHABET};
use crate::word::Word;

/// Where a session stands after the latest round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// This many candidates are still possible.
    Open(usize),

    /// Only one word fits, or every letter has been placed.
    Solved(Word),

    /// Nothing fits. Some feedback was probably entered wrong.
    Exhausted,
}

/// One game: what we know, and the words that still fit it.
#[derive(Debug, Clone)]
pub struct Session {
    knowledge: Knowledge,
    candidates: Vec<Word>,
}

impl Session {
    pub fn new(candidates: Vec<Word>) -> Self {
        info!("starting with {} candidates", candidates.len());
        Self {
            knowledge: Knowledge::new(),
            candidates,
        }
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn attempts(&self) -> usize {
        self.knowledge.attempts()
    }

    /// Letter histogram of the current candidates.
    pub fn letter_counts(&self) -> [usize; ALPHABET] {
        rank::letter_counts(&self.candidates)
    }

    /// Reorder the candidates best guess first, and return them with their scores.
    pub fn rank(&mut self) -> Vec<(Word, f64)> {
        rank::rank(&mut self.candidates, &self.knowledge);
        rank::scored(&self.candidates)
    }

    /// Apply one round of feedback and drop the candidates it rules out.
    pub fn apply_feedback(&mut self, guess: &Word, response: &str) -> Result<Status> {
        let response = response.parse::<Response>()?;
        Ok(self.apply_response(guess, &response))
    }

    pub fn apply_response(&mut self, guess: &Word, response: &Response) -> Status {
        debug!("round {}: {} {}", self.attempts() + 1, guess, response);
        self.knowledge.apply_response(guess, response);
        self.knowledge.filter_candidates(&mut self.candidates);
        self.status()
    }

    pub fn status(&self) -> Status {
        if let [only] = self.candidates[..] {
            return Status::Solved(only);
        }
        if self.knowledge.is_solved() {
            let placed = self
                .knowledge
                .placed_letters()
                .iter()
                .flatten()
                .collect::<String>();
            if let Ok(word) = Word::new(&placed) {
                return Status::Solved(word);
            }
        }
        if self.candidates.is_empty() {
            Status::Exhausted
        } else {
            Status::Open(self.candidates.len())
        }
    }
}
