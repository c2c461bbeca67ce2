//! Helper for five-letter word guessing games: keeps track of the feedback from each guess,
//! narrows down the word list, and ranks what's left by how informative it would be to guess.

pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod knowledge;
pub mod rank;
pub mod report;
pub mod session;
pub mod word;

pub use error::{Error, Result};
pub use feedback::{parse_round, Code, Response};
pub use knowledge::Knowledge;
pub use session::{Session, Status};
pub use word::Word;

/// Letters in every word.
pub const WORD_LEN: usize = 5;
