use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::WORD_LEN;

/// A validated word: exactly five lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Validate and lowercase `text`.
    pub fn new(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != WORD_LEN || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(Error::MalformedWord(text.to_owned()));
        }
        let mut letters = [0; WORD_LEN];
        for (dst, src) in letters.iter_mut().zip(bytes) {
            *dst = src.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&b| char::from(b))
    }

    /// Letter at position `idx` (0-based).
    pub fn letter(&self, idx: usize) -> char {
        char::from(self.0[idx])
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters().any(|x| x == c)
    }

    /// The word's letters with repeats removed, in sorted order.
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut letters = self.letters().collect::<Vec<_>>();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters ever get in.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of a lowercase letter in `a..=z`.
pub(crate) fn letter_index(c: char) -> usize {
    (c as u8 - b'a') as usize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() -> Result<()> {
        let w = Word::new("Panic")?;
        assert_eq!(w.as_str(), "panic");
        assert_eq!(w.letter(4), 'c');
        assert!(w.contains('n'));
        assert!(!w.contains('z'));
        Ok(())
    }

    #[test]
    fn test_malformed() {
        for bad in ["", "four", "toolong", "sh0rt", "can't", "naïve"] {
            assert!(
                matches!(Word::new(bad), Err(Error::MalformedWord(ref s)) if s == bad),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_distinct_letters() -> Result<()> {
        assert_eq!("sense".parse::<Word>()?.distinct_letters(), vec!['e', 'n', 's']);
        assert_eq!("admin".parse::<Word>()?.distinct_letters().len(), 5);
        Ok(())
    }
}
