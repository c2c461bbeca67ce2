use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::word::Word;
use crate::WORD_LEN;

/// Feedback for one letter tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Gray: the letter isn't in the word.
    Absent,

    /// Yellow: the letter is in the word, but not here.
    WrongPosition,

    /// Green: the letter is right where it is.
    Correct,
}

impl Code {
    /// Parse a single code character, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' | 'x' | '0' | '-' | '.' | '!' => Some(Code::Absent),
            'y' | '1' | '?' => Some(Code::WrongPosition),
            'g' | '2' | '*' => Some(Code::Correct),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Code::Absent => 'b',
            Code::WrongPosition => 'y',
            Code::Correct => 'g',
        }
    }
}

/// The five codes the game gave back for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response(pub [Code; WORD_LEN]);

impl Response {
    pub fn codes(&self) -> &[Code; WORD_LEN] {
        &self.0
    }

    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&c| c == Code::Correct)
    }
}

impl FromStr for Response {
    type Err = Error;

    /// Every character is checked before anything is returned, so a bad code anywhere rejects the
    /// whole response.
    fn from_str(s: &str) -> Result<Self> {
        let count = s.chars().count();
        if count != WORD_LEN {
            return Err(Error::InvalidResponseLength(count));
        }
        let mut codes = [Code::Absent; WORD_LEN];
        for (i, (slot, c)) in codes.iter_mut().zip(s.chars()).enumerate() {
            *slot = Code::from_char(c).ok_or(Error::InvalidResponse { code: c, position: i + 1 })?;
        }
        Ok(Self(codes))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{}", code.to_char())?;
        }
        Ok(())
    }
}

/// Parse one round of input: either `"<guess> <response>"` (e.g. `"rhino bbyyb"`), or letters
/// each prefixed with its code symbol: green=*, yellow=?, gray=! (e.g. `"!r!h?i?n!o"`, spaces
/// between letters allowed).
pub fn parse_round(inp: &str) -> Result<(Word, Response)> {
    let tokens = inp.split_whitespace().collect::<Vec<_>>();
    match tokens[..] {
        [] => Err(Error::MalformedRound(inp.to_owned())),
        [guess, response] if guess.chars().count() == WORD_LEN => {
            Ok((guess.parse()?, response.parse()?))
        }
        _ => parse_annotated(&tokens.concat(), inp),
    }
}

fn parse_annotated(annotated: &str, inp: &str) -> Result<(Word, Response)> {
    let chars = annotated.chars().collect::<Vec<_>>();
    if chars.len() != WORD_LEN * 2 {
        return Err(Error::MalformedRound(inp.to_owned()));
    }
    let mut guess = String::with_capacity(WORD_LEN);
    let mut codes = [Code::Absent; WORD_LEN];
    for (i, pair) in chars.chunks(2).enumerate() {
        let (flag, letter) = (pair[0], pair[1]);
        codes[i] = Code::from_char(flag).ok_or(Error::InvalidResponse { code: flag, position: i + 1 })?;
        guess.push(letter);
    }
    Ok((guess.parse()?, Response(codes)))
}

#[cfg(test)]
mod test {
    use super::*;
    use Code::*;

    #[test]
    fn test_parse_response() -> Result<()> {
        assert_eq!(
            "bbyyb".parse::<Response>()?,
            Response([Absent, Absent, WrongPosition, WrongPosition, Absent])
        );
        assert_eq!("GgYyX".parse::<Response>()?, Response([Correct, Correct, WrongPosition, WrongPosition, Absent]));
        assert_eq!("21000".parse::<Response>()?, "gybbb".parse::<Response>()?);
        assert!("ggggg".parse::<Response>()?.is_solved());
        Ok(())
    }

    #[test]
    fn test_bad_response() {
        assert!(matches!("bbyy".parse::<Response>(), Err(Error::InvalidResponseLength(4))));
        assert!(matches!("bbyyyy".parse::<Response>(), Err(Error::InvalidResponseLength(6))));
        assert!(matches!(
            "bbqyb".parse::<Response>(),
            Err(Error::InvalidResponse { code: 'q', position: 3 })
        ));
        let err = "bbyy".parse::<Response>().unwrap_err();
        assert_eq!(err.to_string(), "a response needs five codes, got 4");
    }

    #[test]
    fn test_display() -> Result<()> {
        assert_eq!("*?!YG".parse::<Response>()?.to_string(), "gybyg");
        Ok(())
    }

    #[test]
    fn test_parse_round() -> Result<()> {
        let (guess, response) = parse_round("  RHINO  bbyyb ")?;
        assert_eq!(guess.as_str(), "rhino");
        assert_eq!(response, Response([Absent, Absent, WrongPosition, WrongPosition, Absent]));

        let (guess2, response2) = parse_round("!r!h?i?n!o")?;
        assert_eq!(guess2, guess);
        assert_eq!(response2, response);

        for spaced in ["!r !h ?i ?n !o", "!r!h ?i?n!o", " !r!h?i ?n!o "] {
            assert_eq!(parse_round(spaced)?, (guess, response), "{:?}", spaced);
        }
        Ok(())
    }

    #[test]
    fn test_parse_round_errors() {
        assert!(matches!(parse_round(""), Err(Error::MalformedRound(_))));
        assert!(matches!(parse_round("rhino bbyyb extra"), Err(Error::MalformedRound(_))));
        assert!(matches!(parse_round("!r!h?i?n"), Err(Error::MalformedRound(_))));
        assert!(matches!(parse_round("rh1no bbyyb"), Err(Error::MalformedWord(_))));
        assert!(matches!(
            parse_round("!r!h%i?n!o"),
            Err(Error::InvalidResponse { code: '%', position: 3 })
        ));
    }
}
