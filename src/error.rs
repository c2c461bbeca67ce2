/// Everything that can go wrong while building or updating a session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A response code character that isn't one of the recognised kinds.
    #[error("unknown response code {code:?} at position {position}")]
    InvalidResponse { code: char, position: usize },

    /// The length case of an invalid response: not exactly five codes.
    #[error("a response needs five codes, got {0}")]
    InvalidResponseLength(usize),

    /// Not exactly five ASCII letters.
    #[error("{0:?} is not a five letter word")]
    MalformedWord(String),

    #[error("can't make sense of {0:?}; expected \"<guess> <response>\" or annotated letters like \"!r!h?i?n*o\"")]
    MalformedRound(String),

    #[error("unable to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
