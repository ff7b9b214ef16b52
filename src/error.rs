use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The bit source ran out in the middle of a token.
    #[error("truncated stream: bit source exhausted mid-token")]
    TruncatedStream,
    /// A token that no well-formed encoder produces.
    #[error("malformed stream: {0}")]
    MalformedStream(&'static str),
    #[error("invalid window size {0}: must be within 1..=4095")]
    InvalidWindowSize(usize),
    #[error("invalid look-ahead {0}: must be within 3..=16")]
    InvalidLookAhead(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convenience function to create a malformed stream error.
pub fn malformed_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::MalformedStream(desc))
}
