use thiserror::Error;

/// Errors related to the core functionality of the URL shortener.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Why a candidate long URL was rejected.
///
/// Empty input is reported separately from malformed input so callers can
/// tell the user which of the two happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no url provided")]
    EmptyInput,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("shortener backend unavailable: {0}")]
    Unavailable(String),
}
