use quicklink_core::{ShortenerError, ValidationError};
use thiserror::Error;

/// Why a submission did not produce a short URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error("submission was cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Failures of the copy and open affordances. None of them end the session.
#[derive(Debug, Error)]
pub enum AffordanceError {
    #[error("no short url to copy yet")]
    NothingToCopy,
    #[error("failed to copy url: {0}")]
    ClipboardCopyFailed(#[from] ClipboardError),
    #[error("no original url to open yet")]
    NothingToOpen,
    #[error("failed to open url: {0}")]
    OpenFailed(#[from] BrowserError),
}
