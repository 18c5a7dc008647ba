//! Interactive URL shortener.
//!
//! This crate provides the simulated shortener service, the per-user
//! [`Session`] state machine that drives it, and the clipboard and browser
//! affordances offered once a short URL is ready. Core types are re-exported
//! from `quicklink_core`.

pub mod browser;
pub mod clipboard;
pub mod error;
pub mod service;
pub mod session;
pub mod toast;

pub use browser::{Browser, SystemBrowser};
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use error::{AffordanceError, BrowserError, ClipboardError, SubmitError};
pub use service::{ShortenerSettings, SimulatedShortener, DEFAULT_BASE_DOMAIN};
pub use session::{Phase, Session};
pub use toast::{Toast, ToastVariant};
