//! Core types and traits for the QuickLink URL shortener.
//!
//! This crate provides the types shared by the code generators and the
//! interactive shortener: validated long URLs, short codes, and the
//! asynchronous [`Shortener`] port.

pub mod base36;
pub mod error;
pub mod shortcode;
pub mod shortener;
pub mod validator;

pub use error::{CoreError, ShortenerError, ValidationError};
pub use shortcode::ShortCode;
pub use shortener::{ShortenedLink, Shortener};
pub use validator::{LongUrl, UrlPolicy};
