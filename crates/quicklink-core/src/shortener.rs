use crate::error::ShortenerError;
use crate::shortcode::ShortCode;
use crate::validator::LongUrl;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::Serialize;

type Result<T> = std::result::Result<T, ShortenerError>;

/// The outcome of one successful shortening.
///
/// Nothing is persisted: the record lives only as long as the session that
/// asked for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortenedLink {
    /// The generated short code.
    pub code: ShortCode,
    /// `<base-domain>/<code>`, for display only.
    pub short_url: String,
    /// The validated long URL that was submitted.
    pub original_url: LongUrl,
    /// When the code was produced.
    pub created_at: Timestamp,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Produces a short URL for an already validated long URL.
    ///
    /// This stands in for a remote call and may take a while to resolve.
    async fn shorten(&self, url: LongUrl) -> Result<ShortenedLink>;
}
