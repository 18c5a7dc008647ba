use async_trait::async_trait;
use jiff::Timestamp;
use quicklink_core::{LongUrl, ShortCode, ShortenedLink, Shortener, ShortenerError};
use quicklink_generator::Generator;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

pub const DEFAULT_BASE_DOMAIN: &str = "https://short.ly";
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

/// Configures a [`SimulatedShortener`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Host prefix joined with the generated code to form the short URL.
    #[builder(default = DEFAULT_BASE_DOMAIN.to_string(), setter(into))]
    pub base_domain: String,
    /// Artificial delay standing in for a remote call.
    #[builder(default = DEFAULT_LATENCY)]
    pub latency: Duration,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A [`Shortener`] that fakes the remote call.
///
/// It waits for the configured latency, asks the generator for a code and
/// joins it with the base domain. Nothing is stored, so the resulting short
/// URL never resolves anywhere.
///
/// Note: the `Generator` implementation decides whether codes can repeat.
/// No collision check is performed.
#[derive(Debug)]
pub struct SimulatedShortener<G> {
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<G> Clone for SimulatedShortener<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            settings: self.settings.clone(),
        }
    }
}

impl<G: Generator> SimulatedShortener<G> {
    pub fn new(generator: G, settings: ShortenerSettings) -> Self {
        Self {
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    fn generate_code(&self) -> ShortCode {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<G: Generator> Shortener for SimulatedShortener<G> {
    async fn shorten(&self, url: LongUrl) -> Result<ShortenedLink, ShortenerError> {
        debug!(
            url = %url,
            latency_ms = self.settings.latency.as_millis() as u64,
            "simulating remote shorten call"
        );
        tokio::time::sleep(self.settings.latency).await;

        let code = self.generate_code();
        let short_url = code.to_url(&self.settings.base_domain);
        info!(code = %code, short_url = %short_url, "generated short url");

        Ok(ShortenedLink {
            code,
            short_url,
            original_url: url,
            created_at: Timestamp::now(),
        })
    }
}
