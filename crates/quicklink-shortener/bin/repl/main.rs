mod cli;
mod repl;

use crate::cli::{GeneratorArg, LogFormatArg, CLI};
use clap::Parser;
use quicklink_generator::{Generator, RandomGenerator, SeqGenerator};
use quicklink_shortener::{
    Clipboard, MemoryClipboard, Session, ShortenerSettings, SimulatedShortener, SystemBrowser,
    SystemClipboard,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);
    config.check()?;

    info!(
        base_domain = %config.base_domain,
        latency_ms = config.latency_ms,
        generator = %config.generator,
        no_clipboard = config.no_clipboard,
        "starting quicklink"
    );

    let settings = ShortenerSettings::builder()
        .base_domain(config.base_domain)
        .latency(Duration::from_millis(config.latency_ms))
        .build();

    let clipboard: Arc<dyn Clipboard> = if config.no_clipboard {
        Arc::new(MemoryClipboard::new())
    } else {
        Arc::new(SystemClipboard)
    };

    match config.generator {
        GeneratorArg::Random => {
            run_session(RandomGenerator::new(), settings, clipboard).await?;
        }
        GeneratorArg::Seq => {
            run_session(SeqGenerator::new(), settings, clipboard).await?;
        }
    }

    Ok(())
}

async fn run_session<G: Generator>(
    generator: G,
    settings: ShortenerSettings,
    clipboard: Arc<dyn Clipboard>,
) -> anyhow::Result<()> {
    let shortener = SimulatedShortener::new(generator, settings);
    let session = Arc::new(Session::new(shortener, clipboard, SystemBrowser));
    repl::run(session).await
}

fn init_tracing(format: LogFormatArg) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormatArg::Text => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }
}
