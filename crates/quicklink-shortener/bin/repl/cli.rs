use anyhow::Context;
use clap::{Parser, ValueEnum};
use quicklink_core::UrlPolicy;
use quicklink_shortener::DEFAULT_BASE_DOMAIN;
use std::fmt::{Display, Formatter};

pub const BASE_DOMAIN_ENV: &str = "QUICKLINK_BASE_DOMAIN";
pub const LATENCY_MS_ENV: &str = "QUICKLINK_LATENCY_MS";
pub const GENERATOR_ENV: &str = "QUICKLINK_GENERATOR";
pub const LOG_FORMAT_ENV: &str = "QUICKLINK_LOG_FORMAT";
pub const NO_CLIPBOARD_ENV: &str = "QUICKLINK_NO_CLIPBOARD";

pub const DEFAULT_LATENCY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "quicklink", about = "Turn long URLs into short, shareable links")]
pub struct CLI {
    #[arg(long, env = BASE_DOMAIN_ENV, default_value = DEFAULT_BASE_DOMAIN)]
    pub base_domain: String,

    /// Simulated round-trip time of a shorten request.
    #[arg(long, env = LATENCY_MS_ENV, default_value_t = DEFAULT_LATENCY_MS)]
    pub latency_ms: u64,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    /// Keep copied links in process memory instead of the system clipboard.
    #[arg(long, env = NO_CLIPBOARD_ENV)]
    pub no_clipboard: bool,
}

impl CLI {
    /// Rejects a base domain that would not produce an absolute short URL.
    pub fn check(&self) -> anyhow::Result<()> {
        UrlPolicy::default()
            .validate(&self.base_domain)
            .with_context(|| format!("invalid base domain {:?}", self.base_domain))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["quicklink"]).unwrap();
        assert_eq!(cli.base_domain, "https://short.ly");
        assert_eq!(cli.latency_ms, 1000);
        assert_eq!(cli.generator, GeneratorArg::Random);
        assert_eq!(cli.log_format, LogFormatArg::Text);
        assert!(!cli.no_clipboard);
    }

    #[test]
    fn overrides() {
        let cli = CLI::try_parse_from([
            "quicklink",
            "--base-domain",
            "https://qk.io",
            "--latency-ms",
            "0",
            "--generator",
            "seq",
            "--log-format",
            "json",
            "--no-clipboard",
        ])
        .unwrap();
        assert_eq!(cli.base_domain, "https://qk.io");
        assert_eq!(cli.latency_ms, 0);
        assert_eq!(cli.generator, GeneratorArg::Seq);
        assert_eq!(cli.log_format, LogFormatArg::Json);
        assert!(cli.no_clipboard);
    }

    #[test]
    fn base_domain_must_be_absolute() {
        let cli = CLI::try_parse_from(["quicklink"]).unwrap();
        assert!(cli.check().is_ok());

        for domain in ["short.ly", "ftp://short.ly", " "] {
            let cli = CLI::try_parse_from(["quicklink", "--base-domain", domain]).unwrap();
            let err = cli.check().unwrap_err();
            assert!(err.to_string().contains("invalid base domain"), "{domain}: {err}");
        }
    }

    #[test]
    fn rejects_unknown_generator() {
        assert!(CLI::try_parse_from(["quicklink", "--generator", "uuid"]).is_err());
    }
}
