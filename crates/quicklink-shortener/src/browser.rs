use crate::error::BrowserError;
use quicklink_core::LongUrl;
use std::process::{Command, Stdio};
use std::sync::Arc;
use tracing::{debug, warn};

/// Opens a URL in a new browsing context.
pub trait Browser: Send + Sync + 'static {
    fn open(&self, url: &LongUrl) -> Result<(), BrowserError>;
}

impl<B: Browser + ?Sized> Browser for Arc<B> {
    fn open(&self, url: &LongUrl) -> Result<(), BrowserError> {
        (**self).open(url)
    }
}

/// Hands the URL to the platform's default opener without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &LongUrl) -> Result<(), BrowserError> {
        let mut child = opener(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!(url = %url, pid = child.id(), "launched browser");

        // reap the opener so it does not linger as a zombie
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => warn!(%status, "browser opener exited with failure"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "failed to wait for browser opener"),
        });
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(windows)]
fn opener(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(url);
    command
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_receives_url_as_last_argument() {
        let command = opener("https://example.com/page");
        let last = command.get_args().last().and_then(|a| a.to_str());
        assert_eq!(last, Some("https://example.com/page"));
    }
}
