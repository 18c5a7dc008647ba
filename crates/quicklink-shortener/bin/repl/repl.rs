use quicklink_core::Shortener;
use quicklink_shortener::{Browser, Clipboard, Session, Toast};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Enter a long URL to shorten it, or one of:
  :copy    copy the short URL to the clipboard
  :open    open the original URL in the browser
  :show    print the current result as JSON, or the request in progress
  :cancel  abort a pending request
  :help    show this message
  :quit    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shorten(String),
    Copy,
    Open,
    Show,
    Cancel,
    Help,
    Quit,
}

impl Command {
    /// Anything that isn't a known `:command` is treated as a URL submission.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":copy" | ":c" => Command::Copy,
            ":open" | ":o" => Command::Open,
            ":show" | ":s" => Command::Show,
            ":cancel" => Command::Cancel,
            ":help" | ":h" | "?" => Command::Help,
            ":quit" | ":q" | ":exit" => Command::Quit,
            _ => Command::Shorten(line.to_string()),
        }
    }
}

const SHORTENING: &str = "Shortening...";

fn print_toast(toast: &Toast) {
    if toast.is_error() {
        eprintln!("✗ {toast}");
    } else {
        println!("✓ {toast}");
    }
}

/// Reads commands from stdin until EOF or `:quit`.
///
/// Submissions run in the background so `:cancel` and further input stay
/// responsive while one is pending.
pub async fn run<S, C, B>(session: Arc<Session<S, C, B>>) -> anyhow::Result<()>
where
    S: Shortener,
    C: Clipboard,
    B: Browser,
{
    println!("QuickLink: transform long URLs into short, shareable links");
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Shorten(input) => {
                if !session.is_loading() {
                    println!("{SHORTENING}");
                }
                let session = Arc::clone(&session);
                tokio::spawn(async move {
                    match session.submit(&input).await {
                        Ok(link) => {
                            print_toast(&Toast::shortened());
                            println!("Your shortened URL: {}", link.short_url);
                        }
                        Err(e) => print_toast(&Toast::from(&e)),
                    }
                });
            }
            Command::Copy => match session.copy() {
                Ok(()) => print_toast(&Toast::copied()),
                Err(e) => print_toast(&Toast::from(&e)),
            },
            Command::Open => {
                if let Err(e) = session.open_original() {
                    print_toast(&Toast::from(&e));
                }
            }
            Command::Show => println!("{}", show(&session)?),
            Command::Cancel => {
                if !session.cancel() {
                    println!("Nothing to cancel");
                }
            }
        }
    }

    // leaving drops any pending request
    session.cancel();
    Ok(())
}

/// Renders the session for `:show`: the pending request, or the current
/// result with its copied mark.
fn show<S, C, B>(session: &Session<S, C, B>) -> anyhow::Result<String>
where
    S: Shortener,
    C: Clipboard,
    B: Browser,
{
    let Some(link) = session.link() else {
        return Ok(if session.is_loading() {
            SHORTENING.to_string()
        } else {
            "Nothing shortened yet".to_string()
        });
    };
    let mut out = serde_json::to_string_pretty(&link)?;
    if session.is_copied() {
        out.push_str("\n✓ Copied");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicklink_generator::SeqGenerator;
    use quicklink_shortener::{
        MemoryClipboard, ShortenerSettings, SimulatedShortener, SystemBrowser,
    };
    use std::time::Duration;

    fn session() -> Arc<Session<SimulatedShortener<SeqGenerator>, MemoryClipboard, SystemBrowser>> {
        let shortener = SimulatedShortener::new(SeqGenerator::new(), ShortenerSettings::default());
        Arc::new(Session::new(shortener, MemoryClipboard::new(), SystemBrowser))
    }

    #[tokio::test(start_paused = true)]
    async fn show_reports_loading_result_and_copied_mark() {
        let session = session();
        assert_eq!(show(&session).unwrap(), "Nothing shortened yet");

        let pending = tokio::spawn({
            let session = Arc::clone(&session);
            async move { session.submit("https://example.com/page").await }
        });
        while !session.is_loading() {
            tokio::task::yield_now().await;
        }
        assert_eq!(show(&session).unwrap(), SHORTENING);

        pending.await.unwrap().unwrap();
        let shown = show(&session).unwrap();
        assert!(shown.contains(r#""short_url": "https://short.ly/000000""#), "{shown}");
        assert!(!shown.ends_with("✓ Copied"));

        session.copy().unwrap();
        assert!(show(&session).unwrap().ends_with("✓ Copied"));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(!show(&session).unwrap().ends_with("✓ Copied"));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":copy"), Command::Copy);
        assert_eq!(Command::parse("  :o "), Command::Open);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse("?"), Command::Help);
    }

    #[test]
    fn everything_else_is_a_submission() {
        assert_eq!(
            Command::parse("https://example.com"),
            Command::Shorten("https://example.com".into())
        );
        assert_eq!(Command::parse(""), Command::Shorten(String::new()));
        assert_eq!(Command::parse(":nope"), Command::Shorten(":nope".into()));
    }
}
