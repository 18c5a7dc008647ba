//! The interactive shortening session.
//!
//! A [`Session`] owns all per-user state: the last input, the current
//! [`Phase`], and whether the short URL was just copied. Each submission walks
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Generating -> Ready
//! ```
//!
//! and `Ready` keeps the short URL until the next submission starts over at
//! `Validating`. While a submission is pending, new ones are turned away with
//! [`SubmitError::InFlight`].

use crate::browser::Browser;
use crate::clipboard::Clipboard;
use crate::error::{AffordanceError, SubmitError};
use quicklink_core::{ShortenedLink, Shortener, UrlPolicy, ValidationError};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// How long the copied indicator stays lit after a successful copy.
pub const COPIED_RESET: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Validating,
    Invalid(ValidationError),
    Generating,
    Ready(ShortenedLink),
}

impl Phase {
    /// Whether a submission is in progress, i.e. the trigger is disabled.
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Validating | Phase::Generating)
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Validating => "validating",
            Phase::Invalid(_) => "invalid",
            Phase::Generating => "generating",
            Phase::Ready(_) => "ready",
        }
    }
}

#[derive(Debug)]
struct SessionState {
    input: String,
    phase: Phase,
    copied_until: Option<Instant>,
    /// Bumped on every accepted submission.
    submission: u64,
    cancel_requested: bool,
}

impl SessionState {
    fn transition(&mut self, next: Phase) {
        debug!(from = self.phase.name(), to = next.name(), "session transition");
        self.phase = next;
    }
}

pub struct Session<S, C, B> {
    shortener: S,
    clipboard: C,
    browser: B,
    policy: UrlPolicy,
    state: Mutex<SessionState>,
    cancel: Notify,
}

impl<S: Shortener, C: Clipboard, B: Browser> Session<S, C, B> {
    pub fn new(shortener: S, clipboard: C, browser: B) -> Self {
        Self {
            shortener,
            clipboard,
            browser,
            policy: UrlPolicy::default(),
            state: Mutex::new(SessionState {
                input: String::new(),
                phase: Phase::Idle,
                copied_until: None,
                submission: 0,
                cancel_requested: false,
            }),
            cancel: Notify::new(),
        }
    }

    /// Replaces the URL policy used to validate submissions.
    pub fn with_policy(mut self, policy: UrlPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates `input` and, if it is a usable URL, shortens it.
    ///
    /// Any previous result and copied indicator are discarded first. Empty
    /// input and malformed input fail with distinct
    /// [`ValidationError`] variants and leave the session `Idle`.
    pub async fn submit(&self, input: &str) -> Result<ShortenedLink, SubmitError> {
        // registered before the phase turns pending so a cancel can't slip in between
        let cancelled = self.cancel.notified();

        {
            let mut state = self.lock();
            if state.phase.is_pending() {
                debug!("rejecting submission while another is in flight");
                return Err(SubmitError::InFlight);
            }
            state.input = input.to_string();
            state.copied_until = None;
            state.submission += 1;
            state.cancel_requested = false;
            state.transition(Phase::Validating);
        }
        let mut guard = PendingGuard::new(&self.state);

        let url = match self.policy.validate(input) {
            Ok(url) => url,
            Err(e) => {
                info!(error = %e, "rejected submission");
                let mut state = self.lock();
                state.transition(Phase::Invalid(e.clone()));
                state.transition(Phase::Idle);
                guard.disarm();
                return Err(e.into());
            }
        };

        self.lock().transition(Phase::Generating);

        let outcome = tokio::select! {
            biased;
            _ = cancelled => Err(SubmitError::Cancelled),
            result = self.shortener.shorten(url) => result.map_err(SubmitError::from),
        };

        let mut state = self.lock();
        guard.disarm();
        // a cancel that raced the shortener finishing still wins
        let outcome = match outcome {
            Ok(_) if state.cancel_requested => Err(SubmitError::Cancelled),
            outcome => outcome,
        };
        match outcome {
            Ok(link) => {
                state.transition(Phase::Ready(link.clone()));
                Ok(link)
            }
            Err(e) => {
                warn!(error = %e, "submission did not complete");
                state.transition(Phase::Idle);
                Err(e)
            }
        }
    }

    /// Aborts the pending submission, if any. Returns whether one was pending.
    ///
    /// When this returns `true` the pending submission resolves to
    /// [`SubmitError::Cancelled`] or, if its input was rejected, to the
    /// validation error. It never reaches `Ready`.
    pub fn cancel(&self) -> bool {
        let mut state = self.lock();
        if !state.phase.is_pending() {
            return false;
        }
        state.cancel_requested = true;
        self.cancel.notify_waiters();
        true
    }

    /// Copies the short URL to the clipboard and lights the copied indicator.
    ///
    /// A failed copy is reported but changes nothing else about the session.
    pub fn copy(&self) -> Result<(), AffordanceError> {
        let (short_url, submission) = {
            let state = self.lock();
            match &state.phase {
                Phase::Ready(link) => (link.short_url.clone(), state.submission),
                _ => return Err(AffordanceError::NothingToCopy),
            }
        };

        if let Err(e) = self.clipboard.set_text(&short_url) {
            warn!(error = %e, "failed to copy short url");
            return Err(e.into());
        }

        let mut state = self.lock();
        // the clipboard write runs unlocked; a submission started meanwhile owns the indicator
        if state.submission != submission {
            debug!(short_url = %short_url, "copied short url of a superseded submission");
            return Ok(());
        }
        state.copied_until = Some(Instant::now() + COPIED_RESET);
        debug!(short_url = %short_url, "copied short url");
        Ok(())
    }

    /// Opens the original long URL in a new browsing context.
    pub fn open_original(&self) -> Result<(), AffordanceError> {
        let link = self.link().ok_or(AffordanceError::NothingToOpen)?;
        self.browser.open(&link.original_url)?;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase.clone()
    }

    /// Whether a submission is pending.
    pub fn is_loading(&self) -> bool {
        self.lock().phase.is_pending()
    }

    /// The most recent submitted text, as typed.
    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    /// The current result, if the session is `Ready`.
    pub fn link(&self) -> Option<ShortenedLink> {
        match &self.lock().phase {
            Phase::Ready(link) => Some(link.clone()),
            _ => None,
        }
    }

    pub fn short_url(&self) -> Option<String> {
        self.link().map(|link| link.short_url)
    }

    /// Whether the short URL was copied within the last [`COPIED_RESET`].
    pub fn is_copied(&self) -> bool {
        self.lock()
            .copied_until
            .is_some_and(|until| Instant::now() < until)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    // state is replaced wholesale on every transition, so a poisoned lock is still consistent
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the session to `Idle` if a submission future is dropped mid-flight.
struct PendingGuard<'a> {
    state: &'a Mutex<SessionState>,
    armed: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(state: &'a Mutex<SessionState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = lock_state(self.state);
            if state.phase.is_pending() {
                state.transition(Phase::Idle);
            }
        }
    }
}
