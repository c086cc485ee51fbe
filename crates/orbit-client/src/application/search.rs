//! Debounced search input.
//!
//! Keystrokes update the *pending* text immediately; the text used for
//! filtering (the *committed* query) only changes once no new keystroke has
//! arrived for [`SEARCH_DEBOUNCE`].  The debouncer owns no timer: callers pass
//! the current `Instant` to [`SearchDebouncer::input`] and
//! [`SearchDebouncer::poll`], which keeps it deterministic under test.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before the query is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    text: String,
    last_input: Option<Instant>,
    committed: String,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            text: String::new(),
            last_input: None,
            committed: String::new(),
        }
    }

    /// Records a keystroke; restarts the quiet period.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.last_input = Some(now);
    }

    /// Clears the box.  Like any other edit, the empty query is committed
    /// after the quiet period.
    pub fn clear(&mut self, now: Instant) {
        self.input(String::new(), now);
    }

    /// Commits the pending text if the quiet period has elapsed.
    ///
    /// Returns `true` when the committed query changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_input else {
            return false;
        };
        if now.saturating_duration_since(last) < self.delay {
            return false;
        }
        self.last_input = None;
        if self.committed == self.text {
            return false;
        }
        self.committed = self.text.clone();
        true
    }

    /// Text currently in the box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Query the dashboard is filtered by.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// `true` while a keystroke is waiting out the quiet period.
    pub fn is_pending(&self) -> bool {
        self.last_input.is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
