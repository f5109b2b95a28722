//! Debounced search input coordination.
//!
//! A listing UI updates its raw search text on every keystroke, but issuing a
//! fetch per keystroke would hammer the source and thrash pagination state.
//! The [`SearchCoordinator`] holds the raw input and commits it as the active
//! search term only after a quiet period, collapsing rapid typing into a
//! single commit per pause.
//!
//! Time is passed in explicitly as `Instant` values rather than read from the
//! system clock, which keeps the coordinator deterministic under test. The
//! host calls [`SearchCoordinator::poll_commit`] from its timer or event loop.

use std::time::{Duration, Instant};

/// Tracks a quiet-period deadline after the most recent trigger.
///
/// Each trigger pushes the deadline out; the pending action fires once when
/// polled after the deadline passes.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period in milliseconds.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// Registers an input event at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` once when the quiet period has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Cancels any pending trigger.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a trigger is waiting for its quiet period to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Debounces raw search input into a committed search term.
///
/// `raw_input` follows every keystroke synchronously; `committed_term`
/// changes only via [`poll_commit`](Self::poll_commit) after the debounce
/// window, or via [`flush`](Self::flush) when the host wants an immediate
/// commit (an Enter keypress, typically). A commit is reported only when the
/// term actually changed, so re-typing the current term never causes a
/// pagination reset.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use backpager::pager::SearchCoordinator;
///
/// let mut search = SearchCoordinator::new(300);
/// let start = Instant::now();
///
/// search.input("a", start);
/// search.input("ab", start + Duration::from_millis(100));
///
/// // Still inside the quiet period: nothing commits.
/// assert_eq!(search.poll_commit(start + Duration::from_millis(250)), None);
///
/// // One commit for the whole burst.
/// assert_eq!(
///     search.poll_commit(start + Duration::from_millis(450)),
///     Some("ab".to_string()),
/// );
/// assert_eq!(search.committed_term(), "ab");
/// ```
#[derive(Debug, Clone)]
pub struct SearchCoordinator {
    raw_input: String,
    committed: String,
    debouncer: Debouncer,
}

impl SearchCoordinator {
    /// Creates a coordinator with the given debounce window in milliseconds.
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            raw_input: String::new(),
            committed: String::new(),
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Updates the raw input at `now`, restarting the debounce window.
    pub fn input(&mut self, text: &str, now: Instant) {
        if self.raw_input == text {
            return;
        }
        self.raw_input = text.to_string();
        self.debouncer.trigger(now);
        tracing::trace!(raw = %self.raw_input, "search input updated");
    }

    /// Polls the debounce window at `now`.
    ///
    /// Returns the newly committed term when the quiet period has elapsed and
    /// the raw input differs from the committed term. Returns `None` while
    /// still inside the window, or when the pause produced no actual change.
    pub fn poll_commit(&mut self, now: Instant) -> Option<String> {
        if !self.debouncer.poll(now) {
            return None;
        }
        self.take_changed()
    }

    /// Commits the raw input immediately, bypassing the debounce window.
    ///
    /// Returns the committed term if it changed.
    pub fn flush(&mut self) -> Option<String> {
        self.debouncer.cancel();
        self.take_changed()
    }

    /// Clears both raw input and committed term without reporting a commit.
    ///
    /// For tearing down a search UI; the caller is expected to reset
    /// pagination itself if the committed term was non-empty.
    pub fn clear(&mut self) {
        self.raw_input.clear();
        self.committed.clear();
        self.debouncer.cancel();
    }

    /// The raw input, updated on every keystroke.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// The committed search term the engine is currently filtered by.
    #[must_use]
    pub fn committed_term(&self) -> &str {
        &self.committed
    }

    fn take_changed(&mut self) -> Option<String> {
        if self.raw_input == self.committed {
            return None;
        }
        self.committed = self.raw_input.clone();
        tracing::debug!(term = %self.committed, "search term committed");
        Some(self.committed.clone())
    }
}
