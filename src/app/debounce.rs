//! Debounced commit of the search text.
//!
//! The host only offers fire-and-forget timers: a timer can be armed but
//! never cancelled, and its expiry event does not say which arming it
//! belongs to. The [`Debouncer`] therefore hands out a [`TimerHandle`] per
//! keystroke and keeps the armed handles in arming order. Every timer runs for
//! the same quiet period, so they expire in the same order. An expiry commits
//! only when the handle it pops is still the live one. Superseded handles
//! expire silently.

use std::collections::VecDeque;
use std::time::Duration;

/// Identifies one armed quiet-period timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Turns a stream of keystrokes into at most one commit per quiet period.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    next_handle: u64,
    armed: VecDeque<TimerHandle>,
    live: Option<(TimerHandle, String)>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            next_handle: 0,
            armed: VecDeque::new(),
            live: None,
        }
    }

    /// Duration every timer must be armed for.
    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Records a keystroke. The returned handle supersedes any pending one;
    /// the caller must arm a timer of [`quiet_period`](Self::quiet_period).
    pub fn input(&mut self, text: &str) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.armed.push_back(handle);
        self.live = Some((handle, text.to_string()));
        tracing::debug!(handle = handle.0, pending = self.armed.len(), "debounce timer armed");
        handle
    }

    /// Handles one timer expiry. Returns the text to commit when the expired
    /// timer was the live one.
    pub fn expire(&mut self) -> Option<String> {
        let expired = self.armed.pop_front()?;
        match &self.live {
            Some((live, _)) if *live == expired => self.live.take().map(|(_, text)| text),
            _ => {
                tracing::debug!(handle = expired.0, "superseded debounce timer expired");
                None
            }
        }
    }

    /// True while a keystroke is waiting for its quiet period to pass.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}
