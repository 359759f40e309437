//! Coalescing scheduler for work that should only run once input goes quiet.

use std::time::{Duration, Instant};

/// Collapses a burst of requests into one execution after `delay` of quiet.
///
/// Each [`schedule`](Debouncer::schedule) replaces the pending value and
/// pushes the deadline back. The caller drives time by passing `now`, so the
/// debouncer works with any event loop.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Request a run carrying `value`, superseding any pending request
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending request, if any
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    /// Time left until the pending request is due, `None` if nothing is pending
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }

    /// Run `work` with the latest value if its quiet period has elapsed
    pub fn fire<R>(&mut self, now: Instant, work: impl FnOnce(T) -> R) -> Option<R> {
        let due = matches!(&self.pending, Some((deadline, _)) if now >= *deadline);
        if !due {
            return None;
        }
        let (_, value) = self.pending.take()?;
        Some(work(value))
    }
}
