//! Cancellable one-shot timer driven by the frame clock.

/// A one-shot deadline measured in milliseconds since app start.
///
/// The owner polls it every frame. It fires at most once per `arm`, and a
/// `cancel` guarantees it will not fire for the transition that armed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline_ms: Option<u64>,
}

impl OneShotTimer {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Schedule the timer to fire `delay_ms` after `now_ms`, replacing any
    /// earlier schedule.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Drop the pending schedule. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Deadline of the pending schedule.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns true exactly once when `now_ms` reaches the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
