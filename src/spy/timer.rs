/// Cancellable one-shot deadline driven by the event loop clock.
///
/// Every re-arm replaces the pending deadline, so only the last one can
/// fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl IdleTimer {
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and arm a new one `delay_ms` after `now_ms`.
    pub const fn rearm(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Returns true once when the deadline has passed, disarming the timer.
    pub fn take_expired(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Milliseconds until the deadline, for sizing the event poll.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline.map(|deadline| deadline.saturating_sub(now_ms))
    }
}
