//! Caller-supplied time and the auto-advance deadline.
//!
//! The editor never reads a clock itself. Callers pass a monotonic millisecond reading with
//! every key and with every idle poll, which keeps the core single-threaded and testable.

/// Monotonic time reading in milliseconds since an arbitrary epoch.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(u64);

impl Instant {
    /// Reading of `ms` milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Milliseconds since the epoch.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Reading `ms` milliseconds later, saturating at the end of time.
    pub const fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// One-shot deadline; disarmed deadlines never time out.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Disarmed deadline.
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Arm to expire `ms` milliseconds after `now`.
    pub fn set(&mut self, now: Instant, ms: u64) {
        self.at = Some(now.after(ms));
    }

    /// Disarm.
    pub fn clear(&mut self) {
        self.at = None;
    }

    /// Whether the deadline is armed.
    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Whether `now` has reached the armed deadline.
    pub fn timed_out(&self, now: Instant) -> bool {
        self.at.is_some_and(|at| now >= at)
    }
}
