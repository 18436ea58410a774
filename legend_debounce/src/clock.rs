// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic millisecond time sources.

/// A source of monotonic timestamps in milliseconds.
///
/// Hosts typically wrap their platform's monotonic clock (for example
/// `Instant` relative to application start, or `performance.now()` in a web
/// binding). The values only need to be monotonic within one legend instance;
/// their epoch is irrelevant.
pub trait Clock {
    /// Returns the current timestamp in milliseconds.
    fn now_ms(&self) -> u64;
}

/// A hand-driven clock for tests and deterministic hosts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    /// Creates a clock that reads `start` until advanced.
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self { now: start }
    }

    /// Moves the clock forward by `ms` milliseconds.
    pub fn advance(&mut self, ms: u64) {
        self.now = self.now.saturating_add(ms);
    }

    /// Jumps the clock to `now`.
    ///
    /// Time never runs backwards; earlier values are ignored.
    pub fn set(&mut self, now: u64) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}
