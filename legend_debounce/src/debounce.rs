// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`DebouncedCall`] state machine.
//!
//! ## Rules
//!
//! 1. **Last call wins**: a `call` replaces any pending action, fired or not yet due.
//! 2. **Lock preempts**: while locked, `call` is dropped entirely. The lock covers
//!    the half-open window `[now, now + duration)`.
//! 3. **Cancel is silent**: [`DebouncedCall::cancel_previous`] discards the pending
//!    action without handing it back to the caller for execution.
//! 4. **Delay zero is deferred**: an action scheduled with a delay of `0` is due
//!    at the next [`DebouncedCall::poll`], never invoked synchronously.

use core::fmt;

/// An action waiting to become due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending<A> {
    /// The scheduled action.
    pub action: A,
    /// Timestamp (milliseconds) at which the action becomes due.
    pub due: u64,
}

/// A single-slot debouncer with cancel and timed-lock semantics.
///
/// Each owner keeps its own instance; instances share no state. The type is
/// generic over the action so callers can schedule closures
/// (`Box<dyn FnOnce()>`) or plain intent values that they interpret when
/// [`poll`](Self::poll) hands them back.
pub struct DebouncedCall<A> {
    pending: Option<Pending<A>>,
    locked_until: Option<u64>,
}

impl<A> fmt::Debug for DebouncedCall<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedCall")
            .field("due", &self.pending.as_ref().map(|p| p.due))
            .field("locked_until", &self.locked_until)
            .finish()
    }
}

impl<A> Default for DebouncedCall<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> DebouncedCall<A> {
    /// Creates an idle, unlocked instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            locked_until: None,
        }
    }

    /// Schedules `action` to become due `delay_ms` after `now`.
    ///
    /// Any pending action is discarded. Returns `false` (and drops `action`)
    /// if the instance is locked at `now`.
    pub fn call(&mut self, action: A, delay_ms: u64, now: u64) -> bool {
        if self.is_locked(now) {
            tracing::trace!(now, locked_until = ?self.locked_until, "debounced call dropped by lock");
            return false;
        }
        let due = now.saturating_add(delay_ms);
        if self.pending.is_some() {
            tracing::trace!(due, "debounced call superseded pending action");
        }
        self.pending = Some(Pending { action, due });
        true
    }

    /// Schedules `action` for the next poll; shorthand for a zero delay.
    pub fn call_soon(&mut self, action: A, now: u64) -> bool {
        self.call(action, 0, now)
    }

    /// Drops the pending action, if any, without firing it.
    ///
    /// Returns `true` if something was canceled.
    pub fn cancel_previous(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Rejects every [`call`](Self::call) issued before `now + duration_ms`.
    ///
    /// A later lock extends or shortens the window; it does not accumulate.
    /// The pending action, if any, is left untouched.
    pub fn lock(&mut self, duration_ms: u64, now: u64) {
        self.locked_until = Some(now.saturating_add(duration_ms));
    }

    /// Returns `true` if `call` would be dropped at `now`.
    #[must_use]
    pub fn is_locked(&self, now: u64) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Returns `true` if an action is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the timestamp at which the pending action becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Returns the pending action and its due time without consuming it.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending<A>> {
        self.pending.as_ref()
    }

    /// Takes the pending action if it is due at `now`.
    pub fn poll(&mut self, now: u64) -> Option<A> {
        match &self.pending {
            Some(p) if p.due <= now => self.pending.take().map(|p| p.action),
            _ => None,
        }
    }

    /// Cancels the pending action and clears any lock.
    ///
    /// Owners call this on teardown so nothing fires against removed state.
    pub fn reset(&mut self) {
        self.pending = None;
        self.locked_until = None;
    }
}

impl<A: FnOnce()> DebouncedCall<A> {
    /// Invokes the pending action if it is due at `now`.
    ///
    /// Returns `true` if an action ran.
    pub fn run_due(&mut self, now: u64) -> bool {
        match self.poll(now) {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn last_call_wins_within_window() {
        let log = RefCell::new(Vec::new());
        let mut debounced: DebouncedCall<Box<dyn FnOnce() + '_>> = DebouncedCall::new();

        debounced.call(Box::new(|| log.borrow_mut().push("first")), 50, 0);
        debounced.call(Box::new(|| log.borrow_mut().push("second")), 50, 20);

        // The first closure's original deadline passes without firing.
        assert!(!debounced.run_due(50));
        assert!(debounced.run_due(70));
        assert!(!debounced.run_due(500));

        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn zero_delay_is_deferred_to_next_poll() {
        let mut debounced = DebouncedCall::new();
        assert!(debounced.call_soon(7_u8, 100));
        assert!(debounced.is_pending());
        assert_eq!(debounced.deadline(), Some(100));
        assert_eq!(debounced.poll(100), Some(7));
        assert!(!debounced.is_pending());
    }

    #[test]
    fn cancel_previous_drops_without_firing() {
        let mut debounced = DebouncedCall::new();
        debounced.call(1_u8, 10, 0);
        assert!(debounced.cancel_previous());
        assert!(!debounced.cancel_previous(), "nothing left to cancel");
        assert_eq!(debounced.poll(1000), None);
    }

    #[test]
    fn lock_drops_calls_until_expiry() {
        let mut debounced = DebouncedCall::new();
        debounced.call("hide", 0, 1000);
        debounced.lock(100, 1000);

        // A racing show inside the window is dropped; the hide survives.
        assert!(!debounced.call("show", 0, 1050));
        assert_eq!(debounced.pending().map(|p| p.action), Some("hide"));
        assert_eq!(debounced.poll(1050), Some("hide"));

        // Exactly at expiry the lock no longer applies.
        assert!(debounced.is_locked(1099));
        assert!(!debounced.is_locked(1100));
        assert!(debounced.call("show", 0, 1100));
        assert_eq!(debounced.poll(1100), Some("show"));
    }

    #[test]
    fn relock_replaces_window() {
        let mut debounced: DebouncedCall<()> = DebouncedCall::new();
        debounced.lock(100, 0);
        debounced.lock(10, 5);
        assert!(!debounced.is_locked(15));
    }

    #[test]
    fn reset_clears_pending_and_lock() {
        let mut debounced = DebouncedCall::new();
        debounced.call(3_u32, 10, 0);
        debounced.lock(1000, 0);
        debounced.reset();
        assert!(!debounced.is_pending());
        assert!(!debounced.is_locked(1));
        assert!(debounced.call(4, 0, 1));
    }

    #[test]
    fn poll_before_due_keeps_action() {
        let mut debounced = DebouncedCall::new();
        debounced.call('x', 30, 10);
        assert_eq!(debounced.poll(39), None);
        assert_eq!(debounced.deadline(), Some(40));
        assert_eq!(debounced.poll(41), Some('x'));
    }
}
