// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=legend_debounce --heading-base-level=0

//! Legend Debounce: delayed invocation for event-loop driven UI state.
//!
//! Interactive widgets routinely need "do this a little later, unless something
//! newer happens first": clearing a hover highlight after the pointer leaves,
//! opening a tooltip once focus settles, scrolling an item into view after a
//! burst of keyboard navigation. This crate provides one small primitive for
//! that pattern, [`DebouncedCall`], plus a [`Clock`] abstraction for hosts and
//! tests.
//!
//! A [`DebouncedCall`] holds at most one pending action:
//!
//! - [`DebouncedCall::call`] schedules an action `delay_ms` after `now`,
//!   replacing whatever was pending (last call wins).
//! - [`DebouncedCall::cancel_previous`] drops the pending action without firing it.
//! - [`DebouncedCall::lock`] rejects every `call` issued until the lock expires.
//!   This is how a "hide" keeps a racing "show" from re-opening something the
//!   user just dismissed.
//!
//! Nothing here owns a platform timer. The host passes a monotonic millisecond
//! timestamp into every operation, arms a wake-up for [`DebouncedCall::deadline`],
//! and calls [`DebouncedCall::poll`] when it fires. This keeps the primitive
//! `no_std`, deterministic, and trivially testable with [`ManualClock`].
//!
//! ## Minimal example
//!
//! ```rust
//! use legend_debounce::DebouncedCall;
//!
//! let mut debounced: DebouncedCall<&str> = DebouncedCall::new();
//!
//! // Two calls inside the delay window: only the second survives.
//! debounced.call("first", 50, 1000);
//! debounced.call("second", 50, 1010);
//! assert_eq!(debounced.deadline(), Some(1060));
//!
//! assert_eq!(debounced.poll(1059), None);
//! assert_eq!(debounced.poll(1060), Some("second"));
//! assert_eq!(debounced.poll(2000), None);
//! ```
//!
//! Closures work too; [`DebouncedCall::run_due`] invokes a due action in place:
//!
//! ```rust
//! use core::cell::Cell;
//! use legend_debounce::{Clock, DebouncedCall, ManualClock};
//!
//! let hits = Cell::new(0);
//! let mut clock = ManualClock::new(0);
//! let mut debounced: DebouncedCall<Box<dyn FnOnce() + '_>> = DebouncedCall::new();
//!
//! debounced.call(Box::new(|| hits.set(hits.get() + 1)), 50, clock.now_ms());
//! clock.advance(50);
//! assert!(debounced.run_due(clock.now_ms()));
//! assert_eq!(hits.get(), 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod clock;
mod debounce;

pub use clock::{Clock, ManualClock};
pub use debounce::{DebouncedCall, Pending};
