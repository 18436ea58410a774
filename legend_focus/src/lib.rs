// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=legend_focus --heading-base-level=0

//! Legend Focus: roving tab stop and keyboard navigation primitives.
//!
//! A toolbar-like widget (a chart legend, a segmented control, a tab strip)
//! exposes exactly one of its items to sequential Tab navigation and lets the
//! arrow keys move between the rest. This crate models that pattern as:
//!
//! - **Keys and intents** ([`Key`], [`KeyIntent`], [`Navigation`]): the small key
//!   vocabulary a toolbar intercepts, and what each key means. Every other key
//!   maps to `None` and must pass through untouched.
//! - **A read-only view of candidates** ([`FocusEntry`] / [`FocusSpace`]) in
//!   display order.
//! - **Pluggable policies**: [`FocusPolicy`] picks the next item for a
//!   navigation intent ([`DefaultPolicy`] steps linearly with optional
//!   wraparound), and [`TabStopPolicy`] picks which item holds the tab stop
//!   ([`PreferredOrFirst`]).
//! - **State** ([`RovingTabStop`]): the current tab stop and focused item, plus
//!   the focus hand-off when the focused tab stop disappears.
//!
//! ## Minimal example
//!
//! Circular arrow navigation over three items:
//!
//! ```rust
//! use legend_focus::{
//!     DefaultPolicy, FocusEntry, FocusPolicy, FocusSpace, Key, KeyIntent, Navigation,
//! };
//!
//! let entries = [FocusEntry::new("a"), FocusEntry::new("b"), FocusEntry::new("c")];
//! let space = FocusSpace { nodes: &entries };
//! let policy = DefaultPolicy::default();
//!
//! let Some(KeyIntent::Navigate(nav)) = Key::ArrowRight.intent() else {
//!     unreachable!()
//! };
//! assert_eq!(nav, Navigation::Next);
//!
//! // Right from the last item wraps to the first…
//! assert_eq!(policy.next(Some(&"c"), nav, &space), Some("a"));
//! // …and End always lands on the last.
//! assert_eq!(policy.next(Some(&"a"), Navigation::Last, &space), Some("c"));
//! ```
//!
//! ## Roving tab stop
//!
//! ```rust
//! use legend_focus::{FocusEntry, FocusSpace, PreferredOrFirst, RovingTabStop};
//!
//! let entries = [FocusEntry::new(1_u32), FocusEntry::new(2), FocusEntry::new(3)];
//! let space = FocusSpace { nodes: &entries };
//! let mut roving = RovingTabStop::new();
//!
//! // Nothing preferred: the first item is the tab stop.
//! roving.sync(&PreferredOrFirst, &space, None);
//! assert_eq!(roving.tab_index(&1), 0);
//! assert_eq!(roving.tab_index(&2), -1);
//!
//! // A preferred item (for example the highlighted one) takes the stop.
//! roving.sync(&PreferredOrFirst, &space, Some(&3));
//! assert_eq!(roving.tab_stop(), Some(&3));
//! ```
//!
//! The core types are generic over the item identifier `K`; any cloneable,
//! comparable handle works (string ids, interned symbols, integer keys).
//!
//! This crate is `no_std`.

#![no_std]

mod keys;
mod policy;
mod roving;

pub use keys::{Key, KeyIntent, KeyOutcome, Modifiers, Navigation};
pub use policy::{
    DefaultPolicy, FocusEntry, FocusPolicy, FocusSpace, PreferredOrFirst, TabStopPolicy, WrapMode,
};
pub use roving::{FocusMove, RovingTabStop};
