// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=legend_scroll --heading-base-level=0

//! Legend Scroll: scroll-into-view geometry for scrollable containers.
//!
//! Given the state of a scrollable container ([`ScrollViewport`]: its visible
//! size, the size of its content, and the current scroll offset) and the
//! bounds of one child in content coordinates, this crate answers:
//!
//! - is the child fully or partially visible?
//! - which offset brings it into view with a given [`ScrollAlign`]?
//! - should the container scroll at all ([`ScrollViewport::scroll_into_view`])?
//!
//! It does not animate and does not own any scrollable widget. The host applies
//! the returned [`ScrollRequest`], honoring its [`ScrollBehavior`], and reports
//! the new offset back via [`ScrollViewport::set_scroll_offset`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use legend_scroll::{ScrollAlign, ScrollBehavior, ScrollViewport};
//!
//! // A 100px tall container over 400px of content.
//! let viewport = ScrollViewport::new(Size::new(200.0, 100.0), Size::new(200.0, 400.0));
//!
//! // A row at y = 250..270 is out of view: center it.
//! let row = Rect::new(0.0, 250.0, 200.0, 270.0);
//! let request = viewport
//!     .scroll_into_view(row, ScrollAlign::Center, ScrollBehavior::Smooth)
//!     .expect("row is hidden");
//! assert_eq!(request.offset, Vec2::new(0.0, 210.0));
//!
//! // A row already on screen needs no scrolling.
//! let top = Rect::new(0.0, 10.0, 200.0, 30.0);
//! assert!(viewport.scroll_into_view(top, ScrollAlign::Center, ScrollBehavior::Smooth).is_none());
//! ```
//!
//! All geometry is in logical pixels and expected to be finite.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{ScrollAlign, ScrollBehavior, ScrollRequest, ScrollViewport};
