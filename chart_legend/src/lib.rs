// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chart_legend --heading-base-level=0

//! Chart Legend: a headless interaction core for interactive chart legends.
//!
//! A chart legend is a row or column of series entries. Users click an entry
//! to isolate its series, Ctrl/Cmd-click to toggle it, hover or focus it to
//! highlight the series in the chart and open a tooltip, and move between
//! entries with the arrow keys. This crate implements all of that as plain
//! state, without a renderer:
//!
//! - [`LegendItem`] is the chart-owned snapshot of one series. The legend never
//!   mutates it; changes are requested through [`LegendEffect`]s.
//! - [`ItemTrigger`] derives the presentation of one entry ([`TriggerState`],
//!   [`AriaButton`]) and relays its raw input ([`TriggerInput`]).
//! - [`LegendGroup`] turns an ordered partition of items into a toolbar with a
//!   roving tab stop, circular arrow navigation and scroll-into-view.
//! - [`ChartLegend`] splits dual-axis items into two groups, resolves the
//!   responsive [`ResolvedLayout`], owns the single shared tooltip, and debounces
//!   highlight and tooltip transitions.
//!
//! ## Driving the legend
//!
//! Every input carries a monotonic millisecond timestamp. Nothing happens
//! behind the host's back: timers fire inside [`ChartLegend::poll`], which the
//! host calls at [`ChartLegend::next_deadline`], and every outcome lands in an
//! effect queue drained with [`ChartLegend::drain_effects`].
//!
//! ```rust
//! use chart_legend::{
//!     AxisGroup, ChartLegend, Key, LegendConfig, LegendEffect, LegendItem, NoTooltip,
//!     TriggerInput,
//! };
//!
//! let mut legend = ChartLegend::new(LegendConfig::default(), NoTooltip)?;
//! legend.set_items(
//!     vec![
//!         LegendItem::new("cpu", "CPU"),
//!         LegendItem::new("mem", "Memory"),
//!         LegendItem::new("disk", "Disk").with_visible(false),
//!     ],
//!     0,
//! );
//!
//! // The first entry is the single tab stop.
//! let group = legend.group(AxisGroup::Default).unwrap();
//! assert_eq!(group.tab_stop(), Some(&"cpu"));
//!
//! // Hovering requests a highlight; it is announced on the next poll.
//! legend.handle_item_input(&"mem", TriggerInput::PointerEnter, 10);
//! assert_eq!(legend.next_deadline(), Some(10));
//! legend.poll(10);
//! assert_eq!(legend.drain_effects(), [LegendEffect::HighlightEnter("mem")]);
//!
//! // Left from the first entry wraps to the last.
//! let outcome = legend.handle_item_input(&"cpu", TriggerInput::KeyDown(Key::ArrowLeft), 20);
//! assert!(outcome.is_handled());
//! assert_eq!(
//!     legend.drain_effects(),
//!     [LegendEffect::Focus { group: AxisGroup::Default, id: "disk" }]
//! );
//! # Ok::<(), chart_legend::ConfigError>(())
//! ```
//!
//! ## Tooltips
//!
//! Tooltip content comes from a [`TooltipContentProvider`], usually a closure.
//! Returning `None` suppresses the tooltip for that item. While a tooltip is
//! shown, [`ChartLegend::document_listener_active`] asks the host to route
//! document key-downs through [`ChartLegend::handle_document_key`] so Escape can
//! dismiss it and return focus to its item.
//!
//! The core types are generic over the item identifier `K` ([`ItemKey`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod group;
mod item;
mod layout;
mod legend;
mod registry;
mod tooltip;
mod trigger;
mod visibility;

pub use config::{ConfigError, LegendConfig};
pub use group::{GroupAction, GroupActions, GroupResponse, LegendGroup, ToolbarAria};
pub use item::{AxisGroup, ItemKey, ItemMarker, LegendItem, MarkerKind};
pub use layout::{
    LayoutKind, LegendType, Orientation, ResolvedLayout, TooltipPosition, resolve_layout,
};
pub use legend::{ChartLegend, LegendEffect, LegendProps};
pub use registry::{ElementRegistry, RegisteredElement};
pub use tooltip::{NoTooltip, TooltipContent, TooltipContentProvider, TooltipView};
pub use trigger::{AriaButton, BlurTarget, ItemTrigger, TriggerAction, TriggerInput, TriggerState};
pub use visibility::{select_visible, toggle_visible};

pub use legend_focus::{Key, KeyOutcome, Modifiers};
pub use legend_scroll::{ScrollBehavior, ScrollRequest, ScrollViewport};
