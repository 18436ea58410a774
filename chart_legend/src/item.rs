// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series entries as supplied by the chart.

use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

/// Bounds required of item identifiers.
///
/// Identifiers must be unique within one legend and stable across snapshots.
/// String ids, interned symbols, and integer keys all qualify.
pub trait ItemKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> ItemKey for T {}

/// Which Y axis a series is plotted against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisGroup {
    /// The primary axis. Single-axis legends put every item here.
    Default,
    /// The secondary (opposite) axis of a dual-axis chart.
    Opposite,
}

/// Shape of the series swatch drawn next to the label.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A short solid line.
    Line,
    /// A short dashed line.
    DashedLine,
    /// A filled square.
    #[default]
    Rectangle,
    /// An outlined square.
    HollowRectangle,
}

/// Presentation of the series swatch; passed through to the host untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemMarker {
    /// Swatch shape.
    pub kind: MarkerKind,
    /// Swatch color as `0xRRGGBBAA`.
    pub color: u32,
}

/// One series entry.
///
/// The chart owns these; the legend reads a snapshot per update and never
/// mutates it. Visibility and highlight changes are requested through
/// [`LegendEffect`](crate::LegendEffect)s and come back in the next snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendItem<K> {
    /// Unique, stable identifier.
    pub id: K,
    /// Display label.
    pub name: String,
    /// Whether the series is currently drawn.
    pub visible: bool,
    /// Whether the series is the current focus of attention.
    pub highlighted: bool,
    /// Whether the series belongs to the opposite Y axis.
    pub opposite_axis: bool,
    /// Swatch presentation.
    pub marker: ItemMarker,
}

impl<K> LegendItem<K> {
    /// Creates a visible, unhighlighted item on the default axis.
    pub fn new(id: K, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            highlighted: false,
            opposite_axis: false,
            marker: ItemMarker::default(),
        }
    }

    /// Sets visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the highlight flag.
    #[must_use]
    pub fn with_highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Places the item on the opposite axis.
    #[must_use]
    pub fn on_opposite_axis(mut self) -> Self {
        self.opposite_axis = true;
        self
    }

    /// Sets the swatch.
    #[must_use]
    pub fn with_marker(mut self, marker: ItemMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Returns the axis group this item is partitioned into.
    #[must_use]
    pub fn axis(&self) -> AxisGroup {
        if self.opposite_axis {
            AxisGroup::Opposite
        } else {
            AxisGroup::Default
        }
    }
}
