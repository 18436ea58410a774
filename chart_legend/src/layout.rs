// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout resolution.
//!
//! The requested [`LegendType`], whether the chart is dual-axis, and the
//! measured container width resolve into a single [`ResolvedLayout`]. The
//! host renders from that descriptor alone instead of branching on the
//! legend type throughout.
//!
//! ## Stacking policy
//!
//! - [`LegendType::Side`] always stacks groups vertically ([`LayoutKind::Stacked`]).
//! - A bottom-family legend with one group is [`LayoutKind::Inline`] at any width.
//! - A bottom-family legend with two groups places them side by side in a row:
//!   [`LayoutKind::Inline`] for [`LegendType::Bottom`], [`LayoutKind::AxisLeft`] /
//!   [`LayoutKind::AxisRight`] for the axis-aligned variants. When the container
//!   is narrower than the threshold, every one of these becomes
//!   [`LayoutKind::ForcedStack`].
//! - Until the container is measured, nothing is forced.

use smallvec::{SmallVec, smallvec};

use crate::item::AxisGroup;

/// Requested legend placement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendType {
    /// Below the chart, items flowing inline.
    #[default]
    Bottom,
    /// Beside the chart, items stacked in a column.
    Side,
    /// Below the chart; dual-axis groups aligned to the left (primary) axis.
    BottomLeft,
    /// Below the chart; the opposite group aligned to the right (opposite) axis.
    BottomRight,
}

/// The concrete arrangement chosen for one render.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Groups flow inline along the bottom.
    Inline,
    /// Groups are stacked in a side column.
    Stacked,
    /// Dual-axis groups share a row, packed towards the left.
    AxisLeft,
    /// Dual-axis groups share a row, the opposite group pushed to the right.
    AxisRight,
    /// A row layout that was too narrow and got stacked.
    ForcedStack,
}

/// Orientation of the divider between two groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A horizontal rule between vertically stacked groups.
    Horizontal,
    /// A vertical rule between groups in a row.
    Vertical,
}

/// Which side of its anchor the tooltip opens on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TooltipPosition {
    /// Below the anchored item.
    Bottom,
    /// To the left of the anchored item.
    Left,
}

/// Everything the host needs to arrange the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLayout {
    /// The chosen arrangement.
    pub kind: LayoutKind,
    /// Rendered groups, in order.
    pub groups: SmallVec<[AxisGroup; 2]>,
    /// Divider between the two groups, if there are two.
    pub divider: Option<Orientation>,
    /// Where the shared tooltip opens.
    pub tooltip_position: TooltipPosition,
    /// Maximum container height for bottom-family layouts.
    pub max_height: Option<f64>,
}

impl ResolvedLayout {
    /// Returns `true` if groups are arranged vertically.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        matches!(self.kind, LayoutKind::Stacked | LayoutKind::ForcedStack)
    }

    /// Returns `true` if two groups are rendered.
    #[must_use]
    pub fn is_dual_axis(&self) -> bool {
        self.groups.len() == 2
    }
}

impl Default for ResolvedLayout {
    fn default() -> Self {
        resolve_layout(LegendType::Bottom, false, None, 400.0, None)
    }
}

/// Resolves the layout for one render.
///
/// `width` is the measured container width, or `None` before the first
/// measurement. Stacking is forced when `width < stack_threshold`.
#[must_use]
pub fn resolve_layout(
    legend_type: LegendType,
    dual_axis: bool,
    width: Option<f64>,
    stack_threshold: f64,
    max_height: Option<f64>,
) -> ResolvedLayout {
    let narrow = width.is_some_and(|w| w < stack_threshold);
    let row = match legend_type {
        LegendType::Side => LayoutKind::Stacked,
        _ if !dual_axis => LayoutKind::Inline,
        LegendType::Bottom => LayoutKind::Inline,
        LegendType::BottomLeft => LayoutKind::AxisLeft,
        LegendType::BottomRight => LayoutKind::AxisRight,
    };
    let kind = if dual_axis && narrow && row != LayoutKind::Stacked {
        LayoutKind::ForcedStack
    } else {
        row
    };

    let stacked = matches!(kind, LayoutKind::Stacked | LayoutKind::ForcedStack);
    let groups: SmallVec<[AxisGroup; 2]> = if dual_axis {
        smallvec![AxisGroup::Default, AxisGroup::Opposite]
    } else {
        smallvec![AxisGroup::Default]
    };
    let divider = dual_axis.then_some(if stacked {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    });

    ResolvedLayout {
        kind,
        groups,
        divider,
        tooltip_position: if stacked {
            TooltipPosition::Left
        } else {
            TooltipPosition::Bottom
        },
        max_height: if legend_type == LegendType::Side {
            None
        } else {
            max_height
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_dual_axis_rows_are_forced_to_stack() {
        for legend_type in [
            LegendType::Bottom,
            LegendType::BottomLeft,
            LegendType::BottomRight,
        ] {
            let wide = resolve_layout(legend_type, true, Some(500.0), 400.0, None);
            assert!(!wide.is_stacked(), "{legend_type:?} at 500px");
            let narrow = resolve_layout(legend_type, true, Some(300.0), 400.0, None);
            assert_eq!(narrow.kind, LayoutKind::ForcedStack);
            assert_eq!(narrow.tooltip_position, TooltipPosition::Left);
            assert_eq!(narrow.divider, Some(Orientation::Horizontal));
        }
    }

    #[test]
    fn bottom_right_switches_at_threshold() {
        let wide = resolve_layout(LegendType::BottomRight, true, Some(500.0), 400.0, None);
        assert_eq!(wide.kind, LayoutKind::AxisRight);
        assert_eq!(wide.divider, Some(Orientation::Vertical));
        assert_eq!(wide.tooltip_position, TooltipPosition::Bottom);

        // The threshold itself is not narrow.
        let edge = resolve_layout(LegendType::BottomRight, true, Some(400.0), 400.0, None);
        assert_eq!(edge.kind, LayoutKind::AxisRight);
        let below = resolve_layout(LegendType::BottomRight, true, Some(399.5), 400.0, None);
        assert_eq!(below.kind, LayoutKind::ForcedStack);
    }

    #[test]
    fn single_group_never_stacks_on_bottom() {
        let narrow = resolve_layout(LegendType::BottomLeft, false, Some(100.0), 400.0, Some(80.0));
        assert_eq!(narrow.kind, LayoutKind::Inline);
        assert_eq!(narrow.groups.as_slice(), &[AxisGroup::Default]);
        assert_eq!(narrow.divider, None);
        assert_eq!(narrow.max_height, Some(80.0));
    }

    #[test]
    fn side_always_stacks_and_ignores_max_height() {
        for dual in [false, true] {
            let layout = resolve_layout(LegendType::Side, dual, Some(900.0), 400.0, Some(80.0));
            assert_eq!(layout.kind, LayoutKind::Stacked);
            assert_eq!(layout.tooltip_position, TooltipPosition::Left);
            assert_eq!(layout.max_height, None);
        }
    }

    #[test]
    fn unmeasured_width_does_not_force() {
        let layout = resolve_layout(LegendType::Bottom, true, None, 400.0, None);
        assert_eq!(layout.kind, LayoutKind::Inline);
        assert!(layout.is_dual_axis());
    }
}
