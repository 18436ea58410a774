// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state of one container and index-free scroll-into-view.

use kurbo::{Point, Rect, Size, Vec2};

/// Alignment mode when scrolling a child into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the start (top/leading edge) of the child with the viewport.
    Start,
    /// Center the child within the viewport.
    Center,
    /// Align the end (bottom/trailing edge) of the child with the viewport.
    End,
    /// Move just enough to make the child fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// How the host should apply a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target offset.
    Instant,
    /// Animate towards the target offset.
    Smooth,
}

/// A scroll the host should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Target scroll offset, already clamped to the scrollable range.
    pub offset: Vec2,
    /// How to get there.
    pub behavior: ScrollBehavior,
}

/// Scroll state for one scrollable container.
///
/// Child bounds passed to the queries are in content coordinates: `(0, 0)` is
/// the top-left of the scrolled content, independent of the current offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollViewport {
    size: Size,
    content_size: Size,
    scroll_offset: Vec2,
}

impl Default for ScrollViewport {
    fn default() -> Self {
        Self::new(Size::ZERO, Size::ZERO)
    }
}

impl ScrollViewport {
    /// Creates a viewport scrolled to the origin.
    #[must_use]
    pub fn new(size: Size, content_size: Size) -> Self {
        Self {
            size: non_negative(size),
            content_size: non_negative(content_size),
            scroll_offset: Vec2::ZERO,
        }
    }

    /// Returns the visible size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the size of the scrolled content.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    /// Updates the visible size and re-clamps the offset.
    pub fn set_size(&mut self, size: Size) {
        self.size = non_negative(size);
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Updates the content size and re-clamps the offset.
    pub fn set_content_size(&mut self, content_size: Size) {
        self.content_size = non_negative(content_size);
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Sets the scroll offset, clamped to the scrollable range.
    pub fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll_offset = self.clamp_offset(offset);
    }

    /// Returns the largest valid scroll offset on each axis.
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        Vec2::new(
            (self.content_size.width - self.size.width).max(0.0),
            (self.content_size.height - self.size.height).max(0.0),
        )
    }

    /// Returns the visible region in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO + self.scroll_offset, self.size)
    }

    /// Returns `true` if `child` lies entirely within the visible region.
    #[must_use]
    pub fn is_fully_visible(&self, child: Rect) -> bool {
        let view = self.visible_rect();
        child.x0 >= view.x0 && child.x1 <= view.x1 && child.y0 >= view.y0 && child.y1 <= view.y1
    }

    /// Returns `true` if `child` overlaps the visible region at all.
    #[must_use]
    pub fn is_partially_visible(&self, child: Rect) -> bool {
        let view = self.visible_rect();
        child.x1 > view.x0 && child.x0 < view.x1 && child.y1 > view.y0 && child.y0 < view.y1
    }

    /// Computes the offset that brings `child` into view with `align`.
    ///
    /// Each axis is handled independently. An axis on which the child is
    /// already fully visible keeps its current offset, so a vertical list
    /// never jitters sideways.
    #[must_use]
    pub fn offset_for(&self, child: Rect, align: ScrollAlign) -> Vec2 {
        let view = self.visible_rect();
        let x = align_axis(child.x0, child.x1, view.x0, self.size.width, align);
        let y = align_axis(child.y0, child.y1, view.y0, self.size.height, align);
        self.clamp_offset(Vec2::new(x, y))
    }

    /// Returns a scroll request for `child`, or `None` if it is already fully
    /// visible or the clamped target equals the current offset.
    #[must_use]
    pub fn scroll_into_view(
        &self,
        child: Rect,
        align: ScrollAlign,
        behavior: ScrollBehavior,
    ) -> Option<ScrollRequest> {
        if self.is_fully_visible(child) {
            return None;
        }
        let offset = self.offset_for(child, align);
        (offset != self.scroll_offset).then_some(ScrollRequest { offset, behavior })
    }

    fn clamp_offset(&self, offset: Vec2) -> Vec2 {
        let max = self.max_offset();
        Vec2::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y))
    }
}

fn align_axis(start: f64, end: f64, view_start: f64, viewport: f64, align: ScrollAlign) -> f64 {
    let view_end = view_start + viewport;
    if start >= view_start && end <= view_end {
        return view_start;
    }
    match align {
        ScrollAlign::Start => start,
        ScrollAlign::End => end - viewport,
        ScrollAlign::Center => (start + end) / 2.0 - viewport / 2.0,
        ScrollAlign::Nearest => {
            if start < view_start {
                start
            } else {
                end - viewport
            }
        }
    }
}

fn non_negative(size: Size) -> Size {
    Size::new(size.width.max(0.0), size.height.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> ScrollViewport {
        // 10 rows of 10px in a 30px tall, 50px wide container.
        ScrollViewport::new(Size::new(50.0, 30.0), Size::new(50.0, 100.0))
    }

    fn row(i: u32) -> Rect {
        let y = f64::from(i) * 10.0;
        Rect::new(0.0, y, 50.0, y + 10.0)
    }

    #[test]
    fn alignment_modes_match_expectations() {
        let mut vp = column();

        // Start: row 3 at top → offset 30.
        assert_eq!(vp.offset_for(row(3), ScrollAlign::Start).y, 30.0);
        // End: row 3's end at viewport end → offset 10.
        assert_eq!(vp.offset_for(row(3), ScrollAlign::End).y, 10.0);
        // Center: row 3 centered → offset 20.
        assert_eq!(vp.offset_for(row(3), ScrollAlign::Center).y, 20.0);

        // Nearest from below scrolls just enough; from above aligns start.
        assert_eq!(vp.offset_for(row(5), ScrollAlign::Nearest).y, 30.0);
        vp.set_scroll_offset(Vec2::new(0.0, 60.0));
        assert_eq!(vp.offset_for(row(2), ScrollAlign::Nearest).y, 20.0);
    }

    #[test]
    fn fully_visible_child_does_not_scroll() {
        let vp = column();
        assert!(vp.is_fully_visible(row(2)));
        assert!(
            vp.scroll_into_view(row(2), ScrollAlign::Center, ScrollBehavior::Smooth)
                .is_none()
        );
    }

    #[test]
    fn partially_visible_child_is_centered() {
        let mut vp = column();
        vp.set_scroll_offset(Vec2::new(0.0, 5.0));
        assert!(vp.is_partially_visible(row(3)));
        assert!(!vp.is_fully_visible(row(3)));

        let req = vp
            .scroll_into_view(row(3), ScrollAlign::Center, ScrollBehavior::Smooth)
            .expect("row 3 is cut off");
        assert_eq!(req.offset, Vec2::new(0.0, 20.0));
        assert_eq!(req.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn targets_are_clamped_to_content() {
        let vp = column();
        // Centering the last row would overshoot; clamp to max offset 70.
        let req = vp
            .scroll_into_view(row(9), ScrollAlign::Center, ScrollBehavior::Instant)
            .expect("last row is hidden");
        assert_eq!(req.offset.y, 70.0);
        assert_eq!(vp.max_offset(), Vec2::new(0.0, 70.0));
    }

    #[test]
    fn resizing_reclamps_offset() {
        let mut vp = column();
        vp.set_scroll_offset(Vec2::new(0.0, 70.0));
        vp.set_size(Size::new(50.0, 80.0));
        assert_eq!(vp.scroll_offset().y, 20.0);
        vp.set_content_size(Size::new(50.0, 40.0));
        assert_eq!(vp.scroll_offset(), Vec2::ZERO);
    }

    #[test]
    fn horizontal_axis_is_left_alone_when_visible() {
        let mut vp = ScrollViewport::new(Size::new(100.0, 30.0), Size::new(300.0, 100.0));
        vp.set_scroll_offset(Vec2::new(40.0, 0.0));
        let child = Rect::new(60.0, 50.0, 90.0, 60.0);
        let target = vp.offset_for(child, ScrollAlign::Center);
        assert_eq!(target.x, 40.0);
        assert_eq!(target.y, 40.0);
    }
}
