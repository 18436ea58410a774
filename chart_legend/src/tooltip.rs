// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single shared tooltip.
//!
//! At most one tooltip exists per legend. Show and hide requests go through
//! one [`DebouncedCall`], so the latest request wins, and an Escape dismissal
//! locks it so a show that was already on its way cannot re-open the tooltip.

use alloc::string::String;

use kurbo::Rect;
use legend_debounce::DebouncedCall;

use crate::item::{AxisGroup, LegendItem};
use crate::layout::TooltipPosition;

/// Tooltip content for one item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TooltipContent {
    /// Heading line.
    pub header: String,
    /// Main content.
    pub body: String,
    /// Optional trailing content (links, hints).
    pub footer: Option<String>,
}

/// Produces tooltip content on demand.
///
/// Returning `None` suppresses the tooltip for that item. Any
/// `Fn(&LegendItem<K>) -> Option<TooltipContent>` closure qualifies.
pub trait TooltipContentProvider<K> {
    /// Returns the content for `item`, if it should have a tooltip.
    fn content(&self, item: &LegendItem<K>) -> Option<TooltipContent>;
}

impl<K, F> TooltipContentProvider<K> for F
where
    F: Fn(&LegendItem<K>) -> Option<TooltipContent>,
{
    fn content(&self, item: &LegendItem<K>) -> Option<TooltipContent> {
        self(item)
    }
}

/// A provider that never shows a tooltip.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTooltip;

impl<K> TooltipContentProvider<K> for NoTooltip {
    fn content(&self, _item: &LegendItem<K>) -> Option<TooltipContent> {
        None
    }
}

/// The tooltip as the host should render it right now.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView<'a, K> {
    /// The item that owns the tooltip.
    pub item: &'a LegendItem<K>,
    /// The group that renders the item.
    pub group: AxisGroup,
    /// Resolved content.
    pub content: TooltipContent,
    /// Bounds of the anchoring item in its group's content coordinates.
    pub anchor: Option<Rect>,
    /// Which side of the anchor to open on.
    pub position: TooltipPosition,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TooltipTransition<K> {
    Show(K),
    Hide,
}

/// Debounced ownership of the shown tooltip.
#[derive(Debug)]
pub(crate) struct TooltipState<K> {
    shown: Option<K>,
    debounce: DebouncedCall<TooltipTransition<K>>,
}

impl<K> Default for TooltipState<K> {
    fn default() -> Self {
        Self {
            shown: None,
            debounce: DebouncedCall::new(),
        }
    }
}

impl<K: Clone + PartialEq> TooltipState<K> {
    pub(crate) fn shown(&self) -> Option<&K> {
        self.shown.as_ref()
    }

    pub(crate) fn request_show(&mut self, id: K, delay_ms: u64, now: u64) -> bool {
        self.debounce.call(TooltipTransition::Show(id), delay_ms, now)
    }

    pub(crate) fn request_hide(&mut self, delay_ms: u64, now: u64) -> bool {
        self.debounce.call(TooltipTransition::Hide, delay_ms, now)
    }

    /// Cancels a pending hide, keeping the current tooltip open.
    pub(crate) fn keep_open(&mut self) {
        if matches!(
            self.debounce.pending().map(|p| &p.action),
            Some(TooltipTransition::Hide)
        ) {
            self.debounce.cancel_previous();
        }
    }

    /// Hides immediately and blocks new requests for `lock_ms`.
    ///
    /// Returns the item that owned the tooltip.
    pub(crate) fn force_hide(&mut self, lock_ms: u64, now: u64) -> Option<K> {
        self.debounce.cancel_previous();
        self.debounce.lock(lock_ms, now);
        self.shown.take()
    }

    /// Hides immediately without locking; used when the owner disappears.
    ///
    /// A pending show survives when `live` still accepts its target, so the
    /// item under the pointer gets its tooltip on the next poll.
    pub(crate) fn hide_now(&mut self, live: impl Fn(&K) -> bool) -> Option<K> {
        let keep = matches!(
            self.debounce.pending().map(|p| &p.action),
            Some(TooltipTransition::Show(id)) if live(id)
        );
        if !keep {
            self.debounce.cancel_previous();
        }
        self.shown.take()
    }

    /// Applies a due transition. Returns the new shown item when it changed.
    ///
    /// `accept` vets a pending show against the current snapshot.
    pub(crate) fn poll(&mut self, now: u64, accept: impl Fn(&K) -> bool) -> Option<Option<K>> {
        let next = match self.debounce.poll(now)? {
            TooltipTransition::Show(id) if accept(&id) => Some(id),
            TooltipTransition::Show(_) => return None,
            TooltipTransition::Hide => None,
        };
        if next == self.shown {
            return None;
        }
        self.shown.clone_from(&next);
        Some(next)
    }

    pub(crate) fn deadline(&self) -> Option<u64> {
        self.debounce.deadline()
    }

    pub(crate) fn reset(&mut self) {
        self.shown = None;
        self.debounce.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_request_wins() {
        let mut tooltip = TooltipState::default();
        tooltip.request_show('a', 0, 0);
        tooltip.request_hide(0, 0);
        assert_eq!(tooltip.poll(0, |_| true), None, "hide over nothing is no change");
        assert_eq!(tooltip.shown(), None);

        tooltip.request_hide(0, 1);
        tooltip.request_show('b', 0, 1);
        assert_eq!(tooltip.poll(1, |_| true), Some(Some('b')));
    }

    #[test]
    fn force_hide_locks_out_racing_show() {
        let mut tooltip = TooltipState::default();
        tooltip.request_show('a', 0, 0);
        tooltip.poll(0, |_| true);
        tooltip.request_show('b', 20, 5);

        assert_eq!(tooltip.force_hide(100, 10), Some('a'));
        assert!(!tooltip.request_show('b', 0, 50));
        assert_eq!(tooltip.poll(200, |_| true), None);
        assert_eq!(tooltip.shown(), None);

        assert!(tooltip.request_show('b', 0, 110));
        assert_eq!(tooltip.poll(110, |_| true), Some(Some('b')));
    }

    #[test]
    fn keep_open_only_cancels_hides() {
        let mut tooltip = TooltipState::default();
        tooltip.request_hide(10, 0);
        tooltip.keep_open();
        assert_eq!(tooltip.deadline(), None);

        tooltip.request_show('a', 10, 0);
        tooltip.keep_open();
        assert_eq!(tooltip.deadline(), Some(10));
    }

    #[test]
    fn hide_now_keeps_show_for_live_item() {
        let mut tooltip = TooltipState::default();
        tooltip.request_show('a', 0, 0);
        tooltip.poll(0, |_| true);

        tooltip.request_show('b', 0, 10);
        assert_eq!(tooltip.hide_now(|id| *id != 'a'), Some('a'));
        assert_eq!(tooltip.poll(10, |_| true), Some(Some('b')));

        tooltip.request_show('c', 0, 20);
        assert_eq!(tooltip.hide_now(|id| *id != 'c'), Some('b'));
        assert_eq!(tooltip.deadline(), None, "show for a removed item is dropped");

        tooltip.request_hide(0, 30);
        assert_eq!(tooltip.hide_now(|_| true), None);
        assert_eq!(tooltip.deadline(), None);
    }

    #[test]
    fn rejected_show_is_dropped() {
        let mut tooltip = TooltipState::default();
        tooltip.request_show('a', 0, 0);
        assert_eq!(tooltip.poll(0, |id| *id != 'a'), None);
        assert_eq!(tooltip.shown(), None);
        assert_eq!(tooltip.deadline(), None);
    }
}
