// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One keyboard-navigable toolbar of legend items.
//!
//! ## Overview
//!
//! A [`LegendGroup`] owns one ordered partition of the legend's items and
//! everything needed to make it a toolbar with a roving tab stop:
//!
//! - an [`ElementRegistry`] rebuilt from every snapshot,
//! - a [`RovingTabStop`] resolved to the highlighted item, else the first,
//! - circular arrow navigation with Home/End jumps,
//! - a debounced scroll that centers a newly highlighted item once the
//!   pointer is out of the way.
//!
//! It interprets [`TriggerAction`]s and answers with [`GroupAction`]s; the
//! legend root applies those to its shared highlight and tooltip state.
//!
//! ## Highlight and tooltip bridging
//!
//! Pointer enter and keyboard focus both ask for a highlight (visible items
//! only) and a tooltip. Pointer leave and blur ask for both to clear, except
//! when focus moves into the tooltip itself.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use legend_debounce::DebouncedCall;
use legend_focus::{
    DefaultPolicy, FocusPolicy, FocusSpace, Key, KeyIntent, KeyOutcome, PreferredOrFirst,
    RovingTabStop,
};
use legend_scroll::{ScrollAlign, ScrollBehavior, ScrollRequest, ScrollViewport};
use smallvec::{SmallVec, smallvec};

use crate::item::{AxisGroup, ItemKey, LegendItem};
use crate::registry::ElementRegistry;
use crate::trigger::{BlurTarget, ItemTrigger, TriggerAction};

/// What a group asks of the legend root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupAction<K> {
    /// Announce a highlight for this item (debounced).
    ShowHighlight(K),
    /// Clear the highlight after the exit delay.
    ClearHighlight,
    /// Clear the highlight right away (Escape).
    DismissHighlight,
    /// Open the tooltip for this item (debounced).
    ShowTooltip(K),
    /// Close the tooltip (debounced).
    HideTooltip,
    /// Primary activation of an item.
    Select(K),
    /// Modifier activation of an item.
    Toggle(K),
    /// Move keyboard focus to this item's element.
    Focus(K),
}

/// A short list of [`GroupAction`]s.
pub type GroupActions<K> = SmallVec<[GroupAction<K>; 2]>;

/// Result of handling one trigger action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupResponse<K> {
    /// Whether the host should suppress the key's default handling.
    pub outcome: KeyOutcome,
    /// Requests for the legend root.
    pub actions: GroupActions<K>,
}

impl<K> GroupResponse<K> {
    fn pass(actions: GroupActions<K>) -> Self {
        Self {
            outcome: KeyOutcome::Ignored,
            actions,
        }
    }

    fn handled(actions: GroupActions<K>) -> Self {
        Self {
            outcome: KeyOutcome::Handled,
            actions,
        }
    }
}

/// Accessibility attributes of a group container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToolbarAria<'a> {
    /// Always `"toolbar"`.
    pub role: &'static str,
    /// `aria-label`, if one was supplied.
    pub label: Option<&'a str>,
}

/// One toolbar of legend items.
#[derive(Debug)]
pub struct LegendGroup<K> {
    axis: AxisGroup,
    title: Option<String>,
    label: Option<String>,
    items: Vec<LegendItem<K>>,
    registry: ElementRegistry<K>,
    roving: RovingTabStop<K>,
    policy: DefaultPolicy,
    viewport: ScrollViewport,
    pointer_inside: bool,
    any_highlighted: bool,
    highlighted: Option<K>,
    scroll: DebouncedCall<K>,
}

impl<K: ItemKey> LegendGroup<K> {
    /// Creates an empty group for `axis`.
    #[must_use]
    pub fn new(axis: AxisGroup) -> Self {
        Self {
            axis,
            title: None,
            label: None,
            items: Vec::new(),
            registry: ElementRegistry::new(),
            roving: RovingTabStop::new(),
            policy: DefaultPolicy::default(),
            viewport: ScrollViewport::default(),
            pointer_inside: false,
            any_highlighted: false,
            highlighted: None,
            scroll: DebouncedCall::new(),
        }
    }

    /// Returns the axis this group renders.
    #[must_use]
    pub fn axis(&self) -> AxisGroup {
        self.axis
    }

    /// Returns the group heading.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets the group heading and toolbar label.
    pub fn set_labels(&mut self, title: Option<String>, aria_label: Option<String>) {
        self.title = title;
        self.label = aria_label;
    }

    /// Returns the toolbar attributes.
    #[must_use]
    pub fn toolbar(&self) -> ToolbarAria<'_> {
        ToolbarAria {
            role: "toolbar",
            label: self.label.as_deref(),
        }
    }

    /// Returns the items in display order.
    #[must_use]
    pub fn items(&self) -> &[LegendItem<K>] {
        &self.items
    }

    /// Returns the item with `id`, if this group renders it.
    #[must_use]
    pub fn item(&self, id: &K) -> Option<&LegendItem<K>> {
        self.registry.index_of(id).and_then(|i| self.items.get(i))
    }

    /// Returns the element registry.
    #[must_use]
    pub fn registry(&self) -> &ElementRegistry<K> {
        &self.registry
    }

    /// Returns `true` if this group renders `id`.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.registry.contains(id)
    }

    /// Returns the highlighted item of this group.
    #[must_use]
    pub fn highlighted(&self) -> Option<&K> {
        self.highlighted.as_ref()
    }

    /// Replaces the displayed items with a new snapshot partition.
    ///
    /// `any_highlighted` is legend-wide and drives sibling dimming. A newly
    /// highlighted item schedules a scroll-into-view. Returns a focus hand-off
    /// when the focused tab stop disappeared.
    pub fn set_items(
        &mut self,
        items: Vec<LegendItem<K>>,
        any_highlighted: bool,
        scroll_delay_ms: u64,
        now: u64,
    ) -> GroupActions<K> {
        let highlighted = items.iter().find(|i| i.highlighted).map(|i| i.id.clone());
        self.registry.rebuild(items.iter().map(|i| i.id.clone()));
        self.items = items;
        self.any_highlighted = any_highlighted;

        if highlighted != self.highlighted {
            match &highlighted {
                Some(id) => {
                    self.scroll.call(id.clone(), scroll_delay_ms, now);
                }
                None => {
                    self.scroll.cancel_previous();
                }
            }
            self.highlighted = highlighted;
        }

        let entries = self.registry.focus_entries();
        let space = FocusSpace { nodes: &entries };
        let moved = self
            .roving
            .sync(&PreferredOrFirst, &space, self.highlighted.as_ref());
        match moved {
            Some(m) => smallvec![GroupAction::Focus(m.to)],
            None => SmallVec::new(),
        }
    }

    /// Returns the item holding the tab stop.
    #[must_use]
    pub fn tab_stop(&self) -> Option<&K> {
        self.roving.tab_stop()
    }

    /// Returns `0` for the tab stop and `-1` for every other item.
    #[must_use]
    pub fn tab_index(&self, id: &K) -> i8 {
        self.roving.tab_index(id)
    }

    /// Returns the item with keyboard focus.
    #[must_use]
    pub fn focused(&self) -> Option<&K> {
        self.roving.focused()
    }

    /// Returns the display index of the item with keyboard focus.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.roving
            .focused()
            .and_then(|id| self.registry.index_of(id))
    }

    /// Returns the trigger view for the item at `index`.
    #[must_use]
    pub fn trigger(&self, index: usize) -> Option<ItemTrigger<'_, K>> {
        let item = self.items.get(index)?;
        Some(ItemTrigger::new(
            item,
            self.any_highlighted,
            self.roving.tab_index(&item.id),
        ))
    }

    /// Returns the trigger view for `id`.
    #[must_use]
    pub fn trigger_for(&self, id: &K) -> Option<ItemTrigger<'_, K>> {
        self.trigger(self.registry.index_of(id)?)
    }

    /// Iterates trigger views in display order.
    pub fn triggers(&self) -> impl Iterator<Item = ItemTrigger<'_, K>> {
        self.items.iter().map(|item| {
            ItemTrigger::new(item, self.any_highlighted, self.roving.tab_index(&item.id))
        })
    }

    /// Interprets one relayed trigger action.
    pub fn handle(&mut self, action: TriggerAction<K>) -> GroupResponse<K> {
        match action {
            TriggerAction::HoverEnter(id) => GroupResponse::pass(self.bridge_enter(id)),
            TriggerAction::Focus(id) => {
                if self.registry.contains(&id) {
                    self.roving.on_focus(id.clone());
                }
                GroupResponse::pass(self.bridge_enter(id))
            }
            TriggerAction::HoverLeave(_) => GroupResponse::pass(smallvec![
                GroupAction::ClearHighlight,
                GroupAction::HideTooltip
            ]),
            TriggerAction::Blur(id, target) => {
                self.roving.on_blur(&id);
                match target {
                    BlurTarget::Tooltip => GroupResponse::pass(SmallVec::new()),
                    BlurTarget::Other => GroupResponse::pass(smallvec![
                        GroupAction::ClearHighlight,
                        GroupAction::HideTooltip
                    ]),
                }
            }
            TriggerAction::Select(id) => GroupResponse::pass(smallvec![GroupAction::Select(id)]),
            TriggerAction::Toggle(id) => GroupResponse::pass(smallvec![GroupAction::Toggle(id)]),
            TriggerAction::Key(id, key) => self.handle_key(&id, key),
        }
    }

    fn bridge_enter(&self, id: K) -> GroupActions<K> {
        let Some(item) = self.item(&id) else {
            tracing::trace!(?id, axis = ?self.axis, "enter on an item this group does not render");
            return SmallVec::new();
        };
        let mut actions = SmallVec::new();
        if item.visible {
            actions.push(GroupAction::ShowHighlight(id.clone()));
        }
        actions.push(GroupAction::ShowTooltip(id));
        actions
    }

    fn handle_key(&self, origin: &K, key: Key) -> GroupResponse<K> {
        match key.intent() {
            None => GroupResponse::pass(SmallVec::new()),
            Some(KeyIntent::Dismiss) => {
                GroupResponse::handled(smallvec![GroupAction::DismissHighlight])
            }
            Some(KeyIntent::Navigate(nav)) => {
                let entries = self.registry.focus_entries();
                let space = FocusSpace { nodes: &entries };
                let actions = self
                    .policy
                    .next(Some(origin), nav, &space)
                    .map(GroupAction::Focus)
                    .into_iter()
                    .collect();
                GroupResponse::handled(actions)
            }
        }
    }

    /// Requests focus for the item with `id`, if rendered.
    #[must_use]
    pub fn focus_by_id(&self, id: &K) -> Option<GroupAction<K>> {
        self.registry
            .contains(id)
            .then(|| GroupAction::Focus(id.clone()))
    }

    /// Requests focus for the item at display `index`, if rendered.
    #[must_use]
    pub fn focus_by_index(&self, index: usize) -> Option<GroupAction<K>> {
        self.registry
            .id_at(index)
            .map(|id| GroupAction::Focus(id.clone()))
    }

    /// Records measured bounds for an item. Returns `false` for unknown ids.
    pub fn set_item_bounds(&mut self, id: &K, bounds: Rect) -> bool {
        self.registry.set_bounds(id, bounds)
    }

    /// Returns the scroll state of the group container.
    #[must_use]
    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    /// Replaces the scroll state of the group container.
    pub fn set_viewport(&mut self, viewport: ScrollViewport) {
        self.viewport = viewport;
    }

    /// Records the container's current scroll offset.
    pub fn set_scroll_offset(&mut self, offset: Vec2) {
        self.viewport.set_scroll_offset(offset);
    }

    /// Records that the pointer entered the group container.
    pub fn pointer_enter_container(&mut self) {
        self.pointer_inside = true;
    }

    /// Records that the pointer left the group container.
    pub fn pointer_leave_container(&mut self) {
        self.pointer_inside = false;
    }

    /// Returns `true` while the pointer is over the group container.
    #[must_use]
    pub fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Returns when the pending scroll-into-view becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.scroll.deadline()
    }

    /// Fires a due scroll-into-view.
    ///
    /// Yields nothing while the pointer is over the container, when the item
    /// was never measured, or when it is already fully visible.
    pub fn poll(&mut self, now: u64) -> Option<ScrollRequest> {
        let id = self.scroll.poll(now)?;
        if self.pointer_inside {
            tracing::trace!(?id, "scroll-into-view skipped while hovering the container");
            return None;
        }
        let Some(bounds) = self.registry.bounds_of(&id) else {
            tracing::trace!(?id, "scroll-into-view skipped for an unmeasured item");
            return None;
        };
        self.viewport
            .scroll_into_view(bounds, ScrollAlign::Center, ScrollBehavior::Smooth)
    }

    /// Cancels the pending scroll.
    pub fn teardown(&mut self) {
        self.scroll.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;

    fn items(highlighted: Option<&'static str>) -> Vec<LegendItem<&'static str>> {
        ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| LegendItem::new(id, id).with_highlighted(Some(id) == highlighted))
            .collect()
    }

    fn group_with(highlighted: Option<&'static str>) -> LegendGroup<&'static str> {
        let mut group = LegendGroup::new(AxisGroup::Default);
        let any = highlighted.is_some();
        let _ = group.set_items(items(highlighted), any, 100, 0);
        group
    }

    fn focus_target(response: &GroupResponse<&'static str>) -> Option<&'static str> {
        match response.actions.as_slice() {
            [GroupAction::Focus(id)] => Some(*id),
            _ => None,
        }
    }

    #[test]
    fn tab_stop_is_highlighted_else_first() {
        let group = group_with(None);
        assert_eq!(group.tab_stop(), Some(&"a"));
        let zeros = group.triggers().filter(|t| t.tab_index() == 0).count();
        assert_eq!(zeros, 1);

        let group = group_with(Some("c"));
        assert_eq!(group.tab_stop(), Some(&"c"));
        assert_eq!(group.tab_index(&"a"), -1);
        assert_eq!(group.tab_index(&"c"), 0);
    }

    #[test]
    fn empty_group_has_no_tab_stop() {
        let mut group: LegendGroup<&str> = LegendGroup::new(AxisGroup::Default);
        let _ = group.set_items(Vec::new(), false, 100, 0);
        assert_eq!(group.tab_stop(), None);
        assert_eq!(group.focus_by_index(0), None);
    }

    #[test]
    fn arrows_wrap_and_home_end_jump() {
        let mut group = group_with(None);

        let r = group.handle(TriggerAction::Key("d", Key::ArrowRight));
        assert_eq!(r.outcome, KeyOutcome::Handled);
        assert_eq!(focus_target(&r), Some("a"));

        let r = group.handle(TriggerAction::Key("a", Key::ArrowUp));
        assert_eq!(focus_target(&r), Some("d"));

        let r = group.handle(TriggerAction::Key("b", Key::ArrowDown));
        assert_eq!(focus_target(&r), Some("c"));

        let r = group.handle(TriggerAction::Key("c", Key::Home));
        assert_eq!(focus_target(&r), Some("a"));

        let r = group.handle(TriggerAction::Key("b", Key::End));
        assert_eq!(focus_target(&r), Some("d"));
    }

    #[test]
    fn other_keys_pass_through() {
        let mut group = group_with(None);
        for key in [Key::Enter, Key::Space, Key::Tab, Key::Other] {
            let r = group.handle(TriggerAction::Key("a", key));
            assert_eq!(r.outcome, KeyOutcome::Ignored);
            assert!(r.actions.is_empty());
        }
    }

    #[test]
    fn escape_dismisses_highlight() {
        let mut group = group_with(Some("b"));
        let r = group.handle(TriggerAction::Key("b", Key::Escape));
        assert_eq!(r.outcome, KeyOutcome::Handled);
        assert_eq!(r.actions.as_slice(), &[GroupAction::DismissHighlight]);
    }

    #[test]
    fn enter_highlights_only_visible_items() {
        let mut group = LegendGroup::new(AxisGroup::Default);
        let _ = group.set_items(
            vec![
                LegendItem::new("a", "A"),
                LegendItem::new("b", "B").with_visible(false),
            ],
            false,
            100,
            0,
        );

        let r = group.handle(TriggerAction::HoverEnter("a"));
        assert_eq!(
            r.actions.as_slice(),
            &[GroupAction::ShowHighlight("a"), GroupAction::ShowTooltip("a")]
        );

        let r = group.handle(TriggerAction::Focus("b"));
        assert_eq!(r.actions.as_slice(), &[GroupAction::ShowTooltip("b")]);
        assert_eq!(group.focused_index(), Some(1));
    }

    #[test]
    fn blur_into_tooltip_keeps_state() {
        let mut group = group_with(None);
        let _ = group.handle(TriggerAction::Focus("a"));

        let r = group.handle(TriggerAction::Blur("a", BlurTarget::Tooltip));
        assert!(r.actions.is_empty());
        assert_eq!(group.focused(), None);

        let r = group.handle(TriggerAction::Blur("a", BlurTarget::Other));
        assert_eq!(
            r.actions.as_slice(),
            &[GroupAction::ClearHighlight, GroupAction::HideTooltip]
        );
    }

    #[test]
    fn removed_focused_stop_hands_focus_to_new_stop() {
        let mut group = group_with(Some("b"));
        let _ = group.handle(TriggerAction::Focus("b"));

        let remaining = vec![LegendItem::new("a", "A"), LegendItem::new("c", "C")];
        let actions = group.set_items(remaining, false, 100, 10);
        assert_eq!(actions.as_slice(), &[GroupAction::Focus("a")]);
        assert_eq!(group.tab_stop(), Some(&"a"));
    }

    fn measured_group(highlighted: Option<&'static str>) -> LegendGroup<&'static str> {
        let mut group = group_with(None);
        // Four 20px rows in a 40px tall container.
        group.set_viewport(ScrollViewport::new(
            Size::new(100.0, 40.0),
            Size::new(100.0, 80.0),
        ));
        for (i, id) in ["a", "b", "c", "d"].into_iter().enumerate() {
            let y = 20.0 * i as f64;
            assert!(group.set_item_bounds(&id, Rect::new(0.0, y, 100.0, y + 20.0)));
        }
        let _ = group.set_items(items(highlighted), highlighted.is_some(), 100, 1000);
        group
    }

    #[test]
    fn highlight_scrolls_into_view_after_delay() {
        let mut group = measured_group(Some("d"));
        assert_eq!(group.deadline(), Some(1100));
        assert_eq!(group.poll(1099), None);

        let request = group.poll(1100).expect("d is below the fold");
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        // Centering d (60..80) in 40px clamps to the 40px max offset.
        assert_eq!(request.offset, Vec2::new(0.0, 40.0));
    }

    #[test]
    fn no_scroll_while_hovering_or_already_visible() {
        let mut group = measured_group(Some("d"));
        group.pointer_enter_container();
        assert_eq!(group.poll(1100), None);
        assert_eq!(group.deadline(), None, "the skipped scroll is consumed");

        let mut group = measured_group(Some("a"));
        assert_eq!(group.poll(1100), None);
    }

    #[test]
    fn clearing_highlight_cancels_pending_scroll() {
        let mut group = measured_group(Some("d"));
        let _ = group.set_items(items(None), false, 100, 1050);
        assert_eq!(group.deadline(), None);
    }

    #[test]
    fn focus_by_id_checks_registry() {
        let group = group_with(None);
        assert_eq!(group.focus_by_id(&"c"), Some(GroupAction::Focus("c")));
        assert_eq!(group.focus_by_id(&"zz"), None);
        assert_eq!(group.focus_by_index(3), Some(GroupAction::Focus("d")));
    }
}
