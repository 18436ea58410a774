// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The legend root: groups, shared highlight and tooltip, effect queue.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use legend_debounce::DebouncedCall;
use legend_focus::{Key, KeyOutcome};
use legend_scroll::{ScrollRequest, ScrollViewport};
use smallvec::SmallVec;

use crate::config::{ConfigError, LegendConfig};
use crate::group::{GroupAction, LegendGroup};
use crate::item::{AxisGroup, ItemKey, LegendItem};
use crate::layout::{LegendType, ResolvedLayout, resolve_layout};
use crate::tooltip::{NoTooltip, TooltipContentProvider, TooltipState, TooltipView};
use crate::trigger::TriggerInput;
use crate::visibility::{select_visible, toggle_visible};

/// Inputs supplied by the chart on every update.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendProps<K> {
    /// All series, in display order.
    pub items: Vec<LegendItem<K>>,
    /// Requested placement.
    pub legend_type: LegendType,
    /// Heading of the (default) group.
    pub title: Option<String>,
    /// Heading of the opposite-axis group; falls back to `title`.
    pub opposite_title: Option<String>,
    /// Accessible name of the toolbars.
    pub aria_label: Option<String>,
    /// Whether the host renders an action slot next to the legend.
    pub has_actions: bool,
    /// Maximum height of bottom-family containers.
    pub max_height: Option<f64>,
}

impl<K> Default for LegendProps<K> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            legend_type: LegendType::Bottom,
            title: None,
            opposite_title: None,
            aria_label: None,
            has_actions: false,
            max_height: None,
        }
    }
}

impl<K> LegendProps<K> {
    /// Creates props for `items` with every other field defaulted.
    #[must_use]
    pub fn new(items: Vec<LegendItem<K>>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Sets the legend type.
    #[must_use]
    pub fn with_type(mut self, legend_type: LegendType) -> Self {
        self.legend_type = legend_type;
        self
    }

    /// Sets the group headings.
    #[must_use]
    pub fn with_titles(mut self, title: Option<String>, opposite_title: Option<String>) -> Self {
        self.title = title;
        self.opposite_title = opposite_title;
        self
    }

    /// Sets the toolbar accessible name.
    #[must_use]
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Sets whether the host renders an action slot next to the legend.
    #[must_use]
    pub fn with_actions(mut self, has_actions: bool) -> Self {
        self.has_actions = has_actions;
        self
    }

    /// Sets the bottom-layout maximum height.
    #[must_use]
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }
}

/// Something the host must do or forward to the chart.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendEffect<K> {
    /// The chart should highlight this series.
    HighlightEnter(K),
    /// The chart should clear its highlight.
    HighlightExit,
    /// The chart should show exactly these series, in item order.
    VisibilityChange(Vec<K>),
    /// Move keyboard focus to this item's element.
    Focus {
        /// Group rendering the item.
        group: AxisGroup,
        /// Item to focus.
        id: K,
    },
    /// Scroll a group container.
    Scroll {
        /// Group whose container scrolls.
        group: AxisGroup,
        /// Target offset and behavior.
        request: ScrollRequest,
    },
    /// The tooltip now belongs to this item, or is hidden.
    TooltipChanged(Option<K>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum HighlightTransition<K> {
    Enter(K),
    Exit,
}

/// Headless interaction core of a chart legend.
///
/// Feed it snapshots ([`set_props`](Self::set_props)), geometry, and input,
/// all stamped with a monotonic millisecond `now`. Drive timers with
/// [`poll`](Self::poll) at [`next_deadline`](Self::next_deadline), and apply
/// [`drain_effects`](Self::drain_effects) after every call.
#[derive(Debug)]
pub struct ChartLegend<K, P = NoTooltip> {
    config: LegendConfig,
    provider: P,
    props: LegendProps<K>,
    groups: SmallVec<[LegendGroup<K>; 2]>,
    layout: ResolvedLayout,
    width: Option<f64>,
    highlight: DebouncedCall<HighlightTransition<K>>,
    tooltip: TooltipState<K>,
    effects: Vec<LegendEffect<K>>,
}

impl<K: ItemKey, P: TooltipContentProvider<K>> ChartLegend<K, P> {
    /// Creates an empty legend.
    ///
    /// Fails if `config` does not pass [`LegendConfig::validate`].
    pub fn new(config: LegendConfig, provider: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = resolve_layout(
            LegendType::Bottom,
            false,
            None,
            config.stack_width_threshold,
            None,
        );
        Ok(Self {
            config,
            provider,
            props: LegendProps::default(),
            groups: SmallVec::new(),
            layout,
            width: None,
            highlight: DebouncedCall::new(),
            tooltip: TooltipState::default(),
            effects: Vec::new(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LegendConfig {
        &self.config
    }

    /// Returns the tooltip content provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the current props.
    #[must_use]
    pub fn props(&self) -> &LegendProps<K> {
        &self.props
    }

    /// Returns the item snapshot.
    #[must_use]
    pub fn items(&self) -> &[LegendItem<K>] {
        &self.props.items
    }

    /// Returns the item with `id`.
    #[must_use]
    pub fn item(&self, id: &K) -> Option<&LegendItem<K>> {
        self.props.items.iter().find(|i| &i.id == id)
    }

    /// Returns `true` if the host should reserve the action slot.
    #[must_use]
    pub fn has_actions(&self) -> bool {
        self.props.has_actions
    }

    /// Returns `true` if any item sits on the opposite axis.
    #[must_use]
    pub fn is_dual_axis(&self) -> bool {
        self.props.items.iter().any(|i| i.opposite_axis)
    }

    /// Replaces the props and re-derives groups, tab stops and layout.
    pub fn set_props(&mut self, props: LegendProps<K>, now: u64) {
        self.props = props;
        self.rebuild(now);
    }

    /// Replaces only the item snapshot.
    pub fn set_items(&mut self, items: Vec<LegendItem<K>>, now: u64) {
        self.props.items = items;
        self.rebuild(now);
    }

    fn rebuild(&mut self, now: u64) {
        let dual = self.is_dual_axis();
        let any_highlighted = self.props.items.iter().any(|i| i.highlighted);
        let axes: &[AxisGroup] = if dual {
            &[AxisGroup::Default, AxisGroup::Opposite]
        } else {
            &[AxisGroup::Default]
        };

        let mut previous = core::mem::take(&mut self.groups);
        for &axis in axes {
            let mut group = match previous.iter().position(|g| g.axis() == axis) {
                Some(at) => previous.remove(at),
                None => LegendGroup::new(axis),
            };
            let partition: Vec<_> = self
                .props
                .items
                .iter()
                .filter(|i| !dual || i.axis() == axis)
                .cloned()
                .collect();
            let title = match axis {
                AxisGroup::Default => self.props.title.clone(),
                AxisGroup::Opposite => self
                    .props
                    .opposite_title
                    .clone()
                    .or_else(|| self.props.title.clone()),
            };
            group.set_labels(title, self.props.aria_label.clone());
            let actions = group.set_items(
                partition,
                any_highlighted,
                self.config.scroll_delay_ms,
                now,
            );
            self.groups.push(group);
            for action in actions {
                self.apply(axis, action, now);
            }
        }
        for mut gone in previous {
            tracing::debug!(group = ?gone.axis(), "legend group removed");
            gone.teardown();
        }

        if let Some(owner) = self.tooltip.shown()
            && self.group_of(owner).is_none()
        {
            tracing::trace!(id = ?owner, "tooltip owner left the snapshot");
            let groups = &self.groups;
            self.tooltip
                .hide_now(|id| groups.iter().any(|g| g.contains(id)));
            self.emit(LegendEffect::TooltipChanged(None));
        }
        self.relayout();
    }

    fn relayout(&mut self) {
        let layout = resolve_layout(
            self.props.legend_type,
            self.is_dual_axis(),
            self.width,
            self.config.stack_width_threshold,
            self.props.max_height,
        );
        if layout != self.layout {
            tracing::debug!(kind = ?layout.kind, width = ?self.width, "legend layout changed");
            self.layout = layout;
        }
    }

    /// Records the measured container width and re-resolves the layout.
    pub fn set_container_width(&mut self, width: f64) {
        if self.width == Some(width) {
            return;
        }
        self.width = Some(width);
        self.relayout();
    }

    /// Returns the measured container width.
    #[must_use]
    pub fn container_width(&self) -> Option<f64> {
        self.width
    }

    /// Returns the resolved layout.
    #[must_use]
    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    /// Returns the rendered groups in layout order.
    #[must_use]
    pub fn groups(&self) -> &[LegendGroup<K>] {
        &self.groups
    }

    /// Returns the group for `axis`, if rendered.
    #[must_use]
    pub fn group(&self, axis: AxisGroup) -> Option<&LegendGroup<K>> {
        self.groups.iter().find(|g| g.axis() == axis)
    }

    fn group_mut(&mut self, axis: AxisGroup) -> Option<&mut LegendGroup<K>> {
        self.groups.iter_mut().find(|g| g.axis() == axis)
    }

    fn group_of(&self, id: &K) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(id))
    }

    /// Routes raw input from the item element for `id`.
    ///
    /// Returns [`KeyOutcome::Handled`] when the host should suppress the
    /// input's default handling.
    pub fn handle_item_input(&mut self, id: &K, input: TriggerInput, now: u64) -> KeyOutcome {
        let Some(at) = self.group_of(id) else {
            tracing::trace!(?id, "input for an unknown item");
            return KeyOutcome::Ignored;
        };
        let group = &mut self.groups[at];
        let axis = group.axis();
        let Some(action) = group.trigger_for(id).map(|t| t.relay(input)) else {
            return KeyOutcome::Ignored;
        };
        let response = group.handle(action);
        for action in response.actions {
            self.apply(axis, action, now);
        }
        response.outcome
    }

    fn apply(&mut self, axis: AxisGroup, action: GroupAction<K>, now: u64) {
        match action {
            GroupAction::ShowHighlight(id) => {
                self.highlight.call(
                    HighlightTransition::Enter(id),
                    self.config.highlight_enter_delay_ms,
                    now,
                );
            }
            GroupAction::ClearHighlight => {
                self.highlight.call(
                    HighlightTransition::Exit,
                    self.config.highlight_exit_delay_ms,
                    now,
                );
            }
            GroupAction::DismissHighlight => self.clear_highlight_now(),
            GroupAction::ShowTooltip(id) => {
                let has_content = self
                    .item(&id)
                    .is_some_and(|item| self.provider.content(item).is_some());
                if has_content {
                    self.tooltip
                        .request_show(id, self.config.tooltip_show_delay_ms, now);
                } else {
                    tracing::trace!(?id, "no tooltip content");
                }
            }
            GroupAction::HideTooltip => {
                self.tooltip
                    .request_hide(self.config.tooltip_hide_delay_ms, now);
            }
            GroupAction::Select(id) => {
                self.select(&id);
            }
            GroupAction::Toggle(id) => {
                self.toggle(&id);
            }
            GroupAction::Focus(id) => self.emit(LegendEffect::Focus { group: axis, id }),
        }
    }

    fn clear_highlight_now(&mut self) {
        self.highlight.cancel_previous();
        self.emit(LegendEffect::HighlightExit);
    }

    /// Shows only `id`, or every item if `id` already is the only visible one.
    ///
    /// Also clears the highlight. Returns `false` for unknown ids.
    pub fn select(&mut self, id: &K) -> bool {
        let Some(visible) = select_visible(&self.props.items, id) else {
            tracing::trace!(?id, "select on an unknown item");
            return false;
        };
        self.emit(LegendEffect::VisibilityChange(visible));
        self.clear_highlight_now();
        true
    }

    /// Flips `id` in the visible set.
    ///
    /// Also clears the highlight. Returns `false` for unknown ids.
    pub fn toggle(&mut self, id: &K) -> bool {
        let Some(visible) = toggle_visible(&self.props.items, id) else {
            tracing::trace!(?id, "toggle on an unknown item");
            return false;
        };
        self.emit(LegendEffect::VisibilityChange(visible));
        self.clear_highlight_now();
        true
    }

    /// Returns `true` while the host must route document key-downs into
    /// [`handle_document_key`](Self::handle_document_key) ahead of item handlers.
    #[must_use]
    pub fn document_listener_active(&self) -> bool {
        self.tooltip.shown().is_some()
    }

    /// Handles a document-level key-down.
    ///
    /// Escape while a tooltip is shown hides it at once, blocks tooltip
    /// requests for the configured lock, and returns focus to the owning item.
    pub fn handle_document_key(&mut self, key: Key, now: u64) -> KeyOutcome {
        if key != Key::Escape || self.tooltip.shown().is_none() {
            return KeyOutcome::Ignored;
        }
        let Some(owner) = self.tooltip.force_hide(self.config.tooltip_lock_ms, now) else {
            return KeyOutcome::Ignored;
        };
        self.emit(LegendEffect::TooltipChanged(None));
        if let Some(at) = self.group_of(&owner) {
            let group = self.groups[at].axis();
            self.emit(LegendEffect::Focus { group, id: owner });
        }
        KeyOutcome::Handled
    }

    /// The pointer entered the tooltip; a pending hide is canceled.
    pub fn tooltip_pointer_enter(&mut self) {
        self.tooltip.keep_open();
    }

    /// The pointer left the tooltip.
    pub fn tooltip_pointer_leave(&mut self, now: u64) {
        self.tooltip
            .request_hide(self.config.tooltip_hide_delay_ms, now);
    }

    /// Focus left the tooltip for `to`, an item of this legend or `None` for
    /// anything else. Leaving the legend hides the tooltip.
    pub fn tooltip_blur(&mut self, to: Option<&K>, now: u64) {
        if to.is_some_and(|id| self.group_of(id).is_some()) {
            return;
        }
        self.tooltip
            .request_hide(self.config.tooltip_hide_delay_ms, now);
    }

    /// Returns the item owning the tooltip.
    #[must_use]
    pub fn tooltip_item(&self) -> Option<&K> {
        self.tooltip.shown()
    }

    /// Returns everything needed to render the tooltip, if one is shown.
    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipView<'_, K>> {
        let id = self.tooltip.shown()?;
        let group = &self.groups[self.group_of(id)?];
        let item = group.item(id)?;
        let content = self.provider.content(item)?;
        Some(TooltipView {
            item,
            group: group.axis(),
            content,
            anchor: group.registry().bounds_of(id),
            position: self.layout.tooltip_position,
        })
    }

    /// Requests focus for the item with `id`. Returns `false` if not rendered.
    pub fn focus_item_by_id(&mut self, id: &K) -> bool {
        let Some(at) = self.group_of(id) else {
            tracing::trace!(?id, "focus request for an unknown item");
            return false;
        };
        let group = &self.groups[at];
        let axis = group.axis();
        let Some(GroupAction::Focus(target)) = group.focus_by_id(id) else {
            return false;
        };
        self.emit(LegendEffect::Focus {
            group: axis,
            id: target,
        });
        true
    }

    /// Requests focus for the item at `index` in `axis`'s group.
    pub fn focus_item_by_index(&mut self, axis: AxisGroup, index: usize) -> bool {
        let Some(GroupAction::Focus(target)) =
            self.group(axis).and_then(|g| g.focus_by_index(index))
        else {
            tracing::trace!(?axis, index, "focus request for an unknown index");
            return false;
        };
        self.emit(LegendEffect::Focus {
            group: axis,
            id: target,
        });
        true
    }

    /// Records the measured bounds of an item element, in its group
    /// container's content coordinates.
    pub fn set_item_bounds(&mut self, id: &K, bounds: Rect) -> bool {
        match self.group_of(id) {
            Some(at) => self.groups[at].set_item_bounds(id, bounds),
            None => {
                tracing::trace!(?id, "bounds for an unknown item");
                false
            }
        }
    }

    /// Replaces the scroll state of `axis`'s group container.
    pub fn set_viewport(&mut self, axis: AxisGroup, viewport: ScrollViewport) -> bool {
        let Some(group) = self.group_mut(axis) else {
            return false;
        };
        group.set_viewport(viewport);
        true
    }

    /// Records the scroll offset of `axis`'s group container.
    pub fn set_scroll_offset(&mut self, axis: AxisGroup, offset: Vec2) -> bool {
        let Some(group) = self.group_mut(axis) else {
            return false;
        };
        group.set_scroll_offset(offset);
        true
    }

    /// The pointer entered `axis`'s group container.
    pub fn pointer_enter_container(&mut self, axis: AxisGroup) {
        if let Some(g) = self.group_mut(axis) {
            g.pointer_enter_container();
        }
    }

    /// The pointer left `axis`'s group container.
    pub fn pointer_leave_container(&mut self, axis: AxisGroup) {
        if let Some(g) = self.group_mut(axis) {
            g.pointer_leave_container();
        }
    }

    /// Returns the earliest pending timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let timers = [self.highlight.deadline(), self.tooltip.deadline()];
        timers
            .into_iter()
            .chain(self.groups.iter().map(LegendGroup::deadline))
            .flatten()
            .min()
    }

    /// Fires every timer due at `now`. Returns `true` if effects were queued.
    pub fn poll(&mut self, now: u64) -> bool {
        let before = self.effects.len();

        match self.highlight.poll(now) {
            Some(HighlightTransition::Enter(id)) => {
                if self.item(&id).is_some_and(|i| i.visible) {
                    self.emit(LegendEffect::HighlightEnter(id));
                } else {
                    tracing::trace!(?id, "highlight for a hidden or removed item dropped");
                }
            }
            Some(HighlightTransition::Exit) => self.emit(LegendEffect::HighlightExit),
            None => {}
        }

        let items = &self.props.items;
        let provider = &self.provider;
        let changed = self.tooltip.poll(now, |id| {
            items
                .iter()
                .find(|i| &i.id == id)
                .is_some_and(|item| provider.content(item).is_some())
        });
        if let Some(shown) = changed {
            self.emit(LegendEffect::TooltipChanged(shown));
        }

        let mut scrolls: SmallVec<[(AxisGroup, ScrollRequest); 2]> = SmallVec::new();
        for group in &mut self.groups {
            if let Some(request) = group.poll(now) {
                scrolls.push((group.axis(), request));
            }
        }
        for (group, request) in scrolls {
            self.emit(LegendEffect::Scroll { group, request });
        }

        self.effects.len() != before
    }

    fn emit(&mut self, effect: LegendEffect<K>) {
        tracing::debug!(?effect, "legend effect");
        self.effects.push(effect);
    }

    /// Returns the queued effects without removing them.
    #[must_use]
    pub fn effects(&self) -> &[LegendEffect<K>] {
        &self.effects
    }

    /// Takes every queued effect, oldest first.
    pub fn drain_effects(&mut self) -> Vec<LegendEffect<K>> {
        core::mem::take(&mut self.effects)
    }

    /// Cancels every pending timer, hides the tooltip, and discards queued
    /// effects without delivering them.
    ///
    /// Call when the legend is unmounted; nothing fires afterwards until new
    /// input arrives.
    pub fn teardown(&mut self) {
        self.effects.clear();
        self.highlight.reset();
        self.tooltip.reset();
        for group in &mut self.groups {
            group.teardown();
        }
        tracing::debug!("legend torn down");
    }
}
