// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One legend entry as an interactive button.
//!
//! [`ItemTrigger`] is a controlled view: it holds no state of its own. It
//! derives the presentation flags and accessibility attributes of one item
//! from the snapshot, and relays raw input on that item as a
//! [`TriggerAction`] for the owning group to interpret.

use bitflags::bitflags;
use legend_focus::{Key, Modifiers};

use crate::item::LegendItem;

bitflags! {
    /// Presentation state of one trigger.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TriggerState: u8 {
        /// The series is visible (`aria-pressed`).
        const PRESSED = 1 << 0;
        /// The series is highlighted (`aria-current`).
        const CURRENT = 1 << 1;
        /// Another series is highlighted and this one is not.
        const DIMMED = 1 << 2;
    }
}

/// Accessibility attributes of one trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AriaButton {
    /// Always `"button"`.
    pub role: &'static str,
    /// `aria-pressed`: the series is visible.
    pub pressed: bool,
    /// `aria-current`: the series is highlighted.
    pub current: bool,
    /// Roving `tabindex`: `0` on the group's tab stop, `-1` elsewhere.
    pub tab_index: i8,
}

/// Where keyboard focus goes when a trigger blurs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlurTarget {
    /// Into the legend tooltip's own subtree.
    Tooltip,
    /// Anywhere else, including other triggers and outside the page.
    Other,
}

/// Raw input on one trigger, as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerInput {
    /// Primary activation (pointer click, Enter, Space) with held modifiers.
    Click(Modifiers),
    /// The pointer entered the trigger.
    PointerEnter,
    /// The pointer left the trigger.
    PointerLeave,
    /// The trigger received keyboard focus.
    Focus,
    /// The trigger lost keyboard focus.
    Blur(BlurTarget),
    /// A key went down while the trigger had focus.
    KeyDown(Key),
}

/// Input relayed to the owning group, tagged with the item id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerAction<K> {
    /// Make this the only visible series (or restore all).
    Select(K),
    /// Flip this series' visibility, leaving the others alone.
    Toggle(K),
    /// Pointer entered.
    HoverEnter(K),
    /// Pointer left.
    HoverLeave(K),
    /// Keyboard focus arrived.
    Focus(K),
    /// Keyboard focus left.
    Blur(K, BlurTarget),
    /// Key-down pass-through.
    Key(K, Key),
}

/// Controlled view over one [`LegendItem`].
#[derive(Copy, Clone, Debug)]
pub struct ItemTrigger<'a, K> {
    item: &'a LegendItem<K>,
    any_highlighted: bool,
    tab_index: i8,
}

impl<'a, K: Clone> ItemTrigger<'a, K> {
    /// Creates the view.
    ///
    /// `any_highlighted` says whether some item in the legend is highlighted;
    /// `tab_index` comes from the group's roving tab stop.
    #[must_use]
    pub fn new(item: &'a LegendItem<K>, any_highlighted: bool, tab_index: i8) -> Self {
        Self {
            item,
            any_highlighted,
            tab_index,
        }
    }

    /// Returns the underlying item.
    #[must_use]
    pub fn item(&self) -> &'a LegendItem<K> {
        self.item
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        &self.item.name
    }

    /// Returns the roving tab index.
    #[must_use]
    pub fn tab_index(&self) -> i8 {
        self.tab_index
    }

    /// Computes the presentation flags.
    #[must_use]
    pub fn state(&self) -> TriggerState {
        let mut state = TriggerState::empty();
        state.set(TriggerState::PRESSED, self.item.visible);
        state.set(TriggerState::CURRENT, self.item.highlighted);
        state.set(TriggerState::DIMMED, self.any_highlighted && !self.item.highlighted);
        state
    }

    /// Computes the accessibility attributes.
    #[must_use]
    pub fn aria(&self) -> AriaButton {
        AriaButton {
            role: "button",
            pressed: self.item.visible,
            current: self.item.highlighted,
            tab_index: self.tab_index,
        }
    }

    /// Relays raw input as an action for the owning group.
    ///
    /// A click with the command chord (Ctrl or Meta) toggles; a plain click
    /// selects.
    #[must_use]
    pub fn relay(&self, input: TriggerInput) -> TriggerAction<K> {
        let id = self.item.id.clone();
        match input {
            TriggerInput::Click(modifiers) if modifiers.command() => TriggerAction::Toggle(id),
            TriggerInput::Click(_) => TriggerAction::Select(id),
            TriggerInput::PointerEnter => TriggerAction::HoverEnter(id),
            TriggerInput::PointerLeave => TriggerAction::HoverLeave(id),
            TriggerInput::Focus => TriggerAction::Focus(id),
            TriggerInput::Blur(target) => TriggerAction::Blur(id, target),
            TriggerInput::KeyDown(key) => TriggerAction::Key(id, key),
        }
    }
}
