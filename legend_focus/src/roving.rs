// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving tab stop state.
//!
//! [`RovingTabStop`] remembers which item holds the tab stop (the only item
//! with `tabindex = 0`) and which item currently has keyboard focus. After
//! every change to the candidate set, call [`RovingTabStop::sync`]: it
//! re-resolves the stop and, when the item that had focus while holding the
//! stop was removed, reports a [`FocusMove`] so the host can hand focus to the
//! new stop instead of dropping it on the floor.

use crate::{FocusSpace, TabStopPolicy};

/// A focus hand-off requested by [`RovingTabStop::sync`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusMove<K> {
    /// The removed item that had focus.
    pub from: K,
    /// The item that should receive focus now.
    pub to: K,
}

/// Tab stop and focus tracking for one toolbar.
#[derive(Clone, Debug)]
pub struct RovingTabStop<K> {
    stop: Option<K>,
    focused: Option<K>,
}

impl<K> Default for RovingTabStop<K> {
    fn default() -> Self {
        Self {
            stop: None,
            focused: None,
        }
    }
}

impl<K: Clone + PartialEq> RovingTabStop<K> {
    /// Creates state with no tab stop and nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the item holding the tab stop.
    #[must_use]
    pub fn tab_stop(&self) -> Option<&K> {
        self.stop.as_ref()
    }

    /// Returns the item with keyboard focus, if focus is inside the toolbar.
    #[must_use]
    pub fn focused(&self) -> Option<&K> {
        self.focused.as_ref()
    }

    /// Returns `0` for the tab stop and `-1` for every other item.
    #[must_use]
    pub fn tab_index(&self, id: &K) -> i8 {
        if self.stop.as_ref() == Some(id) { 0 } else { -1 }
    }

    /// Records that `id` received keyboard focus.
    pub fn on_focus(&mut self, id: K) {
        self.focused = Some(id);
    }

    /// Records that focus left `id`.
    ///
    /// Blur events for an item other than the focused one are ignored; hosts
    /// commonly deliver the new item's focus before the old item's blur.
    pub fn on_blur(&mut self, id: &K) {
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }

    /// Re-resolves the tab stop against a new candidate set.
    ///
    /// Returns a [`FocusMove`] when the focused item was the tab stop and no
    /// longer exists, and the policy designates a different item.
    pub fn sync<P>(
        &mut self,
        policy: &P,
        space: &FocusSpace<'_, K>,
        preferred: Option<&K>,
    ) -> Option<FocusMove<K>>
    where
        P: TabStopPolicy<K>,
    {
        let previous = self.stop.take();
        self.stop = policy.resolve(space, preferred);

        let had_focus = previous.is_some() && self.focused == previous;
        if let Some(f) = &self.focused
            && space.position(f).is_none()
        {
            self.focused = None;
        }

        let removed = previous.filter(|p| space.position(p).is_none())?;
        let to = self.stop.clone()?;
        if !had_focus || to == removed {
            return None;
        }
        tracing::trace!("focused tab stop was removed, handing focus to the new stop");
        Some(FocusMove { from: removed, to })
    }

    /// Forgets the tab stop and focus.
    pub fn clear(&mut self) {
        self.stop = None;
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FocusEntry, PreferredOrFirst};

    #[test]
    fn exactly_one_tab_stop() {
        let entries = [FocusEntry::new('a'), FocusEntry::new('b'), FocusEntry::new('c')];
        let space = FocusSpace { nodes: &entries };
        let mut roving = RovingTabStop::new();
        roving.sync(&PreferredOrFirst, &space, Some(&'b'));

        let zeros = entries
            .iter()
            .filter(|e| roving.tab_index(&e.id) == 0)
            .count();
        assert_eq!(zeros, 1);
        assert_eq!(roving.tab_index(&'b'), 0);
    }

    #[test]
    fn removing_focused_stop_hands_focus_over() {
        let before = [FocusEntry::new('a'), FocusEntry::new('b'), FocusEntry::new('c')];
        let mut roving = RovingTabStop::new();
        roving.sync(&PreferredOrFirst, &FocusSpace { nodes: &before }, Some(&'b'));
        roving.on_focus('b');

        let after = [FocusEntry::new('a'), FocusEntry::new('c')];
        let moved = roving.sync(&PreferredOrFirst, &FocusSpace { nodes: &after }, None);

        assert_eq!(moved, Some(FocusMove { from: 'b', to: 'a' }));
        assert_eq!(roving.tab_stop(), Some(&'a'));
        assert_eq!(roving.focused(), None);
    }

    #[test]
    fn removing_unfocused_stop_moves_stop_silently() {
        let before = [FocusEntry::new('a'), FocusEntry::new('b')];
        let mut roving = RovingTabStop::new();
        roving.sync(&PreferredOrFirst, &FocusSpace { nodes: &before }, Some(&'b'));

        let after = [FocusEntry::new('a')];
        let moved = roving.sync(&PreferredOrFirst, &FocusSpace { nodes: &after }, None);

        assert_eq!(moved, None);
        assert_eq!(roving.tab_stop(), Some(&'a'));
    }

    #[test]
    fn removing_last_item_leaves_no_stop() {
        let before = [FocusEntry::new('a')];
        let mut roving = RovingTabStop::new();
        roving.sync(&PreferredOrFirst, &FocusSpace { nodes: &before }, None);
        roving.on_focus('a');

        let moved = roving.sync(&PreferredOrFirst, &FocusSpace { nodes: &[] }, None);
        assert_eq!(moved, None);
        assert_eq!(roving.tab_stop(), None);
    }

    #[test]
    fn stale_blur_does_not_clear_newer_focus() {
        let mut roving = RovingTabStop::new();
        roving.on_focus('a');
        roving.on_focus('b');
        roving.on_blur(&'a');
        assert_eq!(roving.focused(), Some(&'b'));
        roving.on_blur(&'b');
        assert_eq!(roving.focused(), None);
    }
}
