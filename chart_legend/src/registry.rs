// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element registry: index and id lookups over the rendered items of one group.
//!
//! The registry is rebuilt from every snapshot. It knows which items are
//! rendered, in which order, and (once the host has measured them) where
//! they sit in the group's scrollable content. It carries no series data.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use legend_focus::FocusEntry;

use crate::item::ItemKey;

/// One rendered item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegisteredElement {
    /// Display position within the group.
    pub index: usize,
    /// Bounds in the group's content coordinates, once measured.
    pub bounds: Option<Rect>,
}

/// Index- and id-keyed table of rendered items.
#[derive(Clone, Debug)]
pub struct ElementRegistry<K> {
    order: Vec<K>,
    by_id: HashMap<K, RegisteredElement>,
}

impl<K> Default for ElementRegistry<K> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<K: ItemKey> ElementRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the registered items with `ids`, in display order.
    ///
    /// Measured bounds survive for ids that are still present; they are
    /// overwritten as soon as the host measures the new layout.
    pub fn rebuild<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut previous = core::mem::take(&mut self.by_id);
        self.order.clear();
        for (index, id) in ids.into_iter().enumerate() {
            let bounds = previous.remove(&id).and_then(|e| e.bounds);
            self.by_id
                .insert(id.clone(), RegisteredElement { index, bounds });
            self.order.push(id);
        }
    }

    /// Returns the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.by_id.contains_key(id)
    }

    /// Returns the id at display position `index`.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&K> {
        self.order.get(index)
    }

    /// Returns the display position of `id`.
    #[must_use]
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.by_id.get(id).map(|e| e.index)
    }

    /// Returns the registered element for `id`.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&RegisteredElement> {
        self.by_id.get(id)
    }

    /// Returns the measured bounds of `id`.
    #[must_use]
    pub fn bounds_of(&self, id: &K) -> Option<Rect> {
        self.by_id.get(id).and_then(|e| e.bounds)
    }

    /// Records measured bounds for `id`. Returns `false` for unknown ids.
    pub fn set_bounds(&mut self, id: &K, bounds: Rect) -> bool {
        match self.by_id.get_mut(id) {
            Some(element) => {
                element.bounds = Some(bounds);
                true
            }
            None => false,
        }
    }

    /// Returns the ids in display order.
    #[must_use]
    pub fn ids(&self) -> &[K] {
        &self.order
    }

    /// Builds the focus candidates for navigation, all enabled.
    #[must_use]
    pub fn focus_entries(&self) -> Vec<FocusEntry<K>> {
        self.order.iter().cloned().map(FocusEntry::new).collect()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.order.clear();
        self.by_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn lookups_agree_after_rebuild() {
        let mut registry = ElementRegistry::new();
        registry.rebuild(["a", "b", "c"]);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.id_at(1), Some(&"b"));
        assert_eq!(registry.index_of(&"c"), Some(2));
        assert_eq!(registry.id_at(3), None);
        assert_eq!(registry.index_of(&"z"), None);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get(&"a").is_none());
    }

    #[test]
    fn bounds_survive_for_remaining_ids() {
        let mut registry = ElementRegistry::new();
        registry.rebuild(["a", "b", "c"]);
        assert!(registry.set_bounds(&"b", Rect::new(0.0, 10.0, 50.0, 20.0)));
        assert!(registry.set_bounds(&"c", Rect::new(0.0, 20.0, 50.0, 30.0)));
        assert!(!registry.set_bounds(&"z", Rect::ZERO));

        registry.rebuild(["b", "d"]);
        assert_eq!(registry.index_of(&"b"), Some(0));
        assert_eq!(
            registry.bounds_of(&"b"),
            Some(Rect::new(0.0, 10.0, 50.0, 20.0))
        );
        assert_eq!(registry.bounds_of(&"d"), None);
        assert!(!registry.contains(&"c"));
        assert_eq!(registry.ids(), &["b", "d"]);
    }

    #[test]
    fn focus_entries_follow_display_order() {
        let mut registry = ElementRegistry::new();
        registry.rebuild(vec![3_u32, 1, 2]);
        let ids: Vec<u32> = registry.focus_entries().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
