// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-set computations for select and toggle.
//!
//! Both return the complete new visible set, in item order, for the host to
//! apply. The legend never mutates visibility itself.

use alloc::vec::Vec;

use crate::item::{ItemKey, LegendItem};

/// Isolates `id`, or restores every item if `id` is already the only visible
/// one.
///
/// Returns `None` if no item has `id`.
#[must_use]
pub fn select_visible<K: ItemKey>(items: &[LegendItem<K>], id: &K) -> Option<Vec<K>> {
    let target = items.iter().find(|i| &i.id == id)?;
    let sole = target.visible && items.iter().filter(|i| i.visible).count() == 1;
    let next = if sole {
        items.iter().map(|i| i.id.clone()).collect()
    } else {
        alloc::vec![target.id.clone()]
    };
    Some(next)
}

/// Flips `id` in the visible set, keeping every other item as it is.
///
/// Returns `None` if no item has `id`.
#[must_use]
pub fn toggle_visible<K: ItemKey>(items: &[LegendItem<K>], id: &K) -> Option<Vec<K>> {
    if !items.iter().any(|i| &i.id == id) {
        return None;
    }
    Some(
        items
            .iter()
            .filter(|i| if &i.id == id { !i.visible } else { i.visible })
            .map(|i| i.id.clone())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn abc(visible: &[&'static str]) -> Vec<LegendItem<&'static str>> {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| LegendItem::new(id, id).with_visible(visible.contains(&id)))
            .collect()
    }

    #[test]
    fn select_isolates_then_restores() {
        let items = abc(&["a", "b", "c"]);
        assert_eq!(select_visible(&items, &"b"), Some(vec!["b"]));

        let items = abc(&["b"]);
        assert_eq!(select_visible(&items, &"b"), Some(vec!["a", "b", "c"]));
    }

    #[test]
    fn select_hidden_item_isolates_it() {
        let items = abc(&["a"]);
        assert_eq!(select_visible(&items, &"c"), Some(vec!["c"]));

        let items = abc(&[]);
        assert_eq!(select_visible(&items, &"a"), Some(vec!["a"]));
    }

    #[test]
    fn toggle_adds_and_removes() {
        let items = abc(&["a", "b"]);
        assert_eq!(toggle_visible(&items, &"c"), Some(vec!["a", "b", "c"]));
        assert_eq!(toggle_visible(&items, &"a"), Some(vec!["b"]));

        let items = abc(&["a"]);
        assert_eq!(toggle_visible(&items, &"a"), Some(vec![]));
    }

    #[test]
    fn unknown_id_yields_nothing() {
        let items = abc(&["a"]);
        assert_eq!(select_visible(&items, &"z"), None);
        assert_eq!(toggle_visible(&items, &"z"), None);
    }
}
