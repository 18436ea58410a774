// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate views and traversal policies.

use crate::Navigation;

/// A single focusable candidate within a [`FocusSpace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusEntry<K> {
    /// Identifier for this candidate.
    pub id: K,
    /// Whether this candidate can take focus.
    ///
    /// Disabled entries are skipped by traversal and never hold the tab stop.
    pub enabled: bool,
}

impl<K> FocusEntry<K> {
    /// Creates an enabled entry.
    pub const fn new(id: K) -> Self {
        Self { id, enabled: true }
    }
}

/// A read-only view of focusable candidates, in display order.
///
/// Policies should treat it as an immutable snapshot.
#[derive(Clone, Debug)]
pub struct FocusSpace<'a, K> {
    /// Candidates in the order they are presented.
    pub nodes: &'a [FocusEntry<K>],
}

impl<K: PartialEq> FocusSpace<'_, K> {
    /// Returns the display position of `id`, if present.
    #[must_use]
    pub fn position(&self, id: &K) -> Option<usize> {
        self.nodes.iter().position(|e| e.id == *id)
    }

    /// Returns `true` if `id` is present and enabled.
    #[must_use]
    pub fn contains_enabled(&self, id: &K) -> bool {
        self.nodes.iter().any(|e| e.enabled && e.id == *id)
    }
}

/// Wrap mode configuration for linear traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; stepping past an end yields no candidate.
    Never,
    /// Wrap around within the space (circular indexing).
    Scope,
}

/// Trait for traversal policies.
///
/// A policy receives the current origin (if any item is focused), a navigation
/// intent, and the candidates, and returns the next item to focus.
pub trait FocusPolicy<K>
where
    K: Clone + PartialEq,
{
    /// Compute the next focus target.
    fn next(&self, origin: Option<&K>, direction: Navigation, space: &FocusSpace<'_, K>)
    -> Option<K>;
}

/// Linear traversal in display order.
#[derive(Copy, Clone, Debug)]
pub struct DefaultPolicy {
    /// Wrap behavior at either end.
    pub wrap: WrapMode,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Scope,
        }
    }
}

impl<K> FocusPolicy<K> for DefaultPolicy
where
    K: Clone + PartialEq,
{
    fn next(
        &self,
        origin: Option<&K>,
        direction: Navigation,
        space: &FocusSpace<'_, K>,
    ) -> Option<K> {
        let nodes = space.nodes;
        let mut enabled = nodes.iter().filter(|e| e.enabled);
        match direction {
            Navigation::First => enabled.next().map(|e| e.id.clone()),
            Navigation::Last => enabled.next_back().map(|e| e.id.clone()),
            Navigation::Next => next_linear(origin, space, self.wrap, Step::Forward),
            Navigation::Prev => next_linear(origin, space, self.wrap, Step::Backward),
        }
    }
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

fn next_linear<K>(
    origin: Option<&K>,
    space: &FocusSpace<'_, K>,
    wrap: WrapMode,
    step: Step,
) -> Option<K>
where
    K: Clone + PartialEq,
{
    let nodes = space.nodes;
    let len = nodes.len();
    if !nodes.iter().any(|e| e.enabled) {
        return None;
    }

    // Without a known origin, forward starts at the first candidate and
    // backward at the last.
    let Some(start) = origin.and_then(|o| space.position(o)) else {
        let pick = match step {
            Step::Forward => nodes.iter().find(|e| e.enabled),
            Step::Backward => nodes.iter().rev().find(|e| e.enabled),
        };
        return pick.map(|e| e.id.clone());
    };

    // Walk at most one full lap, skipping disabled entries.
    let mut pos = start;
    for _ in 0..len {
        pos = match (step, wrap) {
            (Step::Forward, _) if pos + 1 < len => pos + 1,
            (Step::Backward, _) if pos > 0 => pos - 1,
            (_, WrapMode::Never) => return None,
            (Step::Forward, WrapMode::Scope) => 0,
            (Step::Backward, WrapMode::Scope) => len - 1,
        };
        if pos == start {
            break;
        }
        if nodes[pos].enabled {
            return Some(nodes[pos].id.clone());
        }
    }
    // The origin is the only enabled entry; stay on it.
    nodes[start].enabled.then(|| nodes[start].id.clone())
}

/// Trait for choosing which candidate holds the roving tab stop.
pub trait TabStopPolicy<K>
where
    K: Clone + PartialEq,
{
    /// Resolve the tab stop for `space`, given an optional preferred item.
    fn resolve(&self, space: &FocusSpace<'_, K>, preferred: Option<&K>) -> Option<K>;
}

/// The preferred item if it is an enabled candidate, else the first enabled
/// candidate, else none.
#[derive(Copy, Clone, Debug, Default)]
pub struct PreferredOrFirst;

impl<K> TabStopPolicy<K> for PreferredOrFirst
where
    K: Clone + PartialEq,
{
    fn resolve(&self, space: &FocusSpace<'_, K>, preferred: Option<&K>) -> Option<K> {
        if let Some(p) = preferred
            && space.contains_enabled(p)
        {
            return Some(p.clone());
        }
        space.nodes.iter().find(|e| e.enabled).map(|e| e.id.clone())
    }
}
