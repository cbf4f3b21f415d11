// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hover tracking: turn successive root→target paths into enter/leave transitions.
//!
//! This gives `mouseenter`/`mouseleave` semantics: moving the pointer between descendants
//! of an element never leaves that element, because it stays on the shared prefix of the
//! two paths.
//!
//! ```
//! use hover_intent::hover::{HoverEvent, HoverTracker};
//!
//! let mut h: HoverTracker<u32> = HoverTracker::new();
//! assert_eq!(h.update_path(&[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! // Moving to a sibling keeps `1` hovered.
//! assert_eq!(h.update_path(&[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! ```

use alloc::vec::Vec;

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered `K`. Emitted outer→inner.
    Enter(K),
    /// The pointer left `K`. Emitted inner→outer.
    Leave(K),
}

impl<K: Copy> HoverEvent<K> {
    /// The element this transition is about.
    pub fn target(self) -> K {
        match self {
            Self::Enter(k) | Self::Leave(k) => k,
        }
    }
}

/// Tracks the hovered root→target path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker<K> {
    current: Vec<K>,
}

impl<K: Copy + Eq> HoverTracker<K> {
    /// Create a tracker with nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// Currently hovered root→target path.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Returns true if `k` is on the hovered path.
    pub fn is_hovered(&self, k: K) -> bool {
        self.current.contains(&k)
    }

    /// Replace the hovered path, returning leaves (inner→outer) followed by enters
    /// (outer→inner) for everything below the shared prefix.
    pub fn update_path(&mut self, path: &[K]) -> Vec<HoverEvent<K>> {
        let shared = self
            .current
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count();
        let mut out: Vec<_> = self.current[shared..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .collect();
        out.extend(path[shared..].iter().map(|&k| HoverEvent::Enter(k)));
        self.current.clear();
        self.current.extend_from_slice(path);
        out
    }

    /// The pointer left the surface: leave everything, inner→outer.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update_path(&[])
    }
}
