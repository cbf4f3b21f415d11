// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: element identifiers, flags, and element data.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

/// Identifier for an element in the document.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// Use [`Document::is_alive`](crate::Document::is_alive) to check whether an id still refers
/// to a live element. Stale ids never alias a different live element because the generation must match.
///
/// The `Ord` impl orders by slot, then generation. It carries no document-order meaning and
/// exists so ids can key ordered maps.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot generation of this id.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Element flags controlling pointer interaction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element takes part in [hit paths](crate::Document::hit_path).
        ///
        /// Clearing this mirrors `pointer-events: none`: the pointer passes through the
        /// element to whatever is underneath, including its own descendants.
        const PICKABLE = 0b0000_0001;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::PICKABLE
    }
}

/// Data for a single element.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Tag name, informational only (`"div"`, `"ul"`, ...).
    pub tag: String,
    /// Class list. Order is preserved and duplicates are never stored.
    pub classes: Vec<String>,
    /// Document-space border box used for hit paths.
    pub bounds: Rect,
    /// Pointer flags.
    pub flags: ElementFlags,
}

impl Element {
    /// Create an element with the given tag and no classes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add a class, skipping duplicates.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set the document-space bounds.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the pointer flags.
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }
}
