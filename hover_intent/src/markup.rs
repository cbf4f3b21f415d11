// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the controller and the host document.

use alloc::vec::Vec;
use core::fmt::Debug;

/// Element queries and class edits the controller needs from a document.
///
/// Implemented for `hover_intent_markup::Document` behind the `markup_adapter` feature.
/// Tests and hosts with their own element store implement it directly.
pub trait Markup {
    /// Element identity. Containers are keyed by it, so it must be stable while wired.
    type Element: Copy + Ord + Debug;

    /// Elements carrying `class` in document order, below `scope` (excluding `scope`), or
    /// anywhere when `scope` is `None`.
    fn query_class(&self, scope: Option<Self::Element>, class: &str) -> Vec<Self::Element>;

    /// Returns true if `element` is still part of the document.
    fn is_alive(&self, element: Self::Element) -> bool;

    /// Returns true if `element` carries `class`.
    fn has_class(&self, element: Self::Element, class: &str) -> bool;

    /// Add `class`; returns true if it was absent.
    fn add_class(&mut self, element: Self::Element, class: &str) -> bool;

    /// Remove `class`; returns true if it was present.
    fn remove_class(&mut self, element: Self::Element, class: &str) -> bool;
}
