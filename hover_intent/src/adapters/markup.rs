// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Hover Intent Markup.
//!
//! ## Feature
//!
//! Enable with `markup_adapter`.
//!
//! ## Notes
//!
//! [`Document`] implements [`Markup`] directly, so a controller keyed by [`ElementId`] can
//! wire and toggle panels in it. [`hover_point`] resolves a pointer position to a hit path
//! and feeds it to the controller.

use alloc::vec::Vec;

use hover_intent_markup::{Document, ElementId};
use kurbo::Point;

use crate::controller::HoverIntent;
use crate::hover::HoverEvent;
use crate::markup::Markup;
use crate::timer::Scheduler;

impl Markup for Document {
    type Element = ElementId;

    fn query_class(&self, scope: Option<ElementId>, class: &str) -> Vec<ElementId> {
        Self::query_class(self, scope, class)
    }

    fn is_alive(&self, element: ElementId) -> bool {
        Self::is_alive(self, element)
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        Self::has_class(self, element, class)
    }

    fn add_class(&mut self, element: ElementId, class: &str) -> bool {
        Self::add_class(self, element, class)
    }

    fn remove_class(&mut self, element: ElementId, class: &str) -> bool {
        Self::remove_class(self, element, class)
    }
}

/// Move the pointer to `pt` in `doc`, applying container enter/leave transitions.
///
/// Returns the container transitions that were applied.
pub fn hover_point<S: Scheduler>(
    intent: &mut HoverIntent<ElementId, S>,
    doc: &Document,
    pt: Point,
) -> Vec<HoverEvent<ElementId>> {
    intent.pointer_path(&doc.hit_path(pt))
}
