// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover Intent Markup: a small generational element tree standing in for a host document.
//!
//! - Represents a hierarchy of elements with class lists, document-space bounds, and pointer flags.
//! - Answers selector-like class queries in document order.
//! - Resolves a pointer position to a root→target hit path, which hover tracking turns into
//!   enter/leave transitions.
//!
//! It is not a layout engine and not a DOM implementation: upstream code places elements and
//! mirrors the classes it cares about.
//!
//! ## API overview
//!
//! - [`Document`]: the element tree.
//! - [`Element`]: per-element data (tag, classes, bounds, flags).
//! - [`ElementFlags`]: pointer interaction controls.
//! - [`ElementId`]: generational handle of an element.
//!
//! ### Minimal usage
//!
//! ```
//! use hover_intent_markup::{Document, Element};
//! use kurbo::{Point, Rect};
//!
//! let mut doc = Document::new();
//! let nav = doc.insert(None, Element::new("nav").with_bounds(Rect::new(0.0, 0.0, 400.0, 40.0)));
//! let dropdown = doc.insert(
//!     Some(nav),
//!     Element::new("li").with_class("dropdown").with_bounds(Rect::new(0.0, 0.0, 100.0, 40.0)),
//! );
//! let menu = doc.insert(Some(dropdown), Element::new("ul").with_class("dropdown-menu"));
//!
//! assert_eq!(doc.query_class(Some(nav), "dropdown"), vec![dropdown]);
//! assert_eq!(doc.query_class(Some(dropdown), "dropdown-menu"), vec![menu]);
//! assert_eq!(doc.hit_path(Point::new(10.0, 10.0)), vec![nav, dropdown]);
//!
//! assert!(doc.add_class(menu, "show"));
//! assert!(doc.has_class(menu, "show"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod types;

pub use document::Document;
pub use types::{Element, ElementFlags, ElementId};
