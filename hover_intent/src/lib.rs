// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover Intent: a deterministic, `no_std` hover-intent controller for dropdown menus.
//!
//! ## Overview
//!
//! Pointing at a dropdown container shows its menu panel after a short delay; leaving it
//! hides the panel after the same delay. Each new hover event cancels the pending action of
//! the opposite kind, so transient pointer movement across a menu bar does not flicker
//! menus open and shut.
//!
//! The crate does not own a document, an event loop, or a clock:
//! - A [`Markup`](crate::markup::Markup) implementation answers class queries and applies
//!   class edits. `hover_intent_markup::Document` implements it behind `markup_adapter`.
//! - A [`Scheduler`](crate::timer::Scheduler) hands out cancelable one-shot timers.
//!   [`Timers`](crate::timer::Timers) over a [`ManualClock`](crate::timer::ManualClock) makes
//!   every test deterministic.
//!
//! ## Markup contract
//!
//! - Containers carry the container class (`dropdown` by default).
//! - Each container holds exactly one descendant with the panel class (`dropdown-menu`).
//! - The controller toggles the visible class (`show`) on that panel and touches nothing else.
//!
//! Containers that break the contract are reported by
//! [`HoverIntent::wire_scope`](crate::controller::HoverIntent::wire_scope) and left unwired;
//! the others are wired normally.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use hover_intent::config::IntentConfig;
//! use hover_intent::controller::HoverIntent;
//! use hover_intent::markup::Markup;
//! use hover_intent::timer::{ManualClock, Timers};
//!
//! // A two-element document: container 1 holding panel 2.
//! #[derive(Default)]
//! struct Page { panel_classes: Vec<String> }
//!
//! impl Markup for Page {
//!     type Element = u32;
//!     fn query_class(&self, scope: Option<u32>, class: &str) -> Vec<u32> {
//!         match (scope, class) {
//!             (None, "dropdown") => vec![1],
//!             (Some(1), "dropdown-menu") => vec![2],
//!             _ => vec![],
//!         }
//!     }
//!     fn is_alive(&self, e: u32) -> bool { e == 1 || e == 2 }
//!     fn has_class(&self, e: u32, class: &str) -> bool {
//!         e == 2 && self.panel_classes.iter().any(|c| c == class)
//!     }
//!     fn add_class(&mut self, e: u32, class: &str) -> bool {
//!         if e != 2 || self.has_class(e, class) { return false; }
//!         self.panel_classes.push(class.to_string());
//!         true
//!     }
//!     fn remove_class(&mut self, e: u32, class: &str) -> bool {
//!         let before = self.panel_classes.len();
//!         self.panel_classes.retain(|c| e != 2 || c != class);
//!         self.panel_classes.len() != before
//!     }
//! }
//!
//! let mut page = Page::default();
//! let clock = ManualClock::new();
//! let mut intent = HoverIntent::new(IntentConfig::default(), Timers::new(clock.clone()));
//! assert_eq!(intent.wire_scope(&page, None).wired, vec![1]);
//!
//! intent.mouse_over(1).unwrap();
//! clock.advance(Duration::from_millis(150));
//! intent.mouse_out(1).unwrap(); // cancels the pending show
//! clock.advance(Duration::from_millis(250));
//! intent.poll(&mut page);
//! assert!(!page.has_class(2, "show"));
//!
//! intent.mouse_over(1).unwrap();
//! clock.advance(Duration::from_millis(200));
//! intent.poll(&mut page);
//! assert!(page.has_class(2, "show"));
//! ```
//!
//! ## Logging
//!
//! The controller emits `tracing` events: `debug` for scheduling, cancellation and applied
//! actions, `warn` for skipped containers and panels that vanished, `trace` for hover
//! transitions. Install any subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`. Enable `std` for
//! [`SystemClock`](crate::timer::SystemClock).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
pub mod config;
pub mod controller;
pub mod error;
pub mod hover;
pub mod markup;
pub mod timer;
