// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer moves across a menu bar on a simulated clock.
//!
//! The pointer brushes across "File" on its way to "Edit": the pending show for "File" is
//! canceled, so only "Edit" opens.
//!
//! Run:
//! - `RUST_LOG=hover_intent=debug cargo run -p hover_intent_demos --example dropdown_hover`

use std::time::Duration;

use hover_intent::adapters::markup::hover_point;
use hover_intent::config::IntentConfig;
use hover_intent::controller::HoverIntent;
use hover_intent::timer::{ManualClock, Timers};
use hover_intent_markup::{Document, Element, ElementId};
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;

fn dropdown(doc: &mut Document, nav: ElementId, label: &str, x0: f64) -> (ElementId, ElementId) {
    let li = doc.insert(
        Some(nav),
        Element::new("li")
            .with_class("dropdown")
            .with_bounds(Rect::new(x0, 0.0, x0 + 80.0, 30.0)),
    );
    let _label = doc.insert(
        Some(li),
        Element::new(format!("a#{label}")).with_bounds(Rect::new(x0 + 5.0, 5.0, x0 + 75.0, 25.0)),
    );
    let menu = doc.insert(
        Some(li),
        Element::new("ul")
            .with_class("dropdown-menu")
            .with_bounds(Rect::new(x0, 30.0, x0 + 160.0, 200.0)),
    );
    (li, menu)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new();
    let nav = doc.insert(
        None,
        Element::new("nav").with_bounds(Rect::new(0.0, 0.0, 640.0, 480.0)),
    );
    let (_file, file_menu) = dropdown(&mut doc, nav, "file", 0.0);
    let (_edit, edit_menu) = dropdown(&mut doc, nav, "edit", 80.0);

    let clock = ManualClock::new();
    let mut intent = HoverIntent::new(IntentConfig::default(), Timers::new(clock.clone()));
    let wiring = intent.wire_scope(&doc, Some(nav));
    println!("== Wired ==\n  {:?}", wiring.wired);

    // (time in ms, pointer position)
    let moves = [
        // Over File.
        (0, Point::new(40.0, 15.0)),
        // On to Edit before File opens.
        (120, Point::new(120.0, 15.0)),
        // Down into Edit's menu, which overlaps File's.
        (400, Point::new(120.0, 100.0)),
        // Away.
        (700, Point::new(600.0, 400.0)),
    ];
    let mut now = 0;
    for (at, pt) in moves {
        clock.advance(Duration::from_millis(at - now));
        now = at;
        for change in intent.poll(&mut doc) {
            println!("  t={now:>4}ms  {change:?}");
        }
        let transitions = hover_point(&mut intent, &doc, pt);
        println!("t={now:>4}ms pointer {pt:?} -> {transitions:?}");
        println!(
            "          file open: {}, edit open: {}",
            doc.has_class(file_menu, "show"),
            doc.has_class(edit_menu, "show")
        );
    }
    clock.advance(intent.delay());
    for change in intent.poll(&mut doc) {
        println!("  settle  {change:?}");
    }

    assert!(!doc.has_class(file_menu, "show"));
    assert!(!doc.has_class(edit_menu, "show"));
}
