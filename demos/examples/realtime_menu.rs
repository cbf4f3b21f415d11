// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent on the wall clock, with a host loop that sleeps until the next deadline.
//!
//! Also shows how malformed markup is reported without blocking the other menus.
//!
//! Run:
//! - `RUST_LOG=hover_intent=debug cargo run -p hover_intent_demos --example realtime_menu`

use std::thread;
use std::time::Duration;

use hover_intent::config::IntentConfig;
use hover_intent::controller::HoverIntent;
use hover_intent::timer::{Clock, SystemClock, Timers};
use hover_intent_markup::{Document, Element};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new();
    let nav = doc.insert(None, Element::new("nav"));
    let help = doc.insert(Some(nav), Element::new("li").with_class("dropdown"));
    let help_menu = doc.insert(Some(help), Element::new("ul").with_class("dropdown-menu"));
    // No menu panel: reported, not wired.
    let broken = doc.insert(Some(nav), Element::new("li").with_class("dropdown"));

    let mut intent = HoverIntent::new(IntentConfig::default(), Timers::new(SystemClock::new()));
    let wiring = intent.wire_scope(&doc, Some(nav));
    println!("== Wired ==\n  {:?}", wiring.wired);
    for err in &wiring.skipped {
        println!("== Skipped ==\n  {err}");
    }
    assert_eq!(wiring.skipped[0].container(), broken);

    let _ = intent.mouse_over(help);
    while intent.scheduler().pending() > 0 {
        let timers = intent.scheduler();
        if let Some(at) = timers.next_deadline() {
            thread::sleep(at.saturating_sub(timers.clock().now()));
        }
        for change in intent.poll(&mut doc) {
            println!("  {change:?}");
        }
    }
    println!("help open: {}", doc.has_class(help_menu, "show"));

    let _ = intent.mouse_out(help);
    thread::sleep(Duration::from_millis(50));
    let _ = intent.mouse_over(help); // back before the hide fires
    thread::sleep(intent.delay() + Duration::from_millis(20));
    let _ = intent.poll(&mut doc);
    println!("help still open: {}", doc.has_class(help_menu, "show"));

    intent.teardown_all();
}
