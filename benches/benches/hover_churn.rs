// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hover_intent::adapters::markup::hover_point;
use hover_intent::config::IntentConfig;
use hover_intent::controller::HoverIntent;
use hover_intent::timer::{ManualClock, Timers};
use hover_intent_markup::{Document, Element, ElementId};
use kurbo::{Point, Rect};
use std::time::Duration;

/// A nav bar of `n` dropdowns, 100 units wide each, with menus hanging below.
fn menu_bar(n: usize) -> (Document, ElementId) {
    let mut doc = Document::new();
    let width = n as f64 * 100.0;
    let nav = doc.insert(
        None,
        Element::new("nav").with_bounds(Rect::new(0.0, 0.0, width, 400.0)),
    );
    for i in 0..n {
        let x0 = i as f64 * 100.0;
        let dropdown = doc.insert(
            Some(nav),
            Element::new("li")
                .with_class("dropdown")
                .with_bounds(Rect::new(x0, 0.0, x0 + 100.0, 40.0)),
        );
        let _ = doc.insert(
            Some(dropdown),
            Element::new("ul")
                .with_class("dropdown-menu")
                .with_bounds(Rect::new(x0, 40.0, x0 + 100.0, 300.0)),
        );
    }
    (doc, nav)
}

fn bench_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire_scope");
    for &n in &[16_usize, 256] {
        let (doc, nav) = menu_bar(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("menus_{n}"), |b| {
            b.iter_batched(
                || HoverIntent::new(IntentConfig::default(), Timers::new(ManualClock::new())),
                |mut intent| black_box(intent.wire_scope(&doc, Some(nav)).wired.len()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_sweep");
    for &n in &[16_usize, 256] {
        let steps = n * 10;
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_function(format!("menus_{n}"), |b| {
            b.iter_batched(
                || {
                    let (doc, nav) = menu_bar(n);
                    let clock = ManualClock::new();
                    let mut intent =
                        HoverIntent::new(IntentConfig::default(), Timers::new(clock.clone()));
                    let _ = intent.wire_scope(&doc, Some(nav));
                    (doc, clock, intent)
                },
                |(mut doc, clock, mut intent)| {
                    // Sweep left to right across the bar, 10 units per 5ms.
                    for s in 0..steps {
                        let pt = Point::new(s as f64 * 10.0 + 5.0, 20.0);
                        black_box(hover_point(&mut intent, &doc, pt));
                        clock.advance(Duration::from_millis(5));
                        black_box(intent.poll(&mut doc));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wire, bench_sweep);
criterion_main!(benches);
