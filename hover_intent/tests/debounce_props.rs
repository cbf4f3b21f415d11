// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for hover intent debouncing.
//!
//! 1. After any event sequence, waiting out the delay leaves each panel visible exactly
//!    when the last event on its container was an enter.
//! 2. At most one timer per container is ever pending.
//! 3. Events on one container never change another container's panel.
//! 4. A leave inside the delay window after an enter means the panel never becomes visible.

use std::collections::BTreeMap;
use std::time::Duration;

use hover_intent::config::IntentConfig;
use hover_intent::controller::{HoverIntent, Intent};
use hover_intent::markup::Markup;
use hover_intent::timer::{ManualClock, Timers};
use proptest::prelude::*;

const DELAY: Duration = Duration::from_millis(200);
const CONTAINERS: u32 = 4;

/// Containers are `2 * i`, their panels `2 * i + 1`.
struct Menus {
    visible: BTreeMap<u32, bool>,
}

impl Menus {
    fn new() -> Self {
        Self {
            visible: (0..CONTAINERS).map(|i| (2 * i + 1, false)).collect(),
        }
    }

    fn shown(&self, container: u32) -> bool {
        self.visible[&(container + 1)]
    }
}

impl Markup for Menus {
    type Element = u32;

    fn query_class(&self, scope: Option<u32>, class: &str) -> Vec<u32> {
        match (scope, class) {
            (None, "dropdown") => (0..CONTAINERS).map(|i| 2 * i).collect(),
            (Some(c), "dropdown-menu") if c % 2 == 0 => vec![c + 1],
            _ => Vec::new(),
        }
    }

    fn is_alive(&self, element: u32) -> bool {
        element < 2 * CONTAINERS
    }

    fn has_class(&self, element: u32, class: &str) -> bool {
        class == "show" && self.visible.get(&element).copied().unwrap_or(false)
    }

    fn add_class(&mut self, element: u32, class: &str) -> bool {
        match self.visible.get_mut(&element) {
            Some(v) if class == "show" && !*v => {
                *v = true;
                true
            }
            _ => false,
        }
    }

    fn remove_class(&mut self, element: u32, class: &str) -> bool {
        match self.visible.get_mut(&element) {
            Some(v) if class == "show" && *v => {
                *v = false;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
enum Op {
    Enter(u32),
    Leave(u32),
    Wait(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..CONTAINERS).prop_map(|i| Op::Enter(2 * i)),
        (0..CONTAINERS).prop_map(|i| Op::Leave(2 * i)),
        (0_u64..400).prop_map(Op::Wait),
    ]
}

fn setup() -> (ManualClock, HoverIntent<u32, Timers<ManualClock>>, Menus) {
    let clock = ManualClock::new();
    let mut intent = HoverIntent::new(
        IntentConfig::default().with_delay(DELAY),
        Timers::new(clock.clone()),
    );
    let menus = Menus::new();
    let wiring = intent.wire_scope(&menus, None);
    assert_eq!(wiring.wired.len(), CONTAINERS as usize, "all menus wire");
    (clock, intent, menus)
}

proptest! {
    #[test]
    fn last_intent_wins(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let (clock, mut intent, mut menus) = setup();
        let mut last: BTreeMap<u32, Intent> = BTreeMap::new();
        for op in &ops {
            match *op {
                Op::Enter(c) => {
                    intent.mouse_over(c).unwrap();
                    last.insert(c, Intent::Show);
                }
                Op::Leave(c) => {
                    intent.mouse_out(c).unwrap();
                    last.insert(c, Intent::Hide);
                }
                Op::Wait(ms) => {
                    clock.advance(Duration::from_millis(ms));
                    intent.poll(&mut menus);
                }
            }
            prop_assert!(intent.scheduler().pending() <= CONTAINERS as usize);
            for c in intent.containers() {
                let r = intent.record(c).unwrap();
                prop_assert!(r.show_timer.is_none() || r.hide_timer.is_none());
            }
        }
        clock.advance(DELAY);
        intent.poll(&mut menus);
        prop_assert_eq!(intent.scheduler().pending(), 0);
        for (c, i) in last {
            prop_assert_eq!(menus.shown(c), i == Intent::Show);
        }
    }

    #[test]
    fn other_containers_are_untouched(
        target in 0..CONTAINERS,
        ops in prop::collection::vec(prop::bool::ANY, 1..16),
        gaps in prop::collection::vec(0_u64..300, 16),
    ) {
        let (clock, mut intent, mut menus) = setup();
        let c = 2 * target;
        for (enter, gap) in ops.iter().zip(&gaps) {
            if *enter {
                intent.mouse_over(c).unwrap();
            } else {
                intent.mouse_out(c).unwrap();
            }
            clock.advance(Duration::from_millis(*gap));
            for change in intent.poll(&mut menus) {
                prop_assert_eq!(change.container, c);
            }
        }
        clock.advance(DELAY);
        intent.poll(&mut menus);
        for i in (0..CONTAINERS).filter(|&i| i != target) {
            prop_assert!(!menus.shown(2 * i));
        }
    }

    #[test]
    fn quick_leave_never_shows(gap in 0_u64..200) {
        let (clock, mut intent, mut menus) = setup();
        intent.mouse_over(0).unwrap();
        clock.advance(Duration::from_millis(gap));
        prop_assert!(intent.poll(&mut menus).is_empty());
        intent.mouse_out(0).unwrap();
        for _ in 0..4 {
            clock.advance(Duration::from_millis(100));
            intent.poll(&mut menus);
            prop_assert!(!menus.shown(0));
        }
    }
}
