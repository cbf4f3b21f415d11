// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover intent controller.
//!
//! ## Model
//!
//! Each wired container owns a [`ContainerRecord`]: its panel and two timer slots.
//! A hover event on a container cancels the pending action of the opposite kind, then
//! schedules its own action after the configured delay. If an action of the same kind is
//! already pending it is kept with its original deadline, so repeated events do not push it
//! back. At most one action per container is ever pending, and only the most recent hover
//! intent survives to fire:
//!
//! | event       | pending before | pending after          |
//! |-------------|----------------|------------------------|
//! | `mouse_over`| nothing / hide | show (new)             |
//! | `mouse_over`| show           | show (same deadline)   |
//! | `mouse_out` | nothing / show | hide (new)             |
//! | `mouse_out` | hide           | hide (same deadline)   |
//! | timer fires | show / hide    | nothing                |
//!
//! Records are independent: nothing done for one container touches another container's
//! panel or timers.
//!
//! ## Driving it
//!
//! 1) [`HoverIntent::wire_scope`] once the markup is ready.
//! 2) Feed hover input, either per container with [`HoverIntent::mouse_over`] and
//!    [`HoverIntent::mouse_out`], or as pointer paths with [`HoverIntent::pointer_path`].
//! 3) Deliver expiries with [`HoverIntent::poll`] (stock [`Timers`](crate::timer::Timers))
//!    or [`HoverIntent::timer_fired`] (host timers).
//! 4) [`HoverIntent::teardown`] or [`HoverIntent::prune`] when containers leave the document.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

use tracing::{debug, trace, warn};

use crate::config::IntentConfig;
use crate::error::{IntentError, WireError};
use crate::hover::{HoverEvent, HoverTracker};
use crate::markup::Markup;
use crate::timer::{Scheduler, TimerId};

/// Direction of a hover intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Add the visibility class.
    Show,
    /// Remove the visibility class.
    Hide,
}

impl Intent {
    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Show => Self::Hide,
            Self::Hide => Self::Show,
        }
    }
}

/// Derived per-container state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntentState {
    /// Nothing pending.
    Idle,
    /// A show action is pending.
    ShowPending,
    /// A hide action is pending.
    HidePending,
}

/// Per-container record: the panel and the two timer slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerRecord<E> {
    /// The one menu panel inside the container.
    pub panel: E,
    /// Pending show timer, if any.
    pub show_timer: Option<TimerId>,
    /// Pending hide timer, if any.
    pub hide_timer: Option<TimerId>,
}

impl<E> ContainerRecord<E> {
    fn new(panel: E) -> Self {
        Self {
            panel,
            show_timer: None,
            hide_timer: None,
        }
    }

    fn slot_mut(&mut self, intent: Intent) -> &mut Option<TimerId> {
        match intent {
            Intent::Show => &mut self.show_timer,
            Intent::Hide => &mut self.hide_timer,
        }
    }

    /// State implied by the timer slots.
    pub fn state(&self) -> IntentState {
        match (self.show_timer, self.hide_timer) {
            (Some(_), _) => IntentState::ShowPending,
            (None, Some(_)) => IntentState::HidePending,
            (None, None) => IntentState::Idle,
        }
    }
}

/// Outcome of a fired timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PanelChange<E> {
    /// Container whose timer fired.
    pub container: E,
    /// Panel whose class was edited.
    pub panel: E,
    /// What the timer did.
    pub intent: Intent,
    /// False when the panel was already in the requested state.
    pub changed: bool,
}

/// Result of [`HoverIntent::wire_scope`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wiring<E: Debug> {
    /// Containers wired by this call, in document order.
    pub wired: Vec<E>,
    /// Containers that were skipped, with the reason.
    pub skipped: Vec<WireError<E>>,
}

#[derive(Copy, Clone, Debug)]
struct Pending<E> {
    container: E,
    intent: Intent,
}

/// Hover intent controller over containers keyed by `E`, scheduling on `S`.
#[derive(Debug)]
pub struct HoverIntent<E, S> {
    config: IntentConfig,
    scheduler: S,
    records: BTreeMap<E, ContainerRecord<E>>,
    pending: BTreeMap<TimerId, Pending<E>>,
    hover: HoverTracker<E>,
}

impl<E, S> HoverIntent<E, S>
where
    E: Copy + Ord + Debug,
    S: Scheduler,
{
    /// Create a controller with no containers wired.
    pub fn new(config: IntentConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            records: BTreeMap::new(),
            pending: BTreeMap::new(),
            hover: HoverTracker::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &IntentConfig {
        &self.config
    }

    /// Hover delay in both directions.
    pub fn delay(&self) -> Duration {
        self.config.delay
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Wire every container below `scope` (or in the whole document when `None`).
    ///
    /// Each container is wired independently: a malformed one is reported in
    /// [`Wiring::skipped`] and the rest are still wired. Calling this again on the same
    /// markup is harmless; already wired containers come back as
    /// [`WireError::AlreadyWired`].
    pub fn wire_scope<M>(&mut self, markup: &M, scope: Option<E>) -> Wiring<E>
    where
        M: Markup<Element = E>,
    {
        let mut wiring = Wiring {
            wired: Vec::new(),
            skipped: Vec::new(),
        };
        for container in markup.query_class(scope, &self.config.container_class) {
            match self.wire(markup, container) {
                Ok(_) => wiring.wired.push(container),
                Err(err @ WireError::AlreadyWired(_)) => {
                    debug!(?container, "container already wired");
                    wiring.skipped.push(err);
                }
                Err(err) => {
                    warn!(?container, %err, "skipping dropdown container");
                    wiring.skipped.push(err);
                }
            }
        }
        debug!(
            wired = wiring.wired.len(),
            skipped = wiring.skipped.len(),
            "wired dropdown containers"
        );
        wiring
    }

    /// Wire one container, returning its panel.
    ///
    /// The container must be live and contain exactly one element with the panel class.
    pub fn wire<M>(&mut self, markup: &M, container: E) -> Result<E, WireError<E>>
    where
        M: Markup<Element = E>,
    {
        if self.records.contains_key(&container) {
            return Err(WireError::AlreadyWired(container));
        }
        if !markup.is_alive(container) {
            return Err(WireError::StaleElement(container));
        }
        let panels = markup.query_class(Some(container), &self.config.panel_class);
        let panel = match panels.as_slice() {
            [] => return Err(WireError::MissingPanel(container)),
            [panel] => *panel,
            _ => {
                return Err(WireError::AmbiguousPanel {
                    container,
                    count: panels.len(),
                });
            }
        };
        self.records.insert(container, ContainerRecord::new(panel));
        trace!(?container, ?panel, "wired container");
        Ok(panel)
    }

    /// Returns true if `container` has a record.
    pub fn is_wired(&self, container: E) -> bool {
        self.records.contains_key(&container)
    }

    /// Record of a wired container.
    pub fn record(&self, container: E) -> Option<&ContainerRecord<E>> {
        self.records.get(&container)
    }

    /// Derived state of a wired container.
    pub fn state(&self, container: E) -> Option<IntentState> {
        self.records.get(&container).map(ContainerRecord::state)
    }

    /// Wired containers in key order.
    pub fn containers(&self) -> impl Iterator<Item = E> + '_ {
        self.records.keys().copied()
    }

    /// The pointer entered `container`: cancel any pending hide, schedule a show.
    ///
    /// If a show is already pending its timer is kept and its id returned.
    pub fn mouse_over(&mut self, container: E) -> Result<TimerId, IntentError<E>> {
        self.request(container, Intent::Show)
    }

    /// The pointer left `container`: cancel any pending show, schedule a hide.
    ///
    /// If a hide is already pending its timer is kept and its id returned.
    pub fn mouse_out(&mut self, container: E) -> Result<TimerId, IntentError<E>> {
        self.request(container, Intent::Hide)
    }

    fn request(&mut self, container: E, intent: Intent) -> Result<TimerId, IntentError<E>> {
        let record = self
            .records
            .get_mut(&container)
            .ok_or(IntentError::NotWired(container))?;
        if let Some(id) = record.slot_mut(intent.opposite()).take() {
            self.scheduler.cancel(id);
            if let Some(p) = self.pending.remove(&id) {
                debug!(?container, intent = ?p.intent, timer = id.get(), "canceled pending action");
            }
        }
        // A pending action of the same kind keeps its original deadline.
        if let Some(id) = *record.slot_mut(intent) {
            trace!(?container, ?intent, timer = id.get(), "action already pending");
            return Ok(id);
        }
        let id = self.scheduler.schedule(self.config.delay);
        *record.slot_mut(intent) = Some(id);
        self.pending.insert(id, Pending { container, intent });
        debug!(?container, ?intent, timer = id.get(), "scheduled action");
        Ok(id)
    }

    /// Run the action for an expired timer.
    ///
    /// Ids that are unknown, canceled, or already delivered are ignored and return `None`,
    /// as does a timer whose panel has left the document.
    pub fn timer_fired<M>(&mut self, markup: &mut M, id: TimerId) -> Option<PanelChange<E>>
    where
        M: Markup<Element = E>,
    {
        let Pending { container, intent } = self.pending.remove(&id)?;
        let record = self.records.get_mut(&container)?;
        let slot = record.slot_mut(intent);
        if *slot != Some(id) {
            return None;
        }
        *slot = None;
        let panel = record.panel;
        if !markup.is_alive(panel) {
            warn!(?container, ?panel, ?intent, "menu panel left the document");
            return None;
        }
        let class = self.config.visible_class.as_str();
        let changed = match intent {
            Intent::Show => markup.add_class(panel, class),
            Intent::Hide => markup.remove_class(panel, class),
        };
        debug!(?container, ?panel, ?intent, changed, "applied hover intent");
        Some(PanelChange {
            container,
            panel,
            intent,
            changed,
        })
    }

    /// Deliver every expired timer from the scheduler, in deadline order.
    pub fn poll<M>(&mut self, markup: &mut M) -> Vec<PanelChange<E>>
    where
        M: Markup<Element = E>,
    {
        let mut out = Vec::new();
        while let Some(id) = self.scheduler.next_expired() {
            out.extend(self.timer_fired(markup, id));
        }
        out
    }

    /// Feed the pointer's root→target path.
    ///
    /// Wired containers that the pointer enters get [`mouse_over`](Self::mouse_over) and
    /// those it leaves get [`mouse_out`](Self::mouse_out). Movement between elements inside
    /// one container produces nothing for that container. Returns the container
    /// transitions that were applied.
    pub fn pointer_path(&mut self, path: &[E]) -> Vec<HoverEvent<E>> {
        let transitions = self.hover.update_path(path);
        self.apply_transitions(transitions)
    }

    /// The pointer left the surface.
    pub fn pointer_left(&mut self) -> Vec<HoverEvent<E>> {
        let transitions = self.hover.clear();
        self.apply_transitions(transitions)
    }

    fn apply_transitions(&mut self, transitions: Vec<HoverEvent<E>>) -> Vec<HoverEvent<E>> {
        let mut applied = Vec::new();
        for ev in transitions {
            let result = match ev {
                HoverEvent::Enter(c) if self.is_wired(c) => self.mouse_over(c),
                HoverEvent::Leave(c) if self.is_wired(c) => self.mouse_out(c),
                _ => continue,
            };
            if result.is_ok() {
                trace!(?ev, "hover transition");
                applied.push(ev);
            }
        }
        applied
    }

    /// Unwire `container`, canceling its pending timers.
    ///
    /// Returns false if it was not wired.
    pub fn teardown(&mut self, container: E) -> bool {
        let Some(record) = self.records.remove(&container) else {
            return false;
        };
        for id in [record.show_timer, record.hide_timer].into_iter().flatten() {
            self.scheduler.cancel(id);
            self.pending.remove(&id);
        }
        debug!(?container, "tore down container");
        true
    }

    /// Tear down every container whose element or panel is no longer live.
    ///
    /// Returns the containers removed.
    pub fn prune<M>(&mut self, markup: &M) -> Vec<E>
    where
        M: Markup<Element = E>,
    {
        let gone: Vec<E> = self
            .records
            .iter()
            .filter(|(c, r)| !markup.is_alive(**c) || !markup.is_alive(r.panel))
            .map(|(c, _)| *c)
            .collect();
        for &c in &gone {
            self.teardown(c);
        }
        gone
    }

    /// Tear down every container.
    pub fn teardown_all(&mut self) {
        let all: Vec<E> = self.containers().collect();
        for c in all {
            self.teardown(c);
        }
    }
}
