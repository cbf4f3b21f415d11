// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while wiring containers and routing hover events.

use core::fmt::Debug;

/// Why a container could not be wired.
///
/// Wiring failures are local to one container; see
/// [`HoverIntent::wire_scope`](crate::controller::HoverIntent::wire_scope).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError<E: Debug> {
    /// The container already has a record; wiring it again would double every timer.
    #[error("container {0:?} is already wired")]
    AlreadyWired(E),
    /// The container is not live in the markup.
    #[error("element {0:?} is not part of the document")]
    StaleElement(E),
    /// No descendant carries the panel class.
    #[error("container {0:?} has no menu panel")]
    MissingPanel(E),
    /// More than one descendant carries the panel class.
    #[error("container {container:?} has {count} menu panels, expected exactly one")]
    AmbiguousPanel {
        /// The container being wired.
        container: E,
        /// Number of matching panels.
        count: usize,
    },
}

impl<E: Debug + Copy> WireError<E> {
    /// The container this error is about.
    pub fn container(&self) -> E {
        match *self {
            Self::AlreadyWired(c) | Self::StaleElement(c) | Self::MissingPanel(c) => c,
            Self::AmbiguousPanel { container, .. } => container,
        }
    }
}

/// Why a hover event was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntentError<E: Debug> {
    /// The element was never wired, or has been torn down.
    #[error("container {0:?} is not wired")]
    NotWired(E),
}
