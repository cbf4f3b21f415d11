// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration: delay and the class names that form the markup contract.

use alloc::string::String;
use core::time::Duration;

/// Hover intent delay applied to both showing and hiding.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Class marking a dropdown container.
pub const DEFAULT_CONTAINER_CLASS: &str = "dropdown";

/// Class marking the menu panel inside a container.
pub const DEFAULT_PANEL_CLASS: &str = "dropdown-menu";

/// Class whose presence on a panel means "visible".
pub const DEFAULT_VISIBLE_CLASS: &str = "show";

/// Configuration for [`HoverIntent`](crate::controller::HoverIntent).
///
/// With the `serde` feature this can be read from a host's config file. Missing fields fall
/// back to the defaults, and the delay is written in whole milliseconds:
///
/// ```json
/// { "delay_ms": 250, "visible_class": "open" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntentConfig {
    /// Wait before honoring a hover change, in both directions.
    #[cfg_attr(feature = "serde", serde(rename = "delay_ms", with = "millis"))]
    pub delay: Duration,
    /// Class selecting dropdown containers.
    pub container_class: String,
    /// Class selecting the one menu panel inside each container.
    pub panel_class: String,
    /// Class toggled on the panel.
    pub visible_class: String,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            container_class: String::from(DEFAULT_CONTAINER_CLASS),
            panel_class: String::from(DEFAULT_PANEL_CLASS),
            visible_class: String::from(DEFAULT_VISIBLE_CLASS),
        }
    }
}

impl IntentConfig {
    /// Set the hover delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the container class.
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }

    /// Set the panel class.
    pub fn with_panel_class(mut self, class: impl Into<String>) -> Self {
        self.panel_class = class.into();
        self
    }

    /// Set the visibility class.
    pub fn with_visible_class(mut self, class: impl Into<String>) -> Self {
        self.visible_class = class.into();
        self
    }
}

#[cfg(feature = "serde")]
mod millis {
    use core::time::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
