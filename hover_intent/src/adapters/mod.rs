// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Hover Intent crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "markup_adapter")]
pub mod markup;
