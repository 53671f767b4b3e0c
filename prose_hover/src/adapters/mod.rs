// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Prose crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "document_adapter")]
pub mod document;
