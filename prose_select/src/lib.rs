// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prose Select: top-level readable element selection over a document tree.
//!
//! Given a [`prose_doc::Document`] snapshot, [`select`] returns the minimal,
//! disjoint, order-preserving list of elements that represent independently
//! readable blocks of text. "Minimal" means the smallest units: a container is
//! never emitted when one of its direct children is itself readable.
//!
//! ## Rules
//!
//! A node survives the traversal only if it
//!
//! 1. has non-empty trimmed subtree text,
//! 2. has a kind outside the configured [`ExclusionSet`],
//! 3. is not the only child of its parent (wrapper collapsing), and
//! 4. has no direct child that itself passes rules 1–2 (otherwise traversal
//!    descends instead of emitting).
//!
//! Rules 1–2 form the readability gate; a gate failure prunes the whole
//! subtree. Rule 4's check is one level deep by design and re-applied at every
//! depth. [`Classifier`] exposes each predicate individually and
//! [`SkipReason`] reports them as combined diagnostic flags.
//!
//! ## Configuration
//!
//! The exclusion list is an immutable value injected into the classifier, so
//! policies can vary per call site and tests can override the default
//! blocklist ([`DEFAULT_EXCLUDED_KINDS`]).
//!
//! # Example
//!
//! ```rust
//! use prose_doc::{Document, ElementData};
//! use prose_select::{Classifier, select};
//!
//! let mut doc = Document::new();
//! let body = doc.insert(None, ElementData::new("body"));
//! let article = doc.insert(Some(body), ElementData::new("article"));
//! let first = doc.insert(Some(article), ElementData::with_text("p", "One."));
//! let second = doc.insert(Some(article), ElementData::with_text("p", "Two."));
//! let _heading = doc.insert(Some(body), ElementData::with_text("h1", "Title"));
//!
//! let result = select(&doc, body, &Classifier::default());
//! assert_eq!(result, [first, second]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classifier;
mod selector;

pub use classifier::{Classifier, DEFAULT_EXCLUDED_KINDS, ExclusionSet, SkipReason};
pub use selector::select;
