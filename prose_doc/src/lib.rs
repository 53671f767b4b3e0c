// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prose Doc: an arena-backed document tree for readable-content tooling.
//!
//! This crate is the substrate the rest of the Prose workspace queries: a tree of
//! elements, each with a kind identifier, its own text, ordered children, and a
//! non-owning parent back-reference.
//!
//! - Nodes are addressed by generational [`NodeId`] handles; stale handles never
//!   alias live nodes and fail fast when dereferenced.
//! - Subtree text is queryable without materializing it ([`Document::has_text`])
//!   or as a concatenated string ([`Document::text_content`]).
//! - Ancestor-or-self containment ([`Document::contains`]) supports hover target
//!   matching in higher layers.
//!
//! The tree is treated as a snapshot: queries never mutate it, and there is no
//! change tracking. Build it, query it, drop it.
//!
//! ## API overview
//!
//! - [`Document`]: the arena; insert/remove plus read accessors.
//! - [`ElementData`]: per-node payload (kind + own text).
//! - [`NodeId`]: generational handle of a node.
//!
//! # Example
//!
//! ```rust
//! use prose_doc::{Document, ElementData};
//!
//! let mut doc = Document::new();
//! let body = doc.insert(None, ElementData::new("body"));
//! let quote = doc.insert(Some(body), ElementData::new("blockquote"));
//! let _text = doc.insert(Some(quote), ElementData::with_text("p", "Some text here"));
//!
//! assert_eq!(doc.text_content(body), "Some text here");
//! assert!(doc.contains(body, quote));
//! assert_eq!(doc.children(body), &[quote]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod types;

pub use document::Document;
pub use types::{ElementData, NodeId};
