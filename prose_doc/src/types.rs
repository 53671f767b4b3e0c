// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document tree: node identifiers and element payloads.

use alloc::string::String;

/// Identifier for a node in the document tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ## Liveness
///
/// Use [`Document::is_alive`](crate::Document::is_alive) to check whether a `NodeId` still
/// refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
/// Read accessors on [`Document`](crate::Document) panic when handed a stale id; see their docs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Per-node payload: the element's kind identifier and its own (direct) text.
///
/// `kind` is an opaque tag name such as `"div"` or `"blockquote"`. Consumers that
/// match kinds (for example an exclusion list) decide their own comparison rules;
/// the document stores the string as given.
///
/// `text` is the text carried directly by this node, not including descendants.
/// Subtree text is assembled by [`Document::text_content`](crate::Document::text_content).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    /// Tag/kind identifier.
    pub kind: String,
    /// Text owned directly by this node.
    pub text: String,
}

impl ElementData {
    /// An element of the given kind with no text of its own.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: String::new(),
        }
    }

    /// An element of the given kind carrying its own text.
    pub fn with_text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}
