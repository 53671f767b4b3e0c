// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element classification: the readability gate and its supporting predicates.

use alloc::string::String;
use alloc::vec::Vec;

use prose_doc::{Document, NodeId};

/// Kinds excluded from selection by default: heading levels 1-6, controls,
/// inline fragments, media, and preformatted/script containers.
pub const DEFAULT_EXCLUDED_KINDS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "button", "label", "span", "img", "pre", "script",
];

/// An immutable set of kind identifiers excluded from selection.
///
/// Matching is ASCII-case-insensitive, so `"SPAN"`, `"Span"`, and `"span"` are
/// the same kind. The set is plain configuration data: construct one per policy
/// and hand it to a [`Classifier`]; there is no process-wide mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionSet {
    kinds: Vec<String>,
}

impl ExclusionSet {
    /// Build a set from any collection of kind identifiers.
    pub fn new<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty set: no kind is excluded.
    pub fn none() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Whether `kind` is a member, ignoring ASCII case.
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.iter().any(|k| k.eq_ignore_ascii_case(kind))
    }

    /// Number of kinds in the set.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True iff no kind is excluded.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for ExclusionSet {
    /// The fixed blocklist: [`DEFAULT_EXCLUDED_KINDS`].
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_KINDS.iter().copied())
    }
}

bitflags::bitflags! {
    /// Why a node is not selectable, as a set of independent objections.
    ///
    /// Empty flags mean the node raises no objection on its own. Whether it is
    /// actually emitted still depends on the containment rule applied during
    /// traversal; see [`select`](crate::select).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SkipReason: u8 {
        /// The subtree's trimmed text is empty.
        const EMPTY_TEXT    = 0b0000_0001;
        /// The node's kind is in the exclusion set.
        const EXCLUDED_KIND = 0b0000_0010;
        /// The node is the only child of its parent.
        const SOLE_CHILD    = 0b0000_0100;
    }
}

/// Pure predicates over document nodes, parameterized by an [`ExclusionSet`].
///
/// All methods are side-effect free and total over live nodes; they panic only
/// on stale [`NodeId`]s (a caller bug, surfaced fast by [`Document`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classifier {
    exclusions: ExclusionSet,
}

impl Classifier {
    /// A classifier using the given exclusion set.
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// The exclusion set this classifier applies.
    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// The readability gate: the node's kind is not excluded and its subtree
    /// text, trimmed, is non-empty.
    pub fn is_readable(&self, doc: &Document, id: NodeId) -> bool {
        !self.exclusions.contains(doc.kind(id)) && doc.has_text(id)
    }

    /// True iff the node has a parent and that parent has exactly one child.
    ///
    /// The check is relative to the immediate parent only; it is not transitive
    /// up the chain.
    pub fn is_sole_child(&self, doc: &Document, id: NodeId) -> bool {
        doc.parent(id)
            .map(|p| doc.child_count(p) == 1)
            .unwrap_or(false)
    }

    /// True iff at least one *direct* child of the node passes [`Self::is_readable`].
    ///
    /// Deliberately shallow: readable content nested deeper than one level does
    /// not count here. The traversal re-applies this check at every depth, which
    /// is what makes the one-level check sufficient.
    pub fn has_readable_child(&self, doc: &Document, id: NodeId) -> bool {
        doc.children(id).iter().any(|&c| self.is_readable(doc, c))
    }

    /// Every objection the node raises, as combined [`SkipReason`] flags.
    ///
    /// Diagnostic companion to the boolean predicates; useful when explaining
    /// why an element was passed over.
    pub fn skip_reasons(&self, doc: &Document, id: NodeId) -> SkipReason {
        let mut reasons = SkipReason::empty();
        if !doc.has_text(id) {
            reasons |= SkipReason::EMPTY_TEXT;
        }
        if self.exclusions.contains(doc.kind(id)) {
            reasons |= SkipReason::EXCLUDED_KIND;
        }
        if self.is_sole_child(doc, id) {
            reasons |= SkipReason::SOLE_CHILD;
        }
        reasons
    }
}
