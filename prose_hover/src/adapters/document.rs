// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Prose Doc document trees.
//!
//! ## Feature
//!
//! Enable with `document_adapter`.
//!
//! ## Notes
//!
//! These helpers plug a [`prose_doc::Document`] and a selection result into the
//! hover machinery: the document's parent back-references provide the ancestry
//! walk, so pointer targets anywhere inside a selected element resolve to it.

use alloc::vec::Vec;

use prose_doc::{Document, NodeId};

use crate::locator::HoverLocator;
use crate::types::{Ancestry, BoundsProvider};

/// [`Ancestry`] over a document tree's parent back-references.
#[derive(Clone, Copy, Debug)]
pub struct DocumentAncestry<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAncestry<'a> {
    /// Wrap a document for ancestry lookups.
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }
}

impl Ancestry<NodeId> for DocumentAncestry<'_> {
    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        self.doc.parent(*node)
    }

    fn is_ancestor_or_self(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.doc.contains(*ancestor, *node)
    }
}

/// Build a locator over a selection result, borrowing the document for
/// ancestry lookups.
pub fn locator_for_document<'a, B>(
    doc: &'a Document,
    elements: Vec<NodeId>,
    bounds: B,
) -> HoverLocator<NodeId, DocumentAncestry<'a>, B>
where
    B: BoundsProvider<NodeId>,
{
    HoverLocator::new(elements, DocumentAncestry::new(doc), bounds)
}
