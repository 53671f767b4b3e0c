// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-to-element matching over a fixed list of selected elements.

use alloc::vec::Vec;
use kurbo::Point;

use crate::types::{Ancestry, Anchor, BoundsProvider, HoverInfo, PointerEvent};

/// Matches pointer events against a fixed, document-ordered element list.
///
/// The list is expected to be disjoint (no element an ancestor of another), as
/// produced by a readable-element selection; under that assumption at most one
/// element can contain a given target, and the first match in document order is
/// taken.
///
/// Bounds are queried per call, never cached, so anchors always reflect the
/// layout at the moment of the event.
pub struct HoverLocator<K, A, B> {
    elements: Vec<K>,
    ancestry: A,
    bounds: B,
}

impl<K: core::fmt::Debug, A, B> core::fmt::Debug for HoverLocator<K, A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverLocator")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, A: Ancestry<K>, B: BoundsProvider<K>> HoverLocator<K, A, B> {
    /// Create a locator over `elements`, in document order.
    pub fn new(elements: Vec<K>, ancestry: A, bounds: B) -> Self {
        Self {
            elements,
            ancestry,
            bounds,
        }
    }

    /// The tracked element list, in document order.
    pub fn elements(&self) -> &[K] {
        &self.elements
    }

    /// Replace the tracked element list.
    pub fn set_elements(&mut self, elements: Vec<K>) {
        self.elements = elements;
    }

    /// Resolve a pointer event to the hovered element and its overlay anchor.
    ///
    /// Scans the element list in document order for the first element that
    /// contains the event's target (ancestor-or-self). Returns `None` when no
    /// tracked element contains the target.
    pub fn locate(&self, event: &PointerEvent<K>) -> Option<HoverInfo<K>> {
        let element = *self
            .elements
            .iter()
            .find(|&el| self.ancestry.is_ancestor_or_self(el, &event.target))?;
        Some(HoverInfo {
            element,
            anchor: self.anchor_of(element),
        })
    }

    /// Whether a page-absolute point falls inside the element's current bounds.
    pub fn is_point_inside(&self, node: &K, point: Point) -> bool {
        self.bounds.bounds_of(node).contains(point)
    }

    fn anchor_of(&self, element: K) -> Anchor {
        let rect = self.bounds.bounds_of(&element);
        Anchor {
            top: rect.y0,
            left: rect.x0,
            first_line_height: self.bounds.first_line_height(&element),
        }
    }
}
