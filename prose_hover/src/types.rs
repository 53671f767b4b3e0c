// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for hover tracking: pointer events, anchors, and the trait seams
//! to the embedding environment.

use kurbo::{Point, Rect, Vec2};

/// One pointer-move sample.
///
/// `position` is in page-absolute coordinates (already adjusted for scroll);
/// `target` is the innermost node under the pointer as reported by the
/// embedding event source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Page-absolute pointer position.
    pub position: Point,
    /// The event's target node.
    pub target: K,
}

/// Where to anchor the hover overlay relative to the hovered element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    /// Page-absolute top edge of the hovered element.
    pub top: f64,
    /// Page-absolute left edge of the hovered element.
    pub left: f64,
    /// Rendered line-box height of the element's first text line.
    /// `0.0` when the provider cannot measure it.
    pub first_line_height: f64,
}

/// The non-none half of the hover state: which element is hovered and where the
/// overlay should sit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverInfo<K> {
    /// The hovered top-level readable element.
    pub element: K,
    /// Overlay anchor derived from the element's current bounds.
    pub anchor: Anchor,
}

/// A hover transition event.
///
/// Returned by [`HoverTracker::on_pointer_move`](crate::HoverTracker::on_pointer_move)
/// when the hovered element changes: at most one `Leave` for the previous
/// element followed by at most one `Enter` for the new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered the given element.
    Enter(K),
    /// The pointer left the given element.
    Leave(K),
}

/// Look up the parent of a node to walk its ancestry.
pub trait Ancestry<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Ancestor-or-self containment: true iff `node` is `ancestor` itself or
    /// lies somewhere below it.
    ///
    /// The default walks `parent_of` from `node`; implementations with a faster
    /// containment check may override it.
    fn is_ancestor_or_self(&self, ancestor: &K, node: &K) -> bool
    where
        K: Copy + Eq,
    {
        let mut cur = *node;
        loop {
            if cur == *ancestor {
                return true;
            }
            match self.parent_of(&cur) {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }
}

/// Layout capability supplied by the embedding environment.
///
/// Both queries are synchronous and must reflect layout at call time; results
/// are never cached across calls by this crate.
pub trait BoundsProvider<K> {
    /// The element's bounding box in page-absolute coordinates (scroll already
    /// applied; see [`page_rect`] for converting viewport-relative rects).
    fn bounds_of(&self, node: &K) -> Rect;

    /// Rendered line-box height of the element's first visual text line, or
    /// `0.0` when unknown.
    fn first_line_height(&self, node: &K) -> f64;
}

/// Convert a viewport-relative rectangle to page-absolute coordinates by
/// applying the current scroll offset.
pub fn page_rect(viewport: Rect, scroll: Vec2) -> Rect {
    viewport + scroll
}
