// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prose Hover: pointer-to-element hover tracking for readable content.
//!
//! ## Overview
//!
//! Given a fixed, document-ordered list of selected elements (for example from
//! `prose_select`), this crate resolves pointer-move events to the element
//! currently under the pointer and derives the anchor point for a hover
//! overlay: the element's page-absolute top/left plus the height of its first
//! text line.
//!
//! The crate is generic over the node key type `K` and talks to its
//! environment through two trait seams:
//!
//! - [`Ancestry`] answers "is this pointer target inside that element?" via
//!   parent back-references.
//! - [`BoundsProvider`] supplies page-absolute element bounds and first-line
//!   metrics, queried fresh on every event (layout is never cached here).
//!
//! ## Layering
//!
//! - [`HoverLocator`] is the pure half: one event in, match-or-none out.
//! - [`HoverTracker`] adds state and the subscription contract: register
//!   observers with [`HoverTracker::subscribe`], remove them by consuming the
//!   returned [`Subscription`], and gate the platform listener on
//!   [`HoverTracker::is_active`] so nothing is attached while there is nothing
//!   to track.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use prose_hover::{Ancestry, BoundsProvider, HoverEvent, HoverLocator, HoverTracker, PointerEvent};
//!
//! #[derive(Copy, Clone, Debug, Eq, PartialEq)]
//! struct Node(u32);
//!
//! struct Parents;
//! impl Ancestry<Node> for Parents {
//!     fn parent_of(&self, n: &Node) -> Option<Node> {
//!         (n.0 > 1).then(|| Node(n.0 - 1))
//!     }
//! }
//!
//! struct Layout;
//! impl BoundsProvider<Node> for Layout {
//!     fn bounds_of(&self, _: &Node) -> Rect {
//!         Rect::new(0.0, 40.0, 320.0, 90.0)
//!     }
//!     fn first_line_height(&self, _: &Node) -> f64 {
//!         22.0
//!     }
//! }
//!
//! let locator = HoverLocator::new(vec![Node(2)], Parents, Layout);
//! let mut tracker = HoverTracker::new(locator);
//!
//! let event = PointerEvent { position: Point::new(10.0, 50.0), target: Node(3) };
//! assert_eq!(tracker.on_pointer_move(&event), vec![HoverEvent::Enter(Node(2))]);
//! let info = tracker.hovered().unwrap();
//! assert_eq!((info.anchor.top, info.anchor.left), (40.0, 0.0));
//! ```
//!
//! The `document_adapter` feature wires the ancestry seam to a
//! `prose_doc::Document` (see the `adapters::document` module).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod locator;
mod tracker;
mod types;

pub use locator::HoverLocator;
pub use tracker::{HoverObserver, HoverTracker, Subscription};
pub use types::{Ancestry, Anchor, BoundsProvider, HoverEvent, HoverInfo, PointerEvent, page_rect};
