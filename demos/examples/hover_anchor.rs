// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over a selected document, with a scripted pointer path.
//!
//! Selects the readable paragraphs of a small document, wires them into a
//! [`HoverTracker`] through the document adapter, and replays a pointer moving
//! into the first paragraph, across to the second, and off the page.
//!
//! Run:
//! - `cargo run -p prose_demos --example hover_anchor`

use kurbo::{Point, Rect, Vec2};
use prose_doc::{Document, ElementData, NodeId};
use prose_hover::adapters::document::locator_for_document;
use prose_hover::{BoundsProvider, HoverTracker, PointerEvent, page_rect};
use prose_select::{Classifier, select};

/// A canned layout: each selected paragraph is a full-width row, as if the
/// page had already been laid out and scrolled.
struct DemoLayout {
    rows: Vec<(NodeId, Rect)>,
}

impl BoundsProvider<NodeId> for DemoLayout {
    fn bounds_of(&self, node: &NodeId) -> Rect {
        self.rows
            .iter()
            .find(|(id, _)| id == node)
            .map(|(_, r)| *r)
            .unwrap_or(Rect::ZERO)
    }

    fn first_line_height(&self, _node: &NodeId) -> f64 {
        24.0
    }
}

fn main() {
    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body"));
    let article = doc.insert(Some(body), ElementData::new("article"));
    let first = doc.insert(Some(article), ElementData::with_text("p", "First paragraph, with "));
    let first_span = doc.insert(Some(first), ElementData::with_text("span", "an inline run."));
    let second = doc.insert(Some(article), ElementData::with_text("p", "Second paragraph."));
    let footer = doc.insert(Some(body), ElementData::with_text("footer", "fin"));

    let selection = select(&doc, body, &Classifier::default());
    assert_eq!(selection, vec![first, second, footer]);

    // Viewport-relative layout, shifted by the current scroll position.
    let scroll = Vec2::new(0.0, 250.0);
    let layout = DemoLayout {
        rows: selection
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let y0 = i as f64 * 100.0;
                (id, page_rect(Rect::new(0.0, y0, 640.0, y0 + 80.0), scroll))
            })
            .collect(),
    };

    let mut tracker = HoverTracker::new(locator_for_document(&doc, selection, layout));
    let sub = tracker.subscribe(|info| match info {
        Some(i) => println!(
            "  hover -> top={} left={} first_line={}",
            i.anchor.top, i.anchor.left, i.anchor.first_line_height
        ),
        None => println!("  hover -> none"),
    });

    // Into the first paragraph (target is the nested <span>), then the second
    // paragraph, then off every tracked element.
    let path = [
        (Point::new(40.0, 260.0), first_span),
        (Point::new(40.0, 360.0), second),
        (Point::new(40.0, 800.0), body),
    ];
    for (position, target) in path {
        let event = PointerEvent { position, target };
        let transitions = tracker.on_pointer_move(&event);
        println!("move to {position:?}: {transitions:?}");
    }

    assert!(tracker.hovered().is_none());
    tracker.unsubscribe(sub);
    assert_eq!(tracker.observer_count(), 0);
}
