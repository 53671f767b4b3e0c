// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Readable-element selection over a small page-like document.
//!
//! Builds a body with navigation, an article, and assorted wrappers, then
//! prints which elements the selector keeps and why the others were skipped.
//!
//! Run:
//! - `cargo run -p prose_demos --example select_basics`

use prose_doc::{Document, ElementData, NodeId};
use prose_select::{Classifier, select};

fn el(doc: &mut Document, parent: NodeId, kind: &str) -> NodeId {
    doc.insert(Some(parent), ElementData::new(kind))
}

fn text(doc: &mut Document, parent: NodeId, kind: &str, text: &str) -> NodeId {
    doc.insert(Some(parent), ElementData::with_text(kind, text))
}

fn main() {
    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body"));

    // <nav><a>Home</a><a>About</a></nav>
    let nav = el(&mut doc, body, "nav");
    let home = text(&mut doc, nav, "a", "Home");
    let about = text(&mut doc, nav, "a", "About");

    // <main> with paragraphs, a figure, and a heading that stays unselected.
    let main = el(&mut doc, body, "main");
    let title = text(&mut doc, main, "h1", "An Interesting Document");
    let intro = text(&mut doc, main, "p", "First paragraph of the article.");
    let figure = el(&mut doc, main, "figure");
    let img = el(&mut doc, figure, "img");
    let caption = text(&mut doc, figure, "figcaption", "A pelican, mid-dive.");
    let outro = text(&mut doc, main, "p", "Second paragraph of the article.");

    // <aside>Side note</aside> and an empty trailing section.
    let aside = text(&mut doc, body, "aside", "A side note.");
    let empty = el(&mut doc, body, "section");

    let classifier = Classifier::default();
    let result = select(&doc, body, &classifier);

    println!("== Selected ({}) ==", result.len());
    for &id in &result {
        println!("  <{}> {:?}", doc.kind(id), doc.text_content(id));
    }

    println!("== Skipped ==");
    for id in [title, img, empty] {
        println!("  <{}> reasons: {:?}", doc.kind(id), classifier.skip_reasons(&doc, id));
    }

    assert_eq!(result, vec![home, about, intro, caption, outro, aside]);
}
