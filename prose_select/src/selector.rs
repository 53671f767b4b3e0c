// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The top-level readable element selection traversal.

use alloc::vec::Vec;

use prose_doc::{Document, NodeId};

use crate::classifier::Classifier;

/// Select the top-level readable elements below `root`.
///
/// Depth-first, pre-order traversal starting from each direct child of `root`;
/// the root itself is never a candidate. For each node visited:
///
/// 1. If the node fails the readability gate (excluded kind or empty trimmed
///    subtree text), the whole subtree is pruned. Nothing is visited through a
///    gate failure, even readable content nested below it.
/// 2. If the node is the only child of its parent, it is skipped; the wrapper
///    level above it is the candidate instead.
/// 3. If any *direct* child passes the readability gate, the node itself is not
///    emitted and traversal descends into its children. The check is one level
///    deep and re-applied at every depth.
/// 4. Otherwise the node is emitted. A node with no children that reaches this
///    point is always emitted.
///
/// The result preserves document order, contains no duplicates, and no element
/// of it is an ancestor or descendant of another. Selection is a pure function
/// of the snapshot: calling it again on an unmodified tree yields an identical
/// result.
///
/// Panics if `root` is stale; an empty or childless root yields an empty result.
pub fn select(doc: &Document, root: NodeId, classifier: &Classifier) -> Vec<NodeId> {
    assert!(doc.is_alive(root), "selection root must be a live node");
    let mut out = Vec::new();
    for &child in doc.children(root) {
        traverse(doc, child, classifier, &mut out);
    }
    out
}

fn traverse(doc: &Document, id: NodeId, classifier: &Classifier, out: &mut Vec<NodeId>) {
    if !classifier.is_readable(doc, id) {
        return;
    }
    if classifier.is_sole_child(doc, id) {
        return;
    }
    if classifier.has_readable_child(doc, id) {
        for &child in doc.children(id) {
            traverse(doc, child, classifier, out);
        }
    } else {
        out.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ExclusionSet;
    use prose_doc::ElementData;

    fn body() -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.insert(None, ElementData::new("body"));
        (doc, body)
    }

    fn el(doc: &mut Document, parent: NodeId, kind: &str) -> NodeId {
        doc.insert(Some(parent), ElementData::new(kind))
    }

    fn text(doc: &mut Document, parent: NodeId, kind: &str, text: &str) -> NodeId {
        doc.insert(Some(parent), ElementData::with_text(kind, text))
    }

    fn preorder(doc: &Document, root: NodeId) -> Vec<NodeId> {
        fn walk(doc: &Document, id: NodeId, out: &mut Vec<NodeId>) {
            out.push(id);
            for &c in doc.children(id) {
                walk(doc, c, out);
            }
        }
        let mut out = Vec::new();
        walk(doc, root, &mut out);
        out
    }

    #[test]
    fn empty_document_selects_nothing() {
        let (doc, body) = body();
        assert!(select(&doc, body, &Classifier::default()).is_empty());
    }

    #[test]
    fn sibling_paragraphs_are_selected_in_order() {
        let (mut doc, body) = body();
        let first = text(&mut doc, body, "p", "Hello");
        let second = text(&mut doc, body, "p", "World");
        let result = select(&doc, body, &Classifier::default());
        assert_eq!(result, [first, second]);
    }

    #[test]
    fn excluded_kind_with_text_is_never_selected() {
        let (mut doc, body) = body();
        let _span = text(&mut doc, body, "span", "hello");
        assert!(select(&doc, body, &Classifier::default()).is_empty());
    }

    #[test]
    fn whitespace_only_element_is_skipped() {
        let (mut doc, body) = body();
        let _blank = text(&mut doc, body, "div", " \n ");
        let kept = text(&mut doc, body, "p", "kept");
        assert_eq!(select(&doc, body, &Classifier::default()), [kept]);
    }

    #[test]
    fn childless_readable_node_is_always_emitted() {
        let (mut doc, body) = body();
        let _blank = el(&mut doc, body, "div");
        let standalone = text(&mut doc, body, "address", "John Doe");
        assert_eq!(select(&doc, body, &Classifier::default()), [standalone]);
    }

    #[test]
    fn single_child_chain_collapses_to_nothing() {
        // <body><div><blockquote>Some text here</blockquote></div></body>
        // The div is the sole child of the traversal root and the blockquote is
        // the sole child of the div; every level returns early.
        let (mut doc, body) = body();
        let div = el(&mut doc, body, "div");
        let _quote = text(&mut doc, div, "blockquote", "Some text here");
        assert!(select(&doc, body, &Classifier::default()).is_empty());
    }

    #[test]
    fn wrapped_sole_child_is_collapsed_next_to_siblings() {
        let (mut doc, body) = body();
        let div = el(&mut doc, body, "div");
        let _quote = text(&mut doc, div, "blockquote", "Some text here");
        let sibling = text(&mut doc, body, "p", "other");
        // The div descends (its blockquote is readable) but the blockquote is a
        // sole child, so neither level of that branch is emitted.
        assert_eq!(select(&doc, body, &Classifier::default()), [sibling]);
    }

    #[test]
    fn sole_child_collapsing_is_one_level_only() {
        let (mut doc, body) = body();
        let wrapper = el(&mut doc, body, "div");
        let a = text(&mut doc, wrapper, "p", "x");
        let b = text(&mut doc, wrapper, "p", "y");
        let c = text(&mut doc, body, "p", "z");
        // wrapper has two children, so neither a nor b is a sole child.
        assert_eq!(select(&doc, body, &Classifier::default()), [a, b, c]);
    }

    #[test]
    fn container_descends_to_smallest_readable_units() {
        let (mut doc, body) = body();
        let article = el(&mut doc, body, "article");
        let first = text(&mut doc, article, "p", "a");
        let _blank = el(&mut doc, article, "div");
        let second = text(&mut doc, article, "p", "b");
        let footer = text(&mut doc, body, "footer", "fin");
        let result = select(&doc, body, &Classifier::default());
        assert_eq!(result, [first, second, footer]);
        assert!(!result.contains(&article), "containers are not emitted");
    }

    #[test]
    fn deeply_nested_readable_text_does_not_count_as_containment() {
        // section's only readable text sits behind an excluded <pre>; the
        // shallow child check sees no readable child, so section itself is
        // emitted and the nested paragraph is unreachable through the gate.
        let (mut doc, body) = body();
        let section = el(&mut doc, body, "section");
        let pre = el(&mut doc, section, "pre");
        let hidden = text(&mut doc, pre, "p", "deep");
        let sibling = text(&mut doc, body, "p", "sib");
        let result = select(&doc, body, &Classifier::default());
        assert_eq!(result, [section, sibling]);
        assert!(!result.contains(&hidden));
    }

    #[test]
    fn gate_failure_prunes_readable_descendants() {
        let (mut doc, body) = body();
        let span = el(&mut doc, body, "span");
        let _inner = text(&mut doc, span, "p", "unreachable");
        let kept = text(&mut doc, body, "p", "kept");
        assert_eq!(select(&doc, body, &Classifier::default()), [kept]);
    }

    #[test]
    fn article_header_fixture_collapses_entirely() {
        // <body>
        //   <div id="root"></div>
        //   <div id="content-1">
        //     <article>
        //       <header>
        //         <h1 id="title">An Interesting HTML Document</h1>
        //         <span><address id="test">John Doe</address></span>
        //       </header>
        //       <section></section>
        //     </article>
        //   </div>
        // </body>
        // content-1 descends into its readable article, but the article is the
        // sole child of content-1, so the branch produces nothing.
        let (mut doc, body) = body();
        let _root_div = el(&mut doc, body, "div");
        let content = el(&mut doc, body, "div");
        let article = el(&mut doc, content, "article");
        let header = el(&mut doc, article, "header");
        let _title = text(&mut doc, header, "h1", "An Interesting HTML Document");
        let span = el(&mut doc, header, "span");
        let _address = text(&mut doc, span, "address", "John Doe");
        let _section = el(&mut doc, article, "section");
        assert!(select(&doc, body, &Classifier::default()).is_empty());
    }

    #[test]
    fn custom_exclusion_set_changes_selection() {
        let (mut doc, body) = body();
        let div = text(&mut doc, body, "div", "txt");
        let p = text(&mut doc, body, "p", "txt2");
        assert_eq!(select(&doc, body, &Classifier::default()), [div, p]);
        let no_divs = Classifier::new(ExclusionSet::new(["div"]));
        assert_eq!(select(&doc, body, &no_divs), [p]);
    }

    #[test]
    fn selection_invariants_hold_on_a_mixed_tree() {
        let (mut doc, body) = body();
        let nav = el(&mut doc, body, "nav");
        let _link_a = text(&mut doc, nav, "a", "Home");
        let _link_b = text(&mut doc, nav, "a", "About");
        let main = el(&mut doc, body, "main");
        let intro = text(&mut doc, main, "p", "Intro paragraph.");
        let figure = el(&mut doc, main, "figure");
        let _img = el(&mut doc, figure, "img");
        let _caption = text(&mut doc, figure, "figcaption", "A caption.");
        let _aside = text(&mut doc, body, "aside", "Side note.");
        let _empty = el(&mut doc, body, "section");

        let classifier = Classifier::default();
        let result = select(&doc, body, &classifier);
        assert!(!result.is_empty());
        assert!(!result.contains(&body), "the root is never a candidate");
        assert!(result.contains(&intro));

        // Gate invariants.
        for &id in &result {
            assert!(doc.has_text(id), "selected elements carry text");
            assert!(
                !classifier.exclusions().contains(doc.kind(id)),
                "selected kinds are outside the exclusion set"
            );
        }

        // Pairwise disjointness.
        for &a in &result {
            for &b in &result {
                if a != b {
                    assert!(!doc.contains(a, b), "no selected element contains another");
                }
            }
        }

        // Emission order equals pre-order document order.
        let order = preorder(&doc, body);
        let positions: Vec<usize> = result
            .iter()
            .map(|id| order.iter().position(|x| x == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "document order preserved");

        // Idempotence on an unmodified snapshot.
        assert_eq!(result, select(&doc, body, &classifier));
    }

    #[test]
    #[should_panic(expected = "selection root must be a live node")]
    fn stale_root_panics() {
        let (mut doc, body) = body();
        let detached = el(&mut doc, body, "div");
        doc.remove(detached);
        let _ = select(&doc, detached, &Classifier::default());
    }
}
