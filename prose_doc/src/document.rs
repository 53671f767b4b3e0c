// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, text queries, containment.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{ElementData, NodeId};

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: ElementData,
}

impl Node {
    fn new(generation: u32, data: ElementData) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            data,
        }
    }
}

/// An in-memory document tree.
///
/// Nodes live in a slot arena addressed by generational [`NodeId`] handles.
/// The parent→children direction owns the traversal order; each node also keeps a
/// non-owning back-reference to its parent for ancestry walks, so there is no
/// ownership cycle.
///
/// The tree is a snapshot for query purposes: selection and hover matching read
/// it without mutating it. Structural mutation (`insert`, `remove`) is for
/// building and tearing down snapshots, not for live tracking.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, data: ElementData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its entire subtree.
    ///
    /// All removed ids become stale. Removing a stale id is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot is occupied and its generation matches the
    /// current generation of that slot. See [`NodeId`] for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.generation())
            .unwrap_or(false)
    }

    /// The node's parent, or `None` for a root.
    ///
    /// Panics if `id` is stale.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The node's children, in document order (left to right).
    ///
    /// Panics if `id` is stale.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Number of direct children.
    ///
    /// Panics if `id` is stale.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// The node's kind identifier.
    ///
    /// Panics if `id` is stale.
    pub fn kind(&self, id: NodeId) -> &str {
        &self.node(id).data.kind
    }

    /// The text carried directly by this node, excluding descendants.
    ///
    /// Panics if `id` is stale.
    pub fn own_text(&self, id: NodeId) -> &str {
        &self.node(id).data.text
    }

    /// Concatenated text of the subtree rooted at `id`, in depth-first pre-order:
    /// the node's own text first, then each child's subtree left to right.
    ///
    /// Panics if `id` is stale.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    /// Returns true iff any node in the subtree rooted at `id` carries text with
    /// at least one non-whitespace character.
    ///
    /// Allocation-free equivalent of `!text_content(id).trim().is_empty()`.
    /// Panics if `id` is stale.
    pub fn has_text(&self, id: NodeId) -> bool {
        let node = self.node(id);
        if node.data.text.chars().any(|c| !c.is_whitespace()) {
            return true;
        }
        node.children.iter().any(|&c| self.has_text(c))
    }

    /// Ancestor-or-self containment: true iff `id` is `ancestor` itself or lies in
    /// the subtree below it.
    ///
    /// Walks the parent back-references from `id`; cost is bounded by tree depth.
    /// Panics if either id is stale.
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        // Touch both nodes so a stale argument fails fast even when unreachable.
        let _ = self.node(ancestor);
        let mut cur = id;
        loop {
            if cur == ancestor {
                return true;
            }
            match self.node(cur).parent {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> &Node {
        match self.nodes.get(id.idx()) {
            Some(Some(n)) if n.generation == id.generation() => n,
            _ => panic!("stale NodeId"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.nodes.get_mut(id.idx()) {
            Some(Some(n)) if n.generation == id.generation() => n,
            _ => panic!("stale NodeId"),
        }
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        out.push_str(&node.data.text);
        for &child in &node.children {
            self.collect_text(child, out);
        }
    }
}
