//! Arena-backed word trie.
//!
//! Nodes live in a single `Vec` and refer to each other through [`NodeId`]
//! handles. Shared fragments (see `shared.rs`) are ordinary nodes in the same
//! arena; a node that "delegates" to a fragment records it in its
//! `FragmentMask` instead of holding the fragment as a child. Delegation is a
//! non-owning reference, so the structure is a DAG without any ownership
//! cycles.
//!
//! ```text
//! root ──"to"──▶ n1 ──"be"──▶ n2 ┄┄delegates┄┄▶ <arts> ──"the"──▶ n7 (end)
//!  ┆                                               ▲
//!  └┄┄delegates┄┄▶ <preps+arts> ──"of"──▶ n9 ┄┄┄┄┄┄┘
//! ```
//!
//! ## Invariants
//!
//! - `NodeId::ROOT` (index 0) is the root of the main trie; its label is empty.
//! - A fragment root is never a child of any node, only a delegate target.
//! - Nodes without children hold `Children::Leaf` and allocate no map.

use crate::{FRAGMENT_COUNT, FragmentKind, FragmentMask};
use std::collections::HashMap;

/// Handle to a node in a [`WordTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) enum Children {
    #[default]
    Leaf,
    Branch(HashMap<Box<str>, NodeId>),
}

impl Children {
    fn get(&self, word: &str) -> Option<NodeId> {
        match self {
            Children::Leaf => None,
            Children::Branch(map) => map.get(word).copied(),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Children::Leaf)
    }

    /// Children sorted by word, for deterministic traversal.
    fn sorted(&self) -> Vec<(Box<str>, NodeId)> {
        match self {
            Children::Leaf => Vec::new(),
            Children::Branch(map) => {
                let mut out: Vec<(Box<str>, NodeId)> = map.iter().map(|(w, id)| (w.clone(), *id)).collect();
                out.sort_unstable();
                out
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    /// The word that leads into this node (empty for the root, a reserved
    /// `<...>` label for fragment roots).
    pub(crate) label: Box<str>,
    /// Stopping here is a complete match.
    pub(crate) can_be_end: bool,
    pub(crate) children: Children,
    /// Fragments that continue matching from this node.
    pub(crate) delegates: FragmentMask,
}

impl TrieNode {
    fn new(label: &str) -> Self {
        TrieNode { label: label.into(), can_be_end: false, children: Children::Leaf, delegates: FragmentMask::empty() }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct WordTrie {
    nodes: Vec<TrieNode>,
    fragments: [Option<NodeId>; FRAGMENT_COUNT],
}

impl WordTrie {
    pub(crate) fn new() -> Self {
        WordTrie { nodes: vec![TrieNode::new("")], fragments: [None; FRAGMENT_COUNT] }
    }

    /// Total number of nodes, fragments included.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    fn push(&mut self, label: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode::new(label));
        id
    }

    pub(crate) fn child(&self, parent: NodeId, word: &str) -> Option<NodeId> {
        self.node(parent).children.get(word)
    }

    /// Find the child of `parent` keyed by `word`, creating it if needed.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, word: &str) -> NodeId {
        if let Some(existing) = self.child(parent, word) {
            return existing;
        }
        let id = self.push(word);
        let children = &mut self.node_mut(parent).children;
        if children.is_leaf() {
            *children = Children::Branch(HashMap::new());
        }
        if let Children::Branch(map) = children {
            map.insert(word.into(), id);
        }
        id
    }

    pub(crate) fn mark_end(&mut self, id: NodeId) {
        self.node_mut(id).can_be_end = true;
    }

    /// Create the (detached) root of a shared fragment and register it.
    pub(crate) fn add_fragment_root(&mut self, kind: FragmentKind) -> NodeId {
        let id = self.push(kind.label());
        self.fragments[kind.index()] = Some(id);
        id
    }

    pub(crate) fn fragment(&self, kind: FragmentKind) -> Option<NodeId> {
        self.fragments[kind.index()]
    }

    pub(crate) fn is_fragment_root(&self, id: NodeId) -> bool {
        self.fragments.contains(&Some(id))
    }

    /// Attach fragment `kind` to `at` by reference.
    pub(crate) fn attach(&mut self, at: NodeId, kind: FragmentKind) {
        self.node_mut(at).delegates |= kind.mask();
    }

    /// `id` plus every fragment root reachable from it through delegation
    /// alone (a fragment root may itself delegate, e.g. `<preps+arts>` to
    /// `<arts>`). No duplicates; `id` comes first.
    pub(crate) fn closure(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = vec![id];
        let mut next = 0;
        while let Some(&current) = out.get(next) {
            next += 1;
            for kind in self.node(current).delegates.kinds() {
                if let Some(root) = self.fragment(kind) {
                    if !out.contains(&root) {
                        out.push(root);
                    }
                }
            }
        }
        out
    }

    /// Whether a match may stop at `id`: the node itself or any fragment it
    /// delegates to can end.
    pub(crate) fn accepts(&self, id: NodeId) -> bool {
        self.closure(id).into_iter().any(|n| self.node(n).can_be_end)
    }

    /// Every node reachable from `id` by consuming `word`, looking through
    /// delegated fragments. De-duplicated, so a fragment reached along two
    /// delegation paths is not an ambiguity.
    pub(crate) fn step(&self, id: NodeId, word: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        for node in self.closure(id) {
            if let Some(next) = self.child(node, word) {
                if !out.contains(&next) {
                    out.push(next);
                }
            }
        }
        out
    }

    /// Deep-copy the children (and their flags) of `from` under `into`.
    /// Delegations are copied as references.
    pub(crate) fn copy_subtree(&mut self, from: NodeId, into: NodeId) {
        let source = self.node(from);
        let (can_be_end, delegates) = (source.can_be_end, source.delegates);
        let children = source.children.sorted();

        let target = self.node_mut(into);
        target.can_be_end |= can_be_end;
        target.delegates |= delegates;

        for (word, child) in children {
            let copy = self.child_or_insert(into, &word);
            self.copy_subtree(child, copy);
        }
    }

    /// Nodes reachable from `from` through children only, `from` first.
    pub(crate) fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = vec![from];
        let mut next = 0;
        while let Some(&current) = out.get(next) {
            next += 1;
            out.extend(self.node(current).children.sorted().into_iter().map(|(_, id)| id));
        }
        out
    }

    /// Number of nodes with a child map allocated.
    pub(crate) fn branch_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.children.is_leaf()).count()
    }
}
