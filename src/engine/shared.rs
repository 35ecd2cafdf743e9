//! Shared fragments.
//!
//! Three sub-tries are built once per engine and then referenced (never
//! copied) wherever a template tail asks for them:
//!
//! - `<arts>`: every article alternative; the root can end (the empty article).
//! - `<preps>`: every preposition alternative; the root can end. No template
//!   tail splices this one; it only serves as the source of `<preps+arts>`.
//! - `<preps+arts>`: a copy of `<preps>` with `<arts>` attached to every node
//!   where a preposition may stop (and to every leaf), so it matches a
//!   preposition followed by an article sequence without spelling out the
//!   cross product.
//!
//! ```text
//! <preps+arts> ─┬─ "of" (end) ┄┄▶ <arts>
//!   (end) ┄┄▶ <arts>
//!               └─ "out" ── "of" (end) ┄┄▶ <arts>
//! ```

use super::template::CategoryTable;
use super::trie::{NodeId, WordTrie};
use crate::{CategoryKind, FragmentKind, WordSeq};

/// Build all three fragments into `trie`.
pub(crate) fn build_fragments(trie: &mut WordTrie, table: &CategoryTable) {
    let arts = sequence_fragment(trie, FragmentKind::Articles, &table.get(CategoryKind::Article).alternatives);
    let preps =
        sequence_fragment(trie, FragmentKind::Prepositions, &table.get(CategoryKind::Preposition).alternatives);

    let combined = trie.add_fragment_root(FragmentKind::PrepositionsThenArticles);
    trie.copy_subtree(preps, combined);
    let grafted = graft(trie, combined, FragmentKind::Articles);

    log::debug!(
        "built shared fragments: arts root {:?}, preps root {:?}, preps+arts root {:?} ({} graft points)",
        arts,
        preps,
        combined,
        grafted
    );
}

/// A fragment whose root can end and whose paths spell `alternatives`.
fn sequence_fragment(trie: &mut WordTrie, kind: FragmentKind, alternatives: &[WordSeq]) -> NodeId {
    let root = trie.add_fragment_root(kind);
    trie.mark_end(root);
    for alternative in alternatives {
        let end = alternative.iter().fold(root, |node, word| trie.child_or_insert(node, word));
        trie.mark_end(end);
    }
    root
}

/// Attach fragment `kind` to every node under `start` that can end or has no
/// children. Other fragment roots are never grafted into, and `kind` is never
/// attached to its own root. Returns the number of graft points.
fn graft(trie: &mut WordTrie, start: NodeId, kind: FragmentKind) -> usize {
    let own_root = trie.fragment(kind);
    let mut grafted = 0;

    for id in trie.descendants(start) {
        if Some(id) == own_root || (id != start && trie.is_fragment_root(id)) {
            continue;
        }
        let node = trie.node(id);
        if node.can_be_end || node.children.is_leaf() {
            trie.attach(id, kind);
            grafted += 1;
        }
    }

    grafted
}
