//! Trie construction.
//!
//! Builds the complete trie for one engine:
//!
//! ```text
//! Categories ─▶ CategoryTable (ignore-filtered)
//!                   │
//!                   ├─▶ build_fragments        (shared.rs)
//!                   │
//! templates ────────┴─▶ compile ─▶ [Part] ─▶ insert at root
//! ```
//!
//! Insertion walks a part sequence recursively from the root:
//!
//! - no parts left: the current node can end;
//! - `Splice(kind)`: attach the fragment by reference and stop, the fragment
//!   encodes its own termination;
//! - `Words`: for every alternative, follow (creating as needed) one child per
//!   word, then continue with the remaining parts. The empty alternative
//!   continues from the current node itself.
//!
//! Templates share prefixes through find-or-create, so the trie size is
//! bounded by template and category word counts rather than their product
//! whenever tails are spliced.

use super::metrics::BuildMetrics;
use super::shared::build_fragments;
use super::template::{CategoryTable, compile};
use super::trie::{NodeId, WordTrie};
use crate::error::Result;
use crate::{FinderConfig, FragmentKind, Part};
use std::collections::HashSet;
use std::time::Instant;

/// Build the trie described by `config`, ignoring `ignored` (lower-cased) words.
pub(crate) fn build(config: &FinderConfig, ignored: &HashSet<String>) -> Result<(WordTrie, BuildMetrics)> {
    let total_start = Instant::now();
    let table = CategoryTable::new(&config.categories, ignored);

    // Compile everything first so a bad template fails before any trie work.
    let compile_start = Instant::now();
    let compiled = config
        .templates
        .iter()
        .map(|template| compile(template, &table, ignored, config.splice_shared_tails))
        .collect::<Result<Vec<_>>>()?;
    let compile = compile_start.elapsed();

    let mut trie = WordTrie::new();
    let fragments_start = Instant::now();
    build_fragments(&mut trie, &table);
    let fragments = fragments_start.elapsed();
    let fragment_nodes = trie.len() - 1;

    let insertion_start = Instant::now();
    for template in &compiled {
        let before = trie.len();
        insert(&mut trie, NodeId::ROOT, &template.parts);
        log::trace!("inserted \"{}\" (+{} nodes)", template.source, trie.len() - before);
    }
    let insertion = insertion_start.elapsed();

    let metrics = BuildMetrics {
        total: total_start.elapsed(),
        compile,
        fragments,
        insertion,
        templates: compiled.len(),
        spliced_templates: compiled.iter().filter(|t| matches!(t.parts.last(), Some(Part::Splice(_)))).count(),
        nodes: trie.len(),
        fragment_nodes,
        branch_nodes: trie.branch_count(),
        category_words: table.word_count(),
    };

    log::debug!(
        "built prefix trie: {} templates ({} spliced), {} nodes ({} in fragments) in {:?}",
        metrics.templates,
        metrics.spliced_templates,
        metrics.nodes,
        metrics.fragment_nodes,
        metrics.total
    );

    Ok((trie, metrics))
}

/// Insert the part sequence `parts` starting at `at`.
fn insert(trie: &mut WordTrie, at: NodeId, parts: &[Part]) {
    let Some((first, rest)) = parts.split_first() else {
        trie.mark_end(at);
        return;
    };

    match first {
        Part::Splice(kind) => attach(trie, at, *kind),
        Part::Words { alternatives, .. } => {
            for alternative in alternatives {
                let end = alternative.iter().fold(at, |node, word| trie.child_or_insert(node, word));
                insert(trie, end, rest);
            }
        }
    }
}

fn attach(trie: &mut WordTrie, at: NodeId, kind: FragmentKind) {
    debug_assert!(trie.fragment(kind).is_some(), "fragments are built before insertion");
    trie.attach(at, kind);
}
