//! Engine build metrics.
//!
//! Construction runs once per engine, so timings are always collected; they
//! are cheap next to the work being measured. Lookups are not instrumented.

use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

/// Timings and sizes recorded while building a [`PrefixFinder`](crate::PrefixFinder).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildMetrics {
    /// Total elapsed time for construction.
    pub total: Duration,
    /// Time spent compiling templates into part sequences.
    pub compile: Duration,
    /// Time spent building the three shared fragments.
    pub fragments: Duration,
    /// Time spent inserting compiled templates into the root trie.
    pub insertion: Duration,
    /// Number of templates compiled.
    pub templates: usize,
    /// Number of templates whose tail became a fragment reference.
    pub spliced_templates: usize,
    /// Nodes in the arena after construction (fragments included).
    pub nodes: usize,
    /// Nodes that belong to the shared fragments.
    pub fragment_nodes: usize,
    /// Nodes that needed a child map; the rest are leaves.
    pub branch_nodes: usize,
    /// Words over all (ignore-filtered) category alternatives.
    pub category_words: usize,
}
