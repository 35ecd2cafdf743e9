//! Prefix-stripping engine.
//!
//! This module is the *public entry point* for the template-driven prefix
//! trie. It is split into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! Building an engine is a one-off pipeline; looking phrases up only reads the
//! result:
//!
//! ```text
//! Categories + ignored ──▶ CategoryTable          (template.rs)
//!                              │
//!             ┌────────────────┼───────────────────┐
//!             v                                    v
//!   build_fragments (shared.rs)        compile templates (template.rs)
//!    <arts> <preps> <preps+arts>         - placeholders → alternatives
//!             │                          - tail rewrite → Splice
//!             └────────────────┬───────────────────┘
//!                              v
//!                     insert at root (builder.rs)
//!                              │
//!                              v
//!                   WordTrie (trie.rs, immutable)
//!                              │
//! phrase ── lower_words ───────┼─▶ Matcher::longest_prefix (matcher.rs)
//!                              │     - delegates looked through
//!                              │     - forks reduced by TieBreak
//!                              v
//!                  PrefixFinder (finder.rs)
//!                   - find_prefix
//!                   - remove_prefix
//!                   - calculate_base_of_from_for_sorting
//! ```
//!
//! ## Responsibilities by module
//!
//! - `template.rs`: category normalization/filtering and template compilation.
//! - `shared.rs`: the three shared fragments.
//! - `trie.rs`: arena storage, delegation, single-word steps.
//! - `builder.rs`: construction pipeline and template insertion.
//! - `matcher.rs`: the ambiguity-aware walk and tie-break policy.
//! - `finder.rs`: the public engine and derived operations.
//! - `metrics.rs`: construction timings and sizes.
//!
//! ## Debugging
//!
//! Construction milestones are logged at `debug`, per-template insertion and
//! matcher forks at `trace` (e.g. `RUST_LOG=wordstrip=trace`).

#[path = "engine/builder.rs"]
mod builder;
#[path = "engine/finder.rs"]
mod finder;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/shared.rs"]
mod shared;
#[path = "engine/template.rs"]
mod template;
#[path = "engine/trie.rs"]
mod trie;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use finder::{PrefixFinder, PrefixMatch};
pub use metrics::BuildMetrics;
