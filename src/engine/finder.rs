//! The prefix-finding engine and its derived operations.

use super::builder::build;
use super::matcher::Matcher;
use super::metrics::BuildMetrics;
use super::trie::WordTrie;
use crate::error::Result;
use crate::text::{lower_words, normalize_whitespace, skip_words};
use crate::{FinderConfig, TieBreak};
use std::collections::HashSet;

/// A filler prefix found at the start of a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Number of leading words that form the prefix.
    pub words: usize,
    /// The prefix itself, lower-cased and space-joined.
    pub prefix: String,
    /// Ambiguous words the matcher had to fork on.
    pub forks: usize,
}

/// Strips leading filler words from phrases.
///
/// Built once from a [`FinderConfig`] and immutable afterwards, so a single
/// instance can serve concurrent lookups without locking. To change the
/// ignored words, build a new instance with [`PrefixFinder::with_ignored`].
///
/// # Example
/// ```
/// use wordstrip::{Categories, FinderConfig, PrefixFinder};
///
/// let categories = Categories {
///     verbs: vec![],
///     prepositions: vec!["of".into(), "in".into()],
///     articles: vec!["".into(), "the".into(), "a".into()],
/// };
/// let templates = vec!["{art}".into(), "{prep} {art}".into(), "not to {art}".into()];
/// let finder = PrefixFinder::new(&FinderConfig::new(categories, templates)).unwrap();
///
/// assert_eq!(finder.remove_prefix("of the  cat"), "cat");
/// assert_eq!(finder.remove_prefix("cat"), "cat");
/// ```
#[derive(Debug, Clone)]
pub struct PrefixFinder {
    trie: WordTrie,
    ignored: HashSet<String>,
    config: FinderConfig,
    metrics: BuildMetrics,
}

impl PrefixFinder {
    /// Build an engine from `config`.
    ///
    /// Fails if a template names an unknown placeholder or has a malformed one.
    pub fn new(config: &FinderConfig) -> Result<Self> {
        let ignored: HashSet<String> = config.ignored.iter().map(|w| w.trim().to_lowercase()).collect();
        let (trie, metrics) = build(config, &ignored)?;
        Ok(PrefixFinder { trie, ignored, config: config.clone(), metrics })
    }

    /// Build a new engine from the same configuration with a different ignore
    /// set. `self` is left untouched.
    pub fn with_ignored<I, S>(&self, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(&self.config.clone().with_ignored(words))
    }

    /// Lower-cased words this engine never treats as filler.
    pub fn ignored(&self) -> &HashSet<String> {
        &self.ignored
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn tie_break(&self) -> TieBreak {
        self.config.tie_break
    }

    pub fn build_metrics(&self) -> &BuildMetrics {
        &self.metrics
    }

    /// Number of trie nodes, shared fragments included.
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    /// Find the filler prefix of `phrase`, if any.
    ///
    /// A zero-word match is reported as `None`.
    pub fn find_prefix(&self, phrase: &str) -> Option<PrefixMatch> {
        let words = lower_words(phrase);
        let walk = Matcher::new(&self.trie, self.config.tie_break).longest_prefix(&words);
        let count = walk.matched.filter(|&n| n > 0)?;
        Some(PrefixMatch { words: count, prefix: words[..count].join(" "), forks: walk.forks })
    }

    /// Remove the filler prefix from `phrase`.
    ///
    /// Whitespace is collapsed first. The remainder keeps its original case;
    /// without a prefix the normalized phrase is returned. Removing the whole
    /// phrase yields an empty string.
    pub fn remove_prefix(&self, phrase: &str) -> String {
        let normalized = normalize_whitespace(phrase);
        match self.find_prefix(&normalized) {
            Some(found) => skip_words(&normalized, found.words).to_string(),
            None => normalized,
        }
    }

    /// Sort key for a dictionary headword.
    ///
    /// Lower-cases the phrase and removes its filler prefix. When nothing
    /// would be left, falls back to dropping a literal `"to be "` and then
    /// `"to "`; when even that leaves nothing, the lower-cased phrase is
    /// returned as is.
    pub fn calculate_base_of_from_for_sorting(&self, phrase: &str) -> String {
        let base = phrase.to_lowercase();
        let base = base.trim();

        let stripped = self.remove_prefix(base);
        if !stripped.trim().is_empty() {
            return stripped;
        }

        for literal in ["to be ", "to "] {
            if let Some(rest) = base.strip_prefix(literal) {
                let rest = rest.trim();
                if !rest.is_empty() {
                    return rest.to_string();
                }
            }
        }

        base.to_string()
    }
}
