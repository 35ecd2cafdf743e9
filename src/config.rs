//! Engine configuration.
//!
//! A [`FinderConfig`] carries everything a [`PrefixFinder`](crate::PrefixFinder)
//! is built from: the three category tables, the template list, the words to
//! ignore, and the matcher's tie-break policy. `Default` yields the curated
//! English tables from `tables`.
//!
//! Configurations can also be read from TOML. Every field is optional; a file
//! only overrides what it names:
//!
//! ```toml
//! templates = ["{art}", "{prep} {art}", "not to {art}"]
//! ignored = ["the"]
//! tie_break = "shortest"
//!
//! [categories]
//! articles = ["", "the", "a"]
//! prepositions = ["of", "in"]
//! ```

use crate::error::{ConfigError, Result};
use crate::tables;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// The word lists placeholders resolve to.
///
/// Each entry may hold several space-separated words ("has no", "a lot of");
/// it is matched as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Categories {
    /// Common verbs, for `{verb}`.
    pub verbs: Vec<String>,
    /// Prepositions, for `{prep}`.
    pub prepositions: Vec<String>,
    /// Articles and modifiers, for `{art}`. The empty alternative is always
    /// added in front, whether or not it is listed.
    pub articles: Vec<String>,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            verbs: tables::VERBS.iter().map(|s| s.to_string()).collect(),
            prepositions: tables::PREPOSITIONS.iter().map(|s| s.to_string()).collect(),
            articles: tables::ARTICLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// How the matcher chooses between branches when a word is reachable through
/// more than one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Prefer the branch that strips the most words.
    #[default]
    Longest,
    /// Prefer the branch that strips the fewest words.
    ///
    /// Forks depend on the trie layout: a literal template word and the same
    /// word inside a spliced fragment are separate nodes, while inlining
    /// merges them into one. With `splice_shared_tails` on, this policy can
    /// therefore strip fewer words than the inlined trie would. Phrases the
    /// matcher walks without forking agree in both layouts.
    Shortest,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "longest" => Ok(TieBreak::Longest),
            "shortest" => Ok(TieBreak::Shortest),
            other => Err(format!("unknown tie-break policy '{other}' (expected longest or shortest)")),
        }
    }
}

/// Everything needed to build a [`PrefixFinder`](crate::PrefixFinder).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    pub categories: Categories,
    /// Templates such as `"to {verb} {prep} {art}"`.
    pub templates: Vec<String>,
    /// Words (case-insensitive) that must never be treated as filler.
    pub ignored: Vec<String>,
    pub tie_break: TieBreak,
    /// Replace `{art}` / `{prep} {art}` template tails with references to
    /// shared fragments. Turning this off inlines every alternative and makes
    /// the trie larger. Under [`TieBreak::Longest`] results for `{art}` tails
    /// are the same either way; under [`TieBreak::Shortest`] they can differ
    /// (see there).
    pub splice_shared_tails: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            categories: Categories::default(),
            templates: tables::TEMPLATES.iter().map(|s| s.to_string()).collect(),
            ignored: Vec::new(),
            tie_break: TieBreak::default(),
            splice_shared_tails: true,
        }
    }
}

impl FinderConfig {
    /// Configuration over explicit tables and templates, with defaults for
    /// everything else.
    pub fn new(categories: Categories, templates: Vec<String>) -> Self {
        Self { categories, templates, ..Self::default() }
    }

    pub fn with_ignored<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_splice_shared_tails(mut self, enabled: bool) -> Self {
        self.splice_shared_tails = enabled;
        self
    }

    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = FinderConfig::from_toml_str(
            r#"
            templates = ["{art}", "{prep} {art}"]
            tie_break = "shortest"

            [categories]
            prepositions = ["of", "in"]
            "#,
        )
        .unwrap();

        assert_eq!(config.templates, vec!["{art}", "{prep} {art}"]);
        assert_eq!(config.tie_break, TieBreak::Shortest);
        assert_eq!(config.categories.prepositions, vec!["of", "in"]);
        assert_eq!(config.categories.articles, Categories::default().articles);
        assert!(config.ignored.is_empty());
        assert!(config.splice_shared_tails);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(FinderConfig::from_toml_str("").unwrap(), FinderConfig::default());
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = FinderConfig::from_toml_str("tie_break = \"sideways\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FinderConfig::load("/definitely/not/here.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("here.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tie_break_parses_case_insensitively() {
        assert_eq!("Longest".parse::<TieBreak>().unwrap(), TieBreak::Longest);
        assert_eq!("SHORTEST".parse::<TieBreak>().unwrap(), TieBreak::Shortest);
        assert!("middle".parse::<TieBreak>().is_err());
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = FinderConfig::default()
            .with_ignored(["The", "of"])
            .with_tie_break(TieBreak::Shortest)
            .with_splice_shared_tails(false);

        assert_eq!(config.ignored, vec!["The", "of"]);
        assert_eq!(config.tie_break, TieBreak::Shortest);
        assert!(!config.splice_shared_tails);
    }
}
