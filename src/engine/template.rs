//! Template compilation.
//!
//! A template such as `"to {verb} {prep} {art}"` is tokenized on whitespace.
//! Each token becomes one [`Part`]:
//!
//! ```text
//! "to"     ──▶ Words { origin: None,              [["to"]] }
//! "{verb}" ──▶ Words { origin: Some(Verb),        [["be"], ["has", "no"], ..] }
//! "{prep}" ──▶ Words { origin: Some(Preposition), [["of"], ["out", "of"], ..] }
//! "{art}"  ──▶ Words { origin: Some(Article),     [[], ["the"], ["a", "lot", "of"], ..] }
//! ```
//!
//! Alternatives containing an ignored word are dropped before anything else
//! sees them, so the rest of the engine behaves as if they never existed.
//!
//! ## Tail rewrite
//!
//! Most templates end in `{art}` or `{prep} {art}`. Inlining those tails at
//! every template multiplies the trie by the size of both categories, so the
//! compiler replaces them with a single [`Part::Splice`]:
//!
//! ```text
//! [.., {prep}, {art}]  ──▶  [.., Splice(PrepositionsThenArticles)]
//! [.., {art}]          ──▶  [.., Splice(Articles)]
//! ```

use crate::config::Categories;
use crate::error::{ConfigError, Result};
use crate::{CategoryKind, FragmentKind, Part, WordSeq};
use std::collections::HashSet;

/// A category's alternatives after normalization and ignore-filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Category {
    pub(crate) kind: CategoryKind,
    pub(crate) alternatives: Vec<WordSeq>,
}

impl Category {
    /// Lower-case and split each entry, drop duplicates and entries holding an
    /// ignored word. Articles always get the empty alternative, first.
    pub(crate) fn new(kind: CategoryKind, entries: &[String], ignored: &HashSet<String>) -> Self {
        let mut alternatives: Vec<WordSeq> = Vec::with_capacity(entries.len() + 1);
        let mut seen: HashSet<WordSeq> = HashSet::with_capacity(entries.len() + 1);
        if kind == CategoryKind::Article {
            seen.insert(Vec::new());
            alternatives.push(Vec::new());
        }

        for entry in entries {
            let seq: WordSeq = entry.split_whitespace().map(str::to_lowercase).collect();
            if is_ignored(&seq, ignored) || (seq.is_empty() && kind != CategoryKind::Article) {
                continue;
            }
            if seen.insert(seq.clone()) {
                alternatives.push(seq);
            }
        }

        Category { kind, alternatives }
    }
}

/// The three categories of one engine, ready for placeholder resolution.
#[derive(Debug, Clone)]
pub(crate) struct CategoryTable {
    verbs: Category,
    prepositions: Category,
    articles: Category,
}

impl CategoryTable {
    pub(crate) fn new(categories: &Categories, ignored: &HashSet<String>) -> Self {
        let table = CategoryTable {
            verbs: Category::new(CategoryKind::Verb, &categories.verbs, ignored),
            prepositions: Category::new(CategoryKind::Preposition, &categories.prepositions, ignored),
            articles: Category::new(CategoryKind::Article, &categories.articles, ignored),
        };
        for kind in CategoryKind::ALL {
            log::debug!("{{{}}} resolves to {} alternatives", kind.placeholder(), table.get(kind).alternatives.len());
        }
        table
    }

    pub(crate) fn get(&self, kind: CategoryKind) -> &Category {
        match kind {
            CategoryKind::Verb => &self.verbs,
            CategoryKind::Preposition => &self.prepositions,
            CategoryKind::Article => &self.articles,
        }
    }

    /// Total number of words over all alternatives of all categories.
    pub(crate) fn word_count(&self) -> usize {
        CategoryKind::ALL.iter().flat_map(|&k| self.get(k).alternatives.iter()).map(Vec::len).sum()
    }
}

/// One template after compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledTemplate {
    pub(crate) source: String,
    pub(crate) parts: Vec<Part>,
}

/// Compile `template` against `table`.
///
/// Fails on unknown placeholder names and on tokens that contain braces but
/// are not a single `{name}`.
pub(crate) fn compile(
    template: &str,
    table: &CategoryTable,
    ignored: &HashSet<String>,
    splice_tails: bool,
) -> Result<CompiledTemplate> {
    let mut parts = Vec::new();

    for token in template.split_whitespace() {
        if let Some(caps) = regex!(r"^\{(\w+)\}$").captures(token) {
            let name = &caps[1];
            let kind = CategoryKind::from_placeholder(name).ok_or_else(|| ConfigError::UnknownPlaceholder {
                template: template.to_string(),
                name: name.to_string(),
            })?;
            parts.push(Part::Words { origin: Some(kind), alternatives: table.get(kind).alternatives.clone() });
        } else if token.contains(['{', '}']) {
            return Err(ConfigError::MalformedPlaceholder {
                template: template.to_string(),
                token: token.to_string(),
            });
        } else {
            let word = token.to_lowercase();
            if ignored.contains(&word) {
                // Nothing can follow an ignored literal.
                parts.push(Part::Words { origin: None, alternatives: Vec::new() });
            } else {
                parts.push(Part::literal(word));
            }
        }
    }

    if splice_tails {
        splice_tail(&mut parts);
    }

    log::trace!("compiled template \"{template}\" into {} parts", parts.len());
    Ok(CompiledTemplate { source: template.to_string(), parts })
}

/// Replace a trailing `{prep} {art}` or `{art}` with a fragment splice.
fn splice_tail(parts: &mut Vec<Part>) {
    let rewrite = match parts.as_slice() {
        [
            ..,
            Part::Words { origin: Some(CategoryKind::Preposition), .. },
            Part::Words { origin: Some(CategoryKind::Article), .. },
        ] => Some((2, FragmentKind::PrepositionsThenArticles)),
        [.., Part::Words { origin: Some(CategoryKind::Article), .. }] => Some((1, FragmentKind::Articles)),
        _ => None,
    };

    if let Some((replaced, kind)) = rewrite {
        parts.truncate(parts.len() - replaced);
        parts.push(Part::Splice(kind));
    }
}

fn is_ignored(seq: &[String], ignored: &HashSet<String>) -> bool {
    seq.iter().any(|word| ignored.contains(word))
}
