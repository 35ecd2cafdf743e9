#[macro_use]
mod macros;
mod api;
mod config;
mod engine;
mod error;
mod tables;
mod text;

pub use api::{calculate_base_of_from_for_sorting, find_prefix, remove_prefix};
pub use config::{Categories, FinderConfig, TieBreak};
pub use engine::{BuildMetrics, PrefixFinder, PrefixMatch};
pub use error::{ConfigError, Result};

// --- Internal types ---------------------------------------------------------

/// A word sequence: one alternative of a category or template part.
/// The empty sequence is a legal alternative ("contributes nothing").
pub(crate) type WordSeq = Vec<String>;

/// Word categories a template placeholder can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CategoryKind {
    Verb,
    Preposition,
    /// Articles and other determiners/modifiers. Always carries the empty
    /// alternative first.
    Article,
}

impl CategoryKind {
    pub(crate) const ALL: [CategoryKind; 3] = [CategoryKind::Verb, CategoryKind::Preposition, CategoryKind::Article];

    /// Resolve the name inside a `{name}` template token.
    pub(crate) fn from_placeholder(name: &str) -> Option<Self> {
        match name {
            "verb" => Some(CategoryKind::Verb),
            "prep" => Some(CategoryKind::Preposition),
            "art" => Some(CategoryKind::Article),
            _ => None,
        }
    }

    pub(crate) fn placeholder(self) -> &'static str {
        match self {
            CategoryKind::Verb => "verb",
            CategoryKind::Preposition => "prep",
            CategoryKind::Article => "art",
        }
    }
}

pub(crate) const FRAGMENT_COUNT: usize = 3;

/// Trie fragments built once per engine and referenced from many insertion
/// points instead of being inlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FragmentKind {
    /// Zero or more article/modifier words.
    Articles,
    /// Zero or one preposition. Compiled templates never splice it directly;
    /// it is the source `PrepositionsThenArticles` is copied from.
    Prepositions,
    /// A preposition (optional) followed by an article sequence.
    PrepositionsThenArticles,
}

impl FragmentKind {
    pub(crate) const ALL: [FragmentKind; FRAGMENT_COUNT] =
        [FragmentKind::Articles, FragmentKind::Prepositions, FragmentKind::PrepositionsThenArticles];

    /// Position in `WordTrie::fragments`.
    pub(crate) fn index(self) -> usize {
        match self {
            FragmentKind::Articles => 0,
            FragmentKind::Prepositions => 1,
            FragmentKind::PrepositionsThenArticles => 2,
        }
    }

    pub(crate) fn mask(self) -> FragmentMask {
        match self {
            FragmentKind::Articles => FragmentMask::ARTICLES,
            FragmentKind::Prepositions => FragmentMask::PREPOSITIONS,
            FragmentKind::PrepositionsThenArticles => FragmentMask::PREPOSITIONS_THEN_ARTICLES,
        }
    }

    /// Reserved root label. Never a real word: contains `<`/`>`, which the
    /// template compiler never emits as part of a literal lookup key.
    pub(crate) fn label(self) -> &'static str {
        match self {
            FragmentKind::Articles => "<arts>",
            FragmentKind::Prepositions => "<preps>",
            FragmentKind::PrepositionsThenArticles => "<preps+arts>",
        }
    }
}

bitflags::bitflags! {
    /// Fragments attached (by reference) to a trie node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct FragmentMask: u8 {
        const ARTICLES                   = 1 << 0;
        /// Never attached by compiled templates: the tail rewrite only emits
        /// `ARTICLES` and `PREPOSITIONS_THEN_ARTICLES`.
        const PREPOSITIONS               = 1 << 1;
        const PREPOSITIONS_THEN_ARTICLES = 1 << 2;
    }
}

impl FragmentMask {
    /// Iterate the fragment kinds present in this mask, in `FragmentKind::ALL` order.
    pub(crate) fn kinds(self) -> impl Iterator<Item = FragmentKind> {
        FragmentKind::ALL.into_iter().filter(move |kind| self.contains(kind.mask()))
    }
}

/// One compiled template position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Part {
    /// A literal word or a resolved placeholder. `origin` names the category
    /// a placeholder came from (`None` for literals); the tail rewrite keys on it.
    Words { origin: Option<CategoryKind>, alternatives: Vec<WordSeq> },

    /// "Continue as if inside this shared fragment". Only ever appears as the
    /// last part of a template.
    Splice(FragmentKind),
}

impl Part {
    pub(crate) fn literal(word: String) -> Self {
        Part::Words { origin: None, alternatives: vec![vec![word]] }
    }
}
