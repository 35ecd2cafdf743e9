use crate::engine::{PrefixFinder, PrefixMatch};
use crate::FinderConfig;
use once_cell::sync::Lazy;

/// Engine over the curated English tables, built on first use.
static DEFAULT_FINDER: Lazy<PrefixFinder> = Lazy::new(|| {
    PrefixFinder::new(&FinderConfig::default()).expect("built-in templates only use known placeholders")
});

/// Find the filler prefix of `phrase` using the default tables.
///
/// # Example
/// ```
/// let found = wordstrip::find_prefix("in front of the house").unwrap();
/// assert_eq!(found.prefix, "in front of the");
/// assert_eq!(found.words, 4);
/// ```
pub fn find_prefix(phrase: &str) -> Option<PrefixMatch> {
    DEFAULT_FINDER.find_prefix(phrase)
}

/// Remove the filler prefix of `phrase` using the default tables.
///
/// Use a [`PrefixFinder`] built from your own [`FinderConfig`] for custom
/// tables, templates or ignored words.
///
/// # Example
/// ```
/// assert_eq!(wordstrip::remove_prefix("to run away"), "run away");
/// assert_eq!(wordstrip::remove_prefix("of the Year"), "Year");
/// ```
pub fn remove_prefix(phrase: &str) -> String {
    DEFAULT_FINDER.remove_prefix(phrase)
}

/// Sort key for `phrase` using the default tables.
///
/// # Example
/// ```
/// assert_eq!(wordstrip::calculate_base_of_from_for_sorting("To Be Happy"), "happy");
/// ```
pub fn calculate_base_of_from_for_sorting(phrase: &str) -> String {
    DEFAULT_FINDER.calculate_base_of_from_for_sorting(phrase)
}
