//! Curated English category tables and default templates.
//!
//! These are only the defaults behind `FinderConfig::default()`; engines can
//! be built over any tables. Entries may span several words and are matched
//! as one unit. The article list starts with the empty entry.

#[cfg(test)]
mod tests;

/// Common verbs and verb groups that carry no meaning of their own in a
/// flashcard headword ("to be happy", "to have no idea").
pub(crate) const VERBS: &[&str] = &[
    "be", "is", "are", "was", "were", "been", "being", "am",
    "have", "has", "had", "having", "has no", "have no", "had no",
    "do", "does", "did", "done", "doing",
    "get", "gets", "got", "gotten", "getting",
    "make", "makes", "made", "making",
    "take", "takes", "took", "taken", "taking",
    "give", "gives", "gave", "given", "giving",
    "go", "goes", "went", "gone", "going",
    "come", "comes", "came", "coming",
    "keep", "keeps", "kept", "keeping",
    "put", "puts", "putting",
    "become", "becomes", "became", "becoming",
    "feel", "feels", "felt", "feeling",
    "be able", "be going", "have got",
];

pub(crate) const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "as", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by",
    "during", "for", "from", "in", "inside", "into", "near", "of", "on", "onto",
    "outside", "over", "through", "to", "toward", "towards", "under", "until", "upon",
    "with", "within", "without",
    "according to", "because of", "due to", "in front of", "instead of", "next to", "out of",
];

/// Articles, determiners and possessives, including the placeholder
/// possessives dictionaries use ("smb's", "one's").
pub(crate) const ARTICLES: &[&str] = &[
    "",
    "a", "an", "the",
    "this", "that", "these", "those",
    "my", "your", "his", "her", "its", "our", "their",
    "one's", "someone's", "somebody's", "smb's", "sb's",
    "some", "any", "no", "every", "each", "another",
    "a few", "a little", "a lot of", "lots of",
];

pub(crate) const TEMPLATES: &[&str] = &[
    "{art}",
    "{prep} {art}",
    "to {art}",
    "not to {art}",
    "to {verb} {art}",
    "to {verb} {prep} {art}",
    "not to {verb} {art}",
    "who",
    "what",
    "which",
    "who {verb} {art}",
    "it {verb} {art}",
    "there {verb} {art}",
    "somebody {art}",
    "someone {art}",
    "something {art}",
    "smb {art}",
    "smth {art}",
    "sb {art}",
    "sth {art}",
];
