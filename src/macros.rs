#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build an owned word list from string literals.
///
/// ```
/// let arts: Vec<String> = wordstrip::words!["", "the", "a"];
/// assert_eq!(arts.len(), 3);
/// ```
#[macro_export]
macro_rules! words {
    ($($word:expr),* $(,)?) => {
        vec![ $(::std::string::String::from($word)),* ]
    };
}
