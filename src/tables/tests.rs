use crate::{FinderConfig, PrefixFinder, calculate_base_of_from_for_sorting, remove_prefix};

#[test]
fn default_remove_prefix_examples() {
    // Array of (input, expected remainder)
    let cases: Vec<(&str, &str)> = vec![
        ("to run away", "run away"),
        ("the cat", "cat"),
        ("to be happy", "happy"),
        ("to have no idea", "idea"),
        ("not to mention it", "mention it"),
        ("of course", "course"),
        ("in front of the house", "house"),
        ("a lot of people", "people"),
        ("who is there", "there"),
        ("something important", "important"),
        ("smb's problem", "problem"),
        ("it is a pity", "pity"),
        ("to the lighthouse", "lighthouse"),
        ("Running away", "Running away"),
        ("cat", "cat"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(remove_prefix(input), expected, "input {input:?}");
    }
}

#[test]
fn default_sort_key_examples() {
    let cases: Vec<(&str, &str)> = vec![
        ("To Be", "be"),
        ("The End", "end"),
        ("to be happy", "happy"),
        ("A", "a"),
        ("To the Lighthouse", "lighthouse"),
        ("  Running   Away ", "running away"),
    ];

    for (input, expected) in cases {
        assert_eq!(calculate_base_of_from_for_sorting(input), expected, "input {input:?}");
    }
}

#[test]
fn default_ignore_list_keeps_words() {
    let finder = PrefixFinder::new(&FinderConfig::default().with_ignored(["who", "to"])).unwrap();
    assert_eq!(finder.remove_prefix("who is it"), "who is it");
    assert_eq!(finder.remove_prefix("to run away"), "to run away");
    assert_eq!(finder.remove_prefix("not to go"), "not to go");
    assert_eq!(finder.remove_prefix("the cat"), "cat");
}

#[test]
fn default_templates_compile() {
    let finder = PrefixFinder::new(&FinderConfig::default()).unwrap();
    let metrics = finder.build_metrics();
    assert_eq!(metrics.templates, super::TEMPLATES.len());
    assert!(metrics.spliced_templates > metrics.templates / 2);
}

#[test]
fn tables_have_no_blank_entries_besides_the_empty_article() {
    assert_eq!(super::ARTICLES.first(), Some(&""));
    assert!(super::ARTICLES[1..].iter().all(|a| !a.trim().is_empty()));
    assert!(super::VERBS.iter().all(|v| !v.trim().is_empty()));
    assert!(super::PREPOSITIONS.iter().all(|p| !p.trim().is_empty()));
}
