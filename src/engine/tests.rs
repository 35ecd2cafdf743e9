use crate::config::Categories;
use crate::text::normalize_whitespace;
use crate::{FinderConfig, PrefixFinder, PrefixMatch, TieBreak};

fn scenario_config() -> FinderConfig {
    let categories = Categories {
        verbs: words!["be", "be happy"],
        prepositions: words!["of", "in"],
        articles: words!["", "the", "a"],
    };
    FinderConfig::new(categories, words!["{art}", "{prep} {art}", "not to {art}"])
}

fn scenario_finder() -> PrefixFinder {
    PrefixFinder::new(&scenario_config()).unwrap()
}

#[test]
fn scenario_remove_prefix() {
    let finder = scenario_finder();
    // (input, expected)
    let cases: Vec<(&str, &str)> = vec![
        ("the cat", "cat"),
        ("of the cat", "cat"),
        ("not to the end", "end"),
        ("cat", "cat"),
        ("a cat", "cat"),
        ("in a house", "house"),
        ("of cat", "cat"),
        ("not to", ""),
        ("not cat", "not cat"),
        ("The   Cat  Sat", "Cat Sat"),
    ];

    for (input, expected) in cases {
        assert_eq!(finder.remove_prefix(input), expected, "input {input:?}");
    }
}

#[test]
fn scenario_ignored_article_is_kept() {
    let finder = PrefixFinder::new(&scenario_config().with_ignored(["the"])).unwrap();
    assert_eq!(finder.remove_prefix("the cat"), "the cat");
    assert_eq!(finder.remove_prefix("of the cat"), "the cat");
    assert_eq!(finder.remove_prefix("a cat"), "cat");
}

#[test]
fn scenario_sort_key_fallback() {
    let mut config = scenario_config();
    config.templates.push("to {verb}".to_string());
    let finder = PrefixFinder::new(&config).unwrap();

    assert_eq!(finder.remove_prefix("to be happy"), "");
    assert_eq!(finder.calculate_base_of_from_for_sorting("To Be Happy"), "happy");
}

#[test]
fn no_match_identity() {
    let finder = scenario_finder();
    for phrase in ["cat", "  big   cat ", "running\taway", "nothing of the sort", ""] {
        assert_eq!(finder.remove_prefix(phrase), normalize_whitespace(phrase), "phrase {phrase:?}");
    }
}

#[test]
fn ignored_word_in_every_alternative_disables_template() {
    let categories = Categories {
        verbs: words!["has no", "has none"],
        prepositions: words![],
        articles: words![""],
    };
    let config = FinderConfig::new(categories, words!["{verb}", "who"]);
    let plain = PrefixFinder::new(&config).unwrap();
    assert_eq!(plain.remove_prefix("has no idea"), "idea");
    assert_eq!(plain.remove_prefix("who knows"), "knows");

    let ignoring = plain.with_ignored(["HAS", "Who"]).unwrap();
    assert_eq!(ignoring.remove_prefix("has no idea"), "has no idea");
    assert_eq!(ignoring.remove_prefix("who knows"), "who knows");
}

#[test]
fn splicing_article_tails_preserves_results() {
    let categories = Categories {
        verbs: words!["be", "get"],
        prepositions: words!["of", "in"],
        articles: words!["", "the", "a", "a lot of", "his"],
    };
    let templates = words!["{art}", "not to {art}", "to {verb} {art}", "who {art}", "{art} who"];
    let phrases = [
        "the cat",
        "cat",
        "not to",
        "not to cat",
        "not to the cat",
        "not to a lot of cats",
        "not to a lot",
        "to be his",
        "to be",
        "to get a grip",
        "who the",
        "who",
        "the who",
        "a lot of who cares",
        "",
    ];

    for policy in [TieBreak::Longest, TieBreak::Shortest] {
        let config = FinderConfig::new(categories.clone(), templates.clone()).with_tie_break(policy);
        let spliced = PrefixFinder::new(&config).unwrap();
        let inlined = PrefixFinder::new(&config.with_splice_shared_tails(false)).unwrap();

        assert!(spliced.build_metrics().spliced_templates > 0);
        assert_eq!(inlined.build_metrics().spliced_templates, 0);

        for phrase in phrases {
            let s = spliced.find_prefix(phrase);
            let i = inlined.find_prefix(phrase);
            // Nothing is attached by reference without splicing, so no word is ambiguous.
            assert_eq!(i.as_ref().map_or(0, |m| m.forks), 0, "phrase {phrase:?}");

            // Under Shortest a fork can stop on a node the inlined trie merged away.
            let forked = s.as_ref().map_or(0, |m| m.forks) > 0;
            if policy == TieBreak::Shortest && forked {
                continue;
            }
            let found = |m: Option<PrefixMatch>| m.map(|m| (m.words, m.prefix));
            assert_eq!(found(s), found(i), "{policy:?} phrase {phrase:?}");
            assert_eq!(spliced.remove_prefix(phrase), inlined.remove_prefix(phrase), "{policy:?} phrase {phrase:?}");
        }
    }
}

#[test]
fn shortest_depends_on_splicing_when_a_literal_shadows_an_article() {
    let categories = Categories { verbs: vec![], prepositions: vec![], articles: words!["", "the"] };
    let config = FinderConfig::new(categories, words!["{art}", "the end {art}"]);

    // (policy, spliced, inlined)
    let cases: Vec<(TieBreak, &str, &str)> = vec![
        (TieBreak::Longest, "of it", "of it"),
        (TieBreak::Shortest, "end of it", "of it"),
    ];

    for (policy, expected_spliced, expected_inlined) in cases {
        let spliced = PrefixFinder::new(&config.clone().with_tie_break(policy)).unwrap();
        let inlined =
            PrefixFinder::new(&config.clone().with_tie_break(policy).with_splice_shared_tails(false)).unwrap();

        assert_eq!(spliced.remove_prefix("the end of it"), expected_spliced, "{policy:?}");
        assert_eq!(inlined.remove_prefix("the end of it"), expected_inlined, "{policy:?}");
        assert_eq!(spliced.find_prefix("the end of it").unwrap().forks, 1);
        assert_eq!(inlined.find_prefix("the end of it").unwrap().forks, 0);
    }
}

#[test]
fn splicing_preserves_default_results_under_longest() {
    let spliced = PrefixFinder::new(&FinderConfig::default()).unwrap();
    let inlined = PrefixFinder::new(&FinderConfig::default().with_splice_shared_tails(false)).unwrap();
    assert!(spliced.node_count() < inlined.node_count());

    let phrases = [
        "to run away",
        "to be happy",
        "to have no idea",
        "in front of the house",
        "not to mention it",
        "who is there",
        "it is a lot of fun",
        "to the lighthouse",
        "out of the blue",
        "smb's problem",
        "there were some problems",
    ];
    for phrase in phrases {
        assert_eq!(spliced.remove_prefix(phrase), inlined.remove_prefix(phrase), "phrase {phrase:?}");
    }
}

#[test]
fn sort_key_is_idempotent() {
    let finder = PrefixFinder::new(&FinderConfig::default()).unwrap();
    let phrases = [
        "to be happy",
        "The End",
        "a lot of people",
        "of course",
        "to give up",
        "not to mention",
        "who is it",
        "To",
        "the",
        "to the lighthouse",
    ];
    for phrase in phrases {
        let once = finder.calculate_base_of_from_for_sorting(phrase);
        let twice = finder.calculate_base_of_from_for_sorting(&once);
        assert_eq!(once, twice, "phrase {phrase:?}");
    }
}

#[test]
fn tie_break_policy_is_pinned() {
    // "to" is both a literal template word and a preposition: the matcher forks.
    let longest = PrefixFinder::new(&FinderConfig::default()).unwrap();
    let shortest = PrefixFinder::new(&FinderConfig::default().with_tie_break(TieBreak::Shortest)).unwrap();

    let found = longest.find_prefix("to be happy").unwrap();
    assert_eq!(found.words, 2);
    assert_eq!(found.prefix, "to be");
    assert!(found.forks >= 1);
    assert_eq!(longest.remove_prefix("to be happy"), "happy");

    assert_eq!(shortest.find_prefix("to be happy").unwrap().words, 1);
    assert_eq!(shortest.remove_prefix("to be happy"), "be happy");

    // Unambiguous phrases do not depend on the policy.
    assert_eq!(shortest.remove_prefix("of the cat"), "cat");
    assert_eq!(longest.remove_prefix("of the cat"), "cat");
}

#[test]
fn engines_are_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrefixFinder>();

    let finder = scenario_finder();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let finder = &finder;
                scope.spawn(move || {
                    let phrase = if i % 2 == 0 { "of the cat" } else { "not to the end" };
                    (0..100).map(|_| finder.remove_prefix(phrase)).collect::<Vec<_>>()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = if i % 2 == 0 { "cat" } else { "end" };
            assert!(handle.join().unwrap().iter().all(|r| r == expected));
        }
    });
}

#[test]
fn unknown_placeholder_fails_construction() {
    let mut config = scenario_config();
    config.templates.push("to {adverb} {art}".to_string());
    let err = PrefixFinder::new(&config).unwrap_err();
    assert_eq!(err.to_string(), "unknown placeholder '{adverb}' in template \"to {adverb} {art}\"");
}

#[test]
fn empty_tables_construct_and_match_nothing() {
    let config = FinderConfig::new(Categories { verbs: vec![], prepositions: vec![], articles: vec![] }, vec![]);
    let finder = PrefixFinder::new(&config).unwrap();
    assert_eq!(finder.remove_prefix("the cat"), "the cat");
    assert_eq!(finder.find_prefix("the cat"), None);
}
