//! Unit tests for wildcard key lookups.

use crate::{
    domain::{Lookup, MessageBag, MessageMap},
    matching::{WildcardPattern, is_wildcard},
};
use rstest::{fixture, rstest};

#[fixture]
fn items_bag() -> MessageBag {
    MessageBag::new([
        ("items.0.name", vec!["first name missing"]),
        ("items.0.price", vec!["price missing"]),
        ("items.1.name", vec!["second name missing", "second name too long"]),
        ("total", vec!["total mismatch"]),
    ])
}

// ============================================================================
// Pattern matching
// ============================================================================

#[rstest]
#[case::single_segment("items.*.name", "items.0.name", true)]
#[case::spans_separators("items.*.name", "items.0.tags.3.name", true)]
#[case::matches_empty("items.*name", "items.name", true)]
#[case::prefix("items.*", "items.0.price", true)]
#[case::everything("*", "total", true)]
#[case::suffix_mismatch("items.*.name", "items.0.price", false)]
#[case::anchored_start("items.*", "all.items.0", false)]
#[case::dot_is_literal("items.*.name", "items-0-name", false)]
#[case::regex_chars_are_literal("a+b.*", "aab.c", false)]
#[case::case_sensitive("Items.*", "items.0", false)]
fn pattern_matching(#[case] pattern: &str, #[case] key: &str, #[case] expected: bool) {
    let compiled = WildcardPattern::compile(pattern).expect("valid pattern");

    assert_eq!(compiled.matches(key), expected);
    assert_eq!(compiled.as_str(), pattern);
}

#[rstest]
fn wildcard_detection() {
    assert!(is_wildcard("items.*.name"));
    assert!(!is_wildcard("items.0.name"));
}

// ============================================================================
// Lookups
// ============================================================================

#[rstest]
fn wildcard_get_groups_by_matched_key(items_bag: MessageBag) {
    let lookup = items_bag.get("items.*.name", None);

    let mut expected = MessageMap::new();
    expected.insert(
        "items.0.name".to_owned(),
        vec!["first name missing".to_owned()],
    );
    expected.insert(
        "items.1.name".to_owned(),
        vec![
            "second name missing".to_owned(),
            "second name too long".to_owned(),
        ],
    );

    assert!(lookup.is_wildcard());
    assert_eq!(lookup, Lookup::Wildcard(expected));
}

#[rstest]
fn wildcard_renders_each_group_with_its_own_key(items_bag: MessageBag) {
    let lookup = items_bag.get("items.*.name", Some(":key: :message"));

    assert_eq!(
        lookup.into_flat(),
        vec![
            "items.0.name: first name missing",
            "items.1.name: second name missing",
            "items.1.name: second name too long",
        ]
    );
}

#[rstest]
fn first_unwraps_first_matched_key(items_bag: MessageBag) {
    assert_eq!(
        items_bag.first(Some("items.*.name"), None),
        "first name missing"
    );
}

#[rstest]
fn wildcard_without_matches_is_empty(items_bag: MessageBag) {
    let lookup = items_bag.get("orders.*", None);

    assert_eq!(lookup, Lookup::Wildcard(MessageMap::new()));
    assert!(lookup.is_empty());
    assert_eq!(items_bag.first(Some("orders.*"), None), "");
    assert!(!items_bag.has("orders.*"));
}

#[rstest]
fn has_accepts_wildcard_keys(items_bag: MessageBag) {
    assert!(items_bag.has("items.*.price"));
    assert!(items_bag.has_all(["items.*.name", "total"]));
}

#[rstest]
fn literal_key_containing_star_wins_over_pattern() {
    let bag = MessageBag::new([("notes.*", "literal"), ("notes.a", "matched")]);

    assert_eq!(
        bag.get("notes.*", None),
        Lookup::Literal(vec!["literal".to_owned()])
    );
}

#[rstest]
fn wildcard_group_for_empty_key_yields_empty_first() {
    let bag = MessageBag::new([("items.0", Vec::<String>::new()), ("other", vec!["x".to_owned()])]);

    assert!(!bag.get("items.*", None).is_empty());
    assert_eq!(bag.first(Some("items.*"), None), "");
    assert!(!bag.has("items.*"));
}
