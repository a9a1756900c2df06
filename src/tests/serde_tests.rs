//! Unit tests for JSON rendering and deserialisation.

use crate::{
    domain::{MessageBag, Messages},
    error::MessageBagError,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn to_json_emits_raw_unformatted_mapping() {
    let bag = MessageBag::new([("email", vec!["required", "invalid"]), ("name", vec!["short"])])
        .with_format("<b>:message</b>");

    assert_eq!(
        bag.to_json().expect("serialisable"),
        r#"{"email":["required","invalid"],"name":["short"]}"#
    );
}

#[rstest]
fn display_matches_compact_json() {
    let bag = MessageBag::new([("b", "y"), ("a", "x")]);

    assert_eq!(bag.to_string(), r#"{"b":["y"],"a":["x"]}"#);
}

#[rstest]
fn pretty_json_parses_back_to_same_value() {
    let bag = MessageBag::new([("email", vec!["required", "invalid"])]);

    let pretty = bag.to_json_pretty().expect("serialisable");
    let parsed: serde_json::Value = serde_json::from_str(&pretty).expect("valid json");

    assert!(pretty.contains('\n'));
    assert_eq!(parsed, json!({"email": ["required", "invalid"]}));
}

#[rstest]
fn empty_bag_serialises_as_empty_object() {
    assert_eq!(MessageBag::default().to_string(), "{}");
}

#[rstest]
fn deserialises_with_construction_normalisation() {
    let bag: MessageBag =
        serde_json::from_str(r#"{"zeta":["a","a","b"],"alpha":"c"}"#).expect("valid bag");

    assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    assert_eq!(bag.all(None), vec!["a", "b", "c"]);
    assert!(bag.format().is_passthrough());
}

#[rstest]
fn deserialising_rejects_non_string_messages() {
    let result = serde_json::from_str::<MessageBag>(r#"{"age":[1,2]}"#);

    assert!(result.is_err());
}

#[rstest]
fn try_from_value_matches_try_from_json() {
    let value = json!({"email": ["required"]});

    let via_trait = MessageBag::try_from(value.clone()).expect("valid bag");
    let via_fn = MessageBag::try_from_json(value).expect("valid bag");

    assert_eq!(via_trait, via_fn);
}

#[rstest]
fn messages_deserialise_untagged() {
    let one: Messages = serde_json::from_str(r#""required""#).expect("single");
    let many: Messages = serde_json::from_str(r#"["a","b"]"#).expect("many");

    assert_eq!(one, Messages::One("required".to_owned()));
    assert_eq!(many, Messages::Many(vec!["a".to_owned(), "b".to_owned()]));
}

#[rstest]
fn non_object_error_is_input_error() {
    let err = MessageBag::try_from_json(json!("oops")).expect_err("string input");

    assert!(matches!(err, MessageBagError::InvalidMessages { found: "string" }));
    assert!(err.is_input_error());
}
