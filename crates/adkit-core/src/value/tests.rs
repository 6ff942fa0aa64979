use crate::{
    entry::Entry,
    test_fixtures::{SampleResult, SampleRule},
    value::{API_DATETIME_FORMAT, Value, format_datetime},
};
use adkit_schema::types::TypeTag;
use chrono::DateTime;
use serde_json::{Map, json};

#[test]
fn null_conforms_to_every_tag() {
    for tag in [
        TypeTag::BOOL,
        TypeTag::DATETIME,
        TypeTag::INT,
        TypeTag::Record("Anything"),
        TypeTag::List(&TypeTag::STRING),
    ] {
        assert!(Value::Null.conforms_to(&tag), "{tag}");
    }
}

#[test]
fn primitives_conform_only_to_their_tag() {
    assert!(Value::Int(1).conforms_to(&TypeTag::INT));
    assert!(!Value::Int(1).conforms_to(&TypeTag::UNSIGNED_INT));
    assert!(!Value::Int(1).conforms_to(&TypeTag::FLOAT));
    assert!(Value::from("x").conforms_to(&TypeTag::STRING));
    assert!(!Value::from("x").conforms_to(&TypeTag::DATETIME));
}

#[test]
fn record_tags_accept_matching_entries_or_raw_objects() {
    let tag = TypeTag::Record("SampleResult");

    assert!(Value::from(Entry::of::<SampleResult>()).conforms_to(&tag));
    assert!(!Value::from(Entry::of::<SampleRule>()).conforms_to(&tag));
    assert!(Value::Object(Map::new()).conforms_to(&tag));
}

#[test]
fn lists_check_every_item() {
    static TAG: TypeTag = TypeTag::List(&TypeTag::INT);

    assert!(Value::List(vec![Value::Int(1), Value::Null]).conforms_to(&TAG));
    assert!(!Value::List(vec![Value::Int(1), Value::from("2")]).conforms_to(&TAG));
    assert!(!Value::Int(1).conforms_to(&TAG));
}

#[test]
fn datetimes_render_in_api_layout() {
    let dt = DateTime::parse_from_str("2024-03-01T12:30:00+0200", API_DATETIME_FORMAT).unwrap();

    assert_eq!(format_datetime(&dt), "2024-03-01T12:30:00+0200");
    assert_eq!(Value::from(dt).to_json(), json!("2024-03-01T12:30:00+0200"));
}

#[test]
fn non_finite_floats_encode_as_null() {
    assert_eq!(Value::Float(f64::NAN).to_json(), json!(null));
    assert_eq!(Value::Float(1.5).to_json(), json!(1.5));
}

#[test]
fn option_converts_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3_u32)), Value::Uint(3));
}

#[test]
fn serialize_matches_to_json() {
    let value = Value::List(vec![Value::Bool(true), Value::from("a")]);

    assert_eq!(serde_json::to_value(&value).unwrap(), json!([true, "a"]));
    assert_eq!(value.label(), "list");
}
