use crate::{
    entry::Entry,
    error::{ErrorClass, ErrorOrigin},
    test_fixtures::{SampleResult, SampleRule, TestApi},
    traits::FieldValues,
    value::Value,
};
use serde_json::{Map, json};
use std::sync::Arc;

#[test]
fn get_distinguishes_absent_from_undeclared() {
    let entry = Entry::of::<SampleRule>();

    assert_eq!(entry.get("rule_id").unwrap(), None);

    let err = entry.get("ruleId").unwrap_err();
    assert_eq!(err.class, ErrorClass::UnknownField);
    assert_eq!(err.origin, ErrorOrigin::Entry);
}

#[test]
fn set_returns_previous_value() {
    let mut entry = Entry::of::<SampleRule>();

    assert_eq!(entry.set("rule_id", 1_i64).unwrap(), None);
    assert_eq!(entry.set("rule_id", 2_i64).unwrap(), Some(Value::Int(1)));
    assert_eq!(entry.get("rule_id").unwrap(), Some(&Value::Int(2)));
}

#[test]
fn set_rejects_undeclared_fields() {
    let mut entry = Entry::of::<SampleRule>();
    let err = entry.set("created_time", "now").unwrap_err();

    assert!(err.is_unknown_field());
    assert!(entry.is_empty());
}

#[test]
fn set_rejects_non_conforming_values() {
    let mut entry = Entry::of::<SampleRule>();
    let err = entry.set("is_manual", "true").unwrap_err();

    assert_eq!(err.class, ErrorClass::TypeMismatch);
    assert!(err.message.contains("expects bool"), "{}", err.message);

    let err = entry
        .set("results", vec![Value::from(Entry::of::<SampleRule>())])
        .unwrap_err();
    assert_eq!(err.class, ErrorClass::TypeMismatch);
}

#[test]
fn remove_and_contains() {
    let mut entry = Entry::of::<SampleRule>();
    entry.set("name", "n").unwrap();

    assert!(entry.contains("name").unwrap());
    assert_eq!(entry.remove("name").unwrap(), Some(Value::from("n")));
    assert!(!entry.contains("name").unwrap());
    assert!(entry.remove("nope").is_err());

    let err = entry.contains("nope").unwrap_err();
    assert!(err.is_unknown_field());
}

#[test]
fn iteration_follows_declaration_order() {
    let mut entry = Entry::of::<SampleRule>();
    entry.set("timestamp", Value::Null).unwrap();
    entry.set("name", "n").unwrap();
    entry.set("rule_id", 5_i64).unwrap();

    assert_eq!(
        entry.field_names().collect::<Vec<_>>(),
        vec!["rule_id", "name", "timestamp"]
    );
}

#[test]
fn export_all_data_nests_entries() {
    let mut result = Entry::of::<SampleResult>();
    result.set("object_id", 9_i64).unwrap();

    let mut entry = Entry::of::<SampleRule>();
    entry.set("results", vec![Value::from(result)]).unwrap();
    entry.set("extra", Map::new()).unwrap();

    assert_eq!(
        serde_json::Value::Object(entry.export_all_data()),
        json!({ "results": [ { "object_id": 9 } ], "extra": {} })
    );
    assert_eq!(
        serde_json::to_value(&entry).unwrap(),
        json!({ "results": [ { "object_id": 9 } ], "extra": {} })
    );
}

#[test]
fn field_values_reads_by_name_and_rejects_undeclared() {
    let mut entry = Entry::of::<SampleRule>();
    entry.set("budget", 3.5).unwrap();

    assert_eq!(entry.get_value("budget").unwrap(), Some(Value::Float(3.5)));
    assert_eq!(entry.get_value("rule_id").unwrap(), None);

    let err = entry.get_value("undeclared").unwrap_err();
    assert_eq!(err.class, ErrorClass::UnknownField);
    assert_eq!(err.origin, ErrorOrigin::Entry);
}

#[test]
fn api_handle_does_not_affect_equality() {
    let plain = Entry::of::<SampleRule>();
    let with_api = Entry::of::<SampleRule>().with_api(Arc::new(TestApi));

    assert_eq!(with_api.api().map(|api| api.api_version()), Some("v21.0"));
    assert_eq!(plain, with_api);
}

#[test]
fn accessors_are_idempotent() {
    let mut entry = Entry::of::<SampleRule>();
    entry.set("rule_id", 1_i64).unwrap();

    let first = entry.export_all_data();
    let second = entry.export_all_data();
    assert_eq!(first, second);
    assert_eq!(entry.get("rule_id").unwrap(), entry.get("rule_id").unwrap());
}
