use adkit::{ErrorKind, ErrorOrigin, prelude::*};
use serde_json::json;
use std::{collections::BTreeSet, sync::Arc};

#[derive(Debug)]
struct GraphApi;

impl ApiContext for GraphApi {
    fn api_version(&self) -> &str {
        "v21.0"
    }
}

fn payload() -> serde_json::Value {
    json!({
        "evaluation_spec": { "evaluation_type": "SCHEDULE", "filters": [] },
        "exception_code": 0,
        "exception_message": "",
        "execution_spec": { "execution_type": "PAUSE" },
        "is_manual": false,
        "results": [
            { "object_id": "23851234", "actions": [ { "action": "PAUSED" } ] }
        ],
        "rule_id": "23850000000000001",
        "schedule_spec": { "schedule_type": "SEMI_HOURLY" },
        "timestamp": "2024-05-14T09:00:00+0000"
    })
}

fn keys(value: &serde_json::Value) -> BTreeSet<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

#[test]
fn round_trip_reproduces_the_key_set() {
    let payload = payload();
    let entry = adkit::decode("AdAccountAdRulesHistory", &payload).unwrap();
    let encoded = encode(&entry);

    assert_eq!(keys(&encoded), keys(&payload));
    assert_eq!(
        keys(&encoded),
        AdAccountAdRulesHistory::RECORD
            .field_names()
            .into_iter()
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
    );
    assert_eq!(encoded["timestamp"], json!("2024-05-14T09:00:00+0000"));
    assert_eq!(encoded["rule_id"], json!(23_850_000_000_000_001_i64));
}

#[test]
fn external_kinds_stay_raw_objects() {
    let entry = adkit::decode("AdAccountAdRulesHistory", &payload()).unwrap();

    let Some(Value::List(results)) = entry.get("results").unwrap() else {
        panic!("results should decode as a list");
    };
    assert!(matches!(results[0], Value::Object(_)));
    assert_eq!(
        entry.get("schedule_spec").unwrap().unwrap().to_json(),
        json!({ "schedule_type": "SEMI_HOURLY" })
    );
}

#[test]
fn unknown_fields_follow_policy() {
    let mut payload = payload();
    payload["created_by"] = json!("someone");

    let err = adkit::decode("AdAccountAdRulesHistory", &payload).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownField);
    assert_eq!(err.origin, ErrorOrigin::Decode);

    let lenient = adkit::decoder(DecodeConfig {
        unknown_fields: UnknownFieldPolicy::Ignore,
        ..DecodeConfig::default()
    })
    .unwrap();
    let entry = lenient
        .decode_kind::<AdAccountAdRulesHistory>(&payload)
        .unwrap();
    assert_eq!(entry.len(), 9);
    assert!(!entry.field_names().any(|name| name == "created_by"));
}

#[test]
fn config_loads_from_toml() {
    let config = DecodeConfig::from_toml_str(
        r#"
        unknown_fields = "ignore"
        coerce_numeric_strings = false
        "#,
    )
    .unwrap();

    let err = adkit::decoder(config)
        .unwrap()
        .decode("AdAccountAdRulesHistory", &payload())
        .unwrap_err();

    // rule_id arrives as a string
    assert_eq!(adkit::Error::from(err).kind, ErrorKind::TypeMismatch);
}

#[test]
fn bad_config_maps_to_invalid_payload() {
    let err: adkit::Error = DecodeConfig::from_toml_str("max_depth = 0")
        .unwrap_err()
        .into();

    assert_eq!(err.kind, ErrorKind::InvalidPayload);
    assert_eq!(err.origin, ErrorOrigin::Config);
}

#[test]
fn enum_values_are_not_validated() {
    let mut payload = payload();
    payload["exception_message"] = json!("NOT_AN_ACTION");

    assert!(adkit::decode("AdAccountAdRulesHistory", &payload).is_ok());
}

#[test]
fn decoded_entries_carry_the_api_handle() {
    let decoder = adkit::decoder(DecodeConfig::default())
        .unwrap()
        .with_api(Arc::new(GraphApi));
    let entry = decoder
        .decode("AdAccountAdRulesHistory", &payload())
        .unwrap();

    assert_eq!(entry.api().unwrap().api_version(), "v21.0");
}

#[test]
fn hand_built_entries_export_by_identifier() {
    let mut entry = Entry::of::<AdAccountAdRulesHistory>();
    entry
        .set(AdAccountAdRulesHistoryField::RuleId.as_str(), 7_i64)
        .unwrap();
    entry
        .set(AdAccountAdRulesHistoryField::IsManual.as_str(), true)
        .unwrap();

    assert_eq!(
        serde_json::Value::Object(entry.export_all_data()),
        json!({ "is_manual": true, "rule_id": 7 })
    );
    assert_eq!(entry.get_value("rule_id").unwrap(), Some(Value::Int(7)));
    assert!(entry.get_value("created_by").unwrap_err().is_unknown_field());

    let err: adkit::Error = entry.set("is_manual", "yes").unwrap_err().into();
    assert_eq!(err.kind, ErrorKind::TypeMismatch);
    assert_eq!(err.origin, ErrorOrigin::Entry);
}

#[test]
fn decoding_is_idempotent() {
    let first = adkit::decode("AdAccountAdRulesHistory", &payload()).unwrap();
    let second = adkit::decode("AdAccountAdRulesHistory", &payload()).unwrap();

    assert_eq!(first, second);
    assert_eq!(encode(&first), encode(&second));
}
