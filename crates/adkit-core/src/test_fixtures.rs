use crate::traits::ApiContext;
use adkit_schema::{
    enum_group,
    node::{RecordKind, Schema},
    record,
    types::TypeTag,
};
use std::sync::LazyLock;

enum_group! {
    pub enum Verdict {
        Fired => "FIRED",
        Skipped => "SKIPPED",
    }
}

record! {
    pub struct SampleRule {
        fields: SampleRuleField {
            RuleId => "rule_id": TypeTag::INT,
            Name => "name": TypeTag::STRING,
            IsManual => "is_manual": TypeTag::BOOL,
            Budget => "budget": TypeTag::FLOAT,
            Impressions => "impressions": TypeTag::UNSIGNED_INT,
            Timestamp => "timestamp": TypeTag::DATETIME,
            Extra => "extra": TypeTag::OBJECT,
            Results => "results": TypeTag::List(&TypeTag::Record("SampleResult")),
            ScheduleSpec => "schedule_spec": TypeTag::Record("SampleSchedule"),
        }
        enums: [Verdict]
    }
}

record! {
    pub struct SampleResult {
        fields: SampleResultField {
            ObjectId => "object_id": TypeTag::INT,
            Action => "action": TypeTag::STRING,
        }
        enums: []
    }
}

/// `SampleSchedule` is deliberately left unregistered.
pub static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder()
        .record(SampleRule::RECORD)
        .record(SampleResult::RECORD)
        .build()
        .expect("fixture schema should validate")
});

#[derive(Debug)]
pub struct TestApi;

impl ApiContext for TestApi {
    fn api_version(&self) -> &str {
        "v21.0"
    }
}
