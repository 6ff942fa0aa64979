
use adkit_schema::{enum_group, record, types::TypeTag};

enum_group! {
    /// What a rule did when it fired.
    pub enum Action {
        BudgetNotRedistributed => "BUDGET_NOT_REDISTRIBUTED",
        ChangedBid => "CHANGED_BID",
        ChangedBudget => "CHANGED_BUDGET",
        Email => "EMAIL",
        EnableAdvantagePlusCreative => "ENABLE_ADVANTAGE_PLUS_CREATIVE",
        EnableAutoflow => "ENABLE_AUTOFLOW",
        EndpointPinged => "ENDPOINT_PINGED",
        Error => "ERROR",
        FacebookNotificationSent => "FACEBOOK_NOTIFICATION_SENT",
        MessageSent => "MESSAGE_SENT",
        NotChanged => "NOT_CHANGED",
        Paused => "PAUSED",
        Unpaused => "UNPAUSED",
    }
}

enum_group! {
    /// How the rule evaluation was triggered.
    pub enum EvaluationType {
        Schedule => "SCHEDULE",
        Trigger => "TRIGGER",
    }
}

record! {
    /// One historical evaluation/execution of an automated ad rule.
    pub struct AdAccountAdRulesHistory {
        fields: AdAccountAdRulesHistoryField {
            EvaluationSpec => "evaluation_spec": TypeTag::Record("AdRuleEvaluationSpec"),
            ExceptionCode => "exception_code": TypeTag::INT,
            ExceptionMessage => "exception_message": TypeTag::STRING,
            ExecutionSpec => "execution_spec": TypeTag::Record("AdRuleExecutionSpec"),
            IsManual => "is_manual": TypeTag::BOOL,
            Results => "results": TypeTag::List(&TypeTag::Record("AdRuleHistoryResult")),
            RuleId => "rule_id": TypeTag::INT,
            ScheduleSpec => "schedule_spec": TypeTag::Record("AdRuleScheduleSpec"),
            Timestamp => "timestamp": TypeTag::DATETIME,
        }
        enums: [Action, EvaluationType]
    }
}
