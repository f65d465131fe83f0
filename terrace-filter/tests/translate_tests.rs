use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use terrace_filter::{
    and_to_client, and_to_wire, AndCondition, BasicOperator, BoolOperator, Condition,
    FieldScope, FieldSelector, MultipleOperator, NullableOperator, NumberOperator,
    StringOperator, TimeOperator, WireCondition,
};

fn selector(id: &str) -> FieldSelector {
    FieldSelector::field(id)
}

// ── Per-kind wire → client → wire round-trips ────────────────────

#[test]
fn string_condition_roundtrip() {
    let wire = WireCondition::String {
        field_id: selector("f1"),
        string_operator: StringOperator::Contains,
        string_value: "abc".into(),
    };
    let client = wire.to_client();
    match &client {
        Condition::String(c) => {
            assert_eq!(c.field_id, selector("f1"));
            assert_eq!(c.operator, StringOperator::Contains);
            assert_eq!(c.value, "abc");
        }
        other => panic!("expected string condition, got {other:?}"),
    }
    assert_eq!(client.to_wire(), wire);
}

#[test]
fn number_condition_roundtrip() {
    let wire = WireCondition::Number {
        field_id: selector("f2"),
        number_operator: NumberOperator::GreaterThanOrEqualTo,
        number_value: 1.5,
    };
    assert_eq!(wire.to_client().to_wire(), wire);
}

#[test]
fn bool_condition_roundtrip() {
    let wire = WireCondition::Bool {
        field_id: selector("f2"),
        bool_operator: BoolOperator::Equals,
        bool_value: true,
    };
    assert_eq!(wire.to_client().to_wire(), wire);
}

#[test]
fn time_condition_roundtrip() {
    let wire = WireCondition::Time {
        field_id: FieldSelector::builtin(FieldScope::CreationDate),
        time_operator: TimeOperator::Before,
        time_value: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    };
    assert_eq!(wire.to_client().to_wire(), wire);
}

#[test]
fn multiple_condition_roundtrip() {
    let wire = WireCondition::Multiple {
        field_id: selector("f3"),
        multiple_operator: MultipleOperator::IncludesAll,
        multiple_value: vec!["a".into(), "b".into()],
    };
    assert_eq!(wire.to_client().to_wire(), wire);
}

#[test]
fn nullable_condition_roundtrip_has_no_value() {
    let wire = WireCondition::Nullable {
        field_id: selector("f4"),
        nullable_operator: NullableOperator::Empty,
    };
    assert_eq!(wire.to_client().to_wire(), wire);
}

#[test]
fn basic_condition_roundtrip_preserves_raw_value() {
    let wire = WireCondition::Basic {
        field_id: selector("f5"),
        basic_operator: BasicOperator::NotEquals,
        basic_value: json!({"nested": [1, 2, 3]}),
    };
    assert_eq!(wire.to_client().to_wire(), wire);
}

// ── Wire JSON contract ───────────────────────────────────────────

#[test]
fn bool_wire_json_shape_matches_contract() {
    let wire = WireCondition::Bool {
        field_id: selector("f2"),
        bool_operator: BoolOperator::Equals,
        bool_value: true,
    };
    let value = serde_json::to_value(&wire).unwrap();
    assert_eq!(
        value,
        json!({
            "__typename": "BoolFieldCondition",
            "fieldId": {"id": "f2", "type": "FIELD"},
            "boolOperator": "EQUALS",
            "boolValue": true
        })
    );
}

#[test]
fn bool_client_json_shape_matches_contract() {
    let client = WireCondition::Bool {
        field_id: selector("f2"),
        bool_operator: BoolOperator::Equals,
        bool_value: true,
    }
    .to_client();
    let value = serde_json::to_value(&client).unwrap();
    assert_eq!(
        value,
        json!({
            "bool": {
                "fieldId": {"id": "f2", "type": "FIELD"},
                "operator": "EQUALS",
                "value": true
            }
        })
    );
}

#[test]
fn string_wire_json_deserializes() {
    let wire: WireCondition = serde_json::from_value(json!({
        "__typename": "StringFieldCondition",
        "fieldId": {"id": "f1", "type": "FIELD"},
        "stringOperator": "STARTS_WITH",
        "stringValue": "dra"
    }))
    .unwrap();
    assert_eq!(
        wire,
        WireCondition::String {
            field_id: selector("f1"),
            string_operator: StringOperator::StartsWith,
            string_value: "dra".into(),
        }
    );
}

#[test]
fn builtin_selector_omits_id() {
    let value = serde_json::to_value(FieldSelector::builtin(FieldScope::Status)).unwrap();
    assert_eq!(value, json!({"type": "STATUS"}));
}

#[test]
fn wire_serde_roundtrip_every_kind() {
    let conditions = vec![
        WireCondition::String {
            field_id: selector("a"),
            string_operator: StringOperator::NotEquals,
            string_value: "x".into(),
        },
        WireCondition::Number {
            field_id: selector("b"),
            number_operator: NumberOperator::LessThan,
            number_value: -2.0,
        },
        WireCondition::Bool {
            field_id: selector("c"),
            bool_operator: BoolOperator::NotEquals,
            bool_value: false,
        },
        WireCondition::Time {
            field_id: FieldSelector::builtin(FieldScope::ModificationDate),
            time_operator: TimeOperator::AfterOrOn,
            time_value: Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(),
        },
        WireCondition::Multiple {
            field_id: selector("d"),
            multiple_operator: MultipleOperator::NotIncludesAny,
            multiple_value: vec![],
        },
        WireCondition::Nullable {
            field_id: selector("e"),
            nullable_operator: NullableOperator::NotEmpty,
        },
        WireCondition::Basic {
            field_id: selector("f"),
            basic_operator: BasicOperator::Equals,
            basic_value: json!("raw"),
        },
    ];
    for original in conditions {
        let json = serde_json::to_string(&original).unwrap();
        let parsed: WireCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original, "serde round-trip failed for {json}");
    }
}

// ── Unknown discriminator fallback ───────────────────────────────

#[test]
fn unknown_typename_falls_back_to_basic() {
    let wire: WireCondition = serde_json::from_value(json!({
        "__typename": "UnknownCondition",
        "fieldId": {"id": "f9", "type": "FIELD"},
        "basicOperator": "EQUALS",
        "basicValue": "whatever"
    }))
    .unwrap();
    assert_eq!(
        wire,
        WireCondition::Basic {
            field_id: selector("f9"),
            basic_operator: BasicOperator::Equals,
            basic_value: json!("whatever"),
        }
    );
}

#[test]
fn unknown_typename_without_value_defaults_to_null() {
    let wire: WireCondition = serde_json::from_value(json!({
        "__typename": "SomethingElse",
        "fieldId": {"id": "f9", "type": "FIELD"},
        "basicOperator": "NOT_EQUALS"
    }))
    .unwrap();
    match wire {
        WireCondition::Basic { basic_value, .. } => assert!(basic_value.is_null()),
        other => panic!("expected basic fallback, got {other:?}"),
    }
}

// ── Empty filter collapse ────────────────────────────────────────

#[test]
fn absent_filter_translates_to_none() {
    assert_eq!(and_to_client(None), None);
}

#[test]
fn empty_filter_translates_to_none() {
    let filter = AndCondition::default();
    assert_eq!(and_to_client(Some(&filter)), None);
}

#[test]
fn empty_client_list_translates_to_none() {
    assert_eq!(and_to_wire(&[]), None);
}

#[test]
fn and_filter_roundtrip() {
    let filter = AndCondition::new(vec![
        WireCondition::String {
            field_id: selector("f1"),
            string_operator: StringOperator::Contains,
            string_value: "abc".into(),
        },
        WireCondition::Nullable {
            field_id: selector("f2"),
            nullable_operator: NullableOperator::Empty,
        },
    ]);
    let client = and_to_client(Some(&filter)).unwrap();
    assert_eq!(client.len(), 2);
    assert_eq!(and_to_wire(&client), Some(filter));
}
