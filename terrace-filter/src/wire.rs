//! The transport shape of filter conditions.
//!
//! Shapes here match the external API contract key-for-key: a
//! `__typename` discriminator plus `${kind}Operator` / `${kind}Value`
//! fields. Serialization is derived; deserialization is hand-written so an
//! unrecognized `__typename` lands in the `Basic` bucket instead of
//! failing (serde's internal tagging cannot express a data-carrying
//! catch-all variant).

use crate::operator::{
    BasicOperator, BoolOperator, FieldSelector, MultipleOperator, NullableOperator,
    NumberOperator, StringOperator, TimeOperator,
};
use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field comparison in transport shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum WireCondition {
    #[serde(rename = "StringFieldCondition", rename_all = "camelCase")]
    String {
        field_id: FieldSelector,
        string_operator: StringOperator,
        string_value: String,
    },
    #[serde(rename = "NumberFieldCondition", rename_all = "camelCase")]
    Number {
        field_id: FieldSelector,
        number_operator: NumberOperator,
        number_value: f64,
    },
    #[serde(rename = "BoolFieldCondition", rename_all = "camelCase")]
    Bool {
        field_id: FieldSelector,
        bool_operator: BoolOperator,
        bool_value: bool,
    },
    #[serde(rename = "TimeFieldCondition", rename_all = "camelCase")]
    Time {
        field_id: FieldSelector,
        time_operator: TimeOperator,
        time_value: DateTime<Utc>,
    },
    #[serde(rename = "MultipleFieldCondition", rename_all = "camelCase")]
    Multiple {
        field_id: FieldSelector,
        multiple_operator: MultipleOperator,
        multiple_value: Vec<String>,
    },
    #[serde(rename = "NullableFieldCondition", rename_all = "camelCase")]
    Nullable {
        field_id: FieldSelector,
        nullable_operator: NullableOperator,
    },
    #[serde(rename = "BasicFieldCondition", rename_all = "camelCase")]
    Basic {
        field_id: FieldSelector,
        basic_operator: BasicOperator,
        basic_value: Value,
    },
}

fn pull<T, E>(obj: &Value, key: &str) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    let raw = obj
        .get(key)
        .cloned()
        .ok_or_else(|| E::custom(format!("missing field `{key}`")))?;
    serde_json::from_value(raw).map_err(|e| E::custom(format!("invalid `{key}`: {e}")))
}

impl<'de> Deserialize<'de> for WireCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let obj = Value::deserialize(deserializer)?;
        let tag = obj
            .get("__typename")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        match tag.as_str() {
            "StringFieldCondition" => Ok(Self::String {
                field_id: pull(&obj, "fieldId")?,
                string_operator: pull(&obj, "stringOperator")?,
                string_value: pull(&obj, "stringValue")?,
            }),
            "NumberFieldCondition" => Ok(Self::Number {
                field_id: pull(&obj, "fieldId")?,
                number_operator: pull(&obj, "numberOperator")?,
                number_value: pull(&obj, "numberValue")?,
            }),
            "BoolFieldCondition" => Ok(Self::Bool {
                field_id: pull(&obj, "fieldId")?,
                bool_operator: pull(&obj, "boolOperator")?,
                bool_value: pull(&obj, "boolValue")?,
            }),
            "TimeFieldCondition" => Ok(Self::Time {
                field_id: pull(&obj, "fieldId")?,
                time_operator: pull(&obj, "timeOperator")?,
                time_value: pull(&obj, "timeValue")?,
            }),
            "MultipleFieldCondition" => Ok(Self::Multiple {
                field_id: pull(&obj, "fieldId")?,
                multiple_operator: pull(&obj, "multipleOperator")?,
                multiple_value: pull(&obj, "multipleValue")?,
            }),
            "NullableFieldCondition" => Ok(Self::Nullable {
                field_id: pull(&obj, "fieldId")?,
                nullable_operator: pull(&obj, "nullableOperator")?,
            }),
            other => {
                // Unknown discriminators are not an error; they fall into
                // the generic bucket with their raw operator and value.
                if other != "BasicFieldCondition" {
                    tracing::debug!(typename = other, "unrecognized condition, using basic bucket");
                }
                Ok(Self::Basic {
                    field_id: pull(&obj, "fieldId")?,
                    basic_operator: pull(&obj, "basicOperator")?,
                    basic_value: obj.get("basicValue").cloned().unwrap_or(Value::Null),
                })
            }
        }
    }
}

impl WireCondition {
    /// The field reference of this condition, whatever its kind.
    #[must_use]
    pub fn field_id(&self) -> &FieldSelector {
        match self {
            Self::String { field_id, .. }
            | Self::Number { field_id, .. }
            | Self::Bool { field_id, .. }
            | Self::Time { field_id, .. }
            | Self::Multiple { field_id, .. }
            | Self::Nullable { field_id, .. }
            | Self::Basic { field_id, .. } => field_id,
        }
    }
}

/// A set of conditions combined by logical AND, as sent over the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AndCondition {
    #[serde(default)]
    pub conditions: Vec<WireCondition>,
}

impl AndCondition {
    /// Creates an AND of the given conditions.
    #[must_use]
    pub fn new(conditions: Vec<WireCondition>) -> Self {
        Self { conditions }
    }

    /// True when the filter constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
