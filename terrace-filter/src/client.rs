//! The client (query-builder) shape of filter conditions.
//!
//! A condition serializes as a single-key object whose key names the kind:
//! `{"string": {"fieldId": ..., "operator": ..., "value": ...}}`. This is
//! the shape the filter UI edits in place.

use crate::operator::{
    BasicOperator, BoolOperator, FieldSelector, MultipleOperator, NullableOperator,
    NumberOperator, StringOperator, TimeOperator,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A string field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringCondition {
    pub field_id: FieldSelector,
    pub operator: StringOperator,
    pub value: String,
}

/// A number field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberCondition {
    pub field_id: FieldSelector,
    pub operator: NumberOperator,
    pub value: f64,
}

/// A boolean field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoolCondition {
    pub field_id: FieldSelector,
    pub operator: BoolOperator,
    pub value: bool,
}

/// A time field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCondition {
    pub field_id: FieldSelector,
    pub operator: TimeOperator,
    pub value: DateTime<Utc>,
}

/// A membership comparison over a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleCondition {
    pub field_id: FieldSelector,
    pub operator: MultipleOperator,
    pub value: Vec<String>,
}

/// A presence check; carries no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NullableCondition {
    pub field_id: FieldSelector,
    pub operator: NullableOperator,
}

/// The generic fallback bucket. The raw value is preserved untouched for
/// the caller to interpret or ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicCondition {
    pub field_id: FieldSelector,
    pub operator: BasicOperator,
    pub value: Value,
}

/// One field comparison in client shape, keyed by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    String(StringCondition),
    Number(NumberCondition),
    Bool(BoolCondition),
    Time(TimeCondition),
    Multiple(MultipleCondition),
    Nullable(NullableCondition),
    Basic(BasicCondition),
}

impl Condition {
    /// The field reference of this condition, whatever its kind.
    #[must_use]
    pub fn field_id(&self) -> &FieldSelector {
        match self {
            Self::String(c) => &c.field_id,
            Self::Number(c) => &c.field_id,
            Self::Bool(c) => &c.field_id,
            Self::Time(c) => &c.field_id,
            Self::Multiple(c) => &c.field_id,
            Self::Nullable(c) => &c.field_id,
            Self::Basic(c) => &c.field_id,
        }
    }
}
