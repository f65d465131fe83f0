//! Field selectors and the per-kind operator vocabularies.
//!
//! Operator spellings are pinned by the external API contract
//! (SCREAMING_SNAKE_CASE on the wire); the condition's kind decides which
//! vocabulary applies.

use serde::{Deserialize, Serialize};

/// What a condition's field reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldScope {
    /// A schema field of the model.
    Field,
    /// A metadata field of the model.
    MetaField,
    /// The item id itself.
    Id,
    CreationDate,
    ModificationDate,
    Status,
}

/// A condition's field reference: id plus scope tag.
///
/// `id` is absent for the built-in scopes (id, dates, status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub scope: FieldScope,
}

impl FieldSelector {
    /// Selector for a schema field by id.
    #[must_use]
    pub fn field(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            scope: FieldScope::Field,
        }
    }

    /// Selector for a metadata field by id.
    #[must_use]
    pub fn meta_field(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            scope: FieldScope::MetaField,
        }
    }

    /// Selector for a built-in scope with no field id.
    #[must_use]
    pub const fn builtin(scope: FieldScope) -> Self {
        Self { id: None, scope }
    }
}

/// Operators applicable to string-valued conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StringOperator {
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    Equals,
    NotEquals,
}

/// Operators applicable to number-valued conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

/// Operators applicable to boolean-valued conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoolOperator {
    Equals,
    NotEquals,
}

/// Operators applicable to time-valued conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOperator {
    Before,
    After,
    BeforeOrOn,
    AfterOrOn,
}

/// Operators applicable to multi-valued (string list) conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultipleOperator {
    IncludesAny,
    NotIncludesAny,
    IncludesAll,
    NotIncludesAll,
}

/// Operators applicable to presence conditions; these carry no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NullableOperator {
    Empty,
    NotEmpty,
}

/// Operators of the generic fallback bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BasicOperator {
    Equals,
    NotEquals,
}
