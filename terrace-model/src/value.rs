use crate::FieldType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use terrace_types::{AssetId, ItemId};

/// A typed value held by one schema field on one content item.
///
/// Date values carry their raw RFC 3339 string; parsing and human
/// formatting happen at the rendering boundary so a persisted value is
/// never re-parsed lossily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// RFC 3339 timestamp string, kept verbatim.
    DateTime(String),
    Url(String),
    Asset(AssetId),
    Reference(ItemId),
    /// Persisted tag id.
    Tag(String),
    /// Selected option key.
    Select(String),
    /// Opaque GeoJSON payload.
    Geometry(Value),
}

impl FieldValue {
    /// Coerces a raw JSON value into a typed value for the given field type.
    ///
    /// Returns `None` when the raw value's shape does not fit the declared
    /// type; "invalid so far" is a normal intermediate state of form input,
    /// not an error.
    #[must_use]
    pub fn from_json(raw: &Value, field_type: FieldType) -> Option<Self> {
        match field_type {
            FieldType::Text | FieldType::MarkdownText | FieldType::TextArea => {
                raw.as_str().map(|s| Self::Text(s.to_owned()))
            }
            FieldType::Integer => raw.as_i64().map(Self::Integer),
            FieldType::Float => raw.as_f64().map(Self::Float),
            FieldType::Boolean | FieldType::Checkbox => match raw {
                Value::Bool(b) => Some(Self::Bool(*b)),
                // Table cells carry booleans as the strings "true"/"false"
                Value::String(s) => Some(Self::Bool(s == "true")),
                _ => None,
            },
            FieldType::Date => raw.as_str().map(|s| Self::DateTime(s.to_owned())),
            FieldType::Url => raw.as_str().map(|s| Self::Url(s.to_owned())),
            FieldType::Asset => raw
                .as_str()
                .and_then(|s| AssetId::parse(s).ok())
                .map(Self::Asset),
            FieldType::Reference => raw
                .as_str()
                .and_then(|s| ItemId::parse(s).ok())
                .map(Self::Reference),
            FieldType::Tag => raw.as_str().map(|s| Self::Tag(s.to_owned())),
            FieldType::Select => raw.as_str().map(|s| Self::Select(s.to_owned())),
            FieldType::GeometryObject | FieldType::GeometryEditor => {
                Some(Self::Geometry(raw.clone()))
            }
        }
    }

    /// Returns the textual content, if this value carries one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s)
            | Self::DateTime(s)
            | Self::Url(s)
            | Self::Tag(s)
            | Self::Select(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean content, if this value carries one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric content widened to f64, if this value carries one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// True for the empty-string values produced by freshly added rows.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) | Self::Url(s) if s.is_empty())
    }
}
