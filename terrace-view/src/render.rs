//! Cell rendering dispatch.

use crate::format::format_datetime;
use serde_json::Value;
use terrace_model::{FieldType, SchemaField, TagColor};

/// A colored tag chip.
#[derive(Debug, Clone, PartialEq)]
pub struct TagChip {
    pub name: String,
    pub color: TagColor,
}

/// What a table cell renders as.
///
/// Descriptors only; the presentation layer turns these into actual
/// controls. `Markdown` sources are rendered with links forced to open in
/// a new browsing context.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// On/off toggle bound to the boolean value.
    Toggle { checked: bool, editable: bool },
    /// One colored chip per known tag; unknown tag ids are dropped.
    TagChips(Vec<TagChip>),
    /// An empty editable input replacing the `"-"` placeholder so the
    /// user can populate the cell in place.
    EmptyInput,
    /// One chip per selected option value.
    SelectChips(Vec<String>),
    /// Collapsed count badge expanding to a popover listing every value.
    CountBadge {
        count: usize,
        entries: Vec<RenderNode>,
    },
    /// Human-formatted timestamp.
    DateTime(String),
    /// Anchor pointing at the value.
    Link(String),
    /// Icon plus filename.
    Asset { filename: String },
    /// Tagged chip pointing at another item.
    Reference { id: String },
    /// Markdown source, links opening in a new context.
    Markdown { source: String },
    /// Plain formatted text; the safe fallback for every unmatched shape.
    Text(String),
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
        Value::String(s) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Formats one underlying value per its declared type.
fn render_single(value: &Value, field_type: FieldType) -> RenderNode {
    match field_type {
        FieldType::Date => match value.as_str().and_then(format_datetime) {
            Some(formatted) => RenderNode::DateTime(formatted),
            None => RenderNode::Text(value_to_text(value)),
        },
        FieldType::Url => match value.as_str() {
            Some(url) => RenderNode::Link(url.to_owned()),
            None => RenderNode::Text(value_to_text(value)),
        },
        FieldType::Asset => RenderNode::Asset {
            filename: value_to_text(value),
        },
        FieldType::Reference => RenderNode::Reference {
            id: value_to_text(value),
        },
        FieldType::MarkdownText => RenderNode::Markdown {
            source: value_to_text(value),
        },
        FieldType::Boolean | FieldType::Checkbox => {
            RenderNode::Text(value_to_text(value))
        }
        FieldType::Text
        | FieldType::TextArea
        | FieldType::Integer
        | FieldType::Float
        | FieldType::Tag
        | FieldType::Select
        | FieldType::GeometryObject
        | FieldType::GeometryEditor => RenderNode::Text(value_to_text(value)),
    }
}

/// Chooses the control for one table cell.
///
/// `editable` says whether the caller supplied a value-changed callback;
/// without one everything renders read-only. Rules apply in priority
/// order; anything unmatched falls through to plain text passthrough —
/// this function is total and never fails.
#[must_use]
pub fn render_cell(value: &Value, field: &SchemaField, editable: bool) -> RenderNode {
    // Single-valued boolean fields bind a toggle directly to the value;
    // the table layer carries booleans as the strings "true"/"false".
    if field.field_type.is_boolean() && !field.multiple {
        let checked = match value {
            Value::Bool(b) => *b,
            Value::String(s) => s == "true",
            _ => false,
        };
        return RenderNode::Toggle { checked, editable };
    }

    if field.field_type == FieldType::Tag {
        let chips = string_items(value)
            .iter()
            .filter_map(|id| field.tag_by_id(id))
            .map(|t| TagChip {
                name: t.name.clone(),
                color: t.color,
            })
            .collect();
        return RenderNode::TagChips(chips);
    }

    // The "-" placeholder on an editable single-valued text or date cell
    // becomes an empty input so the cell can be populated in place.
    if editable
        && !field.multiple
        && matches!(field.field_type, FieldType::Text | FieldType::Date)
        && value.as_str() == Some("-")
    {
        return RenderNode::EmptyInput;
    }

    if field.field_type == FieldType::Select {
        return RenderNode::SelectChips(string_items(value));
    }

    // Multi-valued cells and long text collapse behind a count badge to
    // keep dense tables scannable.
    let items: Vec<&Value> = match value {
        Value::Array(a) => a.iter().collect(),
        v => vec![v],
    };
    if items.len() > 1 || field.field_type.is_long_text() {
        let entries = items
            .iter()
            .map(|v| render_single(v, field.field_type))
            .collect();
        return RenderNode::CountBadge {
            count: items.len(),
            entries,
        };
    }

    match items.first() {
        Some(v) => render_single(v, field.field_type),
        None => RenderNode::Text(String::new()),
    }
}
