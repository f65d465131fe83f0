use serde::{Deserialize, Serialize};
use terrace_types::FieldId;

/// The declared type of a schema field.
///
/// This enumeration is closed on purpose: every dispatch site in the editor
/// and renderer matches it exhaustively, so adding a variant forces each of
/// them to be updated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    MarkdownText,
    TextArea,
    Integer,
    Float,
    Boolean,
    Checkbox,
    Date,
    Url,
    Asset,
    Reference,
    Tag,
    Select,
    GeometryObject,
    GeometryEditor,
}

impl FieldType {
    /// True for field types that hold free-form text.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(
            self,
            Self::Text | Self::MarkdownText | Self::TextArea | Self::Url
        )
    }

    /// True for field types whose value is a point in time.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date)
    }

    /// True for field types rendered as an on/off toggle.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Boolean | Self::Checkbox)
    }

    /// True for field types whose values expand rather than fit one table
    /// cell (long text is always shown behind a count badge).
    #[must_use]
    pub const fn is_long_text(self) -> bool {
        matches!(self, Self::TextArea | Self::MarkdownText)
    }
}

/// A named color assigned to tag values.
///
/// The palette order below is the round-robin order the tag editor cycles
/// through when appending new tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagColor {
    Magenta,
    Red,
    Volcano,
    Orange,
    Gold,
    Lime,
    Green,
    Cyan,
    Blue,
    Geekblue,
    Purple,
}

impl TagColor {
    /// The fixed palette, in round-robin assignment order.
    pub const PALETTE: [TagColor; 11] = [
        TagColor::Magenta,
        TagColor::Red,
        TagColor::Volcano,
        TagColor::Orange,
        TagColor::Gold,
        TagColor::Lime,
        TagColor::Green,
        TagColor::Cyan,
        TagColor::Blue,
        TagColor::Geekblue,
        TagColor::Purple,
    ];
}

/// One tag a tag-typed field may hold.
///
/// `id` is absent for tags created locally and not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub color: TagColor,
}

impl TagDefinition {
    /// Creates an unpersisted tag with the given name and color.
    #[must_use]
    pub fn new(name: impl Into<String>, color: TagColor) -> Self {
        Self {
            id: None,
            name: name.into(),
            color,
        }
    }
}

/// Describes one field of a content model's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaField {
    pub id: FieldId,
    /// Stable key used in item payloads (e.g., "title", "tags").
    pub key: String,
    pub field_type: FieldType,
    /// When true, the field holds an ordered list of values.
    pub multiple: bool,
    pub required: bool,
    pub unique: bool,
    /// Tag definitions. Only meaningful when the type is Tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagDefinition>>,
    /// Selectable option keys. Only meaningful when the type is Select.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_options: Option<Vec<String>>,
}

impl SchemaField {
    fn simple(key: &str, field_type: FieldType) -> Self {
        Self {
            id: FieldId::new(),
            key: key.into(),
            field_type,
            multiple: false,
            required: false,
            unique: false,
            tags: None,
            select_options: None,
        }
    }

    /// Shorthand for a single-valued text field.
    #[must_use]
    pub fn text(key: &str) -> Self {
        Self::simple(key, FieldType::Text)
    }

    /// Shorthand for a markdown text field.
    #[must_use]
    pub fn markdown(key: &str) -> Self {
        Self::simple(key, FieldType::MarkdownText)
    }

    /// Shorthand for a multi-line text field.
    #[must_use]
    pub fn text_area(key: &str) -> Self {
        Self::simple(key, FieldType::TextArea)
    }

    /// Shorthand for an integer field.
    #[must_use]
    pub fn integer(key: &str) -> Self {
        Self::simple(key, FieldType::Integer)
    }

    /// Shorthand for a float field.
    #[must_use]
    pub fn float(key: &str) -> Self {
        Self::simple(key, FieldType::Float)
    }

    /// Shorthand for a boolean field.
    #[must_use]
    pub fn boolean(key: &str) -> Self {
        Self::simple(key, FieldType::Boolean)
    }

    /// Shorthand for a checkbox field.
    #[must_use]
    pub fn checkbox(key: &str) -> Self {
        Self::simple(key, FieldType::Checkbox)
    }

    /// Shorthand for a date field.
    #[must_use]
    pub fn date(key: &str) -> Self {
        Self::simple(key, FieldType::Date)
    }

    /// Shorthand for a URL field.
    #[must_use]
    pub fn url(key: &str) -> Self {
        Self::simple(key, FieldType::Url)
    }

    /// Shorthand for an asset reference field.
    #[must_use]
    pub fn asset(key: &str) -> Self {
        Self::simple(key, FieldType::Asset)
    }

    /// Shorthand for a reference field pointing at another item.
    #[must_use]
    pub fn reference(key: &str) -> Self {
        Self::simple(key, FieldType::Reference)
    }

    /// Shorthand for a tag field with the given definitions.
    #[must_use]
    pub fn tag(key: &str, tags: Vec<TagDefinition>) -> Self {
        Self {
            tags: Some(tags),
            ..Self::simple(key, FieldType::Tag)
        }
    }

    /// Shorthand for a select field with fixed option keys.
    #[must_use]
    pub fn select(key: &str, options: Vec<String>) -> Self {
        Self {
            select_options: Some(options),
            ..Self::simple(key, FieldType::Select)
        }
    }

    /// Shorthand for a geometry object field.
    #[must_use]
    pub fn geometry_object(key: &str) -> Self {
        Self::simple(key, FieldType::GeometryObject)
    }

    /// Shorthand for a geometry editor field.
    #[must_use]
    pub fn geometry_editor(key: &str) -> Self {
        Self::simple(key, FieldType::GeometryEditor)
    }

    /// Marks the field as holding multiple values.
    #[must_use]
    pub fn with_multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Marks the field as required.
    #[must_use]
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as unique.
    #[must_use]
    pub fn with_unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Looks up a tag definition by persisted id.
    ///
    /// Returns `None` when the field has no tag configuration or the id is
    /// unknown; callers drop unmatched ids silently.
    #[must_use]
    pub fn tag_by_id(&self, id: &str) -> Option<&TagDefinition> {
        self.tags
            .as_deref()?
            .iter()
            .find(|t| t.id.as_deref() == Some(id))
    }
}
