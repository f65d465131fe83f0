//! The generic multi-value field container.

use crate::reorder::move_item;
use chrono::{SecondsFormat, Utc};
use terrace_model::{FieldType, FieldValue, SchemaField};

/// The value a field is bound to before normalization.
///
/// Persisted items may hold nothing, a bare scalar, or a list for the same
/// field, depending on when the field was switched to multi-value; the
/// editor reconciles all three into a list.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue<T> {
    Absent,
    Single(T),
    Many(Vec<T>),
}

impl<T> BoundValue<T> {
    fn into_list(self) -> Vec<T> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(v) => vec![v],
            Self::Many(vs) => vs,
        }
    }
}

/// Whether the editor currently holds any rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Empty,
    Populated,
}

/// Which neighbor a row swaps with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The seed value appended by the "add" transition: the current time for
/// date-typed fields, an empty string for everything else.
#[must_use]
pub fn seed_value(field_type: FieldType) -> FieldValue {
    match field_type {
        FieldType::Date => {
            FieldValue::DateTime(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        FieldType::Text
        | FieldType::MarkdownText
        | FieldType::TextArea
        | FieldType::Integer
        | FieldType::Float
        | FieldType::Boolean
        | FieldType::Checkbox
        | FieldType::Url
        | FieldType::Asset
        | FieldType::Reference
        | FieldType::Tag
        | FieldType::Select
        | FieldType::GeometryObject
        | FieldType::GeometryEditor => FieldValue::Text(String::new()),
    }
}

/// Wraps a single-value control into an add/reorder/delete list editor.
///
/// The editor has two states, empty and populated; there is no separate
/// "editing" state because every row is editable in place. Each mutating
/// transition invokes the change listener with the full new list. In
/// read-only mode the mutating transitions are inert.
pub struct MultiValueEditor<T> {
    values: Vec<T>,
    read_only: bool,
    seed: Box<dyn Fn() -> T>,
    listener: Option<Box<dyn FnMut(&[T])>>,
}

impl<T: Clone> MultiValueEditor<T> {
    /// Creates an empty editor whose "add" transition appends `seed()`.
    #[must_use]
    pub fn new(seed: impl Fn() -> T + 'static) -> Self {
        Self {
            values: Vec::new(),
            read_only: false,
            seed: Box::new(seed),
            listener: None,
        }
    }

    /// Installs the change listener receiving the full list after every
    /// mutating transition.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&[T]) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Puts the editor in read-only mode; mutating transitions become
    /// no-ops and no controls should be rendered for them.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Reconciles a freshly bound value into the editor's list.
    ///
    /// Absent becomes the empty list, a bare scalar becomes a one-element
    /// list, and a list is taken as-is. Runs whenever the bound value
    /// changes; binding the same value twice is idempotent. Normalization
    /// is not a mutating transition and does not notify.
    pub fn bind(&mut self, value: BoundValue<T>) {
        self.values = value.into_list();
    }

    /// The current rows, in order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Empty or populated.
    #[must_use]
    pub fn state(&self) -> EditorState {
        if self.values.is_empty() {
            EditorState::Empty
        } else {
            EditorState::Populated
        }
    }

    /// True when mutating transitions are disabled.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Appends a seed value.
    pub fn add(&mut self) {
        if self.read_only {
            return;
        }
        self.values.push((self.seed)());
        self.notify();
    }

    /// Replaces the value at `index`; out-of-range indices are ignored.
    pub fn edit(&mut self, index: usize, value: T) {
        if self.read_only || index >= self.values.len() {
            return;
        }
        self.values[index] = value;
        self.notify();
    }

    /// Removes the row at `index`; out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) {
        if self.read_only || index >= self.values.len() {
            return;
        }
        self.values.remove(index);
        self.notify();
    }

    /// Moves the row at `index` one step up or down. Moving the first row
    /// up or the last row down is a no-op (still notifies with the
    /// unchanged list).
    pub fn reorder(&mut self, index: usize, direction: Direction) {
        if self.read_only {
            return;
        }
        let target = match direction {
            Direction::Up => index as isize - 1,
            Direction::Down => index as isize + 1,
        };
        self.values = move_item(&self.values, index, target);
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.values);
        }
    }
}

impl MultiValueEditor<FieldValue> {
    /// Creates an editor for the given schema field, seeding new rows per
    /// the field's type. Read-only mode is the caller's choice; chain
    /// [`MultiValueEditor::read_only`] to disable mutations.
    #[must_use]
    pub fn for_field(field: &SchemaField) -> Self {
        let field_type = field.field_type;
        Self::new(move || seed_value(field_type))
    }
}
