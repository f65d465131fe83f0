//! The tag variant of the multi-value editor.
//!
//! Each row is a `{id?, name, color}` tag. Colors come from the fixed
//! palette in round-robin order; the cursor belongs to this editor
//! instance (mount to unmount) and only ever advances — deleting a tag
//! never frees its color for reuse, so one session produces a
//! deterministic, cyclically varying color sequence.

use crate::reorder::move_item;
use crate::{Direction, EditorState};
use terrace_model::{TagColor, TagDefinition};

/// Add/rename/delete/reorder editor for a tag-typed field.
pub struct TagListEditor {
    tags: Vec<TagDefinition>,
    /// Round-robin palette cursor. Monotonic; never rewinds.
    cursor: usize,
    read_only: bool,
    listener: Option<Box<dyn FnMut(&[TagDefinition])>>,
}

impl TagListEditor {
    /// Creates an empty editor with the palette cursor at the start.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            cursor: 0,
            read_only: false,
            listener: None,
        }
    }

    /// Creates an editor over already-persisted tags. The cursor still
    /// starts at the palette's beginning; only tags appended in this
    /// session consume palette positions.
    #[must_use]
    pub fn with_tags(tags: Vec<TagDefinition>) -> Self {
        Self {
            tags,
            ..Self::new()
        }
    }

    /// Installs the change listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&[TagDefinition]) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Puts the editor in read-only mode.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// The current tags, in order.
    #[must_use]
    pub fn tags(&self) -> &[TagDefinition] {
        &self.tags
    }

    /// Empty or populated.
    #[must_use]
    pub fn state(&self) -> EditorState {
        if self.tags.is_empty() {
            EditorState::Empty
        } else {
            EditorState::Populated
        }
    }

    /// Appends a new unpersisted tag, assigning the next palette color and
    /// advancing the cursor.
    pub fn add(&mut self, name: impl Into<String>) {
        if self.read_only {
            return;
        }
        let color = TagColor::PALETTE[self.cursor % TagColor::PALETTE.len()];
        self.cursor += 1;
        self.tags.push(TagDefinition::new(name, color));
        self.notify();
    }

    /// Renames the tag at `index`; out-of-range indices are ignored. The
    /// color stays as assigned.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) {
        if self.read_only || index >= self.tags.len() {
            return;
        }
        self.tags[index].name = name.into();
        self.notify();
    }

    /// Removes the tag at `index`. The cursor does not move back.
    pub fn delete(&mut self, index: usize) {
        if self.read_only || index >= self.tags.len() {
            return;
        }
        self.tags.remove(index);
        self.notify();
    }

    /// Moves the tag at `index` one step up or down.
    pub fn reorder(&mut self, index: usize, direction: Direction) {
        if self.read_only {
            return;
        }
        let target = match direction {
            Direction::Up => index as isize - 1,
            Direction::Down => index as isize + 1,
        };
        self.tags = move_item(&self.tags, index, target);
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.tags);
        }
    }
}

impl Default for TagListEditor {
    fn default() -> Self {
        Self::new()
    }
}
