//! Multi-value field editing state for Terrace.
//!
//! Any single-value field control becomes a list editor by wrapping it in a
//! [`MultiValueEditor`]: add appends a type-appropriate seed value, rows are
//! edited in place, delete removes, and reorder moves a row one step. The
//! editor owns no state the caller does not also receive — every mutating
//! transition hands the full new list to the change listener.
//!
//! Building blocks:
//! - [`move_item`] — the pure reorder primitive shared by every list editor
//! - [`MultiValueEditor`] — the generic add/edit/delete/reorder container
//! - [`TagListEditor`] — the tag variant with round-robin color assignment

mod multi_value;
mod reorder;
mod tags;

pub use multi_value::{seed_value, BoundValue, Direction, EditorState, MultiValueEditor};
pub use reorder::move_item;
pub use tags::TagListEditor;
