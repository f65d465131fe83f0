//! Field value rendering dispatch for Terrace content tables.
//!
//! Maps `(raw cell value, field descriptor, editability)` to a
//! [`RenderNode`] descriptor — never markup; building actual controls from
//! descriptors is the presentation layer's job. The dispatch is a total
//! match over the closed [`terrace_model::FieldType`] enumeration, so a
//! new field type fails compilation here until it is handled.

mod format;
mod render;

pub use format::format_datetime;
pub use render::{render_cell, RenderNode, TagChip};
