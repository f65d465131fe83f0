//! Schema and value model for Terrace.
//!
//! Defines the types every other content-core crate depends on:
//! - [`FieldType`] — the closed enumeration of schema field types
//! - [`SchemaField`] — a field descriptor (type, multiplicity, flags,
//!   per-type configuration such as tag definitions and select options)
//! - [`FieldValue`] — a typed field value with coercions from raw JSON
//! - [`TagDefinition`] / [`TagColor`] — tag metadata for tag-typed fields
//!
//! Descriptors are read-only from the editing layer's perspective; changing
//! a schema is a separate management workflow that happens server-side.

mod schema;
mod value;

pub use schema::{FieldType, SchemaField, TagColor, TagDefinition};
pub use value::FieldValue;
