//! Core type definitions for Terrace.
//!
//! This crate defines the fundamental, schema-agnostic types used throughout
//! the content core:
//! - Identifiers for projects, models, fields, items, versions, requests,
//!   assets, and users (UUID v7)
//! - The shared error/result types
//!
//! All schema-specific types (field descriptors, values, versions, filter
//! conditions) belong in their respective crates, not here.

mod ids;

pub use ids::{AssetId, FieldId, ItemId, ModelId, ProjectId, RequestId, UserId, VersionId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
