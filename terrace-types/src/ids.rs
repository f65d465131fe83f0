//! Identifier types used throughout the Terrace content core.
//!
//! Uses UUID v7 for time-ordered, globally unique identifiers. Every
//! identifier serializes transparently as its UUID string, matching the
//! wire format of the surrounding API layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new identifier with the current timestamp.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// Parses an identifier from a string.
            pub fn parse(s: &str) -> crate::Result<Self> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a project (workspace-level container of models).
    ProjectId
}

uuid_id! {
    /// Unique identifier for a model (content schema).
    ModelId
}

uuid_id! {
    /// Unique identifier for a schema field within a model.
    FieldId
}

uuid_id! {
    /// Unique identifier for a content item.
    ItemId
}

uuid_id! {
    /// Unique identifier for one version snapshot of an item.
    VersionId
}

uuid_id! {
    /// Unique identifier for a review request.
    RequestId
}

uuid_id! {
    /// Unique identifier for an uploaded asset.
    AssetId
}

uuid_id! {
    /// Unique identifier for a workspace user.
    UserId
}
