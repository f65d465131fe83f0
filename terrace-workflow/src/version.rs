//! Version snapshots and their named refs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use terrace_types::{ItemId, UserId, VersionId};

/// A named ref attached to a version.
///
/// "latest" marks the current version, "public" marks the published one;
/// anything else is a user-defined ref. Refs serialize as plain strings on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VersionRef {
    Latest,
    Public,
    Named(String),
}

impl From<String> for VersionRef {
    fn from(s: String) -> Self {
        match s.as_str() {
            "latest" => Self::Latest,
            "public" => Self::Public,
            _ => Self::Named(s),
        }
    }
}

impl From<VersionRef> for String {
    fn from(r: VersionRef) -> Self {
        match r {
            VersionRef::Latest => "latest".to_owned(),
            VersionRef::Public => "public".to_owned(),
            VersionRef::Named(s) => s,
        }
    }
}

impl fmt::Display for VersionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Public => f.write_str("public"),
            Self::Named(s) => f.write_str(s),
        }
    }
}

/// An immutable snapshot of an item's field values at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub version: VersionId,
    /// The item this snapshot belongs to.
    pub item_id: ItemId,
    /// Named refs currently pointing at this version.
    #[serde(default)]
    pub refs: Vec<VersionRef>,
    /// The field-value snapshot, keyed by field key.
    pub value: Value,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl Version {
    /// Creates a snapshot with the given payload and no refs.
    #[must_use]
    pub fn new(item_id: ItemId, value: Value, created_by: UserId) -> Self {
        Self {
            version: VersionId::new(),
            item_id,
            refs: Vec::new(),
            value,
            created_at: Utc::now(),
            created_by,
        }
    }

    /// Attaches a ref to this version.
    #[must_use]
    pub fn with_ref(mut self, r: VersionRef) -> Self {
        self.refs.push(r);
        self
    }

    /// True when the "public" ref points at this version.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.refs.contains(&VersionRef::Public)
    }

    /// True when the "latest" ref points at this version.
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.refs.contains(&VersionRef::Latest)
    }
}
