//! Review requests referencing exact item versions.

use crate::VersionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use terrace_types::{ItemId, ModelId, RequestId, UserId};

/// Lifecycle state of a review request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    Draft,
    Waiting,
    Approved,
    Closed,
}

impl RequestState {
    /// True for states where the request still awaits a decision.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Draft | Self::Waiting)
    }
}

/// A pointer from a request to one exact item version.
///
/// All three components participate in matching; a request for a different
/// version of the same item does not touch this version's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub item_id: ItemId,
    pub model_id: ModelId,
    pub version: VersionId,
}

/// A review request covering one or more item versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    pub title: String,
    pub state: RequestState,
    pub items: Vec<RequestItem>,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl Request {
    /// Creates a request in the Waiting state covering the given versions.
    #[must_use]
    pub fn waiting(title: impl Into<String>, items: Vec<RequestItem>, created_by: UserId) -> Self {
        Self {
            id: RequestId::new(),
            title: title.into(),
            state: RequestState::Waiting,
            items,
            created_at: Utc::now(),
            created_by,
        }
    }

    /// True when this request is WAITING and references the exact
    /// (item, model, version) triple.
    #[must_use]
    pub fn awaits(&self, item_id: ItemId, model_id: ModelId, version: VersionId) -> bool {
        self.state == RequestState::Waiting
            && self.items.iter().any(|it| {
                it.item_id == item_id && it.model_id == model_id && it.version == version
            })
    }
}
