//! Lifecycle status derivation.
//!
//! Status is not stored anywhere; it is derived per version from the
//! version's refs and the set of outstanding review requests. The rule
//! ordering is a policy choice: a version that is both published and under
//! review reports PUBLIC.

use crate::{Request, Version};
use serde::{Deserialize, Serialize};
use terrace_types::{ModelId, RequestId};

/// Derived lifecycle state of one item version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Draft,
    Review,
    Public,
}

/// A version paired with its derived status and the requests awaiting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedItem {
    pub version: Version,
    pub status: ItemStatus,
    /// Ids of WAITING requests referencing this exact version.
    pub open_requests: Vec<RequestId>,
}

/// Derives the status of a single version.
///
/// Priority order, first match wins: public ref → PUBLIC, any WAITING
/// request matching the exact (item, model, version) triple → REVIEW,
/// otherwise DRAFT. Every version receives exactly one status.
#[must_use]
pub fn status_of(version: &Version, model_id: ModelId, requests: &[Request]) -> ItemStatus {
    if version.is_public() {
        return ItemStatus::Public;
    }
    let waiting = requests
        .iter()
        .any(|r| r.awaits(version.item_id, model_id, version.version));
    if waiting {
        ItemStatus::Review
    } else {
        ItemStatus::Draft
    }
}

/// Derives statuses for a sequence of versions.
///
/// Input order is preserved; callers supply versions newest-first and the
/// first element is the current version. No sorting happens here.
#[must_use]
pub fn derive_statuses(
    model_id: ModelId,
    versions: &[Version],
    requests: &[Request],
) -> Vec<VersionedItem> {
    versions
        .iter()
        .map(|version| {
            let open_requests: Vec<RequestId> = requests
                .iter()
                .filter(|r| r.awaits(version.item_id, model_id, version.version))
                .map(|r| r.id)
                .collect();
            let status = status_of(version, model_id, requests);
            tracing::debug!(
                version = %version.version,
                ?status,
                open = open_requests.len(),
                "derived version status"
            );
            VersionedItem {
                version: version.clone(),
                status,
                open_requests,
            }
        })
        .collect()
}
