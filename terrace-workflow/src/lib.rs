//! Versioned items and review workflow for Terrace.
//!
//! Defines the lifecycle types the item list and history views consume:
//! - [`Version`] — an immutable snapshot of an item's field values, with
//!   named refs ("latest", "public", user-defined)
//! - [`Request`] / [`RequestState`] — review requests referencing exact
//!   item versions
//! - [`ItemStatus`] and [`derive_statuses`] — computes DRAFT / REVIEW /
//!   PUBLIC per version from refs and outstanding requests
//!
//! Everything here operates on already-fetched records; fetching and
//! mutating them is the API layer's concern.

mod request;
mod status;
mod version;

pub use request::{Request, RequestItem, RequestState};
pub use status::{derive_statuses, status_of, ItemStatus, VersionedItem};
pub use terrace_types::VersionId;
pub use version::{Version, VersionRef};
