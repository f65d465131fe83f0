//! Filter condition model for Terrace content queries.
//!
//! A content list filter is a set of field comparisons combined by logical
//! AND. The same filter exists in two isomorphic shapes:
//! - [`WireCondition`] — the transport shape dictated by the external API:
//!   a `__typename`-discriminated object with `${kind}Operator` /
//!   `${kind}Value` keys
//! - [`Condition`] — the client query-builder shape: one key per condition
//!   kind wrapping `{fieldId, operator, value}`
//!
//! Translation between the two is total and lossless ([`and_to_client`] /
//! [`and_to_wire`]); an
//! unrecognized `__typename` falls back to the generic `basic` bucket
//! rather than failing, and an empty or absent filter collapses to `None`.

mod client;
mod operator;
mod translate;
mod wire;

pub use client::{
    BasicCondition, BoolCondition, Condition, MultipleCondition, NullableCondition,
    NumberCondition, StringCondition, TimeCondition,
};
pub use operator::{
    BasicOperator, BoolOperator, FieldScope, FieldSelector, MultipleOperator, NullableOperator,
    NumberOperator, StringOperator, TimeOperator,
};
pub use translate::{and_to_client, and_to_wire};
pub use wire::{AndCondition, WireCondition};
