//! Lossless translation between the wire and client condition shapes.
//!
//! Both directions are total matches over closed enums; adding a condition
//! kind fails compilation here until both arms exist. Field references,
//! operators, and values are carried over untouched — no coercion.

use crate::client::{
    BasicCondition, BoolCondition, Condition, MultipleCondition, NullableCondition,
    NumberCondition, StringCondition, TimeCondition,
};
use crate::wire::{AndCondition, WireCondition};

impl WireCondition {
    /// Translates this condition into the client shape.
    #[must_use]
    pub fn to_client(&self) -> Condition {
        match self.clone() {
            Self::String {
                field_id,
                string_operator,
                string_value,
            } => Condition::String(StringCondition {
                field_id,
                operator: string_operator,
                value: string_value,
            }),
            Self::Number {
                field_id,
                number_operator,
                number_value,
            } => Condition::Number(NumberCondition {
                field_id,
                operator: number_operator,
                value: number_value,
            }),
            Self::Bool {
                field_id,
                bool_operator,
                bool_value,
            } => Condition::Bool(BoolCondition {
                field_id,
                operator: bool_operator,
                value: bool_value,
            }),
            Self::Time {
                field_id,
                time_operator,
                time_value,
            } => Condition::Time(TimeCondition {
                field_id,
                operator: time_operator,
                value: time_value,
            }),
            Self::Multiple {
                field_id,
                multiple_operator,
                multiple_value,
            } => Condition::Multiple(MultipleCondition {
                field_id,
                operator: multiple_operator,
                value: multiple_value,
            }),
            Self::Nullable {
                field_id,
                nullable_operator,
            } => Condition::Nullable(NullableCondition {
                field_id,
                operator: nullable_operator,
            }),
            Self::Basic {
                field_id,
                basic_operator,
                basic_value,
            } => Condition::Basic(BasicCondition {
                field_id,
                operator: basic_operator,
                value: basic_value,
            }),
        }
    }
}

impl Condition {
    /// Translates this condition back into the transport shape.
    #[must_use]
    pub fn to_wire(&self) -> WireCondition {
        match self.clone() {
            Self::String(c) => WireCondition::String {
                field_id: c.field_id,
                string_operator: c.operator,
                string_value: c.value,
            },
            Self::Number(c) => WireCondition::Number {
                field_id: c.field_id,
                number_operator: c.operator,
                number_value: c.value,
            },
            Self::Bool(c) => WireCondition::Bool {
                field_id: c.field_id,
                bool_operator: c.operator,
                bool_value: c.value,
            },
            Self::Time(c) => WireCondition::Time {
                field_id: c.field_id,
                time_operator: c.operator,
                time_value: c.value,
            },
            Self::Multiple(c) => WireCondition::Multiple {
                field_id: c.field_id,
                multiple_operator: c.operator,
                multiple_value: c.value,
            },
            Self::Nullable(c) => WireCondition::Nullable {
                field_id: c.field_id,
                nullable_operator: c.operator,
            },
            Self::Basic(c) => WireCondition::Basic {
                field_id: c.field_id,
                basic_operator: c.operator,
                basic_value: c.value,
            },
        }
    }
}

/// Translates a whole AND filter into client conditions.
///
/// An absent filter and a filter with zero conditions are equivalent: both
/// return `None`, never an empty structure.
#[must_use]
pub fn and_to_client(filter: Option<&AndCondition>) -> Option<Vec<Condition>> {
    let filter = filter?;
    if filter.is_empty() {
        return None;
    }
    Some(filter.conditions.iter().map(WireCondition::to_client).collect())
}

/// Rebuilds the wire AND filter from client conditions.
///
/// Returns `None` for an empty condition list so "no filter" and "empty
/// filter" stay indistinguishable on the wire.
#[must_use]
pub fn and_to_wire(conditions: &[Condition]) -> Option<AndCondition> {
    if conditions.is_empty() {
        return None;
    }
    Some(AndCondition::new(
        conditions.iter().map(Condition::to_wire).collect(),
    ))
}
