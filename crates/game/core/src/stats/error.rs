//! Stat validation errors.

use crate::error::{ErrorSeverity, GameError};

use super::snapshot::StatKind;

/// Errors raised when raw numbers cannot form a [`super::StatsSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    /// A stat that must be non-negative was below zero.
    #[error("{stat} must not be negative (got {value})")]
    Negative {
        /// Offending stat.
        stat: StatKind,
        /// Value supplied by the caller.
        value: i64,
    },

    /// A stat exceeded the representable range.
    #[error("{stat} is out of range (got {value}, max {max})")]
    OutOfRange {
        /// Offending stat.
        stat: StatKind,
        /// Value supplied by the caller.
        value: i64,
        /// Largest accepted value.
        max: u32,
    },
}

impl GameError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Negative { .. } => "STATS_NEGATIVE",
            Self::OutOfRange { .. } => "STATS_OUT_OF_RANGE",
        }
    }
}
