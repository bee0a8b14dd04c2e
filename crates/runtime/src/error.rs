//! Errors surfaced by encounter operations.
use combat_core::{CombatantId, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("combatant {0} is not part of this encounter")]
    UnknownCombatant(CombatantId),

    #[error("combatant {0} already joined this encounter")]
    DuplicateCombatant(CombatantId),

    #[error("combatant {0} cannot strike itself")]
    SelfTarget(CombatantId),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // The combatant may have left between turns
            Self::UnknownCombatant(_) => ErrorSeverity::Recoverable,
            Self::DuplicateCombatant(_) | Self::SelfTarget(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCombatant(_) => "RUNTIME_UNKNOWN_COMBATANT",
            Self::DuplicateCombatant(_) => "RUNTIME_DUPLICATE_COMBATANT",
            Self::SelfTarget(_) => "RUNTIME_SELF_TARGET",
        }
    }
}
