//! # Error Types
//!
//! Every fallible operation in boltfix returns `Result<T, FixtureError>`.
//!
//! - No silent failures
//! - Each failure kind is a distinct variant so callers can match on it
//! - Errors are `Clone` so a memoised failure can be handed out again

use crate::collector::{Phase, PhaseState};
use thiserror::Error;

/// Errors that can occur while building or consuming a synthetic result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// A row literal has a runtime type outside the closed value model.
    #[error("Unsupported value kind: {type_name}")]
    UnsupportedValueKind {
        /// Rust type name of the rejected literal.
        type_name: String,
    },

    /// A phase transition was requested out of order.
    #[error("Protocol violation in {phase} phase ({state}): cannot {action}")]
    ProtocolViolation {
        /// The phase whose collector rejected the call.
        phase: Phase,
        /// The state that collector was in.
        state: PhaseState,
        /// What the caller attempted.
        action: &'static str,
    },

    /// A collector hook could not be resolved on the cursor type.
    #[error("Privileged access failure: {0}")]
    PrivilegedAccessFailure(String),

    /// `single()` was called on a cursor without exactly one remaining record.
    #[error("No such record: {0}")]
    NoSuchRecord(String),

    /// A result spec or configuration file could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FixtureError {
    pub(crate) fn violation(phase: Phase, state: PhaseState, action: &'static str) -> Self {
        Self::ProtocolViolation {
            phase,
            state,
            action,
        }
    }
}
