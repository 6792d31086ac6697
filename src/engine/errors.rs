//! Error types for algorithm runs
//!
//! This module defines [`SortError`], which covers every way a run or a race
//! request can fail. Caller errors ([`SortError::UnknownAlgorithm`],
//! [`SortError::MalformedInput`], [`SortError::EmptyRace`]) are surfaced
//! verbatim. [`SortError::InternalTrace`] means a recorded trace broke one of
//! its own invariants; the run fails closed and no trace is returned.
//!
//! Errors are per run: one failing algorithm never affects another.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The algorithm id is not one of the six supported sorts
    #[error("Unknown algorithm '{id}'")]
    UnknownAlgorithm { id: String },

    /// The input array failed size, range or type validation
    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A race was requested without any algorithm ids
    #[error("No algorithms selected for the race")]
    EmptyRace,

    /// A recorded trace violated its own invariants
    #[error("Internal trace error: {reason}")]
    InternalTrace { reason: String },
}

impl SortError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SortError::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn internal(reason: impl Into<String>) -> Self {
        SortError::InternalTrace {
            reason: reason.into(),
        }
    }

    /// Whether the caller caused this error (as opposed to an engine fault)
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, SortError::InternalTrace { .. })
    }

    /// Message safe to show a user
    ///
    /// Internal failures are reported generically; the detail is logged
    /// where the error is raised.
    pub fn public_message(&self) -> String {
        match self {
            SortError::InternalTrace { .. } => {
                "Sorting failed: the recorded trace was inconsistent".to_string()
            }
            other => other.to_string(),
        }
    }
}
