use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a failed calculation, for callers that only
/// need to branch on the kind of failure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Computation,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Computation failed: balance is no longer finite at month {month}")]
    NonFinite { month: u32 },
}

impl ProjectionError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectionError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ProjectionError::NonFinite { .. } => ErrorKind::Computation,
        }
    }
}
