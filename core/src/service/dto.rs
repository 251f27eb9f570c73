use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ProjectionError};
use crate::model::ProjectionResult;

/// What the service hands back for one user action. The presentation layer
/// matches on this instead of catching errors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success(ProjectionResult),
    Failure { kind: ErrorKind, message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn result(&self) -> Option<&ProjectionResult> {
        match self {
            Outcome::Success(result) => Some(result),
            Outcome::Failure { .. } => None,
        }
    }
}

impl From<Result<ProjectionResult, ProjectionError>> for Outcome {
    fn from(res: Result<ProjectionResult, ProjectionError>) -> Self {
        match res {
            Ok(result) => Outcome::Success(result),
            Err(err) => Outcome::Failure {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}
