//! Simulation error types.

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a simulation request.
///
/// Serializes as `{"kind": ..., "details": ...}` for transport layers.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    /// The request was rejected before simulation started.
    #[error("invalid configuration: {}", join_messages(.0))]
    Configuration(Vec<ValidationError>),

    /// A policy produced an impossible decision; the run was aborted.
    #[error("scheduler invariant violated: {0}")]
    InvariantViolation(String),
}

/// Discriminant of [`SimulationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    InvariantViolation,
}

impl SimulationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::InvariantViolation(_) => ErrorKind::InvariantViolation,
        }
    }

    /// Validation issues behind a configuration error (empty otherwise).
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Configuration(errors) => errors,
            Self::InvariantViolation(_) => &[],
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Configuration(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
