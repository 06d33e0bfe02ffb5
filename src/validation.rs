//! Input validation for simulation requests.
//!
//! Checks the process set and the policy parameters before any simulated
//! time passes. Detects:
//! - Empty process lists
//! - Duplicate or zero pids
//! - Non-positive bursts and negative arrivals
//! - Non-positive round-robin quanta
//! - Process sets whose horizon (`max(arrival) + sum(burst)`) overflows [`Time`]
//!
//! All issues are collected; a request is never partially simulated.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::dispatching::Policy;
use crate::models::{ProcessSpec, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// No processes were submitted.
    EmptyProcessList,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A pid is not a positive integer.
    InvalidPid,
    /// A burst is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// Round-robin was selected without a quantum.
    MissingQuantum,
    /// The round-robin quantum is zero or negative.
    InvalidQuantum,
    /// Priority scheduling was selected without a priority order.
    MissingPriorityOrder,
    /// The latest possible completion time does not fit in [`Time`].
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. Every pid is positive
/// 3. No duplicate pids
/// 4. Every burst is positive
/// 5. No arrival is negative
/// 6. `max(arrival) + sum(burst)` fits in [`Time`]
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.pid <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                format!("Process ID must be a positive integer, got {}", p.pid),
            ));
        }
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.pid, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.pid, p.arrival),
            ));
        }
    }

    if !processes.is_empty() && horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival plus total burst exceeds the time range (max {})",
                Time::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every simulated instant: no interval ends after the
/// latest arrival plus the total burst.
fn horizon(processes: &[ProcessSpec]) -> Option<Time> {
    let latest = processes.iter().map(|p| p.arrival.max(0)).max()?;
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst.max(0)))
}

/// Validates policy parameters.
pub fn validate_policy(policy: &Policy) -> ValidationResult {
    match *policy {
        Policy::RoundRobin { quantum } if quantum <= 0 => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be a positive integer, got {quantum}"),
        )]),
        _ => Ok(()),
    }
}

/// Validates a process set together with the policy that will run it.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessSpec], policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_processes(processes) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_policy(policy) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 0, 5),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), &Policy::Fcfs).is_ok());
        assert!(validate_input(&sample_processes(), &Policy::RoundRobin { quantum: 1 }).is_ok());
    }

    #[test]
    fn test_empty_process_list() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessList);
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(1, 3, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid && e.message.contains('1')));
    }

    #[test]
    fn test_zero_pid() {
        let errors = validate_processes(&[ProcessSpec::new(0, 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidPid);
    }

    #[test]
    fn test_negative_pid() {
        let errors = validate_processes(&[ProcessSpec::new(-4, 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidPid);
        assert!(errors[0].message.contains("-4"));
    }

    #[test]
    fn test_horizon_overflow() {
        let late = vec![ProcessSpec::new(1, Time::MAX - 2, 5)];
        let errors = validate_processes(&late).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let huge = Time::MAX / 2 + 1;
        let long = vec![ProcessSpec::new(1, 0, huge), ProcessSpec::new(2, 0, huge)];
        let errors = validate_processes(&long).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let processes = vec![ProcessSpec::new(1, Time::MAX - 5, 5)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![ProcessSpec::new(1, 0, 0), ProcessSpec::new(2, 0, -4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[ProcessSpec::new(1, -1, 3)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_invalid_quantum() {
        for quantum in [0, -3] {
            let errors = validate_policy(&Policy::RoundRobin { quantum }).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate pid + bad burst + bad quantum
        let processes = vec![ProcessSpec::new(1, 0, 0), ProcessSpec::new(1, 0, 2)];
        let errors = validate_input(&processes, &Policy::RoundRobin { quantum: 0 }).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
