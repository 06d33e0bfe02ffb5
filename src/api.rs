//! Request/response contract for hosts (HTTP handlers, CLIs).
//!
//! # Wire Format
//!
//! Request:
//! ```json
//! {
//!   "processes": [{"pid": 1, "arrival": 0, "burst": 5, "priority": 0}],
//!   "algorithm": "RoundRobin",
//!   "timeQuantum": 2,
//!   "priorityOrder": "lower"
//! }
//! ```
//!
//! Response:
//! ```json
//! {
//!   "metrics": {"avgTurnaround": 5.0, "avgWaiting": 0.0, "avgResponse": 0.0,
//!               "contextSwitches": 0, "makespan": 5, "idleTime": 0, "cpuUtilization": 1.0},
//!   "processDetails": [{"pid": 1, "arrivalTime": 0, "burstTime": 5, "priority": 0,
//!                       "completionTime": 5, "turnaroundTime": 5, "waitingTime": 0,
//!                       "responseTime": 0}],
//!   "ganttChart": [[1, 0, 2], [1, 2, 4], [1, 4, 5]]
//! }
//! ```
//!
//! `timeQuantum` is required for `RoundRobin` and `priorityOrder` for
//! `Priority`; both are ignored for other algorithms.
//!
//! Zero or negative `pid`s parse and are rejected by validation as
//! `invalid_pid`. A `pid` that is not an integer fails in the JSON parser
//! before any validation runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dispatching::{Policy, PriorityOrder};
use crate::error::SimulationError;
use crate::models::{ProcessSpec, Time, Timeline};
use crate::scheduler::{Metrics, ProcessResult, SimulationOutcome, Simulator};
use crate::validation::{self, ValidationError, ValidationErrorKind};

/// Algorithm name as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SJF")]
    Sjf,
    #[serde(rename = "SRTF")]
    Srtf,
    Priority,
    RoundRobin,
}

impl Algorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::Priority => "Priority",
            Self::RoundRobin => "RoundRobin",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srtf" | "psjf" => Ok(Self::Srtf),
            "priority" | "prio" => Ok(Self::Priority),
            "roundrobin" | "round_robin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(format!(
                "Invalid algorithm '{s}'. Valid: FCFS, SJF, SRTF, Priority, RoundRobin"
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<ProcessSpec>,
    /// Scheduling algorithm.
    pub algorithm: Algorithm,
    /// Round-robin quantum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<Time>,
    /// Direction of the priority scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_order: Option<PriorityOrder>,
}

impl SimulationRequest {
    /// Creates a request without policy parameters.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            time_quantum: None,
            priority_order: None,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_time_quantum(mut self, quantum: Time) -> Self {
        self.time_quantum = Some(quantum);
        self
    }

    /// Sets the priority order.
    pub fn with_priority_order(mut self, order: PriorityOrder) -> Self {
        self.priority_order = Some(order);
        self
    }

    /// Resolves the algorithm and its parameters into a [`Policy`].
    pub fn policy(&self) -> Result<Policy, Vec<ValidationError>> {
        let policy = match self.algorithm {
            Algorithm::Fcfs => Policy::Fcfs,
            Algorithm::Sjf => Policy::Sjf,
            Algorithm::Srtf => Policy::Srtf,
            Algorithm::Priority => Policy::Priority {
                order: self.priority_order.ok_or_else(|| {
                    vec![ValidationError::new(
                        ValidationErrorKind::MissingPriorityOrder,
                        "Priority order (lower|higher) is required for Priority scheduling",
                    )]
                })?,
            },
            Algorithm::RoundRobin => Policy::RoundRobin {
                quantum: self.time_quantum.ok_or_else(|| {
                    vec![ValidationError::new(
                        ValidationErrorKind::MissingQuantum,
                        "Time quantum is required for RoundRobin scheduling",
                    )]
                })?,
            },
        };
        validation::validate_policy(&policy)?;
        Ok(policy)
    }
}

/// A simulation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    pub metrics: Metrics,
    /// Ordered by pid ascending.
    pub process_details: Vec<ProcessResult>,
    /// `[pid, start, end]` triples in chronological order.
    pub gantt_chart: Timeline,
}

impl From<SimulationOutcome> for SimulationResponse {
    fn from(outcome: SimulationOutcome) -> Self {
        Self {
            metrics: outcome.metrics,
            process_details: outcome.results,
            gantt_chart: outcome.timeline,
        }
    }
}

/// Runs a request end to end.
///
/// Policy and process issues are reported together in one
/// [`SimulationError::Configuration`].
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResponse, SimulationError> {
    let policy = match request.policy() {
        Ok(policy) => policy,
        Err(mut errors) => {
            if let Err(mut more) = validation::validate_processes(&request.processes) {
                errors.append(&mut more);
            }
            return Err(SimulationError::Configuration(errors));
        }
    };

    Simulator::new(policy)
        .run(&request.processes)
        .map(SimulationResponse::from)
}
