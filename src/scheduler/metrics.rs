//! Per-process results and aggregate metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Context switches | adjacent intervals with different pids |
//! | Makespan | end of the last interval |
//! | Idle time | makespan - busy time |
//! | CPU utilization | busy time / makespan |
//!
//! Averages are arithmetic means over all processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Pid, ProcessRuntimeState, Time, Timeline};

/// Timing facts for one process after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub pid: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: i32,
    pub completion_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: Time,
    pub response_time: Time,
}

impl ProcessResult {
    /// Derives the result from finished run-time bookkeeping.
    ///
    /// Returns `None` if the process never ran to completion.
    pub fn from_state(state: &ProcessRuntimeState) -> Option<Self> {
        let completion_time = state.completion_time?;
        let first_start = state.first_start?;
        let spec = state.spec;
        let turnaround_time = completion_time - spec.arrival;
        Some(Self {
            pid: spec.pid,
            arrival_time: spec.arrival,
            burst_time: spec.burst,
            priority: spec.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - spec.burst,
            response_time: first_start - spec.arrival,
        })
    }
}

/// Aggregate performance indicators for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
    pub context_switches: usize,
    pub makespan: Time,
    pub idle_time: Time,
    /// Busy time over makespan (0.0..1.0).
    pub cpu_utilization: f64,
}

impl Metrics {
    /// Computes metrics from per-process results and the timeline.
    pub fn calculate(results: &[ProcessResult], timeline: &Timeline) -> Self {
        Self {
            avg_turnaround: mean(results.iter().map(|r| r.turnaround_time)),
            avg_waiting: mean(results.iter().map(|r| r.waiting_time)),
            avg_response: mean(results.iter().map(|r| r.response_time)),
            context_switches: timeline.context_switches(),
            makespan: timeline.makespan(),
            idle_time: timeline.idle_time(),
            cpu_utilization: timeline.utilization(),
        }
    }
}

fn mean(values: impl Iterator<Item = Time>) -> f64 {
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| (s + i128::from(v), c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
