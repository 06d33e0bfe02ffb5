//! Random workload generation.
//!
//! Produces valid, reproducible process sets for demos and tests.
//! Pids are assigned `1..=count` in generation order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Pid, ProcessSpec, Time};

/// Bounds for generated processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadShape {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time (inclusive).
    pub max_arrival: Time,
    /// Longest burst (inclusive). Bursts start at 1.
    pub max_burst: Time,
    /// Smallest priority value (inclusive).
    pub min_priority: i32,
    /// Largest priority value (inclusive).
    pub max_priority: i32,
}

impl Default for WorkloadShape {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
            min_priority: 0,
            max_priority: 5,
        }
    }
}

impl WorkloadShape {
    /// Creates the default shape with `count` processes.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: Time) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest burst.
    pub fn with_max_burst(mut self, max_burst: Time) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }
}

/// Generates a random process set within `shape`.
///
/// Out-of-range bounds are clamped so that every generated process is
/// valid (`arrival >= 0`, `burst >= 1`).
pub fn random_workload<R: Rng>(rng: &mut R, shape: &WorkloadShape) -> Vec<ProcessSpec> {
    let max_arrival = shape.max_arrival.max(0);
    let max_burst = shape.max_burst.max(1);
    let (lo, hi) = if shape.min_priority <= shape.max_priority {
        (shape.min_priority, shape.max_priority)
    } else {
        (shape.max_priority, shape.min_priority)
    };

    (1..=shape.count)
        .map(|i| {
            ProcessSpec::new(
                i as Pid,
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
            )
            .with_priority(rng.random_range(lo..=hi))
        })
        .collect()
}
