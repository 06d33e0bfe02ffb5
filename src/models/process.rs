//! Process (job) model.
//!
//! A process is a unit of CPU work submitted to the simulator. The submitted
//! description ([`ProcessSpec`]) never changes; progress during a run is
//! tracked in a separate [`ProcessRuntimeState`] owned by the simulator.
//!
//! # Time Representation
//! All times are integer simulated time units relative to t=0.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Process identifier (positive, unique within one simulation).
///
/// Signed so that zero and negative ids on the wire reach validation.
pub type Pid = i64;

/// Simulated time in abstract time units.
pub type Time = i64;

/// A process as submitted for simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub pid: Pid,
    /// Instant the process becomes eligible to run.
    pub arrival: Time,
    /// Total CPU time required.
    pub burst: Time,
    /// Scheduling priority. Whether smaller or larger wins depends on
    /// the configured [`PriorityOrder`](crate::dispatching::PriorityOrder).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process with priority 0.
    pub fn new(pid: Pid, arrival: Time, burst: Time) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Creates fresh run-time bookkeeping for this process.
    pub fn to_runtime(&self) -> ProcessRuntimeState {
        ProcessRuntimeState::new(*self)
    }
}

/// Mutable per-run bookkeeping for one process.
///
/// `remaining` starts at `burst`, never increases, and reaches exactly 0
/// at completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRuntimeState {
    /// The submitted process.
    pub spec: ProcessSpec,
    /// CPU time still required.
    pub remaining: Time,
    /// Time of first CPU allocation.
    pub first_start: Option<Time>,
    /// Time `remaining` reached 0.
    pub completion_time: Option<Time>,
}

impl ProcessRuntimeState {
    /// Creates bookkeeping for a process that has not run yet.
    pub fn new(spec: ProcessSpec) -> Self {
        Self {
            spec,
            remaining: spec.burst,
            first_start: None,
            completion_time: None,
        }
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.spec.pid
    }

    #[inline]
    pub fn arrival(&self) -> Time {
        self.spec.arrival
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn is_arrived(&self, now: Time) -> bool {
        self.spec.arrival <= now
    }

    /// Whether the process has received all of its burst.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the process is eligible for the CPU at `now`.
    #[inline]
    pub fn is_ready(&self, now: Time) -> bool {
        self.is_arrived(now) && !self.is_completed()
    }

    /// Records a CPU allocation of `slice` units starting at `start`.
    ///
    /// Returns the end of the allocation. The caller guarantees
    /// `0 < slice <= remaining`.
    pub fn run_for(&mut self, start: Time, slice: Time) -> Time {
        self.first_start.get_or_insert(start);
        self.remaining -= slice;
        let end = start + slice;
        if self.remaining == 0 {
            self.completion_time = Some(end);
        }
        end
    }
}
