//! Scheduling policies.
//!
//! The policy set is closed: every variant answers the same question
//! ("which ready process runs next, and for how long?") from a
//! [`DispatchContext`] and returns a [`Decision`].
//!
//! | Policy | Preemptive | Selection | Slice |
//! |--------|-----------|-----------|-------|
//! | FCFS | no | (arrival, pid) | remaining |
//! | SJF | no | (remaining, arrival, pid) | remaining |
//! | SRTF | yes | (remaining, arrival, pid) | until next arrival |
//! | Priority | no | (ranked priority, arrival, pid) | remaining |
//! | Round-Robin | yes | queue head | min(remaining, quantum) |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::{self, PriorityOrder};
use super::DispatchContext;
use crate::models::{Pid, ProcessRuntimeState, Time};

/// One scheduling decision: run `pid` for `slice` time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub pid: Pid,
    pub slice: Time,
}

impl Decision {
    pub fn new(pid: Pid, slice: Time) -> Self {
        Self { pid, slice }
    }

    /// Runs the process for all of its remaining burst.
    pub fn to_completion(state: &ProcessRuntimeState) -> Self {
        Self::new(state.pid(), state.remaining)
    }
}

/// A CPU scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First come, first served.
    Fcfs,
    /// Shortest job first (non-preemptive).
    Sjf,
    /// Shortest remaining time first (preemptive SJF).
    Srtf,
    /// Static priority (non-preemptive).
    Priority { order: PriorityOrder },
    /// Round-robin with a fixed time quantum.
    RoundRobin { quantum: Time },
}

impl Policy {
    /// Short display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::Priority { .. } => "Priority",
            Self::RoundRobin { .. } => "RoundRobin",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }

    /// Chooses the next process and slice length.
    ///
    /// Returns `None` only when the ready queue is empty.
    pub fn decide(&self, ctx: &DispatchContext<'_>) -> Option<Decision> {
        match *self {
            Self::Fcfs => ctx
                .select_min_by_key(rules::fifo)
                .map(Decision::to_completion),
            Self::Sjf => ctx
                .select_min_by_key(rules::shortest_remaining)
                .map(Decision::to_completion),
            Self::Priority { order } => ctx
                .select_min_by_key(|s| rules::priority(s, order))
                .map(Decision::to_completion),
            Self::RoundRobin { quantum } => ctx
                .ready_states()
                .next()
                .map(|s| Decision::new(s.pid(), s.remaining.min(quantum))),
            Self::Srtf => ctx
                .select_min_by_key(rules::shortest_remaining)
                .map(|s| {
                    // Re-decide at the next arrival; it may have a shorter burst
                    let slice = match ctx.time_to_next_arrival() {
                        Some(gap) if gap > 0 => s.remaining.min(gap),
                        _ => s.remaining,
                    };
                    Decision::new(s.pid(), slice)
                }),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority { order } => write!(f, "Priority({order})"),
            Self::RoundRobin { quantum } => write!(f, "RoundRobin(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}
