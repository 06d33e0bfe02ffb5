//! Built-in selection rules.
//!
//! Each rule maps a ready process to an ordering key; the policy runs the
//! process with the smallest key. Every key ends with `(arrival, pid)` or
//! `pid`, so equal primary values resolve deterministically and never
//! depend on input order.
//!
//! | Rule | Key |
//! |------|-----|
//! | FIFO | (arrival, pid) |
//! | Shortest remaining | (remaining, arrival, pid) |
//! | Priority | (ranked priority, arrival, pid) |
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Pid, ProcessRuntimeState, Time};

/// Which end of the priority scale is more important.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityOrder {
    /// Smaller number wins.
    #[default]
    Lower,
    /// Larger number wins.
    Higher,
}

impl PriorityOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Higher => "higher",
        }
    }

    /// Maps a raw priority onto a scale where smaller always wins.
    #[inline]
    pub fn rank(&self, priority: i32) -> i64 {
        match self {
            Self::Lower => i64::from(priority),
            Self::Higher => -i64::from(priority),
        }
    }
}

impl FromStr for PriorityOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" | "low" | "asc" => Ok(Self::Lower),
            "higher" | "high" | "desc" => Ok(Self::Higher),
            _ => Err(format!("Invalid priority order '{s}'. Valid: lower, higher")),
        }
    }
}

impl fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First come, first served.
#[inline]
pub fn fifo(state: &ProcessRuntimeState) -> (Time, Pid) {
    (state.arrival(), state.pid())
}

/// Shortest remaining burst.
///
/// For a process that has not run yet this is its full burst, which makes
/// it the SJF key as well.
#[inline]
pub fn shortest_remaining(state: &ProcessRuntimeState) -> (Time, Time, Pid) {
    (state.remaining, state.arrival(), state.pid())
}

/// Most important priority under `order`.
#[inline]
pub fn priority(state: &ProcessRuntimeState, order: PriorityOrder) -> (i64, Time, Pid) {
    (
        order.rank(state.spec.priority),
        state.arrival(),
        state.pid(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn state(pid: Pid, arrival: Time, burst: Time, prio: i32) -> ProcessRuntimeState {
        ProcessSpec::new(pid, arrival, burst)
            .with_priority(prio)
            .to_runtime()
    }

    #[test]
    fn test_fifo_ties_by_pid() {
        let a = state(2, 0, 5, 0);
        let b = state(1, 0, 9, 0);
        assert!(fifo(&b) < fifo(&a));
        assert!(fifo(&state(9, 0, 1, 0)) < fifo(&state(1, 1, 1, 0)));
    }

    #[test]
    fn test_shortest_remaining_uses_current_remaining() {
        let mut long = state(1, 0, 10, 0);
        let short = state(2, 0, 4, 0);
        assert!(shortest_remaining(&short) < shortest_remaining(&long));

        long.run_for(0, 7);
        assert!(shortest_remaining(&long) < shortest_remaining(&short));
    }

    #[test]
    fn test_shortest_remaining_ties() {
        // Same remaining → earlier arrival → smaller pid
        assert!(shortest_remaining(&state(5, 1, 3, 0)) < shortest_remaining(&state(2, 2, 3, 0)));
        assert!(shortest_remaining(&state(2, 1, 3, 0)) < shortest_remaining(&state(5, 1, 3, 0)));
    }

    #[test]
    fn test_priority_order_direction() {
        let urgent_low = state(1, 0, 1, 1);
        let urgent_high = state(2, 0, 1, 9);
        assert!(
            priority(&urgent_low, PriorityOrder::Lower) < priority(&urgent_high, PriorityOrder::Lower)
        );
        assert!(
            priority(&urgent_high, PriorityOrder::Higher)
                < priority(&urgent_low, PriorityOrder::Higher)
        );
    }

    #[test]
    fn test_priority_rank_extremes() {
        // Negating i32::MIN must not overflow
        assert_eq!(PriorityOrder::Higher.rank(i32::MIN), 2_147_483_648);
        assert_eq!(PriorityOrder::Lower.rank(i32::MIN), -2_147_483_648);
    }

    #[test]
    fn test_priority_order_parse() {
        assert_eq!("lower".parse::<PriorityOrder>().unwrap(), PriorityOrder::Lower);
        assert_eq!("HIGHER".parse::<PriorityOrder>().unwrap(), PriorityOrder::Higher);
        assert!("sideways".parse::<PriorityOrder>().is_err());
        assert_eq!(
            serde_json::to_string(&PriorityOrder::Higher).unwrap(),
            "\"higher\""
        );
    }
}
