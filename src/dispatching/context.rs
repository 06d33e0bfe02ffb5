//! Dispatch context passed to scheduling policies.

use super::ReadyQueue;
use crate::models::{ProcessRuntimeState, Time};

/// Snapshot of simulator state at a decision point.
///
/// Borrowed from the simulator for the duration of one decision; a policy
/// never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    /// Current simulated time.
    pub now: Time,
    /// Runtime table indexed by the queue entries.
    pub processes: &'a [ProcessRuntimeState],
    /// Arrived, unfinished processes in admission order.
    pub ready: &'a ReadyQueue,
    /// Earliest arrival still pending (always after `now`).
    pub next_arrival: Option<Time>,
}

impl<'a> DispatchContext<'a> {
    /// Ready processes in queue order.
    pub fn ready_states(&self) -> impl Iterator<Item = &'a ProcessRuntimeState> + 'a {
        let processes = self.processes;
        let ready = self.ready;
        ready.iter().map(move |index| &processes[index])
    }

    /// Ready process minimizing `key`.
    ///
    /// Keys end with the pid, so the minimum is unique.
    pub fn select_min_by_key<K, F>(&self, key: F) -> Option<&'a ProcessRuntimeState>
    where
        K: Ord,
        F: Fn(&ProcessRuntimeState) -> K,
    {
        self.ready_states().min_by_key(|&state| key(state))
    }

    /// Time left before the next arrival, if one is pending.
    pub fn time_to_next_arrival(&self) -> Option<Time> {
        self.next_arrival.map(|t| t - self.now)
    }
}
