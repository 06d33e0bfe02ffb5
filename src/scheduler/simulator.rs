//! Discrete-time CPU scheduling simulator.
//!
//! # Algorithm
//!
//! 1. Validate the process set and policy parameters.
//! 2. Admit every process whose arrival is due into the ready queue,
//!    in `(arrival, pid)` order. If nothing is ready, jump the clock to
//!    the next arrival (idle time is not recorded as an interval).
//! 3. Ask the policy for a decision and check it: the pid must be ready
//!    and `0 < slice <= remaining`.
//! 4. Record the interval, advance the clock, then admit processes that
//!    arrived during the slice *before* re-enqueueing an unfinished
//!    process at the tail.
//! 5. Repeat until every process has completed.
//!
//! # Complexity
//! O(d * n) where d = number of decisions and n = ready queue length.
//! d is at most n for non-preemptive policies and at most the total
//! burst for preemptive ones.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Metrics, ProcessResult};
use crate::dispatching::{DispatchContext, PendingArrivals, Policy, ReadyQueue};
use crate::error::SimulationError;
use crate::models::{GanttInterval, Pid, ProcessRuntimeState, ProcessSpec, Time, Timeline};
use crate::validation;

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this run.
    pub policy: Policy,
    /// One result per process, ordered by pid ascending.
    pub results: Vec<ProcessResult>,
    /// CPU allocations in chronological order.
    pub timeline: Timeline,
    /// Aggregate metrics.
    pub metrics: Metrics,
}

impl SimulationOutcome {
    /// Result for a given pid.
    pub fn result_for(&self, pid: Pid) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.pid == pid)
    }
}

/// Runs one policy over a process set.
///
/// The simulator holds no state between runs; each call to [`run`](Self::run)
/// builds its own runtime table and timeline.
///
/// # Example
///
/// ```
/// use u_cpusched::dispatching::Policy;
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::Simulator;
///
/// let processes = vec![
///     ProcessSpec::new(1, 0, 5),
///     ProcessSpec::new(2, 1, 3),
///     ProcessSpec::new(3, 2, 1),
/// ];
/// let outcome = Simulator::new(Policy::RoundRobin { quantum: 2 })
///     .run(&processes)
///     .unwrap();
///
/// assert_eq!(outcome.timeline.len(), 6);
/// assert_eq!(outcome.metrics.context_switches, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    policy: Policy,
}

impl Simulator {
    /// Creates a simulator for `policy`.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Simulates `processes` to completion.
    ///
    /// # Errors
    /// - [`SimulationError::Configuration`] if the input fails validation.
    /// - [`SimulationError::InvariantViolation`] if the policy returns an
    ///   impossible decision.
    pub fn run(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError> {
        if let Err(errors) = validation::validate_input(processes, &self.policy) {
            warn!(
                policy = %self.policy,
                issues = errors.len(),
                "rejected simulation request"
            );
            return Err(SimulationError::Configuration(errors));
        }

        let mut states: Vec<ProcessRuntimeState> =
            processes.iter().map(ProcessSpec::to_runtime).collect();
        let mut pending = PendingArrivals::new(&states);
        let mut ready = ReadyQueue::new();
        let mut timeline = Timeline::new();
        let mut now: Time = 0;
        let mut unfinished = states.len();

        while unfinished > 0 {
            pending.admit(now, &mut ready);

            if ready.is_empty() {
                match pending.next_arrival() {
                    Some(next) => {
                        debug!(from = now, to = next, "cpu idle");
                        now = next;
                        continue;
                    }
                    None => {
                        return Err(SimulationError::invariant(format!(
                            "{unfinished} processes unfinished but none ready or pending at t={now}"
                        )));
                    }
                }
            }

            let ctx = DispatchContext {
                now,
                processes: &states,
                ready: &ready,
                next_arrival: pending.next_arrival(),
            };
            let decision = self.policy.decide(&ctx).ok_or_else(|| {
                SimulationError::invariant(format!(
                    "{} made no decision with {} ready processes at t={now}",
                    self.policy,
                    ready.len()
                ))
            })?;

            let position = ready.position_of(&states, decision.pid).ok_or_else(|| {
                SimulationError::invariant(format!(
                    "{} chose pid {} which is not ready at t={now}",
                    self.policy, decision.pid
                ))
            })?;
            let index = ready
                .remove(position)
                .ok_or_else(|| SimulationError::invariant("ready queue position vanished"))?;

            let remaining = states[index].remaining;
            if decision.slice <= 0 || decision.slice > remaining {
                return Err(SimulationError::invariant(format!(
                    "{} gave pid {} a slice of {} with {} remaining at t={now}",
                    self.policy, decision.pid, decision.slice, remaining
                )));
            }

            let start = now;
            if start.checked_add(decision.slice).is_none() {
                return Err(SimulationError::invariant(format!(
                    "pid {} slice of {} at t={now} overflows the time range",
                    decision.pid, decision.slice
                )));
            }
            let end = states[index].run_for(start, decision.slice);
            timeline.push(GanttInterval::new(decision.pid, start, end));
            debug!(pid = decision.pid, start, end, "dispatched");

            now = end;

            // Arrivals during the slice queue ahead of the preempted process
            pending.admit(now, &mut ready);
            if states[index].is_completed() {
                unfinished -= 1;
            } else {
                ready.push_back(index);
            }
        }

        let mut results = states
            .iter()
            .map(|state| {
                ProcessResult::from_state(state).ok_or_else(|| {
                    SimulationError::invariant(format!(
                        "pid {} has no completion time after the run",
                        state.pid()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        results.sort_by_key(|r| r.pid);

        let metrics = Metrics::calculate(&results, &timeline);
        info!(
            policy = %self.policy,
            processes = results.len(),
            intervals = timeline.len(),
            makespan = metrics.makespan,
            context_switches = metrics.context_switches,
            "simulation complete"
        );

        Ok(SimulationOutcome {
            policy: self.policy,
            results,
            timeline,
            metrics,
        })
    }
}
