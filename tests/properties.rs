//! Universal timeline and metric properties across all policies.

use proptest::prelude::*;

use u_cpusched::dispatching::{Policy, PriorityOrder};
use u_cpusched::models::{Pid, ProcessSpec, Time};
use u_cpusched::scheduler::{SimulationOutcome, Simulator};

fn process_set() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..20, 1i64..10, -3i32..4), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(i as Pid + 1, arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn any_policy() -> impl Strategy<Value = Policy> {
    prop_oneof![
        Just(Policy::Fcfs),
        Just(Policy::Sjf),
        Just(Policy::Srtf),
        prop_oneof![Just(PriorityOrder::Lower), Just(PriorityOrder::Higher)]
            .prop_map(|order| Policy::Priority { order }),
        (1i64..6).prop_map(|quantum| Policy::RoundRobin { quantum }),
    ]
}

fn run(policy: Policy, processes: &[ProcessSpec]) -> SimulationOutcome {
    Simulator::new(policy)
        .run(processes)
        .expect("generated input is valid")
}

proptest! {
    #[test]
    fn intervals_are_chronological_and_account_for_every_burst(
        processes in process_set(),
        policy in any_policy(),
    ) {
        let outcome = run(policy, &processes);
        let intervals = outcome.timeline.intervals();

        for i in intervals {
            prop_assert!(i.start < i.end);
        }
        for pair in intervals.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }

        let total_burst: Time = processes.iter().map(|p| p.burst).sum();
        prop_assert_eq!(outcome.timeline.busy_time(), total_burst);
        prop_assert_eq!(
            outcome.metrics.makespan - outcome.metrics.idle_time,
            total_burst
        );

        for p in &processes {
            let received: Time = outcome
                .timeline
                .intervals_for(p.pid)
                .iter()
                .map(|i| i.duration())
                .sum();
            prop_assert_eq!(received, p.burst);
        }
    }

    #[test]
    fn no_interval_starts_before_its_process_arrives(
        processes in process_set(),
        policy in any_policy(),
    ) {
        let outcome = run(policy, &processes);
        for i in outcome.timeline.intervals() {
            let spec = processes.iter().find(|p| p.pid == i.pid).unwrap();
            prop_assert!(i.start >= spec.arrival);
        }
    }

    #[test]
    fn per_process_times_are_consistent(
        processes in process_set(),
        policy in any_policy(),
    ) {
        let outcome = run(policy, &processes);
        prop_assert_eq!(outcome.results.len(), processes.len());

        for r in &outcome.results {
            prop_assert!(r.completion_time >= r.arrival_time + r.burst_time);
            prop_assert!(r.waiting_time >= 0);
            prop_assert!(r.response_time >= 0);
            prop_assert!(r.response_time <= r.waiting_time);
            prop_assert_eq!(r.turnaround_time, r.completion_time - r.arrival_time);
            prop_assert_eq!(r.waiting_time, r.turnaround_time - r.burst_time);
            prop_assert_eq!(Some(r.completion_time), outcome.timeline.completion_time(r.pid));
        }

        let pids: Vec<Pid> = outcome.results.iter().map(|r| r.pid).collect();
        let mut sorted = pids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(pids, sorted);
    }

    #[test]
    fn non_preemptive_policies_make_one_decision_per_process(
        processes in process_set(),
        order in prop_oneof![Just(PriorityOrder::Lower), Just(PriorityOrder::Higher)],
    ) {
        for policy in [Policy::Fcfs, Policy::Sjf, Policy::Priority { order }] {
            let outcome = run(policy, &processes);
            prop_assert_eq!(outcome.timeline.len(), processes.len());
        }
    }

    #[test]
    fn round_robin_slices_never_exceed_quantum(
        processes in process_set(),
        quantum in 1i64..6,
    ) {
        let outcome = run(Policy::RoundRobin { quantum }, &processes);
        for i in outcome.timeline.intervals() {
            prop_assert!(i.duration() <= quantum);
        }
    }

    #[test]
    fn no_gaps_when_everything_arrives_at_zero(
        bursts in prop::collection::vec(1i64..10, 1..10),
        policy in any_policy(),
    ) {
        let processes: Vec<ProcessSpec> = bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| ProcessSpec::new(i as Pid + 1, 0, b))
            .collect();
        let outcome = run(policy, &processes);

        let mut cursor = 0;
        for i in outcome.timeline.intervals() {
            prop_assert_eq!(i.start, cursor);
            cursor = i.end;
        }
        prop_assert_eq!(cursor, bursts.iter().sum::<Time>());
        prop_assert_eq!(outcome.metrics.idle_time, 0);
    }

    #[test]
    fn output_independent_of_input_order(
        processes in process_set(),
        policy in any_policy(),
    ) {
        let mut reversed = processes.clone();
        reversed.reverse();
        prop_assert_eq!(run(policy, &processes), run(policy, &reversed));
    }

    #[test]
    fn repeated_runs_serialize_identically(
        processes in process_set(),
        policy in any_policy(),
    ) {
        let first = serde_json::to_string(&run(policy, &processes)).unwrap();
        let second = serde_json::to_string(&run(policy, &processes)).unwrap();
        prop_assert_eq!(first, second);
    }
}
