//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the chronological sequence of CPU allocations produced
//! by one simulation. Each [`GanttInterval`] is one scheduling decision:
//! adjacent allocations to the same process are kept separate so that
//! the number of decisions stays visible.
//!
//! # Wire Format
//! Intervals serialize as `[pid, start, end]` triples; a timeline
//! serializes as a plain array of triples.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Pid, Time};

/// One contiguous, uninterrupted CPU allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanttInterval {
    /// Process holding the CPU.
    pub pid: Pid,
    /// Allocation start (inclusive).
    pub start: Time,
    /// Allocation end (exclusive).
    pub end: Time,
}

impl GanttInterval {
    /// Creates an interval. `start < end` is expected.
    pub fn new(pid: Pid, start: Time, end: Time) -> Self {
        Self { pid, start, end }
    }

    /// Length of the allocation.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end.saturating_sub(self.start)
    }
}

impl Serialize for GanttInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.pid, self.start, self.end).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GanttInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (pid, start, end) = <(Pid, Time, Time)>::deserialize(deserializer)?;
        if start >= end {
            return Err(serde::de::Error::custom(format!(
                "interval for pid {pid} must satisfy start < end, got [{start}, {end})"
            )));
        }
        Ok(Self { pid, start, end })
    }
}

/// Chronological sequence of CPU allocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<GanttInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an allocation at the end of the timeline.
    pub fn push(&mut self, interval: GanttInterval) {
        self.intervals.push(interval);
    }

    /// All allocations in chronological order.
    pub fn intervals(&self) -> &[GanttInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// End of the last allocation, or 0 for an empty timeline.
    pub fn makespan(&self) -> Time {
        self.intervals.last().map(|i| i.end).unwrap_or(0)
    }

    /// Total time the CPU was allocated, saturating at [`Time::MAX`].
    pub fn busy_time(&self) -> Time {
        let total: i128 = self
            .intervals
            .iter()
            .map(|i| i128::from(i.end) - i128::from(i.start))
            .sum();
        Time::try_from(total).unwrap_or(Time::MAX)
    }

    /// Time within `[0, makespan)` during which nothing ran.
    pub fn idle_time(&self) -> Time {
        self.makespan().saturating_sub(self.busy_time())
    }

    /// Busy time over makespan (0.0..1.0). 0.0 for an empty timeline.
    pub fn utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        self.busy_time() as f64 / makespan as f64
    }

    /// Number of adjacent allocations whose pids differ.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count()
    }

    /// Allocations of a single process, in order.
    pub fn intervals_for(&self, pid: Pid) -> Vec<&GanttInterval> {
        self.intervals.iter().filter(|i| i.pid == pid).collect()
    }

    /// Last allocation end for a process.
    pub fn completion_time(&self, pid: Pid) -> Option<Time> {
        self.intervals
            .iter()
            .rev()
            .find(|i| i.pid == pid)
            .map(|i| i.end)
    }
}
