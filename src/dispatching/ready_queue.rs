//! Ready and arrival queues.
//!
//! The ready queue holds arrived, unfinished processes in admission order.
//! Round-robin dispatches strictly from its head; the other policies scan
//! it by key. Processes enter it from [`PendingArrivals`] in
//! `(arrival, pid)` order.
//!
//! Both queues store indices into the simulator's runtime table.

use std::collections::VecDeque;

use crate::models::{Pid, ProcessRuntimeState, Time};

/// FIFO of ready process indices.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    entries: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a process at the tail.
    pub fn push_back(&mut self, index: usize) {
        self.entries.push_back(index);
    }

    /// Removes the entry at queue position `position`.
    pub fn remove(&mut self, position: usize) -> Option<usize> {
        self.entries.remove(position)
    }

    /// Queue position of the process with `pid`, if it is queued.
    pub fn position_of(&self, processes: &[ProcessRuntimeState], pid: Pid) -> Option<usize> {
        self.entries
            .iter()
            .position(|&index| processes[index].pid() == pid)
    }

    /// Indices in queue order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Processes that have not arrived yet, ordered by `(arrival, pid)`.
#[derive(Debug, Clone, Default)]
pub struct PendingArrivals {
    queue: VecDeque<(Time, usize)>,
}

impl PendingArrivals {
    /// Builds the arrival order for a runtime table.
    pub fn new(processes: &[ProcessRuntimeState]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival(), processes[i].pid()));
        Self {
            queue: order
                .into_iter()
                .map(|i| (processes[i].arrival(), i))
                .collect(),
        }
    }

    /// Earliest arrival not yet admitted.
    pub fn next_arrival(&self) -> Option<Time> {
        self.queue.front().map(|&(arrival, _)| arrival)
    }

    /// Moves every process with `arrival <= now` into `ready`.
    ///
    /// Returns the number of admitted processes.
    pub fn admit(&mut self, now: Time, ready: &mut ReadyQueue) -> usize {
        let mut admitted = 0;
        while let Some(&(arrival, index)) = self.queue.front() {
            if arrival > now {
                break;
            }
            self.queue.pop_front();
            ready.push_back(index);
            admitted += 1;
        }
        admitted
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn table(specs: &[(Pid, Time, Time)]) -> Vec<ProcessRuntimeState> {
        specs
            .iter()
            .map(|&(pid, arrival, burst)| ProcessSpec::new(pid, arrival, burst).to_runtime())
            .collect()
    }

    #[test]
    fn test_arrivals_ordered_by_time_then_pid() {
        // Input order deliberately scrambled
        let processes = table(&[(3, 2, 1), (2, 0, 1), (1, 2, 1), (4, 0, 1)]);
        let mut pending = PendingArrivals::new(&processes);
        let mut ready = ReadyQueue::new();

        assert_eq!(pending.next_arrival(), Some(0));
        assert_eq!(pending.admit(0, &mut ready), 2);
        let pids: Vec<Pid> = ready.iter().map(|i| processes[i].pid()).collect();
        assert_eq!(pids, vec![2, 4]);

        assert_eq!(pending.admit(1, &mut ready), 0);
        assert_eq!(pending.next_arrival(), Some(2));
        assert_eq!(pending.admit(5, &mut ready), 2);
        let pids: Vec<Pid> = ready.iter().map(|i| processes[i].pid()).collect();
        assert_eq!(pids, vec![2, 4, 1, 3]);
        assert!(pending.is_empty());
        assert_eq!(pending.next_arrival(), None);
    }

    #[test]
    fn test_ready_queue_fifo_and_remove() {
        let processes = table(&[(1, 0, 1), (2, 0, 1), (3, 0, 1)]);
        let mut ready = ReadyQueue::new();
        for i in 0..3 {
            ready.push_back(i);
        }

        assert_eq!(ready.iter().next(), Some(0));
        let pos = ready.position_of(&processes, 2).unwrap();
        assert_eq!(ready.remove(pos), Some(1));
        assert_eq!(ready.len(), 2);
        assert_eq!(ready.position_of(&processes, 2), None);

        ready.push_back(1);
        let order: Vec<usize> = ready.iter().collect();
        assert_eq!(order, vec![0, 2, 1]);
    }
}
