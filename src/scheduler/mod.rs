//! Simulation driver and metrics.
//!
//! # Algorithm
//!
//! `Simulator` advances an integer clock from t=0, asks the active
//! [`Policy`](crate::dispatching::Policy) for a decision whenever the CPU
//! is free or a slice ends, and records each allocation as a Gantt
//! interval until every process has completed.
//!
//! # Metrics
//!
//! `ProcessResult` holds per-process timing facts (turnaround, waiting,
//! response); `Metrics` holds their means together with context switches,
//! makespan, idle time and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod metrics;
mod simulator;

pub use metrics::{Metrics, ProcessResult};
pub use simulator::{SimulationOutcome, Simulator};
