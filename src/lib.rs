//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Given a set of processes (arrival, burst, priority) and a scheduling
//! policy, computes an exact, deterministic execution timeline and the
//! per-process and aggregate performance metrics derived from it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessRuntimeState`,
//!   `GanttInterval`, `Timeline`, random workloads
//! - **`dispatching`**: `Policy` (FCFS, SJF, SRTF, Priority, Round-Robin),
//!   selection rules, ready/arrival queues
//! - **`scheduler`**: `Simulator` driver and `Metrics`
//! - **`validation`**: Input integrity checks (empty input, duplicate pids,
//!   bursts, arrivals, quanta)
//! - **`api`**: JSON request/response contract for hosts
//!
//! # Example
//!
//! ```
//! use u_cpusched::api::{simulate, Algorithm, SimulationRequest};
//! use u_cpusched::models::ProcessSpec;
//!
//! let request = SimulationRequest::new(
//!     vec![
//!         ProcessSpec::new(1, 0, 5),
//!         ProcessSpec::new(2, 1, 3),
//!         ProcessSpec::new(3, 2, 8),
//!     ],
//!     Algorithm::Fcfs,
//! );
//! let response = simulate(&request).unwrap();
//! assert_eq!(response.metrics.makespan, 16);
//! assert_eq!(response.process_details[2].waiting_time, 6);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod api;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use api::{simulate, Algorithm, SimulationRequest, SimulationResponse};
pub use error::{ErrorKind, SimulationError};
