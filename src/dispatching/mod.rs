//! Scheduling policies and the decision contract.
//!
//! A policy inspects a [`DispatchContext`] (clock, ready queue, runtime
//! table) and returns a [`Decision`]: which process gets the CPU and for
//! how many time units.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{Policy, PriorityOrder};
//!
//! let rr = Policy::RoundRobin { quantum: 2 };
//! assert!(rr.is_preemptive());
//!
//! let prio = Policy::Priority { order: PriorityOrder::Higher };
//! assert_eq!(prio.name(), "Priority");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod context;
mod policy;
mod ready_queue;
pub mod rules;

pub use context::DispatchContext;
pub use policy::{Decision, Policy};
pub use ready_queue::{PendingArrivals, ReadyQueue};
pub use rules::PriorityOrder;
