//! CPU scheduling domain models.
//!
//! Provides the data types describing a simulation's input and its
//! execution timeline.
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Job-shop analogue |
//! |------------|-------------|-------------------|
//! | ProcessSpec | PCB (as submitted) | Task |
//! | ProcessRuntimeState | PCB (run-time fields) | Task progress |
//! | GanttInterval | CPU burst slice | Assignment |
//! | Timeline | Gantt chart | Schedule |

mod process;
mod timeline;
mod workload;

pub use process::{Pid, ProcessRuntimeState, ProcessSpec, Time};
pub use timeline::{GanttInterval, Timeline};
pub use workload::{random_workload, WorkloadShape};
