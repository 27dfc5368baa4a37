/*!
 * CPU Scheduling Simulator Library
 *
 * Round Robin, FCFS and non-preemptive Priority scheduling over small
 * synthetic process batches. Each scheduler takes its own copy of a batch
 * and returns a `Schedule`: the dispatch trace plus per-process completion
 * accounting.
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::errors::SchedulerError;
pub use crate::core::types::{Pid, Priority, SchedResult, Tick};
pub use monitoring::init_tracing;
pub use process::{GeneratorBounds, Process, ProcessGenerator};
pub use scheduler::{
    build_scheduler, FcfsScheduler, PriorityScheduler, RoundRobinScheduler, Schedule,
    ScheduleStats, Scheduler, SchedulingPolicy, TimeQuantum,
};
pub use simulation::{
    OutputFormat, PolicyRun, RunOutcome, Simulation, SimulationConfig, SimulationReport,
};
