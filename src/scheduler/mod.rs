/*!
 * Scheduler Module
 * Round Robin, FCFS and Priority scheduling over a process batch
 */

mod dispatch;
pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod stats;
pub mod trace;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::FcfsScheduler;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobinScheduler;
pub use stats::ScheduleStats;
pub use trace::{Completion, Schedule, Slice};
pub use traits::{build_scheduler, Scheduler};
pub use types::{SchedulingPolicy, SchedulingPolicy as Policy, TimeQuantum};
