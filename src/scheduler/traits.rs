/*!
 * Scheduler Traits
 * Interface shared by every scheduling discipline
 */

use super::fcfs::FcfsScheduler;
use super::priority::PriorityScheduler;
use super::round_robin::RoundRobinScheduler;
use super::trace::Schedule;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::types::SchedResult;
use crate::process::Process;

/// A scheduling discipline
///
/// `schedule` takes the batch by value: every run owns its working copy, so
/// one discipline can never observe another's `remaining_time` bookkeeping.
pub trait Scheduler {
    /// Discipline implemented by this scheduler
    fn policy(&self) -> SchedulingPolicy;

    /// Simulate the batch from clock 0 until every process has completed
    fn schedule(&self, batch: Vec<Process>) -> SchedResult<Schedule>;
}

/// Build the scheduler for a policy; `quantum` only matters for Round Robin
pub fn build_scheduler(policy: SchedulingPolicy, quantum: TimeQuantum) -> Box<dyn Scheduler> {
    match policy {
        SchedulingPolicy::RoundRobin => Box::new(RoundRobinScheduler::new(quantum)),
        SchedulingPolicy::Fcfs => Box::new(FcfsScheduler),
        SchedulingPolicy::Priority => Box::new(PriorityScheduler),
    }
}
