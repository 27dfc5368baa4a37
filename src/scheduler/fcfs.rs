/*!
 * FCFS Scheduler
 * Non-preemptive, strict arrival order
 */

use super::dispatch::{admit, run_to_completion};
use super::trace::Schedule;
use super::traits::Scheduler;
use super::types::SchedulingPolicy;
use crate::core::types::SchedResult;
use crate::process::Process;
use tracing::{info, instrument};

/// First-come, first-served
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    #[instrument(skip_all, fields(policy = "fcfs", processes = batch.len()))]
    fn schedule(&self, batch: Vec<Process>) -> SchedResult<Schedule> {
        admit(self.policy(), &batch)?;

        let mut ordered = batch;
        // Stable: equal arrivals keep batch order.
        ordered.sort_by_key(|process| process.arrival_time);

        let schedule = run_to_completion(self.policy(), ordered)?;
        info!(
            makespan = schedule.makespan(),
            average_wait = schedule.average_wait().ok(),
            "fcfs run complete"
        );
        Ok(schedule)
    }
}
