/*!
 * Priority Scheduler
 * Non-preemptive; lowest priority value first, earlier arrival breaks ties
 *
 * The order is fixed before the clock starts, so a more urgent process that
 * arrives late still runs first and the CPU idles until it shows up.
 */

use super::dispatch::{admit, run_to_completion};
use super::trace::Schedule;
use super::traits::Scheduler;
use super::types::SchedulingPolicy;
use crate::core::types::SchedResult;
use crate::process::Process;
use tracing::{info, instrument};

/// Static-priority, run-to-completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Priority
    }

    #[instrument(skip_all, fields(policy = "priority", processes = batch.len()))]
    fn schedule(&self, batch: Vec<Process>) -> SchedResult<Schedule> {
        admit(self.policy(), &batch)?;

        let mut ordered = batch;
        ordered.sort_by_key(|process| (process.priority, process.arrival_time));

        let schedule = run_to_completion(self.policy(), ordered)?;
        info!(
            makespan = schedule.makespan(),
            idle_ticks = schedule.idle_ticks,
            "priority run complete"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_and_ends(schedule: &Schedule) -> Vec<(u32, u64)> {
        schedule.slices.iter().map(|s| (s.pid, s.end)).collect()
    }

    #[test]
    fn test_lower_value_runs_first() {
        let batch = vec![Process::new(1, 0, 3, 2), Process::new(2, 0, 2, 1)];
        let schedule = PriorityScheduler.schedule(batch).unwrap();
        assert_eq!(order_and_ends(&schedule), vec![(2, 2), (1, 5)]);
    }

    #[test]
    fn test_ties_broken_by_arrival() {
        let batch = vec![
            Process::new(1, 3, 1, 2),
            Process::new(2, 1, 1, 2),
            Process::new(3, 1, 1, 2),
        ];
        let schedule = PriorityScheduler.schedule(batch).unwrap();
        let order: Vec<u32> = schedule.slices.iter().map(|s| s.pid).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_urgent_late_arrival_idles_cpu() {
        let batch = vec![Process::new(1, 0, 2, 3), Process::new(2, 5, 1, 1)];
        let schedule = PriorityScheduler.schedule(batch).unwrap();

        assert_eq!(order_and_ends(&schedule), vec![(2, 6), (1, 8)]);
        assert_eq!(schedule.idle_ticks, 5);
        assert_eq!(schedule.completion_of(1).unwrap().waiting, 6);
    }

    #[test]
    fn test_empty_batch() {
        let schedule = PriorityScheduler.schedule(Vec::new()).unwrap();
        assert!(schedule.is_empty());
    }
}
