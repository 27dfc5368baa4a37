/*!
 * Round Robin Scheduler
 * Preemptive time slicing over a FIFO ready queue
 *
 * The batch is kept as an arena; the pending list and the ready queue hold
 * arena slots rather than references, so admitting a process never moves it.
 */

use super::dispatch::{admit, advance_clock};
use super::trace::{Completion, Schedule, Slice};
use super::traits::Scheduler;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::types::{SchedResult, Tick};
use crate::process::Process;
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// Round Robin with a fixed quantum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: TimeQuantum,
}

impl RoundRobinScheduler {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    /// Create from a raw tick count, rejecting a zero quantum
    pub fn with_ticks(ticks: Tick) -> SchedResult<Self> {
        TimeQuantum::new(ticks).map(Self::new)
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    #[instrument(skip_all, fields(policy = "round_robin", processes = batch.len(), quantum = self.quantum.ticks()))]
    fn schedule(&self, batch: Vec<Process>) -> SchedResult<Schedule> {
        admit(self.policy(), &batch)?;

        let quantum = self.quantum.ticks();
        let mut arena = batch;
        let mut pending: Vec<usize> = (0..arena.len()).collect();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(arena.len());
        let mut first_start: Vec<Option<Tick>> = vec![None; arena.len()];
        let mut schedule = Schedule::new(self.policy(), Some(self.quantum));
        let mut time: Tick = 0;

        while !pending.is_empty() || !ready.is_empty() {
            // Admission keeps the original batch order among arrivals.
            pending.retain(|&slot| {
                if arena[slot].has_arrived(time) {
                    ready.push_back(slot);
                    false
                } else {
                    true
                }
            });

            let Some(slot) = ready.pop_front() else {
                // Nothing ready: jump to the next arrival instead of ticking.
                let next_arrival = pending
                    .iter()
                    .map(|&slot| arena[slot].arrival_time)
                    .min()
                    .unwrap_or(time);
                debug!(idle_from = time, idle_to = next_arrival, "CPU idle");
                schedule.idle_ticks += next_arrival - time;
                time = next_arrival;
                continue;
            };

            let process = &mut arena[slot];
            let start = time;
            let run = process.remaining_time.min(quantum);
            time = advance_clock(process.id, time, run)?;
            process.remaining_time -= run;
            let first = *first_start[slot].get_or_insert(start);

            debug!(
                pid = process.id,
                start,
                end = time,
                remaining = process.remaining_time,
                "time slice"
            );
            schedule.slices.push(Slice {
                pid: process.id,
                priority: process.priority,
                arrival_time: process.arrival_time,
                start,
                end: time,
                remaining: process.remaining_time,
            });

            if process.is_complete() {
                schedule
                    .completions
                    .push(Completion::new(process, first, time));
            } else {
                ready.push_back(slot);
            }
        }

        info!(
            slices = schedule.slices.len(),
            makespan = schedule.makespan(),
            idle_ticks = schedule.idle_ticks,
            "round robin run complete"
        );
        Ok(schedule)
    }
}
