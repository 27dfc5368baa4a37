/*!
 * Non-Preemptive Dispatch
 * Runs an already ordered batch to completion, one whole burst at a time
 */

use super::trace::{Completion, Schedule, Slice};
use super::types::SchedulingPolicy;
use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, SchedResult, Tick};
use crate::process::{validate_batch, Process};
use tracing::{debug, warn};

/// Dispatch `ordered` back to back, never starting a process before it arrives
pub(super) fn run_to_completion(
    policy: SchedulingPolicy,
    ordered: Vec<Process>,
) -> SchedResult<Schedule> {
    let mut schedule = Schedule::new(policy, None);
    schedule.slices.reserve(ordered.len());
    schedule.completions.reserve(ordered.len());

    let mut current_time: Tick = 0;
    for mut process in ordered {
        let start = current_time.max(process.arrival_time);
        if start > current_time {
            debug!(idle_from = current_time, idle_to = start, "CPU idle");
            schedule.idle_ticks += start - current_time;
        }
        let end = advance_clock(process.id, start, process.burst_time)?;
        current_time = end;
        process.remaining_time = 0;

        debug!(pid = process.id, start, end, "dispatched");
        schedule.slices.push(Slice {
            pid: process.id,
            priority: process.priority,
            arrival_time: process.arrival_time,
            start,
            end,
            remaining: process.remaining_time,
        });
        schedule.completions.push(Completion::new(&process, start, end));
    }

    Ok(schedule)
}

/// Move the clock forward by `ticks`, failing instead of wrapping past `Tick::MAX`
pub(super) fn advance_clock(pid: Pid, time: Tick, ticks: Tick) -> SchedResult<Tick> {
    time.checked_add(ticks).ok_or_else(|| {
        SchedulerError::invalid_process(
            pid,
            format!("running {} ticks from {} overflows the clock", ticks, time),
        )
    })
}

/// Validate a batch before simulating it, logging the rejection
pub(super) fn admit(policy: SchedulingPolicy, batch: &[Process]) -> SchedResult<()> {
    validate_batch(batch).map_err(|err| {
        warn!(policy = %policy, error = %err, "batch rejected");
        err
    })
}
