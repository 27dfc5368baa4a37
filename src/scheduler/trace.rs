/*!
 * Execution Trace
 * Dispatch slices and per-process completion records produced by a run
 */

use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Priority, SchedResult, Tick};
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time given to a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub pid: Pid,
    pub priority: Priority,
    pub arrival_time: Tick,
    pub start: Tick,
    pub end: Tick,
    /// Remaining burst after this slice
    pub remaining: Tick,
}

impl Slice {
    #[inline]
    pub const fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Final accounting for a process once its whole burst has run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub first_start: Tick,
    pub completion: Tick,
    pub waiting: Tick,
    pub turnaround: Tick,
}

impl Completion {
    /// Derive wait and turnaround from the finished process
    pub(crate) fn new(process: &Process, first_start: Tick, completion: Tick) -> Self {
        let turnaround = completion - process.arrival_time;
        Self {
            pid: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            first_start,
            completion,
            waiting: turnaround - process.burst_time,
            turnaround,
        }
    }
}

/// Result of running one scheduler over one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    /// Dispatches in execution order
    pub slices: Vec<Slice>,
    /// Finished processes in completion order
    pub completions: Vec<Completion>,
    /// Ticks the CPU spent with nothing ready
    pub idle_ticks: Tick,
}

impl Schedule {
    pub(crate) fn new(policy: SchedulingPolicy, quantum: Option<TimeQuantum>) -> Self {
        Self {
            policy,
            quantum,
            slices: Vec::new(),
            completions: Vec::new(),
            idle_ticks: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// Clock value when the last slice finished
    pub fn makespan(&self) -> Tick {
        self.slices.last().map_or(0, |slice| slice.end)
    }

    /// Mean waiting time; undefined for an empty batch
    pub fn average_wait(&self) -> SchedResult<f64> {
        if self.completions.is_empty() {
            return Err(SchedulerError::EmptyBatch);
        }
        let total: u128 = self.completions.iter().map(|c| u128::from(c.waiting)).sum();
        Ok(total as f64 / self.completions.len() as f64)
    }

    /// Completion record for a process, if it ran
    pub fn completion_of(&self, pid: Pid) -> Option<&Completion> {
        self.completions.iter().find(|c| c.pid == pid)
    }

    /// Slices belonging to a process, in execution order
    pub fn slices_of(&self, pid: Pid) -> impl Iterator<Item = &Slice> + '_ {
        self.slices.iter().filter(move |slice| slice.pid == pid)
    }
}
