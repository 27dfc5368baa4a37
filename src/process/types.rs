/*!
 * Process Types
 * The process record every scheduler operates on
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Priority, SchedResult, Tick};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single simulated process
///
/// `remaining_time` is only consumed by Round Robin; the non-preemptive
/// schedulers treat `burst_time` as one atomic dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub remaining_time: Tick,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(id: Pid, arrival_time: Tick, burst_time: Tick, priority: Priority) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
        }
    }

    /// Check whether the process has consumed its whole burst
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Check whether the process may run at `time`
    #[inline]
    #[must_use]
    pub const fn has_arrived(&self, time: Tick) -> bool {
        self.arrival_time <= time
    }

    /// Validate record invariants before scheduling
    pub fn validate(&self) -> SchedResult<()> {
        if self.burst_time == 0 {
            return Err(SchedulerError::invalid_process(
                self.id,
                "burst time must be positive",
            ));
        }
        if self.priority == 0 {
            return Err(SchedulerError::invalid_process(
                self.id,
                "priority must be positive",
            ));
        }
        // Runs always start from a fresh record: the whole burst is still owed.
        if self.remaining_time != self.burst_time {
            return Err(SchedulerError::invalid_process(
                self.id,
                format!(
                    "remaining time {} differs from burst time {}",
                    self.remaining_time, self.burst_time
                ),
            ));
        }
        Ok(())
    }
}

/// Validate every record of a batch and the uniqueness of its ids
pub fn validate_batch(batch: &[Process]) -> SchedResult<()> {
    let mut seen = HashSet::with_capacity(batch.len());
    for process in batch {
        process.validate()?;
        if !seen.insert(process.id) {
            return Err(SchedulerError::DuplicatePid(process.id));
        }
    }
    Ok(())
}
