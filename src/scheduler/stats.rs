/*!
 * Schedule Statistics
 * Summary metrics derived from a finished run
 */

use super::trace::Schedule;
use super::types::SchedulingPolicy;
use crate::core::types::Tick;
use serde::{Deserialize, Serialize};

/// Aggregate metrics for one run
///
/// Averages are `None` for an empty batch rather than NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub policy: SchedulingPolicy,
    pub processes: usize,
    pub dispatches: usize,
    pub makespan: Tick,
    pub idle_ticks: Tick,
    pub total_waiting: Tick,
    pub average_waiting: Option<f64>,
    pub average_turnaround: Option<f64>,
    pub cpu_utilization: Option<f64>,
}

impl Schedule {
    /// Compute summary statistics for this run
    pub fn stats(&self) -> ScheduleStats {
        let processes = self.completions.len();
        let makespan = self.makespan();
        let total_waiting: u128 = self.completions.iter().map(|c| u128::from(c.waiting)).sum();
        let total_turnaround: u128 = self
            .completions
            .iter()
            .map(|c| u128::from(c.turnaround))
            .sum();
        let busy: Tick = self.slices.iter().map(|s| s.duration()).sum();

        let mean = |total: u128| (processes > 0).then(|| total as f64 / processes as f64);

        ScheduleStats {
            policy: self.policy,
            processes,
            dispatches: self.slices.len(),
            makespan,
            idle_ticks: self.idle_ticks,
            total_waiting: Tick::try_from(total_waiting).unwrap_or(Tick::MAX),
            average_waiting: mean(total_waiting),
            average_turnaround: mean(total_turnaround),
            cpu_utilization: (makespan > 0).then(|| busy as f64 / makespan as f64),
        }
    }
}
