/*!
 * Process Generator
 * Synthetic batches with an injectable, seedable random source
 */

use super::types::Process;
use crate::core::errors::SchedulerError;
use crate::core::limits::{ARRIVAL_RANGE, BURST_RANGE, MAX_PROCESS_COUNT, PRIORITY_RANGE};
use crate::core::types::{Pid, Priority, SchedResult, Tick};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

/// Inclusive ranges the generator draws from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorBounds {
    pub arrival: RangeInclusive<Tick>,
    pub burst: RangeInclusive<Tick>,
    pub priority: RangeInclusive<Priority>,
}

impl Default for GeneratorBounds {
    fn default() -> Self {
        Self {
            arrival: ARRIVAL_RANGE,
            burst: BURST_RANGE,
            priority: PRIORITY_RANGE,
        }
    }
}

impl GeneratorBounds {
    /// Reject empty ranges and ranges that could yield invalid processes
    pub fn validate(&self) -> SchedResult<()> {
        if self.arrival.is_empty() {
            return Err(SchedulerError::invalid_parameter(
                "arrival",
                format!("empty range {:?}", self.arrival),
            ));
        }
        if self.burst.is_empty() || *self.burst.start() == 0 {
            return Err(SchedulerError::invalid_parameter(
                "burst",
                format!("range {:?} must be non-empty and start at 1 or above", self.burst),
            ));
        }
        if self.priority.is_empty() || *self.priority.start() == 0 {
            return Err(SchedulerError::invalid_parameter(
                "priority",
                format!(
                    "range {:?} must be non-empty and start at 1 or above",
                    self.priority
                ),
            ));
        }
        Ok(())
    }
}

/// Batch generator over any `rand::Rng`
pub struct ProcessGenerator<R: Rng = StdRng> {
    rng: R,
    bounds: GeneratorBounds,
}

impl ProcessGenerator<StdRng> {
    /// Deterministic generator: the same seed always yields the same batches
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bounds: GeneratorBounds::default(),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            bounds: GeneratorBounds::default(),
        }
    }
}

impl<R: Rng> ProcessGenerator<R> {
    /// Create a generator from an explicit random source and bounds
    pub fn new(rng: R, bounds: GeneratorBounds) -> SchedResult<Self> {
        bounds.validate()?;
        Ok(Self { rng, bounds })
    }

    /// Replace the bounds used for subsequent batches
    pub fn with_bounds(mut self, bounds: GeneratorBounds) -> SchedResult<Self> {
        bounds.validate()?;
        self.bounds = bounds;
        Ok(self)
    }

    pub fn bounds(&self) -> &GeneratorBounds {
        &self.bounds
    }

    /// Generate `count` processes with ids `1..=count`
    pub fn generate(&mut self, count: usize) -> SchedResult<Vec<Process>> {
        if count == 0 {
            return Err(SchedulerError::invalid_parameter(
                "process_count",
                "must be at least 1",
            ));
        }
        if count > MAX_PROCESS_COUNT {
            return Err(SchedulerError::invalid_parameter(
                "process_count",
                format!("{} exceeds maximum ({})", count, MAX_PROCESS_COUNT),
            ));
        }

        let batch: Vec<Process> = (1..=count as Pid)
            .map(|id| {
                let arrival = self.rng.gen_range(self.bounds.arrival.clone());
                let burst = self.rng.gen_range(self.bounds.burst.clone());
                let priority = self.rng.gen_range(self.bounds.priority.clone());
                Process::new(id, arrival, burst, priority)
            })
            .collect();

        debug!(count, "generated process batch");
        Ok(batch)
    }
}
