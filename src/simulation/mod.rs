/*!
 * Simulation Module
 * Generates batches and runs each configured policy on its own copy
 */

pub mod config;
pub mod report;

pub use config::{OutputFormat, SimulationConfig, SimulationConfigBuilder};
pub use report::{render_batch, render_json, render_report, render_schedule};

use crate::core::errors::SchedulerError;
use crate::core::types::SchedResult;
use crate::process::{Process, ProcessGenerator};
use crate::scheduler::{build_scheduler, Schedule, ScheduleStats, SchedulingPolicy};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Outcome of running one policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed {
        schedule: Schedule,
        stats: ScheduleStats,
    },
    Failed {
        error: SchedulerError,
    },
}

/// One policy applied to one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRun {
    pub policy: SchedulingPolicy,
    /// True when `batch` was generated for this run rather than reused
    pub fresh_batch: bool,
    pub batch: Vec<Process>,
    pub outcome: RunOutcome,
}

impl PolicyRun {
    pub fn schedule(&self) -> Option<&Schedule> {
        match &self.outcome {
            RunOutcome::Completed { schedule, .. } => Some(schedule),
            RunOutcome::Failed { .. } => None,
        }
    }

    pub fn stats(&self) -> Option<&ScheduleStats> {
        match &self.outcome {
            RunOutcome::Completed { stats, .. } => Some(stats),
            RunOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&SchedulerError> {
        match &self.outcome {
            RunOutcome::Completed { .. } => None,
            RunOutcome::Failed { error } => Some(error),
        }
    }
}

/// Every run of a simulation, in execution order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub runs: Vec<PolicyRun>,
}

impl SimulationReport {
    /// First run of the given policy
    pub fn run_for(&self, policy: SchedulingPolicy) -> Option<&PolicyRun> {
        self.runs.iter().find(|run| run.policy == policy)
    }

    pub fn all_completed(&self) -> bool {
        self.runs.iter().all(|run| run.error().is_none())
    }
}

/// Drives the generator and the configured schedulers
pub struct Simulation<R: Rng = StdRng> {
    config: SimulationConfig,
    generator: ProcessGenerator<R>,
}

impl Simulation<StdRng> {
    /// Build with a generator seeded from `config.seed`, or entropy
    pub fn new(config: SimulationConfig) -> SchedResult<Self> {
        let generator = match config.seed {
            Some(seed) => ProcessGenerator::seeded(seed),
            None => ProcessGenerator::from_entropy(),
        };
        Self::with_generator(config, generator)
    }
}

impl<R: Rng> Simulation<R> {
    /// Build with an explicit generator; the config's bounds are applied to it
    pub fn with_generator(
        config: SimulationConfig,
        generator: ProcessGenerator<R>,
    ) -> SchedResult<Self> {
        config.validate()?;
        let generator = generator.with_bounds(config.bounds.clone())?;
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Generate batches and run every configured policy
    ///
    /// A fresh batch is drawn before each policy unless the config is frozen.
    pub fn run(&mut self) -> SchedResult<SimulationReport> {
        let policies = self.config.policies.clone();
        let mut runs = Vec::with_capacity(policies.len());
        let mut batch = Vec::new();

        for (index, policy) in policies.into_iter().enumerate() {
            let fresh_batch = index == 0 || self.config.regenerate_per_policy;
            if fresh_batch {
                batch = self.generator.generate(self.config.process_count)?;
            }
            runs.push(self.run_policy(policy, &batch, fresh_batch));
        }

        Ok(SimulationReport { runs })
    }

    /// Run every configured policy on the same caller-supplied batch
    pub fn run_on(&self, batch: &[Process]) -> SimulationReport {
        let runs = self
            .config
            .policies
            .iter()
            .enumerate()
            .map(|(index, &policy)| self.run_policy(policy, batch, index == 0))
            .collect();
        SimulationReport { runs }
    }

    fn run_policy(
        &self,
        policy: SchedulingPolicy,
        batch: &[Process],
        fresh_batch: bool,
    ) -> PolicyRun {
        let scheduler = build_scheduler(policy, self.config.quantum);
        let outcome = match scheduler.schedule(batch.to_vec()) {
            Ok(schedule) => {
                let stats = schedule.stats();
                info!(
                    policy = %policy,
                    processes = stats.processes,
                    makespan = stats.makespan,
                    "policy run finished"
                );
                RunOutcome::Completed { schedule, stats }
            }
            Err(error) => {
                warn!(policy = %policy, error = %error, "policy run failed");
                RunOutcome::Failed { error }
            }
        };

        PolicyRun {
            policy,
            fresh_batch,
            batch: batch.to_vec(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_config() -> SimulationConfig {
        SimulationConfig::builder()
            .with_seed(11)
            .frozen()
            .build()
            .unwrap()
    }

    #[test]
    fn test_frozen_run_shares_batch() {
        let mut simulation = Simulation::new(frozen_config()).unwrap();
        let report = simulation.run().unwrap();

        assert_eq!(report.runs.len(), 3);
        assert!(report.all_completed());
        assert!(report.runs[0].fresh_batch);
        assert!(!report.runs[1].fresh_batch);
        assert_eq!(report.runs[0].batch, report.runs[1].batch);
        assert_eq!(report.runs[1].batch, report.runs[2].batch);
    }

    #[test]
    fn test_regenerating_run_draws_new_batches() {
        let config = SimulationConfig::builder()
            .with_seed(11)
            .with_process_count(8)
            .build()
            .unwrap();
        let report = Simulation::new(config).unwrap().run().unwrap();

        assert!(report.runs.iter().all(|run| run.fresh_batch));
        assert!(report.runs.iter().all(|run| run.batch.len() == 8));
    }

    #[test]
    fn test_seed_reproducible() {
        let a = Simulation::new(frozen_config()).unwrap().run().unwrap();
        let b = Simulation::new(frozen_config()).unwrap().run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_on_invalid_batch_fails_per_run() {
        let simulation = Simulation::new(frozen_config()).unwrap();
        let report = simulation.run_on(&[Process::new(1, 0, 0, 1)]);

        assert_eq!(report.runs.len(), 3);
        assert!(report.runs.iter().all(|run| matches!(
            run.error(),
            Some(SchedulerError::InvalidProcess { pid: 1, .. })
        )));
    }

    #[test]
    fn test_run_on_does_not_mutate_input() {
        let batch = vec![Process::new(1, 0, 5, 2), Process::new(2, 1, 4, 1)];
        let simulation = Simulation::new(frozen_config()).unwrap();
        let report = simulation.run_on(&batch);

        assert_eq!(report.runs[0].batch, batch);
        assert_eq!(batch[0].remaining_time, 5);
        let rr = report.run_for(SchedulingPolicy::RoundRobin).unwrap();
        assert_eq!(rr.schedule().unwrap().completions.len(), 2);
    }
}
