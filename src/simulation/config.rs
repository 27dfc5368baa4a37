/*!
 * Simulation Configuration
 * Defaults, builder and environment overrides
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::{DEFAULT_PROCESS_COUNT, DEFAULT_QUANTUM, MAX_PROCESS_COUNT};
use crate::core::types::{SchedResult, Tick};
use crate::process::GeneratorBounds;
use crate::scheduler::{SchedulingPolicy, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const PROCESSES_ENV: &str = "SCHEDSIM_PROCESSES";
pub const QUANTUM_ENV: &str = "SCHEDSIM_QUANTUM";
pub const SEED_ENV: &str = "SCHEDSIM_SEED";
pub const FROZEN_ENV: &str = "SCHEDSIM_FROZEN";
pub const POLICIES_ENV: &str = "SCHEDSIM_POLICIES";
pub const OUTPUT_ENV: &str = "SCHEDSIM_OUTPUT";

/// How the binary prints a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable execution trace
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

impl FromStr for OutputFormat {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SchedulerError::Config(format!(
                "unknown output format '{}', expected text or json",
                other
            ))),
        }
    }
}

/// Everything a simulation run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub process_count: usize,
    pub quantum: TimeQuantum,
    pub bounds: GeneratorBounds,
    /// Fixed seed for reproducible batches; entropy when absent
    pub seed: Option<u64>,
    /// Draw a fresh batch before every policy instead of sharing one
    pub regenerate_per_policy: bool,
    pub policies: Vec<SchedulingPolicy>,
    pub output: OutputFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            process_count: DEFAULT_PROCESS_COUNT,
            quantum: TimeQuantum::DEFAULT,
            bounds: GeneratorBounds::default(),
            seed: None,
            regenerate_per_policy: true,
            policies: SchedulingPolicy::ALL.to_vec(),
            output: OutputFormat::Text,
        }
    }
}

impl SimulationConfig {
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> SchedResult<()> {
        if self.process_count == 0 || self.process_count > MAX_PROCESS_COUNT {
            return Err(SchedulerError::invalid_parameter(
                "process_count",
                format!("{} not in 1..={}", self.process_count, MAX_PROCESS_COUNT),
            ));
        }
        if self.policies.is_empty() {
            return Err(SchedulerError::invalid_parameter(
                "policies",
                "at least one policy is required",
            ));
        }
        self.bounds.validate()
    }

    /// Load defaults overridden by `SCHEDSIM_*` environment variables
    pub fn from_env() -> SchedResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> SchedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(value) = lookup(PROCESSES_ENV) {
            builder = builder.with_process_count(parse_var(PROCESSES_ENV, &value)?);
        }
        if let Some(value) = lookup(QUANTUM_ENV) {
            builder = builder.with_quantum(parse_var(QUANTUM_ENV, &value)?);
        }
        if let Some(value) = lookup(SEED_ENV) {
            builder = builder.with_seed(parse_var(SEED_ENV, &value)?);
        }
        if let Some(value) = lookup(FROZEN_ENV) {
            if matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes") {
                builder = builder.frozen();
            }
        }
        if let Some(value) = lookup(POLICIES_ENV) {
            let policies = value
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(|part| {
                    part.parse()
                        .map_err(|e| SchedulerError::Config(format!("{}: {}", POLICIES_ENV, e)))
                })
                .collect::<SchedResult<Vec<SchedulingPolicy>>>()?;
            builder = builder.with_policies(policies);
        }
        if let Some(value) = lookup(OUTPUT_ENV) {
            builder = builder.with_output(value.parse()?);
        }

        builder.build()
    }
}

fn parse_var<T>(name: &str, value: &str) -> SchedResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| SchedulerError::Config(format!("{}={:?}: {}", name, value, e)))
}

/// Builder for SimulationConfig
#[derive(Debug, Clone)]
pub struct SimulationConfigBuilder {
    process_count: usize,
    quantum: Tick,
    bounds: GeneratorBounds,
    seed: Option<u64>,
    regenerate_per_policy: bool,
    policies: Vec<SchedulingPolicy>,
    output: OutputFormat,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self {
            process_count: DEFAULT_PROCESS_COUNT,
            quantum: DEFAULT_QUANTUM,
            bounds: GeneratorBounds::default(),
            seed: None,
            regenerate_per_policy: true,
            policies: SchedulingPolicy::ALL.to_vec(),
            output: OutputFormat::Text,
        }
    }

    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Round Robin quantum in ticks (validated in `build`)
    pub fn with_quantum(mut self, ticks: Tick) -> Self {
        self.quantum = ticks;
        self
    }

    pub fn with_bounds(mut self, bounds: GeneratorBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run every policy on one shared batch
    pub fn frozen(mut self) -> Self {
        self.regenerate_per_policy = false;
        self
    }

    pub fn with_policies(mut self, policies: Vec<SchedulingPolicy>) -> Self {
        self.policies = policies;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn build(self) -> SchedResult<SimulationConfig> {
        let config = SimulationConfig {
            process_count: self.process_count,
            quantum: TimeQuantum::new(self.quantum)?,
            bounds: self.bounds,
            seed: self.seed,
            regenerate_per_policy: self.regenerate_per_policy,
            policies: self.policies,
            output: self.output,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
