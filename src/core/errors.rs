/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduling and simulation errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid parameter `{name}`: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_parameter),
        help("Quantum and process count must be positive; generator ranges must be non-empty.")
    )]
    InvalidParameter { name: String, reason: String },

    #[error("Empty batch: no processes were scheduled")]
    #[diagnostic(
        code(scheduler::empty_batch),
        help("Averages are undefined over zero processes. Supply at least one process.")
    )]
    EmptyBatch,

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Burst time and priority must be positive, remaining time must equal burst time, and the run must fit the clock.")
    )]
    InvalidProcess { pid: Pid, reason: String },

    #[error("Duplicate process id {0} in batch")]
    #[diagnostic(
        code(scheduler::duplicate_pid),
        help("Process ids must be unique within a batch.")
    )]
    DuplicatePid(Pid),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(scheduler::config),
        help("Check the SCHEDSIM_* environment variables.")
    )]
    Config(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(scheduler::serialization))]
    Serialization(String),
}

impl SchedulerError {
    /// Shorthand for an `InvalidParameter` error
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an `InvalidProcess` error
    pub fn invalid_process(pid: Pid, reason: impl Into<String>) -> Self {
        Self::InvalidProcess {
            pid,
            reason: reason.into(),
        }
    }
}
