/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (unique within a batch, assigned 1..=N)
pub type Pid = u32;

/// Simulated clock tick
pub type Tick = u64;

/// Priority level (lower value is scheduled first)
pub type Priority = u8;

/// Common result type for scheduling operations
pub type SchedResult<T> = Result<T, super::errors::SchedulerError>;
