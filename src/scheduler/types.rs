/*!
 * Scheduler Types
 * Policy selection and time quantum configuration
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::{SchedResult, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Scheduling discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// Preemptive time slicing with a fixed quantum
    RoundRobin,
    /// Non-preemptive, strict arrival order
    Fcfs,
    /// Non-preemptive, lowest priority value first
    Priority,
}

impl SchedulingPolicy {
    /// Every policy, in the order the simulator runs them
    pub const ALL: [SchedulingPolicy; 3] = [Self::RoundRobin, Self::Fcfs, Self::Priority];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::Fcfs => "fcfs",
            Self::Priority => "priority",
        }
    }

    /// Section heading printed above the execution trace
    pub const fn title(&self) -> &'static str {
        match self {
            Self::RoundRobin => "--- Round Robin Algorithm ---",
            Self::Fcfs => "--- FCFS Algorithm ---",
            Self::Priority => "--- Priority Scheduling ---",
        }
    }

    /// Whether a running process can be interrupted
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(SchedulerError::invalid_parameter(
                "policy",
                format!("'{}' is not one of round_robin, fcfs, priority", s),
            )),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round Robin time slice, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(NonZeroU64);

impl TimeQuantum {
    pub const DEFAULT: Self = match NonZeroU64::new(DEFAULT_QUANTUM) {
        Some(ticks) => Self(ticks),
        None => panic!("default quantum must be non-zero"),
    };

    /// Create new time quantum
    pub fn new(ticks: Tick) -> SchedResult<Self> {
        NonZeroU64::new(ticks).map(Self).ok_or_else(|| {
            SchedulerError::invalid_parameter("quantum", "must be at least 1 tick")
        })
    }

    /// Get ticks
    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0.get()
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TimeQuantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ticks())
    }
}
