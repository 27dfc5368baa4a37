/*!
 * Simulation Limits and Constants
 *
 * Default batch shape and generator bounds, grouped by concern.
 */

use super::types::{Priority, Tick};
use std::ops::RangeInclusive;

// =============================================================================
// BATCH DEFAULTS
// =============================================================================

/// Processes generated per batch when nothing else is configured
pub const DEFAULT_PROCESS_COUNT: usize = 5;

/// Upper bound on a configured batch size
/// Keeps a typo in `SCHEDSIM_PROCESSES` from allocating millions of records
pub const MAX_PROCESS_COUNT: usize = 10_000;

/// Round Robin time slice in ticks
pub const DEFAULT_QUANTUM: Tick = 3;

// =============================================================================
// GENERATOR BOUNDS (inclusive)
// =============================================================================

/// Arrival time range
pub const ARRIVAL_RANGE: RangeInclusive<Tick> = 0..=10;

/// Burst time range (must start at 1 or above)
pub const BURST_RANGE: RangeInclusive<Tick> = 1..=10;

/// Priority range (1 is the most urgent)
pub const PRIORITY_RANGE: RangeInclusive<Priority> = 1..=5;
