/*!
 * Report Rendering
 * Text trace and JSON output for simulation results
 */

use super::{PolicyRun, RunOutcome, SimulationReport};
use crate::core::errors::SchedulerError;
use crate::core::types::SchedResult;
use crate::process::Process;
use crate::scheduler::{Schedule, SchedulingPolicy};
use std::fmt::Write;

const BATCH_TITLE: &str = "--- Generated Processes ---";

/// Significant digits used for averages, as a default `ostream` prints them
const SIGNIFICANT_DIGITS: usize = 6;

/// Shortest of fixed or scientific notation with six significant digits,
/// trailing zeros dropped (`%g` style): `1.33333`, `1.5`, `2`, `1.23457e+06`
fn format_significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    // Rounded scientific form first, so the exponent reflects the rounding.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Tab-aligned process table with its header row
pub fn render_batch(batch: &[Process]) -> String {
    let mut out = String::from("ID\tArrival\tBurst Time\tPriority\n");
    for process in batch {
        let _ = writeln!(
            out,
            "{}\t{}\t\t{}\t\t{}",
            process.id, process.arrival_time, process.burst_time, process.priority
        );
    }
    out
}

/// Execution trace lines for one schedule
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();
    match schedule.policy {
        SchedulingPolicy::RoundRobin => {
            for slice in &schedule.slices {
                let _ = writeln!(
                    out,
                    "Process {} is executing: remaining time {}",
                    slice.pid, slice.remaining
                );
            }
        }
        SchedulingPolicy::Fcfs => {
            for completion in &schedule.completions {
                let _ = writeln!(
                    out,
                    "Process {} start: {}, end: {}, waiting: {}",
                    completion.pid,
                    completion.first_start,
                    completion.completion,
                    completion.waiting
                );
            }
            match schedule.average_wait() {
                Ok(average) => {
                    let _ = writeln!(out, "Average waiting time: {}", format_significant(average));
                }
                Err(_) => {
                    out.push_str("Average waiting time: n/a (empty batch)\n");
                }
            }
        }
        SchedulingPolicy::Priority => {
            for completion in &schedule.completions {
                let _ = writeln!(
                    out,
                    "Process {} priority: {}, end: {}",
                    completion.pid, completion.priority, completion.completion
                );
            }
        }
    }
    out
}

fn render_run(out: &mut String, run: &PolicyRun) {
    if run.fresh_batch {
        let _ = writeln!(out, "{}", BATCH_TITLE);
        out.push_str(&render_batch(&run.batch));
        out.push('\n');
    }
    let _ = writeln!(out, "{}", run.policy.title());
    match &run.outcome {
        RunOutcome::Completed { schedule, .. } => out.push_str(&render_schedule(schedule)),
        RunOutcome::Failed { error } => {
            let _ = writeln!(out, "Run failed: {}", error);
        }
    }
}

/// Full text report: each batch table followed by the traces run on it
pub fn render_report(report: &SimulationReport) -> String {
    let mut out = String::new();
    for (index, run) in report.runs.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_run(&mut out, run);
    }
    out
}

/// Pretty-printed JSON report
pub fn render_json(report: &SimulationReport) -> SchedResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| SchedulerError::Serialization(e.to_string()))
}
