/*!
 * schedsim - Main Entry Point
 *
 * Generates process batches and prints the Round Robin, FCFS and Priority
 * execution traces. Configuration comes from SCHEDSIM_* environment variables.
 */

use cpu_sched_sim::simulation::{render_json, render_report};
use cpu_sched_sim::{init_tracing, OutputFormat, Simulation, SimulationConfig};
use miette::Result;
use tracing::{error, info};

fn main() -> Result<()> {
    init_tracing();

    let config = SimulationConfig::from_env()?;
    info!(
        processes = config.process_count,
        quantum = config.quantum.ticks(),
        seed = config.seed,
        frozen = !config.regenerate_per_policy,
        "starting simulation"
    );

    let output = config.output;
    let report = Simulation::new(config)?.run()?;

    match output {
        OutputFormat::Text => print!("{}", render_report(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    if !report.all_completed() {
        error!("one or more scheduling runs failed");
    }
    Ok(())
}
