//! highway — command-line driver for the two-lane highway simulator.
//!
//! Runs one seeded simulation (optionally printing the road and writing CSV
//! output) or a batch of independent replications, then reports the average
//! transit time.
//!
//! Log verbosity is controlled through `RUST_LOG` (default `info`); logs go
//! to stderr so `--print-road` output on stdout stays clean.

mod cli;

use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hw_core::SimConfig;
use hw_output::{CsvWriter, RoadPrinter, SimOutputObserver};
use hw_road::SpeedClass;
use hw_sim::{SimBuilder, SimError, mean_of_means, replicate};

use cli::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.sim_config()?;
    info!(
        steps = config.total_steps,
        seed = config.seed,
        length = config.highway.length,
        p_arrival = config.highway.arrival_probability,
        p_fast = config.highway.fast_probability,
        "configuration loaded"
    );

    if args.replications > 1 {
        run_replications(&config, args.replications)
    } else {
        run_single(config, &args)
    }
}

// ── Single run ────────────────────────────────────────────────────────────────

fn run_single(config: SimConfig, args: &Args) -> Result<()> {
    let printer: Option<RoadPrinter<Stdout>> = args
        .print_road
        .then(|| RoadPrinter::new(io::stdout()).every(args.print_every));

    let csv = match &args.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };

    let mut sim = SimBuilder::new(config).build()?;
    let mut observer = (printer, csv);

    let t0 = Instant::now();
    sim.run(&mut observer);
    let elapsed = t0.elapsed();

    if let Some(e) = observer.0.as_mut().and_then(RoadPrinter::take_error) {
        warn!("road printing failed: {e}");
    }
    if let Some(e) = observer.1.as_mut().and_then(SimOutputObserver::take_error) {
        return Err(e).context("writing CSV output");
    }

    let counters = sim.counters();
    let log = sim.transit_log();

    println!();
    match sim.average_transit_time() {
        Ok(mean) => println!("Average transit time: {mean:.3} steps"),
        Err(SimError::NoData) => println!("Average transit time: n/a (no vehicle exited)"),
        Err(e) => return Err(e.into()),
    }
    for class in [SpeedClass::Fast, SpeedClass::Slow] {
        if let Some(mean) = log.mean_for(class) {
            println!("  {class:<5} {mean:>8.3} steps");
        }
    }
    println!(
        "Exited {}  |  spawned {}  |  lane changes {}  |  displaced {}  |  skipped {}",
        counters.exited, counters.spawned, counters.lane_changes, counters.displaced, counters.skipped,
    );
    println!(
        "On road at end: {}  |  {:.3} s",
        sim.road().vehicle_count(),
        elapsed.as_secs_f64()
    );
    if let Some(dir) = &args.output_dir {
        println!("CSV output written to {}", dir.display());
    }
    Ok(())
}

// ── Replications ──────────────────────────────────────────────────────────────

fn run_replications(config: &SimConfig, count: usize) -> Result<()> {
    let t0 = Instant::now();
    let summaries = replicate(config, count)?;
    let elapsed = t0.elapsed();

    let fmt = |v: Option<f64>| v.map_or_else(|| "n/a".to_owned(), |m| format!("{m:.3}"));

    println!("{:<6} {:>8} {:>10} {:>10} {:>10}", "Run", "Exited", "Mean", "Fast", "Slow");
    println!("{}", "-".repeat(48));
    for s in &summaries {
        println!(
            "{:<6} {:>8} {:>10} {:>10} {:>10}",
            s.index,
            s.exited,
            fmt(s.mean),
            fmt(s.fast_mean),
            fmt(s.slow_mean)
        );
    }
    println!();
    println!("Mean of run means: {}", fmt(mean_of_means(&summaries)));
    println!("{count} runs in {:.3} s", elapsed.as_secs_f64());
    Ok(())
}
