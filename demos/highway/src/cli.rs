//! Command-line arguments and config loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use hw_core::{SimConfig, SpawnPolicy};

/// Two-lane highway traffic simulation.
///
/// Parameters come from `--config` (JSON, any field may be omitted) with the
/// flags below applied on top.
#[derive(Parser, Debug)]
#[command(name = "highway", version, about)]
pub struct Args {
    /// JSON file holding a `SimConfig`.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Number of steps to simulate.
    #[arg(long, short = 'n')]
    pub steps: Option<u64>,

    /// Master RNG seed.
    #[arg(long, short)]
    pub seed: Option<u64>,

    /// Per-lane, per-step arrival probability.
    #[arg(long)]
    pub arrival_probability: Option<f64>,

    /// Probability that an arriving vehicle is fast.
    #[arg(long)]
    pub fast_probability: Option<f64>,

    /// Drop arrivals whose lane origin is occupied instead of overwriting.
    #[arg(long)]
    pub skip_occupied_spawns: bool,

    /// Print the road after each step.
    #[arg(long)]
    pub print_road: bool,

    /// With `--print-road`, only print every N-th step.
    #[arg(long, default_value_t = 1)]
    pub print_every: u64,

    /// Directory for `transit_samples.csv` and `step_summaries.csv`.
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Run this many independent replications and report each mean.
    /// Cannot be combined with `--print-road` or `--output-dir`.
    #[arg(long, short, default_value_t = 1)]
    pub replications: usize,
}

impl Args {
    /// Build the run configuration: defaults, then the JSON file, then flags.
    pub fn sim_config(&self) -> Result<SimConfig> {
        if self.replications > 1 && (self.print_road || self.output_dir.is_some()) {
            bail!("--print-road and --output-dir apply to a single run; drop them or use --replications 1");
        }

        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => SimConfig::default(),
        };

        if let Some(steps) = self.steps {
            config.total_steps = steps;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(p) = self.arrival_probability {
            config.highway.arrival_probability = p;
        }
        if let Some(p) = self.fast_probability {
            config.highway.fast_probability = p;
        }
        if self.skip_occupied_spawns {
            config.highway.spawn_policy = SpawnPolicy::SkipOccupied;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn read_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}
