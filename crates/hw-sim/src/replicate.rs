//! Independent replications of one configuration.
//!
//! A single run's mean transit time is noisy; estimates are usually taken
//! over many runs.  Each replication gets its own [`SimRng`] derived from the
//! root seed with [`SimRng::child`], so the whole batch is reproducible from
//! `config.seed` alone.

use hw_core::{SimConfig, SimRng};
use hw_road::SpeedClass;

use crate::{NoopObserver, SimBuilder, SimResult};

/// Outcome of one replication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplicationSummary {
    pub index:     usize,
    pub exited:    u64,
    /// `None` when no vehicle exited within the step budget.
    pub mean:      Option<f64>,
    pub fast_mean: Option<f64>,
    pub slow_mean: Option<f64>,
}

/// Run `count` independent simulations of `config` and summarize each.
///
/// Child RNGs are derived sequentially before any simulation starts, so the
/// result is the same with or without the `parallel` feature.
pub fn replicate(config: &SimConfig, count: usize) -> SimResult<Vec<ReplicationSummary>> {
    config.validate()?;

    let mut root = SimRng::new(config.seed);
    let seeded: Vec<(usize, SimRng)> = (0..count).map(|i| (i, root.child(i as u64))).collect();

    #[cfg(not(feature = "parallel"))]
    let results = seeded
        .into_iter()
        .map(|(index, rng)| run_one(config, index, rng))
        .collect();

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;

        seeded
            .into_par_iter()
            .map(|(index, rng)| run_one(config, index, rng))
            .collect()
    };

    results
}

/// Mean of the per-replication means, skipping replications with no exits.
pub fn mean_of_means(summaries: &[ReplicationSummary]) -> Option<f64> {
    let means: Vec<f64> = summaries.iter().filter_map(|s| s.mean).collect();
    (!means.is_empty()).then(|| means.iter().sum::<f64>() / means.len() as f64)
}

fn run_one(config: &SimConfig, index: usize, rng: SimRng) -> SimResult<ReplicationSummary> {
    let mut sim = SimBuilder::new(config.clone()).rng(rng).build()?;
    sim.run(&mut NoopObserver);
    let log = sim.transit_log();
    Ok(ReplicationSummary {
        index,
        exited:    sim.counters().exited,
        mean:      log.mean(),
        fast_mean: log.mean_for(SpeedClass::Fast),
        slow_mean: log.mean_for(SpeedClass::Slow),
    })
}
