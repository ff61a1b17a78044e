//! Simulation configuration.
//!
//! Every tunable of the model lives in [`HighwayConfig`]; the run-level knobs
//! (step budget, seed) live in [`SimConfig`].  Both are plain values handed to
//! the simulator at construction and never mutated afterwards.
//!
//! The `Default` impls reproduce the reference parameters: a 150-cell highway,
//! fast and slow speeds of 8 and 6 cells/step (think 125 and 100 km/h), a
//! one-cell safe-follow gap, a 25 % per-lane arrival chance, and an even
//! fast/slow mix.

use crate::{CoreError, CoreResult};

/// Cells probed by a lane-change safety check beyond the current index.
pub const LANE_CHANGE_LOOKAHEAD: usize = 2;

/// What the arrival process does when position 0 of a lane is occupied.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpawnPolicy {
    /// Write the new vehicle unconditionally.  A vehicle still sitting at
    /// position 0 is destroyed without a transit record.  Matches the
    /// reference model.
    #[default]
    Overwrite,
    /// Leave the occupant in place and drop the arrival.
    SkipOccupied,
}

/// Physical and stochastic parameters of the highway model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighwayConfig {
    /// Number of positions a vehicle can occupy before it exits.
    pub length: usize,

    /// Extra cells allocated past `length` so lookahead probes stay in bounds.
    pub boundary_offset: usize,

    /// Cells per step for fast vehicles.
    pub fast_speed: usize,

    /// Cells per step for slow vehicles.
    pub slow_speed: usize,

    /// Minimum empty-cell buffer a vehicle keeps ahead of itself.
    pub safe_follow: usize,

    /// Per-lane, per-step probability that a vehicle arrives at position 0.
    pub arrival_probability: f64,

    /// Probability that an arriving vehicle is fast.
    pub fast_probability: f64,

    pub spawn_policy: SpawnPolicy,
}

impl Default for HighwayConfig {
    fn default() -> Self {
        Self {
            length:              150,
            boundary_offset:     5,
            fast_speed:          8,
            slow_speed:          6,
            safe_follow:         1,
            arrival_probability: 0.25,
            fast_probability:    0.5,
            spawn_policy:        SpawnPolicy::Overwrite,
        }
    }
}

impl HighwayConfig {
    /// Total cells allocated per lane.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.length + self.boundary_offset
    }

    /// Check every parameter, returning the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.slow_speed == 0 {
            return Err(CoreError::Config("slow_speed must be at least 1".into()));
        }
        if self.slow_speed > self.fast_speed {
            return Err(CoreError::Config(format!(
                "slow_speed ({}) exceeds fast_speed ({})",
                self.slow_speed, self.fast_speed
            )));
        }
        if self.length <= self.fast_speed + 1 {
            return Err(CoreError::Config(format!(
                "length ({}) must exceed fast_speed + 1 ({})",
                self.length,
                self.fast_speed + 1
            )));
        }
        if self.boundary_offset < LANE_CHANGE_LOOKAHEAD {
            return Err(CoreError::Config(format!(
                "boundary_offset ({}) must be at least {LANE_CHANGE_LOOKAHEAD}",
                self.boundary_offset
            )));
        }
        check_probability("arrival_probability", self.arrival_probability)?;
        check_probability("fast_probability", self.fast_probability)?;
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must lie in [0, 1], got {p}")))
    }
}

/// Top-level run configuration.
///
/// Typically loaded from JSON by the application crate and passed to the
/// simulator builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total steps to simulate.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub highway: HighwayConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_steps: 1_000,
            seed:        42,
            highway:     HighwayConfig::default(),
        }
    }
}

impl SimConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> crate::Step {
        crate::Step(self.total_steps)
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.highway.validate()
    }
}
