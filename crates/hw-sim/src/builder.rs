//! Fluent builder for constructing a [`Simulator`].

use hw_core::{Lane, SimConfig, SimRng, Step, VehicleId};
use hw_road::Road;

use crate::{SimCounters, SimError, SimResult, Simulator, TransitLog};

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step budget, seed, highway parameters
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                              |
/// |--------------------|--------------------------------------|
/// | `.rng(r)`          | `SimRng::new(config.seed)`           |
/// | `.initial_road(r)` | Empty road sized from the config     |
/// | `.start_step(s)`   | `Step(0)`                            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .rng(SimRng::new(7))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    rng:    Option<SimRng>,
    road:   Option<Road>,
    start:  Step,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            rng:   None,
            road:  None,
            start: Step::ZERO,
        }
    }

    /// Supply the random source.  Overrides `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Start from a pre-populated road instead of an empty one.
    ///
    /// Its drivable length must equal `config.highway.length`.  Vehicle ids
    /// handed out later continue after the largest id found on it.
    pub fn initial_road(mut self, road: Road) -> Self {
        self.road = Some(road);
        self
    }

    /// Begin counting at `step`.  Vehicles on an initial road must not have
    /// arrived later than it.
    pub fn start_step(mut self, step: Step) -> Self {
        self.start = step;
        self
    }

    /// Validate inputs and return a ready-to-run [`Simulator`].
    pub fn build(self) -> SimResult<Simulator> {
        self.config.validate()?;

        let road = match self.road {
            Some(road) => {
                if road.length() != self.config.highway.length {
                    return Err(SimError::RoadLengthMismatch {
                        expected: self.config.highway.length,
                        got:      road.length(),
                    });
                }
                road
            }
            None => Road::from_config(&self.config.highway),
        };

        if let Some(late) = Lane::ALL
            .iter()
            .flat_map(|&lane| road.occupied(lane).map(|(_, v)| v))
            .find(|v| v.arrival() > self.start)
        {
            return Err(SimError::ArrivalAfterStart {
                vehicle: late.id(),
                arrival: late.arrival(),
                start:   self.start,
            });
        }

        let next_id = Lane::ALL
            .iter()
            .flat_map(|&lane| road.occupied(lane).map(|(_, v)| v.id()))
            .max()
            .map_or(VehicleId::FIRST, VehicleId::next);

        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        Ok(Simulator {
            config: self.config,
            road,
            rng,
            step: self.start,
            next_id,
            log: TransitLog::new(),
            totals: SimCounters::default(),
        })
    }
}
