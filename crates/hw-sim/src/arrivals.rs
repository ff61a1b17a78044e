//! The arrival process: stochastic spawning at position 0 of each lane.

use hw_core::{HighwayConfig, Lane, SimRng, SpawnPolicy, Step, VehicleId};
use hw_road::{Road, SpeedClass, Vehicle};
use tracing::debug;

/// Counts produced by one run of the arrival process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrivalOutcome {
    /// Vehicles placed on the road.
    pub spawned:   u64,
    /// Occupants destroyed by an overwriting spawn.
    pub displaced: u64,
    /// Arrivals dropped because position 0 was taken.
    pub skipped:   u64,
}

/// Run the arrival process for both lanes, Left first.
///
/// Each lane draws "does a vehicle arrive" and, if so, "is it fast" from
/// `rng`, in that order.  Both draws happen regardless of the spawn policy so
/// the random stream does not depend on road occupancy.  New vehicles take
/// ids from `next_id`, which is advanced for every vehicle created.
pub fn spawn_arrivals(
    road:    &mut Road,
    config:  &HighwayConfig,
    rng:     &mut SimRng,
    now:     Step,
    next_id: &mut VehicleId,
) -> ArrivalOutcome {
    let mut outcome = ArrivalOutcome::default();

    for lane in Lane::ALL {
        if !rng.gen_bool(config.arrival_probability) {
            continue;
        }
        let class = if rng.gen_bool(config.fast_probability) {
            SpeedClass::Fast
        } else {
            SpeedClass::Slow
        };

        if config.spawn_policy == SpawnPolicy::SkipOccupied && !road.is_empty_at(lane, 0) {
            outcome.skipped += 1;
            continue;
        }

        let vehicle = Vehicle::new(*next_id, class, config, now);
        *next_id = next_id.next();
        outcome.spawned += 1;

        if let Some(old) = road.set(lane, 0, Some(vehicle)) {
            debug!(step = now.0, %lane, displaced = old.id().0, "spawn overwrote vehicle at origin");
            outcome.displaced += 1;
        }
    }

    outcome
}
