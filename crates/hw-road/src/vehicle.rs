//! Per-vehicle state.

use std::fmt;

use hw_core::{HighwayConfig, Step, VehicleId};

use crate::Intent;

/// Which of the two cruising speeds a vehicle was spawned with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpeedClass {
    Fast,
    Slow,
}

impl SpeedClass {
    /// Cells per step for this class under `config`.
    #[inline]
    pub fn speed(self, config: &HighwayConfig) -> usize {
        match self {
            SpeedClass::Fast => config.fast_speed,
            SpeedClass::Slow => config.slow_speed,
        }
    }
}

impl fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpeedClass::Fast => "fast",
            SpeedClass::Slow => "slow",
        };
        f.pad(s)
    }
}

/// A single vehicle on the road.
///
/// Speed, follow gap, and arrival step are fixed at spawn.  Only `intent`
/// changes while the vehicle travels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    id:          VehicleId,
    class:       SpeedClass,
    speed:       usize,
    safe_follow: usize,
    arrival:     Step,

    /// Set by the simulator after every cruise move.
    pub intent: Intent,
}

impl Vehicle {
    /// A cruising vehicle whose speed and gap come from `config`.
    pub fn new(id: VehicleId, class: SpeedClass, config: &HighwayConfig, arrival: Step) -> Self {
        Self::with_speed(id, class, class.speed(config), config.safe_follow, arrival)
    }

    /// A cruising vehicle with explicit kinematics.  Mostly useful for
    /// hand-built road fixtures.
    pub fn with_speed(
        id:          VehicleId,
        class:       SpeedClass,
        speed:       usize,
        safe_follow: usize,
        arrival:     Step,
    ) -> Self {
        Self {
            id,
            class,
            speed,
            safe_follow,
            arrival,
            intent: Intent::Cruising,
        }
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn class(&self) -> SpeedClass {
        self.class
    }

    #[inline]
    pub fn speed(&self) -> usize {
        self.speed
    }

    #[inline]
    pub fn safe_follow(&self) -> usize {
        self.safe_follow
    }

    #[inline]
    pub fn arrival(&self) -> Step {
        self.arrival
    }

    /// Cells that must be clear for a full-speed move: `speed + safe_follow`.
    #[inline]
    pub fn lookahead(&self) -> usize {
        self.speed + self.safe_follow
    }

    /// Steps spent on the highway if the vehicle exits at `exit`.
    #[inline]
    pub fn transit_time(&self, exit: Step) -> u64 {
        exit.since(self.arrival)
    }
}
