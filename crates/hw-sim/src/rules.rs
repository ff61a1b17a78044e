//! Per-vehicle movement rules.
//!
//! These are free functions over a [`Road`] so they can be exercised on
//! hand-built fixtures without a running simulator.

use hw_core::Lane;
use hw_road::{Intent, Road, Vehicle};

/// What happened to one vehicle during its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The vehicle reached the far boundary and was removed from the road.
    Exited(Vehicle),

    /// The vehicle is now at `(lane, to)`.
    Moved {
        from_lane: Lane,
        lane:      Lane,
        from:      usize,
        to:        usize,
    },
}

impl Advance {
    pub fn changed_lane(&self) -> bool {
        matches!(self, Advance::Moved { from_lane, lane, .. } if from_lane != lane)
    }
}

/// `true` when a vehicle at `index` with `speed` leaves the highway this step.
#[inline]
pub fn exits(road: &Road, index: usize, speed: usize) -> bool {
    index + speed >= road.length() - 1
}

/// Take one turn for the vehicle at `(lane, index)`: exit, lane change,
/// then cruise.
///
/// # Panics
/// Panics if the cell is empty.
pub fn advance(road: &mut Road, lane: Lane, index: usize) -> Advance {
    let Some(mut vehicle) = road.take(lane, index) else {
        panic!("advance called on empty cell {lane}:{index}");
    };

    if exits(road, index, vehicle.speed()) {
        return Advance::Exited(vehicle);
    }

    let mut target = lane;
    if vehicle.intent == Intent::WantsLaneChange && road.can_change_into(lane.opposite(), index) {
        vehicle.intent = Intent::Cruising;
        target = lane.opposite();
    }
    road.set(target, index, Some(vehicle));

    let to = cruise(road, target, index);
    Advance::Moved { from_lane: lane, lane: target, from: index, to }
}

/// Apply the cruise rule to the vehicle at `(lane, index)` and return its
/// new index.
///
/// With speed `v` and follow gap `g`, let `x` be the clear cells within
/// `v + g`:
///
/// - `x == v + g` → move `v`, intent `Cruising`
/// - `x > g`      → move `x − g`, intent `WantsLaneChange`
/// - otherwise    → move 1, intent `WantsLaneChange`
///
/// No bounds check happens here: callers run the exit check first, which
/// keeps `index + v` inside the drivable highway.  During a back-to-front
/// sweep the cell at `index + 1` has always been vacated already, so the
/// one-cell creep never lands on another vehicle.  Called directly with a
/// vehicle parked at `index + 1`, the creep would collide; that is a
/// contract violation and panics rather than overwriting the blocker.
///
/// # Panics
/// Panics if the cell is empty, or if the target cell is occupied.
pub fn cruise(road: &mut Road, lane: Lane, index: usize) -> usize {
    let Some(mut vehicle) = road.take(lane, index) else {
        panic!("cruise called on empty cell {lane}:{index}");
    };
    let speed = vehicle.speed();
    let gap = vehicle.safe_follow();
    let clear = road.distance_to_next_occupied(lane, index, vehicle.lookahead());

    let distance = if clear == speed + gap {
        vehicle.intent = Intent::Cruising;
        speed
    } else if clear > gap {
        vehicle.intent = Intent::WantsLaneChange;
        clear - gap
    } else {
        vehicle.intent = Intent::WantsLaneChange;
        1
    };

    let to = index + distance;
    if let Some(blocker) = road.set(lane, to, Some(vehicle)) {
        panic!("cruise target {lane}:{to} is occupied by {}", blocker.id());
    }
    to
}
