//! Unit tests for hw-road.

use hw_core::{Lane, Step, VehicleId};

use crate::{Intent, Road, SpeedClass, Vehicle};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car(id: u64) -> Vehicle {
    Vehicle::with_speed(VehicleId(id), SpeedClass::Fast, 8, 1, Step::ZERO)
}

/// A 30-cell road with 5 protected cells.
fn road() -> Road {
    Road::new(30, 5)
}

#[cfg(test)]
mod vehicle_tests {
    use hw_core::HighwayConfig;

    use super::*;

    #[test]
    fn new_takes_speed_from_config() {
        let cfg = HighwayConfig::default();
        let fast = Vehicle::new(VehicleId(0), SpeedClass::Fast, &cfg, Step(3));
        let slow = Vehicle::new(VehicleId(1), SpeedClass::Slow, &cfg, Step(3));
        assert_eq!(fast.speed(), 8);
        assert_eq!(slow.speed(), 6);
        assert_eq!(fast.safe_follow(), 1);
        assert_eq!(fast.lookahead(), 9);
        assert_eq!(fast.intent, Intent::Cruising);
        assert_eq!(fast.arrival(), Step(3));
    }

    #[test]
    fn transit_time_counts_steps() {
        let v = Vehicle::with_speed(VehicleId(0), SpeedClass::Slow, 6, 1, Step(10));
        assert_eq!(v.transit_time(Step(27)), 17);
    }

    #[test]
    fn class_display() {
        assert_eq!(SpeedClass::Fast.to_string(), "fast");
        assert_eq!(SpeedClass::Slow.to_string(), "slow");
        assert_eq!(Intent::WantsLaneChange.to_string(), "lane change");
    }
}

#[cfg(test)]
mod cell_tests {
    use super::*;

    #[test]
    fn new_road_is_empty() {
        let r = road();
        assert_eq!(r.length(), 30);
        assert_eq!(r.capacity(), 35);
        assert_eq!(r.vehicle_count(), 0);
        assert!((0..35).all(|i| r.is_empty_at(Lane::Left, i) && r.is_empty_at(Lane::Right, i)));
    }

    #[test]
    fn set_returns_previous_occupant() {
        let mut r = road();
        assert!(r.set(Lane::Left, 4, Some(car(1))).is_none());
        let old = r.set(Lane::Left, 4, Some(car(2))).unwrap();
        assert_eq!(old.id(), VehicleId(1));
        assert_eq!(r.get(Lane::Left, 4).unwrap().id(), VehicleId(2));
        assert!(r.get(Lane::Right, 4).is_none());
    }

    #[test]
    fn take_clears_cell() {
        let mut r = road();
        r.set(Lane::Right, 7, Some(car(5)));
        let v = r.take(Lane::Right, 7).unwrap();
        assert_eq!(v.id(), VehicleId(5));
        assert!(r.is_empty_at(Lane::Right, 7));
        assert!(r.take(Lane::Right, 7).is_none());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut r = road();
        r.set(Lane::Left, 0, Some(car(0)));
        r.get_mut(Lane::Left, 0).unwrap().intent = Intent::WantsLaneChange;
        assert_eq!(r.get(Lane::Left, 0).unwrap().intent, Intent::WantsLaneChange);
    }

    #[test]
    #[should_panic]
    fn index_past_capacity_panics() {
        let r = road();
        let _ = r.get(Lane::Left, 35);
    }

    #[test]
    fn occupied_and_position_of() {
        let mut r = road();
        r.set(Lane::Left, 9, Some(car(1)));
        r.set(Lane::Left, 2, Some(car(2)));
        r.set(Lane::Right, 5, Some(car(3)));
        let left: Vec<usize> = r.occupied(Lane::Left).map(|(i, _)| i).collect();
        assert_eq!(left, [2, 9]);
        assert_eq!(r.vehicle_count(), 3);
        assert_eq!(r.position_of(VehicleId(3)), Some((Lane::Right, 5)));
        assert_eq!(r.position_of(VehicleId(99)), None);
    }
}

#[cfg(test)]
mod distance_tests {
    use super::*;

    #[test]
    fn empty_window_returns_horizon() {
        let r = road();
        assert_eq!(r.distance_to_next_occupied(Lane::Left, 0, 9), 9);
    }

    #[test]
    fn zero_horizon_is_zero() {
        let r = road();
        assert_eq!(r.distance_to_next_occupied(Lane::Left, 3, 0), 0);
    }

    #[test]
    fn counts_empty_cells_before_blocker() {
        let mut r = road();
        r.set(Lane::Left, 3, Some(car(1)));
        // cells 1 and 2 are empty, 3 is occupied
        assert_eq!(r.distance_to_next_occupied(Lane::Left, 0, 9), 2);
        // the other lane is unaffected
        assert_eq!(r.distance_to_next_occupied(Lane::Right, 0, 9), 9);
    }

    #[test]
    fn adjacent_blocker_is_zero() {
        let mut r = road();
        r.set(Lane::Right, 11, Some(car(1)));
        assert_eq!(r.distance_to_next_occupied(Lane::Right, 10, 9), 0);
    }

    #[test]
    fn blocker_beyond_horizon_ignored() {
        let mut r = road();
        r.set(Lane::Left, 10, Some(car(1)));
        assert_eq!(r.distance_to_next_occupied(Lane::Left, 0, 9), 9);
        assert_eq!(r.distance_to_next_occupied(Lane::Left, 0, 10), 9);
    }

    #[test]
    fn scan_past_end_is_open_road() {
        let mut r = road();
        // a vehicle parked in the protected region is invisible
        r.set(Lane::Left, 31, Some(car(1)));
        assert_eq!(r.distance_to_next_occupied(Lane::Left, 25, 9), 9);
        // but a blocker before the end is still seen
        r.set(Lane::Left, 28, Some(car(2)));
        assert_eq!(r.distance_to_next_occupied(Lane::Left, 25, 9), 2);
    }
}

#[cfg(test)]
mod lane_change_tests {
    use super::*;

    #[test]
    fn clear_window_allows_change() {
        let r = road();
        assert!(r.can_change_left(10));
        assert!(r.can_change_right(10));
    }

    #[test]
    fn any_occupied_cell_in_window_blocks() {
        for offset in 0..3 {
            let mut r = road();
            r.set(Lane::Right, 10 + offset, Some(car(1)));
            assert!(!r.can_change_right(10), "blocked at +{offset}");
            assert!(r.can_change_left(10));
        }
    }

    #[test]
    fn cells_outside_window_do_not_block() {
        let mut r = road();
        r.set(Lane::Left, 9, Some(car(1)));
        r.set(Lane::Left, 13, Some(car(2)));
        assert!(r.can_change_left(10));
        assert!(r.can_change_into(Lane::Left, 10));
    }
}
