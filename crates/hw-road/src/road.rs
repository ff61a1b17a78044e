//! The two-lane positional grid.

use hw_core::config::LANE_CHANGE_LOOKAHEAD;
use hw_core::{HighwayConfig, Lane, VehicleId};

use crate::Vehicle;

/// Two lanes of `length + boundary_offset` cells, each empty or holding one
/// vehicle.
///
/// Positions `0 .. length` are the drivable highway.  The trailing
/// `boundary_offset` cells are never driven into (the exit check removes a
/// vehicle first) and exist so lookahead probes near the far end index
/// allocated storage.
///
/// All index arguments are preconditions: an index at or past
/// [`capacity`][Self::capacity] is a bug in the caller and panics.
#[derive(Clone, Debug)]
pub struct Road {
    length: usize,
    lanes:  [Vec<Option<Vehicle>>; 2],
}

impl Road {
    /// An empty road of `length` drivable cells plus `boundary_offset`
    /// protected cells per lane.
    pub fn new(length: usize, boundary_offset: usize) -> Self {
        let capacity = length + boundary_offset;
        Self {
            length,
            lanes: [vec![None; capacity], vec![None; capacity]],
        }
    }

    pub fn from_config(config: &HighwayConfig) -> Self {
        Self::new(config.length, config.boundary_offset)
    }

    /// Drivable length of the highway.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Allocated cells per lane, including the protected boundary region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.lanes[0].len()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, lane: Lane, index: usize) -> Option<&Vehicle> {
        self.lanes[lane.index()][index].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, lane: Lane, index: usize) -> Option<&mut Vehicle> {
        self.lanes[lane.index()][index].as_mut()
    }

    /// Overwrite a cell, returning whatever was there before.
    #[inline]
    pub fn set(&mut self, lane: Lane, index: usize, value: Option<Vehicle>) -> Option<Vehicle> {
        std::mem::replace(&mut self.lanes[lane.index()][index], value)
    }

    /// Remove and return the occupant of a cell.
    #[inline]
    pub fn take(&mut self, lane: Lane, index: usize) -> Option<Vehicle> {
        self.lanes[lane.index()][index].take()
    }

    #[inline]
    pub fn is_empty_at(&self, lane: Lane, index: usize) -> bool {
        self.lanes[lane.index()][index].is_none()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Number of consecutive empty cells in `from + 1 ..= from + horizon`
    /// before the first occupied one.
    ///
    /// Returns `horizon` when the whole window is empty, and also as soon as
    /// the scan reaches `length`: nothing past the end of the highway can
    /// block a vehicle.
    pub fn distance_to_next_occupied(&self, lane: Lane, from: usize, horizon: usize) -> usize {
        let cells = &self.lanes[lane.index()];
        let mut clear = 0;
        for i in from + 1..=from + horizon {
            if i >= self.length {
                return horizon;
            }
            if cells[i].is_some() {
                return clear;
            }
            clear += 1;
        }
        clear
    }

    /// `true` iff `lane` is empty at `index`, `index + 1`, and `index + 2`.
    ///
    /// Only valid where `index + 2 < capacity`; the simulator calls it for
    /// vehicles that passed the exit check, which guarantees that.
    pub fn can_change_into(&self, lane: Lane, index: usize) -> bool {
        let cells = &self.lanes[lane.index()];
        cells[index..=index + LANE_CHANGE_LOOKAHEAD]
            .iter()
            .all(Option::is_none)
    }

    #[inline]
    pub fn can_change_left(&self, index: usize) -> bool {
        self.can_change_into(Lane::Left, index)
    }

    #[inline]
    pub fn can_change_right(&self, index: usize) -> bool {
        self.can_change_into(Lane::Right, index)
    }

    // ── Whole-road views ──────────────────────────────────────────────────

    /// Occupied cells of `lane` as `(index, vehicle)`, ascending by index.
    pub fn occupied(&self, lane: Lane) -> impl Iterator<Item = (usize, &Vehicle)> + '_ {
        self.lanes[lane.index()]
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_ref().map(|v| (i, v)))
    }

    /// Vehicles currently on the road, both lanes.
    pub fn vehicle_count(&self) -> usize {
        Lane::ALL.iter().map(|&lane| self.occupied(lane).count()).sum()
    }

    /// Where vehicle `id` currently sits, if it is on the road.
    pub fn position_of(&self, id: VehicleId) -> Option<(Lane, usize)> {
        Lane::ALL.iter().find_map(|&lane| {
            self.occupied(lane)
                .find(|(_, v)| v.id() == id)
                .map(|(i, _)| (lane, i))
        })
    }
}
