//! `hw-road` — vehicles and the two-lane road grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`vehicle`] | `Vehicle`, `SpeedClass` — per-vehicle state                   |
//! | [`intent`]  | `Intent` — `Cruising` / `WantsLaneChange`                     |
//! | [`road`]    | `Road` — `[Vec<Option<Vehicle>>; 2]` plus spatial queries     |
//!
//! # Ownership model
//!
//! A `Vehicle` lives inside exactly one road cell.  Moving it is a
//! `take` from the origin followed by a `set` at the destination, so the
//! type system rules out the same vehicle sitting in two cells at once.

pub mod intent;
pub mod road;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use intent::Intent;
pub use road::Road;
pub use vehicle::{SpeedClass, Vehicle};
