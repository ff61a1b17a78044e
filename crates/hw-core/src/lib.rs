//! `hw-core` — foundational types for the two-lane highway simulator.
//!
//! This crate is a dependency of every other `hw-*` crate.  It has no `hw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `VehicleId`                                            |
//! | [`lane`]      | `Lane` (`Left` / `Right`) and `opposite()`             |
//! | [`step`]      | `Step` — discrete time counter                         |
//! | [`config`]    | `HighwayConfig`, `SimConfig`, `SpawnPolicy`            |
//! | [`rng`]       | `SimRng` (seeded, injected into the simulator)         |
//! | [`error`]     | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and id types.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod lane;
pub mod rng;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HighwayConfig, SimConfig, SpawnPolicy};
pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use lane::Lane;
pub use rng::SimRng;
pub use step::Step;
