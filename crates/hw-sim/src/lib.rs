//! `hw-sim` — step loop orchestrator for the two-lane highway simulator.
//!
//! # One step
//!
//! ```text
//! for index in (0..length).rev():          // back to front
//!   for lane in [Left, Right]:
//!     ① Exit     — index + speed ≥ length − 1 → remove, record transit time
//!     ② Change   — WantsLaneChange and the other lane's 3-cell window is
//!                  clear → hop across, reset to Cruising
//!     ③ Cruise   — full speed if speed + gap cells are clear, otherwise
//!                  close up to the gap (or creep 1) and want a lane change
//! then, per lane:
//!   ④ Arrival  — with p_arrival spawn at position 0 (fast with p_fast)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`replicate`] replications on Rayon's pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hw_core::SimConfig;
//! use hw_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("mean transit: {:.2} steps", sim.average_transit_time()?);
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod observer;
pub mod replicate;
pub mod rules;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use replicate::{ReplicationSummary, mean_of_means, replicate};
pub use sim::{SimCounters, Simulator, StepSummary};
pub use stats::{TransitLog, TransitRecord};
