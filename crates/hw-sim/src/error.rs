use hw_core::{CoreError, Step, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("initial road has {got} drivable cells but the config asks for {expected}")]
    RoadLengthMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("{vehicle} on the initial road arrives at {arrival}, after the start step {start}")]
    ArrivalAfterStart {
        vehicle: VehicleId,
        arrival: Step,
        start:   Step,
    },

    /// No vehicle has left the highway yet, so there is nothing to average.
    #[error("no transit samples recorded")]
    NoData,
}

pub type SimResult<T> = Result<T, SimError>;
