//! Sensor package dispatcher
//!
//! Maps a workout code to its constructor and feeds the raw values to it
//! positionally.

use tracing::{debug, instrument};

use crate::error::TrainingError;
use crate::models::{SensorPackage, WorkoutKind};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Training;
use crate::walking::SportsWalking;

type Constructor = fn(&[f64]) -> Result<Box<dyn Training>, TrainingError>;

/// Code to constructor table
static WORKOUT_TABLE: [(WorkoutKind, Constructor); 3] = [
    (WorkoutKind::Swimming, build_swimming),
    (WorkoutKind::Running, build_running),
    (WorkoutKind::SportsWalking, build_walking),
];

/// Build the workout for `code` from its positional sensor values
#[instrument(level = "debug", skip(data), fields(values = data.len()))]
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, TrainingError> {
    let (kind, constructor) = WORKOUT_TABLE
        .iter()
        .find(|(kind, _)| kind.code() == code)
        .ok_or_else(|| TrainingError::UnknownWorkoutType {
            code: code.to_string(),
        })?;

    if data.len() != kind.arity() {
        return Err(TrainingError::ArityMismatch {
            code: code.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let training = constructor(data)?;
    debug!(kind = %kind, "Dispatched sensor package");
    Ok(training)
}

impl SensorPackage {
    /// Dispatch this package to its workout variant
    pub fn to_training(&self) -> Result<Box<dyn Training>, TrainingError> {
        read_package(&self.code, &self.data)
    }
}

/// Convert the raw action reading to a count
fn action_count(value: f64) -> Result<u64, TrainingError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(TrainingError::InvalidArgument {
            parameter: "action",
            value,
        });
    }
    Ok(value as u64)
}

fn build_running(data: &[f64]) -> Result<Box<dyn Training>, TrainingError> {
    Ok(Box::new(Running::new(action_count(data[0])?, data[1], data[2])))
}

fn build_walking(data: &[f64]) -> Result<Box<dyn Training>, TrainingError> {
    Ok(Box::new(SportsWalking::new(
        action_count(data[0])?,
        data[1],
        data[2],
        data[3],
    )))
}

fn build_swimming(data: &[f64]) -> Result<Box<dyn Training>, TrainingError> {
    Ok(Box::new(Swimming::new(
        action_count(data[0])?,
        data[1],
        data[2],
        data[3],
        data[4],
    )))
}
