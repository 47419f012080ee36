//! Swimming workout
//!
//! Distance still comes from the stroke count, but mean speed is measured
//! from pool length and laps swum, so it ignores the action count entirely.

use crate::error::TrainingError;
use crate::models::WorkoutKind;
use crate::training::{Training, TrainingSession, M_IN_KM};

/// Distance covered by one stroke, in meters
const LEN_STROKE: f64 = 1.38;
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: TrainingSession,

    /// Pool length in meters
    pub length_pool: f64,

    /// Number of pool lengths swum
    pub count_pool: f64,
}

impl Swimming {
    pub fn new(action: u64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            session: TrainingSession::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn session(&self) -> &TrainingSession {
        &self.session
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed_kmh(&self) -> Result<f64, TrainingError> {
        self.session
            .speed_over(self.length_pool * self.count_pool / M_IN_KM)
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Ok((self.mean_speed_kmh()? + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight
            * self.session.duration)
    }
}
