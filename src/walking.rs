//! Sports walking workout

use crate::error::TrainingError;
use crate::models::WorkoutKind;
use crate::training::{Training, TrainingSession};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

/// Sports walking: the calorie formula also depends on athlete height
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: TrainingSession,

    /// Athlete height in centimeters
    pub height: f64,
}

impl SportsWalking {
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: TrainingSession::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &TrainingSession {
        &self.session
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        if self.height == 0.0 {
            return Err(TrainingError::division_by_zero("walking calories"));
        }
        let speed = self.mean_speed_kmh()?;
        let weight = self.session.weight;
        Ok((CALORIES_WEIGHT_MULTIPLIER * weight
            + ((speed * KMH_IN_MSEC).powi(2) / (self.height / CM_IN_M))
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * self.session.duration_minutes())
    }
}
