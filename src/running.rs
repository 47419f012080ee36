//! Running workout

use crate::error::TrainingError;
use crate::models::WorkoutKind;
use crate::training::{Training, TrainingSession, MINUTES_IN_HOUR, M_IN_KM};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Running: distance from step count, calories from mean speed
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: TrainingSession,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            session: TrainingSession::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn session(&self) -> &TrainingSession {
        &self.session
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let speed = self.mean_speed_kmh()?;
        Ok(
            (CALORIES_MEAN_SPEED_MULTIPLIER * speed + CALORIES_MEAN_SPEED_SHIFT)
                * self.session.weight
                / M_IN_KM
                * self.session.duration
                * MINUTES_IN_HOUR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sample() {
        let run = Running::new(15000, 1.0, 75.0);
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh().unwrap() - 9.75).abs() < 1e-9);
        assert!((run.spent_calories().unwrap() - 797.805).abs() < 1e-9);
    }

    #[test]
    fn test_faster_run_burns_more() {
        let slow = Running::new(10000, 1.0, 75.0);
        let fast = Running::new(12000, 1.0, 75.0);
        assert!(fast.spent_calories().unwrap() > slow.spent_calories().unwrap());
    }
}
