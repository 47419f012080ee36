//! Base training model shared by every workout variant
//!
//! A [`TrainingSession`] holds the readings common to all sports. Each variant
//! implements [`Training`], overriding the per-action distance and the calorie
//! formula; swimming additionally overrides mean speed.

use std::fmt::Debug;

use tracing::trace;

use crate::error::TrainingError;
use crate::models::WorkoutKind;
use crate::report::WorkoutReport;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Default distance covered by one action (one step), in meters
pub const LEN_STEP: f64 = 0.65;

/// Readings shared by every workout variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSession {
    /// Number of actions (steps or strokes)
    pub action: u64,

    /// Duration in hours
    pub duration: f64,

    /// Athlete weight in kilograms
    pub weight: f64,
}

impl TrainingSession {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Duration in minutes
    pub fn duration_minutes(&self) -> f64 {
        self.duration * MINUTES_IN_HOUR
    }

    /// Average speed over `distance` km, failing on a zero duration
    pub fn speed_over(&self, distance: f64) -> Result<f64, TrainingError> {
        if self.duration == 0.0 {
            return Err(TrainingError::division_by_zero("mean speed"));
        }
        Ok(distance / self.duration)
    }
}

/// Calculations every workout variant supports
pub trait Training: Debug {
    /// Shared readings
    fn session(&self) -> &TrainingSession;

    /// Which workout variant this is
    fn kind(&self) -> WorkoutKind;

    /// Activity label used in reports
    fn label(&self) -> &'static str {
        self.kind().label()
    }

    /// Distance covered by one action, in meters
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        self.session().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> Result<f64, TrainingError> {
        self.session().speed_over(self.distance_km())
    }

    /// Calories burned in kcal. Every variant must override this.
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Err(TrainingError::NotImplemented {
            training: self.label().to_string(),
            operation: "spent calories",
        })
    }

    /// Build the summary report for this workout
    fn show_training_info(&self) -> Result<WorkoutReport, TrainingError> {
        let distance = self.distance_km();
        let speed = self.mean_speed_kmh()?;
        let calories = self.spent_calories()?;

        trace!(
            training = self.label(),
            distance,
            speed,
            calories,
            "Computed workout summary"
        );

        Ok(WorkoutReport::new(
            self.label(),
            self.session().duration,
            distance,
            speed,
            calories,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A variant that forgot to override the calorie formula
    #[derive(Debug)]
    struct BareTraining(TrainingSession);

    impl Training for BareTraining {
        fn session(&self) -> &TrainingSession {
            &self.0
        }

        fn kind(&self) -> WorkoutKind {
            WorkoutKind::Running
        }
    }

    #[test]
    fn test_base_distance_and_speed() {
        let training = BareTraining(TrainingSession::new(1000, 0.5, 70.0));
        assert!((training.distance_km() - 0.65).abs() < 1e-12);
        assert!((training.mean_speed_kmh().unwrap() - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_zero_duration_fails() {
        let training = BareTraining(TrainingSession::new(1000, 0.0, 70.0));
        assert_eq!(
            training.mean_speed_kmh(),
            Err(TrainingError::DivisionByZero {
                calculation: "mean speed"
            })
        );
    }

    #[test]
    fn test_calories_must_be_overridden() {
        let training = BareTraining(TrainingSession::new(1000, 1.0, 70.0));
        assert!(matches!(
            training.spent_calories(),
            Err(TrainingError::NotImplemented { .. })
        ));
        assert!(training.show_training_info().is_err());
    }
}
