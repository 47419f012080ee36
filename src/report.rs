//! Workout summary produced by every training variant

use serde::{Deserialize, Serialize};
use std::fmt;

/// Informational message about a completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReport {
    /// Activity label, e.g. "Running"
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance in kilometers
    pub distance: f64,

    /// Average speed in km/h
    pub speed: f64,

    /// Calories burned in kcal
    pub calories: f64,
}

impl WorkoutReport {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the one-line summary
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let report = WorkoutReport::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(
            report.render(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_render_fixed_point_for_large_values() {
        let report = WorkoutReport::new("Running", 12.5, 12345.6789, 0.0004, 1e6);
        let line = report.render();
        assert!(line.contains("Длительность: 12.500 ч."));
        assert!(line.contains("Дистанция: 12345.679 км"));
        assert!(line.contains("Ср. скорость: 0.000 км/ч"));
        assert!(line.contains("Потрачено ккал: 1000000.000."));
    }
}
