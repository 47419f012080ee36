use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrainingError;

/// Workout types recognised by the sensor dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All supported kinds in dispatch-table order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Short code sent by the sensor block
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label used in rendered reports
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional parameter names accepted by the constructor
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration_h", "weight_kg"],
            WorkoutKind::SportsWalking => &["action", "duration_h", "weight_kg", "height_cm"],
            WorkoutKind::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
        }
    }

    /// Number of positional values the constructor takes
    pub fn arity(&self) -> usize {
        self.parameters().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = TrainingError;

    /// Codes are matched exactly; "run" is not "RUN".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| TrainingError::UnknownWorkoutType {
                code: s.to_string(),
            })
    }
}

/// Raw reading from the sensor block: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type code (SWM, RUN, WLK)
    pub code: String,

    /// Positional values in constructor order
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}
