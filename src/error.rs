//! Unified error hierarchy for fitreport
//!
//! Calculation and dispatch failures live in [`TrainingError`], package file
//! problems in [`PackageError`]; both roll up into [`ReportError`].

use thiserror::Error;

/// Top-level error type for all fitreport operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// Dispatch and calculation errors
    #[error("Training error: {0}")]
    Training(#[from] TrainingError),

    /// Sensor package loading errors
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors raised while turning a sensor package into a report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// The dispatch code is not in the workout table
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// Argument count does not match the variant constructor
    #[error("Workout {code} expects {expected} values, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A calculation the variant was required to override
    #[error("{operation} is not implemented for {training}")]
    NotImplemented {
        training: String,
        operation: &'static str,
    },

    /// A positional value could not be converted to its parameter type
    #[error("Invalid value for {parameter}: {value}")]
    InvalidArgument { parameter: &'static str, value: f64 },

    /// Division by zero
    #[error("Division by zero in {calculation}")]
    DivisionByZero { calculation: &'static str },
}

/// Sensor package file errors
#[derive(Debug, Error)]
pub enum PackageError {
    /// Unsupported file format
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Format-specific parsing error
    #[error("Parse error in {format}: {reason}")]
    ParseError { format: String, reason: String },

    /// Missing required data
    #[error("Missing required data: {field}")]
    MissingData { field: String },
}

/// Result type alias for fitreport operations
pub type Result<T> = std::result::Result<T, ReportError>;

impl TrainingError {
    /// Construct a division-by-zero error for the named calculation
    pub(crate) fn division_by_zero(calculation: &'static str) -> Self {
        TrainingError::DivisionByZero { calculation }
    }
}

impl ReportError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReportError::Io(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::Training(TrainingError::NotImplemented { .. }) => ErrorSeverity::Critical,
            ReportError::Training(TrainingError::UnknownWorkoutType { .. }) => {
                ErrorSeverity::Warning
            }
            ReportError::Package(PackageError::MissingData { .. }) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Emit this error as a tracing event at the level its severity maps to
    pub fn log(&self) {
        let severity = self.severity();
        if severity.to_tracing_level() == tracing::Level::WARN {
            tracing::warn!(severity = ?severity, "{}", self);
        } else {
            tracing::error!(severity = ?severity, "{}", self);
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ReportError::Training(TrainingError::UnknownWorkoutType { code }) => {
                format!(
                    "Unknown workout code '{}'. Run `fitreport types` to list supported codes.",
                    code
                )
            }
            ReportError::Training(TrainingError::ArityMismatch {
                code,
                expected,
                actual,
            }) => {
                format!(
                    "Workout '{}' needs {} sensor values but {} were supplied.",
                    code, expected, actual
                )
            }
            ReportError::Training(TrainingError::DivisionByZero { calculation }) => {
                format!(
                    "Cannot compute {}: a duration or height of zero was supplied.",
                    calculation
                )
            }
            ReportError::Package(PackageError::UnsupportedFormat { format }) => {
                format!(
                    "Package files must be .csv, .json or .toml (got '{}').",
                    format
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Programming error, only reachable through misuse
    Critical,
    /// Error that prevents the operation
    Error,
    /// Bad input the user can fix
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
