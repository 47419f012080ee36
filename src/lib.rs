// Library interface for fitreport modules
// This allows integration tests and benches to access the core functionality

pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod packages;
pub mod report;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use dispatch::read_package;
pub use error::{ErrorSeverity, PackageError, ReportError, Result, TrainingError};
pub use export::{render_reports, OutputFormat};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{SensorPackage, WorkoutKind};
pub use packages::{load_packages, process_packages, sample_packages};
pub use report::WorkoutReport;
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Training, TrainingSession};
pub use walking::SportsWalking;
