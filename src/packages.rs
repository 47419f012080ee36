//! Sensor package sources and batch processing
//!
//! Packages can come from the built-in sample list, the configuration file,
//! or a CSV/JSON/TOML file given on the command line.

use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{PackageError, ReportError, Result};
use crate::models::SensorPackage;
use crate::report::WorkoutReport;

/// The sample readings shipped with the tool
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Supported package file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    Csv,
    Json,
    Toml,
}

impl PackageFormat {
    /// Detect the format from the file extension
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(PackageFormat::Csv),
            "json" => Ok(PackageFormat::Json),
            "toml" => Ok(PackageFormat::Toml),
            other => Err(PackageError::UnsupportedFormat {
                format: other.to_string(),
            }
            .into()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PackageFormat::Csv => "csv",
            PackageFormat::Json => "json",
            PackageFormat::Toml => "toml",
        }
    }
}

/// Load sensor packages from a file, detecting the format by extension
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let format = PackageFormat::detect(path)?;
    let content = fs::read_to_string(path)?;
    let packages = parse_packages(&content, format)?;
    info!(
        path = %path.display(),
        format = format.name(),
        count = packages.len(),
        "Loaded sensor packages"
    );
    Ok(packages)
}

/// Parse packages from in-memory content
pub fn parse_packages(content: &str, format: PackageFormat) -> Result<Vec<SensorPackage>> {
    match format {
        PackageFormat::Csv => parse_csv(content),
        PackageFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(format, e)),
        PackageFormat::Toml => {
            #[derive(Deserialize)]
            struct PackageFile {
                #[serde(default)]
                packages: Vec<SensorPackage>,
            }

            let file: PackageFile =
                toml::from_str(content).map_err(|e| parse_error(format, e))?;
            Ok(file.packages)
        }
    }
}

/// Rows look like `RUN,15000,1,75`; row length varies with the workout type.
fn parse_csv(content: &str) -> Result<Vec<SensorPackage>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut packages = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| parse_error(PackageFormat::Csv, e))?;
        let mut fields = record.iter();

        let code = match fields.next() {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => {
                return Err(PackageError::MissingData {
                    field: format!("workout code on row {}", row + 1),
                }
                .into())
            }
        };

        let data = fields
            .map(|value| {
                value.parse::<f64>().map_err(|_| {
                    ReportError::from(PackageError::ParseError {
                        format: "csv".to_string(),
                        reason: format!("row {}: '{}' is not a number", row + 1, value),
                    })
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        packages.push(SensorPackage { code, data });
    }

    Ok(packages)
}

fn parse_error(format: PackageFormat, err: impl std::fmt::Display) -> ReportError {
    PackageError::ParseError {
        format: format.name().to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Dispatch every package and build its report, in order.
///
/// The first failure aborts the batch unless `skip_invalid` is set, in which
/// case failing packages are logged and left out.
pub fn process_packages(
    packages: &[SensorPackage],
    skip_invalid: bool,
) -> Result<Vec<WorkoutReport>> {
    let mut reports = Vec::with_capacity(packages.len());

    for package in packages {
        let outcome = package
            .to_training()
            .and_then(|training| training.show_training_info());

        match outcome {
            Ok(report) => reports.push(report),
            Err(err) if skip_invalid => {
                warn!(code = %package.code, error = %err, "Skipping invalid sensor package");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainingError;

    #[test]
    fn test_parse_csv() {
        let content = "# code,values\nSWM, 720, 1, 80, 25, 40\n\nRUN,15000,1,75\n";
        let packages = parse_packages(content, PackageFormat::Csv).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]));
        assert_eq!(packages[1].code, "RUN");
    }

    #[test]
    fn test_parse_csv_bad_number() {
        let err = parse_packages("RUN,fast,1,75\n", PackageFormat::Csv).unwrap_err();
        assert!(matches!(err, ReportError::Package(PackageError::ParseError { .. })));
    }

    #[test]
    fn test_parse_json() {
        let content = r#"[{"code": "WLK", "data": [9000, 1, 75, 180]}]"#;
        let packages = parse_packages(content, PackageFormat::Json).unwrap();
        assert_eq!(packages, vec![SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0])]);
    }

    #[test]
    fn test_parse_toml() {
        let content = "[[packages]]\ncode = \"RUN\"\ndata = [15000, 1, 75]\n";
        let packages = parse_packages(content, PackageFormat::Toml).unwrap();
        assert_eq!(packages, vec![SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])]);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(PackageFormat::detect(Path::new("a.CSV")).unwrap(), PackageFormat::Csv);
        assert!(matches!(
            PackageFormat::detect(Path::new("a.xml")),
            Err(ReportError::Package(PackageError::UnsupportedFormat { .. }))
        ));
    }

    #[test]
    fn test_process_samples() {
        let reports = process_packages(&sample_packages(), false).unwrap();
        let labels: Vec<&str> = reports.iter().map(|r| r.training_type.as_str()).collect();
        assert_eq!(labels, ["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_process_stops_on_first_error() {
        let mut packages = sample_packages();
        packages.insert(1, SensorPackage::new("XYZ", vec![1.0]));

        let err = process_packages(&packages, false).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Training(TrainingError::UnknownWorkoutType { .. })
        ));

        let reports = process_packages(&packages, true).unwrap();
        assert_eq!(reports.len(), 3);
    }
}
