//! Output formats for a batch of workout reports

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

use crate::report::WorkoutReport;

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary line per workout
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// Terminal table
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Workout")]
    training_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories (kcal)")]
    calories: String,
}

impl From<&WorkoutReport> for ReportRow {
    fn from(report: &WorkoutReport) -> Self {
        Self {
            training_type: report.training_type.clone(),
            duration: format!("{:.3}", report.duration),
            distance: format!("{:.3}", report.distance),
            speed: format!("{:.3}", report.speed),
            calories: format!("{:.3}", report.calories),
        }
    }
}

/// Render reports in the requested format
pub fn render_reports(reports: &[WorkoutReport], format: OutputFormat) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Text => reports
            .iter()
            .map(WorkoutReport::render)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        OutputFormat::Table => {
            let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
            Table::new(rows).with(Style::modern()).to_string()
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reports() -> Vec<WorkoutReport> {
        vec![
            WorkoutReport::new("Swimming", 1.0, 0.9936, 1.0, 336.0),
            WorkoutReport::new("Running", 1.0, 9.75, 9.75, 797.805),
        ]
    }

    #[test]
    fn test_text_output() {
        let output = render_reports(&sample_reports(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
        assert!(lines[1].ends_with("Потрачено ккал: 797.805."));
    }

    #[test]
    fn test_json_output() {
        let output = render_reports(&sample_reports(), OutputFormat::Json).unwrap();
        let parsed: Vec<WorkoutReport> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample_reports());
    }

    #[test]
    fn test_table_output() {
        let output = render_reports(&sample_reports(), OutputFormat::Table).unwrap();
        assert!(output.contains("Calories (kcal)"));
        assert!(output.contains("0.994"));
        assert!(output.contains("797.805"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
