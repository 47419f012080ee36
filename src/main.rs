use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use fitreport::logging::{init_logging, LogFormat, LogLevel};
use fitreport::{
    load_packages, process_packages, read_package, render_reports, AppConfig, OutputFormat,
    ReportError, WorkoutKind,
};

/// fitreport - Workout Sensor Report CLI
///
/// Turns raw readings from a fitness sensor block into a summary of
/// duration, distance, average speed and calories burned.
#[derive(Parser)]
#[command(name = "fitreport")]
#[command(version)]
#[command(about = "Workout sensor report CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log level (error, warn, info, debug, trace); overrides -v
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Log format (pretty, json, compact)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report on every configured sensor package
    Report {
        /// Read packages from a CSV, JSON or TOML file instead
        #[arg(short = 'i', long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format (text, json, table)
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Skip packages that fail instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Report on a single sensor package
    Calc {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Sensor values in constructor order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// List supported workout codes
    Types,

    /// Inspect or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(short, long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_errors = cli.verbose > 0 || cli.log_level.is_some();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<ReportError>() {
                Some(report_err) => {
                    if log_errors {
                        report_err.log();
                    }
                    report_err.user_message()
                }
                None => format!("{:#}", err),
            };
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone();
    let mut config = match (&cli.command, &config_path) {
        (Commands::Config { init: true, force, .. }, path) => {
            let target = path.clone().unwrap_or_else(AppConfig::default_config_path);
            AppConfig::load_for_init(target, *force)?
        }
        (_, Some(path)) => AppConfig::load_from_file(path)?,
        (_, None) => AppConfig::load_or_default()?,
    };

    config
        .logging
        .apply_overrides(cli.verbose, cli.log_level, cli.log_format);
    init_logging(&config.logging)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Report {
            file,
            format,
            skip_invalid,
        } => {
            let packages = match file {
                Some(path) => load_packages(&path)?,
                None => config.packages.clone(),
            };
            let format = format.unwrap_or(config.output.format);
            let skip_invalid = skip_invalid || config.output.skip_invalid;

            let reports = process_packages(&packages, skip_invalid)?;
            tracing::info!(count = reports.len(), "Built workout reports");
            println!("{}", render_reports(&reports, format)?);
        }

        Commands::Calc { code, values } => {
            let training = read_package(&code, &values).map_err(ReportError::from)?;
            let report = training
                .show_training_info()
                .map_err(ReportError::from)?;
            println!("{}", report.render());
        }

        Commands::Types => {
            println!("{}", "Supported workout types:".green().bold());
            for kind in WorkoutKind::ALL {
                println!(
                    "  {}  {:<14} {}",
                    kind.code().cyan().bold(),
                    kind.label(),
                    kind.parameters().join(", ").dimmed()
                );
            }
        }

        Commands::Config { show, init, force } => {
            if init {
                let path = config_path.unwrap_or_else(AppConfig::default_config_path);
                if path.exists() && !force {
                    bail!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
                AppConfig::default().save_to_file(&path)?;
                println!(
                    "{} {}",
                    "✓ Wrote default configuration to".green(),
                    path.display()
                );
            }
            if show || !init {
                print!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}
