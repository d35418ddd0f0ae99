use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::{Table, Tabled};

use fitrs::{
    init_logging, read_package, read_packages, registry, LogConfig, LogFormat, LogLevel, Package,
    PackageFormat,
};

/// FitRS - Fitness Sensor Summary CLI
///
/// A Rust-based tool for turning raw fitness sensor packages into
/// distance, mean speed, and calorie summaries.
#[derive(Parser)]
#[command(name = "fitrs")]
#[command(author = "FitRS Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Fitness sensor summary CLI", long_about = None)]
struct Cli {
    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format (pretty, json, compact)
    #[arg(long, default_value = "compact")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process sensor packages from a file, one summary line per record
    Process {
        /// Input file path (JSON or CSV)
        file: PathBuf,

        /// Input format (inferred from the extension if not specified)
        #[arg(short, long)]
        format: Option<PackageFormat>,

        /// Abort on the first invalid record instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Process the built-in demonstration package set
    Sample,

    /// List supported workout codes
    Codes,
}

#[derive(Tabled)]
struct CodeRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Training")]
    label: &'static str,
    #[tabled(rename = "Readings")]
    arity: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = LogConfig {
        level: LogLevel::from_verbosity(cli.verbose),
        format: cli.log_format,
    };
    if let Err(err) = init_logging(&config) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(false) when the batch completed but some records were skipped.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Process {
            file,
            format,
            strict,
        } => {
            let packages = read_packages(&file, format)?;
            process_packages(&packages, strict)
        }
        Commands::Sample => process_packages(&sample_packages(), false),
        Commands::Codes => {
            let rows: Vec<CodeRow> = registry()
                .iter()
                .map(|entry| CodeRow {
                    code: entry.code,
                    label: entry.label,
                    arity: entry.arity,
                })
                .collect();
            println!("{}", Table::new(rows));
            Ok(true)
        }
    }
}

fn process_packages(packages: &[Package], strict: bool) -> Result<bool> {
    let mut clean = true;
    for package in packages {
        match read_package(&package.workout_type, &package.data) {
            Ok(training) => println!("{}", training.summary()),
            Err(err) if strict => return Err(err.into()),
            Err(err) => {
                clean = false;
                tracing::warn!(code = %package.workout_type, "skipping record: {err}");
            }
        }
    }
    Ok(clean)
}

/// The demonstration batch shipped with the sensor harness.
fn sample_packages() -> Vec<Package> {
    vec![
        Package {
            workout_type: "SWM".to_string(),
            data: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        Package {
            workout_type: "RUN".to_string(),
            data: vec![15000.0, 1.0, 75.0],
        },
        Package {
            workout_type: "WLK".to_string(),
            data: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_batch_is_clean() {
        assert!(process_packages(&sample_packages(), false).unwrap());
    }

    #[test]
    fn batch_continues_past_bad_records_by_default() {
        let mut packages = sample_packages();
        packages.insert(
            1,
            Package {
                workout_type: "XYZ".to_string(),
                data: vec![1.0],
            },
        );
        let clean = process_packages(&packages, false).unwrap();
        assert!(!clean);
    }

    #[test]
    fn strict_batch_stops_at_the_first_bad_record() {
        let packages = vec![
            Package {
                workout_type: "RUN".to_string(),
                data: vec![15000.0, 1.0, 75.0],
            },
            Package {
                workout_type: "WLK".to_string(),
                data: vec![9000.0, 1.0],
            },
        ];
        assert!(process_packages(&packages, true).is_err());
        assert!(process_packages(&packages[..1], true).unwrap());
    }
}
