use clap::Parser;
use id_holidays::{
    validate, DisplayState, HolidayChecker, HolidayReport, HttpHolidayLookup, Labels,
    LookupConfig,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "holiday-check",
    version,
    about = "Validate an identity number and look up the public holidays on its birthday"
)]
struct Cli {
    /// 13 digit identity number
    id_number: String,
    #[arg(long, default_value = "", help = "Display name sent to the lookup service")]
    name: String,
    #[arg(long, help = "JSON file with the lookup configuration")]
    config: Option<PathBuf>,
    #[arg(long, env = "HOLIDAY_LOOKUP_ENDPOINT", help = "Holiday lookup endpoint")]
    endpoint: Option<String>,
    #[arg(long, env = "HOLIDAY_LOOKUP_TIMEOUT_SECS", help = "Lookup timeout in seconds")]
    timeout_secs: Option<u64>,
    #[arg(long, help = "Only validate and decode, skip the holiday lookup")]
    offline: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the identity number was accepted.
fn run(cli: &Cli) -> Result<bool, CliError> {
    if cli.offline {
        return print_offline(cli);
    }

    let lookup = HttpHolidayLookup::new(load_config(cli)?);
    tracing::debug!(
        endpoint = %lookup.config().endpoint,
        timeout = ?lookup.config().timeout,
        "using holiday lookup"
    );
    let checker = HolidayChecker::with_labels(lookup, &Labels::new(&[("caller", "cli")]));

    let state = checker.search_blocking(&cli.id_number, &cli.name);
    print_state(cli.json, &state)?;
    Ok(state.is_ok())
}

fn load_config(cli: &Cli) -> Result<LookupConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => LookupConfig::default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(timeout_secs));
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<LookupConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn print_offline(cli: &Cli) -> Result<bool, CliError> {
    match validate(&cli.id_number) {
        Ok(decoded) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: decoded
                    })?
                );
            } else {
                println!("{}", decoded.summary(&cli.name));
            }
            Ok(true)
        }
        Err(err) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: false,
                        data: err.to_string()
                    })?
                );
            } else {
                eprintln!("{err}");
            }
            Ok(false)
        }
    }
}

fn print_state(json: bool, state: &DisplayState) -> Result<(), CliError> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: state.is_ok(),
                data: state
            })?
        );
        return Ok(());
    }

    match state {
        DisplayState::Found(report) => print_report(report),
        DisplayState::Failed { error_message } => eprintln!("{error_message}"),
        DisplayState::Idle => {}
    }
    Ok(())
}

fn print_report(report: &HolidayReport) {
    println!("{}", report.description);
    println!();
    println!("Holiday: {}", report.holiday_description);
    if let Some(year) = &report.year {
        println!("Year: {year}");
    }
    if !report.all_holidays_list.is_empty() {
        println!("All holidays:");
        for holiday in &report.all_holidays_list {
            println!("  - {holiday}");
        }
    }
    if !report.message.is_empty() {
        println!("{}", report.message);
    }
}
