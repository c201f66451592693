//! CEA Frontier command-line entry point.
//!
//! Usage: `cea-frontier <scenario.json> [interval-index]`
//!
//! Prints the analysis report as pretty JSON on stdout; logs go to stderr.

use std::error::Error;
use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cea_frontier::adapters::Scenario;
use cea_frontier::application::{FrontierAnalysis, IntervalChoice};
use cea_frontier::config::{AppConfig, LoggingConfig};

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or("usage: cea-frontier <scenario.json> [interval-index]")?;
    let interval = args.next().map(|raw| raw.parse::<usize>()).transpose()?;

    let scenario = Scenario::load(&path)?;
    let mut request = scenario.request();
    if let Some(index) = interval {
        request.interval = IntervalChoice::Index(index);
    }

    let analysis = FrontierAnalysis::new(&config.analysis);
    tracing::info!(scenario = %path, policy = ?analysis.policy(), "Running frontier analysis");
    let report = analysis.run(&request)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` overrides the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .ok();
    }
}
