use std::path::PathBuf;

use anyhow::{Context, Result};

use kline_signals::config::{Config, DEFAULT_CONFIG_PATH};
use kline_signals::error::AnalysisError;
use kline_signals::loader;
use kline_signals::pipeline;
use kline_signals::report;

struct CliArgs {
    config_path: PathBuf,
    json: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut json = false;
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            other => config_path = PathBuf::from(other),
        }
    }
    CliArgs { config_path, json }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args);

    let config = match Config::load(&cli.config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so stdout stays clean for the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.logging.level.as_str())
            }),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        symbol = %config.data.symbol,
        interval = %config.data.kline_interval,
        path = %config.data.path.display(),
        "Starting kline-signals"
    );

    let candles = loader::load_klines(&config.data.path)?;
    let interval_ms = config.data.kline_interval_ms()?;
    let irregular = loader::irregular_gaps(&candles, interval_ms);
    if irregular > 0 {
        tracing::warn!(
            irregular,
            interval_ms,
            "Kline spacing does not match configured interval"
        );
    }

    let analysis = match pipeline::analyze_with(&candles, &config.divergence) {
        Ok(a) => a,
        Err(e @ AnalysisError::InsufficientData { .. }) => {
            tracing::error!(error = %e, "Analysis aborted");
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if cli.json {
        let out = serde_json::to_string_pretty(&analysis).context("failed to encode analysis")?;
        println!("{}", out);
    } else {
        println!(
            "{}",
            report::render_report(
                &analysis,
                &config.data.symbol,
                &config.data.kline_interval,
                &config.report,
            )
        );
    }
    Ok(())
}
