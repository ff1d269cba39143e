//! Folio CLI - Command line interface for portfolio weighting and metrics.
//!
//! Prints plain-text reports by default, or JSON envelopes with `--format json`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    portfolio::{analyze_portfolio, calculate_portfolio_value, optimize_weights},
    report::{format_metrics, format_valuation, format_weights, named_weights},
    AnalysisConfig, AnalysisReport, ApiResponse, ReportFormat,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio CLI - portfolio weighting heuristic and risk metrics")]
#[command(version)]
struct Cli {
    /// JSON file with assets and scenario parameters
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Target return for the weighting heuristic (0.10 = 10%)
    #[arg(short, long, global = true)]
    target_return: Option<f64>,

    /// Amount to invest
    #[arg(short, long, global = true)]
    investment: Option<f64>,

    /// Risk-free rate (0.03 = 3%)
    #[arg(short, long, global = true)]
    risk_free_rate: Option<f64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: ReportFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute heuristic weights for the target return
    Weights,
    /// Compute weights and per-asset allocation values
    Value,
    /// Compute weights and risk metrics only
    Metrics,
    /// Full analysis: weights, allocations, and risk metrics
    Analyze,
    /// Print the built-in sample scenario as a config file
    Sample,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(text) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(e) if format == ReportFormat::Json => {
            println!("{}", error_envelope(&e)?);
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn run(cli: Cli) -> Result<String> {
    let format = cli.format;
    let command = cli.command.unwrap_or(Commands::Analyze);

    // The sample scenario never depends on a config file.
    if matches!(command, Commands::Sample) {
        let sample = AnalysisConfig::default();
        return Ok(match format {
            ReportFormat::Text => serde_json::to_string_pretty(&sample)?,
            ReportFormat::Json => to_json(sample)?,
        });
    }

    let config = load_config(&cli.config)?.with_overrides(
        cli.target_return,
        cli.investment,
        cli.risk_free_rate,
    );
    config.validate().context("Invalid analysis parameters")?;
    tracing::info!(
        assets = config.assets.len(),
        target_return = config.target_return,
        investment = config.investment,
        risk_free_rate = config.risk_free_rate,
        "Configuration resolved"
    );

    let output = match command {
        Commands::Weights => handle_weights(&config, format),
        Commands::Value => handle_value(&config, format),
        Commands::Metrics => handle_metrics(&config, format),
        Commands::Analyze | Commands::Sample => handle_analyze(&config, format),
    };
    Ok(output?)
}

/// JSON error body, including the anyhow context chain.
fn error_envelope(e: &anyhow::Error) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ApiResponse::<()>::err(
        format!("{:#}", e),
    ))?)
}

fn load_config(path: &Option<PathBuf>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => AnalysisConfig::load().context("Failed to load default config"),
    }
}

fn to_json<T: Serialize>(data: T) -> folio_core::Result<String> {
    Ok(serde_json::to_string_pretty(&ApiResponse::ok(data))?)
}

fn handle_weights(config: &AnalysisConfig, format: ReportFormat) -> folio_core::Result<String> {
    let weights = optimize_weights(&config.assets, config.target_return)?;
    let named = named_weights(&config.assets, &weights);

    match format {
        ReportFormat::Text => Ok(format_weights(&named)),
        ReportFormat::Json => to_json(json!({
            "target_return": config.target_return,
            "weights": named,
        })),
    }
}

fn handle_value(config: &AnalysisConfig, format: ReportFormat) -> folio_core::Result<String> {
    let weights = optimize_weights(&config.assets, config.target_return)?;
    let valuation = calculate_portfolio_value(&weights, &config.assets, config.investment)?;

    match format {
        ReportFormat::Text => Ok(format_valuation(&valuation)),
        ReportFormat::Json => to_json(&valuation),
    }
}

fn handle_analyze(config: &AnalysisConfig, format: ReportFormat) -> folio_core::Result<String> {
    let report = AnalysisReport::run(config)?;

    match format {
        ReportFormat::Text => report.render(ReportFormat::Text),
        ReportFormat::Json => to_json(&report),
    }
}

fn handle_metrics(config: &AnalysisConfig, format: ReportFormat) -> folio_core::Result<String> {
    let weights = optimize_weights(&config.assets, config.target_return)?;
    let metrics = analyze_portfolio(
        &config.assets,
        &weights,
        config.risk_free_rate,
        config.investment,
    )?;

    match format {
        ReportFormat::Text => Ok(format_metrics(&metrics)),
        ReportFormat::Json => to_json(metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run_args(args: &[&str]) -> Result<String> {
        let mut argv = vec!["folio"];
        argv.extend_from_slice(args);
        run(Cli::parse_from(argv))
    }

    #[test]
    fn test_sample_ignores_broken_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let path = path.to_str().unwrap();

        let text = run_args(&["--config", path, "sample"]).unwrap();
        let config: AnalysisConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(config, AnalysisConfig::default());

        let json = run_args(&["--config", path, "--format", "json", "sample"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["assets"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_config_errors_use_json_envelope() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = run_args(&["--config", missing.to_str().unwrap(), "--format", "json"])
            .unwrap_err();
        let value: serde_json::Value = serde_json::from_str(&error_envelope(&err).unwrap()).unwrap();
        assert_eq!(value["ok"], false);
        assert!(value["error"]
            .as_str()
            .unwrap()
            .contains("Failed to load config"));
    }

    #[test]
    fn test_flag_overrides_are_validated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        AnalysisConfig::default().save(&path).unwrap();

        let err = run_args(&["--config", path.to_str().unwrap(), "--investment=-5", "value"])
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid analysis parameters"));

        let text = run_args(&["--config", path.to_str().unwrap(), "--investment", "2000", "value"])
            .unwrap();
        assert!(text.contains("Portfolio Value: 2000.00"));
    }
}
