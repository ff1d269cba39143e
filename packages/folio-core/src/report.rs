//! Presentation layer: turns calculation results into text or JSON.
//!
//! Nothing in here prints. Callers decide where the rendered string goes.

use crate::config::AnalysisConfig;
use crate::portfolio::{analyze_portfolio, calculate_portfolio_value, optimize_weights};
use crate::types::{Asset, PortfolioMetrics, PortfolioValuation, WeightVector};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Named weight for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedWeight {
    pub name: String,
    pub weight: f64,
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Target return handed to the weighting heuristic
    pub target_return: f64,
    /// Risk-free rate used for the ratios
    pub risk_free_rate: f64,
    /// Amount allocated
    pub investment: f64,
    /// Heuristic weights, in asset order
    pub weights: Vec<NamedWeight>,
    /// Per-asset allocations and total value
    pub valuation: PortfolioValuation,
    /// Risk/return metrics
    pub metrics: PortfolioMetrics,
}

impl AnalysisReport {
    /// Run the full pipeline: weights, valuation, metrics.
    pub fn run(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let weights = optimize_weights(&config.assets, config.target_return)?;
        let valuation = calculate_portfolio_value(&weights, &config.assets, config.investment)?;
        let metrics = analyze_portfolio(
            &config.assets,
            &weights,
            config.risk_free_rate,
            config.investment,
        )?;

        Ok(Self {
            generated_at: Utc::now(),
            target_return: config.target_return,
            risk_free_rate: config.risk_free_rate,
            investment: config.investment,
            weights: named_weights(&config.assets, &weights),
            valuation,
            metrics,
        })
    }

    /// Render the report in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ReportFormat::Text => {
                let mut out = String::new();
                out.push_str(&format_weights(&self.weights));
                out.push_str(&format_valuation(&self.valuation));
                out.push_str(&format_metrics(&self.metrics));
                Ok(out)
            }
        }
    }
}

/// Pair each weight with its asset name.
pub fn named_weights(assets: &[Asset], weights: &WeightVector) -> Vec<NamedWeight> {
    assets
        .iter()
        .zip(weights)
        .map(|(asset, &weight)| NamedWeight {
            name: asset.name.clone(),
            weight,
        })
        .collect()
}

pub fn format_weights(weights: &[NamedWeight]) -> String {
    let mut out = String::from("Portfolio Weights:\n");
    for w in weights {
        let _ = writeln!(out, "  {}: {:.4}", w.name, w.weight);
    }
    out
}

pub fn format_valuation(valuation: &PortfolioValuation) -> String {
    let mut out = String::from("Allocations:\n");
    for a in &valuation.allocations {
        let _ = writeln!(out, "  {} Value: {:.2}", a.name, a.value);
    }
    let _ = writeln!(out, "Portfolio Value: {:.2}", valuation.total_value);
    out
}

pub fn format_metrics(metrics: &PortfolioMetrics) -> String {
    let mut out = String::from("Portfolio Metrics:\n");
    let _ = writeln!(out, "  Portfolio Return: {:.4}", metrics.portfolio_return);
    let _ = writeln!(out, "  Portfolio Risk: {:.4}", metrics.portfolio_risk);
    let _ = writeln!(out, "  Sharpe Ratio: {:.4}", metrics.sharpe_ratio);
    let _ = writeln!(out, "  Sortino Ratio: {:.4}", metrics.sortino_ratio);
    let _ = writeln!(out, "  Max Drawdown: {:.4}", metrics.max_drawdown);
    out
}
