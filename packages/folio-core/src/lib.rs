//! Folio Core - Portfolio weighting and risk/return metrics.
//!
//! This crate computes portfolio-level statistics over a small, static list
//! of assets:
//!
//! - **Weighting**: single-pass heuristic that tilts equal weights toward a target return
//! - **Valuation**: per-asset monetary allocation of an investment
//! - **Risk metrics**: weighted return and volatility, Sharpe ratio, Sortino ratio, max drawdown
//! - **Reporting**: text and JSON rendering kept apart from the calculations
//!
//! The weighting step is a heuristic, not a mean-variance optimizer. It does
//! not guarantee that the resulting portfolio actually reaches the target.
//!
//! # Example
//!
//! ```rust
//! use folio_core::portfolio::{analyze_portfolio, optimize_weights};
//! use folio_core::sample::sample_assets;
//!
//! let assets = sample_assets();
//! let weights = optimize_weights(&assets, 0.10).unwrap();
//! let metrics = analyze_portfolio(&assets, &weights, 0.03, 10_000.0).unwrap();
//! println!("Sharpe: {:.4}", metrics.sharpe_ratio);
//! ```

pub mod config;
pub mod portfolio;
pub mod report;
pub mod sample;
pub mod types;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use types::{ApiResponse, Asset, AssetValue, PortfolioMetrics, PortfolioValuation, WeightVector};

// Re-export main functionality
pub use portfolio::{
    analyze_portfolio, calculate_max_drawdown, calculate_portfolio_value, downside_deviation,
    optimize_weights, portfolio_return, portfolio_risk, sharpe_ratio, sortino_ratio,
};
pub use report::{AnalysisReport, ReportFormat};

/// Error types for folio-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Asset list is empty")]
    EmptyInput,

    #[error("Dimension mismatch: expected {expected} weights, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid target return {0}: weight adjustment denominator is zero or not finite")]
    InvalidTarget(f64),

    #[error("Adjusted weights sum to zero, cannot normalize")]
    DegenerateNormalization,

    #[error("Portfolio risk is zero, Sharpe ratio is undefined")]
    ZeroVolatility,

    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    #[error("Investment must be positive and finite, got {0}")]
    InvalidInvestment(f64),
}

/// Result type for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;
