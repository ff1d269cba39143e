//! Portfolio calculations.
//!
//! Provides the weighting heuristic, valuation, risk ratios, and the
//! analyzer that combines them into a metrics record. Every function here is
//! pure: no printing, no shared state.

mod analyzer;
mod optimizer;
mod risk;
mod valuation;

pub use analyzer::analyze_portfolio;
pub use optimizer::{optimize_weights, portfolio_return, portfolio_risk};
pub use risk::{calculate_max_drawdown, downside_deviation, sharpe_ratio, sortino_ratio};
pub use valuation::calculate_portfolio_value;
