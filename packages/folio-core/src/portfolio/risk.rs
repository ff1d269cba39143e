//! Risk-adjusted return ratios and drawdown.
//!
//! Sharpe and Sortino here work on aggregate, single-period figures rather
//! than on a return history. The Sortino downside deviation is taken
//! cross-sectionally over the assets that underperform the risk-free rate,
//! which is a simplification of the usual time-series definition.

use crate::types::Asset;
use crate::{Error, Result};

/// Calculate the Sharpe ratio.
///
/// # Arguments
///
/// * `portfolio_return` - Weighted portfolio return
/// * `portfolio_risk` - Portfolio volatility
/// * `risk_free_rate` - Risk-free rate for the same period
///
/// # Returns
///
/// `(portfolio_return - risk_free_rate) / portfolio_risk`, or
/// [`Error::ZeroVolatility`] when the risk is zero.
pub fn sharpe_ratio(portfolio_return: f64, portfolio_risk: f64, risk_free_rate: f64) -> Result<f64> {
    if portfolio_risk == 0.0 {
        return Err(Error::ZeroVolatility);
    }
    Ok((portfolio_return - risk_free_rate) / portfolio_risk)
}

/// Downside deviation over the assets whose expected return is below the
/// risk-free rate: sqrt(Σ σ_i²).
pub fn downside_deviation(assets: &[Asset], risk_free_rate: f64) -> f64 {
    assets
        .iter()
        .filter(|a| a.expected_return < risk_free_rate)
        .map(|a| a.risk.powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Calculate the Sortino ratio.
///
/// Returns 0.0 when no asset falls below the risk-free rate (zero downside
/// deviation).
pub fn sortino_ratio(portfolio_return: f64, risk_free_rate: f64, assets: &[Asset]) -> f64 {
    let downside = downside_deviation(assets, risk_free_rate);
    if downside == 0.0 {
        tracing::trace!("No downside deviation, Sortino ratio set to zero");
        return 0.0;
    }
    (portfolio_return - risk_free_rate) / downside
}

/// Calculate maximum drawdown over an ordered sequence of values.
///
/// The running peak starts at zero and only moves on a strictly greater
/// value, so the first positive value is always a peak. Returns the largest
/// `(peak - value) / peak` as a decimal (e.g., 0.5 for 50%), or 0.0 for an
/// empty or non-decreasing series.
pub fn calculate_max_drawdown(values: &[f64]) -> f64 {
    let mut peak = 0.0;
    let mut max_drawdown = 0.0;

    for &value in values {
        if value > peak {
            peak = value;
        } else if peak > 0.0 {
            let drawdown = (peak - value) / peak;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    max_drawdown
}
