//! Portfolio analysis: combines aggregation, valuation, and risk ratios.

use crate::types::{Asset, PortfolioMetrics, WeightVector};
use crate::Result;

use super::optimizer::{portfolio_return, portfolio_risk};
use super::risk::{calculate_max_drawdown, sharpe_ratio, sortino_ratio};
use super::valuation::calculate_portfolio_value;

/// Calculate the full set of metrics for a weighted portfolio.
///
/// # Arguments
///
/// * `assets` - Non-empty asset list
/// * `weights` - One weight per asset
/// * `risk_free_rate` - Risk-free rate (e.g., 0.03 for 3%)
/// * `investment` - Amount invested, must be positive
///
/// The drawdown is taken over the per-asset allocation values in asset
/// order, not over a value history.
pub fn analyze_portfolio(
    assets: &[Asset],
    weights: &WeightVector,
    risk_free_rate: f64,
    investment: f64,
) -> Result<PortfolioMetrics> {
    let valuation = calculate_portfolio_value(weights, assets, investment)?;

    let portfolio_return = portfolio_return(assets, weights)?;
    let portfolio_risk = portfolio_risk(assets, weights)?;

    let metrics = PortfolioMetrics {
        portfolio_return,
        portfolio_risk,
        sharpe_ratio: sharpe_ratio(portfolio_return, portfolio_risk, risk_free_rate)?,
        sortino_ratio: sortino_ratio(portfolio_return, risk_free_rate, assets),
        max_drawdown: calculate_max_drawdown(&valuation.values()),
    };

    tracing::debug!(?metrics, "Portfolio analyzed");

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::optimize_weights;
    use crate::sample::sample_assets;
    use crate::Error;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sample_scenario() {
        let assets = sample_assets();
        let weights = optimize_weights(&assets, 0.10).unwrap();

        let metrics = analyze_portfolio(&assets, &weights, 0.03, 10_000.0).unwrap();

        // Weights are 19/23 on Asset 3 and 4/23 on Asset 4
        assert_abs_diff_eq!(metrics.portfolio_return, 2.64 / 23.0, epsilon = 1e-9);
        let risk = (3.42_f64.powi(2) + 0.48_f64.powi(2)).sqrt() / 23.0;
        assert_abs_diff_eq!(metrics.portfolio_risk, risk, epsilon = 1e-9);
        assert_abs_diff_eq!(
            metrics.sharpe_ratio,
            (2.64 / 23.0 - 0.03) / risk,
            epsilon = 1e-9
        );
        // No asset returns less than 3%
        assert_eq!(metrics.sortino_ratio, 0.0);
        // Allocations [0, 0, 8260.87, 1739.13, 0] fall to zero after the peak
        assert_abs_diff_eq!(metrics.max_drawdown, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equal_weights() {
        let assets = sample_assets();
        let weights = WeightVector::equal(assets.len());

        let metrics = analyze_portfolio(&assets, &weights, 0.03, 10_000.0).unwrap();

        assert_abs_diff_eq!(metrics.portfolio_return, 0.082, epsilon = 1e-12);
        assert!(metrics.sharpe_ratio > 0.0);
        // Equal allocations never decline
        assert_eq!(metrics.max_drawdown, 0.0);
    }

    #[test]
    fn test_sortino_with_downside() {
        let assets = vec![
            Asset::new("Laggard", 0.01, 0.05).unwrap(),
            Asset::new("Leader", 0.10, 0.20).unwrap(),
        ];
        let weights = WeightVector::new(vec![0.5, 0.5]);

        let metrics = analyze_portfolio(&assets, &weights, 0.03, 1000.0).unwrap();

        // (0.055 - 0.03) / 0.05
        assert_abs_diff_eq!(metrics.sortino_ratio, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_volatility() {
        let assets = vec![
            Asset::new("Cash", 0.02, 0.0).unwrap(),
            Asset::new("T-Bill", 0.03, 0.0).unwrap(),
        ];
        let weights = WeightVector::equal(2);

        let result = analyze_portfolio(&assets, &weights, 0.01, 1000.0);
        assert!(matches!(result, Err(Error::ZeroVolatility)));
    }

    #[test]
    fn test_invalid_asset_is_reported() {
        let assets = vec![
            Asset {
                name: "Broken".to_string(),
                expected_return: f64::NAN,
                risk: 0.1,
            },
            Asset::new("B", 0.05, 0.2).unwrap(),
        ];
        let result = analyze_portfolio(&assets, &WeightVector::equal(2), 0.03, 1000.0);
        assert!(matches!(result, Err(Error::InvalidAsset(_))));

        let assets = vec![Asset {
            name: "Negative".to_string(),
            expected_return: 0.05,
            risk: -0.2,
        }];
        let result = analyze_portfolio(&assets, &WeightVector::equal(1), 0.03, 1000.0);
        assert!(matches!(result, Err(Error::InvalidAsset(_))));
    }

    #[test]
    fn test_input_errors() {
        let assets = sample_assets();

        let result = analyze_portfolio(&[], &WeightVector::default(), 0.03, 1000.0);
        assert!(matches!(result, Err(Error::EmptyInput)));

        let result = analyze_portfolio(&assets, &WeightVector::equal(3), 0.03, 1000.0);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));

        let result = analyze_portfolio(&assets, &WeightVector::equal(5), 0.03, 0.0);
        assert!(matches!(result, Err(Error::InvalidInvestment(_))));
    }
}
