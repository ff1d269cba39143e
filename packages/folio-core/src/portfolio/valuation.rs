//! Monetary allocation of an investment across weighted assets.

use crate::types::{Asset, AssetValue, PortfolioValuation, WeightVector};
use crate::{Error, Result};

use super::optimizer::check_dimensions;

/// Check that an investment amount is finite and positive.
pub(crate) fn check_investment(investment: f64) -> Result<()> {
    if !investment.is_finite() || investment <= 0.0 {
        return Err(Error::InvalidInvestment(investment));
    }
    Ok(())
}

/// Split an investment across assets according to their weights.
///
/// Each asset receives `weight * investment`; the total is the sum of the
/// allocations, which equals `investment` when the weights sum to 1.
pub fn calculate_portfolio_value(
    weights: &WeightVector,
    assets: &[Asset],
    investment: f64,
) -> Result<PortfolioValuation> {
    check_dimensions(assets, weights)?;
    check_investment(investment)?;

    let allocations: Vec<AssetValue> = assets
        .iter()
        .zip(weights)
        .map(|(asset, &weight)| AssetValue {
            name: asset.name.clone(),
            weight,
            value: weight * investment,
        })
        .collect();

    let total_value: f64 = allocations.iter().map(|a| a.value).sum();

    Ok(PortfolioValuation {
        allocations,
        total_value,
    })
}
