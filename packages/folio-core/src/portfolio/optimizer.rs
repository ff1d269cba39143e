//! Target-return weight adjustment.
//!
//! This is a single-pass proportional heuristic, not a mean-variance solver.
//! It rewards assets whose expected return beats the equal-weight portfolio
//! and does not guarantee that the adjusted portfolio reaches the target.

use crate::types::{Asset, WeightVector};
use crate::{Error, Result};

/// Check that the asset list is non-empty, every asset is valid, and the
/// weight vector has one entry per asset.
pub(crate) fn check_dimensions(assets: &[Asset], weights: &WeightVector) -> Result<()> {
    if assets.is_empty() {
        return Err(Error::EmptyInput);
    }
    for asset in assets {
        asset.validate()?;
    }
    if weights.len() != assets.len() {
        return Err(Error::DimensionMismatch {
            expected: assets.len(),
            actual: weights.len(),
        });
    }
    Ok(())
}

/// Weighted average return: Σ w_i * r_i.
pub fn portfolio_return(assets: &[Asset], weights: &WeightVector) -> Result<f64> {
    check_dimensions(assets, weights)?;
    Ok(weights
        .iter()
        .zip(assets)
        .map(|(w, a)| w * a.expected_return)
        .sum())
}

/// Portfolio volatility: sqrt(Σ (w_i * σ_i)²).
///
/// Assets are treated as uncorrelated; there is no covariance term.
pub fn portfolio_risk(assets: &[Asset], weights: &WeightVector) -> Result<f64> {
    check_dimensions(assets, weights)?;
    let variance: f64 = weights
        .iter()
        .zip(assets)
        .map(|(w, a)| (w * a.risk).powi(2))
        .sum();
    Ok(variance.sqrt())
}

/// Produce portfolio weights that lean toward a target return.
///
/// # Arguments
///
/// * `assets` - Non-empty asset list
/// * `target_return` - Desired portfolio return (e.g., 0.10 for 10%)
///
/// # Returns
///
/// Equal weights (1/N) when they already meet the target. Otherwise each
/// asset gets `max(0, (r_i - pr) / (target - pr))`, normalized to sum to 1.
///
/// # Errors
///
/// * [`Error::EmptyInput`] for an empty asset list
/// * [`Error::InvalidTarget`] when the adjustment denominator is zero or not finite
/// * [`Error::DegenerateNormalization`] when every adjusted weight is zero
pub fn optimize_weights(assets: &[Asset], target_return: f64) -> Result<WeightVector> {
    if assets.is_empty() {
        return Err(Error::EmptyInput);
    }

    let equal = WeightVector::equal(assets.len());
    let current_return = portfolio_return(assets, &equal)?;
    let current_risk = portfolio_risk(assets, &equal)?;

    tracing::debug!(
        assets = assets.len(),
        current_return,
        current_risk,
        target_return,
        "Evaluated equal-weight portfolio"
    );

    if current_return >= target_return {
        tracing::debug!("Equal weights meet target, no adjustment");
        return Ok(equal);
    }

    let gap = target_return - current_return;
    if gap == 0.0 || !gap.is_finite() {
        return Err(Error::InvalidTarget(target_return));
    }

    let adjusted: Vec<f64> = assets
        .iter()
        .map(|a| ((a.expected_return - current_return) / gap).max(0.0))
        .collect();

    let total: f64 = adjusted.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        tracing::debug!(total, "Adjusted weights cannot be normalized");
        return Err(Error::DegenerateNormalization);
    }

    Ok(adjusted.into_iter().map(|w| w / total).collect::<Vec<_>>().into())
}
