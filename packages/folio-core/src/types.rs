//! Core data types for the portfolio calculations.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single asset with a forecast return and a volatility proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    /// Asset identifier
    pub name: String,
    /// Expected fractional return (0.05 = 5%)
    pub expected_return: f64,
    /// Standard deviation proxy, never negative
    pub risk: f64,
}

impl Asset {
    /// Create a validated asset.
    ///
    /// Fails with [`Error::InvalidAsset`] when the return or risk is not
    /// finite, or when the risk is negative.
    pub fn new(name: &str, expected_return: f64, risk: f64) -> Result<Self> {
        let asset = Self {
            name: name.to_string(),
            expected_return,
            risk,
        };
        asset.validate()?;
        Ok(asset)
    }

    /// Check the invariants of an asset, e.g. one deserialized from a file.
    pub fn validate(&self) -> Result<()> {
        if !self.expected_return.is_finite() {
            return Err(Error::InvalidAsset(format!(
                "{}: expected return must be finite",
                self.name
            )));
        }
        if !self.risk.is_finite() || self.risk < 0.0 {
            return Err(Error::InvalidAsset(format!(
                "{}: risk must be finite and non-negative, got {}",
                self.name, self.risk
            )));
        }
        Ok(())
    }
}

/// Portfolio weights, one entry per asset in the same order as the asset list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wrap raw weights. No normalization is applied.
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Equal allocation across `n` assets (1/n each).
    pub fn equal(n: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        Self(vec![1.0 / n as f64; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

impl<'a> IntoIterator for &'a WeightVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Monetary allocation of a single asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetValue {
    /// Asset identifier
    pub name: String,
    /// Weight used for the allocation
    pub weight: f64,
    /// weight * investment
    pub value: f64,
}

/// Result of splitting an investment across the weighted assets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioValuation {
    /// Per-asset allocations, in asset order
    pub allocations: Vec<AssetValue>,
    /// Sum of all allocations
    pub total_value: f64,
}

impl PortfolioValuation {
    /// Allocation values in asset order.
    pub fn values(&self) -> Vec<f64> {
        self.allocations.iter().map(|a| a.value).collect()
    }
}

/// Aggregate risk/return metrics for a weighted portfolio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PortfolioMetrics {
    /// Weighted average return
    pub portfolio_return: f64,
    /// Volatility (sqrt of the sum of squared weighted risks)
    pub portfolio_risk: f64,
    /// Excess return per unit of risk
    pub sharpe_ratio: f64,
    /// Excess return per unit of downside deviation
    pub sortino_ratio: f64,
    /// Largest peak-to-trough decline as a decimal
    pub max_drawdown: f64,
}

/// Response envelope for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
