//! Built-in demonstration data.

use crate::types::Asset;

/// Default target return for the demonstration run (10%).
pub const SAMPLE_TARGET_RETURN: f64 = 0.10;
/// Default investment for the demonstration run.
pub const SAMPLE_INVESTMENT: f64 = 10_000.0;
/// Default risk-free rate for the demonstration run (3%).
pub const SAMPLE_RISK_FREE_RATE: f64 = 0.03;

/// Five sample assets with returns between 5% and 12%.
pub fn sample_assets() -> Vec<Asset> {
    [
        ("Asset 1", 0.05, 0.10),
        ("Asset 2", 0.08, 0.15),
        ("Asset 3", 0.12, 0.18),
        ("Asset 4", 0.09, 0.12),
        ("Asset 5", 0.07, 0.14),
    ]
    .into_iter()
    .map(|(name, expected_return, risk)| Asset {
        name: name.to_string(),
        expected_return,
        risk,
    })
    .collect()
}
