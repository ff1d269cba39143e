//! Analysis input: assets and scenario parameters, loaded from JSON.

use crate::sample::{
    sample_assets, SAMPLE_INVESTMENT, SAMPLE_RISK_FREE_RATE, SAMPLE_TARGET_RETURN,
};
use crate::types::Asset;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default config path.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG_FILE";

/// Inputs for a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Assets in allocation order
    pub assets: Vec<Asset>,
    /// Return the weighting heuristic aims for
    #[serde(default = "default_target_return")]
    pub target_return: f64,
    /// Amount to allocate
    #[serde(default = "default_investment")]
    pub investment: f64,
    /// Baseline for the Sharpe and Sortino ratios
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

fn default_target_return() -> f64 {
    SAMPLE_TARGET_RETURN
}

fn default_investment() -> f64 {
    SAMPLE_INVESTMENT
}

fn default_risk_free_rate() -> f64 {
    SAMPLE_RISK_FREE_RATE
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            assets: sample_assets(),
            target_return: SAMPLE_TARGET_RETURN,
            investment: SAMPLE_INVESTMENT,
            risk_free_rate: SAMPLE_RISK_FREE_RATE,
        }
    }
}

impl AnalysisConfig {
    /// Get the default config file path.
    ///
    /// Default path: `~/.folio/config.json`
    /// Can be overridden with the `FOLIO_CONFIG_FILE` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".folio/config.json"))
            .unwrap_or_else(|| PathBuf::from("folio.json"))
    }

    /// Load from the default path, falling back to the built-in sample
    /// when no file exists there.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_path())
    }

    /// Load from `path` if it exists, otherwise return the sample scenario.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using sample scenario");
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    /// Replace scenario parameters with any values given on the command line.
    pub fn with_overrides(
        mut self,
        target_return: Option<f64>,
        investment: Option<f64>,
        risk_free_rate: Option<f64>,
    ) -> Self {
        if let Some(target_return) = target_return {
            self.target_return = target_return;
        }
        if let Some(investment) = investment {
            self.investment = investment;
        }
        if let Some(risk_free_rate) = risk_free_rate {
            self.risk_free_rate = risk_free_rate;
        }
        self
    }

    /// Load and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            assets = config.assets.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Parse and validate a config from a JSON string.
    ///
    /// A bare array is accepted as a list of assets with default parameters.
    pub fn from_json(content: &str) -> Result<Self> {
        let data: serde_json::Value = serde_json::from_str(content)?;

        let config = if data.is_array() {
            let assets: Vec<Asset> = serde_json::from_value(data)?;
            Self {
                assets,
                ..Self::default()
            }
        } else {
            serde_json::from_value(data)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check assets and investment before any calculation runs.
    pub fn validate(&self) -> Result<()> {
        if self.assets.is_empty() {
            return Err(Error::EmptyInput);
        }
        for asset in &self.assets {
            asset.validate()?;
        }
        if !self.investment.is_finite() || self.investment <= 0.0 {
            return Err(Error::InvalidInvestment(self.investment));
        }
        Ok(())
    }

    /// Save the config as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_sample_scenario() {
        let config = AnalysisConfig::default();
        assert_eq!(config.assets.len(), 5);
        assert_eq!(config.target_return, 0.10);
        assert_eq!(config.investment, 10_000.0);
        assert_eq!(config.risk_free_rate, 0.03);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_with_defaults() {
        let json = r#"{
            "assets": [
                {"name": "SPY", "expected_return": 0.07, "risk": 0.15},
                {"name": "TLT", "expected_return": 0.03, "risk": 0.08}
            ],
            "investment": 5000.0
        }"#;

        let config = AnalysisConfig::from_json(json).unwrap();
        assert_eq!(config.assets.len(), 2);
        assert_eq!(config.assets[0].name, "SPY");
        assert_eq!(config.investment, 5000.0);
        assert_eq!(config.target_return, 0.10);
    }

    #[test]
    fn test_from_json_bare_asset_list() {
        let json = r#"[{"name": "GLD", "expected_return": 0.04, "risk": 0.12}]"#;

        let config = AnalysisConfig::from_json(json).unwrap();
        assert_eq!(config.assets.len(), 1);
        assert_eq!(config.investment, 10_000.0);
    }

    #[test]
    fn test_from_json_rejects_invalid_input() {
        let negative_risk = r#"[{"name": "X", "expected_return": 0.04, "risk": -1.0}]"#;
        assert!(matches!(
            AnalysisConfig::from_json(negative_risk),
            Err(Error::InvalidAsset(_))
        ));

        assert!(matches!(
            AnalysisConfig::from_json(r#"{"assets": []}"#),
            Err(Error::EmptyInput)
        ));

        assert!(matches!(
            AnalysisConfig::from_json("not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config.json");

        let config = AnalysisConfig {
            target_return: 0.09,
            ..AnalysisConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = AnalysisConfig::from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = AnalysisConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    // Env var cases share one test so parallel tests never race on it.
    #[test]
    fn test_env_var_overrides_default_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let config = AnalysisConfig {
            assets: vec![Asset::new("VTI", 0.07, 0.16).unwrap()],
            investment: 2500.0,
            ..AnalysisConfig::default()
        };
        config.save(&path).unwrap();

        env::set_var(CONFIG_ENV_VAR, &path);
        assert_eq!(AnalysisConfig::default_path(), path);
        assert_eq!(AnalysisConfig::load().unwrap(), config);

        env::set_var(CONFIG_ENV_VAR, dir.path().join("missing.json"));
        assert_eq!(AnalysisConfig::load().unwrap(), AnalysisConfig::default());

        env::remove_var(CONFIG_ENV_VAR);
    }

    #[test]
    fn test_with_overrides() {
        let config = AnalysisConfig::default().with_overrides(Some(0.12), None, Some(0.01));
        assert_eq!(config.target_return, 0.12);
        assert_eq!(config.investment, 10_000.0);
        assert_eq!(config.risk_free_rate, 0.01);

        let unchanged = AnalysisConfig::default().with_overrides(None, None, None);
        assert_eq!(unchanged, AnalysisConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = AnalysisConfig::from_path(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
