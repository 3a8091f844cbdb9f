use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::errors::{QuoteError, Result};
use crate::presets::PresetTable;
use crate::types::{LoanCategory, TenureUnit};

/// environment variable naming a JSON preset file
pub const PRESETS_ENV_VAR: &str = "LENDINGLEAF_PRESETS";

/// engine configuration for one calculator surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub presets: PresetTable,
    #[serde(default = "default_category")]
    pub default_category: LoanCategory,
    #[serde(default)]
    pub default_tenure_unit: TenureUnit,
}

fn default_category() -> LoanCategory {
    LoanCategory::Home
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            presets: PresetTable::default(),
            default_category: default_category(),
            default_tenure_unit: TenureUnit::Years,
        }
    }
}

impl EngineConfig {
    /// parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            default_category = %config.default_category,
            default_tenure_unit = ?config.default_tenure_unit,
            "engine config loaded"
        );
        Ok(config)
    }

    /// load a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "reading engine config");
        Self::from_json(&json)
    }

    /// load from the file named by `LENDINGLEAF_PRESETS`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(PRESETS_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_path(path),
            _ => {
                debug!("{PRESETS_ENV_VAR} unset, using canonical presets");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.presets.validate().map_err(|e| QuoteError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_json_uses_canonical_table() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(&config.presets, PresetTable::canonical());
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut config = EngineConfig::default();
        config.default_category = LoanCategory::Car;
        config.default_tenure_unit = TenureUnit::Months;
        config.presets.car.default_rate_percent = dec!(10.25);

        let parsed = EngineConfig::from_json(&config.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_surface_specific_table() {
        let mut presets = PresetTable::default();
        presets.home.default_amount = 5_000_000;
        let json = serde_json::json!({
            "presets": presets,
            "default_category": "personal",
        })
        .to_string();

        let config = EngineConfig::from_json(&json).unwrap();
        assert_eq!(config.presets.home.default_amount, 5_000_000);
        assert_eq!(config.default_category, LoanCategory::Personal);
        assert_eq!(config.default_tenure_unit, TenureUnit::Years);
    }

    #[test]
    fn test_invalid_table_rejected() {
        let mut presets = PresetTable::default();
        presets.personal.min_rate_percent = dec!(30);
        let json = serde_json::json!({ "presets": presets }).to_string();

        assert!(matches!(
            EngineConfig::from_json(&json),
            Err(QuoteError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json("{\"default_category\": \"gold\"}"),
            Err(QuoteError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EngineConfig::from_path("/nonexistent/lendingleaf/presets.json"),
            Err(QuoteError::Io(_))
        ));
    }
}
