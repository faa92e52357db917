use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, RiskError};
use crate::risk::RiskCategory;
use crate::weights::CategoryWeights;

pub const CONFIG_FILE: &str = "pixeltrace.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides of the default category weights, keyed by wire name.
    pub weights: HashMap<String, f64>,
    /// `"off"` disables an analyzer on the insight path.
    pub analyzers: HashMap<String, String>,
    pub ci: CiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    /// Fail when the overall score reaches this value. 0 never fails.
    pub fail_above: u32,
}

impl Config {
    /// Load `pixeltrace.toml` from `dir`, or defaults when there is none.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        Self::load_file(&config_path)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| RiskError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|e| RiskError::Parse {
            what: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    pub fn is_analyzer_enabled(&self, category: &RiskCategory) -> bool {
        !matches!(self.analyzers.get(category.as_str()), Some(v) if v == "off")
    }

    pub fn category_weights(&self) -> Result<CategoryWeights> {
        CategoryWeights::with_overrides(&self.weights)
    }
}
