//! Analysis options: where to read the data from and how to aggregate it.
//!
//! Values come from [`AnalysisConfig::default`], optionally overlaid by a JSON file
//! (missing keys keep their defaults) and finally by command-line flags.
//!
//! ```json
//! { "data": "data/medical-charges.csv", "bin_count": 20, "smoker_policy": "reject" }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default CSV resource, relative to the working directory (the bundled sample when run
/// from the repository root).
pub const DEFAULT_DATA_SOURCE: &str = "data/medical-charges.csv";

/// Default number of BMI histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 15;

/// What to do with smoker values other than `"yes"` / `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokerPolicy {
    /// Keep the row and tally it under `other_smoker_count`.
    #[default]
    Keep,
    /// Fail the whole load.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Local path or `http(s)://` URL of the CSV.
    pub data: String,
    pub bin_count: usize,
    pub smoker_policy: SmokerPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_SOURCE.to_string(),
            bin_count: DEFAULT_BIN_COUNT,
            smoker_policy: SmokerPolicy::Keep,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bin_count == 0 {
            return Err(ConfigError::ZeroBins);
        }
        if self.data.trim().is_empty() {
            return Err(ConfigError::EmptySource);
        }
        Ok(())
    }
}
