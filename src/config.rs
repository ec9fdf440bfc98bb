// ⚙️ Configuration
//
// Defaults reproduce the stock demo run. A JSON file may override any subset
// of fields; the CLI overrides the file.

use crate::error::{Result, ZooError};
use crate::tax::Country;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OUTPUT_PATH: &str = "animals.json";
pub const DEFAULT_COUNTRY: &str = "UK";
pub const DEFAULT_GROSS: f64 = 123.45;
pub const DEFAULT_BACKGROUND_DELAY_MS: u64 = 333;
pub const DEFAULT_DRAIN_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_KENNEL_ADDRESS: &str = "Somewhere over there";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZooConfig {
    /// Where the animal export is written
    pub output_path: PathBuf,

    /// Country code for the tax line; unknown codes fall back to OTHER
    pub country_code: Option<String>,

    /// Gross amount the tax line is computed from
    pub gross: f64,

    pub background_delay_ms: u64,
    pub drain_timeout_ms: u64,

    pub report_lines: Vec<String>,
    pub kennel_address: String,
}

impl Default for ZooConfig {
    fn default() -> Self {
        ZooConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            country_code: Some(DEFAULT_COUNTRY.to_string()),
            gross: DEFAULT_GROSS,
            background_delay_ms: DEFAULT_BACKGROUND_DELAY_MS,
            drain_timeout_ms: DEFAULT_DRAIN_TIMEOUT_MS,
            report_lines: vec!["OK".to_string(), "WARN".to_string(), "TODO".to_string()],
            kennel_address: DEFAULT_KENNEL_ADDRESS.to_string(),
        }
    }
}

impl ZooConfig {
    /// Load from a JSON file, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(ZooConfig::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ZooError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn country(&self) -> Country {
        Country::from_code(self.country_code.as_deref())
    }

    pub fn background_delay(&self) -> Duration {
        Duration::from_millis(self.background_delay_ms)
    }

    pub fn drain_timeout(&self) -> Duration {
        Duration::from_millis(self.drain_timeout_ms)
    }
}
