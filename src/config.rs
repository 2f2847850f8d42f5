//! Service configuration.
//!
//! Configuration can be built in code or read from TOML:
//!
//! ```toml
//! # Ceiling on transitions explored by a final-state search
//! max_final_attempts = 1000
//!
//! # Directory for board files; omit for an in-memory store
//! data_dir = "./boards"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default ceiling for final-state searches.
pub const DEFAULT_MAX_FINAL_ATTEMPTS: u32 = 1000;

/// Lifeboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum transitions a final-state search may apply
    pub max_final_attempts: u32,
    /// Board directory, or `None` for in-memory storage
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_final_attempts: DEFAULT_MAX_FINAL_ATTEMPTS,
            data_dir: None,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_final_attempts == 0 {
            return Err(Error::Config(
                "max_final_attempts must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}
