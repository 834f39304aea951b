//! Stream configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};

/// Number of output samples produced when none is configured.
pub const DEFAULT_PROBE_LEN: usize = 40;

/// Parameters shared by every stream operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Number of output samples each operation walks.
    pub probe_len: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            probe_len: DEFAULT_PROBE_LEN,
        }
    }
}

impl StreamConfig {
    /// A configuration walking `probe_len` samples.
    ///
    /// # Errors
    ///
    /// Returns `Config` if `probe_len` is zero.
    pub fn with_probe_len(probe_len: usize) -> Result<Self> {
        let config = Self { probe_len };
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// ```toml
    /// probe_len = 64
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Config` for malformed TOML or an invalid value.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| StreamError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Config` if `probe_len` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.probe_len == 0 {
            return Err(StreamError::Config("probe_len must be positive".into()));
        }
        Ok(())
    }
}
