use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::pacing::PacingPolicy;
use crate::error::{DisplayError, Result};

/// Display configuration, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Behaviour of calls arriving before the target interval
    pub pacing: PacingPolicy,
    /// Repaint on every call, ignoring the target frame rate
    pub auto_refresh: bool,
    /// Initial rotation in degrees, 0 or 90
    pub rotation: u16,
    /// Device keys handed to the sink untouched
    pub sink: Map<String, Value>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            pacing: PacingPolicy::Skip,
            auto_refresh: false,
            rotation: 0,
            sink: Map::new(),
        }
    }
}

impl DisplayOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| DisplayError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| DisplayError::InvalidOptions(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rotation != 0 && self.rotation != 90 {
            return Err(DisplayError::InvalidOptions(format!(
                "rotation must be 0 or 90, got {}",
                self.rotation
            )));
        }
        Ok(())
    }

    /// Unsigned integer sink key, `None` when absent or not a `u32`
    pub fn sink_u32(&self, key: &str) -> Option<u32> {
        self.sink
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }
}
