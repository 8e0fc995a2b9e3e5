//! JSON emitter presets.
//!
//! A preset is a JSON object with any subset of the [`EmitterConfig`] fields;
//! missing fields keep their defaults. Points and sizes are `[x, y]` arrays,
//! angles are radians.
//!
//! ```json
//! {
//!     "particle_count": 120,
//!     "creation_point": [0.5, 0.9],
//!     "creation_range": [0.2, 0.0],
//!     "angle_range": 0.6,
//!     "speed": 200.0,
//!     "speed_range": 60.0
//! }
//! ```

use crate::emitter::EmitterConfig;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

impl EmitterConfig {
    /// Parse a preset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read a preset file.
pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<EmitterConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let config = EmitterConfig::from_json_str(&text)?;
    log::info!(
        "loaded preset '{}' ({} particles)",
        path.display(),
        config.particle_count
    );
    Ok(config)
}
