//! Editor configuration.

use crate::pages::AlbumFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable constants for the editing engine.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid spacing in document units, used for snapping.
    pub grid_size: f64,
    /// Maximum number of history snapshots kept.
    pub history_limit: usize,
    /// Smallest width/height a resize can produce.
    pub min_element_size: f64,
    /// Lower bound for the viewport scale.
    pub min_scale: f64,
    /// Upper bound for the viewport scale.
    pub max_scale: f64,
    /// Zoom delta contributed by one unit of wheel movement.
    pub wheel_zoom_step: f64,
    /// Multiplier applied to the coalesced zoom delta.
    pub zoom_sensitivity: f64,
    /// Coalesced zoom deltas smaller than this are dropped.
    pub zoom_epsilon: f64,
    /// Offset applied to pasted and duplicated elements.
    pub paste_offset: f64,
    /// Arrow-key nudge distance.
    pub nudge_step: f64,
    /// Arrow-key nudge distance with Shift held.
    pub nudge_step_large: f64,
    /// Padding around the spread when fitting the viewport.
    pub fit_padding: f64,
    /// Largest scale an initial fit may choose.
    pub fit_max_scale: f64,
    /// Page format of the album.
    pub format: AlbumFormat,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 5.0,
            history_limit: 50,
            min_element_size: 10.0,
            min_scale: 0.1,
            max_scale: 5.0,
            wheel_zoom_step: 0.01,
            zoom_sensitivity: 0.5,
            zoom_epsilon: 0.001,
            paste_offset: 10.0,
            nudge_step: 1.0,
            nudge_step_large: 10.0,
            fit_padding: 60.0,
            fit_max_scale: 1.2,
            format: AlbumFormat::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("grid_size", self.grid_size)?;
        positive("min_scale", self.min_scale)?;
        positive("max_scale", self.max_scale)?;
        positive("wheel_zoom_step", self.wheel_zoom_step)?;
        positive("zoom_sensitivity", self.zoom_sensitivity)?;
        positive("fit_max_scale", self.fit_max_scale)?;
        positive("format.width", self.format.width)?;
        positive("format.height", self.format.height)?;

        if self.history_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "history_limit",
                reason: "must keep at least one snapshot".to_string(),
            });
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid {
                field: "min_scale",
                reason: format!("{} exceeds max_scale {}", self.min_scale, self.max_scale),
            });
        }
        if self.min_element_size.is_nan() || self.min_element_size < 0.0 {
            return Err(ConfigError::Invalid {
                field: "min_element_size",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
