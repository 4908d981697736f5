//! Picker configuration support.
//!
//! This module provides serialization and deserialization of picker
//! settings, allowing hosts to persist and restore a picker setup.

use serde::{Deserialize, Serialize};

use crate::color::Hsv;
use crate::constants::{DEFAULT_INITIAL_VALUE, DEFAULT_THUMB_SIZE};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_initial_value() -> f32 {
    DEFAULT_INITIAL_VALUE
}

fn default_thumb_size() -> f32 {
    DEFAULT_THUMB_SIZE
}

/// Static configuration of a picker instance.
///
/// Every field has a default, so `{}` is a valid serialized config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Initial hue in degrees, `[0, 360)`
    #[serde(default)]
    pub initial_hue: f32,

    /// Initial saturation, `[0, 1]`
    #[serde(default)]
    pub initial_saturation: f32,

    /// Initial brightness value, `[0, 1]`
    #[serde(default = "default_initial_value")]
    pub initial_value: f32,

    /// Wheel thumb diameter in pixels
    #[serde(default = "default_thumb_size")]
    pub wheel_thumb_size: f32,

    /// Slider thumb width in pixels
    #[serde(default = "default_thumb_size")]
    pub slider_thumb_size: f32,

    /// Radius in raw pixels below which a wheel thumb snaps to the center.
    ///
    /// Zero disables snapping. The threshold does not scale with the wheel,
    /// so on a small wheel a large threshold covers a noticeable fraction
    /// of the saturation range.
    #[serde(default)]
    pub snap_to_center_threshold: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            initial_hue: 0.0,
            initial_saturation: 0.0,
            initial_value: DEFAULT_INITIAL_VALUE,
            wheel_thumb_size: DEFAULT_THUMB_SIZE,
            slider_thumb_size: DEFAULT_THUMB_SIZE,
            snap_to_center_threshold: 0.0,
        }
    }
}

impl PickerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured initial color.
    pub fn initial_color(&self) -> Hsv {
        Hsv::new(self.initial_hue, self.initial_saturation, self.initial_value)
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_hue.is_finite() || !(0.0..360.0).contains(&self.initial_hue) {
            return Err(ConfigError::HueOutOfRange(self.initial_hue));
        }
        if !(0.0..=1.0).contains(&self.initial_saturation) {
            return Err(ConfigError::SaturationOutOfRange(self.initial_saturation));
        }
        if !(0.0..=1.0).contains(&self.initial_value) {
            return Err(ConfigError::ValueOutOfRange(self.initial_value));
        }
        if !self.wheel_thumb_size.is_finite() || self.wheel_thumb_size <= 0.0 {
            return Err(ConfigError::InvalidThumbSize(self.wheel_thumb_size));
        }
        if !self.slider_thumb_size.is_finite() || self.slider_thumb_size <= 0.0 {
            return Err(ConfigError::InvalidThumbSize(self.slider_thumb_size));
        }
        if !self.snap_to_center_threshold.is_finite() || self.snap_to_center_threshold < 0.0 {
            return Err(ConfigError::InvalidSnapThreshold(self.snap_to_center_threshold));
        }
        Ok(())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Initial hue outside `[0, 360)`
    #[error("Initial hue {0} is out of range [0, 360)")]
    HueOutOfRange(f32),

    /// Initial saturation outside `[0, 1]`
    #[error("Initial saturation {0} is out of range [0, 1]")]
    SaturationOutOfRange(f32),

    /// Initial value outside `[0, 1]`
    #[error("Initial value {0} is out of range [0, 1]")]
    ValueOutOfRange(f32),

    /// Thumb size is zero, negative, or not finite
    #[error("Thumb size {0} must be finite and positive")]
    InvalidThumbSize(f32),

    /// Snap threshold is negative or not finite
    #[error("Snap threshold {0} must be finite and non-negative")]
    InvalidSnapThreshold(f32),
}
