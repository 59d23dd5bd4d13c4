//! Editor configuration
//!
//! Authoring defaults and advisory bounds. Loadable from TOML; every field
//! is optional and falls back to [`EditorConfig::default`].

use serde::{Deserialize, Serialize};
use simlab_frame::DEFAULT_DURATION_MIN;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Duration given to new frames, in minutes
    pub default_duration_min: u32,
    /// Lower bound offered by the editing surface
    pub min_duration_min: u32,
    /// Upper bound offered by the editing surface
    pub max_duration_min: u32,
    /// Frame count below which an advisory is raised
    pub recommended_min_frames: usize,
    /// Prefix of generated titles ("Frame 3")
    pub title_prefix: String,
    /// Suffix appended to duplicated titles
    pub copy_suffix: String,
}

impl EditorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns error if the document is malformed or the bounds are invalid
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the duration bounds
    ///
    /// # Errors
    /// Returns error unless `1 <= min <= default <= max`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_duration_min == 0 {
            return Err(ConfigError::Invalid(
                "min_duration_min must be at least 1".to_string(),
            ));
        }
        if self.min_duration_min > self.max_duration_min {
            return Err(ConfigError::Invalid(format!(
                "min_duration_min ({}) exceeds max_duration_min ({})",
                self.min_duration_min, self.max_duration_min
            )));
        }
        if !(self.min_duration_min..=self.max_duration_min).contains(&self.default_duration_min) {
            return Err(ConfigError::Invalid(format!(
                "default_duration_min ({}) outside [{}, {}]",
                self.default_duration_min, self.min_duration_min, self.max_duration_min
            )));
        }
        Ok(())
    }

    /// With default duration
    #[inline]
    #[must_use]
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_min = minutes;
        self
    }

    /// With recommended minimum frame count
    #[inline]
    #[must_use]
    pub fn with_recommended_min_frames(mut self, frames: usize) -> Self {
        self.recommended_min_frames = frames;
        self
    }

    /// With copy suffix
    #[inline]
    #[must_use]
    pub fn with_copy_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.copy_suffix = suffix.into();
        self
    }

    /// Clamp a duration to the editing bounds
    ///
    /// For the editing surface only; the frame model stores whatever it is
    /// given.
    #[inline]
    #[must_use]
    pub fn clamp_duration(&self, minutes: u32) -> u32 {
        minutes.clamp(self.min_duration_min, self.max_duration_min)
    }

    /// Title for the frame at 1-based `position`
    #[inline]
    #[must_use]
    pub fn frame_title(&self, position: usize) -> String {
        format!("{} {}", self.title_prefix, position)
    }

    /// Title for a copy of `source`
    #[inline]
    #[must_use]
    pub fn copy_title(&self, source: &str) -> String {
        format!("{source}{}", self.copy_suffix)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_duration_min: DEFAULT_DURATION_MIN,
            min_duration_min: 1,
            max_duration_min: 60,
            recommended_min_frames: 3,
            title_prefix: "Frame".to_string(),
            copy_suffix: " (Cópia)".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed TOML
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Well-formed but inconsistent values
    #[error("invalid config: {0}")]
    Invalid(String),
}
