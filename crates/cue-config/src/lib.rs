//! Cue configuration system
//!
//! This crate provides centralized configuration management for Cue,
//! loading settings from `cue.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Cue
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CueConfig {
    /// Demo application settings
    pub demo: DemoConfig,
    /// Motion timing overrides
    pub motion: MotionConfig,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Viewport width in pixels
    pub viewport_width: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
    /// Simulated frame interval in milliseconds
    pub frame_ms: f32,
    /// Run the demo without an animation engine (exercise the fallback path)
    pub no_engine: bool,
}

/// Motion timing configuration
///
/// Unset values keep the built-in preset defaults. The fallback delay is
/// deliberately absent: it is fixed by design.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MotionConfig {
    /// Entrance duration override in milliseconds
    pub duration_ms: Option<f32>,
    /// Stagger override for grouped entrances in milliseconds
    pub stagger_ms: Option<f32>,
    /// Scroll-gate activation line as a fraction of viewport height
    pub gate_threshold: Option<f32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            frame_ms: 16.0,
            no_engine: false,
        }
    }
}

impl CueConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the cue.toml configuration file
    ///
    /// # Returns
    /// * `Ok(CueConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (cue.toml in the current
    /// directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("cue.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("CUE_NO_ENGINE") {
            self.demo.no_engine = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("CUE_FRAME_MS") {
            if let Ok(frame) = val.parse::<f32>() {
                self.demo.frame_ms = frame;
            }
        }
        if let Ok(val) = std::env::var("CUE_DURATION_MS") {
            if let Ok(duration) = val.parse::<f32>() {
                self.motion.duration_ms = Some(duration);
            }
        }
        if let Ok(val) = std::env::var("CUE_STAGGER_MS") {
            if let Ok(stagger) = val.parse::<f32>() {
                self.motion.stagger_ms = Some(stagger);
            }
        }
        if let Ok(val) = std::env::var("CUE_GATE_THRESHOLD") {
            if let Ok(threshold) = val.parse::<f32>() {
                self.motion.gate_threshold = Some(threshold);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CueConfig::default();
        assert_eq!(config.demo.viewport_width, 1280.0);
        assert_eq!(config.demo.viewport_height, 720.0);
        assert_eq!(config.demo.frame_ms, 16.0);
        assert!(!config.demo.no_engine);
        assert_eq!(config.motion.duration_ms, None);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: CueConfig = toml::from_str(
            r#"
            [demo]
            no_engine = true

            [motion]
            duration_ms = 500.0
            "#,
        )
        .unwrap();

        assert!(config.demo.no_engine);
        assert_eq!(config.motion.duration_ms, Some(500.0));
        // Unspecified fields keep their defaults
        assert_eq!(config.demo.frame_ms, 16.0);
        assert_eq!(config.motion.stagger_ms, None);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = CueConfig::load_from_file("definitely-not-here.toml");
        assert!(config.is_err());
    }
}
