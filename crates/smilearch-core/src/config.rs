//! Landing page configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingConfig {
    #[serde(default)]
    pub clinic: ClinicConfig,
    #[serde(default)]
    pub arch: ArchConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

/// Copy shown in the page header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicConfig {
    #[serde(default = "default_clinic_name")]
    pub name: String,
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            name: default_clinic_name(),
            headline: default_headline(),
            tagline: default_tagline(),
        }
    }
}

fn default_clinic_name() -> String {
    "SmileArch Dental".to_string()
}

fn default_headline() -> String {
    "Healthy smiles for two".to_string()
}

fn default_tagline() -> String {
    "Gentle dental care through every trimester. Tap a tooth to learn more.".to_string()
}

/// Geometry of the two arches, in world units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchConfig {
    /// Distance between neighbouring teeth along the arch
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Quadratic inward bend of the arch
    #[serde(default = "default_curvature")]
    pub curvature: f32,
    /// Vertical distance between the upper and lower arch
    #[serde(default = "default_gap")]
    pub gap: f32,
    /// Idle rotation of the arch in radians per second
    #[serde(default = "default_auto_rotate_speed")]
    pub auto_rotate_speed: f32,
}

impl Default for ArchConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            curvature: default_curvature(),
            gap: default_gap(),
            auto_rotate_speed: default_auto_rotate_speed(),
        }
    }
}

fn default_spacing() -> f32 {
    0.35
}

fn default_curvature() -> f32 {
    0.08
}

fn default_gap() -> f32 {
    1.2
}

fn default_auto_rotate_speed() -> f32 {
    0.25
}

/// Hover, highlight and transition tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Scale a tooth eases toward when hovered or active
    #[serde(default = "default_hover_scale")]
    pub hover_scale: f32,
    /// Fraction of the remaining distance covered per 60 Hz frame
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    /// Pointer hit radius around each tooth center
    #[serde(default = "default_pick_radius")]
    pub pick_radius: f32,
    /// Info panel fade rate (per second)
    #[serde(default = "default_panel_fade_speed")]
    pub panel_fade_speed: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hover_scale: default_hover_scale(),
            smoothing: default_smoothing(),
            pick_radius: default_pick_radius(),
            panel_fade_speed: default_panel_fade_speed(),
        }
    }
}

fn default_hover_scale() -> f32 {
    1.2
}

fn default_smoothing() -> f32 {
    0.1
}

fn default_pick_radius() -> f32 {
    0.17
}

fn default_panel_fade_speed() -> f32 {
    8.0
}

impl LandingConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to pretty TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load configuration from file, falling back to defaults when it does not exist
pub fn load_config(path: &Path) -> Result<LandingConfig, ConfigError> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config = LandingConfig::from_toml(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(LandingConfig::default())
    }
}

/// Write the default configuration to `path`
pub fn save_default_config(path: &Path) -> Result<(), ConfigError> {
    let content = LandingConfig::default().to_toml()?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}
