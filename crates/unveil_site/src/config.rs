//! Site configuration file handling
//!
//! Settings live in `unveil.toml` next to the binary's working directory.
//! Every field has a default and the file itself is optional, so a bare
//! checkout runs without any setup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::theme::ColorTheme;

pub const CONFIG_FILE: &str = "unveil.toml";

/// Rejected configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Threshold is a visible fraction
    #[error("reveal threshold must be within 0..=1, got {0}")]
    Threshold(f32),

    /// Zero or negative viewport
    #[error("viewport dimensions must be positive, got {width}x{height}")]
    Viewport { width: f32, height: f32 },

    /// Negative durations and delays have no meaning
    #[error("{field} must not be negative, got {value}")]
    NegativeTiming { field: &'static str, value: f32 },
}

/// Site configuration stored in unveil.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub viewport: ViewportSection,
    #[serde(default)]
    pub reveal: RevealSection,
    #[serde(default)]
    pub coming_soon: ComingSoonSection,
}

/// Product naming and palette
#[derive(Debug, Deserialize, Serialize)]
pub struct SiteSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default)]
    pub theme: ColorTheme,
}

fn default_name() -> String {
    "Meridian".to_string()
}

fn default_tagline() -> String {
    "The settlement layer for autonomous agents".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            theme: ColorTheme::default(),
        }
    }
}

/// Headless viewport dimensions
#[derive(Debug, Deserialize, Serialize)]
pub struct ViewportSection {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    800.0
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Default timing for reveal blocks that do not set their own
#[derive(Debug, Deserialize, Serialize)]
pub struct RevealSection {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f32,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default = "default_stagger_interval_ms")]
    pub stagger_interval_ms: f32,
}

fn default_duration_ms() -> f32 {
    800.0
}

fn default_threshold() -> f32 {
    0.15
}

fn default_stagger_interval_ms() -> f32 {
    120.0
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            threshold: default_threshold(),
            stagger_interval_ms: default_stagger_interval_ms(),
        }
    }
}

/// Copy and palette for the coming-soon placeholder
#[derive(Debug, Deserialize, Serialize)]
pub struct ComingSoonSection {
    #[serde(default = "default_coming_soon_title")]
    pub title: String,
    #[serde(default = "default_coming_soon_subtitle")]
    pub subtitle: String,
    /// Overrides the site palette for this block when set
    #[serde(default)]
    pub theme: Option<ColorTheme>,
}

fn default_coming_soon_title() -> String {
    "The agent marketplace".to_string()
}

fn default_coming_soon_subtitle() -> String {
    "Discovery, reputation, and hiring between agents arrive after mainnet.".to_string()
}

impl Default for ComingSoonSection {
    fn default() -> Self {
        Self {
            title: default_coming_soon_title(),
            subtitle: default_coming_soon_subtitle(),
            theme: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a directory, falling back to defaults when
    /// no `unveil.toml` is present
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        if !config_path.exists() {
            debug!("no {} found, using defaults", CONFIG_FILE);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the page cannot run with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Threshold(self.reveal.threshold));
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return Err(ConfigError::Viewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.reveal.duration_ms < 0.0 {
            return Err(ConfigError::NegativeTiming {
                field: "reveal.duration_ms",
                value: self.reveal.duration_ms,
            });
        }
        if self.reveal.stagger_interval_ms < 0.0 {
            return Err(ConfigError::NegativeTiming {
                field: "reveal.stagger_interval_ms",
                value: self.reveal.stagger_interval_ms,
            });
        }
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize site config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let toml = r#"
            [site]
            name = "Meridian"
            tagline = "Machine-speed settlement"
            theme = "ember"

            [viewport]
            width = 1440.0
            height = 900.0

            [reveal]
            duration_ms = 600.0
            threshold = 0.25
            stagger_interval_ms = 80.0
        "#;

        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.theme, ColorTheme::Ember);
        assert_eq!(config.viewport.width, 1440.0);
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.reveal.stagger_interval_ms, 80.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml = r#"
            [site]
            name = "Testnet"
        "#;

        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.name, "Testnet");
        assert_eq!(config.site.theme, ColorTheme::Midnight);
        assert_eq!(config.viewport.height, 800.0);
        assert_eq!(config.reveal.duration_ms, 800.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = SiteConfig::load_from_dir(Path::new("/nonexistent/dir")).unwrap();
        assert_eq!(config.site.name, "Meridian");
        assert_eq!(config.reveal.threshold, 0.15);
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let mut config = SiteConfig::default();
        config.reveal.threshold = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Threshold(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_stagger_interval() {
        let mut config = SiteConfig::default();
        config.reveal.stagger_interval_ms = -10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeTiming {
                field: "reveal.stagger_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_defaults_pass_validation() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_coming_soon_section_overrides_copy() {
        let toml = r#"
            [coming_soon]
            title = "Mainnet"
            subtitle = "Opening soon."
            theme = "aurora"
        "#;

        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.coming_soon.title, "Mainnet");
        assert_eq!(config.coming_soon.subtitle, "Opening soon.");
        assert_eq!(config.coming_soon.theme, Some(ColorTheme::Aurora));
    }

    #[test]
    fn test_coming_soon_theme_defaults_to_none() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.coming_soon.theme, None);
        assert_eq!(config.coming_soon.title, "The agent marketplace");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = SiteConfig::default();
        let serialized = config.to_toml().unwrap();
        let reparsed: SiteConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.site.name, config.site.name);
        assert_eq!(reparsed.viewport.width, config.viewport.width);
    }
}
