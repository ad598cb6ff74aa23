//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include canvas dimensions,
//! stroke appearance, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use types::ExportConfig;

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use enums::ColorSpec;
#[allow(unused_imports)]
pub use types::{CanvasConfig, StrokeConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
///
/// [stroke]
/// color = "black"
/// thickness = 5.0
///
/// [export]
/// directory = "~/Pictures"
/// filename = "myDrawing"
/// format = "png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas dimensions
    #[serde(default)]
    pub canvas: types::CanvasConfig,

    /// Stroke appearance (color, thickness)
    #[serde(default)]
    pub stroke: types::StrokeConfig,

    /// Export destination and naming
    #[serde(default)]
    pub export: types::ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause undefined behavior
    /// or rendering issues. Invalid values are clamped to the nearest valid value and a
    /// warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`: 16 - 8192
    /// - `canvas.height`: 16 - 8192
    /// - `stroke.thickness`: 1.0 - 50.0
    /// - `export.format`: must be "png"
    /// - `export.filename`: non-empty, formattable chrono template
    fn validate_and_clamp(&mut self) {
        // Canvas width: 16 - 8192
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }

        // Canvas height: 16 - 8192
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        // Thickness: 1.0 - 50.0; clamp passes NaN through, so reset it
        if self.stroke.thickness.is_nan() {
            log::warn!("Stroke thickness is not a number, falling back to 5.0");
            self.stroke.thickness = 5.0;
        } else if !(1.0..=50.0).contains(&self.stroke.thickness) {
            log::warn!(
                "Invalid stroke thickness {:.1}, clamping to 1.0-50.0 range",
                self.stroke.thickness
            );
            self.stroke.thickness = self.stroke.thickness.clamp(1.0, 50.0);
        }

        // Only PNG output is supported
        if !self.export.format.eq_ignore_ascii_case("png") {
            log::warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }

        // An empty filename template would produce files named ".png"
        if self.export.filename.is_empty() {
            log::warn!("Empty export filename, falling back to 'myDrawing'");
            self.export.filename = "myDrawing".to_string();
        }

        // A template chrono cannot format would fail every save
        if !crate::export::template_is_valid(&self.export.filename) {
            log::warn!(
                "Invalid export filename template '{}', falling back to 'myDrawing'",
                self.export.filename
            );
            self.export.filename = "myDrawing".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/sketchpad/config.toml`.
    /// If the file doesn't exist, returns a Config with default values. All loaded values
    /// are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert!(matches!(config.stroke.color, ColorSpec::Name(ref name) if name == "black"));
        assert_eq!(config.stroke.thickness, 5.0);
        assert_eq!(config.export.directory, "");
        assert_eq!(config.export.filename, "myDrawing");
        assert_eq!(config.export.format, "png");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            width = 1024
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 1024);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.stroke.thickness, 5.0);
        assert_eq!(config.export.filename, "myDrawing");
    }

    #[test]
    fn test_rgb_color_spec_parses() {
        let config: Config = toml::from_str(
            r#"
            [stroke]
            color = [255, 0, 0]
            "#,
        )
        .unwrap();

        let color = config.stroke.color.to_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            width = 4
            height = 100000

            [stroke]
            thickness = 100.0
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.stroke.thickness, 50.0);
    }

    #[test]
    fn test_unsupported_format_resets_to_png() {
        let mut config: Config = toml::from_str(
            r#"
            [export]
            format = "jpeg"
            filename = ""
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.export.format, "png");
        assert_eq!(config.export.filename, "myDrawing");
    }

    #[test]
    fn test_invalid_filename_template_resets_to_default() {
        let mut config: Config = toml::from_str(
            r#"
            [export]
            filename = "drawing_100%"
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.export.filename, "myDrawing");
    }

    #[test]
    fn test_nan_thickness_resets_to_default() {
        let mut config: Config = toml::from_str(
            r#"
            [stroke]
            thickness = nan
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.stroke.thickness, 5.0);
    }
}
