//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Controls the pixel dimensions of the drawing canvas. The window is sized
/// to fit the canvas plus its surrounding margin.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Stroke appearance settings.
///
/// Controls the color and thickness every stamped shape is drawn with.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrokeConfig {
    /// Stroke color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,

    /// Stroke thickness in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_stroke_thickness")]
    pub thickness: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            thickness: default_stroke_thickness(),
        }
    }
}

/// Export settings.
///
/// Controls where exported drawings are written and how they are named.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported drawings are saved to (~ is expanded)
    /// Leave empty to use your download directory
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template (supports chrono format specifiers like %Y-%m-%d)
    #[serde(default = "default_export_filename")]
    pub filename: String,

    /// Image format extension (only "png" is supported)
    #[serde(default = "default_export_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename: default_export_filename(),
            format: default_export_format(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_thickness() -> f64 {
    5.0
}

fn default_export_directory() -> String {
    String::new()
}

fn default_export_filename() -> String {
    "myDrawing".to_string()
}

fn default_export_format() -> String {
    "png".to_string()
}
