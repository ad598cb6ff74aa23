//! Utility functions for colors, tools, and geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the config file
//! - Name-to-tool mapping for the CLI
//! - Euclidean distance used by the circle tool

use crate::draw::{Color, color::*};
use crate::input::Tool;

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Euclidean distance between two points.
///
/// The circle tool uses this to turn a drag into a radius.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Arguments
/// * `name` - Color name string
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Used by startup logging to report the configured stroke color.
///
/// # Arguments
/// * `color` - The color to identify
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Tool Mapping
// ============================================================================

/// Maps tool name strings to Tool values.
///
/// Used to parse the `--tool` CLI flag.
///
/// # Supported Names (case-insensitive)
/// - "line", "rect" (or "rectangle"), "circle", "pen"
pub fn name_to_tool(name: &str) -> Option<Tool> {
    match name.to_lowercase().as_str() {
        "line" => Some(Tool::Line),
        "rect" | "rectangle" => Some(Tool::Rect),
        "circle" => Some(Tool::Circle),
        "pen" => Some(Tool::Pen),
        _ => None,
    }
}

/// Maps a Tool value to its display name.
///
/// Used by the window title to show the active tool.
pub fn tool_to_name(tool: Tool) -> &'static str {
    match tool {
        Tool::Line => "line",
        Tool::Rect => "rect",
        Tool::Circle => "circle",
        Tool::Pen => "pen",
    }
}
