//! Windowed front end.
//!
//! Hosts the pad in a `minifb` window: polls real mouse and keyboard input,
//! feeds it to the pad, and presents the canvas each frame. The canvas sits
//! inset by a fixed margin, so pointer coordinates arrive in window space and
//! the pad converts them to canvas space itself.

use crate::config::{Config, ExportConfig};
use crate::export::{self, SaveConfig};
use crate::input::{MouseButton, Tool};
use crate::pad::Sketchpad;
use crate::util;
use anyhow::{Context, Result};
use log::{info, warn};
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

/// Gap in pixels between the window edge and the canvas on every side.
const CANVAS_MARGIN: usize = 16;

/// Fill color of the margin strip around the canvas (0RGB).
const MARGIN_FILL: u32 = 0x00d6d6d6;

/// Creates the window and runs the pad until the user quits.
pub fn run(config: &Config, initial_tool: Tool) -> Result<()> {
    let mut app = App::new(config, initial_tool)?;
    app.run()
}

struct App {
    window: Window,
    pad: Sketchpad,
    save_config: SaveConfig,
    frame: Vec<u32>,
    frame_width: usize,
    frame_height: usize,
    left_was_down: bool,
    right_was_down: bool,
    last_mouse: (f64, f64),
}

impl App {
    fn new(config: &Config, initial_tool: Tool) -> Result<Self> {
        let canvas_width = config.canvas.width as usize;
        let canvas_height = config.canvas.height as usize;
        let frame_width = canvas_width + 2 * CANVAS_MARGIN;
        let frame_height = canvas_height + 2 * CANVAS_MARGIN;

        let color = config.stroke.color.to_color();
        let mut pad = Sketchpad::new(
            canvas_width as i32,
            canvas_height as i32,
            color,
            config.stroke.thickness,
        )
        .context("Failed to create canvas")?;
        pad.set_tool(initial_tool);
        pad.set_origin(CANVAS_MARGIN as f64, CANVAS_MARGIN as f64);

        let window = Window::new(
            &window_title(initial_tool),
            frame_width,
            frame_height,
            WindowOptions::default(),
        )
        .context("Failed to create window")?;

        info!(
            "Canvas {}x{}, {} stroke at {:.1}px",
            canvas_width,
            canvas_height,
            util::color_to_name(&color),
            config.stroke.thickness
        );

        let mut app = Self {
            window,
            pad,
            save_config: save_config_from(&config.export),
            frame: vec![MARGIN_FILL; frame_width * frame_height],
            frame_width,
            frame_height,
            left_was_down: false,
            right_was_down: false,
            last_mouse: (0.0, 0.0),
        };
        app.compose_frame();
        Ok(app)
    }

    fn run(&mut self) -> Result<()> {
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.poll_mouse();
            self.poll_keys();
            self.present()?;
        }
        Ok(())
    }

    /// Turns the polled button/position state into press, motion, and
    /// release events for the pad.
    fn poll_mouse(&mut self) {
        let left_down = self.window.get_mouse_down(minifb::MouseButton::Left);
        let right_down = self.window.get_mouse_down(minifb::MouseButton::Right);

        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            let (x, y) = (f64::from(x), f64::from(y));

            if left_down && !self.left_was_down {
                self.pad.on_mouse_press(MouseButton::Left, x, y);
            }
            if right_down && !self.right_was_down {
                self.pad.on_mouse_press(MouseButton::Right, x, y);
            }
            if (x, y) != self.last_mouse {
                self.pad.on_mouse_motion(x, y);
                self.last_mouse = (x, y);
            }
        }

        if !left_down && self.left_was_down {
            self.pad.on_mouse_release(MouseButton::Left);
        }

        self.left_was_down = left_down;
        self.right_was_down = right_down;
    }

    fn poll_keys(&mut self) {
        if self.window.is_key_pressed(Key::L, KeyRepeat::No) {
            self.select_tool(Tool::Line);
        }
        if self.window.is_key_pressed(Key::R, KeyRepeat::No) {
            self.select_tool(Tool::Rect);
        }
        if self.window.is_key_pressed(Key::C, KeyRepeat::No) {
            self.select_tool(Tool::Circle);
        }
        if self.window.is_key_pressed(Key::P, KeyRepeat::No) {
            self.select_tool(Tool::Pen);
        }
        if self.window.is_key_pressed(Key::U, KeyRepeat::No) {
            self.pad.undo();
        }
        if self.window.is_key_pressed(Key::E, KeyRepeat::No) {
            self.pad.clear();
        }
        if self.window.is_key_pressed(Key::S, KeyRepeat::No) {
            self.export();
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        self.pad.set_tool(tool);
        self.window.set_title(&window_title(tool));
    }

    /// Writes the current canvas to disk. Failures are logged, not fatal.
    fn export(&mut self) {
        match self.pad.to_png() {
            Ok(data) => match export::save_drawing(&data, &self.save_config) {
                Ok(path) => info!("Exported drawing to {}", path.display()),
                Err(err) => warn!("Export failed: {}", err),
            },
            Err(err) => warn!("Could not encode drawing: {}", err),
        }
    }

    fn present(&mut self) -> Result<()> {
        if self.pad.needs_redraw {
            self.compose_frame();
            self.pad.needs_redraw = false;
        }
        self.window
            .update_with_buffer(&self.frame, self.frame_width, self.frame_height)
            .context("Failed to present frame")?;
        Ok(())
    }

    /// Copies the canvas pixels into the window frame, compositing them onto
    /// an opaque white background inside the margin.
    fn compose_frame(&mut self) {
        let canvas_width = self.pad.width() as usize;
        let canvas_height = self.pad.height() as usize;
        let pixels = self.pad.pixels();

        for y in 0..canvas_height {
            let src_row = y * canvas_width;
            let dst_row = (y + CANVAS_MARGIN) * self.frame_width + CANVAS_MARGIN;
            for x in 0..canvas_width {
                self.frame[dst_row + x] = over_white(pixels[src_row + x]);
            }
        }
    }
}

fn window_title(tool: Tool) -> String {
    format!("sketchpad - {}", util::tool_to_name(tool))
}

/// Builds runtime save settings from the export section of the config.
///
/// An empty directory means "use the download directory", matching the
/// config default.
fn save_config_from(export: &ExportConfig) -> SaveConfig {
    let defaults = SaveConfig::default();
    let directory = if export.directory.is_empty() {
        defaults.directory
    } else {
        export::expand_tilde(&export.directory)
    };

    SaveConfig {
        directory,
        filename_template: export.filename.clone(),
        format: export.format.clone(),
    }
}

/// Composites one premultiplied ARGB canvas pixel over opaque white,
/// returning the 0RGB value the window buffer expects.
fn over_white(argb: u32) -> u32 {
    let alpha = (argb >> 24) & 0xff;
    let inverse = 255 - alpha;
    let r = (((argb >> 16) & 0xff) + inverse).min(255);
    let g = (((argb >> 8) & 0xff) + inverse).min(255);
    let b = ((argb & 0xff) + inverse).min(255);
    (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_white_transparent_is_white() {
        assert_eq!(over_white(0x0000_0000), 0x00ff_ffff);
    }

    #[test]
    fn test_over_white_opaque_keeps_color() {
        assert_eq!(over_white(0xffff_0000), 0x00ff_0000);
        assert_eq!(over_white(0xff00_00ff), 0x0000_00ff);
    }

    #[test]
    fn test_over_white_half_alpha_blends() {
        // Premultiplied half-opacity red: a=128, r=128
        let blended = over_white(0x8080_0000);
        assert_eq!(blended >> 16, 0xff);
        assert_eq!((blended >> 8) & 0xff, 127);
        assert_eq!(blended & 0xff, 127);
    }

    #[test]
    fn test_window_title_names_tool() {
        assert_eq!(window_title(Tool::Line), "sketchpad - line");
        assert_eq!(window_title(Tool::Circle), "sketchpad - circle");
    }
}
