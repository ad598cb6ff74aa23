//! Stroke state machine and pad state management.

use crate::draw::{Color, Surface, SurfaceError};
use crate::history::History;
use crate::input::Tool;
use log::debug;

/// Current stroke state machine.
///
/// Tracks whether the user is idle or actively dragging a stroke.
/// State transitions occur on mouse press and release events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Actively drawing a stroke (left button held down)
    Stroking {
        /// Which tool is being used for this stroke (captured at press)
        tool: Tool,
        /// Stroke origin X in surface-local coordinates
        start_x: f64,
        /// Stroke origin Y in surface-local coordinates; for the pen tool the
        /// origin advances to the last stamped point
        start_y: f64,
    },
}

/// The drawing pad widget.
///
/// Colocates the raster canvas, the snapshot history, the active tool, and
/// the stroke state machine. Mouse events arrive in device coordinates and
/// are converted against the canvas origin the embedding sets.
pub struct Sketchpad {
    /// Persistent raster canvas all shapes are stamped onto
    pub(crate) surface: Surface,
    /// Snapshot history backing the undo action
    pub(crate) history: History,
    /// Stroke color applied to every stamped shape
    pub color: Color,
    /// Stroke thickness in pixels
    pub thickness: f64,
    /// Current stroke state machine
    pub state: StrokeState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Active drawing tool (selected via keys or the CLI)
    tool: Tool,
    /// Canvas origin in device coordinates (set by the embedding)
    origin: (f64, f64),
}

impl Sketchpad {
    /// Creates a pad with a transparent canvas of the given dimensions.
    ///
    /// The initial tool is [`Tool::Line`]; the canvas origin defaults to
    /// (0, 0) until the embedding calls [`Sketchpad::set_origin`].
    ///
    /// # Arguments
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    /// * `color` - Stroke color for stamped shapes
    /// * `thickness` - Stroke thickness in pixels
    pub fn new(width: i32, height: i32, color: Color, thickness: f64) -> Result<Self, SurfaceError> {
        let surface = Surface::new(width, height)?;
        debug!("Created {width}x{height} pad");
        Ok(Self {
            surface,
            history: History::new(),
            color,
            thickness,
            state: StrokeState::Idle,
            needs_redraw: false,
            tool: Tool::default(),
            origin: (0.0, 0.0),
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// The active drawing tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects the active drawing tool.
    ///
    /// A stroke already in progress keeps the tool it was started with.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool switched to {tool:?}");
            self.tool = tool;
        }
    }

    /// Sets the canvas origin in device coordinates.
    ///
    /// The embedding calls this with the canvas position inside its window so
    /// pointer events can be converted to surface-local coordinates.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = (x, y);
    }

    /// True while a stroke is in progress.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_stroking(&self) -> bool {
        matches!(self.state, StrokeState::Stroking { .. })
    }

    /// Returns a copy of the canvas as packed ARGB pixels, row-major.
    pub fn pixels(&mut self) -> Vec<u32> {
        self.surface.pixels()
    }

    /// Converts device coordinates to surface-local coordinates.
    pub(super) fn to_local(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.origin.0, y - self.origin.1)
    }
}
