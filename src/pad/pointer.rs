use crate::draw::Shape;
use crate::input::{Tool, events::MouseButton};
use log::warn;

use super::{Sketchpad, StrokeState};

impl Sketchpad {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate in device pixels
    /// * `y` - Mouse Y coordinate in device pixels
    ///
    /// # Behavior
    /// - Left press while Idle: records the canvas snapshot for undo and
    ///   starts a stroke at the converted surface-local position
    /// - Right press: ends the stroke in progress; shapes already stamped
    ///   stay on the canvas
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        match button {
            MouseButton::Left => {
                if matches!(self.state, StrokeState::Idle) {
                    let (start_x, start_y) = self.to_local(x, y);
                    // The snapshot is taken before the stroke touches the
                    // canvas, even if the stroke never produces output.
                    match self.surface.encode_png() {
                        Ok(snapshot) => self.history.push(snapshot),
                        Err(err) => warn!("Stroke will have no undo entry: {err}"),
                    }
                    self.state = StrokeState::Stroking {
                        tool: self.tool(),
                        start_x,
                        start_y,
                    };
                    self.needs_redraw = true;
                }
            }
            MouseButton::Right => {
                if !matches!(self.state, StrokeState::Idle) {
                    self.state = StrokeState::Idle;
                }
            }
            _ => {}
        }
    }

    /// Processes mouse motion (dragging) events.
    ///
    /// # Arguments
    /// * `x` - Current mouse X coordinate in device pixels
    /// * `y` - Current mouse Y coordinate in device pixels
    ///
    /// # Behavior
    /// While a stroke is in progress every motion stamps the current shape
    /// permanently onto the canvas; there is no separate preview layer. For
    /// the pen tool the stroke origin then advances to the current point so
    /// successive segments chain into a polyline. Motion while Idle does
    /// nothing.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        let (local_x, local_y) = self.to_local(x, y);
        if let StrokeState::Stroking {
            tool,
            start_x,
            start_y,
        } = self.state
        {
            let shape = Shape::from_drag(
                tool,
                (start_x, start_y),
                (local_x, local_y),
                self.color,
                self.thickness,
            );
            self.surface.stamp(&shape);

            if tool == Tool::Pen {
                self.state = StrokeState::Stroking {
                    tool,
                    start_x: local_x,
                    start_y: local_y,
                };
            }
            self.needs_redraw = true;
        }
    }

    /// Processes mouse button release events.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was released
    ///
    /// # Behavior
    /// Releasing the left button during a stroke returns the pad to Idle.
    /// The canvas keeps everything the stroke stamped; no finalization pass
    /// runs.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        if matches!(self.state, StrokeState::Stroking { .. }) {
            self.state = StrokeState::Idle;
        }
    }
}
