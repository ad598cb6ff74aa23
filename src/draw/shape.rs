//! Shape definitions for the drawing pad.

use super::color::Color;
use crate::input::Tool;
use crate::util;

/// Represents a single shape stamped onto the canvas.
///
/// Each variant carries the geometry produced by one drag step together with
/// the stroke style it is drawn with. Coordinates are surface-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight line between two points
    Line {
        /// Starting X coordinate
        x1: f64,
        /// Starting Y coordinate
        y1: f64,
        /// Ending X coordinate
        x2: f64,
        /// Ending Y coordinate
        y2: f64,
        /// Line color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Rectangle outline with its corner at the drag origin.
    ///
    /// Width and height keep the sign of the drag direction; dragging up or
    /// left produces negative extents, which Cairo interprets as a rectangle
    /// extending in that direction.
    Rect {
        /// Corner X coordinate (drag origin)
        x: f64,
        /// Corner Y coordinate (drag origin)
        y: f64,
        /// Signed width in pixels
        w: f64,
        /// Signed height in pixels
        h: f64,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
    /// Circle outline centered on the drag origin
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius in pixels (Euclidean distance of the drag)
        radius: f64,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
}

impl Shape {
    /// Builds the shape for one drag step of the given tool.
    ///
    /// `start` is the recorded stroke origin and `current` the latest pointer
    /// position, both in surface-local coordinates. The pen tool yields the
    /// segment from the last recorded point to the current one; the caller
    /// advances the recorded point afterwards to chain segments into a
    /// polyline.
    ///
    /// # Arguments
    /// * `tool` - Active drawing tool
    /// * `start` - Stroke origin (or last pen point) as (x, y)
    /// * `current` - Current pointer position as (x, y)
    /// * `color` - Stroke color
    /// * `thick` - Stroke thickness in pixels
    pub fn from_drag(
        tool: Tool,
        start: (f64, f64),
        current: (f64, f64),
        color: Color,
        thick: f64,
    ) -> Self {
        let (sx, sy) = start;
        let (cx, cy) = current;
        match tool {
            Tool::Line | Tool::Pen => Shape::Line {
                x1: sx,
                y1: sy,
                x2: cx,
                y2: cy,
                color,
                thick,
            },
            Tool::Rect => Shape::Rect {
                x: sx,
                y: sy,
                w: cx - sx,
                h: cy - sy,
                color,
                thick,
            },
            Tool::Circle => Shape::Circle {
                cx: sx,
                cy: sy,
                radius: util::distance(sx, sy, cx, cy),
                color,
                thick,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn rect_keeps_corner_and_signed_extents() {
        let shape = Shape::from_drag(Tool::Rect, (10.0, 10.0), (50.0, 30.0), BLACK, 5.0);
        match shape {
            Shape::Rect { x, y, w, h, .. } => {
                assert_eq!(x, 10.0);
                assert_eq!(y, 10.0);
                assert_eq!(w, 40.0);
                assert_eq!(h, 20.0);
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn rect_dragged_up_left_has_negative_extents() {
        let shape = Shape::from_drag(Tool::Rect, (50.0, 30.0), (10.0, 10.0), BLACK, 5.0);
        match shape {
            Shape::Rect { x, y, w, h, .. } => {
                assert_eq!(x, 50.0);
                assert_eq!(y, 30.0);
                assert_eq!(w, -40.0);
                assert_eq!(h, -20.0);
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn circle_radius_is_euclidean_distance() {
        let shape = Shape::from_drag(Tool::Circle, (0.0, 0.0), (3.0, 4.0), BLACK, 5.0);
        match shape {
            Shape::Circle { cx, cy, radius, .. } => {
                assert_eq!(cx, 0.0);
                assert_eq!(cy, 0.0);
                assert_eq!(radius, 5.0);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn pen_yields_segment_between_points() {
        let shape = Shape::from_drag(Tool::Pen, (5.0, 5.0), (8.0, 9.0), BLACK, 5.0);
        match shape {
            Shape::Line { x1, y1, x2, y2, .. } => {
                assert_eq!((x1, y1), (5.0, 5.0));
                assert_eq!((x2, y2), (8.0, 9.0));
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn zero_displacement_produces_degenerate_shapes() {
        let p = (42.0, 17.0);
        for tool in [Tool::Line, Tool::Rect, Tool::Circle, Tool::Pen] {
            match Shape::from_drag(tool, p, p, BLACK, 5.0) {
                Shape::Line { x1, y1, x2, y2, .. } => {
                    assert_eq!((x1, y1), (x2, y2));
                }
                Shape::Rect { w, h, .. } => {
                    assert_eq!(w, 0.0);
                    assert_eq!(h, 0.0);
                }
                Shape::Circle { radius, .. } => {
                    assert_eq!(radius, 0.0);
                }
            }
        }
    }
}
