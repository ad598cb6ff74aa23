//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::Shape;

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape
/// type. Handles all shape variants: Line, Rect, and Circle.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `shape` - The shape to render
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            thick,
        } => {
            render_line(ctx, *x1, *y1, *x2, *y2, *color, *thick);
        }
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => {
            render_rect(ctx, *x, *y, *w, *h, *color, *thick);
        }
        Shape::Circle {
            cx,
            cy,
            radius,
            color,
            thick,
        } => {
            render_circle(ctx, *cx, *cy, *radius, *color, *thick);
        }
    }
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}

/// Render a rectangle (outline)
///
/// Width and height are passed through with their sign intact; Cairo extends
/// the rectangle leftwards/upwards for negative extents, matching the drag
/// direction.
fn render_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Render a circle (outline) using a full Cairo arc
fn render_circle(ctx: &cairo::Context, cx: f64, cy: f64, radius: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}
