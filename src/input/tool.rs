//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what shape is stamped when the user drags the
/// mouse. Tools are switched at runtime with the L, R, C, and P keys or
/// selected at startup with the `--tool` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Straight line - between start and end points (default)
    #[default]
    Line,
    /// Rectangle outline - from corner to corner
    Rect,
    /// Circle outline - from center outward
    Circle,
    /// Freehand drawing - follows the mouse path
    Pen,
}
