//! Input event types shared between the window loop and the pad.

/// Mouse button identification.
///
/// The window loop maps the toolkit's native button codes to these values
/// before forwarding them to the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (ends the current stroke)
    Right,
    /// Middle mouse button (currently unused)
    #[allow(dead_code)]
    Middle,
}
