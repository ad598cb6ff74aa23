//! Input event vocabulary and tool selection.
//!
//! This module defines the generic mouse event types the pad consumes and the
//! set of drawing tools the user can switch between. The windowing front end
//! translates its native events into these types before feeding the pad.

pub mod events;
pub mod tool;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use tool::Tool;
