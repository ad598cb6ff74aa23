//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the pad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Geometry produced by one drag step of a drawing tool
//! - [`Surface`]: Persistent raster canvas the shapes are stamped onto
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use shape::Shape;
pub use surface::{Surface, SurfaceError};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use render::render_shape;
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
