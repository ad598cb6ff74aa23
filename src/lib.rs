//! Library exports for reusing sketchpad subsystems.
//!
//! Exposes the pad widget and its supporting modules so that other front ends
//! can embed the canvas, history, and export logic without the bundled window.

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod pad;
pub mod util;

pub use config::Config;
pub use pad::Sketchpad;
