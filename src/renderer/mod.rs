//! Renderer module - canvas overlay drawing
//!
//! Re-exports only. All logic in submodules.

mod overlay;
mod state;

pub use overlay::render_frame;
pub use state::{initialize_canvas, StageError};
