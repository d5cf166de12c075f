//! Handwave Web - webcam hand-gesture reactions
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod animation;
mod bridge;
mod gestures;
mod hand;
mod renderer;
mod session;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{clear_camera_error, report_camera_error, set_mirrored, update_hands};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Wire up the overlay canvas - must be called before render_frame
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    renderer::initialize_canvas()?;
    bridge::seed_scene(js_sys::Date::now() as u64);
    console_log!("✅ Hand gesture overlay ready");
    Ok(())
}

/// Render one frame with the current hands
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_frame();
}
