//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod camera;
mod hands;
mod scene;

pub use camera::{camera_error, clear_camera_error, report_camera_error, CameraError};
pub use hands::{hands_snapshot, update_hands};
pub use scene::{seed_scene, set_mirrored, with_scene};
