//! Scene host - owns the single per-page gesture session
//!
//! The render loop is the only writer: it borrows the session once per
//! frame, advances it, and draws from it. JS only reaches in through the
//! configuration entry points below.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::gestures::GestureConfig;
use crate::session::Session;

thread_local! {
    static SCENE: RefCell<Session> = RefCell::new(Session::new(GestureConfig::default(), 0));
}

/// Run `f` with the page's session.
pub fn with_scene<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    SCENE.with(|scene| f(&mut scene.borrow_mut()))
}

/// Reseed the session RNG; called once at init with the host clock so
/// firework placement differs between page loads.
pub fn seed_scene(seed: u64) {
    with_scene(|scene| scene.reseed(seed));
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Toggle the selfie-view assumption behind every handedness check.
#[wasm_bindgen]
pub fn set_mirrored(mirrored: bool) {
    with_scene(|scene| scene.config.mirrored = mirrored);
    web_sys::console::log_1(&format!("Camera mirroring set to {mirrored}").into());
}
