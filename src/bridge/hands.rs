//! Hand keypoint storage and JS bridge
//!
//! Receives hand-pose keypoints from JavaScript each frame and stores them
//! for the classifiers and renderer to read. The stored frame is replaced
//! wholesale on every delivery; nothing is smoothed or remembered.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::hand::{Hand, Keypoint, KEYPOINT_COUNT};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static HANDS: RefCell<Vec<Hand>> = RefCell::new(Vec::new());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of
/// `num_hands * 21 * 2` values (x, y per keypoint, video-pixel space).
#[wasm_bindgen]
pub fn update_hands(data: &[f32], num_hands: usize) {
    let expected = num_hands * KEYPOINT_COUNT * 2;
    if data.len() != expected {
        web_sys::console::warn_1(
            &format!(
                "Invalid hand data length: {} (expected {})",
                data.len(),
                expected
            )
            .into(),
        );
        return;
    }

    HANDS.with(|store| {
        let mut hands = store.borrow_mut();
        hands.clear();
        for h in 0..num_hands {
            let mut keypoints = [Keypoint::default(); KEYPOINT_COUNT];
            for (i, keypoint) in keypoints.iter_mut().enumerate() {
                let base = (h * KEYPOINT_COUNT + i) * 2;
                *keypoint = Keypoint {
                    x: data[base],
                    y: data[base + 1],
                };
            }
            hands.push(Hand { keypoints });
        }
    });
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Current frame's hands (for the session and renderer)
pub fn hands_snapshot() -> Vec<Hand> {
    HANDS.with(|store| store.borrow().clone())
}
