//! Camera status reporting
//!
//! The host page owns getUserMedia; when capture fails it reports the
//! DOMException here and the overlay shows a visible message. There is no
//! retry path - the user reloads the page to ask for the camera again.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// A camera failure worth showing on the overlay
#[derive(Clone)]
pub struct CameraError {
    pub title: String,
    pub detail: String,
}

thread_local! {
    static CAMERA_ERROR: RefCell<Option<CameraError>> = RefCell::new(None);
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called from JavaScript when getUserMedia rejects. `name` is the
/// DOMException name; anything unrecognized falls through to a generic
/// message carrying the raw detail.
#[wasm_bindgen]
pub fn report_camera_error(name: &str, message: &str) {
    let error = match name {
        "NotAllowedError" => CameraError {
            title: "Camera Access Denied".into(),
            detail: "Allow camera access and reload to use the hand gesture features.".into(),
        },
        "NotFoundError" => CameraError {
            title: "Camera Not Found".into(),
            detail: "A camera is required to detect hand gestures.".into(),
        },
        _ => CameraError {
            title: "Camera Error".into(),
            detail: format!("There was a problem accessing your camera: {message}"),
        },
    };

    web_sys::console::error_1(&format!("Camera access error: {name}: {message}").into());
    CAMERA_ERROR.with(|slot| *slot.borrow_mut() = Some(error));
}

/// Clear a previously reported failure (the camera came up after all).
#[wasm_bindgen]
pub fn clear_camera_error() {
    CAMERA_ERROR.with(|slot| *slot.borrow_mut() = None);
}

// ============================================================================
// INTERNAL API
// ============================================================================

/// Current failure, if any (for the overlay)
pub fn camera_error() -> Option<CameraError> {
    CAMERA_ERROR.with(|slot| slot.borrow().clone())
}
