//! Stage state management - canvas 2d context acquisition

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::session::{STAGE_HEIGHT, STAGE_WIDTH};

/// Errors that can occur while wiring up the stage
pub enum StageError {
    NoWindow,
    NoDocument,
    NoCanvas,
    NoContext(String),
}

impl From<StageError> for JsValue {
    fn from(err: StageError) -> Self {
        match err {
            StageError::NoWindow => JsValue::from_str("No window found"),
            StageError::NoDocument => JsValue::from_str("No document found"),
            StageError::NoCanvas => JsValue::from_str("No canvas with id 'gesture-canvas' found"),
            StageError::NoContext(e) => JsValue::from_str(&format!("2d context unavailable: {}", e)),
        }
    }
}

/// Holds the drawing context and the optional camera element
pub(crate) struct Stage {
    pub context: web_sys::CanvasRenderingContext2d,
    pub video: Option<web_sys::HtmlVideoElement>,
}

// Thread-local storage for stage state (WASM is single-threaded)
thread_local! {
    pub(crate) static STAGE: RefCell<Option<Stage>> = RefCell::new(None);
}

/// Wire up the overlay canvas and, when present, the camera video element.
pub fn initialize_canvas() -> Result<(), StageError> {
    let window = web_sys::window().ok_or(StageError::NoWindow)?;
    let document = window.document().ok_or(StageError::NoDocument)?;
    let canvas = document
        .get_element_by_id("gesture-canvas")
        .ok_or(StageError::NoCanvas)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| StageError::NoCanvas)?;

    canvas.set_width(STAGE_WIDTH as u32);
    canvas.set_height(STAGE_HEIGHT as u32);

    let context = canvas
        .get_context("2d")
        .map_err(|e| StageError::NoContext(format!("{:?}", e)))?
        .ok_or_else(|| StageError::NoContext("null context".into()))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| StageError::NoContext("unexpected context type".into()))?;

    // The camera element is optional: without it the overlay draws on black
    // (for example while a camera failure message is up).
    let video = document
        .get_element_by_id("camera")
        .and_then(|el| el.dyn_into::<web_sys::HtmlVideoElement>().ok());

    STAGE.with(|stage| {
        *stage.borrow_mut() = Some(Stage { context, video });
    });

    Ok(())
}
