//! Geometric gesture classifiers
//!
//! Pure functions from the current frame's keypoints to gesture signals.
//! No state, no wasm types; every threshold lives in [`GestureConfig`].

mod config;
pub(crate) mod geometry;

pub mod flat_hand;
pub mod heart;
pub mod rock;
pub mod takeoff;

pub use config::GestureConfig;
