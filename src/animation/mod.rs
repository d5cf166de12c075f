//! Animation state - the edge-trigger latch, the persistent animated
//! objects, and the short-lived emoji effects.
//!
//! Re-exports only. All logic in submodules.

mod car;
mod effects;
mod latch;
mod plane;

pub use car::Car;
pub use effects::{Firework, Heart, FIREWORK_LIFETIME_MS, HEART_LIFETIME_MS};
pub use latch::GestureLatch;
pub use plane::Plane;
