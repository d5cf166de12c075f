//! Classifier thresholds and camera-orientation assumptions
//!
//! The pixel and slope values below were tuned by eye against a 640x480
//! front-camera feed. TODO: calibrate against recorded gesture sessions
//! instead of eyeballing.

/// Tunable thresholds for the geometric classifiers.
#[derive(Clone, Copy, Debug)]
pub struct GestureConfig {
    /// Max distance between paired fingertips for the heart pinch (px)
    pub pinch_join_px: f32,
    /// Ceiling on |dy/dx| for a finger segment to count as level
    pub flat_slope_max: f32,
    /// Max x spread between adjacent knuckles for a vertical palm (px)
    pub knuckle_align_px: f32,
    /// Open interval of slopes accepted by the takeoff pose
    pub launch_slope_min: f32,
    pub launch_slope_max: f32,
    /// Whether the feed is a selfie view. Every handedness-dependent x
    /// comparison (left-hand filter, horns thumb/palm checks) flips with it.
    pub mirrored: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_join_px: 20.0,
            flat_slope_max: 0.15,
            knuckle_align_px: 20.0,
            launch_slope_min: 0.3,
            launch_slope_max: 1.0,
            mirrored: true,
        }
    }
}
