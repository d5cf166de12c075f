//! Edge-trigger latch shared by the plane and car animations
//!
//! Fires once per discrete gesture occurrence: the launch happens on the
//! false-to-true transition of the gesture signal, never again while the
//! pose is merely held, and re-arms only after a frame where hands are
//! present without the pose.

/// The activation triple backing an edge-triggered animation.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureLatch {
    /// Animation currently running
    pub active: bool,
    /// Gesture detected this frame
    pub gesture_active: bool,
    /// Set at launch; survives until the gesture is released
    pub gesture_was_active: bool,
}

impl GestureLatch {
    /// Record that the gesture is present this frame. Returns true exactly
    /// when a new animation cycle should start.
    pub fn observe_detected(&mut self) -> bool {
        let fire = !self.gesture_active && !self.active && !self.gesture_was_active;
        if fire {
            self.active = true;
            self.gesture_was_active = true;
        }
        self.gesture_active = true;
        fire
    }

    /// Record a frame where hands are present but the gesture is not.
    pub fn observe_released(&mut self) {
        self.gesture_active = false;
        if self.gesture_was_active && !self.active {
            self.gesture_was_active = false;
        }
    }

    /// Record a frame with no hands at all. The per-frame flag clears, but a
    /// pending `gesture_was_active` survives until a hand reappears without
    /// the pose.
    pub fn observe_no_hands(&mut self) {
        self.gesture_active = false;
    }

    /// The animation finished this frame.
    pub fn finish(&mut self) {
        self.active = false;
    }

    /// Finish and, if the gesture has already been released mid-flight,
    /// re-arm immediately.
    pub fn finish_and_rearm(&mut self) {
        self.active = false;
        if !self.gesture_active {
            self.gesture_was_active = false;
        }
    }
}
