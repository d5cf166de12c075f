//! Per-session gesture state - classification, spawning, and motion
//!
//! The session owns every piece of mutable state the frame loop touches and
//! advances it exactly once per frame: classify the current hands, spawn
//! effects, then move everything in motion. Classifiers stay pure and the
//! renderer only reads, so a session is fully deterministic given its seed,
//! the keypoint frames, and the clock values fed in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::animation::{Car, Firework, Heart, Plane};
use crate::gestures::{self, GestureConfig};
use crate::hand::Hand;

/// Stage size, matching the fixed camera resolution
pub const STAGE_WIDTH: f32 = 640.0;
pub const STAGE_HEIGHT: f32 = 480.0;

pub struct Session {
    pub config: GestureConfig,
    pub hearts: Vec<Heart>,
    pub fireworks: Vec<Firework>,
    pub plane: Plane,
    pub car: Car,
    rng: SmallRng,
}

impl Session {
    pub fn new(config: GestureConfig, seed: u64) -> Self {
        Self {
            config,
            hearts: Vec::new(),
            fireworks: Vec::new(),
            plane: Plane::new(),
            car: Car::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Replace the RNG behind firework placement and colors.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Advance the whole scene by one frame.
    ///
    /// `now_ms` is the host's monotonic millisecond clock; it only feeds
    /// effect aging, so tests can drive it freely.
    pub fn advance_frame(&mut self, hands: &[Hand], now_ms: f64) {
        self.classify_heart(hands, now_ms);
        self.classify_rock(hands, now_ms);
        self.classify_takeoff(hands);
        self.classify_flat_hand(hands);

        self.hearts.retain(|heart| !heart.expired(now_ms));
        for heart in &mut self.hearts {
            heart.advance();
        }
        self.fireworks.retain(|firework| !firework.expired(now_ms));
        for firework in &mut self.fireworks {
            firework.advance();
        }

        self.plane.advance();
        self.car.advance();
    }

    /// One heart per held frame, on purpose: a held pose rains hearts.
    fn classify_heart(&mut self, hands: &[Hand], now_ms: f64) {
        if let Some(anchor) = gestures::heart::detect(hands, &self.config) {
            self.hearts.push(Heart::spawn(anchor, now_ms));
        }
    }

    /// One firework per qualifying hand per frame, at a random stage spot.
    fn classify_rock(&mut self, hands: &[Hand], now_ms: f64) {
        for hand in hands {
            if gestures::rock::matches(hand, &self.config) {
                let x = self.rng.gen_range(0.0..STAGE_WIDTH);
                let y = self.rng.gen_range(0.0..STAGE_HEIGHT);
                let color = [self.rng.gen(), self.rng.gen(), self.rng.gen()];
                self.fireworks.push(Firework::spawn(x, y, color, now_ms));
            }
        }
    }

    fn classify_takeoff(&mut self, hands: &[Hand]) {
        if hands.is_empty() {
            self.plane.latch.observe_no_hands();
            return;
        }
        match gestures::takeoff::detect(hands, &self.config) {
            Some(target) => {
                // The target tracks the wrist even mid-flight
                self.plane.target = target;
                if self.plane.latch.observe_detected() {
                    self.plane.launch();
                }
            }
            None => self.plane.latch.observe_released(),
        }
    }

    fn classify_flat_hand(&mut self, hands: &[Hand]) {
        if hands.is_empty() {
            self.car.latch.observe_no_hands();
            return;
        }
        match gestures::flat_hand::detect(hands, &self.config) {
            Some(spawn) => {
                if self.car.latch.observe_detected() {
                    self.car.launch(spawn);
                }
            }
            None => self.car.latch.observe_released(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::poses;

    const FRAME_MS: f64 = 16.0;

    fn session() -> Session {
        Session::new(GestureConfig::default(), 42)
    }

    #[test]
    fn test_held_heart_pose_spawns_every_frame() {
        let mut session = session();
        let hands = poses::heart_pair();

        for frame in 0..5 {
            session.advance_frame(&hands, frame as f64 * FRAME_MS);
        }
        assert_eq!(session.hearts.len(), 5);
    }

    #[test]
    fn test_hearts_expire_after_their_lifetime() {
        let mut session = session();
        session.advance_frame(&poses::heart_pair(), 0.0);
        assert_eq!(session.hearts.len(), 1);

        session.advance_frame(&[], 1999.0);
        assert_eq!(session.hearts.len(), 1);

        session.advance_frame(&[], 2000.0);
        assert!(session.hearts.is_empty());
    }

    #[test]
    fn test_horns_spawn_fireworks_on_the_stage() {
        let mut session = session();
        for frame in 0..3 {
            session.advance_frame(&[poses::horns()], frame as f64 * FRAME_MS);
        }
        assert_eq!(session.fireworks.len(), 3);
        for firework in &session.fireworks {
            assert!((0.0..STAGE_WIDTH).contains(&firework.x));
            assert!((0.0..STAGE_HEIGHT).contains(&firework.y));
        }

        session.advance_frame(&[], 5000.0);
        assert!(session.fireworks.is_empty());
    }

    #[test]
    fn test_plane_launches_once_while_pose_is_held() {
        let mut session = session();
        let hands = vec![poses::takeoff()];

        session.advance_frame(&hands, 0.0);
        assert!(session.plane.latch.active);
        // First frame of flight from the (50, 50) origin toward the wrist
        assert!((session.plane.x - 52.5).abs() < 1e-3);

        // Holding the pose keeps the same flight going: x only ever closes
        // in on the target, with no resets back to the origin.
        let mut last_x = session.plane.x;
        for frame in 1..10 {
            session.advance_frame(&hands, frame as f64 * FRAME_MS);
            assert!(session.plane.x > last_x);
            last_x = session.plane.x;
        }
    }

    #[test]
    fn test_plane_relaunches_only_after_release() {
        let mut session = session();
        let hands = vec![poses::takeoff()];

        // Hold the pose until the plane lands
        let mut frame = 0;
        loop {
            session.advance_frame(&hands, frame as f64 * FRAME_MS);
            frame += 1;
            assert!(frame < 300, "plane never landed");
            if !session.plane.latch.active {
                break;
            }
        }
        assert!(session.plane.touched_down);
        let landed_x = session.plane.x;

        // Still holding: no relaunch, the plane stays put
        session.advance_frame(&hands, frame as f64 * FRAME_MS);
        assert!(!session.plane.latch.active);
        assert_eq!(session.plane.x, landed_x);

        // One pose-free frame re-arms, the next onset launches again
        session.advance_frame(&[poses::neutral()], 5000.0);
        session.advance_frame(&hands, 5016.0);
        assert!(session.plane.latch.active);
        assert!(session.plane.x < landed_x, "flight restarts from the origin");
    }

    #[test]
    fn test_empty_frames_do_not_rearm_the_plane() {
        let mut session = session();
        let hands = vec![poses::takeoff()];
        session.advance_frame(&hands, 0.0);

        // Hands vanish mid-flight: the per-frame flag drops but the latch
        // stays pending, so reappearing mid-pose does not relaunch.
        session.advance_frame(&[], FRAME_MS);
        assert!(!session.plane.latch.gesture_active);
        assert!(session.plane.latch.gesture_was_active);
    }

    #[test]
    fn test_flat_hand_launches_the_car_edge_triggered() {
        let mut session = session();
        let hands = vec![poses::flat_left()];

        session.advance_frame(&hands, 0.0);
        assert!(session.car.latch.active);
        // Spawned at the middle fingertip, minus the first frame of driving
        assert!((session.car.x - 305.0).abs() < 1e-3);
        assert!((session.car.y - 224.0).abs() < 1e-3);

        // Held pose never respawns the drive
        let mut last_x = session.car.x;
        for frame in 1..10 {
            session.advance_frame(&hands, frame as f64 * FRAME_MS);
            assert!(session.car.x < last_x);
            last_x = session.car.x;
        }
    }

    #[test]
    fn test_right_hand_never_launches_the_car() {
        let mut session = session();
        let mut hand = poses::flat_left();
        hand.keypoints[crate::hand::THUMB_TIP].x = 40.0;

        for frame in 0..5 {
            session.advance_frame(&[hand.clone()], frame as f64 * FRAME_MS);
        }
        assert!(!session.car.latch.active);
        assert!(!session.car.latch.gesture_was_active);
    }

    #[test]
    fn test_reseeded_sessions_agree() {
        let mut a = Session::new(GestureConfig::default(), 7);
        let mut b = Session::new(GestureConfig::default(), 7);
        for frame in 0..4 {
            a.advance_frame(&[poses::horns()], frame as f64 * FRAME_MS);
            b.advance_frame(&[poses::horns()], frame as f64 * FRAME_MS);
        }
        for (fa, fb) in a.fireworks.iter().zip(&b.fireworks) {
            assert_eq!(fa.color, fb.color);
            assert_eq!(fa.x, fb.x);
            assert_eq!(fa.y, fb.y);
        }
    }
}
