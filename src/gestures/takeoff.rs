//! Takeoff pose - all five fingers sloping up and away
//!
//! The plane trigger. Only the first detected hand is considered. Nine
//! signed slopes (wrist to each fingertip, plus knuckle to tip for the four
//! long fingers) must all sit strictly inside the launch band.

use crate::gestures::{geometry, GestureConfig};
use crate::hand::{self, Hand, Keypoint};

/// Returns the wrist position - the plane's flight target - when the first
/// hand holds the takeoff pose.
pub fn detect(hands: &[Hand], config: &GestureConfig) -> Option<Keypoint> {
    let k = &hands.first()?.keypoints;

    let slopes = [
        geometry::signed_slope(k[hand::WRIST], k[hand::THUMB_TIP]),
        geometry::signed_slope(k[hand::WRIST], k[hand::INDEX_TIP]),
        geometry::signed_slope(k[hand::WRIST], k[hand::MIDDLE_TIP]),
        geometry::signed_slope(k[hand::WRIST], k[hand::RING_TIP]),
        geometry::signed_slope(k[hand::WRIST], k[hand::PINKY_TIP]),
        geometry::signed_slope(k[hand::INDEX_MCP], k[hand::INDEX_TIP]),
        geometry::signed_slope(k[hand::MIDDLE_MCP], k[hand::MIDDLE_TIP]),
        geometry::signed_slope(k[hand::RING_MCP], k[hand::RING_TIP]),
        geometry::signed_slope(k[hand::PINKY_MCP], k[hand::PINKY_TIP]),
    ];

    slopes
        .iter()
        .all(|&s| s > config.launch_slope_min && s < config.launch_slope_max)
        .then_some(k[hand::WRIST])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::poses;
    use crate::hand::{THUMB_TIP, WRIST};

    #[test]
    fn test_detects_takeoff_pose() {
        let target = detect(&[poses::takeoff()], &GestureConfig::default()).expect("takeoff pose");
        assert!((target.x - 100.0).abs() < 1e-3);
        assert!((target.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_band_is_exclusive() {
        let mut hand = poses::takeoff();
        // Wrist-to-thumb slope exactly at the lower bound
        hand.keypoints[THUMB_TIP].y = 130.0;
        assert!(detect(&[hand.clone()], &GestureConfig::default()).is_none());

        // And exactly at the upper bound
        hand.keypoints[THUMB_TIP].y = 200.0;
        assert!(detect(&[hand], &GestureConfig::default()).is_none());
    }

    #[test]
    fn test_vertical_segment_counts_as_zero() {
        let mut hand = poses::takeoff();
        hand.keypoints[THUMB_TIP].x = hand.keypoints[WRIST].x;
        assert!(detect(&[hand], &GestureConfig::default()).is_none());
    }

    #[test]
    fn test_only_first_hand_is_considered() {
        let hands = vec![poses::neutral(), poses::takeoff()];
        assert!(detect(&hands, &GestureConfig::default()).is_none());
        assert!(detect(&[], &GestureConfig::default()).is_none());
    }
}
