//! Two-hand heart pose
//!
//! Both index fingertips and both thumb tips pinched together, with the
//! middle and ring fingertips arched below the index line on each hand.
//! Deliberately fires on every frame the pose holds, so a held heart rains
//! a stream of effects rather than a single one.

use crate::gestures::{geometry, GestureConfig};
use crate::hand::{self, Hand, Keypoint};

/// Returns the spawn anchor when the first two detected hands form a heart.
///
/// Only hands 0 and 1 are considered; detection order stands in for
/// handedness. The anchor is the midpoint of the two index tips on x and of
/// hand 0's index and thumb tips on y, which lands in the heart's bowl.
pub fn detect(hands: &[Hand], config: &GestureConfig) -> Option<Keypoint> {
    if hands.len() < 2 {
        return None;
    }
    let a = &hands[0].keypoints;
    let b = &hands[1].keypoints;

    let index_join = geometry::dist(a[hand::INDEX_TIP], b[hand::INDEX_TIP]);
    let thumb_join = geometry::dist(a[hand::THUMB_TIP], b[hand::THUMB_TIP]);

    // Screen y grows downward: "arched below" is numerically greater.
    let middle_arch =
        a[hand::MIDDLE_TIP].y > a[hand::INDEX_TIP].y && b[hand::MIDDLE_TIP].y > b[hand::INDEX_TIP].y;
    let ring_arch =
        a[hand::RING_TIP].y > a[hand::MIDDLE_TIP].y && b[hand::RING_TIP].y > b[hand::MIDDLE_TIP].y;

    if index_join < config.pinch_join_px
        && thumb_join < config.pinch_join_px
        && middle_arch
        && ring_arch
    {
        Some(Keypoint {
            x: (a[hand::INDEX_TIP].x + b[hand::INDEX_TIP].x) / 2.0,
            y: (a[hand::INDEX_TIP].y + a[hand::THUMB_TIP].y) / 2.0,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::poses;

    #[test]
    fn test_detects_heart_pose() {
        let hands = poses::heart_pair();
        let anchor = detect(&hands, &GestureConfig::default()).expect("heart pose");
        assert!((anchor.x - 320.0).abs() < 1e-3);
        assert!((anchor.y - 220.0).abs() < 1e-3);
    }

    #[test]
    fn test_requires_two_hands() {
        let hands = poses::heart_pair();
        assert!(detect(&hands[..1], &GestureConfig::default()).is_none());
        assert!(detect(&[], &GestureConfig::default()).is_none());
    }

    #[test]
    fn test_rejects_broken_arch() {
        let mut hands = poses::heart_pair();
        // Middle tip above the index tip breaks the arch on hand 0
        hands[0].keypoints[crate::hand::MIDDLE_TIP].y = 150.0;
        assert!(detect(&hands, &GestureConfig::default()).is_none());
    }

    #[test]
    fn test_rejects_separated_tips() {
        let mut hands = poses::heart_pair();
        hands[1].keypoints[crate::hand::INDEX_TIP].x = 360.0;
        assert!(detect(&hands, &GestureConfig::default()).is_none());
    }
}
