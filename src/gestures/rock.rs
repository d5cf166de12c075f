//! Rock/horns pose - index and pinky extended, middle and ring curled
//!
//! Checked per hand. The thumb-out and palm-facing-out tests compare x
//! coordinates and only hold for one handedness at a time; the mirrored
//! flag picks which.

use crate::gestures::GestureConfig;
use crate::hand::{self, Hand};

/// True when this hand is throwing the horns.
pub fn matches(hand: &Hand, config: &GestureConfig) -> bool {
    let k = &hand.keypoints;

    let index_extended = k[hand::INDEX_TIP].y < k[hand::INDEX_PIP].y;
    let pinky_extended = k[hand::PINKY_TIP].y < k[hand::PINKY_PIP].y;
    let middle_curled = k[hand::MIDDLE_TIP].y > k[hand::MIDDLE_PIP].y;
    let ring_curled = k[hand::RING_TIP].y > k[hand::RING_PIP].y;

    let (thumb_out, palm_facing_out) = if config.mirrored {
        (
            k[hand::THUMB_TIP].x < k[hand::THUMB_IP].x,
            k[hand::WRIST].x < k[hand::MIDDLE_MCP].x,
        )
    } else {
        (
            k[hand::THUMB_TIP].x > k[hand::THUMB_IP].x,
            k[hand::WRIST].x > k[hand::MIDDLE_MCP].x,
        )
    };

    index_extended && pinky_extended && middle_curled && ring_curled && thumb_out && palm_facing_out
}
