//! Flat left hand - fingers level, palm vertical
//!
//! The car trigger. Hands are filtered to the left hand first (thumb on the
//! outside of the wrist in the current camera view), then eight finger
//! segments must all be near-horizontal and the four knuckles vertically
//! stacked.

use crate::gestures::{geometry, GestureConfig};
use crate::hand::{self, Hand, Keypoint};

/// Segments whose |slope| must stay under the flat ceiling: each finger
/// knuckle to tip, plus the index and middle fingers split at the PIP joint.
const LEVEL_SEGMENTS: [(usize, usize); 8] = [
    (hand::INDEX_MCP, hand::INDEX_TIP),
    (hand::MIDDLE_MCP, hand::MIDDLE_TIP),
    (hand::RING_MCP, hand::RING_TIP),
    (hand::PINKY_MCP, hand::PINKY_TIP),
    (hand::INDEX_MCP, hand::INDEX_PIP),
    (hand::INDEX_PIP, hand::INDEX_TIP),
    (hand::MIDDLE_MCP, hand::MIDDLE_PIP),
    (hand::MIDDLE_PIP, hand::MIDDLE_TIP),
];

/// True when the thumb sits on the left hand's side of the wrist for the
/// configured camera view.
pub fn is_left_hand(hand: &Hand, config: &GestureConfig) -> bool {
    let k = &hand.keypoints;
    if config.mirrored {
        k[hand::THUMB_TIP].x > k[hand::WRIST].x
    } else {
        k[hand::THUMB_TIP].x < k[hand::WRIST].x
    }
}

/// Returns the middle fingertip (the car spawn point) of the first hand
/// held flat, or None when no left hand qualifies this frame.
pub fn detect(hands: &[Hand], config: &GestureConfig) -> Option<Keypoint> {
    hands
        .iter()
        .find(|h| is_left_hand(h, config) && is_flat(h, config))
        .map(|h| h.keypoints[hand::MIDDLE_TIP])
}

fn is_flat(hand: &Hand, config: &GestureConfig) -> bool {
    let k = &hand.keypoints;

    let fingers_level = LEVEL_SEGMENTS
        .iter()
        .all(|&(from, to)| geometry::abs_slope(k[from], k[to]) <= config.flat_slope_max);

    // A vertical palm stacks the knuckles on (almost) one x coordinate.
    let knuckle_spread = (k[hand::INDEX_MCP].x - k[hand::MIDDLE_MCP].x)
        .abs()
        .max((k[hand::MIDDLE_MCP].x - k[hand::RING_MCP].x).abs())
        .max((k[hand::RING_MCP].x - k[hand::PINKY_MCP].x).abs());

    fingers_level && knuckle_spread < config.knuckle_align_px
}
