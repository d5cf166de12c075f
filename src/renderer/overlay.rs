//! Overlay rendering - video backdrop, skeleton, keypoints, and emoji
//!
//! Draw-only: the session is advanced once at the top of the frame, then
//! everything on screen is read back out of it.

use super::state::{Stage, STAGE};
use crate::animation::{Car, Firework, Heart, Plane};
use crate::bridge::{self, CameraError};
use crate::hand::{Hand, HAND_CONNECTIONS};
use crate::session::{Session, STAGE_HEIGHT, STAGE_WIDTH};

/// Styles for the different overlay elements
mod style {
    /// Skeleton connection lines
    pub const CONNECTION: &str = "rgb(255, 0, 0)";
    pub const CONNECTION_WIDTH: f64 = 2.0;
    /// Keypoint dots
    pub const KEYPOINT: &str = "rgb(0, 255, 0)";
    pub const KEYPOINT_RADIUS: f64 = 5.0;
    /// Plane and car emoji size (px)
    pub const EMOJI_FONT_PX: f64 = 48.0;
    /// Touchdown puff under a landed plane
    pub const TOUCHDOWN: &str = "rgba(100, 255, 100, 0.6)";
    pub const TOUCHDOWN_RADIUS: f64 = 15.0;
    /// Camera failure message box
    pub const ERROR_BOX: &str = "rgba(255, 0, 0, 0.7)";
    pub const ERROR_TEXT: &str = "rgb(255, 255, 255)";
}

/// Render one frame: advance the session, then draw the whole scene.
pub fn render_frame() {
    STAGE.with(|stage_cell| {
        let stage_ref = stage_cell.borrow();
        let stage = match stage_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let now_ms = match web_sys::window().and_then(|w| w.performance()) {
            Some(performance) => performance.now(),
            None => return,
        };

        let hands = bridge::hands_snapshot();
        bridge::with_scene(|session| {
            session.advance_frame(&hands, now_ms);
            draw_scene(stage, session, &hands);
        });

        if let Some(error) = bridge::camera_error() {
            draw_camera_error(stage, &error);
        }
    });
}

fn draw_scene(stage: &Stage, session: &Session, hands: &[Hand]) {
    draw_backdrop(stage);
    for hand in hands {
        draw_connections(stage, hand);
    }
    for hand in hands {
        draw_keypoints(stage, hand);
    }
    draw_hearts(stage, &session.hearts);
    draw_fireworks(stage, &session.fireworks);
    draw_plane(stage, &session.plane);
    draw_car(stage, &session.car);
}

/// Live camera frame when wired, black otherwise.
fn draw_backdrop(stage: &Stage) {
    let ctx = &stage.context;
    match &stage.video {
        Some(video) => {
            let _ = ctx.draw_image_with_html_video_element_and_dw_and_dh(
                video,
                0.0,
                0.0,
                STAGE_WIDTH as f64,
                STAGE_HEIGHT as f64,
            );
        }
        None => {
            ctx.set_fill_style_str("rgb(0, 0, 0)");
            ctx.fill_rect(0.0, 0.0, STAGE_WIDTH as f64, STAGE_HEIGHT as f64);
        }
    }
}

fn draw_connections(stage: &Stage, hand: &Hand) {
    let ctx = &stage.context;
    ctx.set_stroke_style_str(style::CONNECTION);
    ctx.set_line_width(style::CONNECTION_WIDTH);

    for &(from, to) in HAND_CONNECTIONS.iter() {
        let a = hand.keypoints[from];
        let b = hand.keypoints[to];
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }
}

fn draw_keypoints(stage: &Stage, hand: &Hand) {
    let ctx = &stage.context;
    ctx.set_fill_style_str(style::KEYPOINT);

    for keypoint in hand.keypoints.iter() {
        ctx.begin_path();
        let _ = ctx.arc(
            keypoint.x as f64,
            keypoint.y as f64,
            style::KEYPOINT_RADIUS,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}

fn draw_hearts(stage: &Stage, hearts: &[Heart]) {
    let ctx = &stage.context;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for heart in hearts {
        ctx.set_font(&format!("{:.0}px serif", heart.size));
        let _ = ctx.fill_text("❤️", heart.x as f64, heart.y as f64);
    }
}

fn draw_fireworks(stage: &Stage, fireworks: &[Firework]) {
    let ctx = &stage.context;

    for firework in fireworks {
        let [r, g, b] = firework.color;
        ctx.set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
        ctx.begin_path();
        let _ = ctx.arc(
            firework.x as f64,
            firework.y as f64,
            firework.size as f64 / 2.0,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}

fn draw_plane(stage: &Stage, plane: &Plane) {
    if !plane.latch.active && !plane.touched_down {
        return;
    }
    let ctx = &stage.context;
    ctx.set_font(&format!("{:.0}px serif", style::EMOJI_FONT_PX));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text("✈️", plane.x as f64, plane.y as f64);

    if plane.touched_down {
        ctx.set_fill_style_str(style::TOUCHDOWN);
        ctx.begin_path();
        let _ = ctx.arc(
            plane.x as f64,
            plane.y as f64,
            style::TOUCHDOWN_RADIUS,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}

fn draw_car(stage: &Stage, car: &Car) {
    if !car.latch.active {
        return;
    }
    let ctx = &stage.context;
    ctx.set_font(&format!("{:.0}px serif", style::EMOJI_FONT_PX));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text("🚗", car.x as f64, car.y as f64);
}

/// Centered message box matching the host page's error styling.
fn draw_camera_error(stage: &Stage, error: &CameraError) {
    let ctx = &stage.context;
    let center_x = STAGE_WIDTH as f64 / 2.0;
    let center_y = STAGE_HEIGHT as f64 / 2.0;

    ctx.set_fill_style_str(style::ERROR_BOX);
    ctx.fill_rect(center_x - 220.0, center_y - 55.0, 440.0, 110.0);

    ctx.set_fill_style_str(style::ERROR_TEXT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font("bold 20px Arial");
    let _ = ctx.fill_text(&error.title, center_x, center_y - 20.0);
    ctx.set_font("14px Arial");
    let _ = ctx.fill_text(&error.detail, center_x, center_y + 15.0);
}
