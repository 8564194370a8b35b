//! Trophy animation and feather drawing
//!
//! The feather "rotates in 3D" by scaling its x coordinates around the
//! sprite center with cos(angle); a negative factor mirrors the sprite,
//! which reads as the back face. A sine-driven bob makes it float.

use std::f32::consts::TAU;

use macroquad::prelude::*;

/// Base sprite width before rotation scaling
pub const FEATHER_WIDTH: f32 = 100.0;
/// Base sprite height (unaffected by rotation)
pub const FEATHER_HEIGHT: f32 = 200.0;

const FLOAT_SPEED: f32 = 0.05;
const FLOAT_AMPLITUDE: f32 = 10.0;
const ROTATE_SPEED: f32 = 0.05;

const FEATHER_RED: Color = Color::new(0.863, 0.0, 0.0, 1.0);
const TIP_YELLOW: Color = Color::new(1.0, 0.863, 0.0, 1.0);
const QUILL_GRAY: Color = Color::new(0.706, 0.706, 0.706, 1.0);

/// Animation state for the trophy display
#[derive(Debug, Clone, Copy, Default)]
pub struct TrophyAnimation {
    float_phase: f32,
    rotate_angle: f32,
}

impl TrophyAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// One 60 Hz tick: advance the bob, turn while a key is held
    pub fn tick(&mut self, rotate_left: bool, rotate_right: bool) {
        if rotate_left {
            self.rotate_angle -= ROTATE_SPEED;
        }
        if rotate_right {
            self.rotate_angle += ROTATE_SPEED;
        }
        self.float_phase = (self.float_phase + FLOAT_SPEED) % TAU;
    }

    /// Vertical bob offset in pixels
    pub fn bob_offset(&self) -> f32 {
        self.float_phase.sin() * FLOAT_AMPLITUDE
    }

    /// Horizontal scale factor; negative means the back face shows
    pub fn x_scale(&self) -> f32 {
        self.rotate_angle.cos()
    }
}

/// Draw the feather centered at (`center_x`, `center_y`) with the given
/// horizontal scale. Skipped entirely when the sprite would collapse
/// below one pixel of width (edge-on).
pub fn draw_feather(center_x: f32, center_y: f32, x_scale: f32) {
    if FEATHER_WIDTH * x_scale.abs() < 1.0 {
        return;
    }
    let p = |x: f32, y: f32| vec2(center_x + x * x_scale, center_y + y);

    // Feather body
    fill_convex(
        &[
            p(-5.0, -70.0),
            p(40.0, -10.0),
            p(30.0, 60.0),
            p(-10.0, 90.0),
            p(-30.0, 60.0),
            p(-40.0, -10.0),
        ],
        WHITE,
    );

    // Quill line
    let a = p(-8.0, -65.0);
    let b = p(-2.0, 88.0);
    draw_line(a.x, a.y, b.x, b.y, 3.0, QUILL_GRAY);

    // Red sash
    fill_convex(
        &[p(-30.0, 55.0), p(30.0, 55.0), p(25.0, 80.0), p(-25.0, 80.0)],
        FEATHER_RED,
    );

    // Quill tip
    fill_convex(&[p(-10.0, 88.0), p(10.0, 88.0), p(0.0, 105.0)], TIP_YELLOW);
}

/// Fill a convex polygon as a triangle fan
fn fill_convex(points: &[Vec2], color: Color) {
    for i in 1..points.len() - 1 {
        draw_triangle(points[0], points[i], points[i + 1], color);
    }
}
