//! Platformer scene drawing
//!
//! Both platformer binaries share this: flat-colored rectangles offset
//! by the camera. Simulation state never lives here.

use macroquad::prelude::*;

use crate::game::level::PlatformKind;
use crate::game::world::World;

pub const SKY_BLUE: Color = Color::new(0.529, 0.808, 0.922, 1.0);
pub const PLAYER_RED: Color = Color::new(0.824, 0.157, 0.157, 1.0);
pub const PLAYER_ORANGE: Color = Color::new(1.0, 0.549, 0.0, 1.0);
pub const GROUND_GREEN: Color = Color::new(0.0, 0.588, 0.0, 1.0);
pub const ENEMY_BROWN: Color = Color::new(0.545, 0.271, 0.075, 1.0);
pub const BLOCK_YELLOW: Color = Color::new(1.0, 0.863, 0.0, 1.0);
pub const BLOCK_GRAY: Color = Color::new(0.588, 0.588, 0.588, 1.0);

fn platform_color(kind: PlatformKind) -> Color {
    match kind {
        PlatformKind::Solid => GROUND_GREEN,
        PlatformKind::Bonus => BLOCK_YELLOW,
        PlatformKind::SpentBonus => BLOCK_GRAY,
    }
}

/// Draw the whole world for the current frame
pub fn draw_world(world: &World) {
    clear_background(SKY_BLUE);
    let cam = world.camera.offset;

    for platform in &world.platforms {
        let r = platform.rect;
        draw_rectangle(r.x - cam, r.y, r.w, r.h, platform_color(platform.kind));
    }

    for enemy in world.enemies.iter().filter(|e| e.alive) {
        let r = enemy.rect;
        draw_rectangle(r.x - cam, r.y, r.w, r.h, ENEMY_BROWN);
    }

    // The invincibility blink hides the player every other window
    if !world.flash_hidden() {
        let r = world.player.rect;
        let color = if world.player.super_size {
            PLAYER_ORANGE
        } else {
            PLAYER_RED
        };
        draw_rectangle(r.x - cam, r.y, r.w, r.h, color);
    }
}
