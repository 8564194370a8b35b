//! Player record and movement
//!
//! The player is a rectangle with a velocity, an on-ground flag and two
//! independent status fields: the grow power-up (changes the body size)
//! and an invincibility tick countdown granted after losing it. All
//! physics is per-tick Euler integration with instantaneous horizontal
//! velocity (no acceleration or friction model).

use crate::geom::Rect;
use crate::input::FrameInput;

use super::level::Platform;

/// Horizontal speed in pixels per tick
pub const PLAYER_SPEED: f32 = 5.0;
/// Gravity added to vertical velocity each airborne tick
pub const GRAVITY: f32 = 0.5;
/// Vertical velocity set on jump (negative is up)
pub const JUMP_VELOCITY: f32 = -12.0;
/// Falling speed ceiling
pub const TERMINAL_VELOCITY: f32 = 10.0;
/// Upward velocity imparted by stomping an enemy
pub const STOMP_BOUNCE: f32 = JUMP_VELOCITY / 2.0;
/// Invincibility window after shrinking, in ticks (two seconds)
pub const INVINCIBLE_TICKS: u32 = 120;

/// Normal body size
pub const SMALL_SIZE: (f32, f32) = (20.0, 30.0);
/// Body size while the grow power-up is active
pub const SUPER_SIZE: (f32, f32) = (20.0, 40.0);

/// The player-controlled body
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    /// Grow power-up active (taller body)
    pub super_size: bool,
    /// Invincibility ticks remaining; 0 means vulnerable
    pub invincible_ticks: u32,
}

impl Player {
    pub fn new(spawn: (f32, f32)) -> Self {
        Self {
            rect: Rect::new(spawn.0, spawn.1, SMALL_SIZE.0, SMALL_SIZE.1),
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            super_size: false,
            invincible_ticks: 0,
        }
    }

    pub fn invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Steps 1-2 of the tick: horizontal intent and jump intent.
    /// Right wins if both directions are held.
    pub fn apply_intent(&mut self, input: &FrameInput) {
        self.vx = 0.0;
        if input.left {
            self.vx = -PLAYER_SPEED;
        }
        if input.right {
            self.vx = PLAYER_SPEED;
        }
        if input.jump && self.on_ground {
            self.vy = JUMP_VELOCITY;
            self.on_ground = false;
        }
    }

    /// Step 3: gravity, clamped to terminal velocity
    pub fn apply_gravity(&mut self) {
        if !self.on_ground {
            self.vy = (self.vy + GRAVITY).min(TERMINAL_VELOCITY);
        }
    }

    /// Step 4 resolution: push out of every overlapping platform along
    /// x only, by the sign of horizontal velocity. Velocity is kept.
    pub fn resolve_horizontal(&mut self, platforms: &[Platform]) {
        for platform in platforms {
            if !self.rect.overlaps(&platform.rect) {
                continue;
            }
            if self.vx > 0.0 {
                self.rect.set_right(platform.rect.x);
            } else if self.vx < 0.0 {
                self.rect.set_left(platform.rect.right());
            }
        }
    }

    /// Become super: taller body, bottom edge and horizontal center kept
    pub fn grow(&mut self) {
        if self.super_size {
            return;
        }
        self.super_size = true;
        self.resize(SUPER_SIZE);
    }

    /// Lose the power-up and start the invincibility window
    pub fn shrink(&mut self) {
        self.super_size = false;
        self.invincible_ticks = INVINCIBLE_TICKS;
        self.resize(SMALL_SIZE);
    }

    /// Step 7: count the invincibility window down toward zero
    pub fn tick_invincibility(&mut self) {
        self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
    }

    /// Full reset after falling off the world or a fatal hit
    pub fn respawn(&mut self, spawn: (f32, f32)) {
        self.rect = Rect::new(spawn.0, spawn.1, SMALL_SIZE.0, SMALL_SIZE.1);
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
        self.super_size = false;
        self.invincible_ticks = 0;
    }

    fn resize(&mut self, (w, h): (f32, f32)) {
        let bottom = self.rect.bottom();
        let center_x = self.rect.center_x();
        self.rect.w = w;
        self.rect.h = h;
        self.rect.set_bottom(bottom);
        self.rect.x = center_x - w * 0.5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_sets_velocity_directly() {
        let mut p = Player::new((50.0, 300.0));

        p.apply_intent(&FrameInput { left: true, right: false, jump: false });
        assert!((p.vx + PLAYER_SPEED).abs() < 0.001);

        p.apply_intent(&FrameInput { left: false, right: true, jump: false });
        assert!((p.vx - PLAYER_SPEED).abs() < 0.001);

        // Right wins when both are held
        p.apply_intent(&FrameInput { left: true, right: true, jump: false });
        assert!((p.vx - PLAYER_SPEED).abs() < 0.001);

        p.apply_intent(&FrameInput::default());
        assert!(p.vx.abs() < 0.001);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut p = Player::new((50.0, 300.0));
        let jump = FrameInput { left: false, right: false, jump: true };

        p.apply_intent(&jump);
        assert!(p.vy.abs() < 0.001, "airborne jump must be ignored");

        p.on_ground = true;
        p.apply_intent(&jump);
        assert!((p.vy - JUMP_VELOCITY).abs() < 0.001);
        assert!(!p.on_ground);
    }

    #[test]
    fn test_gravity_clamps_at_terminal_velocity() {
        let mut p = Player::new((50.0, 300.0));
        for _ in 0..100 {
            p.apply_gravity();
        }
        assert!((p.vy - TERMINAL_VELOCITY).abs() < 0.001);

        // Grounded bodies do not accumulate gravity
        p.vy = 0.0;
        p.on_ground = true;
        p.apply_gravity();
        assert!(p.vy.abs() < 0.001);
    }

    #[test]
    fn test_grow_keeps_bottom_and_center() {
        let mut p = Player::new((100.0, 300.0));
        let bottom = p.rect.bottom();
        let center = p.rect.center_x();

        p.grow();
        assert!(p.super_size);
        assert!((p.rect.h - SUPER_SIZE.1).abs() < 0.001);
        assert!((p.rect.bottom() - bottom).abs() < 0.001);
        assert!((p.rect.center_x() - center).abs() < 0.001);

        // Growing again changes nothing
        let rect = p.rect;
        p.grow();
        assert_eq!(p.rect, rect);
    }

    #[test]
    fn test_shrink_grants_invincibility() {
        let mut p = Player::new((100.0, 300.0));
        p.grow();
        let bottom = p.rect.bottom();

        p.shrink();
        assert!(!p.super_size);
        assert!((p.rect.h - SMALL_SIZE.1).abs() < 0.001);
        assert!((p.rect.bottom() - bottom).abs() < 0.001);
        assert_eq!(p.invincible_ticks, INVINCIBLE_TICKS);

        for _ in 0..INVINCIBLE_TICKS {
            p.tick_invincibility();
        }
        assert!(!p.invincible());
        p.tick_invincibility();
        assert_eq!(p.invincible_ticks, 0);
    }

    #[test]
    fn test_respawn_clears_all_state() {
        let mut p = Player::new((50.0, 300.0));
        p.grow();
        p.vx = 5.0;
        p.vy = -3.0;
        p.on_ground = true;
        p.invincible_ticks = 40;

        p.respawn((50.0, 300.0));
        assert!((p.rect.x - 50.0).abs() < 0.001);
        assert!((p.rect.y - 300.0).abs() < 0.001);
        assert!(p.vx.abs() < 0.001 && p.vy.abs() < 0.001);
        assert!(!p.on_ground && !p.super_size && !p.invincible());
        assert!((p.rect.h - SMALL_SIZE.1).abs() < 0.001);
    }
}
