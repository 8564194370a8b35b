//! Horizontal scrolling camera
//!
//! The camera tries to keep the player centered and clamps to the world
//! edges. It snaps straight to the target; there is no smoothing. In a
//! world exactly one screen wide the clamp range collapses to [0, 0]
//! and the offset never moves.

use crate::SCREEN_WIDTH;

#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    /// Horizontal pixel offset subtracted from world x when drawing
    pub offset: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    /// Recompute the offset from the player position (once per tick)
    pub fn follow(&mut self, player_x: f32, world_width: f32) {
        let target = player_x - SCREEN_WIDTH / 2.0;
        self.offset = target.clamp(0.0, world_width - SCREEN_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: f32 = 1800.0;

    #[test]
    fn test_clamped_at_left_edge() {
        let mut cam = Camera::new();
        cam.follow(0.0, WORLD);
        assert!(cam.offset.abs() < 0.001);
    }

    #[test]
    fn test_clamped_at_right_edge() {
        let mut cam = Camera::new();
        cam.follow(WORLD, WORLD);
        assert!((cam.offset - (WORLD - SCREEN_WIDTH)).abs() < 0.001);
    }

    #[test]
    fn test_centers_player_mid_world() {
        let mut cam = Camera::new();
        cam.follow(900.0, WORLD);
        assert!((cam.offset - (900.0 - SCREEN_WIDTH / 2.0)).abs() < 0.001);
    }

    #[test]
    fn test_single_screen_world_never_scrolls() {
        let mut cam = Camera::new();
        for x in [0.0, 100.0, 580.0, 600.0] {
            cam.follow(x, SCREEN_WIDTH);
            assert!(cam.offset.abs() < 0.001);
        }
    }
}
