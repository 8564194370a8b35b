//! Patrolling enemies
//!
//! An enemy walks back and forth over a fixed horizontal range. Stomped
//! enemies are logically deleted (the `alive` flag) rather than removed
//! from the vector; the entity count is fixed at level start.

use crate::geom::Rect;

use super::level::EnemySpawn;

/// Patrol speed in pixels per tick
pub const ENEMY_SPEED: f32 = 2.0;
/// Enemy body size
pub const ENEMY_SIZE: (f32, f32) = (20.0, 20.0);

#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub rect: Rect,
    /// Left end of the patrol
    pub start_x: f32,
    /// Patrol distance to the right of `start_x`
    pub range: f32,
    /// Direction sign, +1.0 or -1.0
    pub dir: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(spawn: &EnemySpawn) -> Self {
        Self {
            rect: Rect::new(spawn.x, spawn.y, ENEMY_SIZE.0, ENEMY_SIZE.1),
            start_x: spawn.x,
            range: spawn.range,
            dir: 1.0,
            alive: true,
        }
    }

    /// One patrol tick: move, reverse at either bound
    pub fn step(&mut self) {
        self.rect.x += self.dir * ENEMY_SPEED;
        if self.rect.x > self.start_x + self.range || self.rect.x < self.start_x {
            self.dir = -self.dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patrol_reverses_at_both_bounds() {
        let mut e = Enemy::new(&EnemySpawn { x: 100.0, y: 280.0, range: 10.0 });

        // Walk right until past the far bound
        for _ in 0..6 {
            e.step();
        }
        assert!(e.dir < 0.0, "should have turned around at start + range");

        // Walk left until past the start
        for _ in 0..8 {
            e.step();
        }
        assert!(e.dir > 0.0, "should have turned around at start");
    }

    #[test]
    fn test_patrol_stays_near_bounds() {
        let mut e = Enemy::new(&EnemySpawn { x: 200.0, y: 280.0, range: 80.0 });
        for _ in 0..1000 {
            e.step();
            // One overshoot step past either bound is allowed before reversal
            assert!(e.rect.x >= e.start_x - ENEMY_SPEED);
            assert!(e.rect.x <= e.start_x + e.range + ENEMY_SPEED);
        }
    }
}
