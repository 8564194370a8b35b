//! The entity-update loop
//!
//! `World` owns every entity record and advances all of them exactly once
//! per fixed tick. The tick order is normative:
//!
//! 1. horizontal intent     2. jump intent        3. gravity
//! 4. x move + resolve      5. y move + resolve   6. bounds clamp
//! 7. invincibility decay   8. enemy patrol       9. camera
//! 10. enemy contact        11. fall-off-world check
//!
//! Horizontal resolution always runs before vertical resolution; the
//! occasional corner catch of axis-separated resolution is accepted
//! inherited behavior.

use crate::input::FrameInput;
use crate::SCREEN_HEIGHT;

use super::camera::Camera;
use super::enemy::Enemy;
use super::level::{Level, Platform, PlatformKind};
use super::player::{Player, STOMP_BOUNCE};

/// Per-variant tuning that is not part of the level layout
#[derive(Debug, Clone, Copy)]
pub struct Ruleset {
    /// Whether bonus blocks grant the grow power-up and enemy hits use
    /// the shrink/invincibility damage model
    pub power_ups: bool,
    /// Extra pixels below the enemy center that still count as a stomp
    pub stomp_tolerance: f32,
}

impl Ruleset {
    /// Single-screen variant: any non-stomp hit is a respawn
    pub fn classic() -> Self {
        Self { power_ups: false, stomp_tolerance: 0.0 }
    }

    /// Scrolling variant: grow/shrink damage model, forgiving stomps.
    /// The tolerance difference against `classic` is inherited tuning.
    pub fn power_up() -> Self {
        Self { power_ups: true, stomp_tolerance: 10.0 }
    }
}

/// Things that happened during the last tick, cleared on the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    EnemyStomped,
    BonusBlockSpent,
    PowerUpGained,
    PlayerShrunk,
    PlayerRespawned,
}

/// All simulation state for one platformer level
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    pub camera: Camera,
    pub rules: Ruleset,
    pub world_width: f32,
    pub spawn: (f32, f32),
    /// Ticks advanced since creation (drives the invincibility blink)
    pub ticks: u64,
    /// Events recorded by the most recent `step`
    pub events: Vec<GameEvent>,
}

impl World {
    pub fn new(level: Level, rules: Ruleset) -> Self {
        Self {
            player: Player::new(level.spawn),
            enemies: level.enemies.iter().map(Enemy::new).collect(),
            platforms: level.platforms,
            camera: Camera::new(),
            rules,
            world_width: level.world_width,
            spawn: level.spawn,
            ticks: 0,
            events: Vec::new(),
        }
    }

    /// Advance the whole world by one fixed tick
    pub fn step(&mut self, input: &FrameInput) {
        self.events.clear();
        self.ticks += 1;

        // 1-2: intent, 3: gravity
        self.player.apply_intent(input);
        self.player.apply_gravity();

        // 4: horizontal move and resolve (velocity is kept)
        self.player.rect.x += self.player.vx;
        self.player.resolve_horizontal(&self.platforms);

        // 5: vertical move and resolve
        self.player.rect.y += self.player.vy;
        self.player.on_ground = false;
        self.resolve_vertical();

        // 6: world bounds clamp
        if self.player.rect.x < 0.0 {
            self.player.rect.set_left(0.0);
        }
        if self.player.rect.right() > self.world_width {
            self.player.rect.set_right(self.world_width);
        }

        // 7: invincibility decay
        self.player.tick_invincibility();

        // 8: enemy patrol
        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            enemy.step();
        }

        // 9: camera
        self.camera.follow(self.player.rect.x, self.world_width);

        // 10: player-enemy contact
        self.resolve_enemy_contact();

        // 11: fall-off-world check
        if self.player.rect.y > SCREEN_HEIGHT {
            self.respawn();
        }
    }

    /// True while the respawn-protection blink should hide the player
    pub fn flash_hidden(&self) -> bool {
        // 100 ms blink at 60 Hz: hidden every other 6-tick window
        self.player.invincible() && (self.ticks / 6) % 2 == 0
    }

    fn resolve_vertical(&mut self) {
        for platform in self.platforms.iter_mut() {
            if !self.player.rect.overlaps(&platform.rect) {
                continue;
            }
            if self.player.vy > 0.0 {
                // Falling: land on top
                self.player.rect.set_bottom(platform.rect.y);
                self.player.vy = 0.0;
                self.player.on_ground = true;
            } else if self.player.vy < 0.0 {
                // Rising: bonk the underside
                self.player.rect.set_top(platform.rect.bottom());
                self.player.vy = 0.0;
                if platform.kind == PlatformKind::Bonus {
                    platform.kind = PlatformKind::SpentBonus;
                    self.events.push(GameEvent::BonusBlockSpent);
                    if self.rules.power_ups && !self.player.super_size {
                        self.player.grow();
                        self.events.push(GameEvent::PowerUpGained);
                    }
                }
            }
        }
    }

    fn resolve_enemy_contact(&mut self) {
        for i in 0..self.enemies.len() {
            if !self.enemies[i].alive || !self.enemies[i].rect.overlaps(&self.player.rect) {
                continue;
            }
            let stomp_line = self.enemies[i].rect.center_y() + self.rules.stomp_tolerance;
            if self.player.vy > 0.0 && self.player.rect.bottom() < stomp_line {
                self.enemies[i].alive = false;
                self.player.vy = STOMP_BOUNCE;
                self.events.push(GameEvent::EnemyStomped);
            } else if self.player.invincible() {
                // Contact is ignored during the invincibility window
            } else if self.rules.power_ups && self.player.super_size {
                self.player.shrink();
                self.events.push(GameEvent::PlayerShrunk);
            } else {
                self.respawn();
            }
        }
    }

    fn respawn(&mut self) {
        self.player.respawn(self.spawn);
        self.events.push(GameEvent::PlayerRespawned);
    }
}
