//! Platformer simulation
//!
//! Plain data records (Player, Enemy, Platform) owned by a `World` that
//! advances them one fixed tick at a time. No entity hierarchy and no
//! spatial index: the entity count is a handful, so every collision pass
//! is a direct nested scan.

pub mod camera;
pub mod enemy;
pub mod level;
pub mod player;
pub mod world;

pub use camera::Camera;
pub use enemy::Enemy;
pub use level::{Level, LevelError, Platform, PlatformKind};
pub use player::Player;
pub use world::{GameEvent, Ruleset, World};
