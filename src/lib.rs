//! POCKET ARCADE: three tiny fixed-timestep demos in one crate
//!
//! - `trophy-viewer`: a decorative feather trophy with a floating bob and a
//!   keyboard-driven pseudo-3D rotation effect
//! - `platformer`: a single-screen platformer (stomp the enemy or respawn)
//! - `super-platformer`: a side-scrolling variant with a clamped camera,
//!   a one-shot bonus block and a grow/shrink power-up model
//!
//! All simulation runs at a fixed 60 Hz tick; rendering is plain
//! flat-colored macroquad immediate drawing into a 600x400 window.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window width in pixels (all three demos)
pub const SCREEN_WIDTH: f32 = 600.0;
/// Window height in pixels
pub const SCREEN_HEIGHT: f32 = 400.0;

/// Simulation rate in ticks per second
pub const TICK_RATE: f32 = 60.0;
/// Seconds per simulation tick
pub const TICK_DT: f32 = 1.0 / TICK_RATE;

pub mod game;
pub mod geom;
pub mod input;
pub mod render;
pub mod text;
pub mod trophy;

pub use game::world::{GameEvent, Ruleset, World};
pub use geom::Rect;
pub use input::FrameInput;
