//! Input sampling
//!
//! The simulation uses held-key semantics: key state is sampled once per
//! tick into a plain `FrameInput` record, which keeps the game loop
//! testable without a window.

use macroquad::prelude::*;

/// Held-key state for one simulation tick
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl FrameInput {
    /// Sample the current keyboard state (call once per tick)
    pub fn sample() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            jump: is_key_down(KeyCode::Space),
        }
    }
}

/// Check whether the user asked to quit (window close is handled by
/// macroquad ending the loop)
pub fn exit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
