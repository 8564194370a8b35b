//! Level data
//!
//! Platform and enemy layouts are RON documents embedded in the binary
//! with `include_str!`, parsed with serde and validated before the world
//! is built. A parse or validation failure can only mean the embedded
//! asset is broken, so it surfaces once at startup.

use serde::{Deserialize, Serialize};

use crate::geom::Rect;
use crate::SCREEN_WIDTH;

/// Validation limits for level data
pub mod limits {
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// What a platform does when the player interacts with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Plain solid ground
    Solid,
    /// Grants its effect once when struck from below, then becomes spent
    Bonus,
    /// A bonus block that has already been used; behaves like solid ground
    SpentBonus,
}

/// A static collision rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

/// Where an enemy starts and how far it patrols
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    /// Horizontal patrol distance from the start position, in pixels
    pub range: f32,
}

/// A complete level layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Width of the world in pixels; at least one screen wide
    pub world_width: f32,
    /// Player start position (top-left of the body rect)
    pub spawn: (f32, f32),
    pub platforms: Vec<Platform>,
    pub enemies: Vec<EnemySpawn>,
}

const MEADOW_RON: &str = include_str!("../../assets/levels/meadow.ron");
const LONG_MEADOW_RON: &str = include_str!("../../assets/levels/long_meadow.ron");

/// The single-screen level for the `platformer` demo
pub fn meadow() -> Result<Level, LevelError> {
    load_level_from_str(MEADOW_RON)
}

/// The 1800 px wide scrolling level for the `super-platformer` demo
pub fn long_meadow() -> Result<Level, LevelError> {
    load_level_from_str(LONG_MEADOW_RON)
}

/// Load a level from a RON string (embedded levels and tests)
pub fn load_level_from_str(s: &str) -> Result<Level, LevelError> {
    let level: Level = ron::from_str(s)?;
    validate_level(&level)?;
    Ok(level)
}

/// Check if a float is valid (not NaN or Inf, within coordinate limits)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_level(level: &Level) -> Result<(), LevelError> {
    let err = |msg: String| Err(LevelError::ValidationError(msg));

    if !is_valid_float(level.world_width) || level.world_width < SCREEN_WIDTH {
        return err(format!(
            "world_width {} must be finite and at least one screen ({})",
            level.world_width, SCREEN_WIDTH
        ));
    }
    if !is_valid_float(level.spawn.0) || !is_valid_float(level.spawn.1) {
        return err(format!("spawn {:?} out of range", level.spawn));
    }
    for (i, p) in level.platforms.iter().enumerate() {
        let r = &p.rect;
        if ![r.x, r.y, r.w, r.h].iter().all(|v| is_valid_float(*v)) {
            return err(format!("platform {}: coordinate out of range", i));
        }
        if r.w <= 0.0 || r.h <= 0.0 {
            return err(format!("platform {}: size must be positive", i));
        }
    }
    for (i, e) in level.enemies.iter().enumerate() {
        if !is_valid_float(e.x) || !is_valid_float(e.y) || !is_valid_float(e.range) {
            return err(format!("enemy {}: coordinate out of range", i));
        }
        if e.range < 0.0 {
            return err(format!("enemy {}: patrol range must not be negative", i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_levels_are_valid() {
        let meadow = meadow().expect("meadow level should parse");
        assert_eq!(meadow.world_width, SCREEN_WIDTH);
        assert!(!meadow.platforms.is_empty());
        assert_eq!(meadow.enemies.len(), 1);

        let long = long_meadow().expect("long meadow level should parse");
        assert_eq!(long.world_width, 1800.0);
        assert_eq!(long.enemies.len(), 2);
        assert!(long
            .platforms
            .iter()
            .any(|p| p.kind == PlatformKind::Bonus));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = load_level_from_str("Level(name: \"broken\"");
        assert!(matches!(result, Err(LevelError::ParseError(_))));
    }

    #[test]
    fn test_validation_rejects_bad_sizes() {
        let ron = r#"Level(
            name: "bad",
            world_width: 600.0,
            spawn: (50.0, 300.0),
            platforms: [
                Platform(rect: Rect(x: 0.0, y: 360.0, w: 0.0, h: 40.0), kind: Solid),
            ],
            enemies: [],
        )"#;
        let result = load_level_from_str(ron);
        assert!(matches!(result, Err(LevelError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_narrow_world() {
        let ron = r#"Level(
            name: "bad",
            world_width: 300.0,
            spawn: (50.0, 300.0),
            platforms: [],
            enemies: [],
        )"#;
        let result = load_level_from_str(ron);
        assert!(matches!(result, Err(LevelError::ValidationError(_))));
    }
}
