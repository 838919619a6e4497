//! Lunar Lander - A fixed-timestep arcade landing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, clock, session rules)
//! - `input`: Per-frame directional input and thrust priority
//! - `renderer`: Render-facing frame data and the `Renderer` seam
//! - `settings`: Data-driven gameplay tuning
//! - `game`: Frame driver tying input, clock, simulation and rendering together

pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::{Game, TimeSource, WallClock};
pub use settings::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

    /// Number of collidable entities in the standard level
    pub const FINISH_NUM: usize = 1;
    pub const FIRE_NUM: usize = 23;
    pub const BRICK_NUM: usize = 1;
    pub const PLATFORM_NUM: usize = FINISH_NUM + FIRE_NUM + BRICK_NUM;

    /// Status text shown when the session ends
    pub const WIN_MESSAGE: &str = "MISSION ACCOMPLISHED!!!";
    pub const LOSE_MESSAGE: &str = "MISSION FAILED!!!";
    pub const OUT_OF_FUEL_MESSAGE: &str = "Out of Fuel";

    /// Bitmap font layout
    pub const FONT_SIZE: f32 = 0.25;
    pub const FONT_SPACING: f32 = 0.025;
}

/// Clamp a thrust intent to magnitude <= 1, keeping its direction
#[inline]
pub fn normalize_intent(intent: Vec3) -> Vec3 {
    if intent.length() > 1.0 {
        intent.normalize()
    } else {
        intent
    }
}
