//! Canvas Invaders - a Space Invaders style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, grids, collisions, tick)
//! - `renderer`: Canvas 2D drawing through the `Surface` trait
//! - `platform`: Browser/native platform abstraction (frame clock, key mapping)
//! - `settings`: Variant presets and tuning, persisted in LocalStorage

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, Tuning, Variant};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Invader sprite size, shared by every invader
    pub const INVADER_WIDTH: f32 = 31.0;
    pub const INVADER_HEIGHT: f32 = 39.0;

    /// Ship sprite native size (scaled by `PlayerTuning::scale`)
    pub const SHIP_SPRITE_WIDTH: f32 = 450.0;
    pub const SHIP_SPRITE_HEIGHT: f32 = 225.0;

    /// Sprite asset paths
    pub const SHIP_SPRITE_PATH: &str = "/assets/icons/spaceship.png";
    pub const INVADER_SPRITE_PATH: &str = "/assets/icons/invader.png";
}
