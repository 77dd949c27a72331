//! Space Riders - a side-scrolling gap-threading arcade game
//!
//! Core modules:
//! - `sim`: Gameplay simulation (craft physics, obstacles, collisions, game phases)
//! - `game`: Frame orchestrator that drives one tick per display refresh
//! - `renderer`: Render surface abstraction and scene composition
//! - `platform`: Frame drivers (browser animation frames, headless)
//! - `persistence`: Key-value storage behind the high score ledger
//! - `tuning`: Data-driven game balance

pub mod animation;
pub mod game;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{FrameReport, Game};
pub use highscores::HighScores;
pub use persistence::{KeyValueStore, MemoryStore};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical play field size (pixels)
    pub const FIELD_WIDTH: f32 = 360.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Nominal display refresh used when reasoning about per-tick speeds
    pub const NOMINAL_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Largest elapsed time accepted for one frame (stalled tab, debugger, ...)
    pub const MAX_FRAME_MS: f32 = 250.0;

    /// Background animation
    pub const BG_FRAME_COUNT: usize = 5;
    pub const BG_FRAME_MS: f32 = 70.0;

    /// Boost (thruster) animation
    pub const BOOST_FRAME_COUNT: usize = 4;
    pub const BOOST_FRAME_MS: f32 = 50.0;

    /// Craft sprite tilt per unit of vertical velocity (radians)
    pub const CRAFT_TILT_PER_VELOCITY: f32 = 0.035;
}
