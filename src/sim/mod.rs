//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Explicit state in, explicit state and events out
//! - Seeded RNG only
//! - Stable iteration order (spawn order)

pub mod autopilot;
pub mod collision;
pub mod craft;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{Rect, contains, overlaps};
pub use craft::Craft;
pub use obstacles::{ObstacleField, ObstaclePair};
pub use state::{CrashCause, GameEvent, GamePhase, GameSession};
pub use tick::{TickInput, tick};
