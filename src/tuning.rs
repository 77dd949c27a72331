//! Game balance configuration
//!
//! All gameplay constants live in one serializable struct so a build can be
//! retuned without touching the simulation. An override may be stored in
//! LocalStorage under [`Tuning::STORAGE_KEY`]; anything invalid falls back to
//! the defaults.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, NOMINAL_FRAME_MS};
use crate::persistence::KeyValueStore;

/// Minimum free horizontal space between consecutive obstacle pairs
pub const MIN_SPACING_MARGIN: f32 = 40.0;

/// Why a tuning set was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    Parse(String),
    NonPositive { field: &'static str, value: f32 },
    ImpulseNotUpward { value: f32 },
    HitboxCollapsed { entity: &'static str },
    GapTooLarge { gap: f32, margin: f32, field_height: f32 },
    SpacingTooSmall { spacing: f32, required: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid tuning json: {msg}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::ImpulseNotUpward { value } => {
                write!(f, "impulse must be negative (upward), got {value}")
            }
            Self::HitboxCollapsed { entity } => {
                write!(f, "{entity} hitbox padding leaves no collision area")
            }
            Self::GapTooLarge {
                gap,
                margin,
                field_height,
            } => write!(
                f,
                "gap {gap} plus two margins of {margin} exceeds field height {field_height}"
            ),
            Self::SpacingTooSmall { spacing, required } => write!(
                f,
                "obstacle spacing {spacing:.1}px is below the required {required:.1}px"
            ),
        }
    }
}

impl std::error::Error for TuningError {}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Craft ===
    /// Fixed horizontal position of the craft
    pub craft_x: f32,
    /// Vertical position on (re)start
    pub craft_start_y: f32,
    pub craft_width: f32,
    pub craft_height: f32,
    /// Added to velocity every tick
    pub gravity: f32,
    /// Velocity set by one input press (negative = up)
    pub impulse: f32,
    /// Inset per side of the craft collision box
    pub craft_hitbox_padding: Vec2,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Vertical opening between top and bottom segments
    pub gap: f32,
    /// Minimum height of either segment
    pub min_margin: f32,
    /// Leftward movement per tick
    pub obstacle_speed: f32,
    /// Milliseconds between spawns
    pub spawn_interval_ms: f32,
    /// Horizontal inset per side of each segment collision box (segments
    /// stay flush with the field edges and the gap vertically)
    pub obstacle_hitbox_padding: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            craft_x: 80.0,
            craft_start_y: 300.0,
            craft_width: 64.0,
            craft_height: 48.0,
            gravity: 0.61,
            impulse: -11.0,
            craft_hitbox_padding: Vec2::new(18.0, 14.0),

            obstacle_width: 60.0,
            gap: 170.0,
            min_margin: 60.0,
            obstacle_speed: 2.5,
            spawn_interval_ms: 1400.0,
            obstacle_hitbox_padding: 6.0,
        }
    }
}

impl Tuning {
    /// LocalStorage key for an optional override
    pub const STORAGE_KEY: &'static str = "space_riders_tuning";

    /// Horizontal distance between consecutive pairs at the nominal frame rate
    pub fn obstacle_spacing(&self) -> f32 {
        self.obstacle_speed * self.spawn_interval_ms / NOMINAL_FRAME_MS
    }

    /// Check every relationship the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("craft_width", self.craft_width),
            ("craft_height", self.craft_height),
            ("gravity", self.gravity),
            ("obstacle_width", self.obstacle_width),
            ("gap", self.gap),
            ("min_margin", self.min_margin),
            ("obstacle_speed", self.obstacle_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        for (field, value) in positive {
            // Written as a negation so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        if !(self.impulse < 0.0) {
            return Err(TuningError::ImpulseNotUpward {
                value: self.impulse,
            });
        }

        if self.craft_hitbox_padding.x * 2.0 >= self.craft_width
            || self.craft_hitbox_padding.y * 2.0 >= self.craft_height
            || self.craft_hitbox_padding.min_element() < 0.0
        {
            return Err(TuningError::HitboxCollapsed { entity: "craft" });
        }
        if self.obstacle_hitbox_padding * 2.0 >= self.obstacle_width
            || self.obstacle_hitbox_padding < 0.0
        {
            return Err(TuningError::HitboxCollapsed { entity: "obstacle" });
        }

        if self.gap + 2.0 * self.min_margin > self.field_height {
            return Err(TuningError::GapTooLarge {
                gap: self.gap,
                margin: self.min_margin,
                field_height: self.field_height,
            });
        }

        let required = self.obstacle_width + MIN_SPACING_MARGIN;
        let spacing = self.obstacle_spacing();
        if spacing < required {
            return Err(TuningError::SpacingTooSmall { spacing, required });
        }

        Ok(())
    }

    /// Parse and validate a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load the stored override, or the defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(json) = store.get(Self::STORAGE_KEY) else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring stored tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// `self` if it passes [`Tuning::validate`], otherwise the defaults
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Rejecting tuning ({e}), using defaults");
                Self::default()
            }
        }
    }
}
