//! Game session state and phase transitions
//!
//! Everything a run mutates is held by [`GameSession`] and passed explicitly
//! into the tick; there are no globals.

use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::obstacles::ObstacleField;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing has been played yet
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Left the top or bottom of the field
    OutOfBounds,
    /// Hit a segment of this obstacle pair
    Obstacle { id: u32 },
}

/// Things that happened during a tick, for the orchestrator to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began
    Started,
    /// The craft cleared an obstacle pair
    Scored { id: u32, score: u32 },
    /// The run ended with the given final score
    Crashed { cause: CrashCause, score: u32 },
}

/// One player's game: phase, craft, obstacles and score
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,
    pub craft: Craft,
    pub obstacles: ObstacleField,
    pub score: u32,
    /// A primary action is being held (animation only)
    pub boosting: bool,
    /// Runs started since the session was created
    pub runs: u32,
    field_height: f32,
}

impl GameSession {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            phase: GamePhase::Start,
            craft: Craft::new(tuning),
            obstacles: ObstacleField::new(tuning, seed),
            score: 0,
            boosting: false,
            runs: 0,
            field_height: tuning.field_height,
        }
    }

    pub fn field_height(&self) -> f32 {
        self.field_height
    }

    /// Start (or restart) a run. Ignored while already playing.
    pub fn start(&mut self) -> Option<GameEvent> {
        if self.phase == GamePhase::Playing {
            return None;
        }
        self.craft.reset();
        self.obstacles.reset();
        self.score = 0;
        self.boosting = false;
        self.runs += 1;
        self.phase = GamePhase::Playing;
        Some(GameEvent::Started)
    }

    /// End the current run. Only fires from `Playing`.
    pub fn crash(&mut self, cause: CrashCause) -> Option<GameEvent> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.phase = GamePhase::GameOver;
        self.boosting = false;
        Some(GameEvent::Crashed {
            cause,
            score: self.score,
        })
    }

    pub fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}
