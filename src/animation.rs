//! Sprite frame animation (display only, never affects gameplay)

use crate::consts::{BG_FRAME_COUNT, BG_FRAME_MS, BOOST_FRAME_COUNT, BOOST_FRAME_MS};

/// Background frames played forward then backward, in every phase
#[derive(Debug, Clone, PartialEq)]
pub struct PingPong {
    frame: usize,
    forward: bool,
    timer_ms: f32,
    frame_count: usize,
    frame_ms: f32,
}

impl Default for PingPong {
    fn default() -> Self {
        Self::new(BG_FRAME_COUNT, BG_FRAME_MS)
    }
}

impl PingPong {
    pub fn new(frame_count: usize, frame_ms: f32) -> Self {
        Self {
            frame: 0,
            forward: true,
            timer_ms: 0.0,
            frame_count: frame_count.max(1),
            frame_ms,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn advance(&mut self, elapsed_ms: f32) {
        self.timer_ms += elapsed_ms;
        if self.timer_ms <= self.frame_ms || self.frame_count < 2 {
            return;
        }
        self.timer_ms = 0.0;

        if self.forward {
            self.frame += 1;
        } else {
            self.frame -= 1;
        }
        if self.frame == self.frame_count - 1 {
            self.forward = false;
        }
        if self.frame == 0 {
            self.forward = true;
        }
    }
}

/// Thruster frames cycled while the primary action is held
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoostAnimation {
    frame: usize,
    timer_ms: f32,
}

impl BoostAnimation {
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer_ms = 0.0;
    }

    /// Advance while boosting; snap back to the first frame otherwise
    pub fn advance(&mut self, boosting: bool, elapsed_ms: f32) {
        if !boosting {
            self.frame = 0;
            return;
        }
        self.timer_ms += elapsed_ms;
        if self.timer_ms > BOOST_FRAME_MS {
            self.frame = (self.frame + 1) % BOOST_FRAME_COUNT;
            self.timer_ms = 0.0;
        }
    }
}
