//! Input events
//!
//! Browser callbacks only push into an [`InputQueue`]; the orchestrator drains
//! it once at the top of each frame so state never changes between ticks.

use std::collections::VecDeque;

use glam::Vec2;

/// Discrete input from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Space bar down, tap or click on the play field
    PrimaryPress,
    /// Key up / touch end
    PrimaryRelease,
    /// Pointer down at a position in field coordinates (menu interaction)
    PointerDown(Vec2),
}

/// What a keydown asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Input(InputEvent),
    ToggleAutopilot,
}

/// Map a keydown (`KeyboardEvent.code`) to an action. Auto-repeat keydowns
/// from a held key map to nothing, so a hold is a single press.
pub fn key_action(code: &str, repeat: bool) -> Option<KeyAction> {
    if repeat {
        return None;
    }
    match code {
        "Space" => Some(KeyAction::Input(InputEvent::PrimaryPress)),
        "KeyI" => Some(KeyAction::ToggleAutopilot),
        _ => None,
    }
}

/// Events captured since the last frame, in arrival order
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    /// Upper bound on buffered events; a stalled tab must not grow this forever
    pub const CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        if self.events.len() >= Self::CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Take everything queued so far
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}
