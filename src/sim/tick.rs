//! Per-tick simulation step
//!
//! Advances a [`GameSession`] by one display frame. Physics moves one step per
//! tick; the spawn timer uses the measured elapsed time.

use super::state::{CrashCause, GameEvent, GamePhase, GameSession};

/// Input commands for a single tick (already drained from the input queue)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Start/restart button pressed
    pub start: bool,
    /// At least one primary-action press this tick
    pub impulse: bool,
    /// Latest held state of the primary action, if it changed this tick
    pub boosting: Option<bool>,
}

/// Advance the session by one tick, returning what happened
pub fn tick(session: &mut GameSession, input: &TickInput, elapsed_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // A (re)start takes effect now; gameplay begins on the following tick
    if input.start {
        if let Some(event) = session.start() {
            log::info!("Run {} started", session.runs);
            events.push(event);
            return events;
        }
    }

    if session.phase != GamePhase::Playing {
        return events;
    }

    if input.impulse {
        session.craft.apply_impulse();
    }
    if let Some(held) = input.boosting {
        session.boosting = held;
    }

    session.craft.tick();

    session.obstacles.spawn_tick(elapsed_ms);
    session.obstacles.advance();
    session.obstacles.recycle();

    let crash = if session.craft.out_of_bounds(session.field_height()) {
        Some(CrashCause::OutOfBounds)
    } else {
        session
            .obstacles
            .first_collision(&session.craft.hitbox())
            .map(|id| CrashCause::Obstacle { id })
    };

    if let Some(cause) = crash {
        if let Some(event) = session.crash(cause) {
            log::info!("Crashed ({cause:?}) with score {}", session.score);
            events.push(event);
        }
        return events;
    }

    let pass_x = session.craft.pass_x();
    for id in session.obstacles.check_passed(pass_x) {
        session.increment_score();
        events.push(GameEvent::Scored {
            id,
            score: session.score,
        });
    }

    events
}
