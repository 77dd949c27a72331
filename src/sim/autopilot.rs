//! Demo pilot
//!
//! Decides when to press the primary action so the game can play itself on
//! demand or in headless runs. It only ever produces inputs; the physics it
//! drives is exactly what a player gets.

use super::state::{GamePhase, GameSession};

/// Keep the hitbox bottom this far above the bottom segment (pixels)
const BOTTOM_CLEARANCE: f32 = 30.0;

/// Whether the pilot wants an impulse this tick
pub fn wants_impulse(session: &GameSession) -> bool {
    if session.phase != GamePhase::Playing {
        return false;
    }

    let craft = &session.craft;
    let hitbox = craft.hitbox();
    let obstacles = &session.obstacles;

    // Nearest pair whose segments the craft has not fully cleared yet
    let target = obstacles
        .pairs()
        .find(|p| obstacles.hitboxes(p)[0].right() >= hitbox.x);

    let floor = match target {
        Some(pair) => pair.top + obstacles.gap() - BOTTOM_CLEARANCE,
        None => obstacles.field_height() * 0.5,
    };

    // Where the hitbox bottom ends up after the next unassisted step
    let predicted_bottom = hitbox.bottom() + craft.velocity + craft.gravity;
    predicted_bottom > floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_idle_outside_play() {
        let session = GameSession::new(&Tuning::default(), 1);
        assert!(!wants_impulse(&session));
    }

    #[test]
    fn test_presses_only_when_sinking_too_low() {
        let mut session = GameSession::new(&Tuning::default(), 1);
        session.start();

        session.craft.velocity = 2.0;
        session.craft.pos.y = 500.0;
        assert!(wants_impulse(&session));

        session.craft.pos.y = 100.0;
        assert!(!wants_impulse(&session));

        // Rising fast from just below the line
        session.craft.pos.y = 290.0;
        session.craft.velocity = -9.0;
        assert!(!wants_impulse(&session));
    }

    #[test]
    fn test_survives_and_scores() {
        let mut session = GameSession::new(&Tuning::default(), 2024);
        session.start();

        let frame_ms = 1000.0 / 60.0;
        for _ in 0..60 * 30 {
            let input = TickInput {
                impulse: wants_impulse(&session),
                ..Default::default()
            };
            tick(&mut session, &input, frame_ms);
        }

        assert_eq!(session.phase, GamePhase::Playing);
        assert!(session.score >= 10, "score {}", session.score);
    }
}
