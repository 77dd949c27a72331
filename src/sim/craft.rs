//! The player's craft
//!
//! Horizontal position never changes (the world scrolls instead). Each tick
//! gravity is added to the vertical velocity and the velocity to the position.
//! An input press replaces the velocity with the impulse value, so holding a
//! button does nothing beyond the first press.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::CRAFT_TILT_PER_VELOCITY;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels per tick, positive = down)
    pub velocity: f32,
    pub gravity: f32,
    pub impulse: f32,
    hitbox_padding: Vec2,
    start_y: f32,
}

impl Craft {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.craft_x, tuning.craft_start_y),
            size: Vec2::new(tuning.craft_width, tuning.craft_height),
            velocity: 0.0,
            gravity: tuning.gravity,
            impulse: tuning.impulse,
            hitbox_padding: tuning.craft_hitbox_padding,
            start_y: tuning.craft_start_y,
        }
    }

    /// Back to the launch position, at rest
    pub fn reset(&mut self) {
        self.pos.y = self.start_y;
        self.velocity = 0.0;
    }

    /// One physics step
    pub fn tick(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Upward kick (sets, never adds)
    pub fn apply_impulse(&mut self) {
        self.velocity = self.impulse;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn hitbox(&self) -> Rect {
        self.rect().inset(self.hitbox_padding)
    }

    /// X coordinate used to decide when an obstacle has been passed. This is
    /// the craft's left edge, so a pair scores once it has fully cleared it.
    pub fn pass_x(&self) -> f32 {
        self.pos.x
    }

    /// Above the top edge or below the bottom edge of the field
    pub fn out_of_bounds(&self, field_height: f32) -> bool {
        self.pos.y < 0.0 || self.pos.y + self.size.y > field_height
    }

    /// Sprite tilt in radians (display only)
    pub fn tilt(&self) -> f32 {
        self.velocity * CRAFT_TILT_PER_VELOCITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accumulates() {
        let mut craft = Craft::new(&Tuning::default());
        let v0 = craft.velocity;
        let y0 = craft.pos.y;
        let g = craft.gravity;

        let n = 30;
        for _ in 0..n {
            craft.tick();
        }

        // v_n = v0 + n*g, y_n = y0 + n*v0 + g*n(n+1)/2
        let nf = n as f32;
        assert!((craft.velocity - (v0 + nf * g)).abs() < 1e-3);
        let expected_y = y0 + nf * v0 + g * nf * (nf + 1.0) / 2.0;
        assert!((craft.pos.y - expected_y).abs() < 1e-2);
    }

    #[test]
    fn test_impulse_replaces_velocity() {
        let mut craft = Craft::new(&Tuning::default());
        for v in [-30.0, 0.0, 4.2, 55.0] {
            craft.velocity = v;
            craft.apply_impulse();
            assert_eq!(craft.velocity, -11.0);
        }
    }

    #[test]
    fn test_first_step_from_rest() {
        let mut craft = Craft::new(&Tuning::default());
        craft.tick();
        assert!((craft.velocity - 0.61).abs() < 1e-6);
        assert!((craft.pos.y - 300.61).abs() < 1e-4);
    }

    #[test]
    fn test_bounds() {
        let mut craft = Craft::new(&Tuning::default());
        assert!(!craft.out_of_bounds(640.0));

        craft.pos.y = 640.0 - 48.0;
        assert!(!craft.out_of_bounds(640.0));
        craft.pos.y += 0.01;
        assert!(craft.out_of_bounds(640.0));

        craft.pos.y = -0.01;
        assert!(craft.out_of_bounds(640.0));
    }

    #[test]
    fn test_reset() {
        let mut craft = Craft::new(&Tuning::default());
        craft.velocity = 9.0;
        craft.pos.y = 12.0;
        craft.reset();
        assert_eq!(craft, Craft::new(&Tuning::default()));
    }
}
