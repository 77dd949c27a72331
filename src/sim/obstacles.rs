//! Obstacle pairs: spawning, scrolling, recycling and pass detection
//!
//! Pairs are kept in spawn order, which is also left-to-right order since
//! they all scroll at the same speed. Only the front pair can ever leave the
//! field in a given tick.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, overlaps};
use crate::tuning::Tuning;

/// A top/bottom segment pair with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Height of the segment hanging from the top of the field
    pub top: f32,
    /// Height of the segment standing on the bottom of the field
    pub bottom: f32,
    /// Already counted toward the score
    pub scored: bool,
}

impl ObstaclePair {
    pub fn top_rect(&self, width: f32) -> Rect {
        Rect::new(self.x, 0.0, width, self.top)
    }

    pub fn bottom_rect(&self, width: f32, field_height: f32) -> Rect {
        Rect::new(self.x, field_height - self.bottom, width, self.bottom)
    }
}

/// Owns every active obstacle pair
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pairs: VecDeque<ObstaclePair>,
    spawn_timer_ms: f32,
    rng: Pcg32,
    next_id: u32,

    field_width: f32,
    field_height: f32,
    width: f32,
    gap: f32,
    min_margin: f32,
    speed: f32,
    spawn_interval_ms: f32,
    hitbox_padding_x: f32,
}

impl ObstacleField {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            pairs: VecDeque::new(),
            spawn_timer_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            field_width: tuning.field_width,
            field_height: tuning.field_height,
            width: tuning.obstacle_width,
            gap: tuning.gap,
            min_margin: tuning.min_margin,
            speed: tuning.obstacle_speed,
            spawn_interval_ms: tuning.spawn_interval_ms,
            hitbox_padding_x: tuning.obstacle_hitbox_padding,
        }
    }

    /// Drop every pair and restart the spawn timer
    pub fn reset(&mut self) {
        self.pairs.clear();
        self.spawn_timer_ms = 0.0;
    }

    /// Active pairs, oldest (leftmost) first
    pub fn pairs(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn field_height(&self) -> f32 {
        self.field_height
    }

    /// Accumulate elapsed time and spawn a pair once the interval is exceeded.
    /// Returns the new pair's id.
    pub fn spawn_tick(&mut self, elapsed_ms: f32) -> Option<u32> {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.spawn_timer_ms += elapsed_ms;
        }
        if self.spawn_timer_ms <= self.spawn_interval_ms {
            return None;
        }
        self.spawn_timer_ms = 0.0;
        Some(self.spawn())
    }

    fn spawn(&mut self) -> u32 {
        let lo = self.min_margin;
        let hi = self.field_height - self.gap - self.min_margin;
        let top = if hi > lo {
            self.rng.random_range(lo..=hi)
        } else {
            lo
        };

        let id = self.next_id;
        self.next_id += 1;
        self.pairs.push_back(ObstaclePair {
            id,
            x: self.field_width,
            top,
            bottom: (self.field_height - top - self.gap).max(0.0),
            scored: false,
        });
        log::debug!("Spawned obstacle {id} (top={top:.1})");
        id
    }

    /// Scroll every pair left
    pub fn advance(&mut self) {
        for pair in &mut self.pairs {
            pair.x -= self.speed;
        }
    }

    /// Remove the oldest pair once it is fully past the left edge
    pub fn recycle(&mut self) -> Option<ObstaclePair> {
        let front = self.pairs.front()?;
        if front.x + self.width >= 0.0 {
            return None;
        }
        let pair = self.pairs.pop_front();
        if let Some(pair) = &pair {
            log::debug!("Recycled obstacle {}", pair.id);
        }
        pair
    }

    /// Mark and report pairs whose right edge is now left of `pass_x`.
    /// Each pair is reported at most once in its lifetime.
    pub fn check_passed(&mut self, pass_x: f32) -> Vec<u32> {
        let width = self.width;
        self.pairs
            .iter_mut()
            .filter(|p| !p.scored && p.x + width < pass_x)
            .map(|p| {
                p.scored = true;
                p.id
            })
            .collect()
    }

    /// Collision boxes for the top and bottom segment
    pub fn hitboxes(&self, pair: &ObstaclePair) -> [Rect; 2] {
        let x = pair.x + self.hitbox_padding_x;
        let w = self.width - self.hitbox_padding_x * 2.0;
        [
            Rect::new(x, 0.0, w, pair.top),
            Rect::new(x, self.field_height - pair.bottom, w, pair.bottom),
        ]
    }

    /// First pair whose segments overlap `hitbox`
    pub fn first_collision(&self, hitbox: &Rect) -> Option<u32> {
        self.pairs
            .iter()
            .find(|p| self.hitboxes(p).iter().any(|seg| overlaps(hitbox, seg)))
            .map(|p| p.id)
    }

    #[cfg(test)]
    pub(crate) fn push_for_test(&mut self, x: f32, top: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.pairs.push_back(ObstaclePair {
            id,
            x,
            top,
            bottom: self.field_height - top - self.gap,
            scored: false,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> ObstacleField {
        ObstacleField::new(&Tuning::default(), 42)
    }

    #[test]
    fn test_spawn_needs_interval_exceeded() {
        let mut obstacles = field();
        assert_eq!(obstacles.spawn_tick(1400.0), None);
        assert!(obstacles.is_empty());

        assert!(obstacles.spawn_tick(0.5).is_some());
        assert_eq!(obstacles.len(), 1);

        // Timer restarted
        assert_eq!(obstacles.spawn_tick(700.0), None);
        assert!(obstacles.spawn_tick(701.0).is_some());
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn test_spawn_ignores_bad_elapsed() {
        let mut obstacles = field();
        assert_eq!(obstacles.spawn_tick(f32::NAN), None);
        assert_eq!(obstacles.spawn_tick(-5000.0), None);
        assert_eq!(obstacles.spawn_tick(f32::INFINITY), None);
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_spawns_at_right_edge_in_order() {
        let mut obstacles = field();
        let a = obstacles.spawn_tick(1500.0).unwrap();
        obstacles.advance();
        let b = obstacles.spawn_tick(1500.0).unwrap();

        let pairs: Vec<_> = obstacles.pairs().collect();
        assert_eq!(pairs[0].id, a);
        assert_eq!(pairs[0].x, 360.0 - 2.5);
        assert_eq!(pairs[1].id, b);
        assert_eq!(pairs[1].x, 360.0);
    }

    #[test]
    fn test_recycle_only_after_fully_offscreen() {
        let mut obstacles = field();
        let id = obstacles.push_for_test(-60.0, 100.0);
        obstacles.push_for_test(-70.0, 100.0);

        // Right edge exactly at 0 is still on the field
        assert_eq!(obstacles.recycle(), None);

        obstacles.advance();
        assert_eq!(obstacles.recycle().map(|p| p.id), Some(id));
        // One per tick, even though the second is also off-screen
        assert_eq!(obstacles.len(), 1);
        assert!(obstacles.recycle().is_some());
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_passed_reported_once() {
        let mut obstacles = field();
        let id = obstacles.push_for_test(30.0, 200.0);

        // Right edge at 90 is not left of 80
        assert!(obstacles.check_passed(80.0).is_empty());

        for _ in 0..5 {
            obstacles.advance();
        }
        // Right edge now 77.5
        assert_eq!(obstacles.check_passed(80.0), vec![id]);
        for _ in 0..50 {
            obstacles.advance();
            assert!(obstacles.check_passed(80.0).is_empty());
        }
    }

    #[test]
    fn test_hitboxes_are_padded_horizontally() {
        let mut obstacles = field();
        obstacles.push_for_test(100.0, 200.0);
        let pair = obstacles.pairs().next().unwrap().clone();

        let [top, bottom] = obstacles.hitboxes(&pair);
        assert_eq!(top, Rect::new(106.0, 0.0, 48.0, 200.0));
        assert_eq!(bottom, Rect::new(106.0, 370.0, 48.0, 270.0));
    }

    #[test]
    fn test_first_collision() {
        let mut obstacles = field();
        let id = obstacles.push_for_test(100.0, 200.0);

        // Inside the gap
        assert_eq!(obstacles.first_collision(&Rect::new(110.0, 250.0, 28.0, 20.0)), None);
        // Clipping the top segment
        assert_eq!(
            obstacles.first_collision(&Rect::new(110.0, 190.0, 28.0, 20.0)),
            Some(id)
        );
        // Inside the sprite but outside the padded box
        assert_eq!(obstacles.first_collision(&Rect::new(80.0, 100.0, 25.0, 20.0)), None);
    }

    #[test]
    fn test_first_collision_with_bottom_segment() {
        let mut obstacles = field();
        // Top segment 0..60, gap 60..230, bottom segment 230..640
        let id = obstacles.push_for_test(100.0, 60.0);

        assert_eq!(obstacles.first_collision(&Rect::new(110.0, 200.0, 28.0, 20.0)), None);
        assert_eq!(
            obstacles.first_collision(&Rect::new(110.0, 240.0, 28.0, 20.0)),
            Some(id)
        );
    }

    proptest! {
        #[test]
        fn prop_spawned_heights_fill_field(seed in any::<u64>(), spawns in 1usize..40) {
            let tuning = Tuning::default();
            let mut obstacles = ObstacleField::new(&tuning, seed);
            for _ in 0..spawns {
                obstacles.spawn_tick(tuning.spawn_interval_ms + 1.0);
            }
            prop_assert_eq!(obstacles.len(), spawns);
            for pair in obstacles.pairs() {
                prop_assert!((pair.top + tuning.gap + pair.bottom - tuning.field_height).abs() < 1e-3);
                prop_assert!(pair.top >= tuning.min_margin);
                prop_assert!(pair.bottom >= tuning.min_margin - 1e-3);
            }
        }
    }
}
