//! Scene composition: what gets drawn for each phase

use super::{RenderSurface, Sprite, TextStyle};
use crate::highscores::HighScores;
use crate::sim::{GamePhase, GameSession, Rect};
use crate::ui::MenuLayout;

/// Read-only view of everything a frame needs
pub struct Scene<'a> {
    pub session: &'a GameSession,
    pub highscores: &'a HighScores,
    pub layout: &'a MenuLayout,
    pub background_frame: usize,
    pub boost_frame: usize,
}

/// Draw one complete frame
pub fn draw_frame(surface: &mut impl RenderSurface, scene: &Scene) {
    let (w, h) = surface.size();
    surface.draw_sprite(
        Sprite::Background(scene.background_frame),
        Rect::new(0.0, 0.0, w, h),
    );

    match scene.session.phase {
        GamePhase::Start => {
            draw_title(surface, "SPACE RIDERS", 260.0, 30.0);
            draw_menu(surface, scene);
        }
        GamePhase::GameOver => {
            draw_title(surface, "GAME OVER", 200.0, 26.0);
            draw_title(
                surface,
                &format!("SCORE {}", scene.session.score),
                240.0,
                18.0,
            );
            draw_highscores(surface, scene.highscores, 280.0);
            draw_menu(surface, scene);
        }
        GamePhase::Playing => {
            draw_craft(surface, scene);
            draw_obstacles(surface, scene.session);
            surface.draw_text(
                &scene.session.score.to_string(),
                20.0,
                36.0,
                TextStyle::left(18.0),
            );
        }
    }
}

fn draw_title(surface: &mut impl RenderSurface, text: &str, y: f32, size: f32) {
    let (w, _) = surface.size();
    surface.draw_text(text, w / 2.0, y, TextStyle::centered(size));
}

fn draw_menu(surface: &mut impl RenderSurface, scene: &Scene) {
    let (w, _) = surface.size();
    for button in scene.layout.buttons() {
        surface.stroke_rect(button.rect, 2.0);
        surface.draw_text(
            button.label(scene.session.phase),
            w / 2.0,
            button.rect.y + button.rect.h / 2.0 + 6.0,
            TextStyle::centered(button.label_size),
        );
    }
}

fn draw_highscores(surface: &mut impl RenderSurface, highscores: &HighScores, y: f32) {
    let (w, _) = surface.size();
    draw_title(surface, "TOP 3", y, 14.0);
    for (i, score) in highscores.entries().iter().enumerate() {
        surface.draw_text(
            &format!("{}. {}", i + 1, score),
            w / 2.0,
            y + 24.0 + i as f32 * 18.0,
            TextStyle::left(14.0),
        );
    }
}

fn draw_craft(surface: &mut impl RenderSurface, scene: &Scene) {
    let craft = &scene.session.craft;
    let sprite = if scene.session.boosting {
        Sprite::CraftBoost(scene.boost_frame)
    } else {
        Sprite::CraftIdle
    };

    let center = craft.rect().center();
    surface.save();
    surface.translate(center.x, center.y);
    surface.rotate(craft.tilt());
    surface.draw_sprite(
        sprite,
        Rect::new(-craft.size.x / 2.0, -craft.size.y / 2.0, craft.size.x, craft.size.y),
    );
    surface.restore();
}

fn draw_obstacles(surface: &mut impl RenderSurface, session: &GameSession) {
    let obstacles = &session.obstacles;
    let width = obstacles.width();
    let field_height = obstacles.field_height();

    for pair in obstacles.pairs() {
        // Top segment hangs upside down
        surface.save();
        surface.translate(pair.x + width / 2.0, pair.top / 2.0);
        surface.scale(1.0, -1.0);
        surface.draw_sprite(
            Sprite::Pillar,
            Rect::new(-width / 2.0, -pair.top / 2.0, width, pair.top),
        );
        surface.restore();

        surface.draw_sprite(Sprite::Pillar, pair.bottom_rect(width, field_height));
    }
}

/// Surface that records calls, for tests
#[cfg(test)]
pub(crate) mod recording {
    use super::super::{RenderSurface, Sprite, TextStyle};
    use crate::sim::Rect;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Sprite(Sprite, Rect),
        StrokeRect(Rect),
        Text(String, f32, f32, TextStyle),
        Save,
        Restore,
        Translate(f32, f32),
        Rotate(f32),
        Scale(f32, f32),
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Text(t, ..) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn sprites(&self) -> Vec<Sprite> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Sprite(s, _) => Some(*s),
                    _ => None,
                })
                .collect()
        }
    }

    impl RenderSurface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (360.0, 640.0)
        }

        fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
            self.calls.push(DrawCall::Sprite(sprite, rect));
        }

        fn stroke_rect(&mut self, rect: Rect, _line_width: f32) {
            self.calls.push(DrawCall::StrokeRect(rect));
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
            self.calls.push(DrawCall::Text(text.to_string(), x, y, style));
        }

        fn save(&mut self) {
            self.calls.push(DrawCall::Save);
        }

        fn restore(&mut self) {
            self.calls.push(DrawCall::Restore);
        }

        fn translate(&mut self, x: f32, y: f32) {
            self.calls.push(DrawCall::Translate(x, y));
        }

        fn rotate(&mut self, radians: f32) {
            self.calls.push(DrawCall::Rotate(radians));
        }

        fn scale(&mut self, x: f32, y: f32) {
            self.calls.push(DrawCall::Scale(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{DrawCall, RecordingSurface};
    use super::*;
    use crate::tuning::Tuning;

    fn scene_for<'a>(
        session: &'a GameSession,
        highscores: &'a HighScores,
        layout: &'a MenuLayout,
    ) -> Scene<'a> {
        Scene {
            session,
            highscores,
            layout,
            background_frame: 2,
            boost_frame: 1,
        }
    }

    #[test]
    fn test_title_screen() {
        let session = GameSession::new(&Tuning::default(), 1);
        let highscores = HighScores::new();
        let layout = MenuLayout::new(360.0, 640.0);

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &scene_for(&session, &highscores, &layout));

        assert_eq!(
            surface.calls[0],
            DrawCall::Sprite(Sprite::Background(2), Rect::new(0.0, 0.0, 360.0, 640.0))
        );
        assert_eq!(surface.texts(), vec!["SPACE RIDERS", "START", "FULLSCREEN"]);
        assert!(!surface.sprites().contains(&Sprite::CraftIdle));
    }

    #[test]
    fn test_game_over_lists_scores() {
        let mut session = GameSession::new(&Tuning::default(), 1);
        session.start();
        session.score = 7;
        session.crash(crate::sim::CrashCause::OutOfBounds);

        let mut highscores = HighScores::new();
        highscores.insert(9);
        highscores.insert(7);
        let layout = MenuLayout::new(360.0, 640.0);

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &scene_for(&session, &highscores, &layout));
        assert_eq!(
            surface.texts(),
            vec!["GAME OVER", "SCORE 7", "TOP 3", "1. 9", "2. 7", "RESTART", "FULLSCREEN"]
        );
    }

    #[test]
    fn test_playing_draws_craft_obstacles_and_score() {
        let mut session = GameSession::new(&Tuning::default(), 1);
        session.start();
        session.boosting = true;
        session.craft.velocity = 10.0;
        session.obstacles.push_for_test(200.0, 150.0);
        let highscores = HighScores::new();
        let layout = MenuLayout::new(360.0, 640.0);

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &scene_for(&session, &highscores, &layout));

        assert_eq!(
            surface.sprites(),
            vec![
                Sprite::Background(2),
                Sprite::CraftBoost(1),
                Sprite::Pillar,
                Sprite::Pillar
            ]
        );
        assert!(surface.calls.contains(&DrawCall::Rotate(10.0 * 0.035)));
        assert!(surface.calls.contains(&DrawCall::Scale(1.0, -1.0)));
        assert!(surface.calls.contains(&DrawCall::Sprite(
            Sprite::Pillar,
            Rect::new(200.0, 320.0, 60.0, 320.0)
        )));
        assert_eq!(surface.texts(), vec!["0"]);

        let saves = surface.calls.iter().filter(|c| **c == DrawCall::Save).count();
        let restores = surface.calls.iter().filter(|c| **c == DrawCall::Restore).count();
        assert_eq!(saves, restores);
    }
}
