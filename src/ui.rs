//! Menu buttons shown on the title and game-over screens

use glam::Vec2;

use crate::sim::{GamePhase, Rect, contains};

/// What a menu button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start or restart a run
    Start,
    /// Ask the host to go fullscreen
    Fullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub action: MenuAction,
    pub label_size: f32,
}

impl Button {
    pub fn label(&self, phase: GamePhase) -> &'static str {
        match (self.action, phase) {
            (MenuAction::Start, GamePhase::GameOver) => "RESTART",
            (MenuAction::Start, _) => "START",
            (MenuAction::Fullscreen, _) => "FULLSCREEN",
        }
    }
}

/// Button placement for a field of the given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub start: Button,
    pub fullscreen: Button,
}

impl MenuLayout {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        let x = field_width / 2.0 - 90.0;
        Self {
            start: Button {
                rect: Rect::new(x, field_height / 2.0 + 40.0, 180.0, 50.0),
                action: MenuAction::Start,
                label_size: 18.0,
            },
            fullscreen: Button {
                rect: Rect::new(x, field_height / 2.0 + 100.0, 180.0, 40.0),
                action: MenuAction::Fullscreen,
                label_size: 14.0,
            },
        }
    }

    pub fn buttons(&self) -> [Button; 2] {
        [self.start, self.fullscreen]
    }

    /// Button under `pos`, if the menu is showing in `phase`
    pub fn hit_test(&self, phase: GamePhase, pos: Vec2) -> Option<MenuAction> {
        if phase == GamePhase::Playing {
            return None;
        }
        self.buttons()
            .into_iter()
            .find(|b| contains(&b.rect, pos.x, pos.y))
            .map(|b| b.action)
    }
}
