//! Rendering module
//!
//! The game draws through [`RenderSurface`], a small immediate-mode interface
//! shaped after the HTML canvas 2D context. Sprites are opaque [`Sprite`]
//! handles; the surface decides what (if anything) they look like, so a
//! missing image never affects gameplay.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_frame;

use crate::consts::{BG_FRAME_COUNT, BOOST_FRAME_COUNT};
use crate::sim::Rect;

/// UI colours and font
pub const UI_FILL: &str = "#FF2D55";
pub const UI_STROKE: &str = "#00F5FF";
pub const UI_FONT: &str = "'Orbitron', 'Exo', 'Rajdhani', system-ui, sans-serif";

/// Named image resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Background animation frame (0-based)
    Background(usize),
    CraftIdle,
    /// Thruster animation frame (0-based)
    CraftBoost(usize),
    /// Obstacle segment, drawn upright for the bottom and flipped for the top
    Pillar,
}

impl Sprite {
    /// Every sprite the game can request
    pub fn all() -> Vec<Sprite> {
        let mut sprites: Vec<_> = (0..BG_FRAME_COUNT).map(Sprite::Background).collect();
        sprites.push(Sprite::CraftIdle);
        sprites.extend((0..BOOST_FRAME_COUNT).map(Sprite::CraftBoost));
        sprites.push(Sprite::Pillar);
        sprites
    }

    /// Image path relative to the page
    pub fn path(&self) -> String {
        match self {
            Sprite::Background(i) => format!("images/bg{}.png", i + 1),
            Sprite::CraftIdle => "images/ship_idle.png".to_string(),
            Sprite::CraftBoost(i) => format!("images/ship_boost{}.png", i + 1),
            Sprite::Pillar => "images/pillar.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Outlined UI text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn left(size: f32) -> Self {
        Self {
            size,
            align: TextAlign::Left,
        }
    }

    pub fn centered(size: f32) -> Self {
        Self {
            size,
            align: TextAlign::Center,
        }
    }

    /// CSS font shorthand
    pub fn font(&self) -> String {
        format!("{}px {}", self.size, UI_FONT)
    }
}

/// Drawing target
pub trait RenderSurface {
    /// Surface size in field pixels
    fn size(&self) -> (f32, f32);

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);

    fn stroke_rect(&mut self, rect: Rect, line_width: f32);

    /// Text with a stroke outline and fill, baseline at `y`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, x: f32, y: f32);
}
