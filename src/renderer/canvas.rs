//! HTML canvas 2D backend

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{RenderSurface, Sprite, TextAlign, TextStyle, UI_FILL, UI_STROKE};
use crate::sim::Rect;

/// Draws into a `<canvas>` 2D context. Images load in the background;
/// until one has decoded it is simply skipped.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
    size: (f32, f32),
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = HashMap::new();
        for sprite in Sprite::all() {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(&sprite.path());
                    images.insert(sprite, img);
                }
                Err(e) => log::warn!("Could not create image for {sprite:?}: {e:?}"),
            }
        }

        Ok(Self {
            ctx,
            images,
            size: (canvas.width() as f32, canvas.height() as f32),
        })
    }

    fn ready_image(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        self.images
            .get(&sprite)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        self.size
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        if let Some(img) = self.ready_image(sprite) {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            );
        }
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32) {
        self.ctx.set_stroke_style_str(UI_STROKE);
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        let ctx = &self.ctx;
        ctx.set_font(&style.font());
        ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        ctx.set_line_width(3.0);
        ctx.set_stroke_style_str(UI_STROKE);
        let _ = ctx.stroke_text(text, x as f64, y as f64);
        ctx.set_fill_style_str(UI_FILL);
        let _ = ctx.fill_text(text, x as f64, y as f64);
        ctx.set_text_align("left");
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, x: f32, y: f32) {
        let _ = self.ctx.scale(x as f64, y as f64);
    }
}
