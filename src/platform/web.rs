//! Browser glue: animation-frame loop, fullscreen, pointer mapping

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Call `tick_fn(timestamp_ms)` on every animation frame, forever.
/// If the browser stops delivering frames the game simply pauses.
pub fn run_animation_frames<F: FnMut(f64) + 'static>(tick_fn: F) {
    request_animation_frame(Rc::new(RefCell::new(tick_fn)));
}

fn request_animation_frame<F: FnMut(f64) + 'static>(tick_fn: Rc<RefCell<F>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, cannot schedule frames");
        return;
    };
    let closure = Closure::once(move |time: f64| {
        {
            let mut tick = tick_fn.borrow_mut();
            (*tick)(time);
        }
        request_animation_frame(tick_fn);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Best effort fullscreen. Browsers without the Fullscreen API (iOS Safari)
/// get the canvas stretched over the viewport instead.
pub fn request_fullscreen(canvas: &HtmlCanvasElement) {
    if canvas.request_fullscreen().is_ok() {
        return;
    }
    log::debug!("Fullscreen API unavailable, stretching canvas");

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(body) = window.document().and_then(|d| d.body()) {
        let style = body.style();
        let _ = style.set_property("margin", "0");
        let _ = style.set_property("overflow", "hidden");
    }
    let style = canvas.style();
    let _ = style.set_property("width", "100vw");
    let _ = style.set_property("height", "100vh");
    window.scroll_to_with_x_and_y(0.0, 1.0);
}

/// Map client (CSS pixel) coordinates to field coordinates, accounting for
/// any scaling of the canvas element (fullscreen, stretched layout)
pub fn client_to_field(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        canvas.height() as f64 / rect.height()
    } else {
        1.0
    };
    Vec2::new(
        ((client_x - rect.left()) * scale_x) as f32,
        ((client_y - rect.top()) * scale_y) as f32,
    )
}
