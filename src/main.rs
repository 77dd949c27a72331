//! Space Riders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use space_riders::input::{InputEvent, KeyAction, key_action};
    use space_riders::persistence::LocalStorageStore;
    use space_riders::platform::web::{client_to_field, request_fullscreen, run_animation_frames};
    use space_riders::renderer::CanvasSurface;
    use space_riders::Game;

    type SharedGame = Rc<RefCell<Game<LocalStorageStore>>>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Space Riders starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game: SharedGame = Rc::new(RefCell::new(Game::new(LocalStorageStore::new(), seed)));

        // Logical field size; CSS handles any on-screen scaling
        {
            let g = game.borrow();
            canvas.set_width(g.tuning().field_width as u32);
            canvas.set_height(g.tuning().field_height as u32);
        }

        let mut surface = CanvasSurface::new(&canvas)?;
        setup_input_handlers(&canvas, game.clone());

        run_animation_frames(move |time| {
            let report = game.borrow_mut().frame(time);
            if report.fullscreen_requested {
                request_fullscreen(&canvas);
            }
            game.borrow().render(&mut surface);
        });

        log::info!("Space Riders running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: SharedGame) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Mouse down on the canvas: menu buttons or impulse
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = client_to_field(
                    &canvas_clone,
                    event.client_x() as f64,
                    event.client_y() as f64,
                );
                game.borrow_mut().push_input(InputEvent::PointerDown(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (first touch only)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = client_to_field(
                        &canvas_clone,
                        touch.client_x() as f64,
                        touch.client_y() as f64,
                    );
                    game.borrow_mut().push_input(InputEvent::PointerDown(pos));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Releases anywhere on the page end the boost animation
        for event_name in ["keyup", "touchend", "mouseup"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().push_input(InputEvent::PrimaryRelease);
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if code == "Space" {
                    // Keep the page from scrolling, repeats included
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                match key_action(&code, event.repeat()) {
                    Some(KeyAction::Input(input)) => g.push_input(input),
                    Some(KeyAction::ToggleAutopilot) => {
                        let enabled = !g.autopilot();
                        g.set_autopilot(enabled);
                    }
                    None => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use space_riders::platform::run_fixed;
    use space_riders::{Game, MemoryStore};

    env_logger::init();
    log::info!("Space Riders (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build to play");

    // One simulated minute at 60 Hz with the demo pilot at the controls
    let mut game = Game::new(MemoryStore::new(), 0x5EED);
    game.set_autopilot(true);

    let mut best = 0;
    let frames = run_fixed(60 * 60, 1000.0 / 60.0, |t| {
        let report = game.frame(t);
        best = best.max(report.score);
        true
    });

    println!(
        "Demo finished: {} frames, {} runs, best score {}",
        frames,
        game.session().runs,
        best
    );
    println!("High scores: {:?}", game.highscores().entries());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
