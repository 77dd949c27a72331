//! Platform abstraction layer
//!
//! The game never loops by itself: a driver calls a tick function with the
//! current timestamp once per display refresh. In the browser that is
//! `requestAnimationFrame` (see `web`); [`run_fixed`] does the same with a
//! synthetic clock for native runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Call `tick_fn` with timestamps `0, frame_ms, 2*frame_ms, ...` until it
/// returns `false` or `frames` calls have been made. Returns the call count.
pub fn run_fixed(frames: u32, frame_ms: f64, mut tick_fn: impl FnMut(f64) -> bool) -> u32 {
    let mut count = 0;
    while count < frames {
        let time = count as f64 * frame_ms;
        count += 1;
        if !tick_fn(time) {
            break;
        }
    }
    count
}
