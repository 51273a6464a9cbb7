use std::cell::RefCell;

use renderer::probe::pointer_to_normalized;
use wasm_bindgen::prelude::*;

use crate::App;

thread_local! {
    pub static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Pointer-move hit-test. Logs a diagnostic record for the agent under
/// the cursor, if any; observational only.
#[wasm_bindgen]
pub fn on_pointer_move(client_x: f64, client_y: f64) {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            let css_side = app.surface.css_side();
            if css_side <= 0.0 {
                // No frame drawn yet, nothing to hit-test against.
                return;
            }
            let rect = app.surface.canvas().bounding_rect();
            let pointer = pointer_to_normalized(client_x, client_y, rect, css_side);
            let world = app.bridge.world();
            if let Some((idx, agent)) = app.probe.locate(&world, pointer) {
                web_sys::console::log_1(
                    &format!(
                        "agent {idx}: ({}, {}) r: {} ({:.2}\u{b0}) speed: {} vision: {:?}",
                        agent.position.x,
                        agent.position.y,
                        agent.rotation,
                        agent.rotation.to_degrees(),
                        agent.speed,
                        agent.vision,
                    )
                    .into(),
                );
            }
        }
    });
}

/// Flips the pause flag and returns the new active state.
#[wasm_bindgen]
pub fn toggle_pause() -> bool {
    APP.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(|app| app.bridge.toggle())
            .unwrap_or(false)
    })
}

#[wasm_bindgen]
pub fn set_paused(paused: bool) {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            if paused {
                app.bridge.pause();
            } else {
                app.bridge.resume();
            }
        }
    });
}

/// Catch-up step multiplier; clamped to at least 1.
#[wasm_bindgen]
pub fn set_steps_per_frame(steps: u32) {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            app.pipeline.set_steps_per_frame(steps);
        }
    });
}

#[wasm_bindgen]
pub fn age() -> usize {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.bridge.age()).unwrap_or(0))
}

#[wasm_bindgen]
pub fn generation() -> usize {
    APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|app| app.bridge.generation())
            .unwrap_or(0)
    })
}
