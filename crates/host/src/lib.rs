pub mod bridge;
pub mod canvas;

use canvas::CanvasContext;
use renderer::{DrawSurface, LayoutBounds, PointerProbe, RenderPipeline};
use sim_bridge::{Simulation, SimulationBridge};
use wasm_bindgen::prelude::*;

pub struct App {
    pub surface: DrawSurface<CanvasContext>,
    pub bridge: SimulationBridge<Box<dyn Simulation>>,
    pub pipeline: RenderPipeline,
    pub probe: PointerProbe,
}

/// Wire the renderer to a canvas element and an engine handle. Called by
/// the embedding wasm app that owns the engine; once this returns, the
/// exported frame/pointer/pause entry points are live. The embedder owns
/// the requestAnimationFrame loop and must cancel it on teardown.
pub fn install(sim: Box<dyn Simulation>, canvas_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let el = document.get_element_by_id(canvas_id).ok_or_else(|| {
        JsValue::from_str(&format!("no canvas element with id '{canvas_id}'"))
    })?;
    let el: web_sys::HtmlCanvasElement = el
        .dyn_into()
        .map_err(|_| "element is not a canvas")?;

    let context = canvas::init_canvas(el).map_err(|e| JsValue::from_str(&e))?;

    let app = App {
        surface: DrawSurface::new(context),
        bridge: SimulationBridge::new(sim),
        pipeline: RenderPipeline::new(),
        probe: PointerProbe::new(),
    };

    bridge::APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    web_sys::console::log_1(&"perception renderer installed".into());
    Ok(())
}

/// Window layout input, re-read every frame because the window may have
/// been resized between frames.
fn layout_bounds(window: &web_sys::Window) -> LayoutBounds {
    let avail_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let avail_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    LayoutBounds {
        avail_width,
        avail_height,
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

/// One render pipeline invocation. The embedder calls this once per
/// animation frame.
#[wasm_bindgen]
pub fn frame() {
    bridge::APP.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let app = match borrow.as_mut() {
            Some(app) => app,
            None => return,
        };
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        let bounds = layout_bounds(&window);
        match app.pipeline.draw_frame(&mut app.bridge, &mut app.surface, bounds) {
            Ok(summaries) => {
                for summary in summaries {
                    web_sys::console::log_1(&summary.to_string().into());
                }
            }
            Err(e) => {
                // Contract violation from the engine; drop this frame.
                web_sys::console::warn_1(&format!("frame dropped: {e}").into());
            }
        }
    });
}
