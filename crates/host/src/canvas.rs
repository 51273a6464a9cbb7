use std::f64::consts::TAU;

use glam::Vec2;
use renderer::{PixelCanvas, SurfaceRect};
use types::Rgba;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// 2D canvas backend. Owns the element and its drawing context; all
/// coordinates arriving here are already in device pixels.
pub struct CanvasContext {
    el: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

/// Acquire the 2D context. No context means the surface is unusable, so
/// this is the one fatal initialization error of the whole view.
pub fn init_canvas(el: HtmlCanvasElement) -> Result<CanvasContext, String> {
    let ctx = el
        .get_context("2d")
        .map_err(|_| "failed to query 2d context".to_string())?
        .ok_or_else(|| "no 2d context available".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "context is not a CanvasRenderingContext2d".to_string())?;
    Ok(CanvasContext { el, ctx })
}

impl CanvasContext {
    /// Client-space position of the canvas, for pointer conversion.
    pub fn bounding_rect(&self) -> SurfaceRect {
        let rect = self.el.get_bounding_client_rect();
        SurfaceRect {
            left: rect.left(),
            top: rect.top(),
        }
    }
}

impl PixelCanvas for CanvasContext {
    fn resize(&mut self, backing_px: u32, css_px: u32) {
        self.el.set_width(backing_px);
        self.el.set_height(backing_px);
        let style = self.el.style();
        let _ = style.set_property("width", &format!("{css_px}px"));
        let _ = style.set_property("height", &format!("{css_px}px"));
        let _ = style.set_property("border", "1px solid #111");
        let _ = style.set_property("background-color", "#333");
    }

    fn clear(&mut self, side_px: f32) {
        self.ctx
            .clear_rect(0.0, 0.0, side_px as f64, side_px as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(x0 as f64, y0 as f64);
        self.ctx.line_to(x1 as f64, y1 as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn stroke_arc(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, width: f32, color: Rgba) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, from as f64, to as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn fill_sector(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(x as f64, y as f64);
        let _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, from as f64, to as f64);
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}
