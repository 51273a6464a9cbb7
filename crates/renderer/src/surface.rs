use std::f32::consts::PI;

use glam::Vec2;
use types::Rgba;

use crate::fov;

/// Pixel-space primitives a concrete backend provides. The web host
/// implements this over `CanvasRenderingContext2d`; tests use a recorder.
pub trait PixelCanvas {
    /// Resize the backing store to `backing_px` square and the CSS-visible
    /// box to `css_px` square. Implies the buffer content is stale.
    fn resize(&mut self, backing_px: u32, css_px: u32);
    fn clear(&mut self, side_px: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba);
    fn stroke_arc(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, width: f32, color: Rgba);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba);
    /// Filled pie slice: arc from `from` to `to` at `radius`, closed back
    /// through the center.
    fn fill_sector(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, color: Rgba);
}

/// Stroke width as a fraction of the viewport side, so line weight stays
/// visually constant across resizes.
pub const LINE_WIDTH_FRAC: f32 = 0.002;

/// Fixed UI margins reserved around the square viewport.
pub const MARGIN_WIDTH: f64 = 20.0;
pub const MARGIN_HEIGHT: f64 = 30.0;

/// Host layout input for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBounds {
    pub avail_width: f64,
    pub avail_height: f64,
    pub device_pixel_ratio: f64,
}

/// Current viewport geometry. Mutated only by `resize_to_fit`, always at
/// the start of a draw cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportState {
    /// Backing-store side, device pixels. Drawing scales by this.
    pub side_px: f32,
    /// CSS-visible side, logical pixels. Pointer math uses this.
    pub side_css: f64,
}

pub fn to_screen(n: f32, side: f32) -> f32 {
    n * side
}

pub fn to_normalized(client: f64, rect_edge: f64, side: f64) -> f32 {
    ((client - rect_edge) / side) as f32
}

/// Normalized-coordinate drawing surface over a pixel backend. Every
/// operation takes positions and sizes as fractions of the square viewport
/// and scales by the current backing side length.
pub struct DrawSurface<C: PixelCanvas> {
    canvas: C,
    viewport: ViewportState,
}

impl<C: PixelCanvas> DrawSurface<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            viewport: ViewportState::default(),
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Backing-store side length, device pixels.
    pub fn side(&self) -> f32 {
        self.viewport.side_px
    }

    /// CSS-visible side length, logical pixels.
    pub fn css_side(&self) -> f64 {
        self.viewport.side_css
    }

    /// Recompute the square viewport from the host's current layout bounds,
    /// scale the backing store by the device pixel ratio, and clear. Must
    /// run before any drawing in a frame or stale pixels survive.
    pub fn resize_to_fit(&mut self, bounds: LayoutBounds) {
        let side_css = (bounds.avail_width - MARGIN_WIDTH)
            .min(bounds.avail_height - MARGIN_HEIGHT)
            .max(1.0);
        let side_px = side_css * bounds.device_pixel_ratio;
        self.viewport = ViewportState {
            side_px: side_px as f32,
            side_css,
        };
        self.canvas.resize(side_px as u32, side_css as u32);
        self.canvas.clear(self.viewport.side_px);
    }

    pub fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        let s = self.viewport.side_px;
        self.canvas
            .fill_circle(to_screen(x, s), to_screen(y, s), to_screen(radius, s), color);
    }

    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
        let s = self.viewport.side_px;
        self.canvas.stroke_line(
            to_screen(x0, s),
            to_screen(y0, s),
            to_screen(x1, s),
            to_screen(y1, s),
            LINE_WIDTH_FRAC * s,
            color,
        );
    }

    /// Unfilled angular stroke. Angles are canvas-space (from +x toward +y).
    pub fn draw_arc(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, color: Rgba) {
        let s = self.viewport.side_px;
        self.canvas.stroke_arc(
            to_screen(x, s),
            to_screen(y, s),
            to_screen(radius, s),
            from,
            to,
            LINE_WIDTH_FRAC * s,
            color,
        );
    }

    /// Isosceles agent body: nose at 1.5·size along the heading, base
    /// vertices at distance `size` at rotation ± 2π/3.
    pub fn draw_triangle(&mut self, x: f32, y: f32, size: f32, rotation: f32, color: Rgba) {
        let s = self.viewport.side_px;
        let pos = Vec2::new(x, y);
        let nose = pos + fov::heading(rotation) * (size * 1.5);
        let base_left = pos + fov::heading(rotation + 2.0 * PI / 3.0) * size;
        let base_right = pos + fov::heading(rotation - 2.0 * PI / 3.0) * size;
        self.canvas
            .fill_triangle(nose * s, base_left * s, base_right * s, color);
    }

    /// Filled pie slice out to `range`, plus strokes along both bounding
    /// radii so adjacent cells stay visually separated. Angles are
    /// canvas-space.
    pub fn draw_sector(
        &mut self,
        x: f32,
        y: f32,
        from: f32,
        to: f32,
        range: f32,
        fill: Rgba,
        stroke: Rgba,
    ) {
        let s = self.viewport.side_px;
        let (px, py, pr) = (to_screen(x, s), to_screen(y, s), to_screen(range, s));
        self.canvas.fill_sector(px, py, pr, from, to, fill);
        let width = LINE_WIDTH_FRAC * s;
        for angle in [from, to] {
            self.canvas.stroke_line(
                px,
                py,
                px + pr * angle.cos(),
                py + pr * angle.sin(),
                width,
                stroke,
            );
        }
    }
}
