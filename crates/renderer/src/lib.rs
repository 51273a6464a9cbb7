pub mod colors;
pub mod fov;
pub mod pipeline;
pub mod probe;
pub mod surface;

pub use pipeline::{FrameError, RenderPipeline, RenderState};
pub use probe::{PointerProbe, SurfaceRect, HIT_THRESHOLD};
pub use surface::{DrawSurface, LayoutBounds, PixelCanvas, ViewportState};

#[cfg(test)]
pub(crate) mod testing;
