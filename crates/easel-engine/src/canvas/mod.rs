//! Vector canvas boundary.
//!
//! The renderer emits path construction, paint and transform commands through
//! [`VectorCanvas`]; rasterization belongs to the implementor. Coordinates are
//! transformed by the canvas's current transform at the time a path command is
//! issued, so `restore()` before `fill()`/`stroke()` does not move the path.
//!
//! [`RecordingCanvas`] stores the command stream for inspection and replay.

mod cmd;
mod recording;

pub use cmd::CanvasCmd;
pub use recording::RecordingCanvas;

use crate::coords::{Affine2, Viewport};
use crate::image::Image;
use crate::style::{StrokeCap, StrokeJoin};

/// Abstract path/paint sink.
pub trait VectorCanvas {
    /// Starts a frame; the canvas transform is identity until the first `transform`.
    fn begin_frame(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Ends the current frame.
    fn end_frame(&mut self) {}

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Axis-aligned rectangle sub-path; `w`/`h` may be negative.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Full ellipse sub-path with half-extents `rx`, `ry`.
    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);
    /// Elliptical arc from `start` to `stop` radians, continuing the current sub-path.
    fn arc(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start: f32, stop: f32);
    fn bezier_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn close_path(&mut self);

    /// Fill color in normalized RGBA.
    fn fill_color(&mut self, rgba: [f32; 4]);
    fn fill(&mut self);
    /// Stroke color in normalized RGBA.
    fn stroke_color(&mut self, rgba: [f32; 4]);
    fn stroke(&mut self);

    fn line_cap(&mut self, cap: StrokeCap);
    fn line_join(&mut self, join: StrokeJoin);
    fn stroke_width(&mut self, width: f32);

    /// Composes `t` into the current transform; `t` applies to coordinates first.
    fn transform(&mut self, t: Affine2);
    /// Pushes the canvas transform/paint state.
    fn save(&mut self);
    /// Pops the state pushed by the matching `save`.
    fn restore(&mut self);
    fn shape_anti_alias(&mut self, enabled: bool);

    /// Draws `image` scaled into the `w`×`h` box at (`x`, `y`), optionally tinted.
    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32, tint: Option<[f32; 4]>);
}
