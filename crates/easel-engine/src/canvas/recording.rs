use crate::coords::{Affine2, Viewport};
use crate::image::Image;
use crate::style::{StrokeCap, StrokeJoin};

use super::{CanvasCmd, VectorCanvas};

/// Canvas that records every call instead of rasterizing.
///
/// Useful for tests, for diffing frames, and for deferring a frame onto a
/// real backend with [`replay`](Self::replay).
///
/// ```
/// use easel_engine::canvas::{CanvasCmd, RecordingCanvas, VectorCanvas};
///
/// let mut canvas = RecordingCanvas::new();
/// canvas.begin_path();
/// canvas.move_to(1.0, 2.0);
/// assert_eq!(canvas.commands()[1], CanvasCmd::MoveTo { x: 1.0, y: 2.0 });
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    cmds: Vec<CanvasCmd>,
    /// Current `save` nesting depth; `restore` without `save` is recorded but
    /// does not underflow.
    save_depth: usize,
}

impl RecordingCanvas {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.save_depth = 0;
    }

    /// Returns commands in emission order.
    #[inline]
    pub fn commands(&self) -> &[CanvasCmd] {
        &self.cmds
    }

    /// Moves the recorded commands out, leaving the canvas empty.
    #[inline]
    pub fn take(&mut self) -> Vec<CanvasCmd> {
        self.save_depth = 0;
        std::mem::take(&mut self.cmds)
    }

    #[inline]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    /// Counts recorded commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&CanvasCmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }

    /// Re-issues every recorded command on `target`, in order.
    pub fn replay(&self, target: &mut dyn VectorCanvas) {
        for cmd in &self.cmds {
            match cmd {
                CanvasCmd::BeginFrame(v) => target.begin_frame(*v),
                CanvasCmd::EndFrame => target.end_frame(),
                CanvasCmd::BeginPath => target.begin_path(),
                CanvasCmd::MoveTo { x, y } => target.move_to(*x, *y),
                CanvasCmd::LineTo { x, y } => target.line_to(*x, *y),
                CanvasCmd::Rect { x, y, w, h } => target.rect(*x, *y, *w, *h),
                CanvasCmd::Ellipse { cx, cy, rx, ry } => target.ellipse(*cx, *cy, *rx, *ry),
                CanvasCmd::Arc { cx, cy, rx, ry, start, stop } => {
                    target.arc(*cx, *cy, *rx, *ry, *start, *stop)
                }
                CanvasCmd::BezierTo { c1x, c1y, c2x, c2y, x, y } => {
                    target.bezier_to(*c1x, *c1y, *c2x, *c2y, *x, *y)
                }
                CanvasCmd::ClosePath => target.close_path(),
                CanvasCmd::FillColor(c) => target.fill_color(*c),
                CanvasCmd::Fill => target.fill(),
                CanvasCmd::StrokeColor(c) => target.stroke_color(*c),
                CanvasCmd::Stroke => target.stroke(),
                CanvasCmd::LineCap(c) => target.line_cap(*c),
                CanvasCmd::LineJoin(j) => target.line_join(*j),
                CanvasCmd::StrokeWidth(w) => target.stroke_width(*w),
                CanvasCmd::Transform(t) => target.transform(*t),
                CanvasCmd::Save => target.save(),
                CanvasCmd::Restore => target.restore(),
                CanvasCmd::ShapeAntiAlias(on) => target.shape_anti_alias(*on),
                CanvasCmd::DrawImage { image, x, y, w, h, tint } => {
                    target.draw_image(image, *x, *y, *w, *h, *tint)
                }
            }
        }
    }

    #[inline]
    fn push(&mut self, cmd: CanvasCmd) {
        self.cmds.push(cmd);
    }
}

impl VectorCanvas for RecordingCanvas {
    fn begin_frame(&mut self, viewport: Viewport) {
        self.save_depth = 0;
        self.push(CanvasCmd::BeginFrame(viewport));
    }

    fn end_frame(&mut self) {
        if self.save_depth != 0 {
            log::warn!("frame ended with {} unmatched canvas save(s)", self.save_depth);
        }
        self.push(CanvasCmd::EndFrame);
    }

    fn begin_path(&mut self) {
        self.push(CanvasCmd::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(CanvasCmd::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(CanvasCmd::LineTo { x, y });
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(CanvasCmd::Rect { x, y, w, h });
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.push(CanvasCmd::Ellipse { cx, cy, rx, ry });
    }

    fn arc(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start: f32, stop: f32) {
        self.push(CanvasCmd::Arc { cx, cy, rx, ry, start, stop });
    }

    fn bezier_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.push(CanvasCmd::BezierTo { c1x, c1y, c2x, c2y, x, y });
    }

    fn close_path(&mut self) {
        self.push(CanvasCmd::ClosePath);
    }

    fn fill_color(&mut self, rgba: [f32; 4]) {
        self.push(CanvasCmd::FillColor(rgba));
    }

    fn fill(&mut self) {
        self.push(CanvasCmd::Fill);
    }

    fn stroke_color(&mut self, rgba: [f32; 4]) {
        self.push(CanvasCmd::StrokeColor(rgba));
    }

    fn stroke(&mut self) {
        self.push(CanvasCmd::Stroke);
    }

    fn line_cap(&mut self, cap: StrokeCap) {
        self.push(CanvasCmd::LineCap(cap));
    }

    fn line_join(&mut self, join: StrokeJoin) {
        self.push(CanvasCmd::LineJoin(join));
    }

    fn stroke_width(&mut self, width: f32) {
        self.push(CanvasCmd::StrokeWidth(width));
    }

    fn transform(&mut self, t: Affine2) {
        self.push(CanvasCmd::Transform(t));
    }

    fn save(&mut self) {
        self.save_depth += 1;
        self.push(CanvasCmd::Save);
    }

    fn restore(&mut self) {
        self.save_depth = self.save_depth.saturating_sub(1);
        self.push(CanvasCmd::Restore);
    }

    fn shape_anti_alias(&mut self, enabled: bool) {
        self.push(CanvasCmd::ShapeAntiAlias(enabled));
    }

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32, tint: Option<[f32; 4]>) {
        self.push(CanvasCmd::DrawImage { image: image.clone(), x, y, w, h, tint });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_depth_tracks_nesting() {
        let mut c = RecordingCanvas::new();
        c.save();
        c.save();
        c.restore();
        assert_eq!(c.save_depth(), 1);
        c.restore();
        c.restore();
        assert_eq!(c.save_depth(), 0);
    }

    #[test]
    fn replay_reproduces_stream() {
        let mut a = RecordingCanvas::new();
        a.begin_path();
        a.rect(0.0, 0.0, -3.0, 4.0);
        a.fill_color([1.0, 0.0, 0.0, 1.0]);
        a.fill();

        let mut b = RecordingCanvas::new();
        a.replay(&mut b);
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn take_empties_the_recording() {
        let mut c = RecordingCanvas::new();
        c.stroke();
        assert_eq!(c.take(), vec![CanvasCmd::Stroke]);
        assert!(c.commands().is_empty());
    }
}
