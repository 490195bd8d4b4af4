use crate::coords::{Affine2, Viewport};
use crate::image::Image;
use crate::style::{StrokeCap, StrokeJoin};

/// One recorded [`VectorCanvas`](super::VectorCanvas) call.
///
/// Variants mirror the trait methods one to one, so a recorded stream can be
/// replayed onto any other canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCmd {
    BeginFrame(Viewport),
    EndFrame,
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    Arc { cx: f32, cy: f32, rx: f32, ry: f32, start: f32, stop: f32 },
    BezierTo { c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32 },
    ClosePath,
    FillColor([f32; 4]),
    Fill,
    StrokeColor([f32; 4]),
    Stroke,
    LineCap(StrokeCap),
    LineJoin(StrokeJoin),
    StrokeWidth(f32),
    Transform(Affine2),
    Save,
    Restore,
    ShapeAntiAlias(bool),
    DrawImage { image: Image, x: f32, y: f32, w: f32, h: f32, tint: Option<[f32; 4]> },
}

impl CanvasCmd {
    /// True for commands that paint pixels.
    #[inline]
    pub fn is_paint(&self) -> bool {
        matches!(self, CanvasCmd::Fill | CanvasCmd::Stroke | CanvasCmd::DrawImage { .. })
    }

    /// True for path construction commands.
    #[inline]
    pub fn is_path(&self) -> bool {
        matches!(
            self,
            CanvasCmd::BeginPath
                | CanvasCmd::MoveTo { .. }
                | CanvasCmd::LineTo { .. }
                | CanvasCmd::Rect { .. }
                | CanvasCmd::Ellipse { .. }
                | CanvasCmd::Arc { .. }
                | CanvasCmd::BezierTo { .. }
                | CanvasCmd::ClosePath
        )
    }
}
