use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use anyhow::{Context, Result};
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pattern, Pixmap, Rect,
    SpreadMode, Stroke, Transform,
};

use easel_engine::canvas::VectorCanvas;
use easel_engine::coords::{Affine2, Viewport};
use easel_engine::image::Image;
use easel_engine::style::{StrokeCap, StrokeJoin};

/// Path segment in device space.
#[derive(Debug, Copy, Clone)]
enum Seg {
    Move(f32, f32),
    Line(f32, f32),
    Cubic(f32, f32, f32, f32, f32, f32),
    Close,
}

/// State pushed by `save` and popped by `restore`.
#[derive(Debug, Copy, Clone)]
struct CanvasState {
    transform: Transform,
    fill: [f32; 4],
    stroke: [f32; 4],
    stroke_width: f32,
    cap: LineCap,
    join: LineJoin,
    anti_alias: bool,
}

impl CanvasState {
    fn new(base: Transform) -> Self {
        Self {
            transform: base,
            fill: [1.0, 1.0, 1.0, 1.0],
            stroke: [0.0, 0.0, 0.0, 1.0],
            stroke_width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            anti_alias: true,
        }
    }
}

/// Headless [`VectorCanvas`] rasterizing into a `tiny-skia` pixmap.
///
/// Path coordinates are mapped through the current transform when issued.
/// A path built while anti-aliasing was off is painted without it.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    density: f32,
    state: CanvasState,
    saved: Vec<CanvasState>,
    path: Vec<Seg>,
    path_aa: bool,
    /// Last point of the current sub-path, in device space.
    cursor: Option<(f32, f32)>,
}

impl PixmapCanvas {
    /// Creates a transparent canvas sized for `viewport` (physical pixels).
    pub fn new(viewport: Viewport) -> Result<Self> {
        anyhow::ensure!(viewport.is_valid(), "invalid viewport {viewport:?}");
        let (w, h) = viewport.physical_size();
        let pixmap = Pixmap::new(w, h).with_context(|| format!("invalid pixmap size {w}x{h}"))?;
        let density = density_of(viewport);
        Ok(Self {
            pixmap,
            density,
            state: CanvasState::new(Transform::from_scale(density, density)),
            saved: Vec::new(),
            path: Vec::new(),
            path_aa: true,
            cursor: None,
        })
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Physical size in pixels.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    #[inline]
    pub fn pixel_density(&self) -> f32 {
        self.density
    }

    /// Straight-alpha RGBA of a physical pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap.encode_png().context("failed to encode PNG")
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    // ── path helpers ──────────────────────────────────────────────────────

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        let t = &self.state.transform;
        (t.sx * x + t.kx * y + t.tx, t.ky * x + t.sy * y + t.ty)
    }

    fn push(&mut self, seg: Seg) {
        if !self.state.anti_alias {
            self.path_aa = false;
        }
        self.cursor = match seg {
            Seg::Move(x, y) | Seg::Line(x, y) | Seg::Cubic(_, _, _, _, x, y) => Some((x, y)),
            Seg::Close => self.subpath_start(),
        };
        self.path.push(seg);
    }

    fn subpath_start(&self) -> Option<(f32, f32)> {
        self.path.iter().rev().find_map(|s| match *s {
            Seg::Move(x, y) => Some((x, y)),
            _ => None,
        })
    }

    /// Elliptical arc as cubic segments of at most a quarter turn. Starts a
    /// new sub-path when there is no current point, otherwise connects to it.
    ///
    /// Always sweeps clockwise (increasing angle), at most one full turn.
    fn push_arc(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start: f32, stop: f32) {
        let sweep = clockwise_sweep(start, stop);
        let n = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
        let step = sweep / n as f32;
        let k = 4.0 / 3.0 * (step / 4.0).tan();

        let at = |a: f32| {
            let (s, c) = a.sin_cos();
            ((cx + rx * c, cy + ry * s), (-rx * s, ry * c))
        };

        let ((x0, y0), _) = at(start);
        let (dx, dy) = self.map(x0, y0);
        if self.cursor.is_some() {
            self.push(Seg::Line(dx, dy));
        } else {
            self.push(Seg::Move(dx, dy));
        }

        for i in 0..n {
            let a0 = start + step * i as f32;
            let a1 = a0 + step;
            let ((px0, py0), (tx0, ty0)) = at(a0);
            let ((px1, py1), (tx1, ty1)) = at(a1);
            let (c1x, c1y) = self.map(px0 + k * tx0, py0 + k * ty0);
            let (c2x, c2y) = self.map(px1 - k * tx1, py1 - k * ty1);
            let (ex, ey) = self.map(px1, py1);
            self.push(Seg::Cubic(c1x, c1y, c2x, c2y, ex, ey));
        }
    }

    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for seg in &self.path {
            match *seg {
                Seg::Move(x, y) => pb.move_to(x, y),
                Seg::Line(x, y) => pb.line_to(x, y),
                Seg::Cubic(a, b, c, d, x, y) => pb.cubic_to(a, b, c, d, x, y),
                Seg::Close => pb.close(),
            }
        }
        pb.finish()
    }

    fn paint(&self, rgba: [f32; 4]) -> Paint<'static> {
        let [r, g, b, a] = rgba.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.path_aa;
        paint
    }

    /// Approximates the transform's scale factor for stroke widths.
    fn average_scale(&self) -> f32 {
        let t = &self.state.transform;
        let sx = (t.sx * t.sx + t.ky * t.ky).sqrt();
        let sy = (t.kx * t.kx + t.sy * t.sy).sqrt();
        (sx + sy) * 0.5
    }
}

fn density_of(viewport: Viewport) -> f32 {
    if viewport.pixel_density.is_finite() && viewport.pixel_density > 0.0 {
        viewport.pixel_density
    } else {
        1.0
    }
}

/// Copies `image` into a premultiplied pixmap, multiplying by `tint`.
fn to_pixmap(image: &Image, tint: Option<[f32; 4]>) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    let tint = tint.unwrap_or([1.0; 4]);
    let scale = |v: u8, t: f32| (v as f32 * t.clamp(0.0, 1.0)).round() as u8;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels().chunks_exact(4)) {
        let c = ColorU8::from_rgba(
            scale(src[0], tint[0]),
            scale(src[1], tint[1]),
            scale(src[2], tint[2]),
            scale(src[3], tint[3]),
        );
        *dst = c.premultiply();
    }
    Some(pixmap)
}

fn cap_of(cap: StrokeCap) -> LineCap {
    match cap {
        StrokeCap::Butt => LineCap::Butt,
        StrokeCap::Round => LineCap::Round,
        StrokeCap::Square => LineCap::Square,
    }
}

fn join_of(join: StrokeJoin) -> LineJoin {
    match join {
        StrokeJoin::Miter => LineJoin::Miter,
        StrokeJoin::Round => LineJoin::Round,
        // No square join in the rasterizer; bevel is the closest cut.
        StrokeJoin::Square => LineJoin::Bevel,
    }
}

impl VectorCanvas for PixmapCanvas {
    fn begin_frame(&mut self, viewport: Viewport) {
        let (w, h) = viewport.physical_size();
        if (w, h) != self.size() {
            match Pixmap::new(w, h) {
                Some(p) => {
                    log::debug!("pixmap canvas resized to {w}x{h}");
                    self.pixmap = p;
                }
                None => log::error!("pixmap canvas: cannot resize to {w}x{h}; keeping {:?}", self.size()),
            }
        }
        self.density = density_of(viewport);
        self.state = CanvasState::new(Transform::from_scale(self.density, self.density));
        self.saved.clear();
        self.path.clear();
        self.cursor = None;
    }

    fn end_frame(&mut self) {
        if !self.saved.is_empty() {
            log::warn!("pixmap canvas: frame ended with {} unmatched save(s)", self.saved.len());
            self.saved.clear();
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.path_aa = true;
        self.cursor = None;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.push(Seg::Move(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        if self.cursor.is_some() {
            self.push(Seg::Line(x, y));
        } else {
            self.push(Seg::Move(x, y));
        }
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        // Built from edges so negative extents mirror instead of failing.
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close_path();
        self.cursor = None;
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.cursor = None;
        self.push_arc(cx, cy, rx, ry, 0.0, TAU);
        self.close_path();
        self.cursor = None;
    }

    fn arc(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start: f32, stop: f32) {
        self.push_arc(cx, cy, rx, ry, start, stop);
    }

    fn bezier_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        let (c1x, c1y) = self.map(c1x, c1y);
        let (c2x, c2y) = self.map(c2x, c2y);
        let (x, y) = self.map(x, y);
        if self.cursor.is_none() {
            self.push(Seg::Move(c1x, c1y));
        }
        self.push(Seg::Cubic(c1x, c1y, c2x, c2y, x, y));
    }

    fn close_path(&mut self) {
        if self.cursor.is_some() {
            self.push(Seg::Close);
        }
    }

    fn fill_color(&mut self, rgba: [f32; 4]) {
        self.state.fill = rgba;
    }

    fn fill(&mut self) {
        let Some(path) = self.build_path() else { return };
        let paint = self.paint(self.state.fill);
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_color(&mut self, rgba: [f32; 4]) {
        self.state.stroke = rgba;
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path() else { return };
        let paint = self.paint(self.state.stroke);
        let stroke = Stroke {
            width: self.state.stroke_width * self.average_scale(),
            line_cap: self.state.cap,
            line_join: self.state.join,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn line_cap(&mut self, cap: StrokeCap) {
        self.state.cap = cap_of(cap);
    }

    fn line_join(&mut self, join: StrokeJoin) {
        self.state.join = join_of(join);
    }

    fn stroke_width(&mut self, width: f32) {
        self.state.stroke_width = width;
    }

    fn transform(&mut self, t: Affine2) {
        let [a, b, c, d, e, f] = t;
        self.state.transform = self.state.transform.pre_concat(Transform::from_row(a, b, c, d, e, f));
    }

    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(s) = self.saved.pop() {
            self.state = s;
        }
    }

    fn shape_anti_alias(&mut self, enabled: bool) {
        self.state.anti_alias = enabled;
    }

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32, tint: Option<[f32; 4]>) {
        let (iw, ih) = image.size();
        if iw == 0 || ih == 0 || w == 0.0 || h == 0.0 {
            return;
        }
        let Some(src) = to_pixmap(image, tint) else {
            log::warn!("pixmap canvas: cannot rasterize {iw}x{ih} image");
            return;
        };
        let Some(rect) = Rect::from_ltrb(x.min(x + w), y.min(y + h), x.max(x + w), y.max(y + h)) else {
            return;
        };

        let placement = Transform::from_row(w / iw as f32, 0.0, 0.0, h / ih as f32, x, y);
        let mut paint = Paint::default();
        paint.shader = Pattern::new(
            src.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Bilinear,
            1.0,
            placement,
        );
        paint.anti_alias = self.state.anti_alias;
        self.pixmap.fill_rect(rect, &paint, self.state.transform, None);
    }
}

/// Clockwise sweep from `start` to `stop`: a full turn once `|stop - start|`
/// reaches 2π, otherwise wrapped into `[0, 2π)`.
fn clockwise_sweep(start: f32, stop: f32) -> f32 {
    let sweep = stop - start;
    if sweep.abs() >= TAU {
        TAU
    } else if sweep < 0.0 {
        sweep + TAU
    } else {
        sweep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::DrawingContext;
    use easel_engine::paint::Color;
    use easel_engine::primitives::CoordMode;
    use tiny_skia::PremultipliedColorU8;

    const CLEAR: PremultipliedColorU8 = PremultipliedColorU8::TRANSPARENT;

    fn ctx(w: u32, h: u32, density: f32) -> DrawingContext<PixmapCanvas> {
        let viewport = Viewport::with_density(w, h, density);
        let mut c = DrawingContext::new(PixmapCanvas::new(viewport).unwrap(), viewport);
        c.begin_frame();
        c
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    // ── raster ────────────────────────────────────────────────────────────

    #[test]
    fn background_fills_every_pixel() {
        let mut c = ctx(40, 30, 1.0);
        c.background(Color::rgb(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(c.canvas().pixel(0, 0), Some(RED));
        assert_eq!(c.canvas().pixel(39, 29), Some(RED));
    }

    #[test]
    fn filled_rect_without_stroke() {
        let mut c = ctx(40, 40, 1.0);
        c.no_stroke();
        c.fill(Color::WHITE);
        c.rect((10.0, 10.0), 20.0, 20.0).unwrap();
        assert_eq!(c.canvas().pixel(20, 20), Some(WHITE));
        assert_eq!(c.canvas().pixmap().pixel(2, 2), Some(CLEAR));
    }

    #[test]
    fn negative_rect_extent_mirrors() {
        let mut c = ctx(40, 40, 1.0);
        c.no_stroke();
        c.rect_mode(CoordMode::Corners);
        c.rect((30.0, 30.0), 10.0, 10.0).unwrap();
        assert_eq!(c.canvas().pixel(20, 20), Some(WHITE));
        assert_eq!(c.canvas().pixmap().pixel(35, 35), Some(CLEAR));
    }

    #[test]
    fn translate_moves_geometry() {
        let mut c = ctx(40, 40, 1.0);
        c.no_stroke();
        c.translate(20.0, 0.0);
        c.rect((0.0, 0.0), 10.0, 10.0).unwrap();
        assert_eq!(c.canvas().pixel(25, 5), Some(WHITE));
        assert_eq!(c.canvas().pixmap().pixel(5, 5), Some(CLEAR));
    }

    #[test]
    fn ellipse_covers_center_not_corners() {
        let mut c = ctx(40, 40, 1.0);
        c.no_stroke();
        c.ellipse((20.0, 20.0), 30.0, 30.0).unwrap();
        assert_eq!(c.canvas().pixel(20, 20), Some(WHITE));
        assert_eq!(c.canvas().pixmap().pixel(6, 6), Some(CLEAR));
    }

    #[test]
    fn pixel_density_scales_backing_store() {
        let mut c = ctx(20, 10, 2.0);
        assert_eq!(c.canvas().size(), (40, 20));
        c.no_stroke();
        c.rect((10.0, 0.0), 10.0, 10.0).unwrap();
        assert_eq!(c.canvas().pixel(30, 10), Some(WHITE));
        assert_eq!(c.canvas().pixmap().pixel(10, 10), Some(CLEAR));
    }

    #[test]
    fn image_is_tinted() {
        let mut c = ctx(20, 20, 1.0);
        c.tint(Color::rgb(1.0, 0.0, 0.0));
        c.image(&Image::filled(20, 20, Color::WHITE), (0.0, 0.0)).unwrap();
        assert_eq!(c.canvas().pixel(10, 10), Some(RED));
    }

    #[test]
    fn encodes_png() {
        let c = ctx(4, 4, 1.0);
        let png = c.canvas().encode_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    // ── arcs ──────────────────────────────────────────────────────────────

    fn cubic_ends(canvas: &PixmapCanvas) -> Vec<(f32, f32)> {
        canvas
            .path
            .iter()
            .filter_map(|s| match *s {
                Seg::Cubic(_, _, _, _, x, y) => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    fn near(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn huge_sweep_is_clamped_to_one_turn() {
        let mut canvas = PixmapCanvas::new(Viewport::new(40, 40)).unwrap();
        canvas.begin_path();
        canvas.arc(20.0, 20.0, 10.0, 10.0, 0.0, 1.0e6);
        assert_eq!(canvas.path.len(), 5);
        assert_eq!(cubic_ends(&canvas).len(), 4);
    }

    #[test]
    fn reversed_range_sweeps_clockwise() {
        let mut canvas = PixmapCanvas::new(Viewport::new(40, 40)).unwrap();
        canvas.begin_path();
        canvas.arc(20.0, 20.0, 10.0, 10.0, 0.0, -FRAC_PI_2);
        let ends = cubic_ends(&canvas);
        assert_eq!(ends.len(), 3);
        assert!(near(ends[0], (20.0, 30.0)));
        assert!(near(ends[1], (10.0, 20.0)));
        assert!(near(ends[2], (20.0, 10.0)));
    }

    #[test]
    fn clockwise_sweep_wraps_and_clamps() {
        assert_eq!(clockwise_sweep(0.0, 1.0), 1.0);
        assert_eq!(clockwise_sweep(0.0, -TAU), TAU);
        assert_eq!(clockwise_sweep(1.0, 100.0), TAU);
        assert!((clockwise_sweep(0.0, -FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn restore_without_save_is_ignored() {
        let mut canvas = PixmapCanvas::new(Viewport::new(4, 4)).unwrap();
        canvas.restore();
        canvas.transform([2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
        assert_eq!(canvas.average_scale(), 2.0);
    }

    #[test]
    fn zero_size_viewport_is_rejected() {
        assert!(PixmapCanvas::new(Viewport::new(0, 10)).is_err());
    }

    #[test]
    fn non_finite_density_is_rejected() {
        assert!(PixmapCanvas::new(Viewport::with_density(10, 10, f32::NAN)).is_err());
        assert!(PixmapCanvas::new(Viewport::with_density(10, 10, 0.0)).is_err());
    }
}
