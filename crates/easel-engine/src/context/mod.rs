//! Drawing context.
//!
//! `DrawingContext` owns everything the free-function sketch APIs keep global:
//! the current style, the style and transform stacks, coordinate modes, curve
//! settings and the canvas shapes are submitted to.
//!
//! Responsibilities:
//! - style setters and scoped style push/pop (`StyleScope`)
//! - global transform stack and scoped push/pop (`MatrixScope`)
//! - `build_*` (pure) and eager drawing (`build_*` + `submit`)
//! - frame begin/end with stack balance checks

mod draw;
mod scope;

pub use scope::{MatrixScope, StyleScope};

use crate::canvas::VectorCanvas;
use crate::coords::{Mat4, MatrixStack, Viewport};
use crate::curve::{CurveSettings, DEFAULT_CURVE_RESOLUTION};
use crate::error::{DrawError, Result};
use crate::paint::Color;
use crate::primitives::{CoordMode, DEFAULT_ELLIPSE_MODE, DEFAULT_RECT_MODE, ShapeDefaults};
use crate::render::render_shape;
use crate::shape::Shape;
use crate::style::{DEFAULT_BACKGROUND, StrokeCap, StrokeJoin, Style};

/// Default image placement mode.
pub const DEFAULT_IMAGE_MODE: CoordMode = CoordMode::Corner;

/// Everything `push_style` saves and `pop_style` restores.
#[derive(Debug, Copy, Clone)]
struct SavedStyle {
    style: Style,
    rect_mode: CoordMode,
    ellipse_mode: CoordMode,
    image_mode: CoordMode,
    curve: CurveSettings,
}

/// Explicit drawing state bound to one canvas.
pub struct DrawingContext<C: VectorCanvas> {
    canvas: C,
    viewport: Viewport,

    style: Style,
    style_stack: Vec<SavedStyle>,
    matrix: MatrixStack,

    rect_mode: CoordMode,
    ellipse_mode: CoordMode,
    image_mode: CoordMode,
    curve: CurveSettings,

    background_color: Color,
}

impl<C: VectorCanvas> DrawingContext<C> {
    pub fn new(canvas: C, viewport: Viewport) -> Self {
        Self {
            canvas,
            viewport,
            style: Style::default(),
            style_stack: Vec::new(),
            matrix: MatrixStack::new(),
            rect_mode: DEFAULT_RECT_MODE,
            ellipse_mode: DEFAULT_ELLIPSE_MODE,
            image_mode: DEFAULT_IMAGE_MODE,
            curve: CurveSettings::default(),
            background_color: DEFAULT_BACKGROUND,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Logical sketch width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    /// Logical sketch height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.viewport.height
    }

    /// Resizes the sketch; takes effect for the next frame.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        log::debug!("viewport {}x{} @{}", viewport.width, viewport.height, viewport.pixel_density);
        self.viewport = viewport;
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Color of the last `background` call.
    #[inline]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[inline]
    pub fn rect_mode_value(&self) -> CoordMode {
        self.rect_mode
    }

    #[inline]
    pub fn ellipse_mode_value(&self) -> CoordMode {
        self.ellipse_mode
    }

    #[inline]
    pub fn image_mode_value(&self) -> CoordMode {
        self.image_mode
    }

    #[inline]
    pub fn curve_settings(&self) -> CurveSettings {
        self.curve
    }

    /// Style and modes frozen for the next built shape.
    pub fn shape_defaults(&self) -> ShapeDefaults {
        ShapeDefaults {
            style: self.style.snapshot(),
            rect_mode: self.rect_mode,
            ellipse_mode: self.ellipse_mode,
            curve: self.curve,
        }
    }

    // ── style setters ─────────────────────────────────────────────────────

    /// Enables filling with `color`; returns the resolved color.
    pub fn fill(&mut self, color: impl Into<Color>) -> Color {
        let c = color.into();
        self.style.fill = c;
        self.style.fill_enabled = true;
        c
    }

    pub fn no_fill(&mut self) {
        self.style.fill_enabled = false;
    }

    /// Enables stroking with `color`; returns the resolved color.
    pub fn stroke(&mut self, color: impl Into<Color>) -> Color {
        let c = color.into();
        self.style.stroke = c;
        self.style.stroke_enabled = true;
        c
    }

    pub fn no_stroke(&mut self) {
        self.style.stroke_enabled = false;
    }

    /// Enables image tinting with `color`; returns the resolved color.
    pub fn tint(&mut self, color: impl Into<Color>) -> Color {
        let c = color.into();
        self.style.tint = c;
        self.style.tint_enabled = true;
        c
    }

    pub fn no_tint(&mut self) {
        self.style.tint_enabled = false;
    }

    pub fn stroke_weight(&mut self, weight: f32) {
        self.style.stroke_weight = weight;
    }

    /// Parses and sets the stroke cap. On error the current cap is kept.
    pub fn stroke_cap(&mut self, cap: &str) -> Result<()> {
        let cap: StrokeCap = cap.parse()?;
        self.set_stroke_cap(cap);
        Ok(())
    }

    /// Parses and sets the stroke join. On error the current join is kept.
    pub fn stroke_join(&mut self, join: &str) -> Result<()> {
        let join: StrokeJoin = join.parse()?;
        self.set_stroke_join(join);
        Ok(())
    }

    #[inline]
    pub fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.style.stroke_cap = cap;
    }

    #[inline]
    pub fn set_stroke_join(&mut self, join: StrokeJoin) {
        self.style.stroke_join = join;
    }

    pub fn smooth(&mut self) {
        self.style.smooth = true;
    }

    pub fn no_smooth(&mut self) {
        self.style.smooth = false;
    }

    // ── modes ─────────────────────────────────────────────────────────────

    pub fn rect_mode(&mut self, mode: CoordMode) {
        self.rect_mode = mode;
    }

    pub fn ellipse_mode(&mut self, mode: CoordMode) {
        self.ellipse_mode = mode;
    }

    /// Sets image placement. RADIUS has no meaning for images.
    pub fn image_mode(&mut self, mode: CoordMode) -> Result<()> {
        if mode == CoordMode::Radius {
            return Err(DrawError::invalid_mode("image", mode));
        }
        self.image_mode = mode;
        Ok(())
    }

    /// Segments per sampled Catmull-Rom curve. Zero restores the default.
    pub fn curve_resolution(&mut self, steps: u32) {
        self.curve.resolution = if steps == 0 { DEFAULT_CURVE_RESOLUTION } else { steps };
    }

    pub fn curve_tightness(&mut self, amount: f32) {
        self.curve.tightness = amount;
    }

    // ── style stack ───────────────────────────────────────────────────────

    /// Saves style, coordinate modes and curve settings.
    pub fn push_style(&mut self) {
        self.style_stack.push(SavedStyle {
            style: self.style,
            rect_mode: self.rect_mode,
            ellipse_mode: self.ellipse_mode,
            image_mode: self.image_mode,
            curve: self.curve,
        });
    }

    /// Restores what the matching `push_style` saved. Unmatched pops are ignored.
    pub fn pop_style(&mut self) {
        let Some(saved) = self.style_stack.pop() else {
            log::warn!("pop_style called without matching push_style");
            return;
        };
        self.style = saved.style;
        self.rect_mode = saved.rect_mode;
        self.ellipse_mode = saved.ellipse_mode;
        self.image_mode = saved.image_mode;
        self.curve = saved.curve;
    }

    #[inline]
    pub fn style_depth(&self) -> usize {
        self.style_stack.len()
    }

    /// Pushes the style and returns a guard that pops it when dropped.
    pub fn scoped_style(&mut self) -> StyleScope<'_, C> {
        self.push_style();
        StyleScope::new(self)
    }

    // ── transform stack ───────────────────────────────────────────────────

    /// Active global transform.
    #[inline]
    pub fn current_matrix(&self) -> Mat4 {
        self.matrix.current()
    }

    pub fn push_matrix(&mut self) {
        self.matrix.push();
    }

    /// Restores the transform saved by the matching `push_matrix`. Unmatched pops are ignored.
    pub fn pop_matrix(&mut self) {
        if !self.matrix.pop() {
            log::warn!("pop_matrix called without matching push_matrix");
        }
    }

    #[inline]
    pub fn matrix_depth(&self) -> usize {
        self.matrix.depth()
    }

    /// Pushes the transform and returns a guard that pops it when dropped.
    pub fn scoped_matrix(&mut self) -> MatrixScope<'_, C> {
        self.push_matrix();
        MatrixScope::new(self)
    }

    pub fn reset_matrix(&mut self) {
        self.matrix.reset();
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.matrix.apply(Mat4::translation(x, y, 0.0));
    }

    /// Rotates by `theta` radians (clockwise on screen).
    pub fn rotate(&mut self, theta: f32) {
        self.matrix.apply(Mat4::rotation_z(theta));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.matrix.apply(Mat4::scaling(sx, sy, 1.0));
    }

    pub fn shear_x(&mut self, angle: f32) {
        self.matrix.apply(Mat4::shear_x(angle));
    }

    pub fn shear_y(&mut self, angle: f32) {
        self.matrix.apply(Mat4::shear_y(angle));
    }

    pub fn apply_matrix(&mut self, m: Mat4) {
        self.matrix.apply(m);
    }

    // ── submission ────────────────────────────────────────────────────────

    /// Renders `shape` under the active global transform.
    pub fn submit(&mut self, shape: &Shape) -> Result<()> {
        render_shape(&mut self.canvas, shape, self.matrix.current(), self.style.smooth)
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Starts a frame: the global transform returns to identity.
    pub fn begin_frame(&mut self) {
        self.matrix.clear();
        self.canvas.begin_frame(self.viewport);
    }

    /// Ends a frame. Unbalanced style/transform stacks are logged and reset.
    pub fn end_frame(&mut self) {
        if self.matrix.depth() > 0 {
            log::warn!("frame ended with {} unmatched push_matrix call(s)", self.matrix.depth());
            self.matrix.clear();
        }
        if !self.style_stack.is_empty() {
            log::warn!("frame ended with {} unmatched push_style call(s)", self.style_stack.len());
            // Next frame starts from the outermost saved style.
            self.style_stack.truncate(1);
            self.pop_style();
        }
        self.canvas.end_frame();
    }
}
