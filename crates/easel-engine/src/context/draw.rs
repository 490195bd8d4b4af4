use crate::canvas::VectorCanvas;
use crate::coords::Point;
use crate::error::{DrawError, Result};
use crate::image::Image;
use crate::paint::Color;
use crate::primitives::{self, CoordMode, DEFAULT_ARC_MODE};
use crate::shape::Shape;

use super::DrawingContext;

impl<C: VectorCanvas> DrawingContext<C> {
    // ── builders ──────────────────────────────────────────────────────────

    pub fn build_rect(&self, coordinate: impl Into<Point>, a: f32, b: f32) -> Shape {
        primitives::rect(self.style.snapshot(), coordinate.into(), a, b, self.rect_mode)
    }

    pub fn build_square(&self, coordinate: impl Into<Point>, side: f32) -> Result<Shape> {
        primitives::square(self.style.snapshot(), coordinate.into(), side, self.rect_mode)
    }

    pub fn build_ellipse(&self, coordinate: impl Into<Point>, a: f32, b: f32) -> Shape {
        primitives::ellipse(self.style.snapshot(), coordinate.into(), a, b, self.ellipse_mode)
    }

    pub fn build_circle(&self, coordinate: impl Into<Point>, extent: f32) -> Result<Shape> {
        primitives::circle(self.style.snapshot(), coordinate.into(), extent, self.ellipse_mode)
    }

    /// Arc with an explicit mode string (combination of OPEN, CHORD, PIE).
    pub fn build_arc(
        &self,
        coordinate: impl Into<Point>,
        w: f32,
        h: f32,
        start: f32,
        stop: f32,
        mode: &str,
    ) -> Result<Shape> {
        let attribs = primitives::parse_arc_mode(mode)?;
        primitives::arc(
            self.style.snapshot(),
            coordinate.into(),
            w,
            h,
            start,
            stop,
            attribs,
            self.ellipse_mode,
        )
    }

    pub fn build_line(&self, p1: impl Into<Point>, p2: impl Into<Point>) -> Shape {
        primitives::line(self.style.snapshot(), p1.into(), p2.into())
    }

    pub fn build_point(&self, at: impl Into<Point>) -> Shape {
        primitives::point(self.style.snapshot(), at.into())
    }

    pub fn build_triangle(&self, p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>) -> Shape {
        primitives::triangle(self.style.snapshot(), p1.into(), p2.into(), p3.into())
    }

    pub fn build_quad(
        &self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
        p4: impl Into<Point>,
    ) -> Shape {
        primitives::quad(self.style.snapshot(), p1.into(), p2.into(), p3.into(), p4.into())
    }

    pub fn build_bezier(
        &self,
        start: impl Into<Point>,
        cp1: impl Into<Point>,
        cp2: impl Into<Point>,
        stop: impl Into<Point>,
    ) -> Shape {
        primitives::bezier(self.style.snapshot(), start.into(), cp1.into(), cp2.into(), stop.into())
    }

    /// Catmull-Rom segment from `p2` to `p3`, sampled per the current curve settings.
    pub fn build_curve(
        &self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
        p4: impl Into<Point>,
    ) -> Shape {
        primitives::curve(self.style.snapshot(), p1.into(), p2.into(), p3.into(), p4.into(), self.curve)
    }

    /// Builds a shape by kind name without drawing it. See [`primitives::create_shape`].
    pub fn create_shape(&self, kind: Option<&str>, args: &[f32]) -> Result<Shape> {
        primitives::create_shape(&self.shape_defaults(), kind, args)
    }

    // ── eager drawing ─────────────────────────────────────────────────────

    fn draw(&mut self, shape: Shape) -> Result<Shape> {
        self.submit(&shape)?;
        Ok(shape)
    }

    pub fn rect(&mut self, coordinate: impl Into<Point>, a: f32, b: f32) -> Result<Shape> {
        let s = self.build_rect(coordinate, a, b);
        self.draw(s)
    }

    pub fn square(&mut self, coordinate: impl Into<Point>, side: f32) -> Result<Shape> {
        let s = self.build_square(coordinate, side)?;
        self.draw(s)
    }

    pub fn ellipse(&mut self, coordinate: impl Into<Point>, a: f32, b: f32) -> Result<Shape> {
        let s = self.build_ellipse(coordinate, a, b);
        self.draw(s)
    }

    pub fn circle(&mut self, coordinate: impl Into<Point>, extent: f32) -> Result<Shape> {
        let s = self.build_circle(coordinate, extent)?;
        self.draw(s)
    }

    /// Arc in the default `OPEN PIE` mode.
    pub fn arc(&mut self, coordinate: impl Into<Point>, w: f32, h: f32, start: f32, stop: f32) -> Result<Shape> {
        self.arc_with_mode(coordinate, w, h, start, stop, DEFAULT_ARC_MODE)
    }

    pub fn arc_with_mode(
        &mut self,
        coordinate: impl Into<Point>,
        w: f32,
        h: f32,
        start: f32,
        stop: f32,
        mode: &str,
    ) -> Result<Shape> {
        let s = self.build_arc(coordinate, w, h, start, stop, mode)?;
        self.draw(s)
    }

    pub fn line(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) -> Result<Shape> {
        let s = self.build_line(p1, p2);
        self.draw(s)
    }

    pub fn point(&mut self, at: impl Into<Point>) -> Result<Shape> {
        let s = self.build_point(at);
        self.draw(s)
    }

    pub fn triangle(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>) -> Result<Shape> {
        let s = self.build_triangle(p1, p2, p3);
        self.draw(s)
    }

    pub fn quad(
        &mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
        p4: impl Into<Point>,
    ) -> Result<Shape> {
        let s = self.build_quad(p1, p2, p3, p4);
        self.draw(s)
    }

    pub fn bezier(
        &mut self,
        start: impl Into<Point>,
        cp1: impl Into<Point>,
        cp2: impl Into<Point>,
        stop: impl Into<Point>,
    ) -> Result<Shape> {
        let s = self.build_bezier(start, cp1, cp2, stop);
        self.draw(s)
    }

    pub fn curve(
        &mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
        p4: impl Into<Point>,
    ) -> Result<Shape> {
        let s = self.build_curve(p1, p2, p3, p4);
        self.draw(s)
    }

    // ── background ────────────────────────────────────────────────────────

    /// Paints the whole sketch with `color`, ignoring the current transform
    /// and stroke. Style and transform are untouched afterwards.
    pub fn background(&mut self, color: impl Into<Color>) -> Result<Color> {
        let color = color.into();
        let (w, h) = self.viewport.size();

        let mut style = self.scoped_style();
        style.fill(color);
        style.no_stroke();
        let mut view = style.scoped_matrix();
        view.reset_matrix();
        let rect = primitives::rect(
            view.style.snapshot(),
            Point::zero(),
            w as f32,
            h as f32,
            CoordMode::Corner,
        );
        view.submit(&rect)?;
        view.background_color = color;
        Ok(color)
    }

    /// Paints `image` over the whole sketch. Its size must match the sketch size.
    pub fn background_image(&mut self, image: &Image) -> Result<()> {
        let sketch = self.viewport.size();
        if image.size() != sketch {
            log::debug!("background image {:?} rejected for sketch {:?}", image.size(), sketch);
            return Err(DrawError::DimensionMismatch { image: image.size(), sketch });
        }

        let mut style = self.scoped_style();
        style.no_tint();
        style.image_mode(CoordMode::Corner)?;
        let mut view = style.scoped_matrix();
        view.reset_matrix();
        view.image(image, Point::zero())
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Draws `image` at its natural size, placed per the current image mode.
    pub fn image(&mut self, image: &Image, location: impl Into<Point>) -> Result<()> {
        let location = location.into();
        let (w, h) = (image.width() as f32, image.height() as f32);
        let (a, b) = match self.image_mode {
            CoordMode::Corners => (location.x + w, location.y + h),
            _ => (w, h),
        };
        self.image_sized(image, location, a, b)
    }

    /// Draws `image` into a box. `(a, b)` is the size, or the opposite corner
    /// under CORNERS.
    pub fn image_sized(&mut self, image: &Image, location: impl Into<Point>, a: f32, b: f32) -> Result<()> {
        let (x, y, w, h) = primitives::resolve_image(self.image_mode, location.into(), a, b)?;
        let tint = self.style.effective_tint().map(Color::normalized);

        self.canvas.save();
        self.canvas.transform(self.matrix.current().to_affine());
        self.canvas.draw_image(image, x, y, w, h, tint);
        self.canvas.restore();
        Ok(())
    }
}
