use core::ops::{Deref, DerefMut};

use crate::canvas::VectorCanvas;

use super::DrawingContext;

/// Guard returned by [`DrawingContext::scoped_style`]; pops the style on drop.
///
/// Derefs to the context, so drawing continues through the guard:
///
/// ```
/// use easel_engine::canvas::RecordingCanvas;
/// use easel_engine::context::DrawingContext;
/// use easel_engine::coords::Viewport;
/// use easel_engine::paint::Color;
///
/// let mut ctx = DrawingContext::new(RecordingCanvas::new(), Viewport::default());
/// {
///     let mut s = ctx.scoped_style();
///     s.fill(Color::BLACK);
/// }
/// assert_eq!(ctx.style().fill, Color::WHITE);
/// ```
pub struct StyleScope<'a, C: VectorCanvas> {
    ctx: &'a mut DrawingContext<C>,
}

impl<'a, C: VectorCanvas> StyleScope<'a, C> {
    pub(super) fn new(ctx: &'a mut DrawingContext<C>) -> Self {
        Self { ctx }
    }
}

impl<C: VectorCanvas> Deref for StyleScope<'_, C> {
    type Target = DrawingContext<C>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<C: VectorCanvas> DerefMut for StyleScope<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<C: VectorCanvas> Drop for StyleScope<'_, C> {
    fn drop(&mut self) {
        self.ctx.pop_style();
    }
}

/// Guard returned by [`DrawingContext::scoped_matrix`]; pops the transform on drop.
pub struct MatrixScope<'a, C: VectorCanvas> {
    ctx: &'a mut DrawingContext<C>,
}

impl<'a, C: VectorCanvas> MatrixScope<'a, C> {
    pub(super) fn new(ctx: &'a mut DrawingContext<C>) -> Self {
        Self { ctx }
    }
}

impl<C: VectorCanvas> Deref for MatrixScope<'_, C> {
    type Target = DrawingContext<C>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<C: VectorCanvas> DerefMut for MatrixScope<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<C: VectorCanvas> Drop for MatrixScope<'_, C> {
    fn drop(&mut self) {
        self.ctx.pop_matrix();
    }
}
