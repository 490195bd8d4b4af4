use core::ops::{Deref, DerefMut};

use easel_engine::canvas::VectorCanvas;
use easel_engine::coords::Viewport;
use easel_engine::{DrawError, DrawingContext};

/// Sketch contract implemented by user code.
///
/// `setup` runs once before the first frame; `draw` runs once per frame while
/// the sketch loops. Errors abort the current callback and are reported by the
/// runner.
pub trait Sketch<C: VectorCanvas> {
    fn setup(&mut self, frame: &mut Frame<'_, C>) -> Result<(), DrawError> {
        let _ = frame;
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame<'_, C>) -> Result<(), DrawError>;
}

/// Loop bookkeeping shared between the runner and the sketch.
#[derive(Debug, Clone)]
pub(crate) struct LoopState {
    pub(crate) frame_count: u64,
    pub(crate) looping: bool,
    pub(crate) redraw_requested: bool,
    pub(crate) title: String,
    pub(crate) frame_rate: f32,
}

/// Per-callback handle passed to [`Sketch`] methods.
///
/// Derefs to the [`DrawingContext`], and adds loop controls.
pub struct Frame<'a, C: VectorCanvas> {
    ctx: &'a mut DrawingContext<C>,
    state: &'a mut LoopState,
}

impl<'a, C: VectorCanvas> Frame<'a, C> {
    pub(crate) fn new(ctx: &'a mut DrawingContext<C>, state: &'a mut LoopState) -> Self {
        Self { ctx, state }
    }

    /// Frames drawn so far; `0` during `setup`, `1` during the first `draw`.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    /// Stops calling `draw` after the current frame.
    pub fn no_loop(&mut self) {
        self.state.looping = false;
    }

    /// Resumes calling `draw` every frame.
    pub fn loop_(&mut self) {
        self.state.looping = true;
    }

    /// Requests a single extra `draw` while not looping.
    pub fn redraw(&mut self) {
        self.state.redraw_requested = true;
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.state.looping
    }

    /// Resizes the sketch, keeping the pixel density. Applies from the next frame.
    pub fn size(&mut self, width: u32, height: u32) {
        let density = self.ctx.viewport().pixel_density;
        self.ctx.set_viewport(Viewport::with_density(width, height, density));
    }

    pub fn title(&mut self, title: impl Into<String>) {
        self.state.title = title.into();
    }

    pub fn frame_rate(&mut self, fps: f32) {
        self.state.frame_rate = fps;
    }
}

impl<C: VectorCanvas> Deref for Frame<'_, C> {
    type Target = DrawingContext<C>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<C: VectorCanvas> DerefMut for Frame<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}
