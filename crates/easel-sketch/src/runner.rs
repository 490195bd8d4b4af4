use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use easel_engine::DrawingContext;
use easel_engine::canvas::VectorCanvas;
use easel_engine::paint::Color;

use crate::config::SketchConfig;
use crate::sketch::{Frame, LoopState, Sketch};

/// Drives a [`Sketch`] over a canvas: one `setup`, then `draw` per frame.
///
/// Every frame is bracketed by `begin_frame`/`end_frame` on the drawing
/// context, so the global transform starts at identity and unbalanced
/// push/pop pairs never leak into the next frame.
pub struct SketchRunner<S, C>
where
    S: Sketch<C>,
    C: VectorCanvas,
{
    sketch: S,
    ctx: DrawingContext<C>,
    state: LoopState,
    background: Color,
    set_up: bool,
}

impl<S, C> SketchRunner<S, C>
where
    S: Sketch<C>,
    C: VectorCanvas,
{
    pub fn new(config: SketchConfig, canvas: C, sketch: S) -> Self {
        let ctx = DrawingContext::new(canvas, config.viewport());
        Self {
            sketch,
            ctx,
            state: LoopState {
                frame_count: 0,
                looping: true,
                redraw_requested: false,
                title: config.title,
                frame_rate: config.frame_rate,
            },
            background: config.background,
            set_up: false,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.state.looping
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.state.title
    }

    #[inline]
    pub fn context(&self) -> &DrawingContext<C> {
        &self.ctx
    }

    #[inline]
    pub fn canvas(&self) -> &C {
        self.ctx.canvas()
    }

    #[inline]
    pub fn sketch(&self) -> &S {
        &self.sketch
    }

    pub fn into_parts(self) -> (S, C) {
        (self.sketch, self.ctx.into_canvas())
    }

    // ── driving ───────────────────────────────────────────────────────────

    /// Runs `setup` once, painting the configured background first.
    pub fn setup(&mut self) -> Result<()> {
        if self.set_up {
            return Ok(());
        }
        self.set_up = true;

        log::debug!("sketch `{}`: setup", self.state.title);
        self.ctx.begin_frame();
        let result = self
            .ctx
            .background(self.background)
            .map(|_| ())
            .and_then(|()| {
                let mut frame = Frame::new(&mut self.ctx, &mut self.state);
                self.sketch.setup(&mut frame)
            });
        self.ctx.end_frame();

        if let Err(e) = &result {
            log::error!("sketch `{}`: setup failed: {e}", self.state.title);
        }
        result.context("setup() failed")
    }

    /// Runs one frame if the sketch is looping or a redraw was requested.
    ///
    /// Returns whether `draw` was called.
    pub fn run_frame(&mut self) -> Result<bool> {
        self.setup()?;

        if !self.state.looping && !self.state.redraw_requested {
            return Ok(false);
        }
        self.state.redraw_requested = false;
        self.state.frame_count += 1;

        let n = self.state.frame_count;
        log::trace!("frame {n}: begin");
        self.ctx.begin_frame();
        let result = {
            let mut frame = Frame::new(&mut self.ctx, &mut self.state);
            self.sketch.draw(&mut frame)
        };
        self.ctx.end_frame();

        if let Err(e) = &result {
            log::error!("sketch `{}`: draw failed at frame {n}: {e}", self.state.title);
        }
        result.with_context(|| format!("draw() failed at frame {n}"))?;
        Ok(true)
    }

    /// Runs up to `max_frames` frames back to back, stopping early once the
    /// sketch stops looping. Returns the number of frames drawn.
    pub fn run_headless(&mut self, max_frames: u64) -> Result<u64> {
        let mut drawn = 0;
        while drawn < max_frames {
            if !self.run_frame()? {
                break;
            }
            drawn += 1;
        }
        log::info!("sketch `{}`: {drawn} frame(s) rendered", self.state.title);
        Ok(drawn)
    }

    /// Like [`run_headless`](Self::run_headless) but paced at the sketch frame rate.
    pub fn run_paced(&mut self, max_frames: u64) -> Result<u64> {
        let mut drawn = 0;
        while drawn < max_frames {
            let started = Instant::now();
            if !self.run_frame()? {
                break;
            }
            drawn += 1;

            let budget = frame_interval(self.state.frame_rate);
            if let Some(rest) = budget.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
        Ok(drawn)
    }
}

/// Frame budget for `fps`; non-positive rates mean "as fast as possible".
fn frame_interval(fps: f32) -> Duration {
    if fps.is_finite() && fps > 0.0 {
        Duration::from_secs_f32(1.0 / fps)
    } else {
        Duration::ZERO
    }
}
