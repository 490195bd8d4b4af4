//! Sketch layer on top of `easel-engine`.
//!
//! - [`Sketch`]: `setup`/`draw` contract for user code
//! - [`SketchRunner`]: frame loop with `no_loop`/`redraw` control
//! - [`SketchConfig`]: title, size, density, frame rate, background
//! - [`PixmapCanvas`]: headless `tiny-skia` backend with PNG output
//! - [`load_image`]: file decoding into engine images

mod assets;
mod config;
mod pixmap;
mod runner;
mod sketch;

pub use assets::{decode_image, load_image};
pub use config::SketchConfig;
pub use pixmap::PixmapCanvas;
pub use runner::SketchRunner;
pub use sketch::{Frame, Sketch};
