//! Easel engine crate.
//!
//! This crate owns the drawing model used by higher layers: shapes and their
//! factory, style and transform state, and the renderer that turns shape trees
//! into calls on an abstract [`VectorCanvas`](canvas::VectorCanvas).
//!
//! Layering:
//! - `coords`, `paint`, `style`, `curve`: value types and math
//! - `shape`, `primitives`: shape model and the pure factory
//! - `render`: shape tree → canvas commands
//! - `context`: explicit drawing state (`DrawingContext`) over a canvas
//! - `canvas`: the canvas boundary plus a recording implementation

pub mod canvas;
pub mod context;
pub mod coords;
pub mod curve;
pub mod error;
pub mod image;
pub mod logging;
pub mod paint;
pub mod primitives;
pub mod render;
pub mod shape;
pub mod style;

pub use context::DrawingContext;
pub use error::{DrawError, Result};
