//! Style/attribute state.
//!
//! `Style` is the mutable current style owned by the drawing context;
//! `ShapeStyle` is the frozen subset each shape carries. Setters live on
//! [`DrawingContext`](crate::context::DrawingContext).

mod state;
mod stroke;

pub use state::{DEFAULT_BACKGROUND, ShapeStyle, Style};
pub use stroke::{StrokeCap, StrokeJoin};
