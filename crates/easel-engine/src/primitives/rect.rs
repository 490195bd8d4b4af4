use crate::coords::Point;
use crate::error::{DrawError, Result};
use crate::shape::Shape;
use crate::style::ShapeStyle;

use super::mode::{CoordMode, resolve_rect};

/// Builds a rectangle. See [`CoordMode`] for how `(a, b)` are read.
pub fn rect(style: ShapeStyle, coordinate: Point, a: f32, b: f32, mode: CoordMode) -> Shape {
    Shape::rect(resolve_rect(mode, coordinate, a, b), style)
}

/// Builds a square with side `side` (half side in RADIUS mode).
///
/// CORNERS is ambiguous for a square and fails with `InvalidMode`.
pub fn square(style: ShapeStyle, coordinate: Point, side: f32, mode: CoordMode) -> Result<Shape> {
    if mode == CoordMode::Corners {
        return Err(DrawError::invalid_mode("square", mode));
    }
    Ok(rect(style, coordinate, side, side, mode))
}
