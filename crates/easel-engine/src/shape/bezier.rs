use crate::coords::Point;

/// Cubic bezier payload, stored verbatim; tessellation is left to the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BezierGeom {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub stop: Point,
}

impl BezierGeom {
    #[inline]
    pub const fn new(start: Point, cp1: Point, cp2: Point, stop: Point) -> Self {
        Self { start, cp1, cp2, stop }
    }
}
