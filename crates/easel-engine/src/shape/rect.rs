use crate::coords::Point;

/// Canonical rectangle payload.
///
/// `width`/`height` keep their sign: a negative extent (from CORNERS mode with
/// the opposite corner up/left of the first) describes a mirrored rectangle and
/// is never normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectGeom {
    pub corner: Point,
    pub width: f32,
    pub height: f32,
}

impl RectGeom {
    #[inline]
    pub const fn new(corner: Point, width: f32, height: f32) -> Self {
        Self { corner, width, height }
    }
}
