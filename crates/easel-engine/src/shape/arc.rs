use crate::coords::Point;

/// Canonical arc payload: the parent ellipse plus the swept angle range.
///
/// Angles are radians, measured clockwise from +X in the y-down sketch space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcGeom {
    pub center: Point,
    pub rx: f32,
    pub ry: f32,
    pub start: f32,
    pub stop: f32,
}

impl ArcGeom {
    #[inline]
    pub const fn new(center: Point, rx: f32, ry: f32, start: f32, stop: f32) -> Self {
        Self { center, rx, ry, start, stop }
    }
}
