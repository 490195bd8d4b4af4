use crate::coords::Point;

/// Canonical ellipse payload: center plus half-extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipseGeom {
    pub center: Point,
    pub rx: f32,
    pub ry: f32,
}

impl EllipseGeom {
    #[inline]
    pub const fn new(center: Point, rx: f32, ry: f32) -> Self {
        Self { center, rx, ry }
    }

    /// Full width of the bounding box.
    #[inline]
    pub fn width(&self) -> f32 {
        self.rx * 2.0
    }

    /// Full height of the bounding box.
    #[inline]
    pub fn height(&self) -> f32 {
        self.ry * 2.0
    }
}
