use crate::coords::Point;
use crate::error::{DrawError, Result};
use crate::shape::Shape;
use crate::style::ShapeStyle;

use super::mode::{CoordMode, resolve_ellipse};

/// Builds an ellipse resolved to center + half-extents.
pub fn ellipse(style: ShapeStyle, coordinate: Point, a: f32, b: f32, mode: CoordMode) -> Shape {
    Shape::ellipse(resolve_ellipse(mode, coordinate, a, b), style)
}

/// Builds a circle; `extent` is the diameter (radius in RADIUS mode).
///
/// A single extent cannot describe two independent corners, so CORNERS fails
/// with `InvalidMode`.
pub fn circle(style: ShapeStyle, coordinate: Point, extent: f32, mode: CoordMode) -> Result<Shape> {
    if mode == CoordMode::Corners {
        return Err(DrawError::invalid_mode("circle", mode));
    }
    Ok(ellipse(style, coordinate, extent, extent, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{EllipseGeom, Geometry};

    #[test]
    fn circle_center_mode_halves_diameter() {
        let c = circle(ShapeStyle::default(), Point::xy(5.0, 5.0), 10.0, CoordMode::Center).unwrap();
        assert_eq!(c.geometry(), &Geometry::Ellipse(EllipseGeom::new(Point::xy(5.0, 5.0), 5.0, 5.0)));
    }

    #[test]
    fn circle_rejects_corners() {
        let err = circle(ShapeStyle::default(), Point::zero(), 3.0, CoordMode::Corners).unwrap_err();
        assert!(matches!(err, DrawError::InvalidMode { primitive: "circle", .. }));
    }
}
