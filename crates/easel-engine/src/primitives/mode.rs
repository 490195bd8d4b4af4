use core::fmt;
use core::str::FromStr;

use crate::coords::Point;
use crate::error::{DrawError, Result};
use crate::shape::{EllipseGeom, RectGeom};

/// How the numeric arguments of rect/ellipse/image calls are interpreted.
///
/// Given `(coordinate, a, b)`:
/// - `Corner`: `coordinate` is the top-left corner, `(a, b)` the full extents.
/// - `Center`: `coordinate` is the center, `(a, b)` the full extents.
/// - `Radius`: `coordinate` is the center, `(a, b)` the half-extents.
/// - `Corners`: `coordinate` is one corner, `(a, b)` the opposite corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CoordMode {
    Corner,
    Center,
    Radius,
    Corners,
}

impl CoordMode {
    pub const fn name(self) -> &'static str {
        match self {
            CoordMode::Corner => "CORNER",
            CoordMode::Center => "CENTER",
            CoordMode::Radius => "RADIUS",
            CoordMode::Corners => "CORNERS",
        }
    }
}

impl FromStr for CoordMode {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CORNER" => Ok(CoordMode::Corner),
            "CENTER" => Ok(CoordMode::Center),
            "RADIUS" => Ok(CoordMode::Radius),
            "CORNERS" => Ok(CoordMode::Corners),
            _ => Err(DrawError::invalid_mode("coordinate", s)),
        }
    }
}

impl fmt::Display for CoordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves rect arguments to a canonical corner + signed extents.
pub fn resolve_rect(mode: CoordMode, coordinate: Point, a: f32, b: f32) -> RectGeom {
    match mode {
        CoordMode::Corner => RectGeom::new(coordinate, a, b),
        CoordMode::Center => {
            let corner = Point::new(coordinate.x - a / 2.0, coordinate.y - b / 2.0, coordinate.z);
            RectGeom::new(corner, a, b)
        }
        CoordMode::Radius => {
            let corner = Point::new(coordinate.x - a, coordinate.y - b, coordinate.z);
            RectGeom::new(corner, 2.0 * a, 2.0 * b)
        }
        // Negative extents pass through: the rectangle is mirrored, not rejected.
        CoordMode::Corners => RectGeom::new(coordinate, a - coordinate.x, b - coordinate.y),
    }
}

/// Resolves ellipse arguments to a canonical center + half-extents.
///
/// CORNERS is handled as CORNER over the box spanned by the two corners.
pub fn resolve_ellipse(mode: CoordMode, coordinate: Point, a: f32, b: f32) -> EllipseGeom {
    match mode {
        CoordMode::Corner => corner_ellipse(coordinate, a, b),
        CoordMode::Center => EllipseGeom::new(coordinate, a / 2.0, b / 2.0),
        CoordMode::Radius => EllipseGeom::new(coordinate, a, b),
        CoordMode::Corners => corner_ellipse(coordinate, a - coordinate.x, b - coordinate.y),
    }
}

fn corner_ellipse(corner: Point, w: f32, h: f32) -> EllipseGeom {
    let center = Point::new(corner.x + w / 2.0, corner.y + h / 2.0, corner.z);
    EllipseGeom::new(center, w / 2.0, h / 2.0)
}

/// Resolves the parent ellipse of an arc. CORNERS is not defined for arcs.
pub fn resolve_arc_ellipse(mode: CoordMode, coordinate: Point, w: f32, h: f32) -> Result<EllipseGeom> {
    match mode {
        CoordMode::Corners => Err(DrawError::invalid_mode("arc ellipse", mode)),
        _ => Ok(resolve_ellipse(mode, coordinate, w, h)),
    }
}

/// Resolves image placement to `(x, y, w, h)`. RADIUS is not defined for images.
pub fn resolve_image(mode: CoordMode, location: Point, a: f32, b: f32) -> Result<(f32, f32, f32, f32)> {
    match mode {
        CoordMode::Corner => Ok((location.x, location.y, a, b)),
        CoordMode::Center => Ok((location.x - a / 2.0, location.y - b / 2.0, a, b)),
        CoordMode::Corners => Ok((location.x, location.y, a - location.x, b - location.y)),
        CoordMode::Radius => Err(DrawError::invalid_mode("image", mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_center_matches_equivalent_corner() {
        let c = Point::xy(50.0, 40.0);
        let (w, h) = (30.0, 10.0);
        let centered = resolve_rect(CoordMode::Center, c, w, h);
        let cornered = resolve_rect(CoordMode::Corner, Point::xy(c.x - w / 2.0, c.y - h / 2.0), w, h);
        assert_eq!(centered, cornered);
        assert_eq!(centered, RectGeom::new(Point::xy(35.0, 35.0), 30.0, 10.0));
    }

    #[test]
    fn rect_radius_doubles_half_extents() {
        let r = resolve_rect(CoordMode::Radius, Point::xy(50.0, 40.0), 15.0, 5.0);
        assert_eq!(r, RectGeom::new(Point::xy(35.0, 35.0), 30.0, 10.0));
    }

    #[test]
    fn rect_corners_computes_extent_from_opposite_corner() {
        let r = resolve_rect(CoordMode::Corners, Point::xy(35.0, 35.0), 65.0, 45.0);
        assert_eq!(r, RectGeom::new(Point::xy(35.0, 35.0), 30.0, 10.0));
    }

    #[test]
    fn rect_corners_keeps_negative_extents() {
        let r = resolve_rect(CoordMode::Corners, Point::xy(100.0, 80.0), 60.0, 20.0);
        assert_eq!(r.width, -40.0);
        assert_eq!(r.height, -60.0);
        assert_eq!(r.corner, Point::xy(100.0, 80.0));
    }

    #[test]
    fn rect_keeps_z() {
        let r = resolve_rect(CoordMode::Center, Point::new(10.0, 10.0, 3.0), 4.0, 4.0);
        assert_eq!(r.corner.z, 3.0);
    }

    // ── ellipse ───────────────────────────────────────────────────────────

    #[test]
    fn ellipse_modes_agree_on_same_box() {
        let expected = EllipseGeom::new(Point::xy(50.0, 40.0), 15.0, 5.0);
        assert_eq!(resolve_ellipse(CoordMode::Center, Point::xy(50.0, 40.0), 30.0, 10.0), expected);
        assert_eq!(resolve_ellipse(CoordMode::Radius, Point::xy(50.0, 40.0), 15.0, 5.0), expected);
        assert_eq!(resolve_ellipse(CoordMode::Corner, Point::xy(35.0, 35.0), 30.0, 10.0), expected);
        assert_eq!(resolve_ellipse(CoordMode::Corners, Point::xy(35.0, 35.0), 65.0, 45.0), expected);
    }

    #[test]
    fn arc_rejects_corners() {
        let err = resolve_arc_ellipse(CoordMode::Corners, Point::zero(), 1.0, 1.0).unwrap_err();
        assert!(matches!(err, DrawError::InvalidMode { .. }));
        assert!(resolve_arc_ellipse(CoordMode::Radius, Point::zero(), 1.0, 1.0).is_ok());
    }

    // ── image ─────────────────────────────────────────────────────────────

    #[test]
    fn image_center_offsets_by_half_size() {
        assert_eq!(
            resolve_image(CoordMode::Center, Point::xy(100.0, 100.0), 40.0, 20.0),
            Ok((80.0, 90.0, 40.0, 20.0))
        );
        assert!(resolve_image(CoordMode::Radius, Point::zero(), 1.0, 1.0).is_err());
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_known_and_unknown_modes() {
        assert_eq!("corners".parse::<CoordMode>(), Ok(CoordMode::Corners));
        assert!(matches!(
            "DIAGONAL".parse::<CoordMode>(),
            Err(DrawError::InvalidMode { primitive: "coordinate", .. })
        ));
    }
}
