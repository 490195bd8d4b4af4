use crate::coords::Point;
use crate::error::{DrawError, Result};
use crate::shape::{ArcGeom, Attrib, Attribs, Shape};
use crate::style::ShapeStyle;

use super::mode::{CoordMode, resolve_arc_ellipse};

/// Arc mode used when the caller does not pass one.
pub const DEFAULT_ARC_MODE: &str = "OPEN PIE";

/// Parses a whitespace-separated combination of OPEN, CHORD and PIE.
pub fn parse_arc_mode(mode: &str) -> Result<Attribs> {
    let attribs: Attribs = mode
        .parse()
        .map_err(|_| DrawError::invalid_mode("arc", mode))?;
    let allowed = [Attrib::Open, Attrib::Chord, Attrib::Pie];
    if attribs.iter().any(|a| !allowed.contains(&a)) {
        return Err(DrawError::invalid_mode("arc", mode));
    }
    Ok(attribs)
}

/// Builds an arc of the ellipse described by `(coordinate, w, h)` under
/// `ellipse_mode`, sweeping from `start` to `stop` radians.
#[allow(clippy::too_many_arguments)]
pub fn arc(
    style: ShapeStyle,
    coordinate: Point,
    w: f32,
    h: f32,
    start: f32,
    stop: f32,
    arc_mode: Attribs,
    ellipse_mode: CoordMode,
) -> Result<Shape> {
    let e = resolve_arc_ellipse(ellipse_mode, coordinate, w, h)?;
    let geom = ArcGeom::new(e.center, e.rx, e.ry, start, stop);
    Ok(Shape::arc(geom, arc_mode, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Geometry, ShapeKind};

    #[test]
    fn default_mode_is_open_pie() {
        let a = parse_arc_mode(DEFAULT_ARC_MODE).unwrap();
        assert!(a.contains(Attrib::Open) && a.contains(Attrib::Pie));
    }

    #[test]
    fn arc_mode_rejects_non_arc_attributes() {
        assert!(parse_arc_mode("open closed").is_err());
        assert!(parse_arc_mode("slice").is_err());
        assert!(parse_arc_mode("chord").is_ok());
    }

    #[test]
    fn arc_corner_mode_recenters() {
        let s = arc(
            ShapeStyle::default(),
            Point::xy(0.0, 0.0),
            20.0,
            10.0,
            0.0,
            1.0,
            Attribs::from(Attrib::Open),
            CoordMode::Corner,
        )
        .unwrap();
        assert_eq!(s.kind(), ShapeKind::Arc);
        let Geometry::Arc(g) = s.geometry() else { panic!("arc geometry expected") };
        assert_eq!((g.center, g.rx, g.ry), (Point::xy(10.0, 5.0), 10.0, 5.0));
    }

    #[test]
    fn arc_rejects_corners_ellipse_mode() {
        let err = arc(
            ShapeStyle::default(),
            Point::zero(),
            1.0,
            1.0,
            0.0,
            1.0,
            Attribs::empty(),
            CoordMode::Corners,
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::InvalidMode { .. }));
    }
}
