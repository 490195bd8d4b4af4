use crate::coords::Point;
use crate::curve::{CurveSettings, sample_curve};
use crate::shape::{BezierGeom, Shape};
use crate::style::ShapeStyle;

/// Single point, drawn as a 1×1 square.
pub fn point(style: ShapeStyle, at: Point) -> Shape {
    Shape::point(at, style)
}

/// Two-vertex open path.
pub fn line(style: ShapeStyle, p1: Point, p2: Point) -> Shape {
    Shape::path(vec![p1, p2], style)
}

/// Closed polygon built through an edit session.
fn closed_polygon(style: ShapeStyle, corners: &[Point]) -> Shape {
    let mut shape = Shape::empty(style);
    if let Ok(mut editor) = shape.edit() {
        for &p in corners {
            editor.add_vertex(p);
        }
    }
    shape
}

pub fn triangle(style: ShapeStyle, p1: Point, p2: Point, p3: Point) -> Shape {
    closed_polygon(style, &[p1, p2, p3])
}

pub fn quad(style: ShapeStyle, p1: Point, p2: Point, p3: Point, p4: Point) -> Shape {
    closed_polygon(style, &[p1, p2, p3, p4])
}

/// Cubic bezier; control points are stored verbatim.
pub fn bezier(style: ShapeStyle, start: Point, cp1: Point, cp2: Point, stop: Point) -> Shape {
    Shape::bezier(BezierGeom::new(start, cp1, cp2, stop), style)
}

/// Catmull-Rom segment between `p2` and `p3`, sampled into an open path of
/// `settings.resolution + 1` vertices.
pub fn curve(style: ShapeStyle, p1: Point, p2: Point, p3: Point, p4: Point, settings: CurveSettings) -> Shape {
    Shape::path(sample_curve(p1, p2, p3, p4, settings), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Attrib, ShapeKind};

    const EPS: f32 = 1e-5;

    #[test]
    fn triangle_is_closed_polygon() {
        let t = triangle(
            ShapeStyle::default(),
            Point::xy(0.0, 0.0),
            Point::xy(4.0, 0.0),
            Point::xy(2.0, 3.0),
        );
        assert_eq!(t.kind(), ShapeKind::Polygon);
        assert_eq!(t.vertices().len(), 3);
        assert!(t.attribs.contains(Attrib::Closed));
    }

    #[test]
    fn quad_keeps_vertex_order() {
        let pts = [Point::xy(0.0, 0.0), Point::xy(1.0, 0.0), Point::xy(1.0, 1.0), Point::xy(0.0, 1.0)];
        let q = quad(ShapeStyle::default(), pts[0], pts[1], pts[2], pts[3]);
        assert_eq!(q.vertices(), &pts);
    }

    #[test]
    fn line_is_open_stroke_only_path() {
        let l = line(ShapeStyle::default(), Point::xy(0.0, 0.0), Point::xy(5.0, 5.0));
        assert_eq!(l.kind(), ShapeKind::Path);
        assert!(!l.attribs.contains(Attrib::Closed));
        assert!(!l.is_fillable());
    }

    #[test]
    fn curve_endpoints_and_vertex_count() {
        let (p1, p2, p3, p4) = (
            Point::xy(5.0, 26.0),
            Point::xy(73.0, 24.0),
            Point::xy(73.0, 61.0),
            Point::xy(15.0, 65.0),
        );
        for steps in [1, 4, 20] {
            let settings = CurveSettings { resolution: steps, ..CurveSettings::default() };
            let c = curve(ShapeStyle::default(), p1, p2, p3, p4, settings);
            let v = c.vertices();
            assert_eq!(v.len(), steps as usize + 1);
            assert!(v[0].approx_eq(p2, EPS));
            assert!(v[v.len() - 1].approx_eq(p3, EPS));
        }
    }
}
