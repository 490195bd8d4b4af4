use crate::coords::Point;
use crate::error::{DrawError, Result};
use crate::shape::Shape;

use super::ShapeDefaults;
use super::arc::{DEFAULT_ARC_MODE, arc, parse_arc_mode};
use super::ellipse::{circle, ellipse};
use super::path::{bezier, curve, line, point, quad, triangle};
use super::rect::{rect, square};

/// Creates a shape by kind name from flat numeric arguments.
///
/// `kind = None` returns an empty polygon to be filled through
/// [`Shape::edit`]. Argument layouts (coordinates are `x, y` pairs):
///
/// | kind       | args                                   |
/// |------------|----------------------------------------|
/// | `point`    | `x y` or `x y z`                       |
/// | `line`     | `x1 y1 x2 y2`                          |
/// | `triangle` | three points                           |
/// | `quad`     | four points                            |
/// | `rect`     | `x y a b` (read per rect mode)         |
/// | `square`   | `x y side`                             |
/// | `ellipse`  | `x y a b` (read per ellipse mode)      |
/// | `circle`   | `x y extent`                           |
/// | `arc`      | `x y w h start stop`                   |
/// | `bezier`   | four points                            |
/// | `curve`    | four points                            |
///
/// The shape is returned undrawn.
pub fn create_shape(defaults: &ShapeDefaults, kind: Option<&str>, args: &[f32]) -> Result<Shape> {
    let style = defaults.style;
    let Some(kind) = kind else {
        return Ok(Shape::empty(style));
    };

    let name = kind.trim().to_ascii_lowercase();
    match name.as_str() {
        "point" => match *args {
            [x, y] => Ok(point(style, Point::xy(x, y))),
            [x, y, z] => Ok(point(style, Point::new(x, y, z))),
            _ => Err(arity("point", "2 or 3", args)),
        },
        "line" => {
            let p = points::<2>("line", "4", args)?;
            Ok(line(style, p[0], p[1]))
        }
        "triangle" => {
            let p = points::<3>("triangle", "6", args)?;
            Ok(triangle(style, p[0], p[1], p[2]))
        }
        "quad" => {
            let p = points::<4>("quad", "8", args)?;
            Ok(quad(style, p[0], p[1], p[2], p[3]))
        }
        "rect" => {
            let [x, y, a, b] = exact::<4>("rect", "4", args)?;
            Ok(rect(style, Point::xy(x, y), a, b, defaults.rect_mode))
        }
        "square" => {
            let [x, y, side] = exact::<3>("square", "3", args)?;
            square(style, Point::xy(x, y), side, defaults.rect_mode)
        }
        "ellipse" => {
            let [x, y, a, b] = exact::<4>("ellipse", "4", args)?;
            Ok(ellipse(style, Point::xy(x, y), a, b, defaults.ellipse_mode))
        }
        "circle" => {
            let [x, y, extent] = exact::<3>("circle", "3", args)?;
            circle(style, Point::xy(x, y), extent, defaults.ellipse_mode)
        }
        "arc" => {
            let [x, y, w, h, start, stop] = exact::<6>("arc", "6", args)?;
            let mode = parse_arc_mode(DEFAULT_ARC_MODE)?;
            arc(style, Point::xy(x, y), w, h, start, stop, mode, defaults.ellipse_mode)
        }
        "bezier" => {
            let p = points::<4>("bezier", "8", args)?;
            Ok(bezier(style, p[0], p[1], p[2], p[3]))
        }
        "curve" => {
            let p = points::<4>("curve", "8", args)?;
            Ok(curve(style, p[0], p[1], p[2], p[3], defaults.curve))
        }
        _ => Err(DrawError::UnknownShapeKind(kind.to_string())),
    }
}

fn arity(kind: &'static str, expected: &'static str, args: &[f32]) -> DrawError {
    log::debug!("create_shape({kind}): rejected {} argument(s)", args.len());
    DrawError::ArgumentCount { kind, expected, got: args.len() }
}

fn exact<const N: usize>(kind: &'static str, expected: &'static str, args: &[f32]) -> Result<[f32; N]> {
    <[f32; N]>::try_from(args).map_err(|_| arity(kind, expected, args))
}

/// Reads `N` consecutive `x, y` pairs.
fn points<const N: usize>(kind: &'static str, expected: &'static str, args: &[f32]) -> Result<[Point; N]> {
    if args.len() != N * 2 {
        return Err(arity(kind, expected, args));
    }
    Ok(core::array::from_fn(|i| Point::xy(args[2 * i], args[2 * i + 1])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::CoordMode;
    use crate::shape::ShapeKind;

    fn defaults() -> ShapeDefaults {
        ShapeDefaults::default()
    }

    #[test]
    fn none_kind_yields_empty_editable_polygon() {
        let mut s = create_shape(&defaults(), None, &[]).unwrap();
        assert_eq!(s.kind(), ShapeKind::Polygon);
        assert!(s.vertices().is_empty());
        s.edit().unwrap().vertex(1.0, 2.0);
        assert_eq!(s.vertices().len(), 1);
    }

    #[test]
    fn dispatches_by_kind_name() {
        let cases: [(&str, &[f32], ShapeKind); 11] = [
            ("point", &[1.0, 2.0], ShapeKind::Point),
            ("line", &[0.0, 0.0, 1.0, 1.0], ShapeKind::Path),
            ("triangle", &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], ShapeKind::Polygon),
            ("quad", &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0], ShapeKind::Polygon),
            ("rect", &[0.0, 0.0, 4.0, 2.0], ShapeKind::Rect),
            ("square", &[0.0, 0.0, 4.0], ShapeKind::Rect),
            ("ellipse", &[0.0, 0.0, 4.0, 2.0], ShapeKind::Ellipse),
            ("circle", &[0.0, 0.0, 4.0], ShapeKind::Ellipse),
            ("arc", &[0.0, 0.0, 4.0, 2.0, 0.0, 1.0], ShapeKind::Arc),
            ("bezier", &[0.0, 0.0, 1.0, 1.0, 2.0, 1.0, 3.0, 0.0], ShapeKind::Bezier),
            ("curve", &[0.0, 0.0, 1.0, 1.0, 2.0, 1.0, 3.0, 0.0], ShapeKind::Path),
        ];
        for (kind, args, expected) in cases {
            let s = create_shape(&defaults(), Some(kind), args).unwrap();
            assert_eq!(s.kind(), expected, "kind {kind}");
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            create_shape(&defaults(), Some("box"), &[]).unwrap_err(),
            DrawError::UnknownShapeKind("box".into())
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = create_shape(&defaults(), Some("line"), &[0.0, 0.0, 1.0]).unwrap_err();
        assert_eq!(err, DrawError::ArgumentCount { kind: "line", expected: "4", got: 3 });
    }

    #[test]
    fn honors_context_modes() {
        let d = ShapeDefaults { rect_mode: CoordMode::Corners, ..defaults() };
        assert!(matches!(
            create_shape(&d, Some("square"), &[0.0, 0.0, 1.0]),
            Err(DrawError::InvalidMode { .. })
        ));
    }
}
