use crate::canvas::VectorCanvas;
use crate::coords::Mat4;
use crate::error::{DrawError, Result};
use crate::shape::{Attrib, Geometry, Shape, ShapeKind};

/// Renders `shape` and its children depth-first.
///
/// `parent` is the transform the shape is composed under: the global view
/// transform for a top-level shape, the parent's active transform for a child.
/// `smooth` is the context's anti-aliasing flag.
///
/// Invisible shapes are skipped together with their children. A shape whose
/// kind and geometry disagree yields [`DrawError::FatalInternalError`]; the
/// canvas is left balanced in that case.
pub fn render_shape<C: VectorCanvas + ?Sized>(
    canvas: &mut C,
    shape: &Shape,
    parent: Mat4,
    smooth: bool,
) -> Result<()> {
    if !shape.visible {
        return Ok(());
    }

    let active = parent * shape.transform;

    canvas.save();
    canvas.transform(active.to_affine());
    canvas.shape_anti_alias(smooth);
    canvas.begin_path();

    if let Err(e) = emit_geometry(canvas, shape) {
        canvas.restore();
        log::error!("render: {e}");
        return Err(e);
    }

    let chord = shape.kind() == ShapeKind::Arc && shape.attribs.contains(Attrib::Chord);
    if chord || shape.attribs.contains(Attrib::Closed) {
        canvas.close_path();
    }
    canvas.restore();

    let style = &shape.style;
    canvas.line_cap(style.stroke_cap);
    canvas.line_join(style.stroke_join);
    canvas.stroke_width(style.stroke_weight);

    if shape.is_fillable() {
        if let Some(fill) = style.fill {
            canvas.fill_color(fill.normalized());
            canvas.fill();
        }
    }
    if let Some(stroke) = style.stroke {
        canvas.stroke_color(stroke.normalized());
        canvas.stroke();
    }

    for child in &shape.children {
        render_shape(canvas, child, active, smooth)?;
    }
    Ok(())
}

fn emit_geometry<C: VectorCanvas + ?Sized>(canvas: &mut C, shape: &Shape) -> Result<()> {
    match (shape.kind(), shape.geometry()) {
        (ShapeKind::Point, Geometry::Vertices(v)) => {
            let Some(p) = v.first() else {
                return Err(mismatch(shape, "point without a vertex"));
            };
            canvas.shape_anti_alias(false);
            canvas.rect(p.x, p.y, 1.0, 1.0);
        }
        (ShapeKind::Polygon | ShapeKind::Path, Geometry::Vertices(v)) => {
            let mut it = v.iter();
            if let Some(first) = it.next() {
                canvas.move_to(first.x, first.y);
                for p in it {
                    canvas.line_to(p.x, p.y);
                }
            }
        }
        (ShapeKind::Arc, Geometry::Arc(a)) => {
            canvas.arc(a.center.x, a.center.y, a.rx, a.ry, a.start, a.stop);
            if shape.attribs.contains(Attrib::Pie) {
                canvas.line_to(a.center.x, a.center.y);
            }
        }
        (ShapeKind::Ellipse, Geometry::Ellipse(e)) => {
            canvas.ellipse(e.center.x, e.center.y, e.rx, e.ry);
        }
        (ShapeKind::Rect, Geometry::Rect(r)) => {
            canvas.rect(r.corner.x, r.corner.y, r.width, r.height);
        }
        (ShapeKind::Bezier, Geometry::Bezier(b)) => {
            canvas.move_to(b.start.x, b.start.y);
            canvas.bezier_to(b.cp1.x, b.cp1.y, b.cp2.x, b.cp2.y, b.stop.x, b.stop.y);
        }
        (kind, _) => return Err(mismatch(shape, &format!("{} with foreign geometry", kind.name()))),
    }
    Ok(())
}

fn mismatch(shape: &Shape, what: &str) -> DrawError {
    DrawError::FatalInternalError(format!("{what} (attribs: {})", shape.attribs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasCmd, RecordingCanvas};
    use crate::coords::Point;
    use crate::paint::Color;
    use crate::shape::{ArcGeom, Attribs, RectGeom};
    use crate::style::{ShapeStyle, StrokeCap, StrokeJoin};

    fn render(shape: &Shape) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        render_shape(&mut canvas, shape, Mat4::identity(), true).unwrap();
        canvas
    }

    fn arc_shape(attribs: Attribs) -> Shape {
        Shape::arc(
            ArcGeom::new(Point::xy(50.0, 50.0), 20.0, 10.0, 0.0, std::f32::consts::PI),
            attribs,
            ShapeStyle::default(),
        )
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn pie_arc_draws_segment_to_center() {
        let c = render(&arc_shape("open pie".parse().unwrap()));
        assert!(c.commands().contains(&CanvasCmd::LineTo { x: 50.0, y: 50.0 }));
    }

    #[test]
    fn open_arc_has_no_center_segment() {
        let c = render(&arc_shape(Attrib::Open.into()));
        assert_eq!(c.count(|cmd| matches!(cmd, CanvasCmd::LineTo { .. })), 0);
        assert_eq!(c.count(|cmd| *cmd == CanvasCmd::ClosePath), 0);
    }

    #[test]
    fn chord_arc_closes_path() {
        let c = render(&arc_shape(Attrib::Chord.into()));
        assert_eq!(c.count(|cmd| *cmd == CanvasCmd::ClosePath), 1);
    }

    #[test]
    fn negative_rect_extent_is_preserved() {
        let r = Shape::rect(RectGeom::new(Point::xy(10.0, 10.0), -5.0, 4.0), ShapeStyle::default());
        let c = render(&r);
        assert!(c.commands().contains(&CanvasCmd::Rect { x: 10.0, y: 10.0, w: -5.0, h: 4.0 }));
    }

    #[test]
    fn point_is_unit_rect_without_anti_aliasing() {
        let p = Shape::point(Point::xy(3.0, 4.0), ShapeStyle::default());
        let cmds = render(&p).take();
        let rect_at = cmds.iter().position(|c| *c == CanvasCmd::Rect { x: 3.0, y: 4.0, w: 1.0, h: 1.0 });
        let aa_off = cmds.iter().position(|c| *c == CanvasCmd::ShapeAntiAlias(false));
        assert!(aa_off.unwrap() < rect_at.unwrap());
    }

    #[test]
    fn polygon_is_closed_after_its_vertices() {
        let tri = Shape::polygon(
            vec![Point::xy(0.0, 0.0), Point::xy(4.0, 0.0), Point::xy(0.0, 3.0)],
            ShapeStyle::default(),
        );
        let cmds = render(&tri).take();
        let path: Vec<_> = cmds.iter().filter(|c| c.is_path()).cloned().collect();
        assert_eq!(
            path,
            vec![
                CanvasCmd::BeginPath,
                CanvasCmd::MoveTo { x: 0.0, y: 0.0 },
                CanvasCmd::LineTo { x: 4.0, y: 0.0 },
                CanvasCmd::LineTo { x: 0.0, y: 3.0 },
                CanvasCmd::ClosePath,
            ]
        );
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn absent_colors_emit_no_paint() {
        let style = ShapeStyle { fill: None, stroke: None, ..ShapeStyle::default() };
        let r = Shape::rect(RectGeom::new(Point::zero(), 1.0, 1.0), style);
        let c = render(&r);
        assert_eq!(c.count(CanvasCmd::is_paint), 0);
    }

    #[test]
    fn path_shapes_are_never_filled() {
        let line = Shape::path(vec![Point::zero(), Point::xy(5.0, 5.0)], ShapeStyle::default());
        let c = render(&line);
        assert_eq!(c.count(|cmd| *cmd == CanvasCmd::Fill), 0);
        assert_eq!(c.count(|cmd| *cmd == CanvasCmd::Stroke), 1);
    }

    #[test]
    fn paint_state_follows_frozen_style() {
        let style = ShapeStyle {
            fill: Some(Color::rgb(1.0, 0.0, 0.0)),
            stroke_weight: 3.0,
            stroke_cap: StrokeCap::Round,
            stroke_join: StrokeJoin::Square,
            ..ShapeStyle::default()
        };
        let r = Shape::rect(RectGeom::new(Point::zero(), 1.0, 1.0), style);
        let cmds = render(&r).take();
        assert!(cmds.contains(&CanvasCmd::LineCap(StrokeCap::Round)));
        assert!(cmds.contains(&CanvasCmd::LineJoin(StrokeJoin::Square)));
        assert!(cmds.contains(&CanvasCmd::StrokeWidth(3.0)));
        assert!(cmds.contains(&CanvasCmd::FillColor([1.0, 0.0, 0.0, 1.0])));
    }

    #[test]
    fn save_and_restore_are_balanced() {
        let c = render(&arc_shape(Attribs::empty()));
        assert_eq!(c.save_depth(), 0);
        assert_eq!(
            c.count(|cmd| *cmd == CanvasCmd::Save),
            c.count(|cmd| *cmd == CanvasCmd::Restore)
        );
    }

    // ── hierarchy ─────────────────────────────────────────────────────────

    #[test]
    fn children_render_depth_first_with_composed_transforms() {
        let style = ShapeStyle::default();
        let mut root = Shape::point(Point::zero(), style);
        root.translate(10.0, 0.0);
        let mut child = Shape::point(Point::xy(1.0, 0.0), style);
        child.translate(0.0, 5.0);
        child.add_child(Shape::point(Point::xy(2.0, 0.0), style));
        root.add_child(child);
        root.add_child(Shape::point(Point::xy(3.0, 0.0), style));

        let cmds = render(&root).take();
        let rects: Vec<f32> = cmds
            .iter()
            .filter_map(|c| match c {
                CanvasCmd::Rect { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(rects, vec![0.0, 1.0, 2.0, 3.0]);

        let transforms: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                CanvasCmd::Transform(t) => Some(*t),
                _ => None,
            })
            .collect();
        assert_eq!(transforms[0], [1.0, 0.0, 0.0, 1.0, 10.0, 0.0]);
        assert_eq!(transforms[1], [1.0, 0.0, 0.0, 1.0, 10.0, 5.0]);
        assert_eq!(transforms[2], [1.0, 0.0, 0.0, 1.0, 10.0, 5.0]);
        assert_eq!(transforms[3], [1.0, 0.0, 0.0, 1.0, 10.0, 0.0]);
    }

    #[test]
    fn invisible_shape_hides_its_subtree() {
        let mut root = Shape::point(Point::zero(), ShapeStyle::default());
        root.add_child(Shape::point(Point::xy(1.0, 1.0), ShapeStyle::default()));
        root.visible = false;
        assert!(render(&root).commands().is_empty());
    }

    // ── invariants ────────────────────────────────────────────────────────

    #[test]
    fn kind_geometry_mismatch_is_fatal() {
        let bad = Shape::with_mismatched_geometry(
            ShapeKind::Ellipse,
            Geometry::Rect(RectGeom::new(Point::zero(), 1.0, 1.0)),
        );
        let mut canvas = RecordingCanvas::new();
        let err = render_shape(&mut canvas, &bad, Mat4::identity(), true).unwrap_err();
        assert!(matches!(err, DrawError::FatalInternalError(_)));
        assert_eq!(canvas.save_depth(), 0);
        assert_eq!(canvas.count(CanvasCmd::is_paint), 0);
    }
}
