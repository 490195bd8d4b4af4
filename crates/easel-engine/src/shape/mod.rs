//! Shape model.
//!
//! Responsibilities:
//! - one `Shape` record for every drawable, tagged by `ShapeKind`
//! - geometry as a sum type so vertex-based and parametric payloads never coexist
//! - frozen style, local transform and owned children
//!
//! Extending the model:
//! - add a payload struct in its own file under `shape::*`
//! - add a `Geometry` variant and a `ShapeKind`
//! - add a matching branch in `render::dispatch`

mod arc;
mod attribs;
mod bezier;
mod edit;
mod ellipse;
mod rect;

pub use arc::ArcGeom;
pub use attribs::{Attrib, Attribs};
pub use bezier::BezierGeom;
pub use edit::ShapeEditor;
pub use ellipse::EllipseGeom;
pub use rect::RectGeom;

use crate::coords::{Mat4, Point};
use crate::error::{DrawError, Result};
use crate::style::ShapeStyle;

/// Shape discriminant. Fixed at construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// Generic polygon built vertex by vertex (closed by default).
    Polygon,
    Point,
    /// Open polyline: lines and sampled curves.
    Path,
    Rect,
    Ellipse,
    Arc,
    Bezier,
}

impl ShapeKind {
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Polygon => "polygon",
            ShapeKind::Point => "point",
            ShapeKind::Path => "path",
            ShapeKind::Rect => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Arc => "arc",
            ShapeKind::Bezier => "bezier",
        }
    }

    /// True for kinds whose geometry is a vertex list.
    #[inline]
    pub const fn has_vertices(self) -> bool {
        matches!(self, ShapeKind::Polygon | ShapeKind::Point | ShapeKind::Path)
    }
}

/// Kind-specific geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Vertices(Vec<Point>),
    Rect(RectGeom),
    Ellipse(EllipseGeom),
    Arc(ArcGeom),
    Bezier(BezierGeom),
}

/// A drawable: geometry, attributes, frozen style, local transform and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    geometry: Geometry,
    pub attribs: Attribs,
    pub style: ShapeStyle,
    /// Local transform, composed under the parent's (or the global view) transform.
    pub transform: Mat4,
    /// Drawn after this shape, depth-first, in insertion order.
    pub children: Vec<Shape>,
    /// Invisible shapes (and their children) are skipped by the renderer.
    pub visible: bool,
}

impl Shape {
    fn from_parts(kind: ShapeKind, geometry: Geometry, attribs: Attribs, style: ShapeStyle) -> Self {
        Self {
            kind,
            geometry,
            attribs,
            style,
            transform: Mat4::identity(),
            children: Vec::new(),
            visible: true,
        }
    }

    // ── constructors ──────────────────────────────────────────────────────

    /// Empty, closed polygon for vertex-by-vertex construction via [`edit`](Self::edit).
    pub fn empty(style: ShapeStyle) -> Self {
        Self::polygon(Vec::new(), style)
    }

    pub fn polygon(vertices: Vec<Point>, style: ShapeStyle) -> Self {
        Self::from_parts(ShapeKind::Polygon, Geometry::Vertices(vertices), Attrib::Closed.into(), style)
    }

    pub fn point(at: Point, style: ShapeStyle) -> Self {
        Self::from_parts(ShapeKind::Point, Geometry::Vertices(vec![at]), Attrib::Point.into(), style)
    }

    pub fn path(vertices: Vec<Point>, style: ShapeStyle) -> Self {
        Self::from_parts(ShapeKind::Path, Geometry::Vertices(vertices), Attrib::Path.into(), style)
    }

    pub fn rect(geom: RectGeom, style: ShapeStyle) -> Self {
        Self::from_parts(ShapeKind::Rect, Geometry::Rect(geom), Attrib::Closed.into(), style)
    }

    pub fn ellipse(geom: EllipseGeom, style: ShapeStyle) -> Self {
        Self::from_parts(ShapeKind::Ellipse, Geometry::Ellipse(geom), Attribs::empty(), style)
    }

    pub fn arc(geom: ArcGeom, attribs: Attribs, style: ShapeStyle) -> Self {
        Self::from_parts(ShapeKind::Arc, Geometry::Arc(geom), attribs, style)
    }

    pub fn bezier(geom: BezierGeom, style: ShapeStyle) -> Self {
        Self::from_parts(ShapeKind::Bezier, Geometry::Bezier(geom), Attrib::Path.into(), style)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Vertex list for vertex-based kinds; empty for parametric kinds.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        match &self.geometry {
            Geometry::Vertices(v) => v,
            _ => &[],
        }
    }

    /// Shapes carrying the `path` attribute are stroke-only.
    #[inline]
    pub fn is_fillable(&self) -> bool {
        !self.attribs.contains(Attrib::Path)
    }

    // ── hierarchy ─────────────────────────────────────────────────────────

    pub fn add_child(&mut self, child: Shape) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Total number of shapes in this tree, including `self`.
    pub fn tree_len(&self) -> usize {
        1 + self.children.iter().map(Shape::tree_len).sum::<usize>()
    }

    // ── local transform ───────────────────────────────────────────────────

    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.transform = self.transform * Mat4::translation(x, y, 0.0);
        self
    }

    /// Rotates by `theta` radians about the local origin.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        self.transform = self.transform * Mat4::rotation_z(theta);
        self
    }

    pub fn scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.transform = self.transform * Mat4::scaling(sx, sy, 1.0);
        self
    }

    pub fn apply_matrix(&mut self, m: Mat4) -> &mut Self {
        self.transform = self.transform * m;
        self
    }

    pub fn reset_transform(&mut self) -> &mut Self {
        self.transform = Mat4::identity();
        self
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Opens a scoped edit session; staged vertices are appended when the
    /// returned editor is dropped.
    ///
    /// Fails with [`DrawError::NotEditable`] for parametric kinds.
    pub fn edit(&mut self) -> Result<ShapeEditor<'_>> {
        match self.geometry {
            Geometry::Vertices(_) => Ok(ShapeEditor::new(self)),
            _ => Err(DrawError::NotEditable(self.kind.name())),
        }
    }

    pub(crate) fn vertices_mut(&mut self) -> Option<&mut Vec<Point>> {
        match &mut self.geometry {
            Geometry::Vertices(v) => Some(v),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_mismatched_geometry(kind: ShapeKind, geometry: Geometry) -> Self {
        Self::from_parts(kind, geometry, Attribs::empty(), ShapeStyle::default())
    }
}
