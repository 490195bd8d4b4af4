use crate::coords::Point;

use super::Shape;

/// Scoped vertex edit session returned by [`Shape::edit`].
///
/// Vertices are staged and committed to the shape when the editor is dropped,
/// so a session abandoned by `?` still leaves the shape consistent.
pub struct ShapeEditor<'a> {
    shape: &'a mut Shape,
    pending: Vec<Point>,
}

impl<'a> ShapeEditor<'a> {
    pub(super) fn new(shape: &'a mut Shape) -> Self {
        Self { shape, pending: Vec::new() }
    }

    pub fn add_vertex(&mut self, p: impl Into<Point>) -> &mut Self {
        self.pending.push(p.into());
        self
    }

    #[inline]
    pub fn vertex(&mut self, x: f32, y: f32) -> &mut Self {
        self.add_vertex(Point::xy(x, y))
    }

    /// Number of vertices the shape will have once the session ends.
    pub fn len(&self) -> usize {
        self.shape.vertices().len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for ShapeEditor<'_> {
    fn drop(&mut self) {
        if let Some(vertices) = self.shape.vertices_mut() {
            vertices.append(&mut self.pending);
        }
    }
}
