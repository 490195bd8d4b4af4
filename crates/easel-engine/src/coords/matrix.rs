use core::ops::Mul;

use super::Point;

/// Row-major 4×4 affine matrix (`m[row][col]`), column-vector convention.
///
/// Translation lives in the last column. Composition follows the usual
/// `parent * local` order: the right-hand matrix is applied to points first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

/// 2D affine coefficients `[a, b, c, d, e, f]` as consumed by vector canvases:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
pub type Affine2 = [f32; 6];

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut out = Self::identity();
        out.m[0][3] = x;
        out.m[1][3] = y;
        out.m[2][3] = z;
        out
    }

    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        let mut out = Self::identity();
        out.m[0][0] = sx;
        out.m[1][1] = sy;
        out.m[2][2] = sz;
        out
    }

    /// Rotation about the z axis by `theta` radians.
    pub fn rotation_z(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        let mut out = Self::identity();
        out.m[0][0] = c;
        out.m[0][1] = -s;
        out.m[1][0] = s;
        out.m[1][1] = c;
        out
    }

    /// Shear along x by `angle` radians.
    pub fn shear_x(angle: f32) -> Self {
        let mut out = Self::identity();
        out.m[0][1] = angle.tan();
        out
    }

    /// Shear along y by `angle` radians.
    pub fn shear_y(angle: f32) -> Self {
        let mut out = Self::identity();
        out.m[1][0] = angle.tan();
        out
    }

    /// Builds a matrix from 2D affine coefficients (see [`Affine2`]).
    pub fn from_affine(t: Affine2) -> Self {
        let [a, b, c, d, e, f] = t;
        Self::from_rows([
            [a, c, 0.0, e],
            [b, d, 0.0, f],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Projects onto the xy plane as 2D affine coefficients.
    #[inline]
    pub fn to_affine(&self) -> Affine2 {
        let m = &self.m;
        [m[0][0], m[1][0], m[0][1], m[1][1], m[0][3], m[1][3]]
    }

    pub fn transform_point(&self, p: Point) -> Point {
        let m = &self.m;
        Point::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn approx_eq(&self, other: &Mat4, eps: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * rhs.m[k][c]).sum();
            }
        }
        Mat4 { m: out }
    }
}

/// Stack of global view transforms.
///
/// The top is always the active transform. The stack is never empty; the base
/// entry is what [`reset`](Self::reset) rewrites.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self { stack: vec![Mat4::identity()] }
    }

    /// Active transform.
    #[inline]
    pub fn current(&self) -> Mat4 {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Number of pushed scopes above the base entry.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Saves the active transform. Calls must be balanced with [`pop`](Self::pop).
    #[inline]
    pub fn push(&mut self) {
        let top = self.current();
        self.stack.push(top);
    }

    /// Restores the transform saved by the matching [`push`](Self::push).
    ///
    /// Returns `false`, leaving the base entry in place, when nothing was pushed.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Post-multiplies the active transform: `current = current * m`.
    pub fn apply(&mut self, m: Mat4) {
        if let Some(top) = self.stack.last_mut() {
            *top = *top * m;
        }
    }

    /// Resets the active transform to identity without touching saved scopes.
    pub fn reset(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            *top = Mat4::identity();
        }
    }

    /// Drops every pushed scope and resets the base entry to identity.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.stack.push(Mat4::identity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    // ── Mat4 ──────────────────────────────────────────────────────────────

    #[test]
    fn translation_then_rotation_applies_rotation_first() {
        // parent (translate) * local (rotate): the point rotates in the local
        // frame, then lands in the parent frame.
        let m = Mat4::translation(10.0, 0.0, 0.0) * Mat4::rotation_z(FRAC_PI_2);
        let p = m.transform_point(Point::xy(1.0, 0.0));
        assert!(p.approx_eq(Point::xy(10.0, 1.0), EPS));
    }

    #[test]
    fn affine_round_trip_preserves_2d_coefficients() {
        let t = [2.0, 0.5, -0.5, 3.0, 7.0, -4.0];
        assert_eq!(Mat4::from_affine(t).to_affine(), t);
    }

    #[test]
    fn affine_translation_lands_in_e_and_f() {
        let [a, b, c, d, e, f] = Mat4::translation(3.0, 4.0, 0.0).to_affine();
        assert_eq!((a, b, c, d), (1.0, 0.0, 0.0, 1.0));
        assert_eq!((e, f), (3.0, 4.0));
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::scaling(2.0, 3.0, 1.0) * Mat4::translation(1.0, 1.0, 0.0);
        assert_eq!(Mat4::identity() * m, m);
        assert_eq!(m * Mat4::identity(), m);
    }

    // ── MatrixStack ───────────────────────────────────────────────────────

    #[test]
    fn push_pop_restores_previous_transform() {
        let mut s = MatrixStack::new();
        s.apply(Mat4::translation(5.0, 0.0, 0.0));
        let before = s.current();

        s.push();
        s.apply(Mat4::scaling(2.0, 2.0, 1.0));
        assert_ne!(s.current(), before);
        assert!(s.pop());

        assert_eq!(s.current(), before);
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn reset_only_touches_top() {
        let mut s = MatrixStack::new();
        s.apply(Mat4::translation(1.0, 2.0, 0.0));
        s.push();
        s.reset();
        assert!(s.current().is_identity());
        assert!(s.pop());
        assert!(s.current().approx_eq(&Mat4::translation(1.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn unmatched_pop_keeps_base_entry() {
        let mut s = MatrixStack::new();
        s.apply(Mat4::translation(3.0, 4.0, 0.0));
        assert!(!s.pop());
        assert_eq!(s.depth(), 0);
        assert!(s.current().approx_eq(&Mat4::translation(3.0, 4.0, 0.0), EPS));
    }
}
