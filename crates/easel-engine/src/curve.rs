//! Parametric curve evaluation.
//!
//! Bezier curves use the cubic Bernstein basis. Catmull-Rom curves use the
//! cardinal-spline basis with a `tightness` parameter; at `tightness = 0` this
//! is the standard Catmull-Rom spline, which passes through its two middle
//! control points at `t = 0` and `t = 1`.

use crate::coords::Point;

/// Default number of segments used when sampling curves into polylines.
pub const DEFAULT_CURVE_RESOLUTION: u32 = 20;

/// Curve sampling settings owned by the drawing context.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveSettings {
    /// Segments per Catmull-Rom curve (`resolution + 1` vertices).
    pub resolution: u32,
    /// Cardinal-spline tightness; `0` is Catmull-Rom, `1` yields straight lines.
    pub tightness: f32,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_CURVE_RESOLUTION,
            tightness: 0.0,
        }
    }
}

#[inline]
fn weighted(p: [Point; 4], w: [f32; 4]) -> Point {
    p[0] * w[0] + p[1] * w[1] + p[2] * w[2] + p[3] * w[3]
}

// ── bezier ────────────────────────────────────────────────────────────────

fn bezier_weights(t: f32) -> [f32; 4] {
    let u = 1.0 - t;
    [u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t]
}

fn bezier_tangent_weights(t: f32) -> [f32; 4] {
    let u = 1.0 - t;
    [-3.0 * u * u, 3.0 * u * u - 6.0 * u * t, 6.0 * u * t - 3.0 * t * t, 3.0 * t * t]
}

/// Point on a cubic bezier at `t ∈ [0, 1]`.
pub fn bezier_point(start: Point, cp1: Point, cp2: Point, stop: Point, t: f32) -> Point {
    weighted([start, cp1, cp2, stop], bezier_weights(t))
}

/// First derivative of a cubic bezier at `t`.
pub fn bezier_tangent(start: Point, cp1: Point, cp2: Point, stop: Point, t: f32) -> Point {
    weighted([start, cp1, cp2, stop], bezier_tangent_weights(t))
}

/// Samples a cubic bezier into `steps + 1` points (at least two).
pub fn sample_bezier(start: Point, cp1: Point, cp2: Point, stop: Point, steps: u32) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| bezier_point(start, cp1, cp2, stop, i as f32 / steps as f32))
        .collect()
}

// ── catmull-rom ───────────────────────────────────────────────────────────

/// Rows of the cardinal basis matrix for `t³, t², t, 1`.
fn curve_basis(s: f32) -> [[f32; 4]; 4] {
    [
        [(s - 1.0) / 2.0, (s + 3.0) / 2.0, (-3.0 - s) / 2.0, (1.0 - s) / 2.0],
        [1.0 - s, (-5.0 - s) / 2.0, s + 2.0, (s - 1.0) / 2.0],
        [(s - 1.0) / 2.0, 0.0, (1.0 - s) / 2.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
    ]
}

fn curve_weights(t: f32, tightness: f32) -> [f32; 4] {
    let b = curve_basis(tightness);
    let (t2, t3) = (t * t, t * t * t);
    core::array::from_fn(|i| t3 * b[0][i] + t2 * b[1][i] + t * b[2][i] + b[3][i])
}

fn curve_tangent_weights(t: f32, tightness: f32) -> [f32; 4] {
    let b = curve_basis(tightness);
    core::array::from_fn(|i| 3.0 * t * t * b[0][i] + 2.0 * t * b[1][i] + b[2][i])
}

/// Point on the Catmull-Rom segment between `p2` and `p3` at `t ∈ [0, 1]`.
pub fn curve_point(p1: Point, p2: Point, p3: Point, p4: Point, t: f32, tightness: f32) -> Point {
    weighted([p1, p2, p3, p4], curve_weights(t, tightness))
}

/// First derivative of the Catmull-Rom segment at `t`.
pub fn curve_tangent(p1: Point, p2: Point, p3: Point, p4: Point, t: f32, tightness: f32) -> Point {
    weighted([p1, p2, p3, p4], curve_tangent_weights(t, tightness))
}

/// Samples the Catmull-Rom segment into `settings.resolution + 1` points.
///
/// The first and last samples are `p2` and `p3`.
pub fn sample_curve(p1: Point, p2: Point, p3: Point, p4: Point, settings: CurveSettings) -> Vec<Point> {
    let steps = settings.resolution.max(1);
    (0..=steps)
        .map(|i| curve_point(p1, p2, p3, p4, i as f32 / steps as f32, settings.tightness))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn pts() -> [Point; 4] {
        [
            Point::xy(0.0, 0.0),
            Point::xy(10.0, 30.0),
            Point::xy(40.0, 35.0),
            Point::xy(60.0, 5.0),
        ]
    }

    // ── bezier ────────────────────────────────────────────────────────────

    #[test]
    fn bezier_endpoints_are_start_and_stop() {
        let [a, b, c, d] = pts();
        assert!(bezier_point(a, b, c, d, 0.0).approx_eq(a, EPS));
        assert!(bezier_point(a, b, c, d, 1.0).approx_eq(d, EPS));
    }

    #[test]
    fn bezier_tangent_at_start_points_to_first_control() {
        let [a, b, c, d] = pts();
        // B'(0) = 3 (cp1 - start)
        assert!(bezier_tangent(a, b, c, d, 0.0).approx_eq((b - a) * 3.0, EPS));
    }

    #[test]
    fn sample_bezier_clamps_zero_steps() {
        let [a, b, c, d] = pts();
        assert_eq!(sample_bezier(a, b, c, d, 0).len(), 2);
    }

    // ── catmull-rom ───────────────────────────────────────────────────────

    #[test]
    fn curve_passes_through_middle_points() {
        let [a, b, c, d] = pts();
        assert!(curve_point(a, b, c, d, 0.0, 0.0).approx_eq(b, EPS));
        assert!(curve_point(a, b, c, d, 1.0, 0.0).approx_eq(c, EPS));
    }

    #[test]
    fn curve_endpoints_hold_for_any_tightness() {
        let [a, b, c, d] = pts();
        for s in [-1.0, 0.25, 0.9] {
            assert!(curve_point(a, b, c, d, 0.0, s).approx_eq(b, 1e-4));
            assert!(curve_point(a, b, c, d, 1.0, s).approx_eq(c, 1e-4));
        }
    }

    #[test]
    fn catmull_rom_tangent_is_half_neighbor_difference() {
        let [a, b, c, d] = pts();
        assert!(curve_tangent(a, b, c, d, 0.0, 0.0).approx_eq((c - a) * 0.5, EPS));
        assert!(curve_tangent(a, b, c, d, 1.0, 0.0).approx_eq((d - b) * 0.5, EPS));
    }

    #[test]
    fn sample_curve_produces_resolution_plus_one_vertices() {
        let [a, b, c, d] = pts();
        let settings = CurveSettings { resolution: 7, ..CurveSettings::default() };
        let samples = sample_curve(a, b, c, d, settings);
        assert_eq!(samples.len(), 8);
        assert!(samples[0].approx_eq(b, EPS));
        assert!(samples[7].approx_eq(c, EPS));
    }
}
