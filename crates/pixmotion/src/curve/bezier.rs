//! CSS-style cubic bezier timing curve

use super::Curve;
use crate::utils::{cubic_bezier, solve_bezier_parameter};

/// Cubic bezier from (0, 0) to (1, 1) with control points (a, b) and (c, d)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezierCurve {
    /// First control point x
    pub a: f64,
    /// First control point y
    pub b: f64,
    /// Second control point x
    pub c: f64,
    /// Second control point y
    pub d: f64,
}

impl CubicBezierCurve {
    /// Create a curve from its two control points
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

impl Curve for CubicBezierCurve {
    fn transform(&self, t: f64) -> f64 {
        let s = solve_bezier_parameter(t, self.a, self.c);
        cubic_bezier(s, self.b, self.d)
    }
}
