//! Math utilities for easing curves

/// Bisection stops once the curve x is this close to the target
const BEZIER_TOLERANCE: f64 = 1e-7;

/// Upper bound on bisection steps (each halves the search interval)
const BEZIER_MAX_ITERATIONS: usize = 64;

/// Evaluate one axis of a cubic bezier anchored at 0 and 1
///
/// `p1` and `p2` are the control point coordinates on that axis.
pub fn cubic_bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    t3.mul_add(1.0, (3.0 * mt * t2).mul_add(p2, 3.0 * mt2 * t * p1))
}

/// Find the curve parameter at which the x axis reaches `x`
///
/// The x control points of a timing curve lie in `[0, 1]`, so x is monotonic
/// in the parameter and bisection converges. Inputs outside `[0, 1]` pin to
/// the nearest end of the curve.
pub fn solve_bezier_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut mid = x;
    for _ in 0..BEZIER_MAX_ITERATIONS {
        let estimate = cubic_bezier(mid, x1, x2);
        if (estimate - x).abs() < BEZIER_TOLERANCE {
            break;
        }
        if estimate < x {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = (lo + hi) / 2.0;
    }
    mid
}
