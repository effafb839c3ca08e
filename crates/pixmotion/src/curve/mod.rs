//! Easing curves that reshape normalized animation progress
//!
//! A curve maps linear progress in `[0, 1)` to eased progress. Curves are
//! stateless and deterministic, so one instance can be shared across every
//! frame and thread of a render.

use core::fmt;

use crate::utils::RenderError;

mod bezier;
mod registry;

pub use bezier::CubicBezierCurve;
pub use registry::{CurveRegistry, DEFAULT_CURVE};

/// Time-reshaping function used by animated widgets
pub trait Curve: fmt::Debug + Send + Sync {
    /// Map linear progress `t` to eased progress
    fn transform(&self, t: f64) -> f64;
}

/// Identity curve, progress passes through unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearCurve;

impl Curve for LinearCurve {
    fn transform(&self, t: f64) -> f64 {
        t
    }
}

/// Slow start
pub const EASE_IN: CubicBezierCurve = CubicBezierCurve::new(0.3, 0.0, 1.0, 1.0);

/// Slow finish
pub const EASE_OUT: CubicBezierCurve = CubicBezierCurve::new(0.0, 0.0, 0.0, 1.0);

/// Slow start and finish
pub const EASE_IN_OUT: CubicBezierCurve = CubicBezierCurve::new(0.65, 0.0, 0.35, 1.0);

/// Parse a `cubic-bezier(a, b, c, d)` expression
///
/// # Errors
///
/// Returns [`RenderError::InvalidCurve`] if the expression is not a
/// `cubic-bezier` call with four numeric arguments.
pub fn parse_cubic_bezier(expr: &str) -> Result<CubicBezierCurve, RenderError> {
    let args = expr
        .trim()
        .strip_prefix("cubic-bezier")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| RenderError::InvalidCurve(expr.to_string()))?;

    let values = args
        .split(',')
        .map(|arg| {
            arg.trim()
                .parse::<f64>()
                .map_err(|e| RenderError::InvalidCurve(format!("{expr}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values[..] {
        [a, b, c, d] => Ok(CubicBezierCurve::new(a, b, c, d)),
        _ => Err(RenderError::InvalidCurve(format!(
            "{expr}: expected 4 arguments, got {}",
            values.len()
        ))),
    }
}
