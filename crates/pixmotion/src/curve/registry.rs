//! Named curve registry

use std::sync::Arc;

use ahash::AHashMap;

use super::{parse_cubic_bezier, Curve, LinearCurve, EASE_IN, EASE_IN_OUT, EASE_OUT};
use crate::utils::RenderError;

/// Curve used when a configuration does not name one
pub const DEFAULT_CURVE: &str = "linear";

/// Registry mapping curve names to shared curve instances
#[derive(Debug, Clone)]
pub struct CurveRegistry {
    curves: AHashMap<String, Arc<dyn Curve>>,
}

impl CurveRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            curves: AHashMap::new(),
        }
    }

    /// Create a registry holding the built-in curves
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_CURVE, Arc::new(LinearCurve));
        registry.register("ease_in", Arc::new(EASE_IN));
        registry.register("ease_out", Arc::new(EASE_OUT));
        registry.register("ease_in_out", Arc::new(EASE_IN_OUT));
        registry
    }

    /// Register a curve, replacing any curve with the same name
    pub fn register(&mut self, name: impl Into<String>, curve: Arc<dyn Curve>) {
        self.curves.insert(name.into(), curve);
    }

    /// Get a curve by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Curve>> {
        self.curves.get(name).cloned()
    }

    /// Resolve a curve name or `cubic-bezier(a, b, c, d)` expression
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidCurve`] for a malformed bezier expression
    /// and [`RenderError::UnknownCurve`] for an unregistered name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Curve>, RenderError> {
        let name = name.trim();
        if name.starts_with("cubic-bezier") {
            return Ok(Arc::new(parse_cubic_bezier(name)?));
        }
        self.get(name)
            .ok_or_else(|| RenderError::UnknownCurve(name.to_string()))
    }

    /// Curve used when none is configured
    ///
    /// Falls back to [`LinearCurve`] if the default entry was never
    /// registered.
    pub fn default_curve(&self) -> Arc<dyn Curve> {
        self.get(DEFAULT_CURVE)
            .unwrap_or_else(|| Arc::new(LinearCurve))
    }

    /// List all registered curve names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.curves.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
