//! Declarative scene configuration
//!
//! Scenes are described as JSON and turned into widget trees. Field defaults
//! and required fields are resolved here, and negative frame counts, unknown
//! curves and malformed colors are rejected before any widget is built.
//!
//! # Example
//!
//! ```rust
//! use pixmotion::config::SceneConfig;
//! use pixmotion::{CurveRegistry, Widget};
//!
//! let scene = SceneConfig::from_json_str(r##"{
//!     "width": 16,
//!     "height": 8,
//!     "root": {
//!         "type": "animated_positioned",
//!         "child": { "type": "box", "width": 2, "height": 2, "color": "#f00" },
//!         "x_end": 14,
//!         "duration": 7,
//!         "curve": "ease_in_out",
//!         "hold": 3
//!     }
//! }"##)?;
//!
//! let root = scene.root.build(&CurveRegistry::new())?;
//! assert_eq!(root.frame_count(), 10);
//! # Ok::<(), pixmotion::RenderError>(())
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::animation::AnimatedPositioned;
use crate::curve::CurveRegistry;
use crate::utils::{parse_hex_color, RenderError};
use crate::widget::Widget;
use crate::widgets::ColorBox;

/// Widget tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetConfig {
    /// Slide a child between two coordinates
    AnimatedPositioned(AnimatedPositionedConfig),
    /// Solid color rectangle
    #[serde(rename = "box")]
    ColorBox(ColorBoxConfig),
}

impl WidgetConfig {
    /// Build the widget tree, resolving curve names through `curves`
    ///
    /// # Errors
    ///
    /// Returns a configuration error for the first invalid node.
    pub fn build(&self, curves: &CurveRegistry) -> Result<Arc<dyn Widget>, RenderError> {
        match self {
            Self::AnimatedPositioned(config) => Ok(Arc::new(config.build(curves)?)),
            Self::ColorBox(config) => Ok(Arc::new(config.build()?)),
        }
    }
}

/// Parameters of an [`AnimatedPositioned`] widget
///
/// `child` and `duration` are required. Coordinates, `delay` and `hold`
/// default to 0; `curve` defaults to the registry's default curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedPositionedConfig {
    /// Widget to animate
    pub child: Box<WidgetConfig>,
    /// Horizontal start coordinate
    #[serde(default)]
    pub x_start: i32,
    /// Horizontal end coordinate
    #[serde(default)]
    pub x_end: i32,
    /// Vertical start coordinate
    #[serde(default)]
    pub y_start: i32,
    /// Vertical end coordinate
    #[serde(default)]
    pub y_end: i32,
    /// Duration of the motion in frames
    pub duration: i64,
    /// Curve name or `cubic-bezier(a, b, c, d)` expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    /// Frames to wait before moving
    #[serde(default)]
    pub delay: i64,
    /// Frames to stay at the end after moving
    #[serde(default)]
    pub hold: i64,
}

impl AnimatedPositionedConfig {
    /// Validate the parameters and build the widget
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidConfig`] for negative or oversized frame
    /// counts, or a curve error if `curve` does not resolve.
    pub fn build(&self, curves: &CurveRegistry) -> Result<AnimatedPositioned, RenderError> {
        let duration = frame_count_field("duration", self.duration)?;
        let delay = frame_count_field("delay", self.delay)?;
        let hold = frame_count_field("hold", self.hold)?;

        let curve = match self.curve.as_deref() {
            Some(name) => curves.resolve(name)?,
            None => curves.default_curve(),
        };

        AnimatedPositioned::builder(self.child.build(curves)?)
            .x(self.x_start, self.x_end)
            .y(self.y_start, self.y_end)
            .duration(duration)
            .curve(curve)
            .delay(delay)
            .hold(hold)
            .build()
    }
}

fn frame_count_field(name: &str, value: i64) -> Result<u32, RenderError> {
    if value < 0 {
        return Err(RenderError::InvalidConfig(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| RenderError::InvalidConfig(format!("{name} is too large: {value}")))
}

/// Parameters of a [`ColorBox`] widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBoxConfig {
    /// Width in pixels, 0 fills the bounds
    #[serde(default)]
    pub width: u32,
    /// Height in pixels, 0 fills the bounds
    #[serde(default)]
    pub height: u32,
    /// Hex color
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#fff".to_string()
}

impl ColorBoxConfig {
    /// Build the widget
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidColor`] if `color` does not parse.
    pub fn build(&self) -> Result<ColorBox, RenderError> {
        Ok(ColorBox::new(
            self.width,
            self.height,
            parse_hex_color(&self.color)?,
        ))
    }
}

/// Canvas and playback settings plus the widget tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Delay between frames in milliseconds when played back
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
    /// Upper bound on rendered frames
    #[serde(default = "default_max_frames")]
    pub max_frames: u32,
    /// Root widget
    pub root: WidgetConfig,
}

fn default_width() -> u32 {
    64
}

fn default_height() -> u32 {
    32
}

fn default_delay_ms() -> u32 {
    50
}

fn default_max_frames() -> u32 {
    2000
}

impl SceneConfig {
    /// Parse a scene from JSON
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ParseError`] for malformed JSON or missing
    /// required fields.
    pub fn from_json_str(json: &str) -> Result<Self, RenderError> {
        serde_json::from_str(json).map_err(|e| RenderError::ParseError(e.to_string()))
    }

    /// Read and parse a scene file
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::IOError`] if the file cannot be read, or a
    /// parse error as in [`SceneConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize the scene back to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ParseError`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, RenderError> {
        serde_json::to_string_pretty(self).map_err(|e| RenderError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SLIDE: &str = r##"{
        "type": "animated_positioned",
        "child": { "type": "box", "width": 1, "height": 1 },
        "x_start": 10,
        "duration": 10
    }"##;

    #[test]
    fn defaults_are_applied() {
        let config: WidgetConfig = serde_json::from_str(SLIDE).unwrap();
        assert_eq!(
            config,
            WidgetConfig::AnimatedPositioned(AnimatedPositionedConfig {
                child: Box::new(WidgetConfig::ColorBox(ColorBoxConfig {
                    width: 1,
                    height: 1,
                    color: "#fff".to_string(),
                })),
                x_start: 10,
                x_end: 0,
                y_start: 0,
                y_end: 0,
                duration: 10,
                curve: None,
                delay: 0,
                hold: 0,
            })
        );
    }

    #[test]
    fn missing_curve_uses_registry_default() {
        let config: AnimatedPositionedConfig =
            serde_json::from_str(&SLIDE.replace("\"type\": \"animated_positioned\",", ""))
                .unwrap();
        let widget = config.build(&CurveRegistry::new()).unwrap();
        assert_eq!(widget.compute_position(5), (5, 0));
        assert_eq!(widget.frame_count(), 10);
    }

    #[test]
    fn missing_required_fields_fail_to_parse() {
        let no_duration = r##"{ "root": { "type": "animated_positioned",
            "child": { "type": "box" } } }"##;
        assert!(matches!(
            SceneConfig::from_json_str(no_duration),
            Err(RenderError::ParseError(msg)) if msg.contains("duration")
        ));

        let no_child = r##"{ "root": { "type": "animated_positioned", "duration": 3 } }"##;
        assert!(matches!(
            SceneConfig::from_json_str(no_child),
            Err(RenderError::ParseError(msg)) if msg.contains("child")
        ));
    }

    #[test]
    fn negative_frame_counts_are_rejected() {
        for field in ["duration", "delay", "hold"] {
            let mut config: AnimatedPositionedConfig =
                serde_json::from_str(&SLIDE.replace("\"type\": \"animated_positioned\",", ""))
                    .unwrap();
            match field {
                "duration" => config.duration = -1,
                "delay" => config.delay = -2,
                _ => config.hold = -3,
            }
            let err = config.build(&CurveRegistry::new()).unwrap_err();
            assert!(
                matches!(&err, RenderError::InvalidConfig(msg) if msg.starts_with(field)),
                "unexpected error for {field}: {err}"
            );
        }
    }

    #[test]
    fn unknown_curve_is_rejected() {
        let json = SLIDE.replace("\"duration\": 10", "\"duration\": 10, \"curve\": \"wobble\"");
        let config: WidgetConfig = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            config.build(&CurveRegistry::new()),
            Err(RenderError::UnknownCurve(name)) if name == "wobble"
        ));
    }

    #[test]
    fn bad_color_is_rejected() {
        let config = WidgetConfig::ColorBox(ColorBoxConfig {
            width: 1,
            height: 1,
            color: "red".to_string(),
        });
        assert!(matches!(
            config.build(&CurveRegistry::new()),
            Err(RenderError::InvalidColor(_))
        ));
    }

    #[test]
    fn scene_defaults_and_json_output() {
        let scene = SceneConfig::from_json_str(&format!("{{ \"root\": {SLIDE} }}")).unwrap();
        assert_eq!(
            (scene.width, scene.height, scene.delay_ms, scene.max_frames),
            (64, 32, 50, 2000)
        );

        let reparsed = SceneConfig::from_json_str(&scene.to_json_string().unwrap()).unwrap();
        assert_eq!(reparsed, scene);
    }
}
