//! Error types for rendering and scene construction

use thiserror::Error;

/// Rendering error types
#[derive(Error, Debug)]
pub enum RenderError {
    /// Invalid dimensions provided
    #[error("Invalid dimensions: {width}x{height} (dimensions must be positive and non-zero)")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Invalid widget or scene configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Curve name not present in the registry
    #[error("Unknown curve: {0}")]
    UnknownCurve(String),

    /// Malformed curve expression
    #[error("Invalid curve expression: {0}")]
    InvalidCurve(String),

    /// Malformed color string
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    /// Image encoding error
    #[error("Encoding failed: {0}")]
    EncodeError(String),
}

impl RenderError {
    /// Check if error was caused by bad user-supplied configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig(_)
                | Self::UnknownCurve(_)
                | Self::InvalidCurve(_)
                | Self::InvalidColor(_)
                | Self::ParseError(_)
        )
    }
}
