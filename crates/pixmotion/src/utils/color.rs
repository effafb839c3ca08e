//! Hex color parsing for widget configuration

use crate::utils::RenderError;

/// Parse a CSS-style hex color into RGBA bytes
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`; the leading `#` is
/// optional. Colors without an alpha component are fully opaque.
///
/// # Example
///
/// ```rust
/// # use pixmotion::utils::parse_hex_color;
/// assert_eq!(parse_hex_color("#f00")?, [255, 0, 0, 255]);
/// assert_eq!(parse_hex_color("00ff0080")?, [0, 255, 0, 128]);
/// # Ok::<(), pixmotion::RenderError>(())
/// ```
///
/// # Errors
///
/// Returns [`RenderError::InvalidColor`] for any other length or for
/// non-hex characters.
pub fn parse_hex_color(color_str: &str) -> Result<[u8; 4], RenderError> {
    let trimmed = color_str.trim();
    let hex_part = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if hex_part.is_empty() || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RenderError::InvalidColor(format!(
            "Invalid color format: {color_str}"
        )));
    }

    let digits: Vec<u8> = match hex_part.len() {
        // Short form doubles every digit: "f0a" -> "ff00aa"
        3 | 4 => hex_part
            .chars()
            .map(|c| {
                let nibble = c.to_digit(16).unwrap_or(0) as u8;
                nibble << 4 | nibble
            })
            .collect(),
        6 | 8 => (0..hex_part.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex_part[i..i + 2], 16).unwrap_or(0))
            .collect(),
        len => {
            return Err(RenderError::InvalidColor(format!(
                "Invalid color length: {len}"
            )))
        }
    };

    let alpha = digits.get(3).copied().unwrap_or(255);
    Ok([digits[0], digits[1], digits[2], alpha])
}
