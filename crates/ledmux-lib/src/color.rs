//! ARGB color handling — luma extraction, hardware scaling, CLI parsing.
//!
//! Colors are 32-bit ARGB with alpha in the top byte (`0xAARRGGBB`).

use crate::channel::LightState;

/// Perceived brightness of an ARGB color, in [0, 255].
///
/// Alpha other than 0xFF premultiplies the RGB components (integer
/// truncating division), then the weighted sum approximates BT.601 luma.
pub fn luma(color: u32) -> u32 {
    let alpha = (color >> 24) & 0xFF;
    let mut red = (color >> 16) & 0xFF;
    let mut green = (color >> 8) & 0xFF;
    let mut blue = color & 0xFF;

    if alpha != 0xFF {
        red = red * alpha / 0xFF;
        green = green * alpha / 0xFF;
        blue = blue * alpha / 0xFF;
    }

    (77 * red + 150 * green + 29 * blue) >> 8
}

/// Scale a [0, 255] luma to the hardware's brightness range.
pub fn scale_brightness(luma: u32, max_brightness: u32) -> u32 {
    luma * max_brightness / 255
}

/// Scaled hardware brightness for a state, given the device maximum.
pub fn scaled_brightness(state: &LightState, max_brightness: u32) -> u32 {
    scale_brightness(luma(state.color), max_brightness)
}

/// Parse a color string into ARGB (`0xAARRGGBB`).
///
/// Accepts:
/// - Hex: `"#RRGGBB"` (opaque) or `"#AARRGGBB"`, with or without the `#`
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`,
///   `"yellow"`, `"purple"`, `"cyan"`, `"off"`/`"black"` (all opaque)
pub fn parse_color(s: &str) -> crate::error::Result<u32> {
    let s = s.trim();

    // Named colors
    match s.to_lowercase().as_str() {
        "red" => return Ok(0xFFFF_0000),
        "green" => return Ok(0xFF00_FF00),
        "blue" => return Ok(0xFF00_00FF),
        "white" => return Ok(0xFFFF_FFFF),
        "orange" => return Ok(0xFFFF_8000),
        "yellow" => return Ok(0xFFFF_FF00),
        "purple" => return Ok(0xFF80_00FF),
        "cyan" => return Ok(0xFF00_FFFF),
        "off" | "black" => return Ok(0xFF00_0000),
        _ => {}
    }

    // Hex color
    let hex = s.strip_prefix('#').unwrap_or(s);
    let val = u32::from_str_radix(hex, 16)
        .map_err(|_| crate::LedmuxError::Color(format!("Invalid hex color: {s}")))?;
    match hex.len() {
        6 => Ok(0xFF00_0000 | val), // RRGGBB, opaque alpha
        8 => Ok(val),               // AARRGGBB as given
        _ => Err(crate::LedmuxError::Color(format!(
            "Invalid color: {s} (use #RRGGBB, #AARRGGBB or a color name)"
        ))),
    }
}

/// Format an ARGB value as `#AARRGGBB`.
pub fn format_color(val: u32) -> String {
    format!("#{val:08X}")
}
