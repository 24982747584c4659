// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast arithmetic - WCAG relative luminance and contrast ratio
//!
//! Colors are accepted in two forms only: `#rrggbb` and `rgb()`/`rgba()`.
//! The ratio is computed in the order the caller passes the colors
//! (text first, background second); the lighter color is not moved to the
//! numerator, so ratios below 1.0 are possible.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum ratio for normal text
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

/// An sRGB color as 0-255 channels
pub type Rgb = (u8, u8, u8);

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)").expect("valid regex")
});

/// Parse a `#rrggbb` color. Short `#rgb` forms are not accepted.
pub fn parse_hex_color(value: &str) -> Option<Rgb> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`; alpha is ignored.
/// Channels above 255 make the value unparseable.
pub fn parse_rgb_color(value: &str) -> Option<Rgb> {
    let caps = RGB_FUNCTION.captures(value)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some((r, g, b))
}

/// Parse either supported form
pub fn parse_color(value: &str) -> Option<Rgb> {
    let trimmed = value.trim();
    parse_hex_color(trimmed).or_else(|| parse_rgb_color(trimmed))
}

/// Relative luminance with the sRGB linearization threshold 0.03928
pub fn relative_luminance((r, g, b): Rgb) -> f64 {
    let linear = [r, g, b].map(|c| {
        let v = f64::from(c) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
}

/// `(L_text + 0.05) / (L_background + 0.05)`, order preserved
pub fn contrast_ratio(text: Rgb, background: Rgb) -> f64 {
    (relative_luminance(text) + 0.05) / (relative_luminance(background) + 0.05)
}

pub fn is_low_contrast(text: Rgb, background: Rgb) -> bool {
    contrast_ratio(text, background) < MIN_CONTRAST_RATIO
}
