//! Diagram palette and color helpers.
//!
//! Colors stay `#RRGGBB` strings so they can go straight into SVG `fill` and
//! `stroke` attributes. Translucent variants are derived, never stored.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

pub const PRIMARY: &str = "#4F46E5";
pub const SECONDARY: &str = "#EC4899";
pub const ACCENT: &str = "#10B981";
pub const VIOLET: &str = "#A78BFA";
pub const AMBER: &str = "#F59E0B";
pub const CYAN: &str = "#06B6D4";
pub const INK: &str = "white";

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex.get(0..1)?.repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex.get(1..2)?.repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex.get(2..3)?.repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// `rgba(r, g, b, alpha)` for a hex color; unparseable input is returned as is.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    match parse_hex_rgb(color) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {})", alpha.clamp(0.0, 1.0)),
        None => color.to_owned(),
    }
}

/// Inline style for a tinted card: colored border over a faint background.
pub fn tinted_card_style(color: &str) -> String {
    format!("border-color: {color}; background-color: {};", with_alpha(color, 0.125))
}

/// Id of the glow filter defined for `color`, e.g. `glow-10B981`.
pub fn glow_filter_id(color: &str) -> String {
    let slug: String = color.chars().filter(char::is_ascii_alphanumeric).collect();
    format!("glow-{slug}")
}
