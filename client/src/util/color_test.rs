use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
    assert_eq!(parse_hex_rgb(ACCENT), Some((16, 185, 129)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
}

#[test]
fn with_alpha_builds_rgba() {
    assert_eq!(with_alpha(PRIMARY, 0.3), "rgba(79, 70, 229, 0.3)");
    assert_eq!(with_alpha(SECONDARY, 2.0), "rgba(236, 72, 153, 1)");
}

#[test]
fn with_alpha_passes_named_colors_through() {
    assert_eq!(with_alpha(INK, 0.5), "white");
}

#[test]
fn tinted_card_style_uses_the_color_twice() {
    let style = tinted_card_style(ACCENT);
    assert!(style.starts_with("border-color: #10B981;"));
    assert!(style.contains("rgba(16, 185, 129, 0.125)"));
}

#[test]
fn glow_filter_ids_are_valid_fragment_names() {
    assert_eq!(glow_filter_id(ACCENT), "glow-10B981");
    assert_eq!(glow_filter_id("white"), "glow-white");
}
