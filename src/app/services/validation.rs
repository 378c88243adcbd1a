use regex_lite::Regex;
use std::sync::OnceLock;

fn hex_color_regex() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color pattern"))
}

/// `#RRGGBB`, case-insensitive. Typed color inputs only apply when this holds.
pub fn is_hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value)
}

/// Required text field: non-empty after trimming.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
