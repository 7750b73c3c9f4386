//! Color parsing utilities
//!
//! Resolves the `--color` styling flag to an RGB triple and wraps banner
//! text in ANSI 24-bit foreground escapes. The compositor never sees this.

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Named colors accepted besides hex
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb(0x00, 0x00, 0x00)),
    ("red", Rgb(0xff, 0x00, 0x00)),
    ("green", Rgb(0x00, 0x80, 0x00)),
    ("yellow", Rgb(0xff, 0xff, 0x00)),
    ("blue", Rgb(0x00, 0x00, 0xff)),
    ("magenta", Rgb(0xff, 0x00, 0xff)),
    ("cyan", Rgb(0x00, 0xff, 0xff)),
    ("white", Rgb(0xff, 0xff, 0xff)),
    ("orange", Rgb(0xff, 0xa5, 0x00)),
    ("purple", Rgb(0x80, 0x00, 0x80)),
    ("gray", Rgb(0x80, 0x80, 0x80)),
    ("grey", Rgb(0x80, 0x80, 0x80)),
];

/// Parse 6-digit hex color (e.g., "ff0000" -> (255, 0, 0))
/// Also supports 3-digit short format (e.g., "f00" -> (255, 0, 0))
/// Returns None on invalid input.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        // Short format: expand F -> FF
        3 => Some(Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        _ => None,
    }
}

/// Parse a color name (case-insensitive) or hex value
pub fn parse_color(spec: &str) -> Option<Rgb> {
    let spec = spec.trim();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spec))
        .map(|(_, rgb)| *rgb)
        .or_else(|| parse_hex_color(spec))
}

/// Wrap every non-empty line of `text` in a 24-bit foreground escape.
///
/// Line structure, including a missing trailing newline, is preserved.
pub fn colorize(text: &str, Rgb(r, g, b): Rgb) -> String {
    let prefix = format!("\x1b[38;2;{};{};{}m", r, g, b);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}\x1b[0m", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("ff8000"), Some(Rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("#f00"), Some(Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("ff80"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
        assert_eq!(parse_hex_color("éé"), None);
    }

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("Orange"), Some(Rgb(0xff, 0xa5, 0x00)));
        assert_eq!(parse_color(" 00ff00 "), Some(Rgb(0, 255, 0)));
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_colorize_preserves_lines() {
        let out = colorize("ab\n\ncd", Rgb(1, 2, 3));
        assert_eq!(
            out,
            "\x1b[38;2;1;2;3mab\x1b[0m\n\n\x1b[38;2;1;2;3mcd\x1b[0m"
        );
        assert_eq!(colorize("\n", Rgb(0, 0, 0)), "\n");
    }
}
