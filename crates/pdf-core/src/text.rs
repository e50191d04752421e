//! Text rendering utilities

use crate::document::Color;
use crate::font::{self, FontWeight};
use crate::Align;

/// Context for rendering one text run
pub struct TextRenderContext {
    /// Font weight (selects the built-in Helvetica variant)
    pub weight: FontWeight,
    /// Font size in points
    pub font_size: f32,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Escape WinAnsi bytes into a PDF literal string body
///
/// Backslash and parentheses are escaped; bytes outside the printable range
/// are written as octal escapes.
pub fn escape_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\{b:03o}")),
        }
    }
    out
}

/// Generate PDF operators for a text run
///
/// Emits BT/Tf/Td/Tj/ET with an `rg` fill color, shifting X left for
/// center/right alignment based on the measured width in `ctx`.
///
/// # Arguments
/// * `text` - Text to show (encoded to WinAnsi internally)
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Text alignment relative to `x`
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    text: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };
    let final_x = x + x_offset;

    let literal = escape_literal(&font::encode_win_ansi(text));

    let mut ops = String::new();
    ops.push_str("BT\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        ctx.color.r, ctx.color.g, ctx.color.b
    ));
    ops.push_str(&format!(
        "/{} {} Tf\n",
        ctx.weight.resource_name(),
        ctx.font_size
    ));
    ops.push_str(&format!("{final_x} {y} Td\n"));
    ops.push_str(&format!("({literal}) Tj\n"));
    ops.push_str("ET\n");

    ops.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(weight: FontWeight, size: f32, width: f64) -> TextRenderContext {
        TextRenderContext {
            weight,
            font_size: size,
            text_width: width,
            color: Color::black(),
        }
    }

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_literal(b"Hello"), "Hello");
    }

    #[test]
    fn test_escape_parens_and_backslash() {
        assert_eq!(escape_literal(b"a(b)c\\d"), "a\\(b\\)c\\\\d");
    }

    #[test]
    fn test_escape_high_byte_octal() {
        assert_eq!(escape_literal(&[0xE9]), "\\351");
    }

    #[test]
    fn test_operators_left() {
        let ops = generate_text_operators(
            "Hello",
            100.0,
            700.0,
            Align::Left,
            &ctx(FontWeight::Regular, 12.0, 100.0),
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("BT"));
        assert!(ops_str.contains("/F1 12 Tf"));
        assert!(ops_str.contains("100 700 Td"));
        assert!(ops_str.contains("(Hello) Tj"));
        assert!(ops_str.contains("ET"));
    }

    #[test]
    fn test_operators_center_shifts_half_width() {
        let ops = generate_text_operators(
            "Test",
            200.0,
            600.0,
            Align::Center,
            &ctx(FontWeight::Bold, 14.0, 100.0),
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("/F2 14 Tf"));
        assert!(ops_str.contains("150 600 Td"));
    }

    #[test]
    fn test_operators_right_shifts_full_width() {
        let ops = generate_text_operators(
            "Right",
            300.0,
            500.0,
            Align::Right,
            &ctx(FontWeight::Regular, 16.0, 80.0),
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("220 500 Td"));
    }

    #[test]
    fn test_operators_color() {
        let mut c = ctx(FontWeight::Regular, 12.0, 10.0);
        c.color = Color::from_rgb(255, 0, 0);
        let ops = generate_text_operators("A", 0.0, 0.0, Align::Left, &c);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 0 0 rg"));
    }

    #[test]
    fn test_operators_escape_in_stream() {
        let ops = generate_text_operators(
            "(N/A)",
            0.0,
            0.0,
            Align::Left,
            &ctx(FontWeight::Regular, 10.0, 0.0),
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("(\\(N/A\\)) Tj"));
    }
}
