//! Vector drawing operators (rectangles and lines)

use crate::document::Color;

/// How a closed path is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Stroke the outline only
    #[default]
    Stroke,
    /// Fill the interior only
    Fill,
    /// Fill, then stroke
    FillStroke,
}

impl PaintMode {
    fn operator(self) -> &'static str {
        match self {
            PaintMode::Stroke => "S",
            PaintMode::Fill => "f",
            PaintMode::FillStroke => "B",
        }
    }
}

/// Generate operators for a rectangle
///
/// Coordinates are PDF coordinates (origin bottom-left, `y` is the bottom
/// edge of the rectangle). The graphics state is saved and restored around
/// the paint so color and width never leak between shapes.
///
/// # Arguments
/// * `x`, `y` - Bottom-left corner in points
/// * `width`, `height` - Rectangle extent in points
/// * `stroke` - Stroke color (RG)
/// * `fill` - Fill color (rg), used by Fill/FillStroke modes
/// * `line_width` - Stroke width in points
/// * `mode` - Paint mode
#[allow(clippy::too_many_arguments)]
pub fn generate_rect_operators(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    stroke: Color,
    fill: Color,
    line_width: f64,
    mode: PaintMode,
) -> Vec<u8> {
    let mut ops = String::new();
    ops.push_str("q\n");
    ops.push_str(&format!("{} {} {} RG\n", stroke.r, stroke.g, stroke.b));
    ops.push_str(&format!("{} {} {} rg\n", fill.r, fill.g, fill.b));
    ops.push_str(&format!("{line_width} w\n"));
    ops.push_str(&format!("{x} {y} {width} {height} re\n"));
    ops.push_str(mode.operator());
    ops.push_str("\nQ\n");
    ops.into_bytes()
}

/// Generate operators for a stroked line segment
///
/// # Arguments
/// * `x1`, `y1` - Start point (PDF coordinates)
/// * `x2`, `y2` - End point (PDF coordinates)
/// * `color` - Stroke color
/// * `line_width` - Stroke width in points
pub fn generate_line_operators(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
    line_width: f64,
) -> Vec<u8> {
    let mut ops = String::new();
    ops.push_str("q\n");
    ops.push_str(&format!("{} {} {} RG\n", color.r, color.g, color.b));
    ops.push_str(&format!("{line_width} w\n"));
    ops.push_str(&format!("{x1} {y1} m\n{x2} {y2} l\nS\nQ\n"));
    ops.into_bytes()
}
