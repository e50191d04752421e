//! Visual contract constants
//!
//! Fixed geometry and theme for the report. Coordinates are points with a
//! top-left origin; the page is A4.

use pdf_core::Color;

/// Left page margin in points
pub const LEFT_MARGIN: f64 = 40.0;
/// Right page margin in points
pub const RIGHT_MARGIN: f64 = 40.0;
/// Cursor position at the top of a fresh page
pub const TOP_CURSOR: f64 = 50.0;
/// Bottom margin the table renderer breaks pages against
pub const BOTTOM_MARGIN: f64 = 40.0;

/// Accent blue used for headings, borders and table headers
pub const ACCENT: Color = Color {
    r: 20.0 / 255.0,
    g: 90.0 / 255.0,
    b: 160.0 / 255.0,
};
/// Section heading background strip
pub const SECTION_BG: Color = Color {
    r: 245.0 / 255.0,
    g: 248.0 / 255.0,
    b: 255.0 / 255.0,
};
/// Alternating table row background
pub const ALT_ROW_BG: Color = Color {
    r: 250.0 / 255.0,
    g: 252.0 / 255.0,
    b: 255.0 / 255.0,
};
/// Table grid lines
pub const GRID: Color = Color {
    r: 200.0 / 255.0,
    g: 200.0 / 255.0,
    b: 200.0 / 255.0,
};
/// Label column and caption text
pub const DARK_GRAY: Color = Color {
    r: 60.0 / 255.0,
    g: 60.0 / 255.0,
    b: 60.0 / 255.0,
};
/// Photo frame and placeholder text
pub const MID_GRAY: Color = Color {
    r: 100.0 / 255.0,
    g: 100.0 / 255.0,
    b: 100.0 / 255.0,
};

/// Table body font size
pub const TABLE_FONT_SIZE: f32 = 10.0;
/// Table header row font size
pub const TABLE_HEAD_FONT_SIZE: f32 = 11.0;
/// Cell padding on every side
pub const CELL_PADDING: f64 = 6.0;
/// Table grid line width
pub const GRID_LINE_WIDTH: f64 = 0.5;
/// Fixed width of the bold label column
pub const LABEL_COL_WIDTH: f64 = 120.0;

/// Remaining space below which a section heading starts a new page
pub const HEADING_BREAK: f64 = 100.0;
/// Remaining space below which a table starts a new page
pub const TABLE_BREAK: f64 = 150.0;
/// Remaining space below which the declaration starts a new page
pub const DECLARATION_BREAK: f64 = 120.0;

/// Roman numeral for a 1-based section number
pub fn roman_numeral(n: usize) -> &'static str {
    const NUMERALS: [&str; 6] = ["I", "II", "III", "IV", "V", "VI"];
    NUMERALS.get(n.wrapping_sub(1)).copied().unwrap_or("?")
}

/// Content width between the margins
pub fn content_width(page_width: f64) -> f64 {
    page_width - LEFT_MARGIN - RIGHT_MARGIN
}
