//! Drawing abstraction
//!
//! The layout pipeline draws through the `Canvas` trait so layout decisions
//! (row suppression, pagination) can be tested against a recording fake.
//! `PdfCanvas` is the real implementation on top of `pdf_core::PdfDocument`,
//! including the striped two-column auto-table.

use crate::style;
use crate::Result;
use pdf_core::{Align, Color, FontWeight, PaintMode, PdfDocument};

/// Position and extent of a rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// How a rectangle is painted
#[derive(Debug, Clone, Copy)]
pub struct ShapeStyle {
    pub stroke: Color,
    pub fill: Color,
    pub line_width: f64,
    pub mode: PaintMode,
}

impl ShapeStyle {
    /// Outline only
    pub fn stroke(color: Color, line_width: f64) -> Self {
        Self {
            stroke: color,
            fill: Color::white(),
            line_width,
            mode: PaintMode::Stroke,
        }
    }

    /// Interior only
    pub fn fill(color: Color) -> Self {
        Self {
            stroke: Color::black(),
            fill: color,
            line_width: 0.0,
            mode: PaintMode::Fill,
        }
    }
}

/// Size, weight, color and alignment of a text run
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub align: Align,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: Color::black(),
            align: Align::Left,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A captioned two-column table dataset
#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    /// Caption drawn above the table
    pub caption: String,
    /// Header row labels
    pub head: (String, String),
    /// Body rows as `(label, value)`
    pub rows: Vec<(String, String)>,
}

impl TableData {
    /// Table with the default `Field` / `Information` header
    pub fn new(caption: impl Into<String>, rows: Vec<(String, String)>) -> Self {
        Self {
            caption: caption.into(),
            head: ("Field".to_string(), "Information".to_string()),
            rows,
        }
    }

    pub fn with_head(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.head = (left.into(), right.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Minimal drawing interface the layout algorithm is written against
///
/// Coordinates use a top-left origin; `y` for text is the baseline.
pub trait Canvas {
    fn page_width(&self) -> f64;
    fn page_height(&self) -> f64;

    /// Begin a new page; subsequent drawing targets it
    fn start_page(&mut self);

    fn draw_rect(&mut self, rect: Rect, shape: &ShapeStyle) -> Result<()>;

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64)
        -> Result<()>;

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()>;

    /// Measured width of `text` in points
    fn text_width(&self, text: &str, style: &TextStyle) -> f64;

    /// Embed JPEG/PNG bytes; `Err` on undecodable data
    fn draw_image(&mut self, data: &[u8], rect: Rect) -> Result<()>;

    /// Render a table starting at cursor `y`, returning the Y just below the
    /// last drawn row. Paginates internally, repeating the header row.
    fn draw_table(&mut self, table: &TableData, y: f64) -> Result<f64>;
}

/// Greedy word wrap against a measured width
fn wrap_words(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if !current.is_empty() && measure(&candidate) > max_width {
            lines.push(current);
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Line height for a font size (single spacing with leading)
fn line_height(size: f32) -> f64 {
    size as f64 * 1.15
}

/// Baseline offset from the top of a text line
fn ascent(size: f32) -> f64 {
    size as f64 * 0.85
}

/// Canvas backed by a real PDF document
pub struct PdfCanvas {
    doc: PdfDocument,
    page: usize,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self {
            doc: PdfDocument::new(),
            page: 0,
        }
    }

    /// Serialize the finished document
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.doc.to_bytes()?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.page_count()
    }

    /// Height of one body row for a wrapped value
    fn row_height(lines: usize, size: f32) -> f64 {
        lines.max(1) as f64 * line_height(size) + 2.0 * style::CELL_PADDING
    }

    fn draw_table_header(&mut self, table: &TableData, y: f64) -> Result<f64> {
        let left = style::LEFT_MARGIN;
        let value_w = style::content_width(self.page_width()) - style::LABEL_COL_WIDTH;
        let height = Self::row_height(1, style::TABLE_HEAD_FONT_SIZE);

        let head_shape = ShapeStyle {
            stroke: style::GRID,
            fill: style::ACCENT,
            line_width: style::GRID_LINE_WIDTH,
            mode: PaintMode::FillStroke,
        };
        self.draw_rect(Rect::new(left, y, style::LABEL_COL_WIDTH, height), &head_shape)?;
        self.draw_rect(
            Rect::new(left + style::LABEL_COL_WIDTH, y, value_w, height),
            &head_shape,
        )?;

        let text = TextStyle::bold(style::TABLE_HEAD_FONT_SIZE).with_color(Color::white());
        let baseline = y + style::CELL_PADDING + ascent(style::TABLE_HEAD_FONT_SIZE);
        self.draw_text(&table.head.0, left + style::CELL_PADDING, baseline, &text)?;
        self.draw_text(
            &table.head.1,
            left + style::LABEL_COL_WIDTH + style::CELL_PADDING,
            baseline,
            &text,
        )?;
        Ok(y + height)
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for PdfCanvas {
    fn page_width(&self) -> f64 {
        pdf_core::PAGE_WIDTH
    }

    fn page_height(&self) -> f64 {
        pdf_core::PAGE_HEIGHT
    }

    fn start_page(&mut self) {
        self.page = self.doc.add_page();
    }

    fn draw_rect(&mut self, rect: Rect, shape: &ShapeStyle) -> Result<()> {
        self.doc.draw_rect(
            self.page,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            shape.stroke,
            shape.fill,
            shape.line_width,
            shape.mode,
        )?;
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    ) -> Result<()> {
        self.doc.draw_line(self.page, x1, y1, x2, y2, color, width)?;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        self.doc.draw_text(
            self.page,
            text,
            x,
            y,
            style.align,
            style.weight,
            style.size,
            style.color,
        )?;
        Ok(())
    }

    fn text_width(&self, text: &str, style: &TextStyle) -> f64 {
        self.doc.text_width(text, style.size, style.weight)
    }

    fn draw_image(&mut self, data: &[u8], rect: Rect) -> Result<()> {
        self.doc
            .draw_image(self.page, data, rect.x, rect.y, rect.width, rect.height)?;
        Ok(())
    }

    fn draw_table(&mut self, table: &TableData, y: f64) -> Result<f64> {
        let left = style::LEFT_MARGIN;
        let label_w = style::LABEL_COL_WIDTH;
        let value_w = style::content_width(self.page_width()) - label_w;
        let wrap_w = value_w - 2.0 * style::CELL_PADDING;
        let body = TextStyle::regular(style::TABLE_FONT_SIZE);
        let label_style = TextStyle::bold(style::TABLE_FONT_SIZE).with_color(style::DARK_GRAY);
        let page_bottom = self.page_height() - style::BOTTOM_MARGIN;

        let mut cursor = self.draw_table_header(table, y)?;

        for (index, (label, value)) in table.rows.iter().enumerate() {
            let lines = wrap_words(value, wrap_w, |s| self.text_width(s, &body));
            let height = Self::row_height(lines.len(), style::TABLE_FONT_SIZE);

            if cursor + height > page_bottom {
                self.start_page();
                cursor = self.draw_table_header(table, style::TOP_CURSOR)?;
            }

            // striped theme: every second body row is tinted
            if index % 2 == 1 {
                self.draw_rect(
                    Rect::new(left, cursor, label_w + value_w, height),
                    &ShapeStyle::fill(style::ALT_ROW_BG),
                )?;
            }
            let grid = ShapeStyle::stroke(style::GRID, style::GRID_LINE_WIDTH);
            self.draw_rect(Rect::new(left, cursor, label_w, height), &grid)?;
            self.draw_rect(Rect::new(left + label_w, cursor, value_w, height), &grid)?;

            let label_baseline =
                cursor + style::CELL_PADDING + ascent(style::TABLE_FONT_SIZE);
            self.draw_text(label, left + style::CELL_PADDING, label_baseline, &label_style)?;
            for (line_index, line) in lines.iter().enumerate() {
                let baseline = cursor
                    + style::CELL_PADDING
                    + line_index as f64 * line_height(style::TABLE_FONT_SIZE)
                    + ascent(style::TABLE_FONT_SIZE);
                self.draw_text(line, left + label_w + style::CELL_PADDING, baseline, &body)?;
            }

            cursor += height;
        }

        Ok(cursor)
    }
}
