//! Layout pipeline
//!
//! Renders a submission record in fixed order: decorative header, photo and
//! identity block, six numbered sections, declaration. A vertical cursor
//! (page-relative Y from the top) is threaded through explicitly; page
//! breaks reset it to the top cursor position.

use crate::canvas::{Canvas, PdfCanvas, Rect, ShapeStyle, TableData, TextStyle};
use crate::sections;
use crate::style;
use crate::Result;
use intake_form::SubmissionRecord;
use pdf_core::Align;

const TITLE: &str = "PERSONAL DETAIL FORM";
const SUBTITLE: &str = "INTAKE 43 DAY SCHOLARS";
const DECLARATION_TEXT: &str = "I hereby certify that all the information provided above is \
                                true and accurate to the best of my knowledge.";

const PHOTO_WIDTH: f64 = 100.0;
const PHOTO_HEIGHT: f64 = 130.0;

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Decorative border, centered titles, separator rule. Returns the cursor.
fn header(canvas: &mut impl Canvas) -> Result<f64> {
    let w = canvas.page_width();
    let h = canvas.page_height();

    canvas.draw_rect(
        Rect::new(20.0, 20.0, w - 40.0, h - 40.0),
        &ShapeStyle::stroke(style::ACCENT, 2.0),
    )?;
    canvas.draw_rect(
        Rect::new(30.0, 30.0, w - 60.0, h - 60.0),
        &ShapeStyle::stroke(style::ACCENT, 1.0),
    )?;

    let title_style = TextStyle::bold(12.0)
        .with_color(style::ACCENT)
        .with_align(Align::Center);
    canvas.draw_text(TITLE, w / 2.0, 60.0, &title_style)?;
    canvas.draw_text(SUBTITLE, w / 2.0, 80.0, &title_style)?;

    canvas.draw_line(
        style::LEFT_MARGIN,
        90.0,
        w - style::RIGHT_MARGIN,
        90.0,
        style::ACCENT,
        1.0,
    )?;

    Ok(110.0)
}

/// Photo frame with the identity label/value block beside it
fn photo_and_identity(
    canvas: &mut impl Canvas,
    record: &SubmissionRecord,
    photo: Option<&[u8]>,
    y: f64,
) -> Result<f64> {
    let photo_x = style::LEFT_MARGIN;

    canvas.draw_rect(
        Rect::new(photo_x, y, PHOTO_WIDTH, PHOTO_HEIGHT),
        &ShapeStyle::stroke(style::MID_GRAY, 1.0),
    )?;

    let placeholder = TextStyle::regular(10.0)
        .with_color(style::MID_GRAY)
        .with_align(Align::Center);
    let center_x = photo_x + PHOTO_WIDTH / 2.0;
    let center_y = y + PHOTO_HEIGHT / 2.0;
    match photo {
        Some(bytes) => {
            let inset = Rect::new(
                photo_x + 3.0,
                y + 3.0,
                PHOTO_WIDTH - 6.0,
                PHOTO_HEIGHT - 6.0,
            );
            if canvas.draw_image(bytes, inset).is_err() {
                canvas.draw_text("Photo", center_x, center_y, &placeholder)?;
            }
        }
        None => {
            canvas.draw_text("PHOTO", center_x, center_y, &placeholder)?;
        }
    }

    let info_x = photo_x + PHOTO_WIDTH + 20.0;
    let label = TextStyle::bold(12.0);
    let value = TextStyle::regular(12.0);
    let accent_value = value.with_color(style::ACCENT);

    canvas.draw_text("Dayscholar No:", info_x, y + 20.0, &label)?;
    canvas.draw_text(or_na(&record.dayscholar_no), info_x + 90.0, y + 20.0, &accent_value)?;

    canvas.draw_text("Name with Initials:", info_x, y + 40.0, &label)?;
    canvas.draw_text(or_na(&record.name_initials), info_x, y + 55.0, &value)?;

    canvas.draw_text("Full Name:", info_x, y + 75.0, &label)?;
    canvas.draw_text(or_na(&record.full_name), info_x, y + 90.0, &value)?;

    canvas.draw_text("Academic Stream:", info_x, y + 110.0, &label)?;
    canvas.draw_text(
        or_na(&record.academic_stream),
        info_x + 110.0,
        y + 110.0,
        &accent_value,
    )?;

    Ok(y + PHOTO_HEIGHT + 30.0)
}

/// Numbered heading with its background strip; breaks the page when too low
fn section_heading(
    canvas: &mut impl Canvas,
    number: usize,
    title: &str,
    mut y: f64,
) -> Result<f64> {
    if y > canvas.page_height() - style::HEADING_BREAK {
        canvas.start_page();
        y = style::TOP_CURSOR;
    }

    let content_w = style::content_width(canvas.page_width());
    let strip = Rect::new(style::LEFT_MARGIN, y - 8.0, content_w, 20.0);
    canvas.draw_rect(strip, &ShapeStyle::fill(style::SECTION_BG))?;
    canvas.draw_rect(strip, &ShapeStyle::stroke(style::ACCENT, 1.0))?;

    let text = format!("{}. {}", style::roman_numeral(number), title);
    canvas.draw_text(
        &text,
        style::LEFT_MARGIN + 8.0,
        y + 7.0,
        &TextStyle::bold(12.0).with_color(style::ACCENT),
    )?;

    Ok(y + 25.0)
}

/// Caption plus table; breaks the page when too low
fn captioned_table(canvas: &mut impl Canvas, table: &TableData, mut y: f64) -> Result<f64> {
    if y > canvas.page_height() - style::TABLE_BREAK {
        canvas.start_page();
        y = style::TOP_CURSOR;
    }

    canvas.draw_text(
        &table.caption,
        style::LEFT_MARGIN,
        y,
        &TextStyle::bold(12.0).with_color(style::DARK_GRAY),
    )?;
    y += 18.0;

    let end = canvas.draw_table(table, y)?;
    Ok(end + 15.0)
}

fn declaration(canvas: &mut impl Canvas, mut y: f64) -> Result<()> {
    let w = canvas.page_width();
    if y > canvas.page_height() - style::DECLARATION_BREAK {
        canvas.start_page();
        y = style::TOP_CURSOR;
    }

    y += 20.0;
    canvas.draw_line(
        style::LEFT_MARGIN,
        y,
        w - style::RIGHT_MARGIN,
        y,
        style::ACCENT,
        1.0,
    )?;

    y += 25.0;
    canvas.draw_text(
        "DECLARATION",
        style::LEFT_MARGIN,
        y,
        &TextStyle::bold(12.0).with_color(style::ACCENT),
    )?;

    y += 20.0;
    let body = TextStyle::regular(11.0);
    canvas.draw_text(DECLARATION_TEXT, style::LEFT_MARGIN, y, &body)?;

    y += 40.0;
    canvas.draw_text("Date: ___________________", style::LEFT_MARGIN, y, &body)?;
    canvas.draw_text(
        "Signature: ___________________",
        w - style::RIGHT_MARGIN - 200.0,
        y,
        &body,
    )?;

    Ok(())
}

/// Render the whole report onto a canvas
pub fn render(
    record: &SubmissionRecord,
    photo: Option<&[u8]>,
    canvas: &mut impl Canvas,
) -> Result<()> {
    let y = header(canvas)?;
    let mut y = photo_and_identity(canvas, record, photo, y)?;

    for (index, section) in sections::build_sections(record).iter().enumerate() {
        y = section_heading(canvas, index + 1, section.title, y)?;
        for table in &section.tables {
            y = captioned_table(canvas, table, y)?;
        }
    }

    declaration(canvas, y)
}

/// Render to PDF bytes
pub fn render_pdf(record: &SubmissionRecord, photo: Option<&[u8]>) -> Result<Vec<u8>> {
    let mut canvas = PdfCanvas::new();
    render(record, photo, &mut canvas)?;
    canvas.to_bytes()
}

/// Derive the download filename from the full name
///
/// Characters outside `[A-Za-z0-9_-]` become `_`; the result is lowercased.
pub fn output_filename(full_name: &str) -> String {
    let base = if full_name.is_empty() {
        "personal_details"
    } else {
        full_name
    };
    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{sanitized}_intake43_dayscholar.pdf")
}
