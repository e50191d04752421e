//! Built-in font support
//!
//! The document model uses the PDF base-14 Helvetica family, so no font
//! programs are embedded. Width metrics (AFM advance widths, thousandths of
//! an em) are carried here for text measurement and alignment.

use lopdf::{Dictionary, Object};

/// Font weight for the built-in family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// PDF BaseFont name
    pub fn base_font(self) -> &'static str {
        match self {
            FontWeight::Regular => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }

    /// Content-stream resource name (stable across pages)
    pub fn resource_name(self) -> &'static str {
        match self {
            FontWeight::Regular => "F1",
            FontWeight::Bold => "F2",
        }
    }
}

/// Helvetica advance widths for characters 32..=126 (AFM, units/1000)
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // A..P
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // Q..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // a..p
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // q..z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold advance widths for characters 32..=126 (AFM, units/1000)
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, // A..P
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // Q..Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, // a..p
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // q..z
    389, 280, 389, 584, // {..~
];

/// Width outside the measured range (characters the tables do not cover)
const DEFAULT_WIDTH: u16 = 556;

/// Advance width of a character in thousandths of an em
pub fn advance_width(c: char, weight: FontWeight) -> u16 {
    let code = c as u32;
    if (32..=126).contains(&code) {
        let idx = (code - 32) as usize;
        match weight {
            FontWeight::Regular => HELVETICA_WIDTHS[idx],
            FontWeight::Bold => HELVETICA_BOLD_WIDTHS[idx],
        }
    } else {
        DEFAULT_WIDTH
    }
}

/// Measure text width in points for a given font size
///
/// # Arguments
/// * `text` - Text to measure
/// * `size` - Font size in points
/// * `weight` - Font weight
pub fn text_width_points(text: &str, size: f32, weight: FontWeight) -> f64 {
    let units: u64 = text
        .chars()
        .map(|c| advance_width(c, weight) as u64)
        .sum();
    units as f64 * size as f64 / 1000.0
}

/// Encode text as WinAnsi bytes for a PDF string literal
///
/// ASCII passes through; the Latin-1 block maps directly (WinAnsi agrees
/// with it above 0xA0); anything else degrades to `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (32..=126).contains(&code) || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

/// Build the PDF font dictionary for a built-in font
///
/// Base-14 fonts need no FontDescriptor or embedded program.
pub fn font_dictionary(weight: FontWeight) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"Font".to_vec()));
    dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    dict.set(
        "BaseFont",
        Object::Name(weight.base_font().as_bytes().to_vec()),
    );
    dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    dict
}
