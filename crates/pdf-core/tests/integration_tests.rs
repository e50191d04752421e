//! Integration tests: build a document, serialize it, parse it back

use pdf_core::{Align, Color, FontWeight, PaintMode, PdfDocument};

fn tiny_jpeg() -> Vec<u8> {
    vec![
        0xFF, 0xD8, // SOI
        0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x02, 0x00, 0x02, 0x03, 0x01, 0x22, 0x00, 0x02, 0x11,
        0x01, 0x03, 0x11, 0x01, // SOF0, 2x2, 3 components
        0xFF, 0xD9, // EOI
    ]
}

#[test]
fn test_single_page_text_roundtrip() {
    let mut doc = PdfDocument::new();
    doc.draw_text(
        0,
        "PERSONAL DETAILS",
        297.64,
        60.0,
        Align::Center,
        FontWeight::Bold,
        18.0,
        Color::from_rgb(20, 90, 160),
    )
    .unwrap();

    let bytes = doc.to_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));

    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let pages = parsed.get_pages();
    assert_eq!(pages.len(), 1);

    let content = parsed.get_page_content(pages[&1]).unwrap();
    let content_str = String::from_utf8_lossy(&content);
    assert!(content_str.contains("(PERSONAL DETAILS) Tj"));
    assert!(content_str.contains("/F2 18 Tf"));
}

#[test]
fn test_multi_page_document() {
    let mut doc = PdfDocument::new();
    doc.draw_text(
        0,
        "Page one",
        40.0,
        50.0,
        Align::Left,
        FontWeight::Regular,
        12.0,
        Color::black(),
    )
    .unwrap();
    let second = doc.add_page();
    doc.draw_text(
        second,
        "Page two",
        40.0,
        50.0,
        Align::Left,
        FontWeight::Regular,
        12.0,
        Color::black(),
    )
    .unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let pages = parsed.get_pages();
    assert_eq!(pages.len(), 2);

    let first_content = parsed.get_page_content(pages[&1]).unwrap();
    let second_content = parsed.get_page_content(pages[&2]).unwrap();
    assert!(String::from_utf8_lossy(&first_content).contains("(Page one)"));
    assert!(String::from_utf8_lossy(&second_content).contains("(Page two)"));
}

#[test]
fn test_shapes_and_media_box() {
    let mut doc = PdfDocument::new();
    doc.draw_rect(
        0,
        20.0,
        20.0,
        555.28,
        801.89,
        Color::from_rgb(20, 90, 160),
        Color::white(),
        2.0,
        PaintMode::Stroke,
    )
    .unwrap();
    doc.draw_line(0, 40.0, 90.0, 555.28, 90.0, Color::black(), 1.0)
        .unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let pages = parsed.get_pages();
    let page = parsed.get_object(pages[&1]).unwrap().as_dict().unwrap();

    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    assert_eq!(media_box.len(), 4);
    assert!((media_box[2].as_float().unwrap() - 595.28).abs() < 0.01);
    assert!((media_box[3].as_float().unwrap() - 841.89).abs() < 0.01);

    let content = parsed.get_page_content(pages[&1]).unwrap();
    let content_str = String::from_utf8_lossy(&content);
    assert!(content_str.contains("re"));
    assert!(content_str.contains(" l"));
}

#[test]
fn test_image_embedding() {
    let mut doc = PdfDocument::new();
    doc.draw_image(0, &tiny_jpeg(), 43.0, 113.0, 94.0, 124.0)
        .unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let pages = parsed.get_pages();
    let page = parsed.get_object(pages[&1]).unwrap().as_dict().unwrap();

    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    assert!(xobjects.get(b"Im1").is_ok());

    let content = parsed.get_page_content(pages[&1]).unwrap();
    assert!(String::from_utf8_lossy(&content).contains("/Im1 Do"));
}

#[test]
fn test_fonts_registered_on_every_page() {
    let mut doc = PdfDocument::new();
    doc.add_page();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    for (_, page_id) in parsed.get_pages() {
        let page = parsed.get_object(page_id).unwrap().as_dict().unwrap();
        let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
        let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
        assert!(fonts.get(b"F1").is_ok());
        assert!(fonts.get(b"F2").is_ok());
    }
}
