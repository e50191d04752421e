//! PDF document model
//!
//! Builds an A4 document from scratch:
//! - Content operators are buffered per page and assembled at save time
//! - Coordinates given to the drawing methods use a top-left origin
//!   (y grows downward) and are flipped to PDF bottom-left coordinates here
//! - Built-in Helvetica fonts are registered on every page's resources
//! - Decoded images are deduplicated by content hash across pages

use crate::font::{self, FontWeight};
use crate::graphics::{self, PaintMode};
use crate::image::{self, ImageXObject};
use crate::text::{self, TextRenderContext};
use crate::{Align, PdfError, Result};
use lopdf::dictionary;
use lopdf::{Document, Object, Stream};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A4 page width in points
pub const PAGE_WIDTH: f64 = 595.28;
/// A4 page height in points
pub const PAGE_HEIGHT: f64 = 841.89;

/// RGB color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Color from normalized components
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from 8-bit components
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Uniform gray from an 8-bit level
    pub fn gray(level: u8) -> Self {
        Self::from_rgb(level, level, level)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// One page being built: buffered content operators plus the image
/// resources the operators reference
struct PageBuffer {
    content: Vec<u8>,
    /// (resource name, index into the document image table)
    images: Vec<(String, usize)>,
}

impl PageBuffer {
    fn new() -> Self {
        Self {
            content: Vec::new(),
            images: Vec::new(),
        }
    }
}

/// In-progress PDF document
///
/// # Example ignore
/// ```ignore
/// let mut doc = PdfDocument::new();
/// doc.draw_text(0, "Hello", 40.0, 50.0, Align::Left, FontWeight::Bold, 18.0, Color::black())?;
/// let bytes = doc.to_bytes()?;
/// ```
pub struct PdfDocument {
    pages: Vec<PageBuffer>,
    /// Decoded images, deduplicated by content hash
    images: Vec<ImageXObject>,
    image_hashes: Vec<u64>,
}

impl PdfDocument {
    /// Create a document with one empty A4 page
    pub fn new() -> Self {
        Self {
            pages: vec![PageBuffer::new()],
            images: Vec::new(),
            image_hashes: Vec::new(),
        }
    }

    /// Append a new empty page and return its index
    pub fn add_page(&mut self) -> usize {
        self.pages.push(PageBuffer::new());
        self.pages.len() - 1
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_mut(&mut self, page: usize) -> Result<&mut PageBuffer> {
        let count = self.pages.len();
        self.pages
            .get_mut(page)
            .ok_or(PdfError::InvalidPage { page, count })
    }

    /// Measure a text run in points
    pub fn text_width(&self, text: &str, size: f32, weight: FontWeight) -> f64 {
        font::text_width_points(text, size, weight)
    }

    /// Draw a text run at a top-origin baseline position
    ///
    /// # Arguments
    /// * `page` - Page index
    /// * `text` - Text to draw
    /// * `x` - Baseline X from the left edge
    /// * `y` - Baseline Y from the top edge
    /// * `align` - Alignment relative to `x`
    /// * `weight` - Font weight
    /// * `size` - Font size in points
    /// * `color` - Fill color
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        page: usize,
        text: &str,
        x: f64,
        y: f64,
        align: Align,
        weight: FontWeight,
        size: f32,
        color: Color,
    ) -> Result<()> {
        let width = font::text_width_points(text, size, weight);
        let ctx = TextRenderContext {
            weight,
            font_size: size,
            text_width: width,
            color,
        };
        let ops = text::generate_text_operators(text, x, PAGE_HEIGHT - y, align, &ctx);
        self.page_mut(page)?.content.extend_from_slice(&ops);
        Ok(())
    }

    /// Draw a rectangle whose top-left corner is at (`x`, `y`)
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rect(
        &mut self,
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: Color,
        fill: Color,
        line_width: f64,
        mode: PaintMode,
    ) -> Result<()> {
        let pdf_y = PAGE_HEIGHT - y - height;
        let ops =
            graphics::generate_rect_operators(x, pdf_y, width, height, stroke, fill, line_width, mode);
        self.page_mut(page)?.content.extend_from_slice(&ops);
        Ok(())
    }

    /// Draw a line between two top-origin points
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(
        &mut self,
        page: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        line_width: f64,
    ) -> Result<()> {
        let ops = graphics::generate_line_operators(
            x1,
            PAGE_HEIGHT - y1,
            x2,
            PAGE_HEIGHT - y2,
            color,
            line_width,
        );
        self.page_mut(page)?.content.extend_from_slice(&ops);
        Ok(())
    }

    /// Decode and place an image with its top-left corner at (`x`, `y`)
    ///
    /// The same image bytes placed twice share one XObject.
    pub fn draw_image(
        &mut self,
        page: usize,
        data: &[u8],
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        let hash = hasher.finish();

        let index = match self.image_hashes.iter().position(|&h| h == hash) {
            Some(i) => i,
            None => {
                let xobj = ImageXObject::decode(data)?;
                self.images.push(xobj);
                self.image_hashes.push(hash);
                self.images.len() - 1
            }
        };

        let name = format!("Im{}", index + 1);
        let ops =
            image::generate_image_operators(&name, x, PAGE_HEIGHT - y - height, width, height);
        let buffer = self.page_mut(page)?;
        if !buffer.images.iter().any(|(_, i)| *i == index) {
            buffer.images.push((name, index));
        }
        buffer.content.extend_from_slice(&ops);
        Ok(())
    }

    /// Assemble and serialize the document
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // Shared font dictionaries
        let regular_id = doc.add_object(font::font_dictionary(FontWeight::Regular));
        let bold_id = doc.add_object(font::font_dictionary(FontWeight::Bold));

        // Image XObjects, one per distinct decoded image
        let image_ids: Vec<_> = self
            .images
            .iter()
            .map(|img| doc.add_object(img.to_pdf_stream()))
            .collect();

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                page.content.clone(),
            ));

            let mut resources = dictionary! {
                "Font" => dictionary! {
                    FontWeight::Regular.resource_name() => regular_id,
                    FontWeight::Bold.resource_name() => bold_id,
                },
            };
            if !page.images.is_empty() {
                let mut xobjects = lopdf::Dictionary::new();
                for (name, index) in &page.images {
                    xobjects.set(name.as_bytes(), image_ids[*index]);
                }
                resources.set("XObject", xobjects);
            }

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Real(0.0),
                    Object::Real(0.0),
                    Object::Real(595.28), // A4 width
                    Object::Real(841.89), // A4 height
                ],
                "Resources" => resources,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(bytes)
    }
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}
