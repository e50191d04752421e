//! Image embedding (JPEG and PNG)

use crate::{PdfError, Result};
use lopdf::{Dictionary, Stream};
use std::io::Cursor;

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// Image XObject ready for PDF embedding
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Color space ("DeviceRGB" or "DeviceGray")
    pub color_space: &'static str,
    /// Stream filter ("DCTDecode" for JPEG, "FlateDecode" for PNG)
    pub filter: &'static str,
    /// Compressed image data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Decode image bytes into an embeddable XObject
    ///
    /// JPEG data is passed through untouched (DCTDecode); PNG data is
    /// decoded, alpha-blended onto white, and zlib-compressed (FlateDecode).
    /// Anything else is rejected.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if is_jpeg(data) {
            Self::from_jpeg(data)
        } else if is_png(data) {
            Self::from_png(data)
        } else {
            Err(PdfError::ImageError(
                "unsupported image format (expected JPEG or PNG)".to_string(),
            ))
        }
    }

    fn from_jpeg(data: &[u8]) -> Result<Self> {
        let (width, height, components) = jpeg_header_info(data)?;
        Ok(Self {
            width,
            height,
            color_space: if components == 1 {
                "DeviceGray"
            } else {
                "DeviceRGB"
            },
            filter: "DCTDecode",
            data: data.to_vec(),
        })
    }

    fn from_png(data: &[u8]) -> Result<Self> {
        let decoded = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| PdfError::ImageError(e.to_string()))?
            .decode()?;
        let (width, height) = (decoded.width(), decoded.height());

        // Blend any alpha onto a white background; PDF image XObjects here
        // carry no soft mask.
        let rgba = decoded.to_rgba8();
        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for px in rgba.pixels() {
            let alpha = px[3] as f32 / 255.0;
            for channel in 0..3 {
                rgb.push((px[channel] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
            }
        }

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        std::io::Write::write_all(&mut encoder, &rgb)?;
        let compressed = encoder.finish()?;

        Ok(Self {
            width,
            height,
            color_space: "DeviceRGB",
            filter: "FlateDecode",
            data: compressed,
        })
    }

    /// Convert to a lopdf stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();
        dict.set("Type", lopdf::Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", lopdf::Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set(
            "ColorSpace",
            lopdf::Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", 8);
        dict.set("Filter", lopdf::Object::Name(self.filter.as_bytes().to_vec()));
        Stream::new(dict, self.data.clone())
    }
}

fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF
}

fn is_png(data: &[u8]) -> bool {
    data.len() >= 8 && data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]
}

/// Scan JPEG markers for the SOF segment: (width, height, components)
fn jpeg_header_info(data: &[u8]) -> Result<(u32, u32, u8)> {
    let mut i = 2;
    while i + 9 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }
        let marker = data[i + 1];
        // SOF0..SOF15 except DHT/JPG/DAC
        if (0xC0..=0xCF).contains(&marker) && marker != 0xC4 && marker != 0xC8 && marker != 0xCC {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            return Ok((width, height, data[i + 9]));
        }
        if i + 4 < data.len() {
            let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
            if length < 2 {
                break;
            }
            i += 2 + length;
        } else {
            break;
        }
    }
    Err(PdfError::ImageError("could not parse JPEG header".to_string()))
}

/// Generate operators to place an image XObject
///
/// # Arguments
/// * `resource_name` - Image resource name (e.g. "Im1")
/// * `x`, `y` - Bottom-left corner in PDF coordinates
/// * `width`, `height` - Display size in points
pub fn generate_image_operators(
    resource_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{resource_name} Do\nQ\n").into_bytes()
}
