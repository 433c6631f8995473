//! RGBA pixel buffer decoding and serialization

use std::path::{Path, PathBuf};
use byteorder::{ByteOrder, LittleEndian};
use crate::error::{ConvertError, Result};
use crate::output::{output_path_for, write_output};

/// Little-endian u32 width followed by little-endian u32 height.
pub const HEADER_LEN: usize = 8;
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA8 pixels, top-to-bottom, left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Returns `None` unless `pixels` holds exactly `width * height` RGBA records.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = Self::pixel_bytes(width, height)?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    fn pixel_bytes(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(BYTES_PER_PIXEL)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// Size of the serialized form: header plus four bytes per pixel.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.pixels.len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.encoded_len()];
        LittleEndian::write_u32(&mut out[0..4], self.width);
        LittleEndian::write_u32(&mut out[4..8], self.height);
        out[HEADER_LEN..].copy_from_slice(&self.pixels);
        out
    }
}

/// Decode any supported image file and normalize it to RGBA8.
///
/// The format is sniffed from the file content; the extension is only a
/// fallback for formats without a signature (TGA).
pub fn decode_image(path: &Path) -> Result<PixelBuffer> {
    let image = ::image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ConvertError::io(path, e))?
        .decode()
        .map_err(|e| match e {
            ::image::ImageError::IoError(io) => ConvertError::io(path, io),
            other => ConvertError::decode(path, other.to_string()),
        })?;

    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Decoded {}: {}x{}", path.display(), width, height);

    PixelBuffer::from_raw(width, height, rgba.into_raw())
        .ok_or(ConvertError::DimensionOverflow { width, height })
}

#[derive(Debug, Clone)]
pub struct ImageReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes_written: u64,
}

impl ImageReport {
    pub fn print(&self) {
        println!("Generated {}", self.output_path.display());
        println!("Image dimensions: {}x{}", self.width, self.height);
        println!("Total file size: {} bytes", self.bytes_written);
    }
}

/// Convert one image to its sibling `.bin` file.
pub fn convert_image(input_path: &Path) -> Result<ImageReport> {
    let buffer = decode_image(input_path)?;
    let output_path = output_path_for(input_path);
    let bytes_written = write_output(&output_path, &buffer.encode())?;

    Ok(ImageReport {
        input_path: input_path.to_path_buf(),
        output_path,
        width: buffer.width(),
        height: buffer.height(),
        bytes_written,
    })
}
