//! Image Conversion Module
//!
//! Decodes images into a normalized RGBA buffer and serializes them as a
//! width/height-prefixed raw pixel array. Directory batches convert every
//! allow-listed file independently.

pub mod pixels;
pub mod batch;

pub use pixels::{PixelBuffer, ImageReport, decode_image, convert_image, HEADER_LEN};
pub use batch::{BatchSummary, IMAGE_EXTENSIONS, is_image_file, collect_image_files, convert_directory};
