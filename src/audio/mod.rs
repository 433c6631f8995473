//! Audio Conversion Module
//!
//! Reads WAV containers and repacks their frames as a flat array of
//! little-endian signed 16-bit samples.

pub mod wav;
pub mod converter;

pub use wav::{RawFrames, read_frames, check_sample_width};
pub use converter::{AudioReport, frames_to_samples, encode_samples, convert_wav};
