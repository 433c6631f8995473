//! WAV to raw i16 array conversion

use std::path::{Path, PathBuf};
use byteorder::{ByteOrder, LittleEndian};
use crate::audio::wav::{check_sample_width, read_frames};
use crate::config::AudioConfig;
use crate::error::{ConvertError, Result};
use crate::output::{output_path_for, write_output};

pub const BYTES_PER_SAMPLE: usize = 2;

/// Reinterpret a frame buffer as little-endian i16 samples in stored order.
pub fn frames_to_samples(path: &Path, bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(ConvertError::OddFrameLength { path: path.to_path_buf(), len: bytes.len() });
    }
    let mut samples = vec![0i16; bytes.len() / BYTES_PER_SAMPLE];
    LittleEndian::read_i16_into(bytes, &mut samples);
    Ok(samples)
}

/// Little-endian regardless of host byte order.
pub fn encode_samples(samples: &[i16]) -> Vec<u8> {
    let mut out = vec![0u8; samples.len() * BYTES_PER_SAMPLE];
    LittleEndian::write_i16_into(samples, &mut out);
    out
}

#[derive(Debug, Clone)]
pub struct AudioReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub sample_count: usize,
    pub channels: u16,
    pub sample_rate: u32,
    pub bytes_written: u64,
}

/// Convert one WAV file to its sibling `.bin` file.
///
/// Every check runs before the output is created, so a rejected input
/// leaves no `.bin` behind.
pub fn convert_wav(input_path: &Path, config: &AudioConfig) -> Result<AudioReport> {
    let frames = read_frames(input_path)?;
    log::debug!(
        "{}: {} stored samples, {} bytes each",
        input_path.display(), frames.sample_count(), frames.bytes_per_sample()
    );
    if config.require_pcm16 {
        check_sample_width(input_path, &frames.spec)?;
    } else if frames.spec.bits_per_sample != 16 {
        log::warn!(
            "{} is {}-bit, reinterpreting raw frames as 16-bit samples",
            input_path.display(), frames.spec.bits_per_sample
        );
    }

    let samples = frames_to_samples(input_path, &frames.bytes)?;
    let output_path = output_path_for(input_path);
    let bytes_written = write_output(&output_path, &encode_samples(&samples))?;

    Ok(AudioReport {
        input_path: input_path.to_path_buf(),
        output_path,
        sample_count: samples.len(),
        channels: frames.spec.channels,
        sample_rate: frames.spec.sample_rate,
        bytes_written,
    })
}
