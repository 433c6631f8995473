//! WAV container reading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use byteorder::{ByteOrder, LittleEndian};
use hound::{SampleFormat, WavReader, WavSpec};
use crate::error::{ConvertError, Result};

/// The data chunk as stored: every sample at its declared width, in
/// container order, little-endian.
#[derive(Debug, Clone)]
pub struct RawFrames {
    pub spec: WavSpec,
    pub bytes: Vec<u8>,
}

impl RawFrames {
    pub fn bytes_per_sample(&self) -> usize {
        bytes_per_sample(&self.spec)
    }

    /// Number of stored samples across all channels.
    pub fn sample_count(&self) -> usize {
        self.bytes.len() / self.bytes_per_sample().max(1)
    }
}

fn bytes_per_sample(spec: &WavSpec) -> usize {
    (spec.bits_per_sample as usize).div_ceil(8)
}

fn wav_error(path: &Path, err: hound::Error) -> ConvertError {
    match err {
        hound::Error::IoError(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            ConvertError::decode(path, "data chunk is truncated")
        }
        hound::Error::IoError(e) => ConvertError::io(path, e),
        other => ConvertError::decode(path, other.to_string()),
    }
}

/// Read the whole data chunk of a WAV file in one pass.
pub fn read_frames(path: &Path) -> Result<RawFrames> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    let mut reader = WavReader::new(BufReader::new(file)).map_err(|e| wav_error(path, e))?;

    let spec = reader.spec();
    let width = bytes_per_sample(&spec);
    let mut bytes = Vec::with_capacity(reader.len() as usize * width);

    match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, _) => {
            let mut le = [0u8; 4];
            for sample in reader.samples::<f32>() {
                LittleEndian::write_f32(&mut le, sample.map_err(|e| wav_error(path, e))?);
                bytes.extend_from_slice(&le);
            }
        }
        // 8-bit WAV data is unsigned with a 128 offset
        (SampleFormat::Int, 8) => {
            for sample in reader.samples::<i8>() {
                let sample = sample.map_err(|e| wav_error(path, e))?;
                bytes.push((sample as u8) ^ 0x80);
            }
        }
        (SampleFormat::Int, _) => {
            let mut le = [0u8; 4];
            for sample in reader.samples::<i32>() {
                LittleEndian::write_i32(&mut le, sample.map_err(|e| wav_error(path, e))?);
                bytes.extend_from_slice(&le[..width]);
            }
        }
    }

    log::debug!(
        "Read {}: {} Hz, {} ch, {}-bit {:?}, {} bytes",
        path.display(), spec.sample_rate, spec.channels,
        spec.bits_per_sample, spec.sample_format, bytes.len()
    );

    Ok(RawFrames { spec, bytes })
}

/// Only 16-bit integer PCM maps one stored sample to one output sample.
pub fn check_sample_width(path: &Path, spec: &WavSpec) -> Result<()> {
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        let kind = match spec.sample_format {
            SampleFormat::Int => "integer",
            SampleFormat::Float => "float",
        };
        return Err(ConvertError::unsupported(
            path,
            format!("expected 16-bit integer PCM, found {}-bit {}", spec.bits_per_sample, kind),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavWriter;
    use tempfile::TempDir;

    fn spec(channels: u16, bits: u16, format: SampleFormat) -> WavSpec {
        WavSpec { channels, sample_rate: 8000, bits_per_sample: bits, sample_format: format }
    }

    #[test]
    fn test_read_pcm16_frames() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tone.wav");
        let mut writer = WavWriter::create(&path, spec(2, 16, SampleFormat::Int)).unwrap();
        for s in [1i16, -1, 0x1234, i16::MIN] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let frames = read_frames(&path).unwrap();
        assert_eq!(frames.spec.channels, 2);
        assert_eq!(frames.bytes_per_sample(), 2);
        assert_eq!(frames.sample_count(), 4);
        assert_eq!(frames.bytes, vec![0x01, 0x00, 0xFF, 0xFF, 0x34, 0x12, 0x00, 0x80]);
        assert!(check_sample_width(&path, &frames.spec).is_ok());
    }

    #[test]
    fn test_read_8bit_frames_as_stored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("byte.wav");
        let mut writer = WavWriter::create(&path, spec(1, 8, SampleFormat::Int)).unwrap();
        for s in [-128i8, 0, 127] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let frames = read_frames(&path).unwrap();
        assert_eq!(frames.bytes, vec![0x00, 0x80, 0xFF]);
        assert!(check_sample_width(&path, &frames.spec).is_err());
    }

    #[test]
    fn test_read_24bit_frames() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deep.wav");
        let mut writer = WavWriter::create(&path, spec(1, 24, SampleFormat::Int)).unwrap();
        writer.write_sample(-2i32).unwrap();
        writer.write_sample(0x010203i32).unwrap();
        writer.finalize().unwrap();

        let frames = read_frames(&path).unwrap();
        assert_eq!(frames.bytes, vec![0xFE, 0xFF, 0xFF, 0x03, 0x02, 0x01]);

        let err = check_sample_width(&path, &frames.spec).unwrap_err();
        assert!(err.to_string().contains("24-bit integer"));
    }

    #[test]
    fn test_float_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("float.wav");
        let mut writer = WavWriter::create(&path, spec(1, 32, SampleFormat::Float)).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.finalize().unwrap();

        let frames = read_frames(&path).unwrap();
        assert_eq!(frames.bytes, 0.5f32.to_le_bytes().to_vec());
        assert!(matches!(
            check_sample_width(&path, &frames.spec),
            Err(ConvertError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_malformed_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("junk.wav");
        std::fs::write(&path, b"RIFX not really a wave file").unwrap();

        let err = read_frames(&path).unwrap_err();
        assert!(err.is_decode());

        let err = read_frames(&temp_dir.path().join("missing.wav")).unwrap_err();
        assert!(err.is_io());
    }
}
