//! Output file naming and writing shared by both converters

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use crate::error::{ConvertError, Result};

pub const OUTPUT_EXTENSION: &str = "bin";

/// Sibling path with the last extension replaced by `.bin` (appended when there is none).
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Create or truncate `path` and write `bytes` in full. The handle is closed on return.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<u64> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(bytes).map_err(|e| ConvertError::io(path, e))?;
    writer.flush().map_err(|e| ConvertError::io(path, e))?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len() as u64)
}
