//! Directory batch conversion

use std::path::{Path, PathBuf};
use crate::config::ImageConfig;
use crate::error::{ConvertError, Result};
use super::pixels::{convert_image, ImageReport};

/// Extensions accepted for conversion, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "tga", "webp"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed)))
        .unwrap_or(false)
}

/// Direct regular-file entries of `dir` with an allow-listed extension.
pub fn collect_image_files(dir: &Path, sort: bool) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ConvertError::io(dir, e))?.path();
        if path.is_file() && is_image_file(&path) {
            files.push(path);
        }
    }

    if sort {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(files)
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub converted: Vec<ImageReport>,
    pub failures: Vec<ConvertError>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.converted.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn print(&self) {
        println!("\n=== Summary ===");
        println!("Successfully processed: {} images", self.processed());
        if self.failed() > 0 {
            println!("Errors: {} files", self.failed());
        }
    }
}

/// Convert every allow-listed image in `dir`, one at a time.
///
/// Only an unusable directory is an error here. Per-file failures are
/// reported on the console, collected into the summary, and the batch moves on.
pub fn convert_directory(dir: &Path, config: &ImageConfig) -> Result<BatchSummary> {
    if !dir.is_dir() {
        return Err(ConvertError::InvalidDirectory { path: dir.to_path_buf() });
    }

    let files = collect_image_files(dir, config.sort_entries)?;
    log::debug!("Found {} image files in {}", files.len(), dir.display());

    let mut summary = BatchSummary::default();
    for path in files {
        let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy().into_owned();
        println!("\nProcessing: {}", name);

        match convert_image(&path) {
            Ok(report) => {
                log::debug!("{} -> {}", report.input_path.display(), report.output_path.display());
                report.print();
                summary.converted.push(report);
            }
            Err(e) => {
                println!("Error processing {}: {}", path.display(), e);
                if e.is_io() {
                    log::warn!("I/O failure on {}", path.display());
                }
                summary.failures.push(e);
            }
        }
    }

    summary.print();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn write_image(dir: &Path, name: &str, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, Rgb([9, 8, 7])).save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("a.JPEG")));
        assert!(is_image_file(Path::new("dir/a.Tiff")));
        assert!(!is_image_file(Path::new("a.txt")));
        assert!(!is_image_file(Path::new("a.tif")));
        assert!(!is_image_file(Path::new("png")));
        assert!(!is_image_file(Path::new(".png")));
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_image(dir, "b.png", 1, 1);
        write_image(dir, "a.bmp", 1, 1);
        std::fs::write(dir.join("notes.txt"), "hello").unwrap();
        std::fs::create_dir(dir.join("nested.png")).unwrap();
        write_image(&dir.join("nested.png"), "deep.png", 1, 1);

        let files = collect_image_files(dir, true).unwrap();
        assert_eq!(files, vec![dir.join("a.bmp"), dir.join("b.png")]);
    }

    #[test]
    fn test_convert_directory_mixed() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_image(dir, "one.png", 2, 3);
        write_image(dir, "two.BMP", 5, 1);
        std::fs::write(dir.join("readme.md"), "# hi").unwrap();

        let summary = convert_directory(dir, &ImageConfig { sort_entries: true }).unwrap();
        assert_eq!(summary.processed(), 2);
        assert_eq!(summary.failed(), 0);

        assert_eq!(std::fs::metadata(dir.join("one.bin")).unwrap().len(), 8 + 2 * 3 * 4);
        assert_eq!(std::fs::metadata(dir.join("two.bin")).unwrap().len(), 8 + 5 * 4);
        assert!(!dir.join("readme.bin").exists());
    }

    #[test]
    fn test_convert_directory_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        std::fs::write(dir.join("a_corrupt.png"), b"garbage").unwrap();
        write_image(dir, "b_valid.png", 2, 2);

        let summary = convert_directory(dir, &ImageConfig { sort_entries: true }).unwrap();
        assert_eq!(summary.processed(), 1);
        assert_eq!(summary.failed(), 1);
        assert!(summary.failures[0].is_decode());
        assert_eq!(summary.failures[0].path(), Some(dir.join("a_corrupt.png").as_path()));
        assert!(dir.join("b_valid.bin").exists());
    }

    #[test]
    fn test_convert_directory_rejects_non_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.png");
        write_image(temp_dir.path(), "file.png", 1, 1);

        let err = convert_directory(&file, &ImageConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidDirectory { .. }));

        let err = convert_directory(&temp_dir.path().join("missing"), &ImageConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidDirectory { .. }));
        assert!(!temp_dir.path().join("file.bin").exists());
    }
}
