//! media2bin - Raw binary arrays from images and WAV audio
//!
//! Images become a little-endian width/height header followed by RGBA8
//! pixels. WAV audio becomes a flat array of little-endian i16 samples.

pub mod audio;
pub mod config;
pub mod error;
pub mod image;
pub mod output;

pub use config::{Config, ImageArgs, AudioArgs};
pub use error::{ConvertError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_env("RUST_LOG")
        .filter_level(level)
        .try_init()
        .ok();
}

pub fn get_library_info() -> LibraryInfo {
    LibraryInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl std::fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_info() {
        let info = get_library_info().to_string();
        assert!(info.starts_with("media2bin v"));
    }
}
