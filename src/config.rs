//! Configuration management for the converters

use crate::error::{ConvertError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub image: ImageConfig,
    pub audio: AudioConfig,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Process directory entries sorted by file name instead of listing order.
    pub sort_entries: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Reject WAV files that are not 16-bit integer PCM.
    pub require_pcm16: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { require_pcm16: true }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "img2bin", about = "Convert every image in a directory to a raw RGBA .bin array", version)]
pub struct ImageArgs {
    #[arg(help = "Directory containing the images to convert")]
    pub directory: PathBuf,

    #[arg(long = "sort", help = "Process files sorted by name instead of directory listing order")]
    pub sort: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(long = "save-config", help = "Write the effective configuration to this TOML file")]
    pub save_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wav2bin", about = "Convert a WAV file to a raw little-endian i16 .bin array", version)]
pub struct AudioArgs {
    #[arg(help = "WAV file to convert")]
    pub input: PathBuf,

    #[arg(long = "any-bit-depth", help = "Skip the 16-bit PCM check and reinterpret the raw frames as i16")]
    pub any_bit_depth: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(long = "save-config", help = "Write the effective configuration to this TOML file")]
    pub save_config: Option<PathBuf>,
}

impl Config {
    fn base(config_file: Option<&PathBuf>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Command line flags only ever switch a setting on; the file supplies the rest.
    pub fn from_image_args(args: &ImageArgs) -> Result<Self> {
        let mut config = Self::base(args.config_file.as_ref())?;
        config.image.sort_entries |= args.sort;
        config.verbose |= args.verbose;
        Ok(config)
    }

    pub fn from_audio_args(args: &AudioArgs) -> Result<Self> {
        let mut config = Self::base(args.config_file.as_ref())?;
        if args.any_bit_depth {
            config.audio.require_pcm16 = false;
        }
        config.verbose |= args.verbose;
        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConvertError::config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConvertError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConvertError::config(format!("Failed to write config file: {}", e)))
    }
}
