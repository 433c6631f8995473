//! Error Types

use std::path::{Path, PathBuf};

/// Main error type
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Decode error: {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("IO error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported format: {}: {message}", .path.display())]
    UnsupportedFormat { path: PathBuf, message: String },

    #[error("Frame buffer of {len} bytes is not a whole number of 16-bit samples: {}", .path.display())]
    OddFrameLength { path: PathBuf, len: usize },

    #[error("'{}' is not a valid directory", .path.display())]
    InvalidDirectory { path: PathBuf },

    #[error("Image of {width}x{height} pixels is too large to serialize")]
    DimensionOverflow { width: u32, height: u32 },

    #[error("Config error: {message}")]
    Config { message: String },
}

impl ConvertError {
    pub fn decode<P: AsRef<Path>, S: Into<String>>(path: P, msg: S) -> Self {
        Self::Decode { path: path.as_ref().to_path_buf(), message: msg.into() }
    }

    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io { path: path.as_ref().to_path_buf(), source }
    }

    pub fn unsupported<P: AsRef<Path>, S: Into<String>>(path: P, msg: S) -> Self {
        Self::UnsupportedFormat { path: path.as_ref().to_path_buf(), message: msg.into() }
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config { message: msg.into() }
    }

    /// The input could be read but its content was rejected.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::UnsupportedFormat { .. } | Self::OddFrameLength { .. }
        )
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Path of the file the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Decode { path, .. }
            | Self::Io { path, .. }
            | Self::UnsupportedFormat { path, .. }
            | Self::OddFrameLength { path, .. }
            | Self::InvalidDirectory { path } => Some(path),
            Self::DimensionOverflow { .. } | Self::Config { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
