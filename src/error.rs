//! Error type shared by the icon generators.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source image '{}' not found.", path.display())]
    MissingSource { path: PathBuf },

    #[error("Failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write PNG '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}
