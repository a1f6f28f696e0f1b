//! Error types for the carousel crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Errors reported by the controller and its configuration layer
#[derive(Error, Debug)]
pub enum CarouselError {
    /// Configuration rejected at construction time
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `go_to` called with an index outside the slide sequence
    #[error("slide index {index} out of range (slide count: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("no image files found in directory: {}", .0.display())]
    NoSlides(PathBuf),
}
