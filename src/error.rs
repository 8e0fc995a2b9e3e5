//! Error types for sparks.
//!
//! Trajectory computation and animation cannot fail; only the I/O surfaces
//! (sprite loading, frame output, preset files) return errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or building a sprite.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// The image file could not be read or decoded.
    #[error("failed to load sprite '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Raw pixel data does not match the given dimensions.
    #[error("RGBA data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Errors that can occur when writing rendered frames.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode frame '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Frame rate must be finite and positive.
    #[error("invalid frame rate {0}: must be finite and positive")]
    InvalidFps(f64),
}

/// Errors that can occur when reading an emitter preset.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read preset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid preset: {0}")]
    Parse(#[from] serde_json::Error),
}
