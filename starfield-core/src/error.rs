//! Error types for the starfield core.
//!
//! Surface acquisition is the only runtime failure; configuration errors are
//! caught before a controller is built.

use thiserror::Error;

/// The surface provider could not hand out a drawing context
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to get drawing context: {0}")]
    ContextUnavailable(String),
    #[error("surface has invalid dimensions {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

/// Rejected controller configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max distance must be a positive finite number, got {0}")]
    MaxDistance(f32),
    #[error("max stars must be at least 1")]
    MaxStars,
    #[error("tick interval must be non-zero")]
    TickInterval,
}
