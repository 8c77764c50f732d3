use thiserror::Error;

use crate::geometry::Segment;

/// Top-level error type for the Mondrian generator.
#[derive(Debug, Error)]
pub enum MondrianError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Face(#[from] FaceError),
}

/// Errors raised while validating generation parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: i64, height: i64 },

    #[error("canvas {width}x{height} exceeds the {max}px side limit")]
    CanvasTooLarge { width: i64, height: i64, max: i64 },

    #[error("minimum spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f64),

    #[error("attempt cap must be at least 1")]
    ZeroAttempts,
}

/// Errors raised while building an arrangement.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "could not place partition {placed} of {requested}: \
         {attempts} candidates all fell within {min_spacing} of an existing point"
    )]
    PlacementInfeasible {
        placed: usize,
        requested: usize,
        attempts: usize,
        min_spacing: f64,
    },
}

/// Errors raised while reconstructing faces.
#[derive(Debug, Error)]
pub enum FaceError {
    #[error("segment {0} is not axis-aligned")]
    NotAxisAligned(Segment),
}

/// Convenience type alias for results using [`MondrianError`].
pub type Result<T> = std::result::Result<T, MondrianError>;
