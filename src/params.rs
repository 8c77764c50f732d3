use crate::error::{ConfigError, Result};
use crate::operations::colorize::Palette;
use crate::operations::faces::FaceStrategy;

/// Parameters controlling one composition run.
#[derive(Debug, Clone)]
pub struct MondrianParams {
    /// Number of partition lines added inside the border.
    pub partitions: usize,
    /// Canvas width in pixels.
    pub width: i64,
    /// Canvas height in pixels.
    pub height: i64,
    /// Minimum distance a new line's endpoints must keep from every existing point.
    pub min_spacing: f64,
    /// Candidate draws allowed per partition before giving up.
    pub max_attempts: usize,
    /// How faces are recovered from the finished arrangement.
    pub face_strategy: FaceStrategy,
    /// Colors available to the colorizer.
    pub palette: Palette,
}

impl Default for MondrianParams {
    fn default() -> Self {
        Self {
            partitions: 8,
            width: 800,
            height: 600,
            min_spacing: 50.0,
            max_attempts: 10_000,
            face_strategy: FaceStrategy::default(),
            palette: Palette::default(),
        }
    }
}

impl MondrianParams {
    /// Checks the parameters for values no run could succeed with.
    ///
    /// A spacing that is merely too large for the canvas is not rejected here;
    /// it surfaces as `PlacementInfeasible` once the attempt cap is hit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the canvas is empty or wider or taller than
    /// [`MAX_CANVAS_SIDE`], the spacing is negative or not finite, or the
    /// attempt cap is zero.
    pub fn validate(&self) -> Result<()> {
        check_generation(self.width, self.height, self.min_spacing, self.max_attempts)
    }
}

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: i64 = 1 << 20;

/// Shared checks for anything that drives the generator.
pub(crate) fn check_generation(
    width: i64,
    height: i64,
    min_spacing: f64,
    max_attempts: usize,
) -> Result<()> {
    if width < 1 || height < 1 {
        return Err(ConfigError::EmptyCanvas { width, height }.into());
    }
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(ConfigError::CanvasTooLarge {
            width,
            height,
            max: MAX_CANVAS_SIDE,
        }
        .into());
    }
    if !min_spacing.is_finite() || min_spacing < 0.0 {
        return Err(ConfigError::InvalidSpacing(min_spacing).into());
    }
    if max_attempts == 0 {
        return Err(ConfigError::ZeroAttempts.into());
    }
    Ok(())
}
