mod arrangement;
mod clip;

pub use arrangement::{Arrangement, Placement};
pub use clip::{clip_against, clip_through, Endpoint};

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::error::{GenerationError, Result};
use crate::geometry::Segment;
use crate::params::{check_generation, MondrianParams};

/// Candidate draws allowed per partition unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Builds a random arrangement of mutually clipping partition lines.
///
/// Each partition starts as a full-span vertical or horizontal line at a
/// random grid position. Candidates whose endpoints land closer than
/// `min_spacing` to an existing point are redrawn, up to `max_attempts` times.
/// Accepted candidates are clipped against every earlier segment in order.
#[derive(Debug, Clone)]
pub struct GenerateArrangement {
    partitions: usize,
    width: i64,
    height: i64,
    min_spacing: f64,
    max_attempts: usize,
}

impl GenerateArrangement {
    /// Creates a new generation operation.
    #[must_use]
    pub fn new(partitions: usize, width: i64, height: i64, min_spacing: f64) -> Self {
        Self {
            partitions,
            width,
            height,
            min_spacing,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Creates the generation operation described by `params`.
    #[must_use]
    pub fn from_params(params: &MondrianParams) -> Self {
        Self::new(params.partitions, params.width, params.height, params.min_spacing)
            .with_max_attempts(params.max_attempts)
    }

    /// Sets the number of candidate draws allowed per partition.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an empty or oversized canvas, a negative
    /// spacing or a zero attempt cap, and `GenerationError::PlacementInfeasible` when a partition
    /// cannot be placed within the attempt cap.
    pub fn execute<R: Rng>(&self, rng: &mut R) -> Result<Arrangement> {
        check_generation(self.width, self.height, self.min_spacing, self.max_attempts)?;

        let mut arrangement = Arrangement::new(self.width, self.height);

        for placed in 0..self.partitions {
            let mut attempts = 0;
            let candidate = loop {
                if attempts == self.max_attempts {
                    warn!(
                        placed,
                        requested = self.partitions,
                        attempts,
                        min_spacing = self.min_spacing,
                        "partition placement infeasible"
                    );
                    return Err(GenerationError::PlacementInfeasible {
                        placed,
                        requested: self.partitions,
                        attempts,
                        min_spacing: self.min_spacing,
                    }
                    .into());
                }
                attempts += 1;

                let candidate = self.draw_candidate(rng);
                if arrangement.admits(&candidate, self.min_spacing) {
                    break candidate;
                }
                trace!(%candidate, "candidate too close to an existing point");
            };

            let placement =
                arrangement.insert(candidate, attempts, || Endpoint::random(&mut *rng));
            debug!(
                index = placed,
                attempts = placement.attempts,
                drawn = %placement.drawn,
                placed = %placement.placed,
                "partition placed"
            );
        }

        Ok(arrangement)
    }

    /// Draws a full-span line: vertical or horizontal with equal probability.
    fn draw_candidate<R: Rng>(&self, rng: &mut R) -> Segment {
        if rng.random_bool(0.5) {
            Segment::vertical(rng.random_range(0..self.width), self.height)
        } else {
            Segment::horizontal(self.width, rng.random_range(0..self.height))
        }
    }
}
