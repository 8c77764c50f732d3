use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::params::MondrianParams;

use super::colorize::{ColoredFace, Colorize};
use super::faces::ReconstructFaces;
use super::generate::{Arrangement, GenerateArrangement};

/// A finished composition: the drawn lines and the faces they enclose.
#[derive(Debug, Clone)]
pub struct Composition {
    arrangement: Arrangement,
    faces: Vec<ColoredFace>,
}

impl Composition {
    #[must_use]
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Faces in discovery order, each with its fill if it got one.
    #[must_use]
    pub fn faces(&self) -> &[ColoredFace] {
        &self.faces
    }

    /// Iterates over the faces that received a fill.
    pub fn filled(&self) -> impl Iterator<Item = &ColoredFace> {
        self.faces.iter().filter(|f| f.color.is_some())
    }
}

/// Runs generation, face reconstruction and coloring in sequence.
#[derive(Debug, Clone, Default)]
pub struct Compose {
    params: MondrianParams,
}

impl Compose {
    /// Creates a new `Compose` operation.
    #[must_use]
    pub fn new(params: MondrianParams) -> Self {
        Self { params }
    }

    /// Executes the pipeline, drawing all randomness from `rng`.
    ///
    /// Parameters are validated by the generation step before anything is drawn.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for invalid parameters, `GenerationError` if the
    /// lines cannot be placed, and `FaceError` if face reconstruction fails.
    pub fn execute<R: Rng>(&self, rng: &mut R) -> Result<Composition> {
        let arrangement = GenerateArrangement::from_params(&self.params).execute(rng)?;
        let rects = ReconstructFaces::new(self.params.face_strategy).execute(&arrangement)?;
        let faces = Colorize::new(self.params.palette.clone()).execute(&rects, rng);

        info!(
            segments = arrangement.segments().len(),
            points = arrangement.points().len(),
            faces = faces.len(),
            filled = faces.iter().filter(|f| f.color.is_some()).count(),
            "composition complete"
        );

        Ok(Composition { arrangement, faces })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GenerationError, MondrianError};
    use crate::operations::faces::FaceStrategy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_params_compose() {
        let mut rng = StdRng::seed_from_u64(2024);
        let composition = Compose::default().execute(&mut rng).unwrap();
        assert_eq!(composition.arrangement().segments().len(), 4 + 8);
        assert!(composition.filled().count() <= 3);
    }

    #[test]
    fn planar_strategy_covers_canvas() {
        let params = MondrianParams {
            face_strategy: FaceStrategy::Planar,
            ..MondrianParams::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let composition = Compose::new(params).execute(&mut rng).unwrap();
        let area: i128 = composition.faces().iter().map(|f| f.rect.area()).sum();
        assert_eq!(area, 800 * 600);
    }

    #[test]
    fn replay_is_deterministic() {
        let a = Compose::default()
            .execute(&mut StdRng::seed_from_u64(11))
            .unwrap();
        let b = Compose::default()
            .execute(&mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(a.arrangement(), b.arrangement());
        assert_eq!(a.faces(), b.faces());
    }

    #[test]
    fn invalid_params_fail_before_generation() {
        let params = MondrianParams {
            height: -5,
            ..MondrianParams::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Compose::new(params).execute(&mut rng),
            Err(MondrianError::Config(_))
        ));
    }

    #[test]
    fn oversized_spacing_is_infeasible() {
        let params = MondrianParams {
            partitions: 1,
            width: 100,
            height: 100,
            min_spacing: 500.0,
            max_attempts: 50,
            ..MondrianParams::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Compose::new(params).execute(&mut rng),
            Err(MondrianError::Generation(
                GenerationError::PlacementInfeasible { .. }
            ))
        ));
    }
}
