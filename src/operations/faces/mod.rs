mod half_edge;
mod heuristic;
mod planar;

pub use half_edge::{HalfEdgeId, HalfEdgeStore, VertexId};
pub use heuristic::heuristic_faces;
pub use planar::planar_faces;

use tracing::debug;

use crate::error::Result;
use crate::geometry::Rectangle;
use crate::operations::generate::Arrangement;

/// How faces are recovered from an arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FaceStrategy {
    /// Nearest-neighbour chase over the intersection points. May miss faces.
    #[default]
    Heuristic,
    /// Half-edge walk over the segments. Recovers every bounded rectangular face.
    Planar,
}

/// Reconstructs the rectangular faces of an arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconstructFaces {
    strategy: FaceStrategy,
}

impl ReconstructFaces {
    /// Creates a new `ReconstructFaces` operation.
    #[must_use]
    pub fn new(strategy: FaceStrategy) -> Self {
        Self { strategy }
    }

    /// Executes the reconstruction.
    ///
    /// # Errors
    ///
    /// Returns `FaceError::NotAxisAligned` if the planar strategy meets a
    /// diagonal segment. The heuristic strategy never fails.
    pub fn execute(&self, arrangement: &Arrangement) -> Result<Vec<Rectangle>> {
        let faces = match self.strategy {
            FaceStrategy::Heuristic => heuristic_faces(arrangement.points()),
            FaceStrategy::Planar => planar_faces(arrangement.segments())?,
        };
        debug!(strategy = ?self.strategy, faces = faces.len(), "faces reconstructed");
        Ok(faces)
    }
}
