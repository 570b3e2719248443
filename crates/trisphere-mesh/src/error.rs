//! Mesh generation errors.

use trisphere_lattice::LatticeError;

/// Configuration errors reported before any geometry is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The underlying lattice could not be built.
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// Fewer fans than needed to enclose the apex with non-degenerate triangles.
    #[error("{faces} faces per apex is too few, need at least {min}")]
    TooFewFaces { faces: usize, min: usize },
}
