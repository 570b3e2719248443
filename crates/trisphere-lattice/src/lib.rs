//! Triangular lattice index space: rho/psi coordinates, linear vertex indexing,
//! and face enumeration for recursively subdivided polar fans.

mod coordinate;
mod error;
mod index;
mod lattice;

pub use coordinate::DiscreteCoordinate;
pub use error::LatticeError;
pub use index::MeshIndex;
pub use lattice::DiscreteLattice;
