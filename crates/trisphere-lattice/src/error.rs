//! Lattice construction errors.

/// Configuration errors detected when a [`crate::DiscreteLattice`] is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    /// A lattice needs at least one face fan around the apex.
    #[error("lattice needs at least one face per apex")]
    NoFaces,

    /// `2^splits + 1` or the vertex count does not fit in `usize`.
    #[error("subdivision depth {splits} overflows the lattice size")]
    SplitsTooLarge { splits: u32 },

    /// The largest vertex index does not fit in the chosen index type.
    #[error("lattice has {size} vertices but the index type holds at most {max} + 1")]
    IndexOverflow { size: usize, max: usize },
}
