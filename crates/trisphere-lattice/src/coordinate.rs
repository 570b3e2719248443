//! A single point of the discrete triangular lattice.

/// A lattice coordinate: ring `rho` counted from the apex, and position `psi`
/// within that ring.
///
/// Coordinates are plain values; validity against a particular lattice is
/// checked by [`crate::DiscreteLattice::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiscreteCoordinate {
    /// Ring index, `0` at the apex.
    pub rho: usize,
    /// Position within the ring.
    pub psi: usize,
}

impl DiscreteCoordinate {
    /// The apex coordinate `(0, 0)`.
    pub const APEX: Self = Self { rho: 0, psi: 0 };

    #[must_use]
    pub const fn new(rho: usize, psi: usize) -> Self {
        Self { rho, psi }
    }

    /// Returns `true` for the single apex vertex.
    #[must_use]
    pub const fn is_apex(self) -> bool {
        self.rho == 0
    }
}

impl From<(usize, usize)> for DiscreteCoordinate {
    fn from((rho, psi): (usize, usize)) -> Self {
        Self::new(rho, psi)
    }
}
