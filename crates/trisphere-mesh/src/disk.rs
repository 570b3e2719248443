//! Lattice-to-disc mapping: a flat polar disc in the XZ plane.
//!
//! Ring `rho` becomes a circle of radius `rho / (rho_size - 1)` and `psi`
//! walks once around it, so the apex is the disc center and the outermost
//! ring is the unit circle.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use trisphere_lattice::{DiscreteCoordinate, DiscreteLattice, MeshIndex};

/// Position and texture coordinate of one disc vertex.
///
/// The UV is `(r, psi / psi_size(rho))`: radius across, angle fraction down.
#[must_use]
pub fn disk_vertex<I: MeshIndex>(
    lattice: &DiscreteLattice<I>,
    dc: DiscreteCoordinate,
) -> (DVec3, DVec2) {
    let r = dc.rho as f64 / (lattice.rho_size() - 1) as f64;
    let fraction = dc.psi as f64 / lattice.psi_size(dc.rho) as f64;
    let phi = TAU * fraction;
    (
        DVec3::new(r * phi.sin(), 0.0, r * phi.cos()),
        DVec2::new(r, fraction),
    )
}

/// Positions and UVs for every lattice vertex, in index order.
#[must_use]
pub fn disk_geometry<I: MeshIndex>(lattice: &DiscreteLattice<I>) -> (Vec<DVec3>, Vec<DVec2>) {
    lattice.iter().map(|dc| disk_vertex(lattice, dc)).unzip()
}
