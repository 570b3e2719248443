//! Lattice-to-sphere mapping for the northern hemisphere.
//!
//! Each face fan spans a spherical triangle with corners at the pole `A` and
//! two equator points `B(t)`, `C(t)`. A lattice coordinate is placed by
//! blending the three corners and projecting onto the unit sphere:
//!
//! ```text
//! alpha = 1 - rho / (rho_size - 1)
//! beta  = (1 - alpha) * (1 - psi' / psi_triangle_size(rho))
//! gamma = 1 - alpha - beta
//! p     = normalize(alpha * A + beta * B + gamma * C)
//! ```
//!
//! where `psi'` is the position inside the fan. This is not an equal-area
//! subdivision; normalizing a planar blend compresses cells toward the fan
//! corners.

use std::f64::consts::TAU;

use glam::DVec3;
use trisphere_lattice::{DiscreteCoordinate, DiscreteLattice, MeshIndex};

/// The north pole, shared corner of every fan.
pub const APEX: DVec3 = DVec3::Y;

/// Equator direction of fan boundary `boundary`, at longitude
/// `boundary * 2π / faces_per_apex` measured from +Z toward +X.
///
/// Fan `t` spans from `fan_corner(faces, t)` to `fan_corner(faces, t + 1)`.
#[inline]
#[must_use]
pub fn fan_corner(faces_per_apex: usize, boundary: usize) -> DVec3 {
    let longitude = TAU * boundary as f64 / faces_per_apex as f64;
    DVec3::new(longitude.sin(), 0.0, longitude.cos())
}

/// Corner weights for one lattice coordinate. Always sums to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendWeights {
    /// Weight of the apex `A`.
    pub alpha: f64,
    /// Weight of the fan's leading corner `B`.
    pub beta: f64,
    /// Weight of the fan's trailing corner `C`.
    pub gamma: f64,
}

impl BlendWeights {
    /// Blend the three corners with these weights (not normalized).
    #[inline]
    #[must_use]
    pub fn blend(self, a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
        self.alpha * a + self.beta * b + self.gamma * c
    }
}

/// Corner weights for `dc`.
///
/// The apex puts all weight on `A`. Ring 1 has a single vertex per fan, so
/// it interpolates between `A` and `B` only.
#[must_use]
pub fn blend_weights<I: MeshIndex>(
    lattice: &DiscreteLattice<I>,
    dc: DiscreteCoordinate,
) -> BlendWeights {
    match dc.rho {
        0 => BlendWeights {
            alpha: 1.0,
            beta: 0.0,
            gamma: 0.0,
        },
        rho => {
            let rho_length = lattice.rho_size() as f64;
            let psi_length = lattice.psi_triangle_size(rho) as f64;
            let psi = (dc.psi % lattice.psi_triangle_size(rho)) as f64;

            let alpha = 1.0 - rho as f64 / (rho_length - 1.0);
            let (beta, gamma) = if rho == 1 {
                (1.0 - alpha, 0.0)
            } else {
                let beta = (1.0 - alpha) * (1.0 - psi / psi_length);
                (beta, 1.0 - alpha - beta)
            };
            BlendWeights { alpha, beta, gamma }
        }
    }
}

/// Unit-sphere positions for every lattice vertex, indexed by
/// [`DiscreteLattice::index`]. The apex sits at +Y and the outermost ring on
/// the equator (`y == 0`).
#[must_use]
pub fn northern_hemisphere<I: MeshIndex>(lattice: &DiscreteLattice<I>) -> Vec<DVec3> {
    let faces = lattice.faces_per_apex();
    let mut vertices = vec![DVec3::ZERO; lattice.size()];

    for t in 0..faces {
        let b = fan_corner(faces, t);
        let c = fan_corner(faces, t + 1);
        for dc in lattice.coordinates_in_face(t) {
            let weights = blend_weights(lattice, dc);
            vertices[lattice.index_usize(dc.rho, dc.psi)] = weights.blend(APEX, b, c).normalize();
        }
    }

    vertices
}
