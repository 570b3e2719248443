//! Southern hemisphere by reflection through the equatorial plane.
//!
//! The equator ring is shared between both hemispheres. Only the vertices
//! above it are copied, so the southern cap reuses the northern equator
//! vertices and the two halves close without a seam.

use glam::DVec3;
use trisphere_lattice::{DiscreteLattice, LatticeError, MeshIndex};

use crate::error::MeshError;

/// Index of the first equator vertex, which is also the number of northern
/// vertices strictly above the equator:
/// `faces_per_apex * (rho_size - 1) * (rho_size - 2) / 2 + 1`.
#[must_use]
pub fn equator_start<I: MeshIndex>(lattice: &DiscreteLattice<I>) -> usize {
    lattice.ring_start(lattice.rho_size() - 1)
}

/// Append the southern hemisphere to a northern one.
///
/// Vertices `0..equator_start` are mirrored (Y negated) and appended after
/// the northern vertices. Every northern triangle gets a southern twin whose
/// non-equator indices point at the mirrored copies. The twin's first two
/// indices are swapped because the reflection reverses orientation. A
/// trailing partial triangle in `north_indices` gets no twin.
///
/// Fails with [`LatticeError::IndexOverflow`] if the mirrored vertex count
/// `lattice.size() + equator_start(lattice)` does not fit in `I`.
pub fn mirror_hemisphere<I: MeshIndex>(
    lattice: &DiscreteLattice<I>,
    north_vertices: Vec<DVec3>,
    north_indices: Vec<I>,
) -> Result<(Vec<DVec3>, Vec<I>), MeshError> {
    let size = lattice.size();
    let last_line = equator_start(lattice);
    debug_assert_eq!(north_vertices.len(), size);

    let total = size + last_line;
    if total - 1 > I::MAX {
        return Err(LatticeError::IndexOverflow {
            size: total,
            max: I::MAX,
        }
        .into());
    }

    let mut vertices = north_vertices;
    vertices.reserve(last_line);
    for i in 0..last_line {
        let v = vertices[i];
        vertices.push(DVec3::new(v.x, -v.y, v.z));
    }

    let remap = |i: I| {
        let i = i.to_usize();
        if i < last_line {
            I::from_usize(i + size)
        } else {
            I::from_usize(i)
        }
    };

    let southern: Vec<I> = north_indices
        .chunks_exact(3)
        .flat_map(|t| [remap(t[1]), remap(t[0]), remap(t[2])])
        .collect();
    let mut indices = north_indices;
    indices.extend(southern);

    Ok((vertices, indices))
}
