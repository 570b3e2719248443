//! Complete mesh builders: the subdivided sphere and the flat disc.

use tracing::debug;
use trisphere_lattice::{DiscreteLattice, MeshIndex};

use crate::attributes::{DISK_NORMAL, sphere_normal, sphere_uv};
use crate::disk::disk_geometry;
use crate::error::MeshError;
use crate::geodesic::northern_hemisphere;
use crate::mesh::Mesh;
use crate::mirror::mirror_hemisphere;

/// Fans per hemisphere for the sphere; splits 0 gives an octahedron.
pub const SPHERE_FACES_PER_APEX: usize = 4;

/// Fans around the disc center; splits 0 gives a hexagon.
pub const DISK_FACES_PER_APEX: usize = 6;

/// Fewer fans leave the outer ring without area.
pub const MIN_FACES_PER_APEX: usize = 3;

/// Which surface to build from the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MeshShape {
    /// Closed unit sphere centered on the origin, poles on the Y axis.
    #[default]
    Sphere,
    /// Unit disc in the XZ plane facing +Y.
    Disk,
}

impl MeshShape {
    /// Fan count used when none is requested.
    #[must_use]
    pub fn default_faces_per_apex(self) -> usize {
        match self {
            MeshShape::Sphere => SPHERE_FACES_PER_APEX,
            MeshShape::Disk => DISK_FACES_PER_APEX,
        }
    }

    /// Build this shape. `faces_per_apex` falls back to
    /// [`Self::default_faces_per_apex`].
    pub fn build<I: MeshIndex>(
        self,
        faces_per_apex: Option<usize>,
        splits: u32,
    ) -> Result<Mesh<I>, MeshError> {
        let faces = faces_per_apex.unwrap_or(self.default_faces_per_apex());
        match self {
            MeshShape::Sphere => sphere_with_faces(faces, splits),
            MeshShape::Disk => disk_with_faces(faces, splits),
        }
    }
}

fn check_faces(faces_per_apex: usize) -> Result<(), MeshError> {
    if faces_per_apex < MIN_FACES_PER_APEX {
        return Err(MeshError::TooFewFaces {
            faces: faces_per_apex,
            min: MIN_FACES_PER_APEX,
        });
    }
    Ok(())
}

/// Unit sphere with [`SPHERE_FACES_PER_APEX`] fans per hemisphere.
pub fn sphere<I: MeshIndex>(splits: u32) -> Result<Mesh<I>, MeshError> {
    sphere_with_faces(SPHERE_FACES_PER_APEX, splits)
}

/// Unit sphere from two mirrored lattice hemispheres sharing the equator.
///
/// The result has `2 * size - equator_len` vertices and
/// `2 * faces_per_apex * (2^splits)^2` triangles.
pub fn sphere_with_faces<I: MeshIndex>(
    faces_per_apex: usize,
    splits: u32,
) -> Result<Mesh<I>, MeshError> {
    check_faces(faces_per_apex)?;
    let lattice = DiscreteLattice::<I>::new(faces_per_apex, splits)?;

    let north = northern_hemisphere(&lattice);
    let (positions, indices) = mirror_hemisphere(&lattice, north, lattice.enumerate_faces())?;
    let uvs = positions.iter().map(|&p| sphere_uv(p)).collect();
    let normals = positions.iter().map(|&p| sphere_normal(p)).collect();

    debug!(
        faces_per_apex,
        splits,
        vertices = positions.len(),
        triangles = indices.len() / 3,
        "generated sphere mesh"
    );

    Ok(Mesh::from_f64(positions, indices, uvs, normals))
}

/// Flat disc with [`DISK_FACES_PER_APEX`] fans.
pub fn disk<I: MeshIndex>(splits: u32) -> Result<Mesh<I>, MeshError> {
    disk_with_faces(DISK_FACES_PER_APEX, splits)
}

/// Flat polar disc over a single lattice; no mirroring.
pub fn disk_with_faces<I: MeshIndex>(
    faces_per_apex: usize,
    splits: u32,
) -> Result<Mesh<I>, MeshError> {
    check_faces(faces_per_apex)?;
    let lattice = DiscreteLattice::<I>::new(faces_per_apex, splits)?;

    let (positions, uvs) = disk_geometry(&lattice);
    let normals = vec![DISK_NORMAL; positions.len()];
    let indices = lattice.enumerate_faces();

    debug!(
        faces_per_apex,
        splits,
        vertices = positions.len(),
        triangles = indices.len() / 3,
        "generated disk mesh"
    );

    Ok(Mesh::from_f64(positions, indices, uvs, normals))
}
