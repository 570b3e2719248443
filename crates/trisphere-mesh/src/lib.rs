//! Mesh generation on top of the discrete lattice: a subdivided unit sphere
//! built from two mirrored hemispheres, and a flat polar disc.

pub mod attributes;
pub mod disk;
pub mod error;
pub mod geodesic;
pub mod mesh;
pub mod mirror;
pub mod packed;
pub mod shape;
pub mod topology;

pub use attributes::{DISK_NORMAL, sphere_normal, sphere_uv};
pub use disk::{disk_geometry, disk_vertex};
pub use error::MeshError;
pub use geodesic::{APEX, BlendWeights, blend_weights, fan_corner, northern_hemisphere};
pub use mesh::Mesh;
pub use mirror::{equator_start, mirror_hemisphere};
pub use packed::GpuVertex;
pub use shape::{
    DISK_FACES_PER_APEX, MIN_FACES_PER_APEX, MeshShape, SPHERE_FACES_PER_APEX, disk,
    disk_with_faces, sphere, sphere_with_faces,
};
pub use topology::{
    all_triangles_face, all_triangles_wind_outward, boundary_edge_count, edge_use_counts,
    has_degenerate_triangles, is_watertight, triangle_faces, triangle_winds_outward,
};

pub use trisphere_lattice::{DiscreteCoordinate, DiscreteLattice, LatticeError, MeshIndex};
