//! Winding and connectivity checks for generated meshes.
//!
//! Closed meshes must be watertight (every edge shared by exactly two
//! triangles) and wound counter-clockwise when viewed from outside, so
//! backface culling keeps the visible side.

use glam::Vec3;
use rustc_hash::FxHashMap;
use trisphere_lattice::MeshIndex;

/// Returns `true` if the triangle's normal (by the right-hand rule) points
/// away from the origin.
pub fn triangle_winds_outward(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let centroid = (v0 + v1 + v2) / 3.0;
    face_normal.dot(centroid) > 0.0
}

/// Returns `true` if the triangle's normal points along `direction`.
pub fn triangle_faces(v0: Vec3, v1: Vec3, v2: Vec3, direction: Vec3) -> bool {
    (v1 - v0).cross(v2 - v0).dot(direction) > 0.0
}

fn triangle_positions<'a, I: MeshIndex>(
    positions: &'a [Vec3],
    indices: &'a [I],
) -> impl Iterator<Item = [Vec3; 3]> + 'a {
    indices
        .chunks_exact(3)
        .map(move |t| [t[0], t[1], t[2]].map(|i| positions[i.to_usize()]))
}

/// Every triangle winds outward from the origin.
pub fn all_triangles_wind_outward<I: MeshIndex>(positions: &[Vec3], indices: &[I]) -> bool {
    triangle_positions(positions, indices).all(|[a, b, c]| triangle_winds_outward(a, b, c))
}

/// Every triangle faces `direction`.
pub fn all_triangles_face<I: MeshIndex>(
    positions: &[Vec3],
    indices: &[I],
    direction: Vec3,
) -> bool {
    triangle_positions(positions, indices).all(|[a, b, c]| triangle_faces(a, b, c, direction))
}

/// How many triangles use each undirected edge. Keys are `(low, high)`.
pub fn edge_use_counts<I: MeshIndex>(indices: &[I]) -> FxHashMap<(usize, usize), u32> {
    let mut counts = FxHashMap::default();
    for tri in indices.chunks_exact(3) {
        for k in 0..3 {
            let a = tri[k].to_usize();
            let b = tri[(k + 1) % 3].to_usize();
            *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }
    counts
}

/// Every edge is shared by exactly two triangles.
pub fn is_watertight<I: MeshIndex>(indices: &[I]) -> bool {
    !indices.is_empty() && edge_use_counts(indices).values().all(|&n| n == 2)
}

/// Number of edges used by only one triangle.
pub fn boundary_edge_count<I: MeshIndex>(indices: &[I]) -> usize {
    edge_use_counts(indices).values().filter(|&&n| n == 1).count()
}

/// Any triangle repeats a vertex index.
pub fn has_degenerate_triangles<I: MeshIndex>(indices: &[I]) -> bool {
    indices
        .chunks_exact(3)
        .any(|t| t[0] == t[1] || t[1] == t[2] || t[0] == t[2])
}
