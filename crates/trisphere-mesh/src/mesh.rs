//! Mesh data structure holding the parallel vertex attribute arrays and the
//! triangle index buffer.

use glam::{DVec2, DVec3, Vec2, Vec3};
use trisphere_lattice::MeshIndex;

use crate::packed::GpuVertex;
use crate::topology::edge_use_counts;

/// A static triangle mesh ready for GPU upload.
///
/// `positions`, `uvs`, and `normals` are parallel arrays sharing one vertex
/// index space. `indices` holds three entries per triangle, counter-clockwise
/// when seen from the outside.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<I = u32> {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Triangle index buffer.
    pub indices: Vec<I>,
    /// Texture coordinates in \[0, 1\].
    pub uvs: Vec<Vec2>,
    /// Unit vertex normals.
    pub normals: Vec<Vec3>,
}

impl<I: MeshIndex> Mesh<I> {
    /// Narrow double-precision geometry to the GPU-facing `f32` arrays.
    pub fn from_f64(
        positions: Vec<DVec3>,
        indices: Vec<I>,
        uvs: Vec<DVec2>,
        normals: Vec<DVec3>,
    ) -> Self {
        debug_assert_eq!(positions.len(), uvs.len());
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(indices.len() % 3, 0);
        Self {
            positions: positions.iter().map(DVec3::as_vec3).collect(),
            indices,
            uvs: uvs.iter().map(DVec2::as_vec2).collect(),
            normals: normals.iter().map(DVec3::as_vec3).collect(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0].to_usize(), t[1].to_usize(), t[2].to_usize()])
    }

    /// `V - E + F`: 2 for a closed sphere, 1 for a disc.
    pub fn euler_characteristic(&self) -> i64 {
        let edges = edge_use_counts(&self.indices).len();
        self.vertex_count() as i64 - edges as i64 + self.triangle_count() as i64
    }

    /// The index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Interleave the attribute arrays into a single vertex buffer.
    pub fn to_gpu_vertices(&self) -> Vec<GpuVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| GpuVertex::new(p.to_array(), n.to_array(), uv.to_array()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh<u16> {
        Mesh::from_f64(
            vec![
                DVec3::ZERO,
                DVec3::Z,
                DVec3::new(1.0, 0.0, 1.0),
                DVec3::X,
            ],
            vec![0, 1, 2, 0, 2, 3],
            vec![DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X],
            vec![DVec3::Y; 4],
        )
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_quad_euler_characteristic() {
        assert_eq!(quad().euler_characteristic(), 1);
    }

    #[test]
    fn test_index_bytes_length() {
        let mesh = quad();
        assert_eq!(mesh.index_bytes().len(), 6 * 2);
    }

    #[test]
    fn test_interleaved_vertices() {
        let mesh = quad();
        let gpu = mesh.to_gpu_vertices();
        assert_eq!(gpu.len(), 4);
        assert_eq!(gpu[2].position, [1.0, 0.0, 1.0]);
        assert_eq!(gpu[2].normal, [0.0, 1.0, 0.0]);
        assert_eq!(gpu[2].uv, [1.0, 1.0]);
    }
}
