//! Mesh statistics gathered for the demo output.

use glam::Vec3;
use trisphere_config::{Config, IndexWidth, Shape};
use trisphere_mesh::{
    GpuVertex, Mesh, MeshError, MeshIndex, MeshShape, all_triangles_face,
    all_triangles_wind_outward, boundary_edge_count, is_watertight,
};

/// Connectivity and winding results for a generated mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopologyReport {
    pub euler_characteristic: i64,
    pub boundary_edges: usize,
    pub watertight: bool,
    pub winding_ok: bool,
}

/// Summary of one generated mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshReport {
    pub shape: MeshShape,
    pub faces_per_apex: usize,
    pub splits: u32,
    pub vertices: usize,
    pub triangles: usize,
    pub vertex_bytes: usize,
    pub index_bytes: usize,
    /// Present when `debug.verify_topology` is set.
    pub topology: Option<TopologyReport>,
}

fn mesh_shape(shape: Shape) -> MeshShape {
    match shape {
        Shape::Sphere => MeshShape::Sphere,
        Shape::Disk => MeshShape::Disk,
    }
}

/// Build the mesh described by `config` and summarize it.
pub fn build_report(config: &Config) -> Result<MeshReport, MeshError> {
    match config.mesh.index_width {
        IndexWidth::U16 => report_for::<u16>(config),
        IndexWidth::U32 => report_for::<u32>(config),
    }
}

fn report_for<I: MeshIndex>(config: &Config) -> Result<MeshReport, MeshError> {
    let shape = mesh_shape(config.mesh.shape);
    let faces_per_apex = config
        .mesh
        .faces_per_apex
        .unwrap_or(shape.default_faces_per_apex());
    let mesh: Mesh<I> = shape.build(Some(faces_per_apex), config.mesh.splits)?;

    let topology = config
        .debug
        .verify_topology
        .then(|| topology_report(shape, &mesh));

    Ok(MeshReport {
        shape,
        faces_per_apex,
        splits: config.mesh.splits,
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
        vertex_bytes: mesh.vertex_count() * size_of::<GpuVertex>(),
        index_bytes: mesh.index_bytes().len(),
        topology,
    })
}

fn topology_report<I: MeshIndex>(shape: MeshShape, mesh: &Mesh<I>) -> TopologyReport {
    let winding_ok = match shape {
        MeshShape::Sphere => all_triangles_wind_outward(&mesh.positions, &mesh.indices),
        MeshShape::Disk => all_triangles_face(&mesh.positions, &mesh.indices, Vec3::Y),
    };
    TopologyReport {
        euler_characteristic: mesh.euler_characteristic(),
        boundary_edges: boundary_edge_count(&mesh.indices),
        watertight: is_watertight(&mesh.indices),
        winding_ok,
    }
}
