//! Interleaved vertex format for GPU upload.
//!
//! [`GpuVertex`] packs position, normal, and UV into 32 bytes so a whole
//! [`crate::Mesh`] can be handed to a vertex buffer with
//! `bytemuck::cast_slice`.

/// A single interleaved vertex.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..32]` uv `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinates in \[0, 1\].
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(GpuVertex, [u8; 32]);

impl GpuVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}
