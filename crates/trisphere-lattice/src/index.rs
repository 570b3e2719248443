//! Integer types usable as GPU index buffer elements.

/// An unsigned integer type used for vertex indices.
///
/// Implemented for `u16` and `u32`, the two index formats GPUs accept.
pub trait MeshIndex:
    Copy + Ord + std::fmt::Debug + std::hash::Hash + bytemuck::Pod + Send + Sync + 'static
{
    /// Largest index value representable by this type.
    const MAX: usize;

    /// Convert from `usize`. Caller guarantees `value <= Self::MAX`.
    fn from_usize(value: usize) -> Self;

    /// Widen to `usize`.
    fn to_usize(self) -> usize;
}

impl MeshIndex for u16 {
    const MAX: usize = u16::MAX as usize;

    #[inline]
    fn from_usize(value: usize) -> Self {
        debug_assert!(value <= <Self as MeshIndex>::MAX, "index {value} overflows u16");
        value as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u32 {
    const MAX: usize = u32::MAX as usize;

    #[inline]
    fn from_usize(value: usize) -> Self {
        debug_assert!(value <= <Self as MeshIndex>::MAX, "index {value} overflows u32");
        value as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}
