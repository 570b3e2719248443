//! Per-vertex texture coordinates and normals.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, DVec3};

/// Normal of every disc vertex: the disc faces +Y.
pub const DISK_NORMAL: DVec3 = DVec3::Y;

/// Equirectangular UV of a point on the unit sphere.
///
/// `u` follows longitude `atan2(x, z)` from -π to π, `v` follows latitude
/// from the south pole (0) to the north pole (1).
#[inline]
#[must_use]
pub fn sphere_uv(p: DVec3) -> DVec2 {
    let theta = p.y.atan2((p.x * p.x + p.z * p.z).sqrt());
    let phi = p.x.atan2(p.z);
    DVec2::new((phi + PI) / TAU, (theta + FRAC_PI_2) / PI)
}

/// Outward normal of a sphere vertex.
#[inline]
#[must_use]
pub fn sphere_normal(p: DVec3) -> DVec3 {
    p.normalize_or_zero()
}
