//! The discrete triangular lattice: coordinate space, linear indexing, and
//! triangle enumeration.
//!
//! A lattice with `faces_per_apex` fans and subdivision depth `splits` has
//! `rho_size = 2^splits + 1` rings. Ring 0 is the apex (one vertex); ring
//! `rho > 0` holds `faces_per_apex * rho` vertices, split evenly between the
//! fans. Vertices are addressed by a closed-form index, so the lattice never
//! stores its coordinates.

use std::marker::PhantomData;

use tracing::debug;

use crate::{DiscreteCoordinate, LatticeError, MeshIndex};

/// Number of vertices in ring `rho` of a lattice with `faces` fans.
#[inline]
fn ring_len(faces: usize, rho: usize) -> usize {
    if rho == 0 { 1 } else { faces * rho }
}

/// A recursively subdivided triangular fan around a single apex.
///
/// `I` is the index type handed to the GPU. Construction fails if the
/// largest vertex index does not fit in `I`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscreteLattice<I = u32> {
    faces_per_apex: usize,
    splits: u32,
    rho_size: usize,
    size: usize,
    _index: PhantomData<fn() -> I>,
}

impl<I: MeshIndex> DiscreteLattice<I> {
    /// Build a lattice with `faces_per_apex` fans subdivided `splits` times.
    pub fn new(faces_per_apex: usize, splits: u32) -> Result<Self, LatticeError> {
        if faces_per_apex == 0 {
            return Err(LatticeError::NoFaces);
        }

        let too_large = LatticeError::SplitsTooLarge { splits };
        let rho_size = 1usize
            .checked_shl(splits)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| too_large.clone())?;
        // rho_size * (rho_size - 1) is always even.
        let size = rho_size
            .checked_mul(rho_size - 1)
            .map(|n| n / 2)
            .and_then(|n| n.checked_mul(faces_per_apex))
            .and_then(|n| n.checked_add(1))
            .ok_or(too_large)?;

        if size - 1 > I::MAX {
            return Err(LatticeError::IndexOverflow { size, max: I::MAX });
        }

        debug!(faces_per_apex, splits, rho_size, size, "built discrete lattice");

        Ok(Self {
            faces_per_apex,
            splits,
            rho_size,
            size,
            _index: PhantomData,
        })
    }

    /// Number of face fans around the apex.
    #[must_use]
    pub fn faces_per_apex(&self) -> usize {
        self.faces_per_apex
    }

    /// Subdivision depth.
    #[must_use]
    pub fn splits(&self) -> u32 {
        self.splits
    }

    /// Number of rings, `2^splits + 1`.
    #[must_use]
    pub fn rho_size(&self) -> usize {
        self.rho_size
    }

    /// Total number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of triangles produced by [`Self::enumerate_faces`].
    ///
    /// Each fan is a triangle of side `rho_size - 1` cut into `(rho_size - 1)^2`
    /// pieces.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        let side = self.rho_size - 1;
        self.faces_per_apex * side * side
    }

    /// Number of vertices in ring `rho`.
    #[must_use]
    pub fn psi_size(&self, rho: usize) -> usize {
        ring_len(self.faces_per_apex, rho)
    }

    /// Number of vertices a single fan contributes to ring `rho`.
    #[must_use]
    pub fn psi_triangle_size(&self, rho: usize) -> usize {
        if rho == 0 { 1 } else { rho }
    }

    /// The face fan that owns `(rho, psi)`. `psi` wraps around the ring.
    #[must_use]
    pub fn what_triangle(&self, rho: usize, psi: usize) -> usize {
        (psi % self.psi_size(rho)) / self.psi_triangle_size(rho)
    }

    /// [`Self::what_triangle`] for a coordinate.
    #[must_use]
    pub fn what_triangle_of(&self, dc: DiscreteCoordinate) -> usize {
        self.what_triangle(dc.rho, dc.psi)
    }

    /// Linear index of the first vertex of ring `rho`.
    #[must_use]
    pub fn ring_start(&self, rho: usize) -> usize {
        if rho == 0 {
            0
        } else {
            self.faces_per_apex * rho * (rho - 1) / 2 + 1
        }
    }

    /// Linear vertex index of `(rho, psi)` as `usize`. `psi` wraps around the
    /// ring, so callers pass `psi + 1` at the ring end unmodified.
    ///
    /// # Panics
    ///
    /// Panics if `rho >= rho_size`.
    #[must_use]
    pub fn index_usize(&self, rho: usize, psi: usize) -> usize {
        assert!(
            rho < self.rho_size,
            "rho {rho} out of range 0..{}",
            self.rho_size
        );
        if rho == 0 {
            return 0;
        }
        self.ring_start(rho) + psi % self.psi_size(rho)
    }

    /// Linear vertex index of `(rho, psi)`.
    ///
    /// # Panics
    ///
    /// Panics if `rho >= rho_size`. Every in-range index fits in `I`, which
    /// [`Self::new`] checks.
    #[must_use]
    pub fn index(&self, rho: usize, psi: usize) -> I {
        I::from_usize(self.index_usize(rho, psi))
    }

    /// [`Self::index`] for a coordinate.
    #[must_use]
    pub fn index_of(&self, dc: DiscreteCoordinate) -> I {
        self.index(dc.rho, dc.psi)
    }

    /// Returns `true` if `dc` is one of this lattice's canonical coordinates.
    #[must_use]
    pub fn contains(&self, dc: DiscreteCoordinate) -> bool {
        dc.rho < self.rho_size && dc.psi < self.psi_size(dc.rho)
    }

    /// Canonical coordinate of a linear index, or `None` past the end.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> Option<DiscreteCoordinate> {
        if index >= self.size {
            return None;
        }
        if index == 0 {
            return Some(DiscreteCoordinate::APEX);
        }

        // Largest ring whose first index is <= index.
        let (mut lo, mut hi) = (1, self.rho_size - 1);
        while lo < hi {
            let mid = lo + (hi - lo).div_ceil(2);
            if self.ring_start(mid) <= index {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        Some(DiscreteCoordinate::new(lo, index - self.ring_start(lo)))
    }

    /// All coordinates in ring-major, psi-minor order. The iterator is lazy
    /// and can be cloned to restart.
    pub fn iter(&self) -> impl Iterator<Item = DiscreteCoordinate> + Clone + use<I> {
        let faces = self.faces_per_apex;
        (0..self.rho_size).flat_map(move |rho| {
            (0..ring_len(faces, rho)).map(move |psi| DiscreteCoordinate::new(rho, psi))
        })
    }

    /// Coordinates owned by fan `face`, in canonical order.
    ///
    /// Within a ring each fan owns a contiguous `psi` range, so this is a
    /// computed range rather than a filter over [`Self::iter`]. The apex
    /// belongs to fan 0. An out-of-range `face` yields nothing.
    pub fn coordinates_in_face(
        &self,
        face: usize,
    ) -> impl Iterator<Item = DiscreteCoordinate> + Clone + use<I> {
        let rings = if face < self.faces_per_apex {
            1..self.rho_size
        } else {
            0..0
        };
        let apex = (face == 0).then_some(DiscreteCoordinate::APEX);
        apex.into_iter().chain(rings.flat_map(move |rho| {
            (face * rho..(face + 1) * rho).map(move |psi| DiscreteCoordinate::new(rho, psi))
        }))
    }

    /// Triangle index list covering the whole lattice, three indices per
    /// triangle.
    ///
    /// Every triangle is counter-clockwise when seen from the apex side. For
    /// each vertex of ring `rho` one triangle points back toward ring
    /// `rho - 1`, and, except on the outermost ring, one points out toward
    /// ring `rho + 1`.
    #[must_use]
    pub fn enumerate_faces(&self) -> Vec<I> {
        let mut triangles = Vec::with_capacity(3 * self.triangle_count());

        for rho in 1..self.rho_size {
            let mut delta_psi = 0;
            for psi in 0..self.psi_size(rho) {
                if psi != 0 && psi % self.psi_triangle_size(rho) == 0 {
                    delta_psi += 1;
                }

                triangles.extend_from_slice(&[
                    self.index(rho, psi),
                    self.index(rho, psi + 1),
                    self.index(rho - 1, psi - delta_psi),
                ]);

                if rho < self.rho_size - 1 {
                    triangles.extend_from_slice(&[
                        self.index(rho, psi + 1),
                        self.index(rho, psi),
                        self.index(rho + 1, psi + delta_psi + 1),
                    ]);
                }
            }
        }

        debug_assert_eq!(triangles.len(), 3 * self.triangle_count());
        triangles
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    fn lattice(faces: usize, splits: u32) -> DiscreteLattice<u32> {
        DiscreteLattice::new(faces, splits).unwrap()
    }

    #[test]
    fn test_sphere_split_one_sizes() {
        let l = lattice(4, 1);
        assert_eq!(l.rho_size(), 3);
        assert_eq!(l.size(), 13);
        assert_eq!(l.size(), 4 * 3 * 2 / 2 + 1);
    }

    #[test]
    fn test_split_zero_is_single_fan_ring() {
        let l = lattice(4, 0);
        assert_eq!(l.rho_size(), 2);
        assert_eq!(l.size(), 5);
        assert_eq!(l.triangle_count(), 4);
    }

    #[test]
    fn test_ring_sizes() {
        let l = lattice(6, 2);
        assert_eq!(l.psi_size(0), 1);
        assert_eq!(l.psi_size(1), 6);
        assert_eq!(l.psi_size(4), 24);
        assert_eq!(l.psi_triangle_size(0), 1);
        assert_eq!(l.psi_triangle_size(3), 3);
    }

    #[test]
    fn test_what_triangle_partitions_rings() {
        let l = lattice(4, 3);
        for rho in 1..l.rho_size() {
            for psi in 0..l.psi_size(rho) {
                assert_eq!(l.what_triangle(rho, psi), psi / rho);
            }
            // Wraps around the ring.
            assert_eq!(l.what_triangle(rho, l.psi_size(rho)), 0);
        }
        assert_eq!(l.what_triangle(0, 0), 0);
    }

    #[test]
    fn test_index_is_bijection() {
        for faces in [4, 6] {
            for splits in 0..=4 {
                let l = lattice(faces, splits);
                let mut seen = vec![false; l.size()];
                for dc in l.iter() {
                    let i = l.index_of(dc) as usize;
                    assert!(i < l.size(), "index {i} out of range for {dc:?}");
                    assert!(!seen[i], "index {i} assigned twice ({dc:?})");
                    seen[i] = true;
                }
                assert!(seen.iter().all(|&s| s), "gap in index space");
            }
        }
    }

    #[test]
    fn test_index_increases_in_canonical_order() {
        let l = lattice(4, 3);
        let indices: Vec<u32> = l.iter().map(|dc| l.index_of(dc)).collect();
        assert!(indices.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last().copied(), Some((l.size() - 1) as u32));
    }

    #[test]
    fn test_apex_index_is_zero() {
        let l = lattice(4, 2);
        for psi in 0..10 {
            assert_eq!(l.index(0, psi), 0);
        }
    }

    #[test]
    fn test_index_wraps_psi() {
        let l = lattice(4, 2);
        for rho in 1..l.rho_size() {
            assert_eq!(l.index(rho, l.psi_size(rho)), l.index(rho, 0));
            assert_eq!(l.index(rho, l.psi_size(rho) + 2), l.index(rho, 2));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_past_outer_ring_panics() {
        let l = DiscreteLattice::<u16>::new(4, 7).unwrap();
        let _ = l.index(l.rho_size(), 0);
    }

    #[test]
    fn test_coordinate_inverts_index() {
        let l = lattice(6, 3);
        for (i, dc) in l.iter().enumerate() {
            assert_eq!(l.coordinate(i), Some(dc));
            assert!(l.contains(dc));
        }
        assert_eq!(l.coordinate(l.size()), None);
    }

    #[test]
    fn test_iter_is_restartable() {
        let l = lattice(4, 2);
        let it = l.iter();
        assert_eq!(it.clone().count(), l.size());
        assert_eq!(it.count(), l.size());
    }

    #[test]
    fn test_coordinates_in_face_match_filter() {
        let l = lattice(4, 3);
        for face in 0..l.faces_per_apex() {
            let computed: Vec<_> = l.coordinates_in_face(face).collect();
            let filtered: Vec<_> = l.iter().filter(|&dc| l.what_triangle_of(dc) == face).collect();
            assert_eq!(computed, filtered, "face {face}");
        }
    }

    #[test]
    fn test_faces_cover_lattice_once() {
        let l = lattice(6, 2);
        let total: usize = (0..6).map(|f| l.coordinates_in_face(f).count()).sum();
        assert_eq!(total, l.size());
        assert_eq!(l.coordinates_in_face(6).count(), 0);
    }

    #[test]
    fn test_face_count_matches_formula() {
        for splits in 0..=4 {
            let l = lattice(4, splits);
            assert_eq!(l.enumerate_faces().len(), 3 * l.triangle_count());
        }
    }

    #[test]
    fn test_faces_are_in_range_and_non_degenerate() {
        let l = lattice(4, 3);
        for tri in l.enumerate_faces().chunks_exact(3) {
            assert!(tri.iter().all(|&i| (i as usize) < l.size()));
            assert!(
                tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2],
                "degenerate triangle {tri:?}"
            );
        }
    }

    #[test]
    fn test_faces_have_consistent_orientation() {
        // In a consistently wound surface each directed edge appears once.
        for faces in [4, 6] {
            let l = lattice(faces, 3);
            let mut directed = HashSet::new();
            for tri in l.enumerate_faces().chunks_exact(3) {
                for k in 0..3 {
                    let edge = (tri[k], tri[(k + 1) % 3]);
                    assert!(directed.insert(edge), "directed edge {edge:?} repeated");
                }
            }
        }
    }

    #[test]
    fn test_faces_satisfy_euler_for_open_surface() {
        for faces in [4, 6] {
            for splits in 0..=4 {
                let l = lattice(faces, splits);
                let indices = l.enumerate_faces();
                let mut uses: HashMap<(u32, u32), usize> = HashMap::new();
                for tri in indices.chunks_exact(3) {
                    for k in 0..3 {
                        let (a, b) = (tri[k], tri[(k + 1) % 3]);
                        *uses.entry((a.min(b), a.max(b))).or_default() += 1;
                    }
                }
                let boundary = uses.values().filter(|&&n| n == 1).count();
                assert!(uses.values().all(|&n| n <= 2));
                assert_eq!(boundary, faces * (l.rho_size() - 1));

                let v = l.size() as i64;
                let e = uses.len() as i64;
                let f = (indices.len() / 3) as i64;
                assert_eq!(v - e + f, 1, "faces={faces} splits={splits}");
            }
        }
    }

    #[test]
    fn test_no_faces_rejected() {
        assert_eq!(
            DiscreteLattice::<u32>::new(0, 2),
            Err(LatticeError::NoFaces)
        );
    }

    #[test]
    fn test_index_overflow_detected() {
        assert!(DiscreteLattice::<u16>::new(4, 7).is_ok());
        assert!(matches!(
            DiscreteLattice::<u16>::new(4, 8),
            Err(LatticeError::IndexOverflow { size: 131_585, max: 65_535 })
        ));
    }

    #[test]
    fn test_huge_splits_rejected() {
        assert!(matches!(
            DiscreteLattice::<u32>::new(4, 64),
            Err(LatticeError::SplitsTooLarge { splits: 64 })
        ));
        assert!(matches!(
            DiscreteLattice::<u32>::new(4, 40),
            Err(LatticeError::SplitsTooLarge { .. } | LatticeError::IndexOverflow { .. })
        ));
    }
}
