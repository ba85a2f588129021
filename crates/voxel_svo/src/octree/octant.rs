//! Octant geometry shared by insertion, lookup and flattening.
//!
//! Octant: 0-7 where bits represent the +X, +Y, +Z halves of a region:
//! - bit 0: X half (0 = low, 1 = high)
//! - bit 1: Y half
//! - bit 2: Z half

use glam::UVec3;

/// Octant of `point` inside a region whose midpoint is `mid`.
#[inline]
pub fn octant_index(point: UVec3, mid: UVec3) -> usize {
  ((point.x >= mid.x) as usize) | ((point.y >= mid.y) as usize) << 1 | ((point.z >= mid.z) as usize) << 2
}

/// Minimum-corner offset of `octant` inside a region of half-size `half`.
#[inline]
pub fn octant_offset(octant: usize, half: u32) -> UVec3 {
  UVec3::new(
    (octant & 1) as u32,
    ((octant >> 1) & 1) as u32,
    ((octant >> 2) & 1) as u32,
  ) * half
}

/// Octant and minimum corner of the child region containing `point`.
#[inline]
pub fn child_region(point: UVec3, min: UVec3, size: u32) -> (usize, UVec3) {
  let half = size / 2;
  let octant = octant_index(point, min + UVec3::splat(half));
  (octant, min + octant_offset(octant, half))
}
