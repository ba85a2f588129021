//! Volume texture layout constants.
//!
//! A flattened octree of depth `D` is a cube of `S = 2^D` texels per axis,
//! four bytes (RGBA8) per texel. The layout is the one the GPU upload call
//! declares, so it must not change:
//!
//! ```text
//! Volume memory layout (row-major, X innermost):
//!
//! Texel:   0       1       2   ...  S-1       S      ...  S²     ...
//! Content: [0,0,0] [1,0,0] [2,0,0]  [S-1,0,0] [0,1,0]     [0,0,1]
//!          └──────────── X ──────────────┘└── X ──...
//!
//! byte index = (z * S² + y * S + x) * 4
//! ```
//!
//! # Octant Numbering
//!
//! ```text
//! Octant index bits (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```

/// Deepest supported octree (1024³ texels, 4 GiB of RGBA8).
pub const MAX_DEPTH: u8 = 10;

/// Children per internal node.
pub const OCTANT_COUNT: usize = 8;

/// Bytes per texel (RGBA8).
pub const TEXEL_CHANNELS: usize = 4;

/// Alpha written for every populated texel. Voxels carry no transparency.
pub const OPAQUE_ALPHA: u8 = 255;

/// Texels per axis for a tree of `max_depth` (2^max_depth).
#[inline(always)]
pub const fn volume_size(max_depth: u8) -> usize {
  1 << max_depth
}

/// Total texel count of the flattened volume.
#[inline(always)]
pub const fn texel_count(max_depth: u8) -> usize {
  let size = volume_size(max_depth);
  size * size * size
}

/// Byte length of the flattened RGBA8 volume.
#[inline(always)]
pub const fn byte_len(max_depth: u8) -> usize {
  texel_count(max_depth) * TEXEL_CHANNELS
}

/// Convert 3D texel coordinates to the byte offset of the texel's red channel.
///
/// Layout: Z is the slice axis (stride S²), Y is the row axis (stride S), X is
/// innermost (stride 1).
#[inline(always)]
pub const fn texel_index(x: usize, y: usize, z: usize, size: usize) -> usize {
  (z * size * size + y * size + x) * TEXEL_CHANNELS
}

/// Convert a byte offset back to 3D texel coordinates.
#[inline(always)]
pub const fn index_to_texel(index: usize, size: usize) -> (usize, usize, usize) {
  let texel = index / TEXEL_CHANNELS;
  (texel % size, (texel / size) % size, texel / (size * size))
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
