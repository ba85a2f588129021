//! Dense RGBA8 volume textures flattened from an octree.
//!
//! The flattener walks the tree pre-order with the same region geometry as
//! the writes. Every leaf fills all `size³` texels of its region; cells no
//! leaf covers stay zero (transparent black).

mod upload;

pub use upload::{upload, AddressMode, FilterMode, SamplerConfig, VolumeUploader};

use glam::UVec3;
use tracing::debug;

use crate::constants::{byte_len, index_to_texel, texel_index, TEXEL_CHANNELS};
use crate::error::{SvoError, SvoResult};
use crate::octree::octant::octant_offset;
use crate::octree::{Children, Octree, OctreeNode};

/// Flattened volume: `size³` RGBA8 texels, row-major with X innermost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeTexture {
  size: u32,
  data: Vec<u8>,
}

impl VolumeTexture {
  /// Zero-filled texture for a tree of `max_depth`.
  pub fn empty(max_depth: u8) -> Self {
    Self {
      size: 1 << max_depth,
      data: vec![0; byte_len(max_depth)],
    }
  }

  /// Texels per axis. Width, height and depth are all equal.
  #[inline]
  pub fn size(&self) -> u32 {
    self.size
  }

  #[inline]
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  pub fn into_data(self) -> Vec<u8> {
    self.data
  }

  /// RGBA bytes of one texel, or `None` outside the volume.
  pub fn texel(&self, x: u32, y: u32, z: u32) -> Option<[u8; 4]> {
    if x >= self.size || y >= self.size || z >= self.size {
      return None;
    }
    let index = texel_index(x as usize, y as usize, z as usize, self.size as usize);
    let mut rgba = [0; 4];
    rgba.copy_from_slice(&self.data[index..index + TEXEL_CHANNELS]);
    Some(rgba)
  }

  /// Coordinates and bytes of every populated texel, in buffer order.
  pub fn filled_texels(&self) -> impl Iterator<Item = (UVec3, [u8; 4])> + '_ {
    let size = self.size as usize;
    self
      .data
      .chunks_exact(TEXEL_CHANNELS)
      .enumerate()
      .filter(|(_, texel)| texel[3] != 0)
      .map(move |(i, texel)| {
        let (x, y, z) = index_to_texel(i * TEXEL_CHANNELS, size);
        (
          UVec3::new(x as u32, y as u32, z as u32),
          [texel[0], texel[1], texel[2], texel[3]],
        )
      })
  }
}

/// Flatten `octree` into a newly allocated volume texture.
///
/// The result is always exactly `(2^max_depth)³ * 4` bytes.
#[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "texture::flatten"))]
pub fn flatten(octree: &Octree) -> VolumeTexture {
  let mut texture = VolumeTexture::empty(octree.max_depth());
  fill_node(octree.root(), &mut texture.data, UVec3::ZERO, octree.size(), octree.size());
  debug!(size = texture.size, bytes = texture.data.len(), "flattened octree");
  texture
}

/// Flatten `octree` into a caller-owned buffer, e.g. one reused every frame.
///
/// The buffer is cleared first. Fails with [`SvoError::BufferSize`] if its
/// length is not `(2^max_depth)³ * 4`.
#[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "texture::flatten_into"))]
pub fn flatten_into(octree: &Octree, buffer: &mut [u8]) -> SvoResult<()> {
  let expected = byte_len(octree.max_depth());
  if buffer.len() != expected {
    return Err(SvoError::BufferSize {
      expected,
      actual: buffer.len(),
    });
  }
  buffer.fill(0);
  fill_node(octree.root(), buffer, UVec3::ZERO, octree.size(), octree.size());
  Ok(())
}

fn fill_node(node: &OctreeNode, data: &mut [u8], min: UVec3, size: u32, volume_size: u32) {
  match node.children() {
    Children::Leaf(voxel) => fill_region(data, min, size, volume_size, voxel.color.to_rgba()),
    Children::Octants(_) if size == 1 => {}
    Children::Octants(_) => {
      let half = size / 2;
      for (octant, child) in node.populated() {
        fill_node(child, data, min + octant_offset(octant, half), half, volume_size);
      }
    }
  }
}

/// Write `rgba` into every texel of the cube at `min` with edge `size`.
fn fill_region(data: &mut [u8], min: UVec3, size: u32, volume_size: u32, rgba: [u8; 4]) {
  let volume_size = volume_size as usize;
  let row_len = size as usize * TEXEL_CHANNELS;
  for z in min.z..min.z + size {
    for y in min.y..min.y + size {
      let start = texel_index(min.x as usize, y as usize, z as usize, volume_size);
      for texel in data[start..start + row_len].chunks_exact_mut(TEXEL_CHANNELS) {
        texel.copy_from_slice(&rgba);
      }
    }
  }
}
