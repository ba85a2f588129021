//! Upload seam between the flattener and whatever owns the GPU.

use super::{flatten, VolumeTexture};
use crate::error::SvoResult;
use crate::octree::Octree;

/// Texture filtering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterMode {
  Nearest,
  Linear,
}

/// Texture coordinate wrapping mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressMode {
  ClampToEdge,
  Repeat,
}

/// Sampler state requested for an uploaded volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SamplerConfig {
  pub min_filter: FilterMode,
  pub mag_filter: FilterMode,
  pub address_u: AddressMode,
  pub address_v: AddressMode,
  pub address_w: AddressMode,
}

impl SamplerConfig {
  /// Nearest filtering, clamped on all three axes. Voxels must stay crisp
  /// and must not bleed across the volume boundary.
  pub const VOXEL: Self = Self {
    min_filter: FilterMode::Nearest,
    mag_filter: FilterMode::Nearest,
    address_u: AddressMode::ClampToEdge,
    address_v: AddressMode::ClampToEdge,
    address_w: AddressMode::ClampToEdge,
  };
}

impl Default for SamplerConfig {
  fn default() -> Self {
    Self::VOXEL
  }
}

/// Receives flattened volumes and turns them into renderer-owned textures.
///
/// The texture is `size` texels on each axis, RGBA8, laid out as described
/// in [`constants`](crate::constants). Implementations must declare exactly
/// that extent and format.
pub trait VolumeUploader {
  /// Renderer-side handle to the uploaded texture.
  type Handle;

  fn upload_volume_texture(
    &mut self,
    texture: &VolumeTexture,
    sampler: &SamplerConfig,
  ) -> SvoResult<Self::Handle>;
}

/// Blanket impl for mutable references.
impl<U: VolumeUploader + ?Sized> VolumeUploader for &mut U {
  type Handle = U::Handle;

  fn upload_volume_texture(
    &mut self,
    texture: &VolumeTexture,
    sampler: &SamplerConfig,
  ) -> SvoResult<Self::Handle> {
    (**self).upload_volume_texture(texture, sampler)
  }
}

/// Flatten `octree` and hand it to `uploader` with [`SamplerConfig::VOXEL`].
pub fn upload<U: VolumeUploader + ?Sized>(octree: &Octree, uploader: &mut U) -> SvoResult<U::Handle> {
  let texture = flatten(octree);
  uploader.upload_volume_texture(&texture, &SamplerConfig::VOXEL)
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;
