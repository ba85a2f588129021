//! Volume texture upload into Bevy's image assets.

use bevy::asset::RenderAssetUsages;
use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use voxel_svo::{AddressMode, FilterMode, SamplerConfig, SvoError, SvoResult, VolumeTexture, VolumeUploader};

/// Build a 3D RGBA8 image from a flattened volume.
///
/// Linear `Rgba8Unorm`: texel bytes reach the shader unchanged.
pub fn volume_image(texture: &VolumeTexture, sampler: &SamplerConfig) -> Image {
  let size = texture.size();
  let mut image = Image::new(
    Extent3d {
      width: size,
      height: size,
      depth_or_array_layers: size,
    },
    TextureDimension::D3,
    texture.data().to_vec(),
    TextureFormat::Rgba8Unorm,
    RenderAssetUsages::RENDER_WORLD,
  );

  image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
    address_mode_u: address_mode(sampler.address_u),
    address_mode_v: address_mode(sampler.address_v),
    address_mode_w: address_mode(sampler.address_w),
    mag_filter: filter_mode(sampler.mag_filter),
    min_filter: filter_mode(sampler.min_filter),
    mipmap_filter: ImageFilterMode::Nearest,
    ..Default::default()
  });

  image
}

fn filter_mode(mode: FilterMode) -> ImageFilterMode {
  match mode {
    FilterMode::Nearest => ImageFilterMode::Nearest,
    FilterMode::Linear => ImageFilterMode::Linear,
  }
}

fn address_mode(mode: AddressMode) -> ImageAddressMode {
  match mode {
    AddressMode::ClampToEdge => ImageAddressMode::ClampToEdge,
    AddressMode::Repeat => ImageAddressMode::Repeat,
  }
}

/// [`VolumeUploader`] backed by `Assets<Image>`.
///
/// Adds a new image, or replaces the asset behind `target` so materials
/// holding the handle pick up the new volume.
pub struct ImageUploader<'a> {
  images: &'a mut Assets<Image>,
  target: Option<Handle<Image>>,
}

impl<'a> ImageUploader<'a> {
  pub fn new(images: &'a mut Assets<Image>) -> Self {
    Self { images, target: None }
  }

  pub fn replacing(images: &'a mut Assets<Image>, target: Handle<Image>) -> Self {
    Self {
      images,
      target: Some(target),
    }
  }
}

impl VolumeUploader for ImageUploader<'_> {
  type Handle = Handle<Image>;

  fn upload_volume_texture(
    &mut self,
    texture: &VolumeTexture,
    sampler: &SamplerConfig,
  ) -> SvoResult<Handle<Image>> {
    let image = volume_image(texture, sampler);
    match &self.target {
      Some(handle) => {
        let slot = self
          .images
          .get_mut(handle)
          .ok_or_else(|| SvoError::upload("target volume image no longer exists"))?;
        *slot = image;
        Ok(handle.clone())
      }
      None => Ok(self.images.add(image)),
    }
  }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;
