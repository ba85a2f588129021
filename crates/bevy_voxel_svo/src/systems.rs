//! Startup and per-frame systems for the voxel scene.

use std::path::Path;

use bevy::prelude::*;
use voxel_svo::{upload, Octree, SvoError};

use crate::image::ImageUploader;
use crate::resources::{SvoScene, SvoSceneSource, SvoTexture};
use crate::scene::SceneConfig;

/// Startup system: build the octree from the configured scene and upload it.
///
/// A scene file that cannot be read, parsed or built falls back to
/// [`SceneConfig::demo`].
pub fn setup_svo_scene(
  mut commands: Commands,
  source: Res<SvoSceneSource>,
  mut images: ResMut<Assets<Image>>,
) {
  let built = match source.path.as_deref().map(load_scene) {
    Some(Ok(octree)) => Ok(octree),
    Some(Err(err)) => {
      warn!("Falling back to demo scene: {:#}", err);
      SceneConfig::demo().build_octree()
    }
    None => SceneConfig::demo().build_octree(),
  };

  let octree = match built {
    Ok(octree) => octree,
    Err(err) => {
      error!("Failed to build voxel scene: {:#}", err);
      return;
    }
  };

  let stats = octree.stats();
  info!(
    "Built octree: depth {}, {} nodes, {} leaves, {} filled cells",
    octree.max_depth(),
    stats.nodes,
    stats.leaves,
    stats.filled_cells
  );

  match upload(&octree, &mut ImageUploader::new(&mut images)) {
    Ok(handle) => {
      commands.insert_resource(SvoTexture { handle, revision: 0 });
      commands.insert_resource(SvoScene::new(octree));
    }
    Err(err) => error!("Failed to upload voxel volume: {}", err),
  }
}

fn load_scene(path: &Path) -> anyhow::Result<Octree> {
  SceneConfig::load(path)?.build_octree()
}

/// Re-flatten the octree into the existing image after it was edited.
///
/// If the image was removed in the meantime a new one is added and
/// [`SvoTexture::handle`] is pointed at it. The scene stays dirty until an
/// upload succeeds.
pub fn sync_svo_texture(
  scene: Option<ResMut<SvoScene>>,
  texture: Option<ResMut<SvoTexture>>,
  mut images: ResMut<Assets<Image>>,
) {
  let (Some(mut scene), Some(mut texture)) = (scene, texture) else {
    return;
  };
  if !scene.is_dirty() {
    return;
  }

  let replaced = upload(
    scene.octree(),
    &mut ImageUploader::replacing(&mut images, texture.handle.clone()),
  );
  let result = match replaced {
    Ok(_) => Ok(()),
    Err(SvoError::Upload(reason)) => {
      warn!("Volume image lost ({}), uploading a new one", reason);
      upload(scene.octree(), &mut ImageUploader::new(&mut images)).map(|handle| texture.handle = handle)
    }
    Err(err) => Err(err),
  };

  match result {
    Ok(()) => {
      texture.revision += 1;
      scene.clear_dirty();
      debug!("Re-uploaded voxel volume (revision {})", texture.revision);
    }
    Err(err) => warn!("Failed to re-upload voxel volume, retrying next frame: {}", err),
  }
}
