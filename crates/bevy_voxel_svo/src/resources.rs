//! Bevy resources for the voxel scene and its GPU texture.

use std::path::PathBuf;

use bevy::prelude::*;
use voxel_svo::Octree;

/// Where the startup system reads the scene from.
#[derive(Resource, Clone, Debug, Default)]
pub struct SvoSceneSource {
  pub path: Option<PathBuf>,
}

/// The live octree. Edits go through [`SvoScene::octree_mut`] so the texture
/// is re-flattened on the next frame.
#[derive(Resource)]
pub struct SvoScene {
  octree: Octree,
  dirty: bool,
}

impl SvoScene {
  pub fn new(octree: Octree) -> Self {
    Self { octree, dirty: false }
  }

  pub fn octree(&self) -> &Octree {
    &self.octree
  }

  /// Mutable access; marks the scene for re-upload.
  pub fn octree_mut(&mut self) -> &mut Octree {
    self.dirty = true;
    &mut self.octree
  }

  pub fn is_dirty(&self) -> bool {
    self.dirty
  }

  pub(crate) fn clear_dirty(&mut self) {
    self.dirty = false;
  }
}

/// Handle to the uploaded volume texture.
#[derive(Resource, Clone, Debug)]
pub struct SvoTexture {
  pub handle: Handle<Image>,
  /// Number of re-uploads since startup.
  pub revision: u32,
}
