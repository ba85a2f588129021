//! Bevy presentation layer for voxel_svo.
//!
//! This crate bridges the engine-independent octree with Bevy: it loads a
//! scene description, builds the octree, and keeps a 3D `Image` asset in sync
//! with it for the raymarching material to sample.

pub mod image;
pub mod resources;
pub mod scene;
pub mod systems;

#[cfg(test)]
mod plugin_test;

use std::path::PathBuf;

use bevy::prelude::*;
pub use image::{volume_image, ImageUploader};
pub use resources::*;
pub use scene::SceneConfig;

/// Bevy plugin that builds the voxel scene and uploads it as a volume texture.
///
/// Expects `Assets<Image>` to exist (registered by `DefaultPlugins`).
#[derive(Default)]
pub struct SvoPlugin {
	/// TOML scene to load at startup. The built-in demo scene is used when
	/// unset or when the file cannot be loaded or built.
	pub scene: Option<PathBuf>,
}

impl Plugin for SvoPlugin {
	fn build(&self, app: &mut App) {
		app.insert_resource(SvoSceneSource {
			path: self.scene.clone(),
		})
		.add_systems(Startup, systems::setup_svo_scene)
		.add_systems(Update, systems::sync_svo_texture);
	}
}
