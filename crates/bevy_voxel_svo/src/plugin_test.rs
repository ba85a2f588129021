//! Headless tests for SvoPlugin systems.

use bevy::prelude::*;
use bevy::render::render_resource::TextureDimension;
use voxel_svo::{texel_index, Rgb};

use crate::{SvoPlugin, SvoScene, SvoTexture};

fn headless_app(plugin: SvoPlugin) -> App {
  let mut app = App::new();
  app.add_plugins(MinimalPlugins);
  app.init_resource::<Assets<Image>>();
  app.add_plugins(plugin);
  app
}

#[test]
fn test_startup_uploads_demo_scene() {
  let mut app = headless_app(SvoPlugin::default());
  app.update();

  let texture = app.world().resource::<SvoTexture>();
  assert_eq!(texture.revision, 0);

  let images = app.world().resource::<Assets<Image>>();
  let image = images.get(&texture.handle).expect("volume image should exist");
  assert_eq!(image.texture_descriptor.dimension, TextureDimension::D3);
  assert_eq!(image.texture_descriptor.size.depth_or_array_layers, 16);

  let scene = app.world().resource::<SvoScene>();
  assert!(!scene.is_dirty());
  assert_eq!(scene.octree().get_voxel(5, 5, 5), Ok(Some(Rgb::new(255, 0, 0))));
}

#[test]
fn test_edit_triggers_reupload() {
  let mut app = headless_app(SvoPlugin::default());
  app.update();
  let handle = app.world().resource::<SvoTexture>().handle.clone();

  // Untouched scene is not re-uploaded
  app.update();
  assert_eq!(app.world().resource::<SvoTexture>().revision, 0);

  app
    .world_mut()
    .resource_mut::<SvoScene>()
    .octree_mut()
    .set_voxel(1, 2, 3, "#00ff00")
    .unwrap();
  app.update();

  let texture = app.world().resource::<SvoTexture>();
  assert_eq!(texture.revision, 1);
  assert_eq!(texture.handle, handle, "the existing image is replaced in place");
  assert!(!app.world().resource::<SvoScene>().is_dirty());
}

#[test]
fn test_missing_scene_file_falls_back_to_demo() {
  let mut app = headless_app(SvoPlugin {
    scene: Some("does/not/exist.toml".into()),
  });
  app.update();

  let scene = app.world().resource::<SvoScene>();
  assert_eq!(scene.octree().size(), 16);
}

#[test]
fn test_scene_file_is_loaded() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("scene.toml");
  std::fs::write(&path, "max_depth = 2\n[[voxels]]\nx = 3\ny = 3\nz = 3\ncolor = \"#0000ff\"\n").unwrap();

  let mut app = headless_app(SvoPlugin { scene: Some(path) });
  app.update();

  let scene = app.world().resource::<SvoScene>();
  assert_eq!(scene.octree().size(), 4);
  assert_eq!(scene.octree().get_voxel(3, 3, 3), Ok(Some(Rgb::new(0, 0, 255))));

  let texture = app.world().resource::<SvoTexture>();
  let images = app.world().resource::<Assets<Image>>();
  assert_eq!(images.get(&texture.handle).unwrap().texture_descriptor.size.width, 4);
}

#[test]
fn test_unbuildable_scene_falls_back_to_demo() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("scene.toml");
  std::fs::write(&path, "max_depth = 1\n[[voxels]]\nx = 2\ny = 0\nz = 0\ncolor = \"#0000ff\"\n").unwrap();

  let mut app = headless_app(SvoPlugin { scene: Some(path) });
  app.update();

  let scene = app.world().resource::<SvoScene>();
  assert_eq!(scene.octree().size(), 16);
  assert!(app.world().get_resource::<SvoTexture>().is_some());
}

#[test]
fn test_removed_image_is_recreated_on_edit() {
  let mut app = headless_app(SvoPlugin::default());
  app.update();
  let old_handle = app.world().resource::<SvoTexture>().handle.clone();

  app.world_mut().resource_mut::<Assets<Image>>().remove(&old_handle);
  app
    .world_mut()
    .resource_mut::<SvoScene>()
    .octree_mut()
    .set_voxel(1, 2, 3, "#00ff00")
    .unwrap();
  app.update();

  let texture = app.world().resource::<SvoTexture>();
  assert_ne!(texture.handle, old_handle);
  assert_eq!(texture.revision, 1);
  assert!(!app.world().resource::<SvoScene>().is_dirty());

  let images = app.world().resource::<Assets<Image>>();
  let image = images.get(&texture.handle).expect("a live volume image");
  let data = image.data.as_deref().expect("volume image keeps its bytes");
  let offset = texel_index(1, 2, 3, 16);
  assert_eq!(&data[offset..offset + 4], &[0, 255, 0, 255]);
}
