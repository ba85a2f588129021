//! Scene description parsing.
//!
//! A scene is a TOML file listing the octree settings and the voxels to
//! insert. It describes what to build; the octree itself is never saved.
//!
//! ```toml
//! max_depth = 4
//! leaf_policy = "split"
//! merge_uniform = true
//!
//! [[voxels]]
//! x = 5
//! y = 5
//! z = 5
//! color = "#ff0000"
//!
//! [[boxes]]
//! min = [0, 0, 0]
//! max = [15, 0, 15]
//! color = "#808080"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use voxel_svo::{LeafPolicy, Octree, OctreeConfig, Rgb};

/// Root scene description.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
	/// Octree depth; the volume is 2^max_depth cells per axis.
	#[serde(default = "default_max_depth")]
	pub max_depth: u8,
	/// Behavior of writes inside larger leaves.
	#[serde(default)]
	pub leaf_policy: LeafPolicy,
	/// Merge octants that end up uniformly colored.
	#[serde(default)]
	pub merge_uniform: bool,
	/// Individual voxels, applied first.
	#[serde(default)]
	pub voxels: Vec<VoxelEntry>,
	/// Solid boxes, applied after the voxels.
	#[serde(default)]
	pub boxes: Vec<BoxEntry>,
}

/// A single colored voxel.
#[derive(Debug, Clone, Deserialize)]
pub struct VoxelEntry {
	pub x: i32,
	pub y: i32,
	pub z: i32,
	/// `#RRGGBB`
	pub color: String,
}

/// Axis-aligned box of voxels, bounds inclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxEntry {
	pub min: [i32; 3],
	pub max: [i32; 3],
	/// `#RRGGBB`
	pub color: String,
}

fn default_max_depth() -> u8 {
	OctreeConfig::REFERENCE.max_depth
}

impl SceneConfig {
	/// Load a scene from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read scene file: {}", path.display()))?;
		Self::parse(&content).with_context(|| format!("Invalid scene file: {}", path.display()))
	}

	/// Parse and validate a scene from TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let scene: SceneConfig = toml::from_str(content).context("Failed to parse scene TOML")?;

		scene.octree_config().validate()?;
		for (i, entry) in scene.boxes.iter().enumerate() {
			if (0..3).any(|axis| entry.min[axis] > entry.max[axis]) {
				anyhow::bail!(
					"Box #{} has min {:?} greater than max {:?}",
					i,
					entry.min,
					entry.max
				);
			}
		}

		Ok(scene)
	}

	pub fn octree_config(&self) -> OctreeConfig {
		OctreeConfig {
			max_depth: self.max_depth,
			leaf_policy: self.leaf_policy,
			merge_uniform: self.merge_uniform,
		}
	}

	/// Build the octree, failing on the first voxel that cannot be inserted.
	pub fn build_octree(&self) -> Result<Octree> {
		let mut octree = Octree::with_config(self.octree_config())?;

		for (i, voxel) in self.voxels.iter().enumerate() {
			octree
				.set_voxel(voxel.x, voxel.y, voxel.z, &voxel.color)
				.with_context(|| format!("Voxel #{} at ({}, {}, {})", i, voxel.x, voxel.y, voxel.z))?;
		}

		for (i, entry) in self.boxes.iter().enumerate() {
			let color = Rgb::from_hex(&entry.color).with_context(|| format!("Box #{}", i))?;
			let [x0, y0, z0] = entry.min;
			let [x1, y1, z1] = entry.max;
			for z in z0..=z1 {
				for y in y0..=y1 {
					for x in x0..=x1 {
						octree
							.set_voxel_rgb(x, y, z, color)
							.with_context(|| format!("Box #{} at ({}, {}, {})", i, x, y, z))?;
					}
				}
			}
		}

		Ok(octree)
	}

	/// Built-in scene: a floor, a block and a single red voxel.
	pub fn demo() -> Self {
		Self {
			max_depth: 4,
			leaf_policy: LeafPolicy::Split,
			merge_uniform: true,
			voxels: vec![VoxelEntry {
				x: 5,
				y: 5,
				z: 5,
				color: "#ff0000".to_owned(),
			}],
			boxes: vec![
				BoxEntry {
					min: [0, 0, 0],
					max: [15, 0, 15],
					color: "#808080".to_owned(),
				},
				BoxEntry {
					min: [8, 1, 8],
					max: [11, 4, 11],
					color: "#2E8B57".to_owned(),
				},
			],
		}
	}
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;
