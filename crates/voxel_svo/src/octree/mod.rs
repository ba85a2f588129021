//! Sparse voxel octree.
//!
//! A rooted, up to 8-ary tree over axis-aligned cubes. The root covers
//! `[0, 2^max_depth)` on every axis; each level halves the region. Nodes are
//! created lazily on the first write into an empty octant and are never
//! removed individually.
//!
//! # Write Semantics
//!
//! ```text
//! descend(node, min, size):
//!   size == 1 or node.level == target level  → node becomes Leaf(voxel)
//!   node is a leaf, LeafPolicy::Overwrite     → node becomes Leaf(voxel)
//!   node is a leaf, LeafPolicy::Split         → split into 8 leaves, continue
//!   otherwise                                 → descend into the octant of
//!                                               the point, creating it
//! ```
//!
//! Turning a node into a leaf drops whatever it held before. That is a
//! destructive overwrite, not a merge.
//!
//! # Module Structure
//!
//! - [`config`]: `OctreeConfig`, `LeafPolicy`
//! - [`node`]: `OctreeNode`, `Children`, `Voxel`
//! - [`octant`]: octant index and offset math shared with the flattener

pub mod config;
pub mod node;
pub mod octant;

// Re-exports
pub use config::{LeafPolicy, OctreeConfig};
pub use node::{Children, OctreeNode, Slot, Voxel};

use glam::UVec3;
use tracing::{debug, trace};

use crate::color::Rgb;
use crate::error::{SvoError, SvoResult};
use octant::child_region;

/// Counts gathered by a full walk of the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
  /// Nodes, root included.
  pub nodes: usize,
  /// Leaf nodes.
  pub leaves: usize,
  /// Unit cells covered by leaves.
  pub filled_cells: u64,
  /// Deepest level holding a node.
  pub max_level: u8,
}

/// A single pending write, validated before the tree is touched.
struct Edit {
  point: UVec3,
  level: u8,
  voxel: Voxel,
  policy: LeafPolicy,
  merge_uniform: bool,
}

/// Sparse voxel octree bounded by `max_depth`.
///
/// Single-writer: there is no internal synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Octree {
  config: OctreeConfig,
  root: OctreeNode,
}

impl Octree {
  /// Create an empty octree with the default write semantics.
  ///
  /// Fails with [`SvoError::InvalidConfiguration`] for a negative depth or one
  /// deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
  pub fn new(max_depth: i32) -> SvoResult<Self> {
    let max_depth = OctreeConfig::validate_depth(max_depth)?;
    Self::with_config(OctreeConfig::default().with_max_depth(max_depth))
  }

  pub fn with_config(config: OctreeConfig) -> SvoResult<Self> {
    config.validate()?;
    debug!(
      max_depth = config.max_depth,
      leaf_policy = ?config.leaf_policy,
      merge_uniform = config.merge_uniform,
      "created octree"
    );
    Ok(Self {
      config,
      root: OctreeNode::new(0),
    })
  }

  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  #[inline]
  pub fn max_depth(&self) -> u8 {
    self.config.max_depth
  }

  /// Cells per axis (2^max_depth).
  #[inline]
  pub fn size(&self) -> u32 {
    self.config.size()
  }

  #[inline]
  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  /// True when nothing has been written since construction or [`clear`](Self::clear).
  pub fn is_empty(&self) -> bool {
    self.root.is_empty()
  }

  /// Drop every node and start again from an empty root.
  pub fn clear(&mut self) {
    self.root = OctreeNode::new(0);
  }

  /// Insert or overwrite the unit voxel at (x, y, z) with a `#RRGGBB` color.
  pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, color: &str) -> SvoResult<()> {
    let color = Rgb::from_hex(color)?;
    self.set_voxel_rgb(x, y, z, color)
  }

  /// Insert or overwrite the unit voxel at (x, y, z).
  pub fn set_voxel_rgb(&mut self, x: i32, y: i32, z: i32, color: Rgb) -> SvoResult<()> {
    self.set_voxel_at_level(x, y, z, self.config.max_depth, color)
  }

  /// Write a voxel covering the whole node at `level` that contains (x, y, z).
  ///
  /// `level == max_depth` is a unit cell, `level == 0` the whole volume. The
  /// node at `level` becomes a leaf and loses any children it had.
  #[cfg_attr(
    feature = "instrument",
    tracing::instrument(skip(self), name = "octree::set_voxel")
  )]
  pub fn set_voxel_at_level(
    &mut self,
    x: i32,
    y: i32,
    z: i32,
    level: u8,
    color: Rgb,
  ) -> SvoResult<()> {
    let point = self.check_point(x, y, z)?;
    if level > self.config.max_depth {
      return Err(SvoError::LevelOutOfRange {
        level,
        max_depth: self.config.max_depth,
      });
    }

    let edit = Edit {
      point,
      level,
      voxel: Voxel::new(color),
      policy: self.config.leaf_policy,
      merge_uniform: self.config.merge_uniform,
    };
    let size = self.size();
    write(&mut self.root, UVec3::ZERO, size, &edit);
    Ok(())
  }

  /// Color of the cell at (x, y, z), or `None` if nothing covers it.
  ///
  /// Follows the same descent as the writes; a leaf answers for every cell of
  /// its region.
  pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> SvoResult<Option<Rgb>> {
    let point = self.check_point(x, y, z)?;

    let mut node = &self.root;
    let mut min = UVec3::ZERO;
    let mut size = self.size();

    loop {
      if let Some(voxel) = node.voxel() {
        return Ok(Some(voxel.color));
      }
      if size == 1 {
        return Ok(None);
      }
      let (octant, child_min) = child_region(point, min, size);
      match node.child(octant) {
        Some(child) => {
          node = child;
          min = child_min;
          size /= 2;
        }
        None => return Ok(None),
      }
    }
  }

  /// Walk the whole tree and count nodes and leaves.
  pub fn stats(&self) -> OctreeStats {
    let mut stats = OctreeStats::default();
    collect_stats(&self.root, self.size(), &mut stats);
    stats
  }

  /// Reject coordinates outside `[0, size)` on any axis.
  fn check_point(&self, x: i32, y: i32, z: i32) -> SvoResult<UVec3> {
    let size = self.size();
    let in_range = |v: i32| v >= 0 && (v as u32) < size;
    if in_range(x) && in_range(y) && in_range(z) {
      Ok(UVec3::new(x as u32, y as u32, z as u32))
    } else {
      Err(SvoError::CoordinateOutOfRange { x, y, z, size })
    }
  }
}

fn write(node: &mut OctreeNode, min: UVec3, size: u32, edit: &Edit) {
  if size == 1 || node.level() >= edit.level {
    node.make_leaf(edit.voxel);
    return;
  }

  if node.is_leaf() {
    match edit.policy {
      LeafPolicy::Overwrite => {
        trace!(level = node.level(), size, "overwriting leaf region");
        node.make_leaf(edit.voxel);
        return;
      }
      LeafPolicy::Split => trace!(level = node.level(), size, "splitting leaf region"),
    }
  }

  let (octant, child_min) = child_region(edit.point, min, size);
  write(node.child_or_insert(octant), child_min, size / 2, edit);

  if edit.merge_uniform && node.try_merge() {
    trace!(level = node.level(), size, "merged uniform octants");
  }
}

fn collect_stats(node: &OctreeNode, size: u32, stats: &mut OctreeStats) {
  stats.nodes += 1;
  stats.max_level = stats.max_level.max(node.level());
  if node.is_leaf() {
    stats.leaves += 1;
    stats.filled_cells += u64::from(size).pow(3);
  }
  for (_, child) in node.populated() {
    collect_stats(child, size / 2, stats);
  }
}
