//! OctreeConfig - depth bound and write semantics of an octree.

use crate::constants::MAX_DEPTH;
use crate::error::{SvoError, SvoResult};

/// What a write does when it reaches a leaf covering more than its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LeafPolicy {
  /// Replace the whole leaf with the new voxel. Any sibling detail the leaf
  /// stood for is lost.
  #[default]
  Overwrite,
  /// Split the leaf into 8 children of its old color and keep descending,
  /// so only the target region changes.
  Split,
}

/// Configuration for an [`Octree`](super::Octree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OctreeConfig {
  /// Subdivision levels below the root. Coordinates span `[0, 2^max_depth)`.
  pub max_depth: u8,

  /// Behavior of writes that land inside an existing larger leaf.
  pub leaf_policy: LeafPolicy,

  /// Collapse a node into a single leaf once all 8 octants are leaves of the
  /// same color.
  pub merge_uniform: bool,
}

impl OctreeConfig {
  /// Leaves are overwritten wholesale and never merged.
  pub const REFERENCE: Self = Self {
    max_depth: 4,
    leaf_policy: LeafPolicy::Overwrite,
    merge_uniform: false,
  };

  /// Leaves split on write and uniform octants merge back.
  pub const EDITOR: Self = Self {
    max_depth: 4,
    leaf_policy: LeafPolicy::Split,
    merge_uniform: true,
  };

  /// Same configuration with a different depth.
  #[inline]
  pub const fn with_max_depth(self, max_depth: u8) -> Self {
    Self { max_depth, ..self }
  }

  /// Texels per axis (2^max_depth).
  #[inline]
  pub const fn size(&self) -> u32 {
    1 << self.max_depth
  }

  /// Check a caller-supplied depth and narrow it to the stored type.
  pub fn validate_depth(max_depth: i32) -> SvoResult<u8> {
    if max_depth < 0 {
      return Err(SvoError::InvalidConfiguration {
        max_depth,
        reason: "max_depth must not be negative",
      });
    }
    if max_depth > MAX_DEPTH as i32 {
      return Err(SvoError::InvalidConfiguration {
        max_depth,
        reason: "flattened volume would exceed the largest supported texture",
      });
    }
    Ok(max_depth as u8)
  }

  pub fn validate(&self) -> SvoResult<()> {
    Self::validate_depth(self.max_depth as i32).map(|_| ())
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self::REFERENCE
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
