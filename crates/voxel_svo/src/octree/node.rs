//! OctreeNode - one cubic region of the tree and its child slots.

use std::array;

use crate::color::Rgb;
use crate::constants::OCTANT_COUNT;

/// A solid, uniformly colored cell. Terminal: never subdivided further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Voxel {
  pub color: Rgb,
}

impl Voxel {
  #[inline]
  pub const fn new(color: Rgb) -> Self {
    Self { color }
  }
}

/// One octant of a subdivided node. `None` means no geometry in that octant.
pub type Slot = Option<Box<OctreeNode>>;

/// Contents of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children {
  /// Subdivided region, one slot per octant.
  Octants(Box<[Slot; OCTANT_COUNT]>),
  /// The whole region is a single voxel.
  Leaf(Voxel),
}

/// Octree node. Exclusively owns its children; no parent links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OctreeNode {
  level: u8,
  children: Children,
}

impl OctreeNode {
  /// Create an empty, subdivided node at `level`.
  pub fn new(level: u8) -> Self {
    Self {
      level,
      children: Children::Octants(Box::new(array::from_fn(|_| None))),
    }
  }

  /// Create a leaf node at `level`.
  pub fn leaf(level: u8, voxel: Voxel) -> Self {
    Self {
      level,
      children: Children::Leaf(voxel),
    }
  }

  /// Depth of this node (root = 0).
  #[inline]
  pub fn level(&self) -> u8 {
    self.level
  }

  #[inline]
  pub fn children(&self) -> &Children {
    &self.children
  }

  /// Whole-node leaf test: the node holds exactly one voxel.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self.children, Children::Leaf(_))
  }

  /// The voxel of a leaf node.
  #[inline]
  pub fn voxel(&self) -> Option<Voxel> {
    match self.children {
      Children::Leaf(voxel) => Some(voxel),
      Children::Octants(_) => None,
    }
  }

  /// Child at `octant`, if the node is subdivided and the octant populated.
  pub fn child(&self, octant: usize) -> Option<&OctreeNode> {
    match &self.children {
      Children::Octants(octants) => octants.get(octant)?.as_deref(),
      Children::Leaf(_) => None,
    }
  }

  /// Populated octants with their index.
  pub fn populated(&self) -> impl Iterator<Item = (usize, &OctreeNode)> {
    let octants = match &self.children {
      Children::Octants(octants) => Some(octants.iter()),
      Children::Leaf(_) => None,
    };
    octants
      .into_iter()
      .flatten()
      .enumerate()
      .filter_map(|(octant, slot)| Some((octant, slot.as_deref()?)))
  }

  /// True for a subdivided node with no populated octant.
  pub fn is_empty(&self) -> bool {
    match &self.children {
      Children::Octants(octants) => octants.iter().all(Option::is_none),
      Children::Leaf(_) => false,
    }
  }

  /// Replace the entire child array with a single voxel.
  ///
  /// Previously subdivided children are dropped.
  pub(crate) fn make_leaf(&mut self, voxel: Voxel) {
    self.children = Children::Leaf(voxel);
  }

  /// Mutable child at `octant`, creating it on first use.
  ///
  /// A leaf is split first: every octant becomes a leaf of the old color.
  pub(crate) fn child_or_insert(&mut self, octant: usize) -> &mut OctreeNode {
    let child_level = self.level + 1;
    if let Children::Leaf(voxel) = self.children {
      self.children = Children::Octants(Box::new(array::from_fn(|_| {
        Some(Box::new(OctreeNode::leaf(child_level, voxel)))
      })));
    }
    match &mut self.children {
      Children::Octants(octants) => {
        octants[octant]
          .get_or_insert_with(|| Box::new(OctreeNode::new(child_level)))
          .as_mut()
      }
      Children::Leaf(_) => unreachable!("leaf nodes are split above"),
    }
  }

  /// Collapse into a leaf when all octants are leaves of one color.
  ///
  /// Returns true if the node was merged.
  pub(crate) fn try_merge(&mut self) -> bool {
    let merged = match &self.children {
      Children::Octants(octants) => {
        let mut voxels = octants
          .iter()
          .map(|slot| slot.as_deref().and_then(OctreeNode::voxel));
        match voxels.next() {
          Some(Some(first)) if voxels.all(|voxel| voxel == Some(first)) => Some(first),
          _ => None,
        }
      }
      Children::Leaf(_) => None,
    };

    match merged {
      Some(voxel) => {
        self.make_leaf(voxel);
        true
      }
      None => false,
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
