use super::*;

const RED: Voxel = Voxel::new(Rgb::new(255, 0, 0));
const BLUE: Voxel = Voxel::new(Rgb::new(0, 0, 255));

#[test]
fn test_new_node_is_empty_and_not_leaf() {
  let node = OctreeNode::new(3);
  assert_eq!(node.level(), 3);
  assert!(node.is_empty());
  assert!(!node.is_leaf());
  assert_eq!(node.voxel(), None);
  assert_eq!(node.populated().count(), 0);
}

#[test]
fn test_leaf_holds_single_voxel() {
  let node = OctreeNode::leaf(2, RED);
  assert!(node.is_leaf());
  assert!(!node.is_empty());
  assert_eq!(node.voxel(), Some(RED));
  assert_eq!(node.child(0), None, "Leaves have no children");
}

#[test]
fn test_child_or_insert_creates_next_level() {
  let mut node = OctreeNode::new(1);
  let child = node.child_or_insert(5);
  assert_eq!(child.level(), 2);
  assert!(child.is_empty());

  let populated: Vec<usize> = node.populated().map(|(octant, _)| octant).collect();
  assert_eq!(populated, vec![5]);
}

#[test]
fn test_child_or_insert_reuses_existing_child() {
  let mut node = OctreeNode::new(0);
  node.child_or_insert(3).make_leaf(RED);
  assert_eq!(node.child_or_insert(3).voxel(), Some(RED));
  assert_eq!(node.populated().count(), 1);
}

/// Descending into a leaf splits it into 8 leaves of the old color.
#[test]
fn test_child_or_insert_splits_leaf() {
  let mut node = OctreeNode::leaf(0, RED);
  node.child_or_insert(6).make_leaf(BLUE);

  assert!(!node.is_leaf());
  assert_eq!(node.populated().count(), 8);
  for (octant, child) in node.populated() {
    let expected = if octant == 6 { BLUE } else { RED };
    assert_eq!(child.voxel(), Some(expected), "octant {}", octant);
    assert_eq!(child.level(), 1);
  }
}

#[test]
fn test_make_leaf_discards_children() {
  let mut node = OctreeNode::new(0);
  node.child_or_insert(0).make_leaf(RED);
  node.child_or_insert(7).make_leaf(BLUE);

  node.make_leaf(BLUE);
  assert_eq!(node.voxel(), Some(BLUE));
  assert_eq!(node.populated().count(), 0);
}

#[test]
fn test_try_merge_requires_all_octants_uniform() {
  let mut node = OctreeNode::new(0);
  for octant in 0..7 {
    node.child_or_insert(octant).make_leaf(RED);
  }
  assert!(!node.try_merge(), "An empty octant blocks merging");

  node.child_or_insert(7).make_leaf(BLUE);
  assert!(!node.try_merge(), "Mixed colors block merging");

  node.child_or_insert(7).make_leaf(RED);
  assert!(node.try_merge());
  assert_eq!(node.voxel(), Some(RED));
}

#[test]
fn test_try_merge_ignores_subdivided_octants() {
  let mut node = OctreeNode::new(0);
  for octant in 0..8 {
    node.child_or_insert(octant).make_leaf(RED);
  }
  node.child_or_insert(2).child_or_insert(1).make_leaf(RED);

  // Octant 2 was split into leaves, it is no longer a leaf itself
  assert!(!node.try_merge());
}
