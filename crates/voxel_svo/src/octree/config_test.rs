use super::*;

#[test]
fn test_default_is_reference_behavior() {
  let config = OctreeConfig::default();
  assert_eq!(config, OctreeConfig::REFERENCE);
  assert_eq!(config.leaf_policy, LeafPolicy::Overwrite);
  assert!(!config.merge_uniform);
}

#[test]
fn test_size_doubles_per_depth() {
  assert_eq!(OctreeConfig::REFERENCE.with_max_depth(0).size(), 1);
  assert_eq!(OctreeConfig::REFERENCE.with_max_depth(1).size(), 2);
  assert_eq!(OctreeConfig::REFERENCE.with_max_depth(5).size(), 32);
}

#[test]
fn test_with_max_depth_keeps_policy() {
  let config = OctreeConfig::EDITOR.with_max_depth(7);
  assert_eq!(config.max_depth, 7);
  assert_eq!(config.leaf_policy, LeafPolicy::Split);
  assert!(config.merge_uniform);
}

#[test]
fn test_negative_depth_is_invalid() {
  let err = OctreeConfig::validate_depth(-1).unwrap_err();
  assert!(matches!(
    err,
    SvoError::InvalidConfiguration { max_depth: -1, .. }
  ));
}

#[test]
fn test_depth_bounds() {
  assert_eq!(OctreeConfig::validate_depth(0), Ok(0));
  assert_eq!(OctreeConfig::validate_depth(MAX_DEPTH as i32), Ok(MAX_DEPTH));
  assert!(OctreeConfig::validate_depth(MAX_DEPTH as i32 + 1).is_err());
  assert!(OctreeConfig::REFERENCE.with_max_depth(MAX_DEPTH + 1).validate().is_err());
}
