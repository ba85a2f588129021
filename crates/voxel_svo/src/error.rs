//! Error type shared by every fallible octree and texture operation.

use thiserror::Error;

/// Errors raised by the octree, the flattener and volume uploaders.
///
/// Every operation that returns one of these leaves the octree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvoError {
  #[error("Invalid octree configuration (max_depth = {max_depth}): {reason}")]
  InvalidConfiguration { max_depth: i32, reason: &'static str },
  #[error("Malformed color {0:?}, expected #RRGGBB")]
  MalformedColor(String),
  #[error("Coordinate ({x}, {y}, {z}) is outside the volume [0, {size})")]
  CoordinateOutOfRange { x: i32, y: i32, z: i32, size: u32 },
  #[error("Level {level} is deeper than max_depth {max_depth}")]
  LevelOutOfRange { level: u8, max_depth: u8 },
  #[error("Texture buffer is {actual} bytes, expected {expected}")]
  BufferSize { expected: usize, actual: usize },
  #[error("Volume upload failed: {0}")]
  Upload(String),
}

impl SvoError {
  /// Build an [`SvoError::Upload`] from any displayable cause.
  pub fn upload<S: AsRef<str>>(msg: S) -> Self {
    SvoError::Upload(msg.as_ref().to_owned())
  }
}

pub type SvoResult<T> = Result<T, SvoError>;
