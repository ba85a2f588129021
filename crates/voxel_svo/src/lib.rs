//! voxel_svo - Sparse voxel octree for raymarched volume rendering
//!
//! This crate stores colored voxels in a bounded sparse octree and flattens
//! the tree into a dense RGBA8 3D texture for upload to a GPU sampler. It has
//! no engine dependency; the upload itself goes through the
//! [`VolumeUploader`] trait, implemented by the host.
//!
//! # Features
//!
//! - **Sparse insertion**: `O(max_depth)` writes with lazily created nodes
//! - **Leaf policies**: wholesale leaf overwrite or split-on-write
//! - **Uniform merging**: optional collapse of identical octants into one leaf
//! - **Flattening**: row-major `(z * S² + y * S + x) * 4` RGBA8 volume
//!
//! # Example
//!
//! ```
//! use voxel_svo::{flatten, Octree};
//!
//! let mut octree = Octree::new(1)?;
//! octree.set_voxel(0, 0, 0, "#FF0000")?;
//! octree.set_voxel(1, 1, 1, "#00FF00")?;
//!
//! let texture = flatten(&octree);
//! assert_eq!(texture.data().len(), 2 * 2 * 2 * 4);
//! assert_eq!(texture.texel(1, 1, 1), Some([0, 255, 0, 255]));
//! # Ok::<(), voxel_svo::SvoError>(())
//! ```

pub mod color;
pub mod constants;
pub mod error;

// Re-export commonly used items
pub use color::Rgb;
pub use constants::{byte_len, texel_index, volume_size, MAX_DEPTH, TEXEL_CHANNELS};
pub use error::{SvoError, SvoResult};

// Sparse voxel octree
pub mod octree;
pub use octree::{Children, LeafPolicy, Octree, OctreeConfig, OctreeNode, OctreeStats, Voxel};

// Dense texture flattening and the GPU upload seam
pub mod texture;
pub use texture::{
  flatten, flatten_into, upload, AddressMode, FilterMode, SamplerConfig, VolumeTexture,
  VolumeUploader,
};
