//! An octree whose nodes are bounded by oriented bounding boxes.

pub use octant::Octant;
pub use octree_tree::{
    Octree, OctreeBuildError, OctreeBuildOptions, OctreeChildren, OctreeNode, OctreeNodeKind,
    DEFAULT_MAX_LEAF_POINTS,
};

mod octant;
mod octree_build;
mod octree_frame;
mod octree_traverse;
mod octree_tree;
mod octree_validation;
