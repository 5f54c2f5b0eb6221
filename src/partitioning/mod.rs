//! Spatial partitioning tools.

pub use self::octree::{
    Octant, Octree, OctreeBuildError, OctreeBuildOptions, OctreeChildren, OctreeNode,
    OctreeNodeKind, DEFAULT_MAX_LEAF_POINTS,
};

mod octree;
