//! Implementation details of the intersection tests.

pub use self::intersection_test_octree_octree::{
    intersection_test_octree_octree, intersection_test_point_cloud_point_cloud,
};

mod intersection_test_octree_octree;
