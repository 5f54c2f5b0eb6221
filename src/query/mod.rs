//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`intersection_test_point_cloud_point_cloud()`] to determine if two point-cloud bodies
//!   intersect.
//! * [`intersection_test_octree_octree()`] to run the same test on bare octrees with explicit
//!   positions.

pub use self::intersection_test::{
    intersection_test_octree_octree, intersection_test_point_cloud_point_cloud,
};

pub mod intersection_test;
