/*!
octobb
========

**octobb** is a 3-dimensional library for approximate collision detection
between rigid point clouds, written with the rust programming language.

Each point cloud is partitioned into an octree whose nodes carry an oriented
bounding box fitted on their points. Two clouds are tested by descending both
trees simultaneously, following the octant containing the other body's
representative point, and by running a coarse test on the pair of nodes the
descent stops at.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub type Real = f64;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub type Real = f32;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of octants a node of the hierarchy is split into.
    pub const NUM_OCTANTS: usize = 1 << DIM;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    ///
    /// Used for the orthonormal bases of oriented bounding boxes.
    pub use Matrix3 as Matrix;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;
}
