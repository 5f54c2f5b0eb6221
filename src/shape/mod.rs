//! Shapes supported by octobb.

pub use self::point_cloud::PointCloud;

mod point_cloud;
