//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::cov::center_cov;
pub use self::isometry_ops::IsometryOpt;
pub use self::obb::obb;

mod center;
mod cov;
mod isometry_ops;
mod obb;
