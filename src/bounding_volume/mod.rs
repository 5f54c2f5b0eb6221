//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::obb::{CovarianceObbFitter, Obb, ObbFitter};

#[doc(hidden)]
pub mod obb;
