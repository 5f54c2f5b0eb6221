use crate::math::{Matrix, Point, Real};
use crate::num::FromPrimitive;

/// Computes the center and the covariance matrix of a set of points.
///
/// The covariance is normalized by the number of points (population
/// covariance).
pub fn center_cov(pts: &[Point<Real>]) -> (Point<Real>, Matrix<Real>) {
    let center = crate::utils::center(pts);
    let mut cov: Matrix<Real> = na::zero();
    let normalizer: Real = Real::from_usize(pts.len()).map_or(0.0, |n| 1.0 / n);

    for p in pts.iter() {
        let cp = *p - center;
        // NOTE: this is more numerically stable than using cov.syger.
        cov += cp * (cp * normalizer).transpose();
    }

    (center, cov)
}
