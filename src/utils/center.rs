use crate::math::{Point, Real, Vector};

/// Computes the per-axis arithmetic mean of a set of points.
///
/// Every point is weighted equally, so this is the centroid of the point cloud
/// (and not the center of its bounding box).
///
/// # Panics
///
/// Panics if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use octobb3d::math::Point;
/// use octobb3d::utils::center;
///
/// let pts = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 2.0),
/// ];
/// let c = center(&pts);
///
/// assert!((c.x - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!((c.z - 2.0 / 3.0).abs() < 1.0e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));
    let sum = pts
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords);

    Point::from(sum * denom)
}
