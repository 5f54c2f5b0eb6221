use crate::bounding_volume::Obb;
use crate::math::{Matrix, Point, Real, Vector, DIM};

/// Computes an oriented bounding box for the given set of points.
///
/// The box axes are the eigenvectors of the covariance matrix of `pts`, oriented so they form a
/// right-handed basis. The returned OBB is not guaranteed to be the smallest enclosing OBB.
/// It should be good enough for most purposes though.
///
/// # Panics
///
/// Panics if `pts` is empty.
pub fn obb(pts: &[Point<Real>]) -> Obb {
    let (centroid, cov) = crate::utils::center_cov(pts);
    let mut eigv: Matrix<Real> = cov.symmetric_eigen().eigenvectors;

    if eigv.determinant() < 0.0 {
        eigv = -eigv;
    }

    let mut mins = Vector::repeat(Real::MAX);
    let mut maxs = Vector::repeat(-Real::MAX);

    for pt in pts {
        for i in 0..DIM {
            let dot = eigv.column(i).dot(&pt.coords);
            mins[i] = mins[i].min(dot);
            maxs[i] = maxs[i].max(dot);
        }
    }

    Obb::new(mins.into(), maxs.into(), centroid, eigv)
}
