//! Oriented Bounding Box.

use crate::math::{Matrix, Point, Real, Vector, DIM};

/// An Oriented Bounding Box (OBB) fitted on a set of points.
///
/// Unlike an axis-aligned box, the OBB is expressed in its own rotated frame: the columns of
/// `rotation` are its local axes, expressed in the frame of the points it was fitted on.
///
/// # Structure
///
/// - **mins**/**maxs**: the smallest and largest projection of the fitted points on each local
///   axis. These are plain dot products with the axes, they are **not** relative to `centroid`.
/// - **centroid**: the origin of the fit (mean of the fitted points), in the parent frame.
/// - **rotation**: a right-handed orthonormal basis.
/// - **Invariant**: `mins[i] ≤ maxs[i]` for each axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// Smallest projection of the fitted points on each local axis.
    pub mins: Point<Real>,
    /// Largest projection of the fitted points on each local axis.
    pub maxs: Point<Real>,
    /// The fit origin, in the parent frame.
    pub centroid: Point<Real>,
    /// The local axes (as columns), in the parent frame.
    pub rotation: Matrix<Real>,
}

impl Obb {
    /// Creates a new OBB from its local extents, fit origin and basis.
    #[inline]
    pub fn new(
        mins: Point<Real>,
        maxs: Point<Real>,
        centroid: Point<Real>,
        rotation: Matrix<Real>,
    ) -> Self {
        Self {
            mins,
            maxs,
            centroid,
            rotation,
        }
    }

    /// The size of this box along each of its local axes.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents().product()
    }

    /// Expresses `pt`, given in the parent frame, along the local axes of this box.
    ///
    /// No translation is applied, this is consistent with `self.mins` and `self.maxs`.
    #[inline]
    pub fn project(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation.tr_mul(&pt.coords))
    }

    /// The local bounds of this box once re-centered on `origin` (given in the parent frame).
    ///
    /// A point `p` of the parent frame lies inside the box iff
    /// `rotationᵀ · (p - origin)` lies inside the returned bounds.
    #[inline]
    pub fn bounds_relative_to(&self, origin: &Point<Real>) -> (Point<Real>, Point<Real>) {
        let shift = self.project(origin).coords;
        (self.mins - shift, self.maxs - shift)
    }

    /// Tests if `local_pt`, expressed along the local axes and relative to `origin`, lies
    /// inside of this box.
    ///
    /// Each axis is tested independently, boundaries included.
    pub fn contains_local_point_relative_to(
        &self,
        origin: &Point<Real>,
        local_pt: &Point<Real>,
    ) -> bool {
        let (mins, maxs) = self.bounds_relative_to(origin);

        for i in 0..DIM {
            if local_pt[i] < mins[i] || local_pt[i] > maxs[i] {
                return false;
            }
        }

        true
    }
}

/// A routine computing an oriented bounding box from a set of points.
///
/// Octrees call this once per non-singleton node, always with at least three points.
pub trait ObbFitter {
    /// Fits an OBB on `pts`.
    fn fit(&self, pts: &[Point<Real>]) -> Obb;
}

/// Fits OBBs along the principal axes of the points covariance matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CovarianceObbFitter;

impl ObbFitter for CovarianceObbFitter {
    #[inline]
    fn fit(&self, pts: &[Point<Real>]) -> Obb {
        crate::utils::obb(pts)
    }
}

impl<F: Fn(&[Point<Real>]) -> Obb> ObbFitter for F {
    #[inline]
    fn fit(&self, pts: &[Point<Real>]) -> Obb {
        self(pts)
    }
}
