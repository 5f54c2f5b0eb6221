use crate::math::{Isometry, Point, Real};
use crate::partitioning::{Octree, OctreeBuildError, OctreeBuildOptions};
use crate::utils::IsometryOpt;
use std::sync::Arc;

/// A rigid body made of a point cloud.
///
/// The point cloud is partitioned once, at creation, into an [`Octree`] that is never modified
/// afterwards. The body's motion is tracked separately as a cumulative rigid transformation,
/// initially absent (which is equivalent to the identity).
///
/// The octree is reference-counted: cloning a `PointCloud` only increments a reference count, so
/// several bodies (possibly used from several threads) can share the same tree while moving
/// independently.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use octobb3d::math::{Isometry, Point, Vector};
/// use octobb3d::shape::PointCloud;
///
/// let corners: Vec<_> = (0..8)
///     .map(|i| Point::new((i & 4) as f32 / 4.0, (i & 2) as f32 / 2.0, (i & 1) as f32))
///     .collect();
/// let far_corners: Vec<_> = corners.iter().map(|pt| pt + Vector::x() * 3.0).collect();
///
/// let cube = PointCloud::new(&corners, 1.0).unwrap();
/// let mut far_cube = PointCloud::new(&far_corners, 1.0).unwrap();
/// assert!(cube.intersects(&cube));
/// assert!(!cube.intersects(&far_cube));
///
/// far_cube.update(&Isometry::translation(-3.0, 0.0, 0.0));
/// assert_eq!(far_cube.position(), Some(&Isometry::translation(-3.0, 0.0, 0.0)));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PointCloud {
    tree: Arc<Octree>,
    position: Option<Isometry<Real>>,
}

impl PointCloud {
    /// Creates a body from a point cloud, partitioned with the given split density threshold.
    pub fn new(points: &[Point<Real>], density_threshold: Real) -> Result<Self, OctreeBuildError> {
        Octree::new(points, density_threshold).map(Self::from_octree)
    }

    /// Creates a body from a point cloud, partitioned with the given options.
    pub fn with_options(
        points: &[Point<Real>],
        options: OctreeBuildOptions,
    ) -> Result<Self, OctreeBuildError> {
        Octree::with_options(points, options).map(Self::from_octree)
    }

    /// Creates a body from an already built octree.
    pub fn from_octree(tree: Octree) -> Self {
        Self::from_shared(Arc::new(tree))
    }

    /// Creates a body sharing an already built octree.
    pub fn from_shared(tree: Arc<Octree>) -> Self {
        Self {
            tree,
            position: None,
        }
    }

    /// The octree partitioning this body's points.
    #[inline]
    pub fn octree(&self) -> &Octree {
        &self.tree
    }

    /// The reference-counted octree partitioning this body's points.
    #[inline]
    pub fn shared_octree(&self) -> &Arc<Octree> {
        &self.tree
    }

    /// The cumulative motion of this body, `None` if it never moved.
    #[inline]
    pub fn position(&self) -> Option<&Isometry<Real>> {
        self.position.as_ref()
    }

    /// Applies `motion` after all the motions previously applied to this body.
    ///
    /// The cumulative transformation `T` becomes `motion * T`, or `motion` if the body never
    /// moved before.
    pub fn update(&mut self, motion: &Isometry<Real>) {
        self.position = Some(self.position.as_ref().prepend_to(motion));
    }

    /// Replaces the cumulative motion of this body.
    ///
    /// Setting `None` brings the body back to its original location.
    pub fn set_position(&mut self, position: Option<Isometry<Real>>) {
        self.position = position;
    }

    /// Tests if this body intersects `other`.
    ///
    /// This is an approximate test, see
    /// [`intersection_test_point_cloud_point_cloud`](crate::query::intersection_test_point_cloud_point_cloud).
    #[inline]
    pub fn intersects(&self, other: &PointCloud) -> bool {
        crate::query::intersection_test_point_cloud_point_cloud(self, other)
    }
}
