use super::{Octant, OctreeNode, OctreeNodeKind};
use crate::math::{Isometry, Matrix, Point, Real};
use crate::utils::IsometryOpt;

/// Coordinates of `pt` along the columns of `basis`, relative to `origin`.
#[inline]
pub(crate) fn to_local_frame(
    origin: &Point<Real>,
    basis: &Matrix<Real>,
    pt: &Point<Real>,
) -> Point<Real> {
    Point::from(basis.tr_mul(&(pt - origin)))
}

impl OctreeNode {
    /// The point standing for this node when another tree descends toward it.
    ///
    /// This is the sole point of a singleton, and the `origin_center` of a boxed node.
    #[inline]
    pub fn representative_point(&self) -> &Point<Real> {
        match &self.kind {
            OctreeNodeKind::Singleton { point, .. } => point,
            OctreeNodeKind::Boxed { .. } => &self.origin_center,
        }
    }

    /// Expresses `pt` in the local frame of this node.
    ///
    /// The local frame is centered on `origin_center` and its axes are the columns of the node's
    /// OBB rotation. `self_pos` is the position of the body this node belongs to, and `other_pos`
    /// the position of the body `pt` belongs to; `None` stands for the identity.
    ///
    /// The origin always follows `self_pos`. The axes are rotated by `self_pos` only when
    /// `other_pos` is given: a point of a body that never moved is projected on the original
    /// axes of the node.
    ///
    /// Returns `None` for singletons, which have no local frame.
    pub fn to_local(
        &self,
        pt: &Point<Real>,
        self_pos: Option<&Isometry<Real>>,
        other_pos: Option<&Isometry<Real>>,
    ) -> Option<Point<Real>> {
        let obb = self.obb()?;
        let world_pt = other_pos.transform_point(pt);
        let world_origin = self_pos.transform_point(&self.origin_center);
        let basis = if other_pos.is_some() {
            self_pos.transform_basis(&obb.rotation)
        } else {
            obb.rotation
        };
        Some(to_local_frame(&world_origin, &basis, &world_pt))
    }

    /// The octant of this node's local frame that contains `pt`.
    ///
    /// See [`Self::to_local`] for the meaning of `self_pos` and `other_pos`. Returns `None`
    /// for singletons.
    #[inline]
    pub fn corner_for(
        &self,
        pt: &Point<Real>,
        self_pos: Option<&Isometry<Real>>,
        other_pos: Option<&Isometry<Real>>,
    ) -> Option<Octant> {
        self.to_local(pt, self_pos, other_pos)
            .map(|local| Octant::from_local_point(&local))
    }
}
