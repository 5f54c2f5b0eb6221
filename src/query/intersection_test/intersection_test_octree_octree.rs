use crate::math::{Isometry, Point, Real, DIM};
use crate::partitioning::{Octree, OctreeNode, OctreeNodeKind};
use crate::shape::PointCloud;
use crate::utils::IsometryOpt;

/// Intersection test between two point-cloud bodies.
///
/// See [`intersection_test_octree_octree`] for the details of this approximate test.
#[inline]
pub fn intersection_test_point_cloud_point_cloud(
    body1: &PointCloud,
    body2: &PointCloud,
) -> bool {
    intersection_test_octree_octree(
        body1.position(),
        body1.octree(),
        body2.position(),
        body2.octree(),
    )
}

/// Approximate intersection test between two octrees moved by `pos1` and `pos2`.
///
/// Both trees are descended simultaneously (see [`Octree::simultaneous_descent`]), then the pair
/// of nodes the descent stopped at is tested:
/// - two singletons intersect if either point lies within the distance between its sibling-level
///   parent center and the other point,
/// - a singleton and a boxed node intersect if the point lies inside the OBB. The point is
///   expressed relative to the boxed node's `origin_center`, so the OBB bounds are offset by that
///   center projected on the OBB axes, see
///   [`Obb::bounds_relative_to`](crate::bounding_volume::Obb::bounds_relative_to). This is the
///   offset by the fit centroid for nodes with at least three points.
/// - two boxed nodes intersect unless the distance between their original (untransformed)
///   centers exceeds, on some axis, the largest half-extent sum of the two OBBs.
///
/// This is a coarse test. In particular, the last case ignores the motion of both
/// bodies.
pub fn intersection_test_octree_octree(
    pos1: Option<&Isometry<Real>>,
    tree1: &Octree,
    pos2: Option<&Isometry<Real>>,
    tree2: &Octree,
) -> bool {
    let (id1, id2) = tree1.simultaneous_descent(pos1, tree2, pos2);
    let node1 = tree1.node(id1);
    let node2 = tree2.node(id2);

    match (node1.kind(), node2.kind()) {
        (OctreeNodeKind::Singleton { .. }, OctreeNodeKind::Singleton { .. }) => {
            log::trace!("Octree leaf test: singleton {} vs. singleton {}.", id1, id2);
            intersection_test_singleton_singleton(pos1, node1, pos2, node2)
        }
        (OctreeNodeKind::Singleton { point, .. }, OctreeNodeKind::Boxed { .. }) => {
            log::trace!("Octree leaf test: singleton {} vs. boxed {}.", id1, id2);
            intersection_test_boxed_point(pos2, node2, pos1, point)
        }
        (OctreeNodeKind::Boxed { .. }, OctreeNodeKind::Singleton { point, .. }) => {
            log::trace!("Octree leaf test: boxed {} vs. singleton {}.", id1, id2);
            intersection_test_boxed_point(pos1, node1, pos2, point)
        }
        (OctreeNodeKind::Boxed { .. }, OctreeNodeKind::Boxed { .. }) => {
            log::trace!("Octree leaf test: boxed {} vs. boxed {}.", id1, id2);
            intersection_test_boxed_boxed(node1, node2)
        }
    }
}

fn intersection_test_singleton_singleton(
    pos1: Option<&Isometry<Real>>,
    node1: &OctreeNode,
    pos2: Option<&Isometry<Real>>,
    node2: &OctreeNode,
) -> bool {
    let pt1 = pos1.transform_point(node1.representative_point());
    let pt2 = pos2.transform_point(node2.representative_point());
    // A singleton root has no parent, its own point stands for it.
    let upper1 = pos1.transform_point(node1.upper_center().unwrap_or(node1.representative_point()));
    let upper2 = pos2.transform_point(node2.upper_center().unwrap_or(node2.representative_point()));

    let dist1 = na::distance_squared(&upper1, &pt2);
    let limit1 = na::distance_squared(&upper1, &pt1);
    let dist2 = na::distance_squared(&upper2, &pt1);
    let limit2 = na::distance_squared(&upper2, &pt2);

    dist1 <= limit1 || dist2 <= limit2
}

fn intersection_test_boxed_point(
    box_pos: Option<&Isometry<Real>>,
    boxed: &OctreeNode,
    pt_pos: Option<&Isometry<Real>>,
    pt: &Point<Real>,
) -> bool {
    let (Some(obb), Some(local_pt)) = (boxed.obb(), boxed.to_local(pt, box_pos, pt_pos)) else {
        return false;
    };

    obb.contains_local_point_relative_to(boxed.origin_center(), &local_pt)
}

fn intersection_test_boxed_boxed(node1: &OctreeNode, node2: &OctreeNode) -> bool {
    let (Some(obb1), Some(obb2)) = (node1.obb(), node2.obb()) else {
        return false;
    };

    let dist = (node1.origin_center() - node2.origin_center()).abs();
    let limit = ((obb1.extents() + obb2.extents()) / 2.0).max();

    (0..DIM).all(|i| dist[i] <= limit)
}
