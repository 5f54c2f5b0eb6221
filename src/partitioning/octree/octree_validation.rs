use super::octree_frame::to_local_frame;
use super::{Octant, Octree, OctreeNodeKind};
use crate::math::{Matrix, Point, Real, DIM};
use std::collections::HashSet;

impl Octree {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if:
    /// - every node is reachable exactly once from the root,
    /// - the children of a node partition its points (no point lost or duplicated), each child
    ///   only holding points of its own octant,
    /// - a node is a leaf iff it is a singleton, its split density is below the threshold, or it
    ///   holds few enough points (a node whose points all lie in the same octant is also a leaf),
    /// - OBBs have ordered bounds and orthonormal bases,
    /// - singletons created by a split remember the `origin_center` of their parent.
    pub fn assert_well_formed(&self) {
        assert!(!self.nodes.is_empty(), "An octree always has a root.");
        assert_eq!(self.root().point_range(), 0..self.points().len());
        assert_eq!(
            self.root().upper_center(),
            None,
            "The root has no parent to take an upper center from."
        );

        let mut loop_detection = HashSet::new();
        let num_points = self.assert_well_formed_recurse(Self::ROOT, &mut loop_detection);

        assert_eq!(num_points, self.points.len());
        assert_eq!(
            loop_detection.len(),
            self.nodes.len(),
            "Some nodes are not reachable from the root."
        );
    }

    fn assert_well_formed_recurse(&self, node_id: u32, loop_detection: &mut HashSet<u32>) -> usize {
        if !loop_detection.insert(node_id) {
            panic!("Detected loop. Node {} visited twice.", node_id);
        }

        let node = self.node(node_id);
        let pts = self.node_points(node_id);
        let num_points = node.num_points();

        assert!(num_points > 0, "Node {} is empty.", node_id);
        assert_relative_eq!(
            *node.origin_center(),
            crate::utils::center(pts),
            epsilon = 1.0e-3,
            max_relative = 1.0e-3
        );

        let (obb, children) = match &node.kind {
            OctreeNodeKind::Singleton { point, .. } => {
                assert_eq!(num_points, 1, "Singleton {} must hold one point.", node_id);
                assert_eq!(point, &pts[0]);
                return 1;
            }
            OctreeNodeKind::Boxed { obb, children } => {
                assert!(num_points > 1, "Boxed node {} must hold several points.", node_id);
                (obb, children)
            }
        };

        for i in 0..DIM {
            assert!(obb.mins[i] <= obb.maxs[i], "Invalid OBB bounds on node {}.", node_id);
        }
        assert_relative_eq!(
            obb.rotation.transpose() * obb.rotation,
            Matrix::identity(),
            epsilon = 1.0e-3
        );

        let spv = node.split_density().unwrap_or(0.0);
        let options = self.options();
        let must_be_leaf =
            spv < options.density_threshold || num_points <= options.max_leaf_points;

        let Some(children) = children else {
            assert!(
                must_be_leaf || all_in_one_octant(pts, node.origin_center(), &obb.rotation),
                "Leaf {} with {} points and split density {} should have been split.",
                node_id,
                num_points,
                spv
            );
            return num_points;
        };

        assert!(!must_be_leaf, "Node {} should be a leaf.", node_id);

        let mut expected_start = node.point_range().start;
        let mut reached_points = 0;

        for octant in Octant::ALL {
            let Some(child_id) = children[octant.index()] else {
                continue;
            };
            let child = self.node(child_id);
            let child_range = child.point_range();

            assert_eq!(child_range.start, expected_start, "Children ranges must be contiguous.");
            expected_start = child_range.end;

            for pt in self.node_points(child_id) {
                let local = to_local_frame(node.origin_center(), &obb.rotation, pt);
                assert_eq!(
                    Octant::from_local_point(&local),
                    octant,
                    "Point {:?} of node {} lies in the wrong octant.",
                    pt,
                    child_id
                );
            }

            if child.is_singleton() {
                assert_eq!(child.upper_center(), Some(node.origin_center()));
            }

            reached_points += self.assert_well_formed_recurse(child_id, loop_detection);
        }

        assert_eq!(expected_start, node.point_range().end, "Children must cover their parent.");
        assert_eq!(reached_points, num_points);
        num_points
    }
}

fn all_in_one_octant(pts: &[Point<Real>], origin: &Point<Real>, basis: &Matrix<Real>) -> bool {
    let mut octants = pts
        .iter()
        .map(|pt| Octant::from_local_point(&to_local_frame(origin, basis, pt)));
    let first = octants.next();
    octants.all(|octant| Some(octant) == first)
}
