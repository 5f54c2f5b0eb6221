use super::octree_frame::to_local_frame;
use super::{Octant, Octree, OctreeBuildError, OctreeBuildOptions, OctreeNode, OctreeNodeKind};
use crate::bounding_volume::{CovarianceObbFitter, Obb, ObbFitter};
use crate::math::{Matrix, Point, Real, NUM_OCTANTS};
use core::ops::Range;

impl Octree {
    /// Builds an octree from a point cloud, splitting nodes until their split density gets below
    /// `density_threshold` or until they hold at most [`DEFAULT_MAX_LEAF_POINTS`] points.
    ///
    /// OBBs are fitted with the [`CovarianceObbFitter`]. The cloud must hold at most
    /// [`Octree::MAX_POINTS`] points.
    ///
    /// [`DEFAULT_MAX_LEAF_POINTS`]: super::DEFAULT_MAX_LEAF_POINTS
    pub fn new(points: &[Point<Real>], density_threshold: Real) -> Result<Self, OctreeBuildError> {
        Self::with_options(points, OctreeBuildOptions::new(density_threshold))
    }

    /// Builds an octree from a point cloud with the given options.
    ///
    /// OBBs are fitted with the [`CovarianceObbFitter`].
    pub fn with_options(
        points: &[Point<Real>],
        options: OctreeBuildOptions,
    ) -> Result<Self, OctreeBuildError> {
        Self::with_fitter(points, options, &CovarianceObbFitter)
    }

    /// Builds an octree from a point cloud with the given options, fitting OBBs with `fitter`.
    ///
    /// The fitter is always given at least three points: a node with exactly two points is
    /// fitted on these points plus a third one equal to their coordinate-wise sum.
    pub fn with_fitter<F: ObbFitter + ?Sized>(
        points: &[Point<Real>],
        options: OctreeBuildOptions,
        fitter: &F,
    ) -> Result<Self, OctreeBuildError> {
        if points.is_empty() {
            return Err(OctreeBuildError::EmptyPointCloud);
        }

        let num_points = checked_num_points(points.len())?;

        if !options.density_threshold.is_finite() || options.density_threshold <= 0.0 {
            return Err(OctreeBuildError::InvalidDensityThreshold(
                options.density_threshold,
            ));
        }

        if let Some(i) = points
            .iter()
            .position(|pt| pt.iter().any(|e| !e.is_finite()))
        {
            // `i < num_points <= Octree::MAX_POINTS`.
            return Err(OctreeBuildError::NonFinitePoint(i as u32));
        }

        let mut tree = Octree {
            nodes: Vec::new(),
            points: points.to_vec(),
            options,
        };
        let mut workspace = Vec::with_capacity(points.len());
        let root = tree.build_node(0..num_points, None, fitter, &mut workspace);
        debug_assert_eq!(root, Self::ROOT);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Built octree from {} points: {} nodes, {} leaves, depth {}.",
                tree.num_points(),
                tree.num_nodes(),
                tree.leaf_count(),
                tree.depth()
            );
        }

        Ok(tree)
    }

    fn build_node<F: ObbFitter + ?Sized>(
        &mut self,
        range: Range<u32>,
        upper_center: Option<Point<Real>>,
        fitter: &F,
        workspace: &mut Vec<(Octant, Point<Real>)>,
    ) -> u32 {
        let id = self.nodes.len() as u32;
        let pts = &self.points[range.start as usize..range.end as usize];
        let origin_center = crate::utils::center(pts);

        if let [point] = pts {
            self.nodes.push(OctreeNode {
                points: range,
                origin_center,
                kind: OctreeNodeKind::Singleton {
                    point: *point,
                    upper_center,
                },
            });
            return id;
        }

        let obb = fit_node_obb(pts, fitter);
        let num_points = pts.len();
        let spv = obb.volume() / num_points as Real;

        self.nodes.push(OctreeNode {
            points: range.clone(),
            origin_center,
            kind: OctreeNodeKind::Boxed {
                obb,
                children: None,
            },
        });

        if spv < self.options.density_threshold || num_points <= self.options.max_leaf_points {
            return id;
        }

        let groups = self.partition_by_octant(range, &origin_center, &obb.rotation, workspace);

        if groups.iter().any(|group| group.len() == num_points) {
            // All the points lie in the same octant, splitting again would not make progress.
            log::debug!(
                "Octree node {} with {} points and split density {} cannot be split.",
                id,
                num_points,
                spv
            );
            return id;
        }

        let mut children = [None; NUM_OCTANTS];

        for octant in Octant::ALL {
            let group = groups[octant.index()].clone();
            if group.is_empty() {
                continue;
            }

            let child_upper_center = (group.len() == 1).then_some(origin_center);
            children[octant.index()] =
                Some(self.build_node(group, child_upper_center, fitter, workspace));
        }

        if let OctreeNodeKind::Boxed {
            children: node_children,
            ..
        } = &mut self.nodes[id as usize].kind
        {
            *node_children = Some(children);
        }

        id
    }

    /// Reorders the points in `range` so they are grouped by octant (stable within each group)
    /// and returns the sub-range of each group.
    fn partition_by_octant(
        &mut self,
        range: Range<u32>,
        origin: &Point<Real>,
        basis: &Matrix<Real>,
        workspace: &mut Vec<(Octant, Point<Real>)>,
    ) -> [Range<u32>; NUM_OCTANTS] {
        workspace.clear();
        workspace.extend(
            self.points[range.start as usize..range.end as usize]
                .iter()
                .map(|pt| {
                    let local = to_local_frame(origin, basis, pt);
                    (Octant::from_local_point(&local), *pt)
                }),
        );

        let mut counts = [0u32; NUM_OCTANTS];
        for (octant, _) in workspace.iter() {
            counts[octant.index()] += 1;
        }

        let mut groups: [Range<u32>; NUM_OCTANTS] = Default::default();
        let mut start = range.start;
        for (group, count) in groups.iter_mut().zip(counts.iter()) {
            *group = start..start + count;
            start += count;
        }

        let mut cursors = groups.clone().map(|group| group.start);
        for (octant, pt) in workspace.iter() {
            let cursor = &mut cursors[octant.index()];
            self.points[*cursor as usize] = *pt;
            *cursor += 1;
        }

        groups
    }
}

/// The number of points of a cloud, as the `u32` the node ranges are expressed with.
///
/// A tree over `n` points has at most `2n - 1` nodes, so node indices fit in a `u32` as long as
/// `n <= MAX_POINTS`.
fn checked_num_points(len: usize) -> Result<u32, OctreeBuildError> {
    u32::try_from(len)
        .ok()
        .filter(|n| *n <= Octree::MAX_POINTS)
        .ok_or(OctreeBuildError::TooManyPoints(len))
}

/// Fits the OBB of a node with at least two points.
///
/// Two points are not enough for the fitter, so their coordinate-wise sum is added to the fitted
/// set.
fn fit_node_obb<F: ObbFitter + ?Sized>(pts: &[Point<Real>], fitter: &F) -> Obb {
    if let [a, b] = pts {
        fitter.fit(&[*a, *b, *a + b.coords])
    } else {
        fitter.fit(pts)
    }
}
