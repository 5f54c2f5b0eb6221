use super::Octant;
use crate::bounding_volume::Obb;
use crate::math::{Point, Real, NUM_OCTANTS};
use core::ops::Range;

/// The default maximum number of points a node may hold without being split.
pub const DEFAULT_MAX_LEAF_POINTS: usize = 100;

/// Parameters of the octree construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OctreeBuildOptions {
    /// Nodes with a split density (OBB volume divided by point count) below this
    /// threshold are not split.
    ///
    /// Must be finite and strictly positive.
    pub density_threshold: Real,
    /// Nodes with at most this many points are not split.
    pub max_leaf_points: usize,
}

impl OctreeBuildOptions {
    /// Build options with the given density threshold and [`DEFAULT_MAX_LEAF_POINTS`].
    pub fn new(density_threshold: Real) -> Self {
        Self {
            density_threshold,
            max_leaf_points: DEFAULT_MAX_LEAF_POINTS,
        }
    }

    /// Sets the maximum number of points a node may hold without being split.
    pub fn with_max_leaf_points(mut self, max_leaf_points: usize) -> Self {
        self.max_leaf_points = max_leaf_points;
        self
    }
}

/// Error indicating the input of an octree construction is invalid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum OctreeBuildError {
    /// An octree must contain at least one point.
    #[error("an octree must contain at least one point.")]
    EmptyPointCloud,
    /// The density threshold is not a strictly positive finite number.
    #[error("the density threshold {0} must be finite and strictly positive.")]
    InvalidDensityThreshold(Real),
    /// A point has a NaN or infinite coordinate.
    #[error("the point {0} has a non-finite coordinate.")]
    NonFinitePoint(u32),
    /// The cloud holds more than [`Octree::MAX_POINTS`] points.
    #[error("an octree cannot contain {0} points, the maximum is u32::MAX / 2.")]
    TooManyPoints(usize),
}

/// The fixed-size array of the optional children of an octree node, indexed by [`Octant`].
pub type OctreeChildren = [Option<u32>; NUM_OCTANTS];

/// The part of an octree node that depends on its number of points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum OctreeNodeKind {
    /// A node holding exactly one point. It has no bounding box and no children.
    Singleton {
        /// The only point of this node.
        point: Point<Real>,
        /// The `origin_center` of the node this singleton was split from, if any.
        upper_center: Option<Point<Real>>,
    },
    /// A node holding at least two points, bounded by an OBB.
    Boxed {
        /// The OBB fitted on the points of this node.
        obb: Obb,
        /// The children of this node, or `None` if it is a leaf.
        children: Option<OctreeChildren>,
    },
}

/// A node of an [`Octree`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
    pub(super) points: Range<u32>,
    pub(super) origin_center: Point<Real>,
    pub(super) kind: OctreeNodeKind,
}

impl OctreeNode {
    /// The pivot of the local frame of this node: the per-axis mean of its points.
    #[inline]
    pub fn origin_center(&self) -> &Point<Real> {
        &self.origin_center
    }

    /// The singleton/boxed specific data of this node.
    #[inline]
    pub fn kind(&self) -> &OctreeNodeKind {
        &self.kind
    }

    /// Does this node hold exactly one point?
    #[inline]
    pub fn is_singleton(&self) -> bool {
        matches!(self.kind, OctreeNodeKind::Singleton { .. })
    }

    /// Is this node a leaf (singleton, or boxed without children)?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children().is_none()
    }

    /// The OBB of this node, `None` for singletons.
    #[inline]
    pub fn obb(&self) -> Option<&Obb> {
        match &self.kind {
            OctreeNodeKind::Singleton { .. } => None,
            OctreeNodeKind::Boxed { obb, .. } => Some(obb),
        }
    }

    /// The children array of this node, `None` for leaves.
    #[inline]
    pub fn children(&self) -> Option<&OctreeChildren> {
        match &self.kind {
            OctreeNodeKind::Singleton { .. } => None,
            OctreeNodeKind::Boxed { children, .. } => children.as_ref(),
        }
    }

    /// The index of the child covering the given octant, if there is one.
    #[inline]
    pub fn child(&self, octant: Octant) -> Option<u32> {
        self.children().and_then(|children| children[octant.index()])
    }

    /// The `origin_center` of the parent this singleton was split from.
    ///
    /// Always `None` for boxed nodes and for a singleton root.
    #[inline]
    pub fn upper_center(&self) -> Option<&Point<Real>> {
        match &self.kind {
            OctreeNodeKind::Singleton { upper_center, .. } => upper_center.as_ref(),
            OctreeNodeKind::Boxed { .. } => None,
        }
    }

    /// The number of points held by this node.
    #[inline]
    pub fn num_points(&self) -> usize {
        (self.points.end - self.points.start) as usize
    }

    /// The range of this node's points in [`Octree::points`].
    #[inline]
    pub fn point_range(&self) -> Range<usize> {
        self.points.start as usize..self.points.end as usize
    }

    /// The split density of this node: the volume of its OBB divided by its number of points.
    ///
    /// `None` for singletons.
    #[inline]
    pub fn split_density(&self) -> Option<Real> {
        self.obb()
            .map(|obb| obb.volume() / self.num_points() as Real)
    }
}

/// An octree whose nodes are bounded by oriented bounding boxes.
///
/// The nodes are stored in an arena, the root being at index 0. The points are stored in a
/// single buffer, reordered so that each node owns a contiguous range of it: the ranges of
/// siblings are disjoint, and the range of an internal node is the concatenation of the ranges of
/// its children (in octant order).
///
/// The tree is immutable once built.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Octree {
    pub(super) nodes: Vec<OctreeNode>,
    pub(super) points: Vec<Point<Real>>,
    pub(super) options: OctreeBuildOptions,
}

impl Octree {
    /// The index of the root node.
    pub const ROOT: u32 = 0;

    /// The maximum number of points of an octree.
    ///
    /// Points and nodes are indexed with `u32`.
    pub const MAX_POINTS: u32 = u32::MAX / 2;

    /// The root node of this tree.
    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.nodes[Self::ROOT as usize]
    }

    /// The node at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn node(&self, id: u32) -> &OctreeNode {
        &self.nodes[id as usize]
    }

    /// All the nodes of this tree.
    #[inline]
    pub fn nodes(&self) -> &[OctreeNode] {
        &self.nodes
    }

    /// The number of nodes of this tree.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// All the points of this tree, ordered so each node owns a contiguous range.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of points of this tree.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The points owned by the node at index `id`.
    #[inline]
    pub fn node_points(&self, id: u32) -> &[Point<Real>] {
        &self.points[self.node(id).point_range()]
    }

    /// The options this tree was built with.
    #[inline]
    pub fn options(&self) -> &OctreeBuildOptions {
        &self.options
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// The depth of this tree (1 if the root is a leaf).
    pub fn depth(&self) -> usize {
        self.subtree_depth(Self::ROOT)
    }

    fn subtree_depth(&self, id: u32) -> usize {
        let children_depth = self
            .node(id)
            .children()
            .map(|children| {
                children
                    .iter()
                    .flatten()
                    .map(|child| self.subtree_depth(*child))
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0);
        children_depth + 1
    }
}
