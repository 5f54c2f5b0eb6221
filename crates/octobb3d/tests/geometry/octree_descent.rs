use crate::geometry::common::{box_corners, random_cloud};
use na::{Isometry3, Point3, Vector3};
use octobb3d::partitioning::{Octree, OctreeBuildOptions};

#[test]
fn self_descent_ends_on_the_same_node() {
    let pos = Isometry3::new(Vector3::new(3.0, -1.0, 8.0), Vector3::new(0.4, 0.1, -0.6));

    for seed in 0..5 {
        let pts = random_cloud(seed, 2000, Point3::new(0.0, 1.0, 2.0), Vector3::new(10.0, 4.0, 2.0));
        let options = OctreeBuildOptions::new(1.0e-5).with_max_leaf_points(8);
        let tree = Octree::with_options(&pts, options).unwrap();
        tree.assert_well_formed();

        let (id1, id2) = tree.simultaneous_descent(None, &tree, None);
        assert_eq!(id1, id2);
        assert_ne!(id1, Octree::ROOT);

        let (id1, id2) = tree.simultaneous_descent(Some(&pos), &tree, Some(&pos));
        assert_eq!(id1, id2);
    }
}

#[test]
fn leaf_roots_are_never_descended() {
    let pts = random_cloud(42, 500, Point3::origin(), Vector3::repeat(3.0));
    let tree = Octree::new(&pts, 1.0e-5).unwrap();
    let single = Octree::new(&[Point3::new(0.5, 0.5, 0.5)], 1.0).unwrap();
    let cube = Octree::new(&box_corners(Point3::origin(), Vector3::repeat(1.0)), 1.0).unwrap();
    assert!(!tree.root().is_leaf());

    for leaf in [&single, &cube] {
        let (id1, _) = leaf.simultaneous_descent(None, &tree, None);
        assert_eq!(id1, Octree::ROOT);
        let (_, id2) = tree.simultaneous_descent(None, leaf, None);
        assert_eq!(id2, Octree::ROOT);
    }
}
