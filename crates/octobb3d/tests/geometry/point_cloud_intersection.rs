use crate::geometry::common::{box_corners, random_cloud};
use na::{Isometry3, Point3, Vector3};
use octobb3d::partitioning::OctreeBuildOptions;
use octobb3d::query;
use octobb3d::shape::PointCloud;

fn unit_cube(center: Point3<f32>) -> PointCloud {
    PointCloud::new(&box_corners(center, Vector3::repeat(0.5)), 1.0).unwrap()
}

#[test]
fn cubes_half_a_unit_apart_intersect() {
    let cube1 = unit_cube(Point3::origin());
    let cube2 = unit_cube(Point3::new(0.5, 0.0, 0.0));

    // Eight points are never split.
    assert!(cube1.octree().root().is_leaf());
    assert!(cube2.octree().root().is_leaf());

    assert!(cube1.intersects(&cube2));
    assert!(cube2.intersects(&cube1));
}

#[test]
fn cubes_three_units_apart_do_not_intersect() {
    let cube1 = unit_cube(Point3::origin());
    let cube2 = unit_cube(Point3::new(3.0, 0.0, 0.0));

    assert!(!cube1.intersects(&cube2));
    assert!(!cube2.intersects(&cube1));
    assert!(!query::intersection_test_point_cloud_point_cloud(
        &cube1, &cube2
    ));
}

#[test]
fn point_inside_and_outside_of_a_cube() {
    let cube = unit_cube(Point3::origin());
    let inside = PointCloud::new(&[Point3::new(0.1, 0.2, -0.3)], 1.0).unwrap();
    let outside = PointCloud::new(&[Point3::new(5.0, 0.0, 0.0)], 1.0).unwrap();

    assert!(inside.octree().root().is_singleton());
    assert!(inside.intersects(&cube));
    assert!(cube.intersects(&inside));
    assert!(!outside.intersects(&cube));
    assert!(!cube.intersects(&outside));
}

#[test]
fn point_against_a_moved_cube() {
    let mut cube = unit_cube(Point3::origin());
    let mut point = PointCloud::new(&[Point3::new(5.0, 0.0, 0.0)], 1.0).unwrap();

    // Move the point into the cube.
    point.update(&Isometry3::translation(-5.0, 0.2, 0.0));
    assert!(point.intersects(&cube));

    // Move the cube away, then back onto the point.
    cube.update(&Isometry3::translation(0.0, 10.0, 0.0));
    assert!(!point.intersects(&cube));
    cube.update(&Isometry3::translation(0.0, -10.0, 0.0));
    assert!(point.intersects(&cube));

    // Rotating the cube around its center keeps the point inside.
    cube.update(&Isometry3::rotation(Vector3::new(0.3, 0.5, -0.2)));
    assert!(point.intersects(&cube));
}

#[test]
fn single_points() {
    let p1 = PointCloud::new(&[Point3::new(1.0, 2.0, 3.0)], 1.0).unwrap();
    let p2 = PointCloud::new(&[Point3::new(1.0, 2.0, 3.0)], 1.0).unwrap();
    let p3 = PointCloud::new(&[Point3::new(1.0, 2.0, 4.0)], 1.0).unwrap();

    assert!(p1.intersects(&p2));
    assert!(!p1.intersects(&p3));
    assert!(!p3.intersects(&p1));
}

#[test]
fn rotated_box_against_a_point_that_never_moved() {
    // A bar along x, rotated by 90° around z so it spans the y axis.
    let mut bar = PointCloud::new(&box_corners(Point3::origin(), Vector3::new(2.0, 0.5, 0.4)), 1.0).unwrap();
    bar.update(&Isometry3::rotation(Vector3::z() * std::f32::consts::FRAC_PI_2));
    let mut point = PointCloud::new(&[Point3::new(0.0, 1.5, 0.0)], 1.0).unwrap();

    // A point without position is projected on the original axes of the bar.
    assert!(!bar.intersects(&point));
    assert!(!point.intersects(&bar));

    // Once the point has a position, the bar axes follow the bar rotation.
    point.update(&Isometry3::identity());
    assert!(bar.intersects(&point));
    assert!(point.intersects(&bar));
}

/// Two bodies made of the corners of a box, split down to one singleton per corner.
fn split_boxes(
    center2: Point3<f32>,
    half_extents2: Vector3<f32>,
) -> (PointCloud, PointCloud) {
    let options = OctreeBuildOptions::new(1.0e-6).with_max_leaf_points(1);
    let body1 = PointCloud::with_options(&box_corners(Point3::origin(), Vector3::new(3.0, 2.0, 1.0)), options).unwrap();
    let body2 = PointCloud::with_options(&box_corners(center2, half_extents2), options).unwrap();

    for body in [&body1, &body2] {
        let root = body.octree().root();
        assert_eq!(root.children().unwrap().iter().flatten().count(), 8);
    }

    (body1, body2)
}

/// Checks the descent ends on the given split singletons and returns the intersection verdict.
fn singleton_pair_verdict(
    body1: &PointCloud,
    body2: &PointCloud,
    expected1: Point3<f32>,
    expected2: Point3<f32>,
) -> bool {
    let tree1 = body1.octree();
    let tree2 = body2.octree();
    let (id1, id2) = tree1.simultaneous_descent(None, tree2, None);
    let node1 = tree1.node(id1);
    let node2 = tree2.node(id2);

    assert!(node1.is_singleton() && node2.is_singleton());
    assert_ne!(id1, 0);
    assert_ne!(id2, 0);
    assert_relative_eq!(*node1.representative_point(), expected1, epsilon = 1.0e-5);
    assert_relative_eq!(*node2.representative_point(), expected2, epsilon = 1.0e-5);
    assert_relative_eq!(*node1.upper_center().unwrap(), *tree1.root().origin_center(), epsilon = 1.0e-5);
    assert_relative_eq!(*node2.upper_center().unwrap(), *tree2.root().origin_center(), epsilon = 1.0e-5);

    body1.intersects(body2)
}

#[test]
fn split_singletons_within_the_first_parent_radius() {
    // The first body ends on its corner p1 = (3, 2, 1), with u1 = 0 and |u1 - p1|² = 14.
    // The second ends on p2 = (2.1, 1.4, 0.7): |u1 - p2|² = 6.86 <= 14, while
    // |u2 - p1|² = 3.5 > |u2 - p2|² = 0.56.
    let (body1, body2) = split_boxes(Point3::new(1.5, 1.0, 0.5), Vector3::new(0.6, 0.4, 0.2));
    assert!(singleton_pair_verdict(&body1, &body2, Point3::new(3.0, 2.0, 1.0), Point3::new(2.1, 1.4, 0.7)));
}

#[test]
fn split_singletons_within_the_second_parent_radius() {
    // p1 = (3, 2, 1), p2 = (4, -1, -0.5): |u1 - p2|² = 17.25 > |u1 - p1|² = 14, while
    // |u2 - p1|² = 50.25 <= |u2 - p2|² = 56.
    let (body1, body2) = split_boxes(Point3::new(10.0, 3.0, 1.5), Vector3::new(6.0, 4.0, 2.0));
    assert!(singleton_pair_verdict(&body1, &body2, Point3::new(3.0, 2.0, 1.0), Point3::new(4.0, -1.0, -0.5)));
}

#[test]
fn split_singletons_outside_of_both_parent_radii() {
    // p1 = (3, 2, 1), p2 = (14, -1, -0.5): |u1 - p2|² = 197.25 > 14 and
    // |u2 - p1|² = 290.25 > 56.
    let (body1, body2) = split_boxes(Point3::new(20.0, 3.0, 1.5), Vector3::new(6.0, 4.0, 2.0));
    assert!(!singleton_pair_verdict(&body1, &body2, Point3::new(3.0, 2.0, 1.0), Point3::new(14.0, -1.0, -0.5)));
}

#[test]
fn self_intersection() {
    for (seed, len) in [(10, 50), (11, 500), (12, 3000)] {
        let cloud = random_cloud(seed, len, Point3::new(1.0, -2.0, 3.0), Vector3::new(6.0, 3.0, 1.0));
        let mut body = PointCloud::new(&cloud, 1.0e-4).unwrap();
        assert!(body.intersects(&body));

        body.update(&Isometry3::new(
            Vector3::new(-20.0, 4.0, 1.0),
            Vector3::new(0.2, 1.1, -0.4),
        ));
        assert!(body.intersects(&body));

        let clone = body.clone();
        assert!(body.intersects(&clone));
    }
}

#[test]
fn disjoint_far_bodies() {
    for (seed, len) in [(20, 80), (21, 1000), (22, 4000)] {
        let half_extents = Vector3::new(5.0, 2.0, 1.0);
        let cloud1 = random_cloud(seed, len, Point3::origin(), half_extents);
        let cloud2 = random_cloud(seed + 100, len, Point3::new(0.0, 30.0, 0.0), half_extents);
        let body1 = PointCloud::new(&cloud1, 1.0e-4).unwrap();
        let body2 = PointCloud::new(&cloud2, 1.0e-4).unwrap();

        assert!(!body1.intersects(&body2));
        assert!(!body2.intersects(&body1));
    }
}

#[test]
fn overlapping_small_bodies() {
    let cloud1 = random_cloud(30, 60, Point3::origin(), Vector3::new(2.0, 1.0, 1.0));
    let cloud2 = random_cloud(31, 60, Point3::new(1.0, 0.5, 0.0), Vector3::new(2.0, 1.0, 1.0));
    let body1 = PointCloud::new(&cloud1, 1.0e-4).unwrap();
    let body2 = PointCloud::new(&cloud2, 1.0e-4).unwrap();

    assert!(body1.intersects(&body2));
    assert!(body2.intersects(&body1));
}

#[test]
fn boxed_leaves_compare_original_centers() {
    // Two boxed leaves are compared through the centers of the original clouds: moving a body
    // without splitting its octree does not change the verdict.
    let body1 = unit_cube(Point3::origin());
    let mut body2 = unit_cube(Point3::origin());
    body2.update(&Isometry3::translation(100.0, 0.0, 0.0));

    assert!(body1.intersects(&body2));
}
