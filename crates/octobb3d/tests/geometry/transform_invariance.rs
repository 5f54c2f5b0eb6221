use crate::geometry::common::{box_corners, random_cloud};
use na::{Isometry3, Point3, Vector3};
use octobb3d::shape::PointCloud;
use std::sync::Arc;

fn motions() -> Vec<Isometry3<f32>> {
    vec![
        Isometry3::translation(10.0, -3.0, 2.0),
        Isometry3::rotation(Vector3::new(0.0, 0.0, 1.3)),
        Isometry3::new(Vector3::new(-7.0, 2.0, 40.0), Vector3::new(0.5, -0.8, 0.2)),
    ]
}

#[test]
fn moving_both_bodies_identically_preserves_the_verdict() {
    let half_extents = Vector3::new(5.0, 2.0, 1.0);
    let scenarios = [
        (Point3::new(2.0, 1.0, 0.0), true),
        (Point3::new(0.0, 40.0, 0.0), false),
        (Point3::new(-35.0, 0.0, 10.0), false),
    ];

    for (k, (offset, overlapping)) in scenarios.into_iter().enumerate() {
        let seed = 50 + 2 * k as u64;
        let cloud1 = random_cloud(seed, 1500, Point3::origin(), half_extents);
        let cloud2 = random_cloud(seed + 1, 1500, offset, half_extents);
        let body1 = PointCloud::new(&cloud1, 1.0e-4).unwrap();
        let body2 = PointCloud::new(&cloud2, 1.0e-4).unwrap();
        let reference12 = body1.intersects(&body2);
        let reference21 = body2.intersects(&body1);

        if !overlapping {
            assert!(!reference12);
            assert!(!reference21);
        }

        for motion in motions() {
            let mut moved1 = body1.clone();
            let mut moved2 = body2.clone();
            moved1.update(&motion);
            moved2.update(&motion);

            assert_eq!(moved1.intersects(&moved2), reference12);
            assert_eq!(moved2.intersects(&moved1), reference21);
        }
    }
}

#[test]
fn updates_are_composed() {
    let m1 = Isometry3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.2, 0.0, 0.1));
    let m2 = Isometry3::new(Vector3::new(-4.0, 0.0, 1.0), Vector3::new(0.0, 0.7, 0.0));

    let mut cube = PointCloud::new(&box_corners(Point3::origin(), Vector3::repeat(0.5)), 1.0).unwrap();
    cube.update(&m1);
    cube.update(&m2);

    let position = cube.position().unwrap();
    assert_relative_eq!(*position, m2 * m1, epsilon = 1.0e-5);

    // A point inside of the cube follows the composed motion.
    let mut point = PointCloud::new(&[m2 * (m1 * Point3::new(0.1, 0.1, -0.2))], 1.0).unwrap();
    assert!(point.intersects(&cube));
    point.update(&Isometry3::translation(0.0, 50.0, 0.0));
    assert!(!point.intersects(&cube));
}

#[test]
fn bodies_sharing_an_octree() {
    let cloud = random_cloud(70, 800, Point3::origin(), Vector3::new(3.0, 3.0, 3.0));
    let body1 = PointCloud::new(&cloud, 1.0e-4).unwrap();
    let mut body2 = PointCloud::from_shared(body1.shared_octree().clone());
    assert!(Arc::ptr_eq(body1.shared_octree(), body2.shared_octree()));

    // Same tree, same position.
    assert!(body1.intersects(&body2));

    // Updating one body leaves the other one and the shared tree untouched.
    body2.update(&Isometry3::translation(1.0, 0.0, 0.0));
    assert!(body1.position().is_none());
    assert_eq!(body1.octree().num_points(), 800);
}
