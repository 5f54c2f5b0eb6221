use na::{Point3, Vector3};

/// The eight corners of a box.
pub fn box_corners(center: Point3<f32>, half_extents: Vector3<f32>) -> Vec<Point3<f32>> {
    (0..8)
        .map(|i| {
            let signs = Vector3::new(
                if i & 4 != 0 { 1.0 } else { -1.0 },
                if i & 2 != 0 { 1.0 } else { -1.0 },
                if i & 1 != 0 { 1.0 } else { -1.0 },
            );
            center + half_extents.component_mul(&signs)
        })
        .collect()
}

/// Uniformly distributed points inside of a box.
pub fn random_cloud(
    seed: u64,
    len: usize,
    center: Point3<f32>,
    half_extents: Vector3<f32>,
) -> Vec<Point3<f32>> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..len)
        .map(|_| center + Vector3::from_fn(|i, _| (rng.rand_float() * 2.0 - 1.0) * half_extents[i]))
        .collect()
}
