use polyhull2d::na::{self, Point2};
use polyhull2d::math::Real;
use polyhull2d::transformation::weld_points;

fn random_points(seed: u64, count: usize) -> Vec<Point2<Real>> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| Point2::new(rng.rand_float() as Real, rng.rand_float() as Real))
        .collect()
}

#[test]
fn weld_is_idempotent() {
    for seed in 0..20 {
        let pts = random_points(seed, 60);
        let threshold_sq = 0.05 * 0.05;
        let welded = weld_points(&pts, threshold_sq);
        assert!(welded.len() < pts.len());
        assert_eq!(weld_points(&welded, threshold_sq), welded);
    }
}

#[test]
fn welded_points_are_far_apart() {
    let pts = random_points(42, 100);
    let threshold_sq = 0.1 * 0.1;
    let welded = weld_points(&pts, threshold_sq);

    for (i, a) in welded.iter().enumerate() {
        for b in &welded[i + 1..] {
            assert!(na::distance_squared(a, b) >= threshold_sq);
        }
    }

    // Every input point has a kept point nearby.
    for pt in &pts {
        assert!(welded
            .iter()
            .any(|kept| na::distance_squared(pt, kept) < threshold_sq || kept == pt));
    }
}
