//! Cross-module checks: both searches against each other and against an
//! independent scan, on fixed scenarios, seeded clouds and proptest inputs.

use super::rand::{draw_cloud, CloudCfg, ReplayToken};
use super::{distance, sorted_by, Axis, ClosestPair, Point2};
use crate::api::{closest_pair, closest_pair_brute_force};
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use nalgebra::vector;
use proptest::prelude::*;

/// Minimum over all pairs, written independently of `brute::search`.
fn true_min(points: &[Point2]) -> f64 {
    let mut best = f64::INFINITY;
    for i in 0..points.len() {
        for j in 0..points.len() {
            if i != j {
                best = best.min(distance(points[i], points[j]));
            }
        }
    }
    best
}

fn assert_consistent(points: &[Point2], cp: &ClosestPair) {
    assert!(points.contains(&cp.a) && points.contains(&cp.b));
    assert_eq!(cp.distance, distance(cp.a, cp.b));
}

#[test]
fn scenario_three_points() {
    let pts = [vector![0.0, 0.0], vector![3.0, 4.0], vector![1.0, 1.0]];
    let dc = closest_pair(&pts).unwrap();
    let bf = closest_pair_brute_force(&pts).unwrap();
    assert!((dc.distance - 1.4142).abs() < 1e-4);
    assert!(dc.is_pair_of(vector![0.0, 0.0], vector![1.0, 1.0]));
    assert_eq!(dc.distance, bf.distance);
}

#[test]
fn scenario_diagonal_tie_keeps_first() {
    let pts = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    for cp in [
        closest_pair(&pts).unwrap(),
        closest_pair_brute_force(&pts).unwrap(),
    ] {
        assert!((cp.distance - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(cp.pair(), (vector![0.0, 0.0], vector![1.0, 1.0]));
    }
}

#[test]
fn scenario_duplicate_points() {
    let pts = [vector![5.0, 5.0], vector![5.0, 5.0], vector![10.0, 10.0]];
    for cp in [
        closest_pair(&pts).unwrap(),
        closest_pair_brute_force(&pts).unwrap(),
    ] {
        assert_eq!(cp.distance, 0.0);
        assert!(cp.is_pair_of(vector![5.0, 5.0], vector![5.0, 5.0]));
    }
}

#[test]
fn scenario_four_collinear() {
    let pts: Vec<Point2> = (0..4).map(|i| vector![i as f64, 0.0]).collect();
    let dc = closest_pair(&pts).unwrap();
    let bf = closest_pair_brute_force(&pts).unwrap();
    assert_eq!(dc.distance, 1.0);
    assert_eq!(bf.distance, 1.0);
    assert_eq!((dc.a - dc.b).norm(), 1.0);
}

#[test]
fn randomized_500_agrees_with_oracle() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let pts: Vec<Point2> = (0..500)
            .map(|_| vector![rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)])
            .collect();
        let dc = closest_pair(&pts).unwrap();
        let bf = closest_pair_brute_force(&pts).unwrap();
        let truth = true_min(&pts);
        assert_eq!(dc.distance, bf.distance);
        assert_eq!(dc.distance, truth);
        assert!(bf.distance >= truth);
        assert_consistent(&pts, &dc);
        assert_consistent(&pts, &bf);
    }
}

#[test]
fn integer_grids_with_many_ties() {
    let cfg = CloudCfg {
        count: 300,
        lo: 0.0,
        hi: 25.0,
        integer: true,
    };
    for index in 0..20 {
        let pts = draw_cloud(cfg, ReplayToken { seed: 7, index });
        let dc = closest_pair(&pts).unwrap();
        let bf = closest_pair_brute_force(&pts).unwrap();
        assert_eq!(dc.distance, bf.distance);
        assert_consistent(&pts, &dc);
    }
}

#[test]
fn sparse_integer_clouds_agree() {
    let cfg = CloudCfg {
        count: 400,
        ..CloudCfg::default()
    };
    for index in 0..10 {
        let pts = draw_cloud(cfg, ReplayToken { seed: 11, index });
        assert_eq!(
            closest_pair(&pts).unwrap().distance,
            closest_pair_brute_force(&pts).unwrap().distance
        );
    }
}

#[test]
fn injected_duplicate_gives_zero() {
    let cfg = CloudCfg {
        count: 200,
        integer: false,
        ..CloudCfg::default()
    };
    let mut pts = draw_cloud(cfg, ReplayToken { seed: 3, index: 0 });
    pts.push(pts[117]);
    assert_eq!(closest_pair(&pts).unwrap().distance, 0.0);
    assert_eq!(closest_pair_brute_force(&pts).unwrap().distance, 0.0);
}

#[test]
fn few_distinct_columns() {
    // Many points share each x, so most splits fall inside a column.
    let mut rng = StdRng::seed_from_u64(5);
    let pts: Vec<Point2> = (0..240)
        .map(|_| vector![rng.gen_range(0..3) as f64 * 10.0, rng.gen_range(0.0..1000.0)])
        .collect();
    let dc = closest_pair(&pts).unwrap();
    assert_eq!(dc.distance, true_min(&pts));
}

#[test]
fn far_apart_and_nearly_equal_points() {
    let pts = [
        vector![1e300, 1e300],
        vector![-1e300, -1e300],
        vector![0.0, 0.0],
        vector![0.0, 1e-300],
    ];
    let dc = closest_pair(&pts).unwrap();
    assert_eq!(dc.distance, 1e-300);
    assert_eq!(dc.distance, closest_pair_brute_force(&pts).unwrap().distance);
}

#[test]
fn distance_properties() {
    let p = vector![1.5, -2.0];
    let q = vector![-4.0, 7.25];
    assert_eq!(distance(p, q), distance(q, p));
    assert!(distance(p, q) > 0.0);
    assert_eq!(distance(p, p), 0.0);
}

/// Coordinates from subnormal-adjacent to near-overflow magnitudes.
fn coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e-300f64..1e-300,
        -1.0f64..1.0,
        -1e6f64..1e6,
        -1e300f64..1e300,
    ]
}

fn grid_points() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-40i32..40, -40i32..40), 2..150)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x as f64, y as f64]).collect())
}

fn float_points() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 2..150)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
}

proptest! {
    #[test]
    fn agreement_on_grids(pts in grid_points()) {
        let dc = closest_pair(&pts).unwrap();
        let bf = closest_pair_brute_force(&pts).unwrap();
        prop_assert_eq!(dc.distance, bf.distance);
        prop_assert_eq!(dc.distance, true_min(&pts));
        prop_assert_eq!(dc.distance, distance(dc.a, dc.b));
    }

    #[test]
    fn agreement_on_floats(pts in float_points()) {
        let dc = closest_pair(&pts).unwrap();
        let bf = closest_pair_brute_force(&pts).unwrap();
        prop_assert_eq!(dc.distance, bf.distance);
        prop_assert!(pts.contains(&dc.a) && pts.contains(&dc.b));
    }

    #[test]
    fn distance_symmetric_and_zero_only_on_equal(
        a in (coord(), coord()),
        b in (coord(), coord()),
    ) {
        let p = vector![a.0, a.1];
        let q = vector![b.0, b.1];
        prop_assert_eq!(distance(p, q), distance(q, p));
        prop_assert!(distance(p, q) >= 0.0);
        prop_assert!(distance(p, q).is_finite());
        prop_assert_eq!(distance(p, q) == 0.0, p == q);
    }

    #[test]
    fn power_of_two_scaling(pts in float_points(), e in -3i32..4) {
        let k = 2f64.powi(e);
        let scaled: Vec<Point2> = pts.iter().map(|p| p * k).collect();
        let base = closest_pair(&pts).unwrap();
        let big = closest_pair(&scaled).unwrap();
        let expected = base.distance * k;
        prop_assert!((big.distance - expected).abs() <= 4.0 * f64::EPSILON * expected);
        prop_assert_eq!(big.distance, closest_pair_brute_force(&scaled).unwrap().distance);
        prop_assert!(scaled.contains(&big.a) && scaled.contains(&big.b));
    }

    #[test]
    fn duplicates_force_zero(mut pts in float_points(), pick in any::<prop::sample::Index>()) {
        let dup = pts[pick.index(pts.len())];
        pts.push(dup);
        prop_assert_eq!(closest_pair(&pts).unwrap().distance, 0.0);
        prop_assert_eq!(closest_pair_brute_force(&pts).unwrap().distance, 0.0);
    }

    #[test]
    fn sort_is_stable_and_idempotent(xs in prop::collection::vec(0i32..5, 0..80)) {
        // y carries the input index, so equal-x runs must have increasing y.
        let pts: Vec<Point2> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| vector![x as f64, i as f64])
            .collect();
        let by_x = sorted_by(&pts, Axis::X);
        prop_assert_eq!(by_x.len(), pts.len());
        for w in by_x.windows(2) {
            prop_assert!(w[0].x < w[1].x || (w[0].x == w[1].x && w[0].y < w[1].y));
        }
        prop_assert_eq!(sorted_by(&by_x, Axis::X), by_x.clone());
        prop_assert_eq!(sorted_by(&pts, Axis::X), by_x);
    }
}
