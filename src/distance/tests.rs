use approx::assert_relative_eq;
use nalgebra::{dvector, DVector};
use rand::Rng;

use crate::prelude::*;

fn random_point(rng: &mut impl Rng, dim: usize) -> DVector<f64> {
    DVector::from_fn(dim, |_, _| rng.random_range(-10.0..10.0))
}

fn random_bound(rng: &mut impl Rng, dim: usize) -> EuclideanBound<f64> {
    (0..8).map(|_| random_point(rng, dim)).collect()
}

/// Coordinate-wise clamp of `point` into `bound`, i.e. the nearest point of
/// the region under any Lp metric.
fn nearest_in(bound: &EuclideanBound<f64>, point: &DVector<f64>) -> DVector<f64> {
    DVector::from_fn(point.len(), |d, _| {
        point[d].max(bound[d].lo).min(bound[d].hi)
    })
}

fn unit_square() -> EuclideanBound<f64> {
    EuclideanBound::from_points([dvector![0., 0.], dvector![1., 1.]])
}

#[test]
fn point_outside_unit_square() {
    let bound = unit_square();
    let point = dvector![3., 0.];

    // Nearest corner is (1, 0), farthest is (0, 1); squared distances.
    assert_eq!(bound.min_distance(&point), 4.);
    assert_eq!(bound.max_distance(&point), 10.);
}

#[test]
fn point_inside_unit_square() {
    let bound = unit_square();
    let point = dvector![0.5, 0.5];

    assert!(bound.contains(&point));
    assert_eq!(bound.min_distance(&point), 0.);
}

#[test]
fn bound_to_bound_distances() {
    let a = unit_square();
    let b = EuclideanBound::from_points([dvector![2., 2.], dvector![3., 3.]]);

    // Corner (1, 1) to corner (2, 2), and (0, 0) to (3, 3), squared.
    assert_eq!(a.min_distance(&b), 2.);
    assert_eq!(a.max_distance(&b), 18.);
}

#[test]
fn overlapping_bounds_have_zero_min_distance() {
    let a = unit_square();
    let b = EuclideanBound::from_points([dvector![0.5, 0.5], dvector![2., 2.]]);

    assert_eq!(a.min_distance(&b), 0.);
    assert_eq!(a.range_distance(&b).lo, 0.);
}

#[test]
fn single_point_bound_degenerates_to_point_distance() {
    let mut bound = EuclideanBound::<f64>::new(2);
    bound.expand(&dvector![1., 2.]);
    let point = dvector![4., 6.];

    assert_eq!(bound.min_distance(&point), 25.);
    assert_eq!(bound.max_distance(&point), 25.);
}

#[test]
fn min_distance_is_squared_distance_to_nearest_point() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let bound = random_bound(&mut rng, 3);
        let point = random_point(&mut rng, 3);
        let nearest = nearest_in(&bound, &point);
        assert_eq!(bound.min_distance(&point), (nearest - &point).norm_squared());
    }
}

#[test]
fn max_distance_is_squared_distance_to_farthest_corner() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let bound = random_bound(&mut rng, 3);
        let point = random_point(&mut rng, 3);
        let farthest = bound
            .corners()
            .into_iter()
            .map(|c| (c - &point).norm_squared())
            .fold(0., f64::max);
        assert_eq!(bound.max_distance(&point), farthest);
    }
}

#[test]
fn range_distance_matches_separate_calls() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = random_bound(&mut rng, 4);
        let b = random_bound(&mut rng, 4);
        let point = random_point(&mut rng, 4);

        let range = a.range_distance(&point);
        assert_eq!(range.lo, a.min_distance(&point));
        assert_eq!(range.hi, a.max_distance(&point));

        let range = a.range_distance(&b);
        assert_eq!(range.lo, a.min_distance(&b));
        assert_eq!(range.hi, a.max_distance(&b));
    }
}

#[test]
fn bound_to_bound_distances_are_symmetric() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = random_bound(&mut rng, 3);
        let b = random_bound(&mut rng, 3);
        assert_eq!(a.min_distance(&b), b.min_distance(&a));
        assert_eq!(a.max_distance(&b), b.max_distance(&a));
    }
}

#[test]
fn contained_points_have_zero_min_distance() {
    let mut rng = rand::rng();
    let bound = random_bound(&mut rng, 3);
    for _ in 0..100 {
        let point = random_point(&mut rng, 3);
        if bound.contains(&point) {
            assert_eq!(bound.min_distance(&point), 0.);
        }
        let inside = nearest_in(&bound, &point);
        assert!(bound.contains(&inside));
        assert_eq!(bound.min_distance(&inside), 0.);
    }
}

#[test]
fn filtering_over_all_dimensions_matches_unfiltered() {
    let mut rng = rand::rng();
    let all = [0_usize, 1, 2];
    for _ in 0..100 {
        let a = random_bound(&mut rng, 3);
        let b = random_bound(&mut rng, 3);
        let point = random_point(&mut rng, 3);

        // The filtered lower bound runs the very same accumulation, so the
        // match is bit-exact. The filtered upper bound goes through the
        // branch-free doubling identity instead of a plain max, which rounds
        // differently by a few ulps.
        assert_eq!(a.min_distance_filtered(&point, &all), a.min_distance(&point));
        assert_eq!(a.min_distance_filtered(&b, &all), a.min_distance(&b));
        assert_relative_eq!(
            a.max_distance_filtered(&point, &all),
            a.max_distance(&point),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            a.max_distance_filtered(&b, &all),
            a.max_distance(&b),
            max_relative = 1e-12
        );
    }
}

#[test]
fn filtered_distance_accumulates_selected_axes_only() {
    let bound = unit_square();
    let point = dvector![3., 5.];

    // Axis 0 alone: gap of 2, squared.
    assert_eq!(bound.min_distance_filtered(&point, &[0]), 4.);
    // Axis 1 alone: gap of 4, squared.
    assert_eq!(bound.min_distance_filtered(&point, &[1]), 16.);
    assert_eq!(bound.min_distance(&point), 20.);
}

#[test]
fn manhattan_point_distances() {
    let bound = ManhattanBound::from_points([dvector![0., 0.], dvector![1., 1.]]);
    let point = dvector![3., 0.];

    // L1 distance to the region is 2, to the farthest corner 4; results stay
    // in the squared convention.
    assert_relative_eq!(bound.min_distance(&point), 4., epsilon = 1e-12);
    assert_relative_eq!(bound.max_distance(&point), 16., epsilon = 1e-12);

    let range = bound.range_distance(&point);
    assert_relative_eq!(range.lo, 4., epsilon = 1e-12);
    assert_relative_eq!(range.hi, 16., epsilon = 1e-12);
}

#[test]
fn manhattan_bound_to_bound_distances() {
    let a = ManhattanBound::from_points([dvector![0., 0.], dvector![1., 1.]]);
    let b = ManhattanBound::from_points([dvector![2., 2.], dvector![3., 3.]]);

    // L1 gap is 1 + 1 = 2, widest span 3 + 3 = 6.
    assert_relative_eq!(a.min_distance(&b), 4., epsilon = 1e-12);
    assert_relative_eq!(a.max_distance(&b), 36., epsilon = 1e-12);
    assert_relative_eq!(a.min_distance(&b), b.min_distance(&a), epsilon = 1e-12);
}

#[test]
fn try_variants_reject_dimension_mismatch() {
    let bound = unit_square();
    let point = dvector![0.5, 0.5, 0.5];
    let other = EuclideanBound::<f64>::new(3);

    assert!(bound.try_min_distance(&point).is_err());
    assert!(bound.try_max_distance(&point).is_err());
    assert!(bound.try_range_distance(&point).is_err());
    assert!(bound.try_min_distance(&other).is_err());
    assert!(bound.try_max_distance(&other).is_err());
    assert!(bound.try_range_distance(&other).is_err());

    let point = dvector![3., 0.];
    assert_eq!(bound.try_min_distance(&point).unwrap(), 4.);
    assert_eq!(bound.try_max_distance(&point).unwrap(), 10.);
    let range = bound.try_range_distance(&point).unwrap();
    assert_eq!(range, Interval::new(4., 10.));
}
