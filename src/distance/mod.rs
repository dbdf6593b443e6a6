mod bound;
mod point;

use crate::{interval::Interval, misc::FloatingPoint};

/// Certified lower and upper Lp distance bounds between a region and a query
/// target (a point, or another region).
///
/// Results use the squared-equivalent convention: the returned quantity is
/// the one whose square root under `P = 2` is the true Euclidean distance.
/// Pruning logic compares these quantities directly against each other and
/// against squared point-to-point distances, so the square root is never
/// taken on the traversal path.
///
/// The plain methods are the unchecked fast path: a target of mismatched
/// dimension is a programming error in the surrounding tree code, caught by
/// a `debug_assert` only. The `try_` variants are for API boundaries where
/// the target comes from outside the tree.
pub trait RegionDistance<T: FloatingPoint, Rhs: ?Sized> {
    /// Lower bound on the distance to the target.
    /// Zero when the target touches or overlaps the region.
    fn min_distance(&self, other: &Rhs) -> T;

    /// Upper bound on the distance to the target, attained at the farthest
    /// corner of the region.
    fn max_distance(&self, other: &Rhs) -> T;

    /// Both bounds in a single pass over the dimensions, returned as the
    /// interval `[min, max]`. Exactly consistent with the two separate calls
    /// and cheaper; pruning decisions that need both sides use this form.
    fn range_distance(&self, other: &Rhs) -> Interval<T>;

    /// Lower bound accumulated over a subset of dimension indices only,
    /// for incremental updates after a single coordinate changes.
    /// Equals [`min_distance`](Self::min_distance) when `dimensions` covers
    /// every axis.
    fn min_distance_filtered(&self, other: &Rhs, dimensions: &[usize]) -> T;

    /// Upper bound accumulated over a subset of dimension indices only.
    fn max_distance_filtered(&self, other: &Rhs, dimensions: &[usize]) -> T;

    /// Checked [`min_distance`](Self::min_distance), rejecting dimension
    /// mismatch.
    fn try_min_distance(&self, other: &Rhs) -> anyhow::Result<T>;

    /// Checked [`max_distance`](Self::max_distance), rejecting dimension
    /// mismatch.
    fn try_max_distance(&self, other: &Rhs) -> anyhow::Result<T>;

    /// Checked [`range_distance`](Self::range_distance), rejecting dimension
    /// mismatch.
    fn try_range_distance(&self, other: &Rhs) -> anyhow::Result<Interval<T>>;
}

/// `v^p`, reduced to plain squaring for the Euclidean case.
#[inline(always)]
pub(crate) fn lp_pow<T: FloatingPoint, const P: i32>(v: T) -> T {
    if P == 2 {
        v * v
    } else {
        v.powi(P)
    }
}

/// `sum^(2/p)`: bring an accumulated sum of p-th powers back to the squared
/// convention. The identity for `P = 2`.
#[inline(always)]
pub(crate) fn lp_normalize<T: FloatingPoint, const P: i32>(sum: T) -> T {
    if P == 2 {
        sum
    } else {
        sum.powf(T::from_f64(2.0 / f64::from(P)).unwrap())
    }
}

#[cfg(test)]
mod tests;
