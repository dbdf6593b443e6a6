use crate::{bound::HyperRectBound, interval::Interval, misc::FloatingPoint};

use super::{lp_normalize, lp_pow, RegionDistance};

impl<T: FloatingPoint, const P: i32> RegionDistance<T, HyperRectBound<T, P>>
    for HyperRectBound<T, P>
{
    /// Separating-axis form of the lower bound; symmetric in its arguments.
    fn min_distance(&self, other: &HyperRectBound<T, P>) -> T {
        debug_assert_eq!(other.dim(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for (a, b) in self.intervals().iter().zip(other.intervals()) {
            let lower = b.lo - a.hi;
            let higher = a.lo - b.hi;

            // At most one gap is positive per axis; x + |x| doubles it and
            // cancels the other side.
            sum += lp_pow::<T, P>((lower + lower.abs()) + (higher + higher.abs()));
        }

        lp_normalize::<T, P>(sum) / T::from_usize(4).unwrap()
    }

    fn max_distance(&self, other: &HyperRectBound<T, P>) -> T {
        debug_assert_eq!(other.dim(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for (a, b) in self.intervals().iter().zip(other.intervals()) {
            // Widest endpoint-to-endpoint span on this axis; non-negative
            // for any two non-empty intervals.
            let v = (b.hi - a.lo).max(a.hi - b.lo).abs();
            sum += lp_pow::<T, P>(v);
        }

        lp_normalize::<T, P>(sum)
    }

    fn range_distance(&self, other: &HyperRectBound<T, P>) -> Interval<T> {
        debug_assert_eq!(other.dim(), self.dim(), "dimension mismatch");

        let mut lo_sum = T::zero();
        let mut hi_sum = T::zero();
        for (a, b) in self.intervals().iter().zip(other.intervals()) {
            let v1 = b.lo - a.hi;
            let v2 = a.lo - b.hi;
            // At most one of the gaps is positive; the other, negated, is
            // the span to the farther endpoint.
            let (v_lo, v_hi) = if v1 >= v2 {
                (v1.max(T::zero()), -v2)
            } else {
                (v2.max(T::zero()), -v1)
            };

            lo_sum += lp_pow::<T, P>(v_lo);
            hi_sum += lp_pow::<T, P>(v_hi);
        }

        Interval::new(
            lp_normalize::<T, P>(lo_sum),
            lp_normalize::<T, P>(hi_sum),
        )
    }

    fn min_distance_filtered(&self, other: &HyperRectBound<T, P>, dimensions: &[usize]) -> T {
        debug_assert_eq!(other.dim(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for &d in dimensions {
            let lower = self[d].lo - other[d].hi;
            let higher = other[d].lo - self[d].hi;
            sum += lp_pow::<T, P>((lower + lower.abs()) + (higher + higher.abs()));
        }

        lp_normalize::<T, P>(sum) / T::from_usize(4).unwrap()
    }

    fn max_distance_filtered(&self, other: &HyperRectBound<T, P>, dimensions: &[usize]) -> T {
        debug_assert_eq!(other.dim(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for &d in dimensions {
            let lower = (other[d].hi - self[d].lo).abs();
            let higher = (other[d].lo - self[d].hi).abs();

            // |a - b| + a + b doubles the wider span; the factor of four
            // comes back out in the normalization.
            sum += lp_pow::<T, P>((higher - lower).abs() + higher + lower);
        }

        lp_normalize::<T, P>(sum) / T::from_usize(4).unwrap()
    }

    fn try_min_distance(&self, other: &HyperRectBound<T, P>) -> anyhow::Result<T> {
        self.ensure_dimension(other.dim())?;
        Ok(self.min_distance(other))
    }

    fn try_max_distance(&self, other: &HyperRectBound<T, P>) -> anyhow::Result<T> {
        self.ensure_dimension(other.dim())?;
        Ok(self.max_distance(other))
    }

    fn try_range_distance(&self, other: &HyperRectBound<T, P>) -> anyhow::Result<Interval<T>> {
        self.ensure_dimension(other.dim())?;
        Ok(self.range_distance(other))
    }
}
