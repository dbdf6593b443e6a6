use nalgebra::DVector;

use crate::{bound::HyperRectBound, interval::Interval, misc::FloatingPoint};

use super::{lp_normalize, lp_pow, RegionDistance};

impl<T: FloatingPoint, const P: i32> RegionDistance<T, DVector<T>> for HyperRectBound<T, P> {
    fn min_distance(&self, point: &DVector<T>) -> T {
        debug_assert_eq!(point.len(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for (d, interval) in self.intervals().iter().enumerate() {
            let lower = interval.lo - point[d];
            let higher = point[d] - interval.hi;

            // At most one of the two is positive; x + |x| keeps the positive
            // side doubled and cancels the negative one, so the term is zero
            // when the coordinate projects inside the interval.
            sum += lp_pow::<T, P>((lower + lower.abs()) + (higher + higher.abs()));
        }

        // The doubling survives the normalization as a factor of four.
        lp_normalize::<T, P>(sum) / T::from_usize(4).unwrap()
    }

    fn max_distance(&self, point: &DVector<T>) -> T {
        debug_assert_eq!(point.len(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for (d, interval) in self.intervals().iter().enumerate() {
            // The farther of the two endpoints on this axis.
            let v = (point[d] - interval.lo).max(interval.hi - point[d]).abs();
            sum += lp_pow::<T, P>(v);
        }

        lp_normalize::<T, P>(sum)
    }

    fn range_distance(&self, point: &DVector<T>) -> Interval<T> {
        debug_assert_eq!(point.len(), self.dim(), "dimension mismatch");

        let mut lo_sum = T::zero();
        let mut hi_sum = T::zero();
        for (d, interval) in self.intervals().iter().enumerate() {
            let v1 = interval.lo - point[d];
            let v2 = point[d] - interval.hi;
            let (v_lo, v_hi) = if v1 >= T::zero() {
                // Point is left of the interval.
                (v1, -v2)
            } else if v2 >= T::zero() {
                // Point is right of the interval.
                (v2, -v1)
            } else {
                // Inside: the farther endpoint sets the upper bound.
                (T::zero(), -v1.min(v2))
            };

            lo_sum += lp_pow::<T, P>(v_lo);
            hi_sum += lp_pow::<T, P>(v_hi);
        }

        Interval::new(
            lp_normalize::<T, P>(lo_sum),
            lp_normalize::<T, P>(hi_sum),
        )
    }

    fn min_distance_filtered(&self, point: &DVector<T>, dimensions: &[usize]) -> T {
        debug_assert_eq!(point.len(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for &d in dimensions {
            let interval = &self[d];
            let lower = interval.lo - point[d];
            let higher = point[d] - interval.hi;
            sum += lp_pow::<T, P>((lower + lower.abs()) + (higher + higher.abs()));
        }

        lp_normalize::<T, P>(sum) / T::from_usize(4).unwrap()
    }

    fn max_distance_filtered(&self, point: &DVector<T>, dimensions: &[usize]) -> T {
        debug_assert_eq!(point.len(), self.dim(), "dimension mismatch");

        let mut sum = T::zero();
        for &d in dimensions {
            let interval = &self[d];
            let lower = (point[d] - interval.lo).abs();
            let higher = (point[d] - interval.hi).abs();

            // |a - b| + a + b doubles the larger endpoint distance; the
            // factor of four comes back out in the normalization.
            sum += lp_pow::<T, P>((higher - lower).abs() + higher + lower);
        }

        lp_normalize::<T, P>(sum) / T::from_usize(4).unwrap()
    }

    fn try_min_distance(&self, point: &DVector<T>) -> anyhow::Result<T> {
        self.ensure_dimension(point.len())?;
        Ok(self.min_distance(point))
    }

    fn try_max_distance(&self, point: &DVector<T>) -> anyhow::Result<T> {
        self.ensure_dimension(point.len())?;
        Ok(self.max_distance(point))
    }

    fn try_range_distance(&self, point: &DVector<T>) -> anyhow::Result<Interval<T>> {
        self.ensure_dimension(point.len())?;
        Ok(self.range_distance(point))
    }
}
