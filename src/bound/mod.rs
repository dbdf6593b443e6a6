use std::ops::{Index, IndexMut};

use itertools::Itertools;
use nalgebra::DVector;
use simba::scalar::SupersetOf;

use crate::{interval::Interval, misc::FloatingPoint};

/// An axis-aligned hyper-rectangle enclosing a set of points, one closed
/// [`Interval`] per dimension.
///
/// The const parameter `P` selects the Minkowski (Lp) metric the distance
/// queries certify bounds for (`P = 2` is Euclidean, `P = 1` Manhattan).
/// Fixing the exponent at compile time lets the `P = 2` case collapse to
/// plain squaring with no call to a general power function, which matters
/// because these queries run at every node of a tree traversal.
///
/// Distance results follow the squared-equivalent convention: the returned
/// quantity is the one whose square root under `P = 2` is the true
/// Euclidean distance. See [`RegionDistance`](crate::prelude::RegionDistance).
///
/// A freshly constructed bound has every interval empty and represents a
/// region with no points yet; it only becomes meaningful through
/// [`expand`](Self::expand) and [`merge`](Self::merge) during tree
/// construction. Cloning produces a fully independent copy, so bounds can be
/// embedded by value in tree nodes that are themselves copied or moved.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyperRectBound<T: FloatingPoint, const P: i32 = 2> {
    intervals: Vec<Interval<T>>,
}

/// Hyper-rectangle bound under the Euclidean (L2) metric.
pub type EuclideanBound<T> = HyperRectBound<T, 2>;

/// Hyper-rectangle bound under the Manhattan (L1) metric.
pub type ManhattanBound<T> = HyperRectBound<T, 1>;

impl<T: FloatingPoint, const P: i32> HyperRectBound<T, P> {
    /// Create a bound of the given dimension with every interval empty.
    pub fn new(dimension: usize) -> Self {
        Self {
            intervals: vec![Interval::default(); dimension],
        }
    }

    /// Create the tightest bound enclosing the given points.
    /// The dimension is taken from the first point; an empty iterator
    /// produces a zero-dimensional bound.
    pub fn from_points<I: IntoIterator<Item = DVector<T>>>(points: I) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::new(0);
        };

        let mut bound = Self::new(first.len());
        bound.expand(&first);
        for point in points {
            bound.expand(&point);
        }
        bound
    }

    /// Number of dimensions of the region.
    pub fn dim(&self) -> usize {
        self.intervals.len()
    }

    /// The per-dimension intervals.
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Reset every interval to the empty state, keeping the dimension.
    pub fn clear(&mut self) {
        self.intervals.fill(Interval::default());
    }

    /// Validate that a query target of `dimension` dimensions is compatible
    /// with this bound. The unchecked operations assume this holds.
    pub fn ensure_dimension(&self, dimension: usize) -> anyhow::Result<()> {
        anyhow::ensure!(
            dimension == self.dim(),
            "dimension mismatch: bound is {}-dimensional, target is {}-dimensional",
            self.dim(),
            dimension
        );
        Ok(())
    }

    /// Centroid of the region.
    /// Every interval must be non-empty.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::dvector;
    /// use recto::prelude::*;
    ///
    /// let bound = EuclideanBound::from_points([dvector![0., 0.], dvector![1., 4.]]);
    /// assert_eq!(bound.centroid(), dvector![0.5, 2.]);
    /// ```
    pub fn centroid(&self) -> DVector<T> {
        debug_assert!(
            self.intervals.iter().all(|i| !i.is_empty()),
            "centroid of a bound with an empty interval"
        );
        DVector::from_iterator(self.dim(), self.intervals.iter().map(|i| i.mid()))
    }

    /// Per-dimension widths of the region.
    pub fn size(&self) -> DVector<T> {
        DVector::from_iterator(self.dim(), self.intervals.iter().map(|i| i.width()))
    }

    /// Grow the region to include a point.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::dvector;
    /// use recto::prelude::*;
    ///
    /// let mut bound = EuclideanBound::<f64>::new(2);
    /// bound.expand(&dvector![0., 0.]);
    /// bound.expand(&dvector![1., 2.]);
    /// assert!(bound.contains(&dvector![0.5, 1.]));
    /// ```
    pub fn expand(&mut self, point: &DVector<T>) {
        debug_assert_eq!(point.len(), self.dim(), "dimension mismatch");
        for (d, interval) in self.intervals.iter_mut().enumerate() {
            interval.expand(point[d]);
        }
    }

    /// Checked [`expand`](Self::expand), rejecting dimension mismatch.
    pub fn try_expand(&mut self, point: &DVector<T>) -> anyhow::Result<()> {
        self.ensure_dimension(point.len())?;
        self.expand(point);
        Ok(())
    }

    /// Grow the region to encompass another bound.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!(other.dim(), self.dim(), "dimension mismatch");
        for (interval, o) in self.intervals.iter_mut().zip(&other.intervals) {
            interval.merge(o);
        }
    }

    /// Checked [`merge`](Self::merge), rejecting dimension mismatch.
    pub fn try_merge(&mut self, other: &Self) -> anyhow::Result<()> {
        self.ensure_dimension(other.dim())?;
        self.merge(other);
        Ok(())
    }

    /// Check if the region contains a point, faces included.
    pub fn contains(&self, point: &DVector<T>) -> bool {
        debug_assert_eq!(point.len(), self.dim(), "dimension mismatch");
        self.intervals
            .iter()
            .enumerate()
            .all(|(d, interval)| interval.contains(point[d]))
    }

    /// Corner points of the region, `2^dim` of them.
    /// Every interval must be non-empty.
    pub fn corners(&self) -> Vec<DVector<T>> {
        debug_assert!(
            self.intervals.iter().all(|i| !i.is_empty()),
            "corners of a bound with an empty interval"
        );
        self.intervals
            .iter()
            .map(|i| [i.lo, i.hi])
            .multi_cartesian_product()
            .map(DVector::from_vec)
            .collect()
    }

    /// Cast the bound to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> HyperRectBound<F, P> {
        HyperRectBound {
            intervals: self.intervals.iter().map(|i| i.cast()).collect(),
        }
    }
}

impl<T: FloatingPoint, const P: i32> Index<usize> for HyperRectBound<T, P> {
    type Output = Interval<T>;

    fn index(&self, dimension: usize) -> &Self::Output {
        &self.intervals[dimension]
    }
}

impl<T: FloatingPoint, const P: i32> IndexMut<usize> for HyperRectBound<T, P> {
    fn index_mut(&mut self, dimension: usize) -> &mut Self::Output {
        &mut self.intervals[dimension]
    }
}

impl<T: FloatingPoint, const P: i32> FromIterator<DVector<T>> for HyperRectBound<T, P> {
    fn from_iter<I: IntoIterator<Item = DVector<T>>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
