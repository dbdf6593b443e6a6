/// Structural facts about the pairing of a bound type with a tree's split
/// strategy, consumed by generic tree construction and traversal algorithms.
///
/// Every fact is an associated constant, so generic code branching on one
/// monomorphizes down to a single path. An algorithm can skip its overlap
/// resolution entirely when children are known disjoint, with no runtime
/// check left behind.
///
/// # Examples
/// ```
/// use recto::prelude::*;
///
/// fn needs_overlap_resolution<C: TreeCapabilities>() -> bool {
///     C::HAS_OVERLAPPING_CHILDREN
/// }
///
/// assert!(!needs_overlap_resolution::<BinarySpacePartition>());
/// ```
pub trait TreeCapabilities {
    /// Regions of sibling nodes may overlap.
    const HAS_OVERLAPPING_CHILDREN: bool;

    /// The first point stored in a node is guaranteed to be its centroid.
    const FIRST_POINT_IS_CENTROID: bool;

    /// A point may appear both in a node and in one of its descendants.
    const HAS_SELF_CHILDREN: bool;

    /// Building the tree permutes the underlying point storage.
    const REARRANGES_DATASET: bool;

    /// Every internal node has exactly two children.
    const IS_BINARY: bool;
}

/// The pairing of [`HyperRectBound`](crate::prelude::HyperRectBound) with a
/// median-cut binary space partition: each split hands every point of a node
/// to exactly one of two children, so sibling regions never overlap and no
/// point is duplicated across levels, at the cost of reordering the dataset
/// during construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinarySpacePartition;

impl TreeCapabilities for BinarySpacePartition {
    const HAS_OVERLAPPING_CHILDREN: bool = false;
    const FIRST_POINT_IS_CENTROID: bool = false;
    const HAS_SELF_CHILDREN: bool = false;
    const REARRANGES_DATASET: bool = true;
    const IS_BINARY: bool = true;
}
