//! Ordering traits.

use super::Permutation;
use crate::matrix::{Axis, LabelMatrix};

/// Trait for strategies that order the lines of one axis.
pub trait AxisOrdering {
    /// Compute the new order of the lines along `axis`.
    ///
    /// The result always has `matrix.len_of(axis)` entries.
    fn order(&self, matrix: &LabelMatrix, axis: Axis) -> Permutation;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
