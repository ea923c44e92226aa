//! Line ordering for label matrices.
//!
//! The goal is a grid where lines dominated by the same label sit next to
//! each other, with the most common labels first.
//!
//! ## The Majority Rule
//!
//! 1. **Rank labels** by how often they occur in the whole matrix, most
//!    frequent first. Equal counts rank by ascending label value.
//! 2. **Find majorities**: for each line, the label(s) with the highest
//!    count in that line. Ties are kept, so a line may belong to several
//!    labels at this stage.
//! 3. **Claim lines in rank order**: walk the ranking; each label takes the
//!    unclaimed lines where it is a majority, highest count first, equal
//!    counts by ascending line index.
//!
//! Every line has at least one majority label and every label value is
//! ranked, so the walk always places every line exactly once.
//!
//! ```text
//! [[0,0,1],      label 0: 6 cells, label 1: 3 cells  -> ranking [0, 1]
//!  [1,1,0],      row 0 -> {0}:2, row 1 -> {1}:2, row 2 -> {0}:3
//!  [0,0,0]]      label 0 claims rows 2, 0; label 1 claims row 1
//!                                                    -> order [2, 0, 1]
//! ```
//!
//! ## Both Axes
//!
//! Rows are ordered first, then columns on the row-permuted matrix. Column
//! counts do not depend on row order, but keeping the sequence keeps row
//! and column names paired with the cells they label.
//!
//! ## Usage
//!
//! ```rust
//! use comgrid::order::{AxisOrdering, MajorityRule};
//! use comgrid::{Axis, LabelMatrix};
//!
//! let m = LabelMatrix::from_rows(&[vec![0, 0, 1], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
//! let perm = MajorityRule::new().order(&m, Axis::Row);
//! assert_eq!(perm.as_slice(), &[2, 0, 1]);
//! ```

mod frequency;
mod majority;
mod permutation;
mod traits;

pub use frequency::{rank_labels, FrequencyTable, RankingList};
pub use majority::{axis_majorities, AxisMajority, MajorityIndex};
pub use permutation::Permutation;
pub use traits::AxisOrdering;

use crate::matrix::{Axis, LabelMatrix};

/// Majority-rule ordering.
#[derive(Debug, Clone, Default)]
pub struct MajorityRule {
    /// Precomputed global ranking; derived from the matrix when absent.
    ranking: Option<RankingList>,
}

impl MajorityRule {
    /// Create a rule that ranks labels from whatever matrix it orders.
    pub fn new() -> Self {
        Self { ranking: None }
    }

    /// Use a ranking computed once up front, e.g. from the original matrix
    /// when both axes are ordered in sequence.
    pub fn with_ranking(mut self, ranking: RankingList) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// The fixed ranking, if one was supplied.
    pub fn ranking(&self) -> Option<&RankingList> {
        self.ranking.as_ref()
    }

    /// Run the ranked greedy assignment against `ranking`.
    ///
    /// Panics if a line is left unplaced, which would mean `ranking` does
    /// not cover the labels of `matrix`.
    pub fn order_with_ranking(
        matrix: &LabelMatrix,
        axis: Axis,
        ranking: &RankingList,
    ) -> Permutation {
        let n = matrix.len_of(axis);
        let majorities = axis_majorities(matrix, axis);
        let index = MajorityIndex::build(&majorities, ranking.len());

        let mut placed = vec![false; n];
        let mut order = Vec::with_capacity(n);

        for label in ranking.iter() {
            if order.len() == n {
                break;
            }
            for (line, count) in index.candidates(label) {
                if !placed[line] {
                    placed[line] = true;
                    order.push(line);
                    log::trace!("{axis} {line} claimed by label {label} (count {count})");
                }
            }
        }

        assert_eq!(
            order.len(),
            n,
            "majority rule left {} {axis} lines unplaced",
            n - order.len()
        );
        Permutation::from_order(order)
    }
}

impl AxisOrdering for MajorityRule {
    fn order(&self, matrix: &LabelMatrix, axis: Axis) -> Permutation {
        match &self.ranking {
            Some(ranking) => Self::order_with_ranking(matrix, axis, ranking),
            None => {
                let (_, ranking) = rank_labels(matrix);
                Self::order_with_ranking(matrix, axis, &ranking)
            }
        }
    }

    fn name(&self) -> &'static str {
        "majority"
    }
}

/// Leaves lines where they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl AxisOrdering for KeepOrder {
    fn order(&self, matrix: &LabelMatrix, axis: Axis) -> Permutation {
        Permutation::identity(matrix.len_of(axis))
    }

    fn name(&self) -> &'static str {
        "original"
    }
}
