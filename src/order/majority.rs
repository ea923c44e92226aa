//! Per-line majority labels and the label → line index built from them.

use std::collections::BTreeMap;

use super::frequency::FrequencyTable;
use crate::matrix::{Axis, LabelMatrix};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The labels that reach the highest count within one axis-line.
///
/// Ties are kept: a line can have several majority labels, and the ranked
/// pass decides which one claims it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMajority {
    /// Majority labels in ascending order.
    pub labels: Vec<usize>,
    /// Count each of them reaches in the line.
    pub count: usize,
}

impl AxisMajority {
    /// Majority of a single line.
    ///
    /// Counts cover values `0..=` the line's own maximum; a value absent
    /// from the line has count zero and can never be a majority of a
    /// non-empty line.
    pub fn of_line<I: IntoIterator<Item = usize>>(line: I) -> Self {
        let table = FrequencyTable::from_labels(line);
        let count = table.max_count();
        let labels = table
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == count && c > 0)
            .map(|(label, _)| label)
            .collect();
        Self { labels, count }
    }
}

/// Majorities of every line along `axis`, in line order.
pub fn axis_majorities(matrix: &LabelMatrix, axis: Axis) -> Vec<AxisMajority> {
    #[cfg(feature = "parallel")]
    let majorities: Vec<AxisMajority> = (0..matrix.len_of(axis))
        .into_par_iter()
        .map(|i| AxisMajority::of_line(matrix.line(axis, i).iter().copied()))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let majorities: Vec<AxisMajority> = matrix
        .lines(axis)
        .map(|line| AxisMajority::of_line(line.iter().copied()))
        .collect();

    majorities
}

/// For each label, the lines where it is a majority and its count there.
///
/// `label → (line → count)`. A line tied between labels appears under each
/// of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MajorityIndex {
    by_label: Vec<BTreeMap<usize, usize>>,
}

impl MajorityIndex {
    /// Index per-line majorities; `majorities[i]` belongs to line `i`.
    pub fn build(majorities: &[AxisMajority], n_labels: usize) -> Self {
        let mut by_label: Vec<BTreeMap<usize, usize>> = vec![BTreeMap::new(); n_labels];
        for (line, majority) in majorities.iter().enumerate() {
            for &label in &majority.labels {
                if label >= by_label.len() {
                    by_label.resize_with(label + 1, BTreeMap::new);
                }
                by_label[label].insert(line, majority.count);
            }
        }
        Self { by_label }
    }

    /// Lines where `label` is a majority, keyed by line index.
    pub fn lines_for(&self, label: usize) -> Option<&BTreeMap<usize, usize>> {
        self.by_label.get(label).filter(|lines| !lines.is_empty())
    }

    /// `(line, count)` pairs for `label`, highest count first; equal counts
    /// keep ascending line order.
    pub fn candidates(&self, label: usize) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = self
            .lines_for(label)
            .map(|lines| lines.iter().map(|(&line, &count)| (line, count)).collect())
            .unwrap_or_default();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }

    /// Number of label slots.
    pub fn n_labels(&self) -> usize {
        self.by_label.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_majority() {
        let m = AxisMajority::of_line([0, 0, 1]);
        assert_eq!(m.labels, vec![0]);
        assert_eq!(m.count, 2);
    }

    #[test]
    fn test_tied_majority_keeps_all() {
        let m = AxisMajority::of_line([2, 0, 2, 0, 1]);
        assert_eq!(m.labels, vec![0, 2]);
        assert_eq!(m.count, 2);
    }

    #[test]
    fn test_absent_values_never_majority() {
        // Values 0..3 absent; counts are [0, 0, 0, 1].
        let m = AxisMajority::of_line([3]);
        assert_eq!(m.labels, vec![3]);
        assert_eq!(m.count, 1);
    }

    #[test]
    fn test_axis_majorities_rows_and_columns() {
        let m = LabelMatrix::from_rows(&[vec![0i64, 0, 1], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();

        let rows = axis_majorities(&m, Axis::Row);
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].labels.clone(), rows[0].count), (vec![0], 2));
        assert_eq!((rows[1].labels.clone(), rows[1].count), (vec![1], 2));
        assert_eq!((rows[2].labels.clone(), rows[2].count), (vec![0], 3));

        let cols = axis_majorities(&m, Axis::Column);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[2].labels, vec![0]);
        assert_eq!(cols[2].count, 2);
    }

    #[test]
    fn test_index_two_level_map() {
        let majorities = vec![
            AxisMajority::of_line([0, 0, 1]),
            AxisMajority::of_line([1, 1, 0]),
            AxisMajority::of_line([0, 0, 0]),
            AxisMajority::of_line([0, 1]),
        ];
        let index = MajorityIndex::build(&majorities, 2);

        let zero = index.lines_for(0).unwrap();
        assert_eq!(zero.iter().map(|(&l, &c)| (l, c)).collect::<Vec<_>>(), vec![(0, 2), (2, 3), (3, 1)]);
        let one = index.lines_for(1).unwrap();
        assert_eq!(one.iter().map(|(&l, &c)| (l, c)).collect::<Vec<_>>(), vec![(1, 2), (3, 1)]);
        assert!(index.lines_for(5).is_none());
    }

    #[test]
    fn test_candidates_sorted_by_count_then_line() {
        let majorities = vec![
            AxisMajority::of_line([4, 4]),
            AxisMajority::of_line([4, 4, 4]),
            AxisMajority::of_line([4, 4]),
        ];
        let index = MajorityIndex::build(&majorities, 1);
        // Grows past the requested size to fit label 4.
        assert_eq!(index.n_labels(), 5);
        assert_eq!(index.candidates(4), vec![(1, 3), (0, 2), (2, 2)]);
        assert!(index.candidates(0).is_empty());
    }
}
