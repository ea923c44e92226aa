//! Global label frequencies and the ranking derived from them.

use crate::matrix::LabelMatrix;

/// Occurrence count for every label value `0..n_labels`.
///
/// Values that never occur below the maximum still get a zero entry, so the
/// table can be indexed by any label up to the largest one seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<usize>,
}

impl FrequencyTable {
    /// Count labels from any iterator (a whole matrix or a single line).
    ///
    /// Sized to the largest label seen plus one; empty input gives an empty
    /// table. Labels must not exceed [`MAX_LABEL`](crate::matrix::MAX_LABEL),
    /// which every [`LabelMatrix`] guarantees.
    pub fn from_labels<I: IntoIterator<Item = usize>>(labels: I) -> Self {
        let mut counts: Vec<usize> = Vec::new();
        for label in labels {
            if label >= counts.len() {
                counts.resize(label + 1, 0);
            }
            counts[label] += 1;
        }
        Self { counts }
    }

    /// Count every entry of `matrix`.
    pub fn from_matrix(matrix: &LabelMatrix) -> Self {
        Self::from_labels(matrix.labels())
    }

    /// Count for `label`; zero beyond the table.
    pub fn count(&self, label: usize) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of label values covered (`max_label + 1`).
    pub fn n_labels(&self) -> usize {
        self.counts.len()
    }

    /// Highest count in the table, zero when empty.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Counts indexed by label.
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }

    /// Labels by descending count, ties by ascending label value.
    pub fn ranking(&self) -> RankingList {
        let mut order: Vec<usize> = (0..self.counts.len()).collect();
        // Stable: equal counts keep ascending label order.
        order.sort_by(|&a, &b| self.counts[b].cmp(&self.counts[a]));
        RankingList(order)
    }
}

/// Label values ordered from most to least frequent.
///
/// Always a permutation of `0..n_labels`, including zero-count values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingList(Vec<usize>);

impl RankingList {
    /// Number of ranked labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is ranked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most frequent label.
    pub fn top(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Position of `label` in the ranking (0 = most frequent).
    pub fn rank_of(&self, label: usize) -> Option<usize> {
        self.0.iter().position(|&l| l == label)
    }

    /// Labels in rank order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Labels in rank order, as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Frequency table and ranking for a whole matrix.
///
/// ```rust
/// use comgrid::{rank_labels, LabelMatrix};
///
/// let m = LabelMatrix::from_rows(&[vec![0, 0, 1], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
/// let (table, ranking) = rank_labels(&m);
/// assert_eq!(table.as_slice(), &[6, 3]);
/// assert_eq!(ranking.as_slice(), &[0, 1]);
/// ```
pub fn rank_labels(matrix: &LabelMatrix) -> (FrequencyTable, RankingList) {
    let table = FrequencyTable::from_matrix(matrix);
    let ranking = table.ranking();
    log::debug!(
        "ranked {} labels over {} cells, top label {:?}",
        ranking.len(),
        table.total(),
        ranking.top()
    );
    (table, ranking)
}
