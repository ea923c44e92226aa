//! Reordering a labelled grid: matrix plus row and column names.
//!
//! These are the entry points a presentation layer calls. Each one validates
//! the inputs, orders the requested axes and returns the permuted matrix
//! together with names that still line up with their cells.

use crate::error::{Error, Result};
use crate::matrix::{Axis, LabelMatrix};
use crate::order::{rank_labels, AxisOrdering, KeepOrder, MajorityRule, Permutation};

/// Which axes to reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keep the input order on both axes.
    Original,
    /// Reorder rows only.
    Rows,
    /// Reorder columns only.
    Columns,
    /// Reorder rows, then columns of the row-permuted matrix.
    #[default]
    Both,
}

/// Result of reordering one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisReordering {
    /// Matrix with the axis permuted.
    pub matrix: LabelMatrix,
    /// Names in the new order.
    pub names: Vec<String>,
    /// `names[i]` was originally at `permutation[i]`.
    pub permutation: Permutation,
}

/// Result of arranging both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReordering {
    /// Final matrix.
    pub matrix: LabelMatrix,
    /// Row names in the new order.
    pub row_names: Vec<String>,
    /// Column names in the new order.
    pub col_names: Vec<String>,
    /// Applied row order (identity if rows were kept).
    pub row_permutation: Permutation,
    /// Applied column order (identity if columns were kept).
    pub col_permutation: Permutation,
}

/// Reorder rows by the majority rule.
///
/// ```rust
/// use comgrid::{reorder_rows, LabelMatrix};
///
/// let m = LabelMatrix::from_rows(&[vec![0, 0, 1], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
/// let out = reorder_rows(&m, &["R0", "R1", "R2"]).unwrap();
/// assert_eq!(out.permutation.as_slice(), &[2, 0, 1]);
/// assert_eq!(out.names, vec!["R2", "R0", "R1"]);
/// ```
pub fn reorder_rows<S: AsRef<str>>(
    matrix: &LabelMatrix,
    row_names: &[S],
) -> Result<AxisReordering> {
    reorder_axis(matrix, row_names, Axis::Row, &MajorityRule::new())
}

/// Reorder columns by the majority rule.
pub fn reorder_columns<S: AsRef<str>>(
    matrix: &LabelMatrix,
    col_names: &[S],
) -> Result<AxisReordering> {
    reorder_axis(matrix, col_names, Axis::Column, &MajorityRule::new())
}

/// Reorder rows, then columns of the row-permuted matrix.
pub fn reorder_both<S: AsRef<str>, T: AsRef<str>>(
    matrix: &LabelMatrix,
    row_names: &[S],
    col_names: &[T],
) -> Result<GridReordering> {
    arrange(matrix, row_names, col_names, Mode::Both)
}

/// Arrange a grid according to `mode`.
///
/// Axes that are not reordered carry the identity permutation.
pub fn arrange<S: AsRef<str>, T: AsRef<str>>(
    matrix: &LabelMatrix,
    row_names: &[S],
    col_names: &[T],
    mode: Mode,
) -> Result<GridReordering> {
    if mode == Mode::Original {
        return reorder_axes(matrix, row_names, col_names, &KeepOrder, &KeepOrder);
    }

    // One ranking for both passes: permuting lines never changes it.
    let (_, ranking) = rank_labels(matrix);
    let rule = MajorityRule::new().with_ranking(ranking);
    match mode {
        Mode::Rows => reorder_axes(matrix, row_names, col_names, &rule, &KeepOrder),
        Mode::Columns => reorder_axes(matrix, row_names, col_names, &KeepOrder, &rule),
        Mode::Both | Mode::Original => reorder_axes(matrix, row_names, col_names, &rule, &rule),
    }
}

/// Order rows with `rows`, then columns of the result with `cols`.
pub fn reorder_axes<S, T, R, C>(
    matrix: &LabelMatrix,
    row_names: &[S],
    col_names: &[T],
    rows: &R,
    cols: &C,
) -> Result<GridReordering>
where
    S: AsRef<str>,
    T: AsRef<str>,
    R: AxisOrdering + ?Sized,
    C: AxisOrdering + ?Sized,
{
    let row_names = check_names(matrix, Axis::Row, row_names)?;
    let col_names = check_names(matrix, Axis::Column, col_names)?;

    let by_rows = apply_ordering(matrix, row_names, Axis::Row, rows);
    let by_cols = apply_ordering(&by_rows.matrix, col_names, Axis::Column, cols);

    Ok(GridReordering {
        matrix: by_cols.matrix,
        row_names: by_rows.names,
        col_names: by_cols.names,
        row_permutation: by_rows.permutation,
        col_permutation: by_cols.permutation,
    })
}

/// Order one axis with any strategy.
pub fn reorder_axis<S, O>(
    matrix: &LabelMatrix,
    names: &[S],
    axis: Axis,
    ordering: &O,
) -> Result<AxisReordering>
where
    S: AsRef<str>,
    O: AxisOrdering + ?Sized,
{
    let names = check_names(matrix, axis, names)?;
    Ok(apply_ordering(matrix, names, axis, ordering))
}

fn apply_ordering<O: AxisOrdering + ?Sized>(
    matrix: &LabelMatrix,
    names: Vec<String>,
    axis: Axis,
    ordering: &O,
) -> AxisReordering {
    let permutation = ordering.order(matrix, axis);
    log::debug!(
        "{} ordering of {} {axis}s, {} moved",
        ordering.name(),
        permutation.len(),
        permutation
            .iter()
            .enumerate()
            .filter(|&(pos, i)| pos != i)
            .count()
    );
    AxisReordering {
        matrix: matrix.permuted(axis, &permutation),
        names: permutation.apply(&names),
        permutation,
    }
}

fn check_names<S: AsRef<str>>(
    matrix: &LabelMatrix,
    axis: Axis,
    names: &[S],
) -> Result<Vec<String>> {
    let expected = matrix.len_of(axis);
    if names.len() != expected {
        return Err(Error::NameCountMismatch {
            axis,
            expected,
            found: names.len(),
        });
    }
    Ok(names.iter().map(|n| n.as_ref().to_string()).collect())
}
