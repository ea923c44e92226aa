//! Label matrices: the validated input of every ordering pass.
//!
//! A [`LabelMatrix`] is a non-empty `n_row × n_col` grid of community labels.
//! Labels are non-negative integers used directly as indices into frequency
//! tables, so construction rejects negative, fractional and oversized entries
//! up front.
//! After that, nothing downstream can fail on data.

use core::fmt;

use crate::error::{Error, Result};
use crate::order::Permutation;
use ndarray::{Array2, ArrayView1};

/// One of the two matrix axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Lines are rows; a permutation reorders rows.
    Row,
    /// Lines are columns; a permutation reorders columns.
    Column,
}

impl Axis {
    /// The matching `ndarray` axis.
    pub fn as_ndarray(self) -> ndarray::Axis {
        match self {
            Axis::Row => ndarray::Axis(0),
            Axis::Column => ndarray::Axis(1),
        }
    }

    /// The other axis.
    pub fn other(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Largest label a matrix may hold.
///
/// Label-indexed tables have `max_label + 1` slots, which must fit in `usize`.
pub const MAX_LABEL: usize = usize::MAX - 1;

fn checked_label(
    row: usize,
    col: usize,
    label: Option<usize>,
    shown: impl fmt::Display,
) -> Result<usize> {
    match label {
        Some(label) if label <= MAX_LABEL => Ok(label),
        _ => Err(Error::LabelOutOfRange {
            row,
            col,
            value: shown.to_string(),
        }),
    }
}

/// A non-empty 2D matrix of community labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatrix {
    data: Array2<usize>,
}

impl LabelMatrix {
    /// Build a matrix from integer rows of any primitive integer type.
    ///
    /// Fails on an empty matrix, rows of unequal length, negative labels, or
    /// labels above [`MAX_LABEL`].
    ///
    /// ```rust
    /// use comgrid::LabelMatrix;
    ///
    /// let m = LabelMatrix::from_rows(&[vec![0, 0, 1], vec![1, 1, 0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(LabelMatrix::from_rows(&[vec![0, -1]]).is_err());
    /// assert!(LabelMatrix::from_rows(&[vec![0usize, 7]]).is_ok());
    /// ```
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Self>
    where
        T: Copy + TryInto<i128> + fmt::Display,
        R: AsRef<[T]>,
    {
        Self::collect_rows(rows, |row, col, value: T| {
            let wide: Option<i128> = value.try_into().ok();
            match wide {
                Some(v) if v < 0 => Err(Error::NegativeLabel {
                    row,
                    col,
                    value: i64::try_from(v).unwrap_or(i64::MIN),
                }),
                Some(v) => checked_label(row, col, usize::try_from(v).ok(), value),
                None => checked_label(row, col, None, value),
            }
        })
    }

    /// Build a matrix from floating-point rows, as produced by numeric
    /// loaders that store everything as `f64`.
    ///
    /// Every entry must be a finite, non-negative whole number no larger
    /// than [`MAX_LABEL`].
    pub fn from_f64_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::collect_rows(rows, |row, col, value: f64| {
            if !value.is_finite() || value.fract() != 0.0 {
                return Err(Error::NonIntegerLabel { row, col, value });
            }
            if value < 0.0 {
                return Err(Error::NegativeLabel {
                    row,
                    col,
                    value: value.max(i64::MIN as f64) as i64,
                });
            }
            // `as` saturates, so only cast values strictly inside the range.
            let label = (value < usize::MAX as f64).then(|| value as usize);
            checked_label(row, col, label, value)
        })
    }

    /// Wrap an existing array.
    ///
    /// Fails on an empty array or a label above [`MAX_LABEL`].
    pub fn from_array(data: Array2<usize>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let too_large = data.indexed_iter().find(|&(_, &v)| v > MAX_LABEL);
        if let Some(((row, col), &value)) = too_large {
            return Err(Error::LabelOutOfRange {
                row,
                col,
                value: value.to_string(),
            });
        }
        Ok(Self { data })
    }

    fn collect_rows<T, R, F>(rows: &[R], mut convert: F) -> Result<Self>
    where
        T: Copy,
        R: AsRef<[T]>,
        F: FnMut(usize, usize, T) -> Result<usize>,
    {
        let n_row = rows.len();
        let n_col = rows.first().map_or(0, |r| r.as_ref().len());
        if n_row == 0 || n_col == 0 {
            return Err(Error::EmptyInput);
        }

        let mut flat = Vec::with_capacity(n_row * n_col);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_col {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: n_col,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                flat.push(convert(i, j, value)?);
            }
        }

        let data = Array2::from_shape_vec((n_row, n_col), flat)
            .map_err(|_| Error::EmptyInput)?;
        Ok(Self { data })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(n_rows, n_cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Number of lines along `axis`.
    pub fn len_of(&self, axis: Axis) -> usize {
        self.data.len_of(axis.as_ndarray())
    }

    /// Label at `(row, col)`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.data.get((row, col)).copied()
    }

    /// Largest label present.
    pub fn max_label(&self) -> usize {
        // Non-empty by construction.
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// `max_label + 1`: the size of every label-indexed table.
    pub fn n_labels(&self) -> usize {
        self.max_label() + 1
    }

    /// All labels in row-major order.
    pub fn labels(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.iter().copied()
    }

    /// Line `index` along `axis` (a row or a column).
    ///
    /// Panics if `index` is out of bounds.
    pub fn line(&self, axis: Axis, index: usize) -> ArrayView1<'_, usize> {
        self.data.index_axis(axis.as_ndarray(), index)
    }

    /// Iterate over the lines along `axis` in index order.
    pub fn lines(&self, axis: Axis) -> impl Iterator<Item = ArrayView1<'_, usize>> + '_ {
        self.data.axis_iter(axis.as_ndarray())
    }

    /// Borrow the backing array.
    pub fn as_array(&self) -> &Array2<usize> {
        &self.data
    }

    /// Consume into the backing array.
    pub fn into_array(self) -> Array2<usize> {
        self.data
    }

    /// Rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.data.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    /// A new matrix whose line `i` along `axis` is line `perm[i]` of `self`.
    ///
    /// Panics if `perm` does not cover exactly this axis.
    pub fn permuted(&self, axis: Axis, perm: &Permutation) -> LabelMatrix {
        assert_eq!(
            perm.len(),
            self.len_of(axis),
            "{axis} permutation length does not match matrix"
        );
        Self {
            data: self.data.select(axis.as_ndarray(), perm.as_slice()),
        }
    }
}
