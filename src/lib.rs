//! # comgrid
//!
//! Community label matrices as color grids: reorder rows and columns so that
//! lines dominated by the same frequent label sit together, then hand the
//! arranged grid to a palette and a renderer.
//!
//! The input is a matrix whose cell `(i, j)` holds the community of the pair
//! (row attribute `i`, column attribute `j`). The ordering core is the
//! majority rule described in [`order`]; [`grid`] wraps it with name lists.
//!
//! **Default build** is the ordering core plus palette generation. Rendering
//! to PNG/SVG is opt-in via the `plot` feature; `parallel` spreads per-line
//! counting over threads.
//!
//! ```rust
//! use comgrid::{reorder_both, LabelMatrix};
//!
//! let m = LabelMatrix::from_rows(&[vec![0, 0, 1], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
//! let grid = reorder_both(&m, &["R0", "R1", "R2"], &["C0", "C1", "C2"]).unwrap();
//! assert_eq!(grid.row_names, vec!["R2", "R0", "R1"]);
//! ```

/// Error types used across `comgrid`.
pub mod error;
pub mod grid;
pub mod matrix;
pub mod order;
pub mod palette;
#[cfg(feature = "plot")]
pub mod plot;

pub use error::{Error, Result};
pub use grid::{
    arrange, reorder_axes, reorder_axis, reorder_both, reorder_columns, reorder_rows,
    AxisReordering, GridReordering, Mode,
};
pub use matrix::{Axis, LabelMatrix, MAX_LABEL};
pub use order::{rank_labels, AxisOrdering, KeepOrder, MajorityRule, Permutation, RankingList};
pub use palette::{Palette, PaletteGenerator, Rgb};

#[cfg(feature = "plot")]
pub use plot::{render_grid, PlotConfig};
