use comgrid::order::{axis_majorities, FrequencyTable};
use comgrid::*;

fn worked_example() -> LabelMatrix {
    LabelMatrix::from_rows(&[vec![0, 0, 1], vec![1, 1, 0], vec![0, 0, 0]]).unwrap()
}

#[test]
fn worked_example_rows() -> Result<()> {
    let m = worked_example();
    let (table, ranking) = rank_labels(&m);
    assert_eq!(table.as_slice(), &[6, 3]);
    assert_eq!(ranking.as_slice(), &[0, 1]);

    let majorities = axis_majorities(&m, Axis::Row);
    let summary: Vec<(Vec<usize>, usize)> = majorities
        .into_iter()
        .map(|m| (m.labels, m.count))
        .collect();
    assert_eq!(summary, vec![(vec![0], 2), (vec![1], 2), (vec![0], 3)]);

    let out = reorder_rows(&m, &["R0", "R1", "R2"])?;
    assert_eq!(out.permutation.as_slice(), &[2, 0, 1]);
    assert_eq!(out.names, vec!["R2", "R0", "R1"]);
    Ok(())
}

#[test]
fn block_structure_is_recovered() -> Result<()> {
    // Two communities in interleaved rows and columns; ordering should put
    // the larger block (label 1) first on both axes.
    let m = LabelMatrix::from_rows(&[
        vec![0, 1, 0, 1, 1],
        vec![1, 1, 1, 1, 1],
        vec![0, 1, 0, 1, 1],
        vec![1, 1, 1, 1, 1],
    ])?;
    let rows = ["a", "b", "c", "d"];
    let cols = ["v", "w", "x", "y", "z"];

    let grid = reorder_both(&m, &rows, &cols)?;
    assert_eq!(grid.row_permutation.as_slice(), &[1, 3, 0, 2]);
    assert_eq!(grid.row_names, vec!["b", "d", "a", "c"]);
    // Column counts: v {0,1}:2, w {1}:4, x {0,1}:2, y {1}:4, z {1}:4
    assert_eq!(grid.col_permutation.as_slice(), &[1, 3, 4, 0, 2]);
    assert_eq!(grid.col_names, vec!["w", "y", "z", "v", "x"]);
    assert_eq!(
        grid.matrix.to_rows(),
        vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
            vec![1, 1, 1, 0, 0],
            vec![1, 1, 1, 0, 0],
        ]
    );
    Ok(())
}

#[test]
fn columns_pass_matches_column_only_mode() -> Result<()> {
    let m = LabelMatrix::from_rows(&[
        vec![2, 0, 2, 1],
        vec![0, 0, 2, 1],
        vec![2, 1, 1, 1],
    ])?;
    let rows = ["r0", "r1", "r2"];
    let cols = ["c0", "c1", "c2", "c3"];

    let both = arrange(&m, &rows, &cols, Mode::Both)?;
    let only_cols = arrange(&m, &rows, &cols, Mode::Columns)?;
    assert_eq!(both.col_permutation, only_cols.col_permutation);
    assert_eq!(both.col_names, only_cols.col_names);
    Ok(())
}

#[test]
fn gaps_in_label_values_are_ranked() -> Result<()> {
    // Labels 1 and 2 never occur but still get a rank.
    let m = LabelMatrix::from_rows(&[vec![3, 3], vec![0, 3]])?;
    let (table, ranking) = rank_labels(&m);
    assert_eq!(table.as_slice(), &[1, 0, 0, 3]);
    assert_eq!(ranking.as_slice(), &[3, 0, 1, 2]);

    let out = reorder_rows(&m, &["x", "y"])?;
    // Row y ties {0, 3}; label 3 ranks first and claims both rows.
    assert_eq!(out.permutation.as_slice(), &[0, 1]);
    Ok(())
}

#[test]
fn validation_happens_before_ordering() {
    let m = worked_example();
    assert!(matches!(
        reorder_both(&m, &["R0", "R1", "R2"], &["C0", "C1"]),
        Err(Error::NameCountMismatch {
            axis: Axis::Column,
            expected: 3,
            found: 2
        })
    ));
    assert!(matches!(
        reorder_columns(&m, &["C0", "C1", "C2", "C3"]),
        Err(Error::NameCountMismatch { found: 4, .. })
    ));

    // Oversized labels are rejected up front rather than overflowing the
    // frequency table later.
    assert!(matches!(
        LabelMatrix::from_f64_rows(&[vec![1e20, 0.0]]),
        Err(Error::LabelOutOfRange { row: 0, col: 0, .. })
    ));
    assert!(matches!(
        LabelMatrix::from_rows(&[vec![0u64, u64::MAX]]),
        Err(Error::LabelOutOfRange { col: 1, .. })
    ));

    let rows: Vec<Vec<i64>> = vec![];
    assert_eq!(LabelMatrix::from_rows(&rows), Err(Error::EmptyInput));
    assert!(matches!(
        LabelMatrix::from_rows(&[vec![1, -1]]),
        Err(Error::NegativeLabel { .. })
    ));
}

#[test]
fn palette_covers_every_label() {
    let m = LabelMatrix::from_rows(&[vec![0, 4], vec![2, 2]]).unwrap();
    let palette = PaletteGenerator::new().with_seed(11).generate(m.n_labels());
    assert_eq!(palette.len(), 5);
    for label in m.labels() {
        assert!(palette.color(label).is_some());
    }
    assert_eq!(FrequencyTable::from_matrix(&m).n_labels(), palette.len());
}

/// Strategy defined outside the crate: most distinct labels first.
struct MostDistinctFirst;

impl AxisOrdering for MostDistinctFirst {
    fn order(&self, matrix: &LabelMatrix, axis: Axis) -> Permutation {
        let mut order: Vec<usize> = (0..matrix.len_of(axis)).collect();
        order.sort_by_key(|&i| {
            let mut labels = matrix.line(axis, i).to_vec();
            labels.sort_unstable();
            labels.dedup();
            std::cmp::Reverse(labels.len())
        });
        Permutation::from_order(order)
    }

    fn name(&self) -> &'static str {
        "most-distinct"
    }
}

#[test]
fn custom_ordering_from_outside_the_crate() -> Result<()> {
    let m = LabelMatrix::from_rows(&[vec![0, 0, 0], vec![0, 1, 2], vec![1, 1, 0]])?;
    let out = reorder_axis(&m, &["a", "b", "c"], Axis::Row, &MostDistinctFirst)?;
    assert_eq!(out.permutation.as_slice(), &[1, 2, 0]);
    assert_eq!(out.names, vec!["b", "c", "a"]);

    let grid = reorder_axes(
        &m,
        &["a", "b", "c"],
        &["x", "y", "z"],
        &MostDistinctFirst,
        &KeepOrder,
    )?;
    assert_eq!(grid.row_names, vec!["b", "c", "a"]);
    assert!(grid.col_permutation.is_identity());
    Ok(())
}

#[test]
#[should_panic(expected = "placed twice")]
fn permutation_from_order_rejects_duplicates() {
    let _ = Permutation::from_order(vec![1, 1, 0]);
}
