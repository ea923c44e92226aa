use comgrid::{arrange, render_grid, LabelMatrix, Mode, PaletteGenerator, PlotConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Renders the same 30x20 block matrix in original and fully reordered
    // form. This example is gated behind `required-features = ["plot"]`.
    let n_row = 30;
    let n_col = 20;
    let rows: Vec<String> = (0..n_row).map(|i| format!("row{i:02}")).collect();
    let cols: Vec<String> = (0..n_col).map(|j| format!("col{j:02}")).collect();
    let data: Vec<Vec<i64>> = (0..n_row)
        .map(|i| {
            (0..n_col)
                .map(|j| (((i * 7) % 5 + (j * 3) % 4) % 5) as i64)
                .collect()
        })
        .collect();
    let matrix = LabelMatrix::from_rows(&data)?;

    let palette = PaletteGenerator::new().with_seed(7).generate(matrix.n_labels());
    let config = PlotConfig::default().with_size(1000, 1200);

    for (mode, file) in [(Mode::Original, "original.png"), (Mode::Both, "order2.png")] {
        let grid = arrange(&matrix, &rows, &cols, mode)?;
        render_grid(&grid, &palette, &config, file)?;
        println!("{mode:?} -> {file}");
    }

    Ok(())
}
