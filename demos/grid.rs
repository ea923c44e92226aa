use comgrid::{arrange, LabelMatrix, Mode, PaletteGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Communities of (country, sector) pairs: rows are countries, columns
    // are sectors. Labels 1 and 2 form two blocks hidden by the input order.
    let rows = ["AUS", "BRA", "CHN", "DEU", "FRA", "JPN"];
    let cols = ["agr", "min", "man", "ele", "con", "trd", "fin"];
    let matrix = LabelMatrix::from_rows(&[
        vec![2, 0, 2, 2, 0, 2, 2],
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![1, 1, 1, 0, 1, 1, 1],
        vec![2, 2, 2, 2, 0, 2, 1],
        vec![1, 1, 1, 1, 1, 0, 1],
        vec![2, 2, 1, 2, 2, 2, 2],
    ])?;

    for mode in [Mode::Original, Mode::Rows, Mode::Columns, Mode::Both] {
        let grid = arrange(&matrix, &rows, &cols, mode)?;
        println!("{mode:?}");
        println!("      {}", grid.col_names.join(" "));
        for (name, row) in grid.row_names.iter().zip(grid.matrix.to_rows()) {
            let cells: Vec<String> = row.iter().map(|l| format!("{l:>3}")).collect();
            println!("  {name} {}", cells.join(" "));
        }
        println!();
    }

    let palette = PaletteGenerator::new().with_seed(2016).generate(matrix.n_labels());
    for (label, color) in palette.colors().iter().enumerate() {
        println!("label {label}: {}", color.to_hex());
    }

    Ok(())
}
