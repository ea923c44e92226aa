//! Drawing an arranged grid to an image file.
//!
//! One filled cell per matrix entry, colored by label. Column names run
//! along the top edge, rotated; row names sit to the left. The backend is
//! picked from the file extension: `.svg` writes SVG, anything else goes
//! through the bitmap backend (PNG for `.png`).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::error::{Error, Result};
use crate::grid::GridReordering;
use crate::palette::{Palette, Rgb};

/// Image layout.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Outer margin in pixels.
    pub margin: u32,
    /// Room reserved for row names (left) and column names (top).
    pub label_area: u32,
    /// Font size of the tick labels.
    pub font_size: f64,
    /// Font family of the tick labels.
    pub font_family: String,
    /// Fill for labels missing from the palette.
    pub fallback: Rgb,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1600,
            margin: 10,
            label_area: 160,
            font_size: 12.0,
            font_family: "sans-serif".to_string(),
            fallback: Rgb {
                r: 128,
                g: 128,
                b: 128,
            },
        }
    }
}

impl PlotConfig {
    /// Set image size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set tick label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set room reserved for names.
    pub fn with_label_area(mut self, label_area: u32) -> Self {
        self.label_area = label_area;
        self
    }
}

/// Render `grid` with `palette` and write it to `path`.
pub fn render_grid(
    grid: &GridReordering,
    palette: &Palette,
    config: &PlotConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let size = (config.width, config.height);
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    let drawn = if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw(&root, grid, palette, config)
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw(&root, grid, palette, config)
    };
    drawn?;

    log::info!(
        "wrote {}x{} grid to {}",
        grid.matrix.n_rows(),
        grid.matrix.n_cols(),
        path.display()
    );
    Ok(())
}

fn plot_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grid: &GridReordering,
    palette: &Palette,
    config: &PlotConfig,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (n_row, n_col) = grid.matrix.shape();
    let left = (config.margin + config.label_area) as f64;
    let top = (config.margin + config.label_area) as f64;
    let grid_w = (config.width as f64 - left - config.margin as f64).max(1.0);
    let grid_h = (config.height as f64 - top - config.margin as f64).max(1.0);
    let cell_w = grid_w / n_col as f64;
    let cell_h = grid_h / n_row as f64;

    let x_at = |j: usize| (left + j as f64 * cell_w).round() as i32;
    let y_at = |i: usize| (top + i as f64 * cell_h).round() as i32;

    for (i, row) in grid.matrix.lines(crate::matrix::Axis::Row).enumerate() {
        for (j, &label) in row.iter().enumerate() {
            let rgb = palette.color(label).unwrap_or(config.fallback);
            let fill = RGBColor(rgb.r, rgb.g, rgb.b).filled();
            root.draw(&Rectangle::new([(x_at(j), y_at(i)), (x_at(j + 1), y_at(i + 1))], fill))
                .map_err(plot_err)?;
        }
    }

    let font = (config.font_family.as_str(), config.font_size).into_font();

    let row_style = TextStyle::from(font.clone()).pos(Pos::new(HPos::Right, VPos::Center));
    for (i, name) in grid.row_names.iter().enumerate() {
        let y = ((y_at(i) + y_at(i + 1)) as f64 / 2.0).round() as i32;
        root.draw(&Text::new(name.as_str(), (left as i32 - 4, y), row_style.clone()))
            .map_err(plot_err)?;
    }

    let col_style = TextStyle::from(font.transform(FontTransform::Rotate270))
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (j, name) in grid.col_names.iter().enumerate() {
        let x = ((x_at(j) + x_at(j + 1)) as f64 / 2.0).round() as i32;
        root.draw(&Text::new(name.as_str(), (x, top as i32 - 4), col_style.clone()))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{arrange, Mode};
    use crate::matrix::LabelMatrix;
    use crate::palette::PaletteGenerator;

    #[test]
    fn test_render_svg() {
        let m = LabelMatrix::from_rows(&[vec![0i64, 0, 1], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
        let grid = arrange(&m, &["R0", "R1", "R2"], &["C0", "C1", "C2"], Mode::Both).unwrap();
        let palette = PaletteGenerator::new().with_seed(3).generate(m.n_labels());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order2.svg");
        let config = PlotConfig::default().with_size(300, 300).with_label_area(40);
        render_grid(&grid, &palette, &config, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("R2"));
        assert!(svg.contains("C1"));
    }
}
