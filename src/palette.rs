//! One distinct color per community label.
//!
//! Hues are spread evenly over 90% of the color wheel, so label `i` of `n`
//! gets hue `(i + 1) * 0.9 / n` and neighbouring labels stay apart without
//! the last hue wrapping back onto the first. Lightness and saturation are
//! drawn at random for extra contrast between labels of similar hue.
//!
//! ```rust
//! use comgrid::palette::PaletteGenerator;
//!
//! let palette = PaletteGenerator::new().with_seed(7).generate(4);
//! assert_eq!(palette.len(), 4);
//! assert!(palette.color(3).is_some());
//! assert!(palette.color(4).is_none());
//! ```

use rand::prelude::*;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A hue / lightness / saturation triple, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue as a fraction of the full circle.
    pub hue: f64,
    /// Lightness.
    pub lightness: f64,
    /// Saturation.
    pub saturation: f64,
}

impl Hls {
    /// Convert to 8-bit RGB.
    pub fn to_rgb(self) -> Rgb {
        let (h, l, s) = (self.hue, self.lightness, self.saturation);
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let m1 = 2.0 * l - m2;
            (
                hue_channel(m1, m2, h + 1.0 / 3.0),
                hue_channel(m1, m2, h),
                hue_channel(m1, m2, h - 1.0 / 3.0),
            )
        };
        Rgb {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn to_byte(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Builds palettes.
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    /// Fraction of the hue circle the labels are spread over.
    hue_span: f64,
    /// Random seed.
    seed: Option<u64>,
}

impl PaletteGenerator {
    /// Create a generator spreading hues over 90% of the circle.
    pub fn new() -> Self {
        Self {
            hue_span: 0.9,
            seed: None,
        }
    }

    /// Set the fraction of the hue circle to use; clamped to `[0, 1]`.
    pub fn with_hue_span(mut self, hue_span: f64) -> Self {
        self.hue_span = hue_span.clamp(0.0, 1.0);
        self
    }

    /// Set random seed for reproducible palettes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate colors for labels `0..n_labels`.
    pub fn generate(&self, n_labels: usize) -> Palette {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let step = if n_labels == 0 {
            0.0
        } else {
            self.hue_span / n_labels as f64
        };
        let hls: Vec<Hls> = (0..n_labels)
            .map(|i| Hls {
                hue: step * (i + 1) as f64,
                lightness: rng.random::<f64>(),
                saturation: rng.random::<f64>(),
            })
            .collect();
        let colors = hls.iter().map(|c| c.to_rgb()).collect();

        log::debug!("generated palette of {n_labels} colors");
        Palette { hls, colors }
    }
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors indexed by label.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    hls: Vec<Hls>,
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from explicit colors.
    pub fn from_colors(colors: Vec<Rgb>) -> Self {
        Self {
            hls: Vec::new(),
            colors,
        }
    }

    /// Color of `label`.
    pub fn color(&self, label: usize) -> Option<Rgb> {
        self.colors.get(label).copied()
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True for a palette with no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors indexed by label.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// HLS triples the colors were generated from; empty for palettes
    /// built with [`Palette::from_colors`].
    pub fn hls(&self) -> &[Hls] {
        &self.hls
    }
}
