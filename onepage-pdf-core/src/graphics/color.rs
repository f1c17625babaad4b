use crate::objects::format_real;
use std::fmt;

/// A fill colour for page graphics.
///
/// Components are in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue)
    Rgb(f64, f64, f64),
    /// Grayscale color from 0.0 (black) to 1.0 (white)
    Gray(f64),
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// White, as RGB so the page background is painted in DeviceRGB.
    pub fn white() -> Self {
        Color::Rgb(1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Color::Gray(0.0)
    }
}

/// Formats the non-stroking colour operator (`rg` or `g`).
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(
                f,
                "{} {} {} rg",
                format_real(*r),
                format_real(*g),
                format_real(*b)
            ),
            Color::Gray(value) => write!(f, "{} g", format_real(*value)),
        }
    }
}
