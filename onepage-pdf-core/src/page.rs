#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page dimensions in points (1/72 inch).
///
/// Both dimensions are trusted configuration: they are expected to be strictly
/// positive and are not validated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageSize {
    /// Page width
    pub width: f64,
    /// Page height
    pub height: f64,
}

impl PageSize {
    /// Creates a page size from a width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// US Letter (612 x 792 points).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// A4 (595 x 842 points).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::letter()
    }
}

/// Page margins in points used by the layout engine.
///
/// Text starts at `left`; the cursor starts `top` below the page's top edge
/// and may never pass below `bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    /// Left margin
    pub left: f64,
    /// Top margin
    pub top: f64,
    /// Bottom margin
    pub bottom: f64,
}

impl Margins {
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            bottom: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(54.0) // 0.75 inch
    }
}
