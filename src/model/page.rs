//! Page geometry.

use serde::{Deserialize, Serialize};

/// Millimetres per PostScript point (1 pt = 1/72 inch).
pub const POINTS_TO_MM: f64 = 0.352778;

/// Physical page dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width in points (1 point = 1/72 inch)
    pub width: f64,

    /// Page height in points
    pub height: f64,
}

impl PageSize {
    /// Create a page size from point dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Build from a `[x0 y0 x1 y1]` rectangle; corners may come in any order.
    pub fn from_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new((x1 - x0).abs(), (y1 - y0).abs())
    }

    /// Width in millimetres.
    pub fn width_mm(&self) -> f64 {
        self.width * POINTS_TO_MM
    }

    /// Height in millimetres.
    pub fn height_mm(&self) -> f64 {
        self.height * POINTS_TO_MM
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::letter()
    }
}
