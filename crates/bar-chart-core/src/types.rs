// File: crates/bar-chart-core/src/types.rs
// Summary: Shared sizes and margins, plus the default layout constants.

/// Minimum drawable width in pixels.
pub const MIN_WIDTH: f32 = 600.0;
/// Minimum drawable height in pixels.
pub const MIN_HEIGHT: f32 = 400.0;
/// Extra surface width beyond the drawable width (room for the legend).
pub const SURFACE_EXTRA_WIDTH: f32 = 50.0;
/// Extra surface height beyond the drawable height (room for rotated labels).
pub const SURFACE_EXTRA_HEIGHT: f32 = 100.0;

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(70.0, 60.0, 80.0, 100.0)
    }
}
