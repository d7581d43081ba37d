// File: crates/bar-chart-core/src/layout.rs
// Summary: Drawable size from the measured container, with minimum floors and fixed margins.

use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::types::{Margins, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Scale ranges span the full drawable size; margins are not inset.
    pub drawable: Size,
    pub margins: Margins,
    pub surface: Size,
}

impl Layout {
    /// `max(measured, floor)` per dimension. A NaN measurement takes the floor.
    pub fn measure(container: Size, config: &ChartConfig) -> Self {
        let drawable = Size::new(
            container.width.max(config.min_width),
            container.height.max(config.min_height),
        );
        Self {
            drawable,
            margins: config.margins,
            surface: Size::new(
                drawable.width + config.surface_extra.width,
                drawable.height + config.surface_extra.height,
            ),
        }
    }

    /// Bottom-centered x-axis title position.
    pub fn x_title_anchor(&self, gap: f32) -> Point {
        Point::new(self.drawable.width / 2.0, self.drawable.height + self.margins.bottom + gap)
    }

    /// Left y-axis title position (before its -90 degree rotation).
    pub fn y_title_anchor(&self, offset: f32) -> Point {
        Point::new(-offset, self.drawable.height / 2.0)
    }
}
