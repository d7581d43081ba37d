// File: crates/bar-chart-core/src/config.rs
// Summary: Chart configuration; every layout/scale/palette literal is a named, overridable field.

use crate::geometry::Point;
use crate::scale::DEFAULT_BAND_PADDING;
use crate::theme::Palette;
use crate::types::{Margins, Size, MIN_HEIGHT, MIN_WIDTH, SURFACE_EXTRA_HEIGHT, SURFACE_EXTRA_WIDTH};

/// Source column names for the three fields a record is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: String,
    pub group: String,
    pub value: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: "Animal".to_string(),
            group: "Diet".to_string(),
            value: "Average Speed (km/h)".to_string(),
        }
    }
}

/// How the rasterizer paints a bar that reaches outside the plot box.
///
/// The scene always keeps the unclamped geometry and an `OutOfDomain`
/// warning; the policy only decides what gets painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Clip the bar to the plot box `[0, drawable_height]`.
    #[default]
    Clamp,
    /// Don't paint the bar.
    Skip,
    /// Paint as generated; bars above the domain max extend past the plot top.
    Overflow,
}

/// Legend placement, relative to the right edge of the drawable width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    /// Marker center is `drawable_width - marker_inset`.
    pub marker_inset: f32,
    /// Label start is `drawable_width - label_inset`.
    pub label_inset: f32,
    /// Marker center y of the first row.
    pub first_row_y: f32,
    pub row_spacing: f32,
    /// Label y relative to the marker center.
    pub label_dy: f32,
    pub marker_radius: f32,
    pub font_size: f32,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            marker_inset: 160.0,
            label_inset: 150.0,
            first_row_y: 10.0,
            row_spacing: 30.0,
            label_dy: 5.0,
            marker_radius: 6.0,
            font_size: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub min_width: f32,
    pub min_height: f32,
    /// Only `bottom` participates in layout (x-axis title offset). The
    /// margins are not subtracted from the scale ranges.
    pub margins: Margins,
    /// Added to the drawable size to get the surface size.
    pub surface_extra: Size,
    /// Fixed value-axis domain; never derived from the data.
    pub value_domain: (f64, f64),
    pub value_tick_count: usize,
    /// Band padding fraction, clamped to `[0, 1]`. Non-finite values fall
    /// back to the default.
    pub band_padding: f32,
    pub category_label_rotation: f32,
    pub category_label_offset: Point,
    pub x_title: String,
    /// Gap between the bottom margin and the x-axis title.
    pub x_title_gap: f32,
    pub y_title: String,
    /// Horizontal distance of the y-axis title left of the axis.
    pub y_title_offset: f32,
    pub palette: Palette,
    pub columns: ColumnMap,
    pub legend: LegendLayout,
    pub overflow: OverflowPolicy,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
            margins: Margins::default(),
            surface_extra: Size::new(SURFACE_EXTRA_WIDTH, SURFACE_EXTRA_HEIGHT),
            value_domain: (0.0, 120.0),
            value_tick_count: 10,
            band_padding: DEFAULT_BAND_PADDING,
            category_label_rotation: -45.0,
            category_label_offset: Point::new(-10.0, 0.0),
            x_title: "Animal Names".to_string(),
            x_title_gap: 10.0,
            y_title: "Average Speed (km/h)".to_string(),
            y_title_offset: 30.0,
            palette: Palette::default(),
            columns: ColumnMap::default(),
            legend: LegendLayout::default(),
            overflow: OverflowPolicy::default(),
        }
    }
}
