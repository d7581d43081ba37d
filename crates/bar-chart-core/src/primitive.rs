// File: crates/bar-chart-core/src/primitive.rs
// Summary: Drawable primitives and the scene graph one pipeline run produces.

use skia_safe as skia;

use crate::config::OverflowPolicy;
use crate::error::DataIntegrityWarning;
use crate::geometry::{Point, Rect};
use crate::types::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    /// Category axis along the bottom of the plot.
    Bottom,
    /// Value axis along the left of the plot.
    Left,
}

/// Horizontal text anchor, in the text's own (possibly rotated) frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Index of the record this bar was generated from.
    pub record: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: skia::Color,
}

impl Bar {
    pub fn rect(&self) -> Rect {
        Rect::from_ltwh(self.x, self.y, self.width, self.height)
    }

    /// The part of the bar to paint inside a plot of `drawable_height`, or
    /// `None` when nothing should be painted.
    pub fn visible_rect(&self, policy: OverflowPolicy, drawable_height: f32) -> Option<Rect> {
        let r = self.rect();
        if !r.is_drawable() {
            return None;
        }
        let inside = r.top >= -PLOT_EPSILON && r.bottom <= drawable_height + PLOT_EPSILON;
        if inside {
            return Some(r);
        }
        match policy {
            OverflowPolicy::Overflow => Some(r),
            OverflowPolicy::Skip => None,
            OverflowPolicy::Clamp => {
                let clipped = Rect::from_ltrb(r.left, r.top.max(0.0), r.right, r.bottom.min(drawable_height));
                clipped.is_drawable().then_some(clipped)
            }
        }
    }
}

/// Rounding slack when deciding whether a bar stays inside the plot box.
const PLOT_EPSILON: f32 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub axis: AxisSide,
    /// Pixel offset along the axis (x for `Bottom`, y for `Left`).
    pub position: f32,
    pub label: String,
    pub rotation_degrees: f32,
    pub anchor: TextAnchor,
    /// Translation applied to the label before rotating it.
    pub label_offset: Point,
}

impl AxisTick {
    /// Point on the axis line where the tick sits, given the drawable height.
    pub fn anchor_point(&self, drawable_height: f32) -> Point {
        match self.axis {
            AxisSide::Bottom => Point::new(self.position, drawable_height),
            AxisSide::Left => Point::new(0.0, self.position),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub anchor_point: Point,
    pub rotation_degrees: f32,
    pub anchor: TextAnchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub marker_color: skia::Color,
    pub label: String,
    /// Marker circle center.
    pub position: Point,
    pub marker_radius: f32,
    /// Label start, vertically centered on `y`.
    pub label_position: Point,
    pub font_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Bar(Bar),
    AxisTick(AxisTick),
    AxisLabel(AxisLabel),
    LegendEntry(LegendEntry),
}

/// Output of one pipeline run. Primitive order: Bar -> AxisTick -> AxisLabel -> LegendEntry.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SceneGraph {
    /// Size of the drawing surface (drawable + extra).
    pub surface_size: Size,
    /// Plot size the scales were built over.
    pub drawable: Size,
    pub primitives: Vec<Primitive>,
    pub warnings: Vec<DataIntegrityWarning>,
    /// How bars reaching outside the plot box get painted.
    pub overflow: OverflowPolicy,
}

impl SceneGraph {
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Bar(b) => Some(b),
            _ => None,
        })
    }

    pub fn ticks(&self, axis: AxisSide) -> impl Iterator<Item = &AxisTick> {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::AxisTick(t) if t.axis == axis => Some(t),
            _ => None,
        })
    }

    pub fn axis_labels(&self) -> impl Iterator<Item = &AxisLabel> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::AxisLabel(l) => Some(l),
            _ => None,
        })
    }

    pub fn legend(&self) -> impl Iterator<Item = &LegendEntry> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::LegendEntry(e) => Some(e),
            _ => None,
        })
    }

    pub fn len(&self) -> usize { self.primitives.len() }
    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }
}
