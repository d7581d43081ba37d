// File: crates/bar-chart-core/src/chart.rs
// Summary: Primitive generator; turns records + container size into a complete scene graph.

use std::collections::HashMap;

use crate::config::ChartConfig;
use crate::error::DataIntegrityWarning;
use crate::geometry::Point;
use crate::layout::Layout;
use crate::primitive::{AxisLabel, AxisSide, AxisTick, Bar, LegendEntry, Primitive, SceneGraph, TextAnchor};
use crate::record::Record;
use crate::scale::{format_tick, tick_step, BandScale, ValueScale};
use crate::types::Size;

/// Run layout, scales, classification and primitive generation for one dataset.
///
/// Pure apart from logging: same inputs give the same scene. Bars with
/// non-finite or negative geometry are left out and reported in
/// `SceneGraph::warnings` instead. Out-of-domain bars keep their raw
/// geometry; `config.overflow` travels with the scene to the rasterizer.
pub fn recompute(records: &[Record], container: Size, config: &ChartConfig) -> SceneGraph {
    let layout = Layout::measure(container, config);
    let (width, height) = (layout.drawable.width, layout.drawable.height);

    let x = BandScale::new(records.iter().map(|r| r.name.as_str()), (0.0, width), config.band_padding);
    let (vmin, vmax) = config.value_domain;
    let y = ValueScale::new_linear(0.0, height, vmin, vmax);

    let mut warnings = duplicate_names(records);
    let mut primitives = Vec::with_capacity(records.len() * 2 + 20);

    primitives.extend(bars(records, &x, &y, height, config, &mut warnings).map(Primitive::Bar));
    primitives.extend(category_ticks(&x, config).map(Primitive::AxisTick));
    primitives.extend(value_ticks(&y, config).map(Primitive::AxisTick));
    primitives.extend(axis_labels(&layout, config).map(Primitive::AxisLabel));
    primitives.extend(legend_entries(width, config).map(Primitive::LegendEntry));

    for w in &warnings {
        tracing::warn!(warning = %w, "data integrity");
    }
    tracing::trace!(
        records = records.len(),
        primitives = primitives.len(),
        warnings = warnings.len(),
        "scene rebuilt at {}x{}",
        width,
        height
    );

    SceneGraph {
        surface_size: layout.surface,
        drawable: layout.drawable,
        primitives,
        warnings,
        overflow: config.overflow,
    }
}

fn bars<'a>(
    records: &'a [Record],
    x: &'a BandScale,
    y: &'a ValueScale,
    height: f32,
    config: &'a ChartConfig,
    warnings: &'a mut Vec<DataIntegrityWarning>,
) -> impl Iterator<Item = Bar> + 'a {
    records.iter().enumerate().filter_map(move |(index, r)| {
        let name = || r.name.clone();
        let bx = x.position(&r.name).unwrap_or_else(|| {
            warnings.push(DataIntegrityWarning::UnresolvedName { index, name: name() });
            0.0
        });
        let top = y.to_px(r.value);
        if !top.is_finite() {
            warnings.push(DataIntegrityWarning::NonFiniteValue { index, name: name() });
            return None;
        }
        if !y.contains(r.value) {
            warnings.push(DataIntegrityWarning::OutOfDomain {
                index,
                name: name(),
                value: r.value,
                min: y.vmin,
                max: y.vmax,
            });
        }
        let bar_height = height - top;
        if bar_height < 0.0 {
            warnings.push(DataIntegrityWarning::NegativeHeight { index, name: name(), height: bar_height });
            return None;
        }
        Some(Bar {
            record: index,
            x: bx,
            y: top,
            width: x.bandwidth(),
            height: bar_height,
            fill: config.palette.classify(&r.group),
        })
    })
}

fn duplicate_names(records: &[Record]) -> Vec<DataIntegrityWarning> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for r in records {
        let c = counts.entry(r.name.as_str()).or_insert(0);
        if *c == 1 {
            order.push(r.name.as_str());
        }
        *c += 1;
    }
    order
        .into_iter()
        .map(|name| DataIntegrityWarning::DuplicateName { name: name.to_string(), count: counts[name] })
        .collect()
}

fn category_ticks<'a>(x: &'a BandScale, config: &'a ChartConfig) -> impl Iterator<Item = AxisTick> + 'a {
    x.domain().iter().filter_map(move |name| {
        x.center(name).map(|position| AxisTick {
            axis: AxisSide::Bottom,
            position,
            label: name.clone(),
            rotation_degrees: config.category_label_rotation,
            anchor: TextAnchor::End,
            label_offset: config.category_label_offset,
        })
    })
}

fn value_ticks(y: &ValueScale, config: &ChartConfig) -> impl Iterator<Item = AxisTick> {
    let step = tick_step(y.vmin, y.vmax, config.value_tick_count).unwrap_or(1.0);
    let scale = *y;
    y.ticks(config.value_tick_count).into_iter().map(move |v| AxisTick {
        axis: AxisSide::Left,
        position: scale.to_px(v),
        label: format_tick(v, step),
        rotation_degrees: 0.0,
        anchor: TextAnchor::End,
        label_offset: Point::default(),
    })
}

fn axis_labels(layout: &Layout, config: &ChartConfig) -> impl Iterator<Item = AxisLabel> {
    [
        AxisLabel {
            text: config.x_title.clone(),
            anchor_point: layout.x_title_anchor(config.x_title_gap),
            rotation_degrees: 0.0,
            anchor: TextAnchor::Middle,
        },
        AxisLabel {
            text: config.y_title.clone(),
            anchor_point: layout.y_title_anchor(config.y_title_offset),
            rotation_degrees: -90.0,
            anchor: TextAnchor::Middle,
        },
    ]
    .into_iter()
}

fn legend_entries(width: f32, config: &ChartConfig) -> impl Iterator<Item = LegendEntry> {
    let l = config.legend;
    config.palette.legend().into_iter().enumerate().map(move |(row, (label, color))| {
        let cy = l.first_row_y + row as f32 * l.row_spacing;
        LegendEntry {
            marker_color: color,
            label: label.to_string(),
            position: Point::new(width - l.marker_inset, cy),
            marker_radius: l.marker_radius,
            label_position: Point::new(width - l.label_inset, cy + l.label_dy),
            font_size: l.font_size,
        }
    })
}
