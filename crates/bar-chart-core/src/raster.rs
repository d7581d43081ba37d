// File: crates/bar-chart-core/src/raster.rs
// Summary: Headless rasterizing of a scene graph (PNG file/bytes, RGBA8) using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::geometry::Point;
use crate::primitive::{AxisLabel, AxisSide, AxisTick, Bar, LegendEntry, Primitive, SceneGraph, TextAnchor};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::Margins;

/// Tick marks are 6px; labels sit 3px past the tick.
const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;

pub struct RenderOptions {
    pub theme: Theme,
    /// Raster pixels added around the surface. Scene content with negative
    /// coordinates (the y-axis title, value tick labels) lands in this band.
    pub bleed: Margins,
    pub draw_labels: bool,
    pub tick_font_size: f32,
    pub title_font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            bleed: Margins::new(10.0, 0.0, 0.0, 100.0),
            draw_labels: true,
            tick_font_size: 10.0,
            title_font_size: 16.0,
        }
    }
}

impl RenderOptions {
    /// Raster dimensions for `scene`: surface size plus bleed, rounded up.
    pub fn raster_size(&self, scene: &SceneGraph) -> (i32, i32) {
        let w = (scene.surface_size.width + self.bleed.hsum()).ceil().max(1.0) as i32;
        let h = (scene.surface_size.height + self.bleed.vsum()).ceil().max(1.0) as i32;
        (w, h)
    }
}

/// Render the scene to a PNG at `output_png_path`.
pub fn render_to_png(
    scene: &SceneGraph,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render the scene to in-memory PNG bytes.
pub fn render_to_png_bytes(scene: &SceneGraph, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = paint(scene, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(scene: &SceneGraph, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = paint(scene, opts)?;
    let (w, h) = opts.raster_size(scene);
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} raster failed");
    }
    Ok((pixels, w as u32, h as u32, stride))
}

fn paint(scene: &SceneGraph, opts: &RenderOptions) -> Result<skia::Surface> {
    let (w, h) = opts.raster_size(scene);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);
    canvas.translate((opts.bleed.left, opts.bleed.top));

    let shaper = opts.draw_labels.then(TextShaper::new);
    let drawable_height = scene.drawable.height;

    draw_axis_domains(canvas, scene, &opts.theme);
    for p in &scene.primitives {
        match p {
            Primitive::Bar(b) => draw_bar(canvas, b, scene),
            Primitive::AxisTick(t) => draw_tick(canvas, t, drawable_height, opts, shaper.as_ref()),
            Primitive::AxisLabel(l) => {
                if let Some(shaper) = &shaper {
                    draw_axis_label(canvas, l, opts, shaper);
                }
            }
            Primitive::LegendEntry(e) => draw_legend_entry(canvas, e, opts, shaper.as_ref()),
        }
    }
    Ok(surface)
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Axis domain lines, capped with outer ticks at both ends.
fn draw_axis_domains(canvas: &skia::Canvas, scene: &SceneGraph, theme: &Theme) {
    let (w, h) = (scene.drawable.width, scene.drawable.height);
    let paint = stroke(theme.axis_line, 1.0);

    let mut bottom = skia::Path::new();
    bottom.move_to((0.0, h + TICK_SIZE));
    bottom.line_to((0.0, h));
    bottom.line_to((w, h));
    bottom.line_to((w, h + TICK_SIZE));
    canvas.draw_path(&bottom, &paint);

    let mut left = skia::Path::new();
    left.move_to((-TICK_SIZE, h));
    left.line_to((0.0, h));
    left.line_to((0.0, 0.0));
    left.line_to((-TICK_SIZE, 0.0));
    canvas.draw_path(&left, &paint);
}

fn draw_bar(canvas: &skia::Canvas, bar: &Bar, scene: &SceneGraph) {
    let Some(r) = bar.visible_rect(scene.overflow, scene.drawable.height) else {
        tracing::trace!(record = bar.record, "bar not painted");
        return;
    };
    canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &fill(bar.fill));
}

fn draw_tick(
    canvas: &skia::Canvas,
    tick: &AxisTick,
    drawable_height: f32,
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) {
    let at = tick.anchor_point(drawable_height);
    let paint = stroke(opts.theme.axis_line, 1.0);
    let (end, baseline_dy) = match tick.axis {
        AxisSide::Bottom => (
            Point::new(at.x, at.y + TICK_SIZE),
            TICK_SIZE + TICK_PADDING + 0.71 * opts.tick_font_size,
        ),
        AxisSide::Left => (Point::new(at.x - TICK_SIZE, at.y), 0.32 * opts.tick_font_size),
    };
    canvas.draw_line((at.x, at.y), (end.x, end.y), &paint);

    let Some(shaper) = shaper else { return };
    let origin = match tick.axis {
        AxisSide::Bottom => at.offset(tick.label_offset),
        AxisSide::Left => Point::new(at.x - TICK_SIZE - TICK_PADDING, at.y).offset(tick.label_offset),
    };
    shaper.draw_anchored(
        canvas,
        &tick.label,
        origin,
        baseline_dy,
        tick.rotation_degrees,
        tick.anchor,
        opts.tick_font_size,
        opts.theme.axis_label,
    );
}

fn draw_axis_label(canvas: &skia::Canvas, label: &AxisLabel, opts: &RenderOptions, shaper: &TextShaper) {
    shaper.draw_anchored(
        canvas,
        &label.text,
        label.anchor_point,
        0.0,
        label.rotation_degrees,
        label.anchor,
        opts.title_font_size,
        opts.theme.title,
    );
}

fn draw_legend_entry(canvas: &skia::Canvas, entry: &LegendEntry, opts: &RenderOptions, shaper: Option<&TextShaper>) {
    canvas.draw_circle((entry.position.x, entry.position.y), entry.marker_radius, &fill(entry.marker_color));
    if let Some(shaper) = shaper {
        // alignment-baseline: middle
        shaper.draw_anchored(
            canvas,
            &entry.label,
            entry.label_position,
            entry.font_size * 0.35,
            0.0,
            TextAnchor::Start,
            entry.font_size,
            opts.theme.title,
        );
    }
}
