// File: crates/bar-chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use bar_chart_core::raster::render_to_rgba8;
use bar_chart_core::{recompute, ChartConfig, OverflowPolicy, Record, RenderOptions, Size};

#[test]
fn render_rgba8_buffer() {
    let scene = recompute(&[Record::new("Lion", "Carnivore", 120.0)], Size::new(600.0, 400.0), &ChartConfig::default());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = render_to_rgba8(&scene, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);

    // Middle of the single full-height bar is pure red.
    let (bx, by) = (opts.bleed.left as usize + 300, opts.bleed.top as usize + 200);
    let i = by * stride + bx * 4;
    assert_eq!(&px[i..i + 4], &[255, 0, 0, 255]);
}

fn pixel_above_plot_top(config: &ChartConfig) -> [u8; 4] {
    let scene = recompute(&[Record::new("Falcon", "Carnivore", 150.0)], Size::new(600.0, 400.0), config);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _, _, stride) = render_to_rgba8(&scene, &opts).expect("rgba render");

    // Scene point (300, -5): band middle, 5px above the plot top.
    let (bx, by) = (opts.bleed.left as usize + 300, opts.bleed.top as usize - 5);
    let i = by * stride + bx * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn out_of_domain_bar_stays_inside_plot_by_default() {
    assert_ne!(pixel_above_plot_top(&ChartConfig::default()), [255, 0, 0, 255]);

    let skip = ChartConfig { overflow: OverflowPolicy::Skip, ..ChartConfig::default() };
    assert_ne!(pixel_above_plot_top(&skip), [255, 0, 0, 255]);

    let overflow = ChartConfig { overflow: OverflowPolicy::Overflow, ..ChartConfig::default() };
    assert_eq!(pixel_above_plot_top(&overflow), [255, 0, 0, 255]);
}
