// File: crates/bar-chart-core/tests/snapshot.rs
// Purpose: Repeat renders of the same scene decode to identical pixels.
// Behavior:
// - Renders a deterministic small chart to PNG bytes (labels off).
// - Compares decoded pixels, not encoded bytes, to avoid PNG encoder variance.

use bar_chart_core::raster::render_to_png_bytes;
use bar_chart_core::{recompute, ChartConfig, Record, RenderOptions, Size};

fn render_bytes() -> Vec<u8> {
    let records = vec![
        Record::new("Lion", "Carnivore", 80.0),
        Record::new("Zebra", "Herbivore", 65.0),
        Record::new("Bear", "Omnivore", 56.0),
        Record::new("Tortoise", "Herbivore", 0.3),
        Record::new("Lion", "Carnivore", 74.0),
    ];
    let scene = recompute(&records, Size::new(600.0, 400.0), &ChartConfig::default());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    render_to_png_bytes(&scene, &opts).expect("render bytes")
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn recomputed_scene_renders_identically() {
    let records = [Record::new("Lion", "Carnivore", 80.0), Record::new("Falcon", "Carnivore", 150.0)];
    let config = ChartConfig::default();
    let first = recompute(&records, Size::new(600.0, 400.0), &config);
    let again = recompute(&records, Size::new(600.0, 400.0), &config);
    assert_eq!(first, again);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let a = image::load_from_memory(&render_to_png_bytes(&first, &opts).expect("render a")).expect("decode a");
    let b = image::load_from_memory(&render_to_png_bytes(&again, &opts).expect("render b")).expect("decode b");
    assert_eq!(a.to_rgba8().as_raw(), b.to_rgba8().as_raw());
}
