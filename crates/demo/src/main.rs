// File: crates/demo/src/main.rs
// Summary: Demo loads an animal CSV (file or http(s) URL), mounts a surface and renders the speed chart to PNG.

use anyhow::{Context, Result};
use bar_chart_core::raster::render_to_png;
use bar_chart_core::theme;
use bar_chart_core::{ChartConfig, ChartMount, CsvSource, LoadOutcome, MountSurface, RenderOptions, ResourceLocator, Size};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_SIZE: Size = Size::new(800.0, 500.0);

fn main() -> Result<()> {
    init_logging();

    // Args: [LOCATOR] [WIDTHxHEIGHT] [OUT.png] [THEME]
    let mut args = std::env::args().skip(1);
    let locator = args
        .next()
        .map(|raw| ResourceLocator::parse(&raw))
        .unwrap_or_else(|| ResourceLocator::File(default_csv()));
    let container = match args.next() {
        Some(raw) => parse_size(&raw).with_context(|| format!("bad size '{raw}', expected WIDTHxHEIGHT"))?,
        None => DEFAULT_SIZE,
    };
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/animal_speed.png"));
    let theme = theme::find(&args.next().unwrap_or_default());

    tracing::info!(%locator, width = container.width, height = container.height, "loading chart data");

    let surface = MountSurface::new(container);
    let mut mount = ChartMount::new(ChartConfig::default(), surface.clone());
    let source = CsvSource::new(locator);
    let outcome = pollster::block_on(mount.load(&source))
        .with_context(|| format!("failed to load '{}'", source.locator))?;

    let LoadOutcome::Rendered { records } = outcome else {
        anyhow::bail!("chart was not rendered ({outcome:?})");
    };
    for err in mount.field_errors() {
        tracing::warn!("{err}");
    }

    let scene = surface.snapshot().context("mount has no scene after load")?;
    tracing::info!(
        records,
        bars = scene.bars().count(),
        primitives = scene.len(),
        warnings = scene.warnings.len(),
        "scene ready"
    );

    let opts = RenderOptions { theme, ..RenderOptions::default() };
    render_to_png(&scene, &opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn default_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_animals.csv")
}

/// Parse `800x500` (also accepts `X` and `,`).
fn parse_size(raw: &str) -> Result<Size> {
    let (w, h) = raw
        .split_once(['x', 'X', ','])
        .ok_or_else(|| anyhow::anyhow!("missing separator"))?;
    let w: f32 = w.trim().parse().context("width")?;
    let h: f32 = h.trim().parse().context("height")?;
    if !(w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0) {
        anyhow::bail!("size must be non-negative");
    }
    Ok(Size::new(w, h))
}
