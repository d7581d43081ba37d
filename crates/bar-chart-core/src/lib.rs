// File: crates/bar-chart-core/src/lib.rs
// Summary: Core library entry point; exports the load -> normalize -> scene -> surface pipeline.

pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod mount;
pub mod primitive;
pub mod raster;
pub mod record;
pub mod scale;
pub mod source;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::recompute;
pub use config::{ChartConfig, ColumnMap, LegendLayout, OverflowPolicy};
pub use error::{DataIntegrityWarning, LoadError, PartialFieldError};
pub use layout::Layout;
pub use mount::{ChartMount, LoadOutcome};
pub use primitive::{AxisLabel, AxisSide, AxisTick, Bar, LegendEntry, Primitive, SceneGraph, TextAnchor};
pub use raster::RenderOptions;
pub use record::{normalize, Normalized, Record};
pub use scale::{BandScale, ValueScale};
pub use source::{CsvSource, RawRow, ResourceLocator, SourceLoader};
pub use surface::{DrawingSurface, MountSurface, RetainedSurface};
pub use text::TextShaper;
pub use theme::Palette;
pub use types::{Margins, Size};
