// File: crates/bar-chart-core/src/mount.rs
// Summary: Pipeline state for one mount: one-shot load, dataset/resize events, clear-and-redraw runs.

use crate::chart::recompute;
use crate::config::ChartConfig;
use crate::error::{LoadError, PartialFieldError};
use crate::record::{normalize, Record};
use crate::source::SourceLoader;
use crate::surface::{DrawingSurface, MountSurface, RetainedSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows were normalized and the chart drawn.
    Rendered { records: usize },
    /// This mount already fetched once; nothing was fetched.
    AlreadyLoaded,
    /// The fetch resolved after the mount was torn down; the rows were dropped.
    Detached,
}

pub struct ChartMount<S: DrawingSurface = RetainedSurface> {
    config: ChartConfig,
    surface: MountSurface<S>,
    records: Vec<Record>,
    field_errors: Vec<PartialFieldError>,
    fetched: bool,
}

impl<S: DrawingSurface> ChartMount<S> {
    /// Nothing is drawn until data arrives via [`ChartMount::load`] or [`ChartMount::set_records`].
    pub fn new(config: ChartConfig, surface: MountSurface<S>) -> Self {
        Self { config, surface, records: Vec::new(), field_errors: Vec::new(), fetched: false }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn surface(&self) -> &MountSurface<S> { &self.surface }
    pub fn records(&self) -> &[Record] { &self.records }
    /// Parse issues from the last load.
    pub fn field_errors(&self) -> &[PartialFieldError] { &self.field_errors }

    /// Fetch, normalize and draw. Only the first call per mount fetches.
    ///
    /// Errors are logged and returned; there is no retry.
    pub async fn load<L: SourceLoader>(&mut self, loader: &L) -> Result<LoadOutcome, LoadError> {
        if self.fetched {
            tracing::debug!("chart data already loaded for this mount; skipping fetch");
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        self.fetched = true;

        let rows = loader.fetch().await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to load chart data");
        })?;

        if !self.surface.is_attached() {
            tracing::debug!(rows = rows.len(), "fetch resolved after teardown; dropping rows");
            return Ok(LoadOutcome::Detached);
        }

        let normalized = normalize(&rows, &self.config.columns);
        if !normalized.field_errors.is_empty() {
            tracing::info!(count = normalized.field_errors.len(), "rows with unparsable measurements kept as NaN");
        }
        self.field_errors = normalized.field_errors;
        let count = normalized.records.len();
        self.set_records(normalized.records);
        Ok(LoadOutcome::Rendered { records: count })
    }

    /// "Dataset changed": replace the records wholesale and redraw.
    pub fn set_records(&mut self, records: Vec<Record>) -> bool {
        self.records = records;
        self.run()
    }

    /// "Container resized": re-measure and redraw the current records.
    pub fn container_resized(&mut self) -> bool {
        self.run()
    }

    /// One full pipeline run. Returns `false` when the mount is detached.
    pub fn run(&self) -> bool {
        let Some(container) = self.surface.measure() else {
            tracing::trace!("mount detached; skipping pipeline run");
            return false;
        };
        let scene = recompute(&self.records, container, &self.config);
        self.surface.replace_scene(scene)
    }
}
