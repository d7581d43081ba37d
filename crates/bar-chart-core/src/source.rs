// File: crates/bar-chart-core/src/source.rs
// Summary: Raw tabular rows and the one-shot CSV source loader (file, http(s) or inline text).

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;

use crate::error::LoadError;

/// One CSV row keyed by header name. Cells missing from a short row are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { cells: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Asynchronous, single best-effort fetch of raw rows. No retry, no timeout.
pub trait SourceLoader {
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawRow>, LoadError>>;
}

/// Where the CSV lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceLocator {
    File(PathBuf),
    Http(String),
    /// CSV text the host already holds.
    Inline(String),
}

impl ResourceLocator {
    /// `http://` / `https://` become `Http`, anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(raw.trim().to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
            Self::Inline(text) => write!(f, "<inline csv, {} bytes>", text.len()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CsvSource {
    pub locator: ResourceLocator,
}

impl CsvSource {
    pub fn new(locator: ResourceLocator) -> Self {
        Self { locator }
    }

    pub fn inline(text: impl Into<String>) -> Self {
        Self::new(ResourceLocator::Inline(text.into()))
    }

    /// Raw bytes of the resource; UTF-8 is checked while parsing.
    fn read_bytes(&self) -> Result<Vec<u8>, LoadError> {
        match &self.locator {
            ResourceLocator::File(path) => std::fs::read(path)
                .map_err(|source| LoadError::Io { path: path.clone(), source }),
            ResourceLocator::Http(url) => ureq::get(url)
                .call()
                .and_then(|mut response| response.body_mut().read_to_vec())
                .map_err(|source| LoadError::Http { url: url.clone(), source: Box::new(source) }),
            ResourceLocator::Inline(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

impl SourceLoader for CsvSource {
    async fn fetch(&self) -> Result<Vec<RawRow>, LoadError> {
        let bytes = self.read_bytes()?;
        let rows = parse_csv(&bytes, &self.locator.to_string())?;
        tracing::debug!(origin = %self.locator, rows = rows.len(), "fetched csv");
        Ok(rows)
    }
}

/// Parse CSV with a header row into raw rows.
///
/// Rows may be shorter or longer than the header; extra cells are dropped and
/// missing ones are simply absent. Header names are trimmed, cell text is not.
/// A header or cell that is not valid UTF-8 fails with `LoadError::Csv`.
pub fn parse_csv(text: impl AsRef<[u8]>, origin: &str) -> Result<Vec<RawRow>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_ref());

    let headers = rdr
        .headers()
        .map_err(|source| LoadError::Csv { origin: origin.to_string(), source })?
        .clone();
    if headers.iter().all(str::is_empty) {
        return Err(LoadError::MissingHeaders(origin.to_string()));
    }

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|source| LoadError::Csv { origin: origin.to_string(), source })?;
        rows.push(headers.iter().zip(rec.iter()).collect::<RawRow>());
    }
    Ok(rows)
}
