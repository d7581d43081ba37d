// File: crates/bar-chart-core/src/error.rs
// Summary: Load failures, per-field parse issues and geometry-level integrity warnings.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The one-shot fetch failed or returned something that is not a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    /// Raised by the `csv` reader; with flexible row lengths that means a
    /// header or cell holding invalid UTF-8.
    #[error("malformed CSV in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },
    #[error("resource {0} has no header row")]
    MissingHeaders(String),
}

/// A single cell could not be parsed; the record keeps going with a default.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("row {row}: column '{column}' value {raw:?} is not numeric, using NaN")]
pub struct PartialFieldError {
    pub row: usize,
    pub column: String,
    /// `None` when the cell was missing entirely.
    pub raw: Option<String>,
}

/// Geometry anomaly found while generating primitives. Never fatal.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataIntegrityWarning {
    #[error("record {index} ('{name}') has a non-finite value; bar skipped")]
    NonFiniteValue { index: usize, name: String },
    #[error("record {index} ('{name}') produced negative bar height {height}; bar skipped")]
    NegativeHeight { index: usize, name: String, height: f32 },
    #[error("record {index} ('{name}') value {value} is outside the value domain [{min}, {max}]")]
    OutOfDomain { index: usize, name: String, value: f64, min: f64, max: f64 },
    #[error("name '{name}' appears {count} times; its bars share one band")]
    DuplicateName { name: String, count: usize },
    #[error("record {index} ('{name}') has no band; bar placed at x = 0")]
    UnresolvedName { index: usize, name: String },
}

impl DataIntegrityWarning {
    /// Index of the record the warning is about, if it concerns a single record.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::NonFiniteValue { index, .. }
            | Self::NegativeHeight { index, .. }
            | Self::OutOfDomain { index, .. }
            | Self::UnresolvedName { index, .. } => Some(*index),
            Self::DuplicateName { .. } => None,
        }
    }
}
