// File: crates/bar-chart-core/src/record.rs
// Summary: Canonical records and the raw-row normalizer (defaulting + lenient number parsing).

use crate::config::ColumnMap;
use crate::error::PartialFieldError;
use crate::source::RawRow;

/// One bar's worth of data. `value` may be NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    pub group: String,
    pub value: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, group: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), group: group.into(), value }
    }
}

/// Normalizer output: one record per input row, same order.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    pub records: Vec<Record>,
    pub field_errors: Vec<PartialFieldError>,
}

/// Map raw rows to records.
///
/// Missing name/group cells become `""`. A measurement without a numeric
/// prefix becomes NaN and is reported in `field_errors`; the row is kept.
pub fn normalize(rows: &[RawRow], columns: &ColumnMap) -> Normalized {
    let mut out = Normalized { records: Vec::with_capacity(rows.len()), field_errors: Vec::new() };
    for (row, raw) in rows.iter().enumerate() {
        let cell = raw.get(&columns.value);
        let value = match cell.and_then(parse_measurement) {
            Some(v) => v,
            None => {
                let err = PartialFieldError {
                    row,
                    column: columns.value.clone(),
                    raw: cell.map(str::to_string),
                };
                tracing::debug!(%err, "measurement replaced with NaN");
                out.field_errors.push(err);
                f64::NAN
            }
        };
        out.records.push(Record {
            name: raw.get(&columns.name).unwrap_or_default().to_string(),
            group: raw.get(&columns.group).unwrap_or_default().to_string(),
            value,
        });
    }
    out
}

/// Locale-independent decimal parse of the longest numeric prefix.
///
/// Leading whitespace is skipped and trailing text ignored, so `"80 km/h"`
/// gives 80. Returns `None` when no digits start the text. Non-numeric
/// spellings such as `"inf"` or `"NaN"` are rejected.
pub fn parse_measurement(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let b = s.as_bytes();
    let digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    s[..end].parse::<f64>().ok()
}
