// File: crates/bar-chart-core/src/scale.rs
// Summary: Categorical band scale (X) and fixed-domain linear value scale (Y), plus value-axis ticks.

use std::collections::HashMap;

/// Value Y coordinate (e.g., speed).
pub type Value = f64;

/// Band padding used when the configured one is not a finite number.
pub const DEFAULT_BAND_PADDING: f32 = 0.2;

/// Discrete, ordered domain of category names mapped to padded bands in `[start, end]`.
///
/// Duplicate names collapse onto the band of their first occurrence.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    start: f32,
    step: f32,
    bandwidth: f32,
}

impl BandScale {
    pub fn new<'a, I>(names: I, range: (f32, f32), padding: f32) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for name in names {
            if !index.contains_key(name) {
                index.insert(name.to_string(), domain.len());
                domain.push(name.to_string());
            }
        }
        let padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0)
        } else {
            tracing::warn!(padding, "non-finite band padding, using {DEFAULT_BAND_PADDING}");
            DEFAULT_BAND_PADDING
        };
        let (start, end) = range;
        let step = if domain.is_empty() { 0.0 } else { (end - start) / domain.len() as f32 };
        Self { domain, index, start, step, bandwidth: step * (1.0 - padding) }
    }

    /// Left edge of the band for `name`.
    #[inline]
    pub fn position(&self, name: &str) -> Option<f32> {
        let gap = (self.step - self.bandwidth) * 0.5;
        self.index.get(name).map(|&i| self.start + i as f32 * self.step + gap)
    }

    /// Center of the band for `name` (where the axis tick goes).
    #[inline]
    pub fn center(&self, name: &str) -> Option<f32> {
        self.position(name).map(|x| x + self.bandwidth * 0.5)
    }

    pub fn step(&self) -> f32 { self.step }
    pub fn bandwidth(&self) -> f32 { self.bandwidth }
    /// Distinct names in first-seen order.
    pub fn domain(&self) -> &[String] { &self.domain }
    pub fn len(&self) -> usize { self.domain.len() }
    pub fn is_empty(&self) -> bool { self.domain.is_empty() }
}

/// Vertical value scale mapping the domain `[vmin, vmax]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Not clamped: values past `vmax` land above `top_px`, NaN stays NaN.
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    pub fn contains(&self, y: Value) -> bool {
        y >= self.vmin && y <= self.vmax
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.vmin, self.vmax, count)
    }
}

/// Tick values between `start` and `stop` on a 1/2/5 x 10^k grid.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let Some((power, factor)) = tick_increment(lo, hi, count) else { return vec![lo] };
    let out: Vec<f64> = if power >= 0 {
        let step = factor * 10f64.powi(power);
        let (i0, i1) = ((lo / step).ceil() as i64, (hi / step).floor() as i64);
        (i0..=i1).map(|i| i as f64 * step).collect()
    } else {
        // Divide by the inverse step to keep decimals exact (0.1 rather than 0.30000000000000004).
        let inv = 10f64.powi(-power) / factor;
        let (i0, i1) = ((lo * inv).ceil() as i64, (hi * inv).floor() as i64);
        (i0..=i1).map(|i| i as f64 / inv).collect()
    };
    if start > stop { out.into_iter().rev().collect() } else { out }
}

/// Step between ticks as reported to the label formatter.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    tick_increment(lo, hi, count).map(|(power, factor)| factor * 10f64.powi(power))
}

/// `(power, factor)` with step = factor * 10^power, factor in {1, 2, 5, 10}.
fn tick_increment(lo: f64, hi: f64, count: usize) -> Option<(i32, f64)> {
    let raw = (hi - lo) / count.max(1) as f64;
    if !(raw > 0.0) || !raw.is_finite() { return None; }
    let power = raw.log10().floor() as i32;
    let error = raw / 10f64.powi(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some((power, factor))
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
    let text = format!("{value:.decimals$}");
    // "-0" reads oddly on an axis.
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}
