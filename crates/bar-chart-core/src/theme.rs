// File: crates/bar-chart-core/src/theme.rs
// Summary: Group palette (diet -> bar color) and the foreground/background colors used when rasterizing.

use skia_safe as skia;

pub const CARNIVORE: &str = "Carnivore";
pub const HERBIVORE: &str = "Herbivore";
pub const OMNIVORE: &str = "Omnivore";

/// Fixed three-group palette plus a fallback for anything unrecognized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub carnivore: skia::Color,
    pub herbivore: skia::Color,
    pub omnivore: skia::Color,
    pub fallback: skia::Color,
}

impl Palette {
    /// Map a group label to its bar color.
    ///
    /// Matching is exact and case-sensitive: `"carnivore"` and `" Carnivore"`
    /// both fall through to `fallback`.
    pub fn classify(&self, group: &str) -> skia::Color {
        match group {
            CARNIVORE => self.carnivore,
            HERBIVORE => self.herbivore,
            OMNIVORE => self.omnivore,
            _ => self.fallback,
        }
    }

    /// Legend rows in display order. Static: independent of the data.
    pub fn legend(&self) -> [(&'static str, skia::Color); 3] {
        [
            (CARNIVORE, self.carnivore),
            (HERBIVORE, self.herbivore),
            (OMNIVORE, self.omnivore),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            carnivore: skia::Color::from_rgb(0xff, 0x00, 0x00), // css red
            herbivore: skia::Color::from_rgb(0x00, 0x80, 0x00), // css green
            omnivore: skia::Color::from_rgb(0xa5, 0x2a, 0x2a),  // css brown
            fallback: skia::Color::from_rgb(0xa5, 0x1c, 0x30),
        }
    }
}

/// Non-data colors for the rasterizer.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    [Theme::light(), Theme::dark()]
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
