// File: crates/bar-chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with anchor and rotation support for axis labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::geometry::Point;
use crate::primitive::TextAnchor;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `origin + baseline_dy` in a frame rotated
    /// by `rotation_degrees` around `origin`, aligned horizontally per `anchor`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        origin: Point,
        baseline_dy: f32,
        rotation_degrees: f32,
        anchor: TextAnchor,
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let dx = match anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -w * 0.5,
            TextAnchor::End => -w,
        };
        canvas.save();
        canvas.translate((origin.x, origin.y));
        if rotation_degrees != 0.0 {
            canvas.rotate(rotation_degrees, None);
        }
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (dx, baseline_dy - size * 0.8));
        canvas.restore();
    }
}
