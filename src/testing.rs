//! Test doubles shared by the unit tests.

use crate::font::{DirectRender, Font, Glyph, GlyphMetrics, OutlineRender, Renderer};
use crate::path::Path;
use crate::surface::Surface;
use std::collections::HashMap;

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct MonoGlyph {
    advance: Option<f32>,
    y_min: f32,
    y_max: f32,
}

impl Glyph for MonoGlyph {
    fn advance_width(&self) -> Option<f32> {
        self.advance
    }

    fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics {
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }
}

/// A fake font where every character is the same box glyph unless overridden.
/// Defaults: 1000 units per em, advance 600, ink from 0 to 700, ascender 800,
/// descender -200, no kerning, outline rendering.
pub(crate) struct MonoFont {
    pub units_per_em: f32,
    pub ascender: f32,
    pub descender: f32,
    pub default_glyph: MonoGlyph,
    pub overrides: HashMap<char, MonoGlyph>,
    pub kerning: f32,
    pub direct: bool,
}

impl Default for MonoFont {
    fn default() -> Self {
        MonoFont {
            units_per_em: 1000.0,
            ascender: 800.0,
            descender: -200.0,
            default_glyph: MonoGlyph {
                advance: Some(600.0),
                y_min: 0.0,
                y_max: 700.0,
            },
            overrides: HashMap::new(),
            kerning: 0.0,
            direct: false,
        }
    }
}

impl MonoFont {
    pub fn with_glyph(mut self, ch: char, advance: f32, y_min: f32, y_max: f32) -> Self {
        self.overrides.insert(
            ch,
            MonoGlyph {
                advance: Some(advance),
                y_min,
                y_max,
            },
        );
        self
    }

    pub fn with_glyph_no_advance(mut self, ch: char, y_min: f32, y_max: f32) -> Self {
        self.overrides.insert(
            ch,
            MonoGlyph {
                advance: None,
                y_min,
                y_max,
            },
        );
        self
    }

    /// Every adjacent pair is kerned by this many font units
    pub fn with_kerning(mut self, kerning: f32) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn direct(mut self) -> Self {
        self.direct = true;
        self
    }

    /// One box per glyph, from its ink bottom to its ink top
    fn boxes(&self, text: &str, x: f32, y: f32, size: f32) -> Vec<(f32, f32, f32, f32)> {
        let scaling = size / self.units_per_em;
        let mut pen = x;
        let mut boxes = Vec::new();
        for glyph in self.string_to_glyphs(text) {
            let advance = glyph.advance.unwrap_or_default() * scaling;
            boxes.push((
                pen,
                y - glyph.y_max * scaling,
                advance,
                (glyph.y_max - glyph.y_min) * scaling,
            ));
            pen += advance + self.kerning * scaling;
        }
        boxes
    }
}

impl Font for MonoFont {
    type Glyph = MonoGlyph;

    fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    fn ascender(&self) -> f32 {
        self.ascender
    }

    fn descender(&self) -> f32 {
        self.descender
    }

    fn string_to_glyphs(&self, text: &str) -> Vec<MonoGlyph> {
        text.chars()
            .map(|ch| *self.overrides.get(&ch).unwrap_or(&self.default_glyph))
            .collect()
    }

    fn kerning_value(&self, _left: &MonoGlyph, _right: &MonoGlyph) -> f32 {
        self.kerning
    }

    fn renderer(&self) -> Renderer<'_> {
        if self.direct {
            Renderer::Direct(self)
        } else {
            Renderer::Outline(self)
        }
    }
}

impl OutlineRender for MonoFont {
    fn path(&self, text: &str, x: f32, y: f32, size: f32) -> Path {
        let mut path = Path::new();
        for (bx, by, bw, bh) in self.boxes(text, x, y, size) {
            path.move_to(bx, by);
            path.line_to(bx + bw, by);
            path.line_to(bx + bw, by + bh);
            path.line_to(bx, by + bh);
            path.close();
        }
        path
    }
}

impl DirectRender for MonoFont {
    fn draw(&self, surface: &mut dyn Surface, text: &str, x: f32, y: f32, size: f32) {
        surface.begin_path();
        for (bx, by, bw, bh) in self.boxes(text, x, y, size) {
            surface.rect(bx, by, bw, bh);
        }
        surface.fill();
    }
}
