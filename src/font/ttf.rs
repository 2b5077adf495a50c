use super::{Font, Glyph, GlyphMetrics, OutlineRender, Renderer};
use crate::path::Path;
use crate::FitError;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OutlineBuilder, OwnedFace};

/// A parsed TrueType or OpenType font.
///
/// Text is mapped to glyphs one character at a time through the font's
/// character map; characters the font has no glyph for fall back to the
/// replacement character, then `?`, then `.notdef`. No ligature or other
/// complex shaping is applied.
pub struct TtfFont {
    face: OwnedFace,
}

/// A glyph of a [TtfFont], with its metrics already looked up
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TtfGlyph {
    pub id: GlyphId,
    pub advance: Option<u16>,
    pub y_min: i16,
    pub y_max: i16,
}

impl Glyph for TtfGlyph {
    fn advance_width(&self) -> Option<f32> {
        self.advance.map(f32::from)
    }

    fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics {
            y_min: self.y_min as f32,
            y_max: self.y_max as f32,
        }
    }
}

impl TtfFont {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TtfFont, FitError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(TtfFont { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn glyph_id(&self, ch: char) -> GlyphId {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .unwrap_or(GlyphId(0))
    }

    fn glyph(&self, id: GlyphId) -> TtfGlyph {
        let face = self.face();
        let (y_min, y_max) = face
            .glyph_bounding_box(id)
            .map(|bbox| (bbox.y_min, bbox.y_max))
            .unwrap_or_default();
        TtfGlyph {
            id,
            advance: face.glyph_hor_advance(id),
            y_min,
            y_max,
        }
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        self.face()
            .tables()
            .kern
            .and_then(|kern| {
                kern.subtables
                    .into_iter()
                    .filter(|st| st.horizontal && !st.variable)
                    .find_map(|st| st.glyphs_kerning(left, right))
            })
            .unwrap_or(0)
    }
}

impl Font for TtfFont {
    type Glyph = TtfGlyph;

    fn units_per_em(&self) -> f32 {
        self.face().units_per_em() as f32
    }

    fn ascender(&self) -> f32 {
        self.face().ascender() as f32
    }

    fn descender(&self) -> f32 {
        self.face().descender() as f32
    }

    fn string_to_glyphs(&self, text: &str) -> Vec<TtfGlyph> {
        text.chars()
            .map(|ch| self.glyph(self.glyph_id(ch)))
            .collect()
    }

    fn kerning_value(&self, left: &TtfGlyph, right: &TtfGlyph) -> f32 {
        self.kerning(left.id, right.id) as f32
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::Outline(self)
    }
}

impl OutlineRender for TtfFont {
    fn path(&self, text: &str, x: f32, y: f32, size: f32) -> Path {
        let scaling = size / self.units_per_em();
        let glyphs = self.string_to_glyphs(text);

        let mut builder = GlyphPathBuilder {
            path: Path::new(),
            origin: (x, y),
            scaling,
        };

        for (i, glyph) in glyphs.iter().enumerate() {
            self.face().outline_glyph(glyph.id, &mut builder);

            if let Some(advance) = glyph.advance {
                builder.origin.0 += advance as f32 * scaling;
            }
            if let Some(next) = glyphs.get(i + 1) {
                builder.origin.0 += self.kerning(glyph.id, next.id) as f32 * scaling;
            }
        }

        builder.path
    }
}

/// Collects glyph outlines into a [Path], moving from font units (y up,
/// relative to the glyph origin) to surface units (y down)
struct GlyphPathBuilder {
    path: Path,
    origin: (f32, f32),
    scaling: f32,
}

impl GlyphPathBuilder {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.origin.0 + x * self.scaling,
            self.origin.1 - y * self.scaling,
        )
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.path.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.path.curve_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.path.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{measure, FitMethod};
    use crate::testing::assert_close;

    // 2048 units per em, so measuring at size 2048 reports font units
    const SERIF: &[u8] = include_bytes!("../../assets/DejaVuSerif.ttf");

    fn serif() -> TtfFont {
        TtfFont::load(SERIF.to_vec()).expect("can load fixture font")
    }

    #[test]
    fn test_font_names_and_metrics() {
        let font = serif();
        assert_eq!(font.name().as_deref(), Some("DejaVu Serif"));
        assert_eq!(font.units_per_em(), 2048.0);
        assert_eq!(font.ascender(), 1901.0);
        assert_eq!(font.descender(), -483.0);
    }

    #[test]
    fn test_cmap_lookup() {
        let font = serif();
        let glyphs = font.string_to_glyphs("AVg");
        assert_eq!(
            glyphs,
            vec![
                TtfGlyph {
                    id: GlyphId(36),
                    advance: Some(1479),
                    y_min: 0,
                    y_max: 1493
                },
                TtfGlyph {
                    id: GlyphId(57),
                    advance: Some(1479),
                    y_min: 0,
                    y_max: 1493
                },
                TtfGlyph {
                    id: GlyphId(74),
                    advance: Some(1311),
                    y_min: -455,
                    y_max: 1092
                },
            ]
        );
    }

    #[test]
    fn test_missing_char_uses_replacement_glyph() {
        let font = serif();
        // no CJK coverage in this font
        let glyphs = font.string_to_glyphs("\u{4E2D}");
        assert_eq!(glyphs.len(), 1);
        assert_ne!(glyphs[0].id, GlyphId(0));
        assert_eq!(glyphs[0], font.string_to_glyphs("\u{FFFD}")[0]);
        assert_eq!(glyphs[0].advance, Some(2100));
    }

    #[test]
    fn test_kern_table_pairs() {
        let font = serif();
        let glyphs = font.string_to_glyphs("AVA");
        assert_eq!(font.kerning_value(&glyphs[0], &glyphs[1]), -102.0);
        assert_eq!(font.kerning_value(&glyphs[1], &glyphs[2]), -139.0);
        assert_eq!(font.kerning_value(&glyphs[0], &glyphs[0]), 0.0);
    }

    #[test]
    fn test_measure_with_real_font() {
        let font = serif();

        let m = measure("AV", &font, 2048.0, FitMethod::Box);
        assert_close(m.width, 1479.0 - 102.0 + 1479.0);
        assert_close(m.height, 1493.0);
        assert_close(m.font_bounding_box_ascent, 1901.0);

        let m = measure("Ag", &font, 1024.0, FitMethod::Box);
        assert_close(m.width, (1479.0 + 1311.0) / 2.0);
        assert_close(m.height, (1493.0 + 455.0) / 2.0);
        assert_close(m.actual_bounding_box_descent, -455.0 / 2.0);

        let cap = measure("Ag", &font, 1024.0, FitMethod::CapHeight);
        assert_close(cap.height, 1493.0 / 2.0);
    }

    #[test]
    fn test_path_pen_advances_with_kerning() {
        let font = serif();
        let first = font.path("A", 0.0, 0.0, 2048.0);
        let pair = font.path("AV", 0.0, 0.0, 2048.0);
        // V starts one advance of A along, pulled back by the AV kern
        let second = font.path("V", 1479.0 - 102.0, 0.0, 2048.0);

        assert!(!first.commands.is_empty());
        assert_eq!(pair.commands.len(), first.commands.len() + second.commands.len());
        assert_eq!(pair.commands[..first.commands.len()], first.commands[..]);
        assert_eq!(pair.commands[first.commands.len()..], second.commands[..]);
    }

    #[test]
    fn test_fit_with_real_font() {
        let font = serif();
        // "Hello" is 5541 units wide and its ink spans 1585 units, so height limits the size
        let outcome = crate::layout_text(
            "Hello",
            &font,
            Some(crate::Rect::new(0.0, 0.0, 200.0, 50.0)),
            &crate::FitOptions::default(),
        )
        .unwrap();
        assert_eq!(outcome.font_size, 64.0);
        assert!(outcome.fits);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let err = TtfFont::load(b"definitely not a font".to_vec())
            .err()
            .expect("garbage does not parse");
        assert_eq!(err.kind(), crate::ErrorKind::Font);
    }

    #[test]
    fn test_outline_builder_flips_and_scales() {
        let mut builder = GlyphPathBuilder {
            path: Path::new(),
            origin: (10.0, 50.0),
            scaling: 0.5,
        };
        builder.move_to(0.0, 0.0);
        builder.line_to(20.0, 40.0);
        builder.close();

        assert_eq!(
            builder.path.commands,
            vec![
                crate::PathCommand::MoveTo { x: 10.0, y: 50.0 },
                crate::PathCommand::LineTo { x: 20.0, y: 30.0 },
                crate::PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_glyph_trait_conversions() {
        let glyph = TtfGlyph {
            id: GlyphId(3),
            advance: Some(600),
            y_min: -200,
            y_max: 700,
        };
        assert_eq!(glyph.advance_width(), Some(600.0));
        assert_eq!(
            glyph.metrics(),
            GlyphMetrics {
                y_min: -200.0,
                y_max: 700.0
            }
        );
    }
}
