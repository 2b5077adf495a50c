//! The font capability consumed by measurement and fitting.
//!
//! A [Font] maps text to glyphs and reports glyph and font-wide metrics in
//! font design units. How the font actually puts text onto a [Surface] comes
//! in one of two shapes, declared through [Font::renderer]:
//!
//! - [Renderer::Outline]: the font hands back a [Path] for the text; the
//!   caller chooses the fill and draws it. This is the preferred shape.
//! - [Renderer::Direct]: the font draws onto the surface itself, using the
//!   surface's current fill style.

mod ttf;
pub use ttf::*;

use crate::path::Path;
use crate::surface::Surface;

/// Vertical extent of a glyph's ink relative to the baseline, in font units.
/// `y_max` is above the baseline, `y_min` below it (usually negative).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GlyphMetrics {
    pub y_min: f32,
    pub y_max: f32,
}

/// A single shaped rendering unit for one or more characters
pub trait Glyph {
    /// Horizontal advance in font units, if the glyph has one
    fn advance_width(&self) -> Option<f32>;
    fn metrics(&self) -> GlyphMetrics;
}

/// Produces a drawable outline for a run of text
pub trait OutlineRender {
    /// The outline of `text` with its baseline origin at (`x`, `y`) in surface
    /// coordinates (y down), scaled to `size`. The returned path has no fill.
    fn path(&self, text: &str, x: f32, y: f32, size: f32) -> Path;
}

/// Draws a run of text straight onto a surface with the current fill style
pub trait DirectRender {
    fn draw(&self, surface: &mut dyn Surface, text: &str, x: f32, y: f32, size: f32);
}

/// Which rendering shape a font implements
pub enum Renderer<'f> {
    Outline(&'f dyn OutlineRender),
    Direct(&'f dyn DirectRender),
}

/// A font that can be measured and rendered. All metrics are in font design
/// units; scale them by `size / units_per_em()`.
pub trait Font {
    type Glyph: Glyph;

    fn units_per_em(&self) -> f32;
    /// Font-wide ascender, above the baseline
    fn ascender(&self) -> f32;
    /// Font-wide descender, below the baseline. Note: this is usually negative
    fn descender(&self) -> f32;

    /// Map text to its glyph sequence. This need not be one glyph per
    /// character; the font decides how text is segmented.
    fn string_to_glyphs(&self, text: &str) -> Vec<Self::Glyph>;

    /// Spacing adjustment between two adjacent glyphs, in font units
    fn kerning_value(&self, left: &Self::Glyph, right: &Self::Glyph) -> f32;

    fn renderer(&self) -> Renderer<'_>;
}
