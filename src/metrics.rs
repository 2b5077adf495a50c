//! Measuring a line of text at a given font size.

use crate::font::{Font, Glyph};
use crate::FitError;
use std::str::FromStr;

/// Which height is used to decide whether text fits, and where its baseline sits
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FitMethod {
    /// Ascent plus descent: the tight box around all ink, descenders included
    #[default]
    Box,
    /// Ascent only; descenders may hang below the fitting rectangle
    CapHeight,
}

impl FromStr for FitMethod {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(FitMethod::Box),
            "alternate" | "cap" | "cap-height" => Ok(FitMethod::CapHeight),
            other => Err(FitError::FitMethod(other.to_string())),
        }
    }
}

/// Measurements of a line of text at a specific font size, in surface units
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextMetrics {
    /// Sum of advances and kerning
    pub width: f32,
    /// Height according to the [FitMethod] used when measuring
    pub height: f32,
    /// Highest ink above the baseline, never negative
    pub actual_bounding_box_ascent: f32,
    /// Lowest ink below the baseline. Note: this is never positive
    pub actual_bounding_box_descent: f32,
    /// The font's ascender at this size
    pub font_bounding_box_ascent: f32,
    /// The font's descender at this size, usually negative
    pub font_bounding_box_descent: f32,
}

/// Measure `text` set in `font` at `font_size`.
///
/// Advances are summed for every glyph that has one, and kerning is added
/// once between each adjacent pair. Ascent and descent start at the baseline,
/// so text whose ink never leaves one side of the baseline reports zero for
/// that side.
pub fn measure<F: Font + ?Sized>(
    text: &str,
    font: &F,
    font_size: f32,
    method: FitMethod,
) -> TextMetrics {
    let scaling = font_size / font.units_per_em();
    let glyphs = font.string_to_glyphs(text);

    let mut width = 0.0;
    let mut ascent: f32 = 0.0;
    let mut descent: f32 = 0.0;

    for (i, glyph) in glyphs.iter().enumerate() {
        if let Some(advance) = glyph.advance_width() {
            width += advance * scaling;
        }
        if let Some(next) = glyphs.get(i + 1) {
            width += font.kerning_value(glyph, next) * scaling;
        }

        let extent = glyph.metrics();
        ascent = ascent.max(extent.y_max);
        descent = descent.min(extent.y_min);
    }

    let height = match method {
        FitMethod::Box => ascent.abs() * scaling + descent.abs() * scaling,
        FitMethod::CapHeight => ascent.abs() * scaling,
    };

    TextMetrics {
        width,
        height,
        actual_bounding_box_ascent: ascent * scaling,
        actual_bounding_box_descent: descent * scaling,
        font_bounding_box_ascent: font.ascender() * scaling,
        font_bounding_box_descent: font.descender() * scaling,
    }
}
