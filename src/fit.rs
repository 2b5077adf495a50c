//! Shrink-to-fit placement and drawing of a single line of text.
//!
//! [fit_text] measures the text at `max_size` and steps the size down by
//! `granularity` until the measured box fits the target rectangle or the next
//! step would drop below `min_size`. The text is then aligned inside the
//! rectangle and drawn, optionally over a background fill and with a debug
//! outline of the rectangle.
//!
//! # Example
//!
//! ```no_run
//! use textfit::{fit_text, FitOptions, HAlign, PdfSurface, Rect, TtfFont, VAlign};
//! use textfit::pagesize;
//!
//! let font = TtfFont::load(std::fs::read("FiraSans-Regular.ttf")?)?;
//! let mut page = PdfSurface::new(pagesize::LETTER);
//!
//! let options = FitOptions {
//!     h_align: HAlign::Center,
//!     v_align: VAlign::Center,
//!     max_size: 96.0,
//!     ..Default::default()
//! };
//! let outcome = fit_text(
//!     &mut page,
//!     "Hello, world!",
//!     &font,
//!     Some(Rect::new(72.0, 72.0, 468.0, 144.0)),
//!     &options,
//! )?;
//! assert!(outcome.fits);
//!
//! page.write(std::fs::File::create("hello.pdf")?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::colour::{colours, Colour};
use crate::font::{Font, Renderer};
use crate::metrics::{measure, FitMethod, TextMetrics};
use crate::rect::Rect;
use crate::surface::{Surface, SurfaceGuard};
use crate::FitError;
use std::str::FromStr;
use tracing::{debug, trace};

/// Stroke colour of the outline drawn when [FitOptions::draw_rect] is set
pub const DEBUG_STROKE: Colour = colours::RED;

/// Horizontal placement of the text inside the fitting rectangle
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for HAlign {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HAlign::Left),
            "center" | "middle" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            other => Err(FitError::HAlign(other.to_string())),
        }
    }
}

/// Vertical placement of the text inside the fitting rectangle
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    /// Also known as `baseline`
    #[default]
    Bottom,
}

impl FromStr for VAlign {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VAlign::Top),
            "center" | "middle" => Ok(VAlign::Center),
            "bottom" | "baseline" => Ok(VAlign::Bottom),
            other => Err(FitError::VAlign(other.to_string())),
        }
    }
}

/// Options controlling the size search, placement, and painting of fitted text.
///
/// Override individual fields with struct update syntax
/// (`FitOptions { max_size: 48.0, ..Default::default() }`) or through
/// [FitOptions::builder].
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Smallest font size the search may settle on (inclusive)
    pub min_size: f32,
    /// Font size the search starts from (inclusive)
    pub max_size: f32,
    /// How much the font size shrinks on each step of the search
    pub granularity: f32,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub fit_method: FitMethod,
    pub text_fill: Colour,
    /// Background paint; `None` draws no background
    pub rect_fill: Option<Colour>,
    /// Fill only behind the placed text instead of the whole rectangle
    pub rect_fill_only_text: bool,
    /// Grows (or, when negative, shrinks) the rectangle the text must fit in
    pub text_padding: f32,
    /// Grows (or, when negative, shrinks) the background fill
    pub fill_padding: f32,
    /// Stroke the fitting rectangle in [DEBUG_STROKE]
    pub draw_rect: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            min_size: 10.0,
            max_size: 200.0,
            granularity: 1.0,
            h_align: HAlign::Left,
            v_align: VAlign::Bottom,
            fit_method: FitMethod::Box,
            text_fill: colours::BLACK,
            rect_fill: None,
            rect_fill_only_text: false,
            text_padding: 0.0,
            fill_padding: 0.0,
            draw_rect: false,
        }
    }
}

impl FitOptions {
    pub fn builder() -> FitOptionsBuilder {
        FitOptionsBuilder::default()
    }

    /// Check that the options describe a search that can terminate
    pub fn validate(&self) -> Result<(), FitError> {
        if !(self.granularity.is_finite() && self.granularity > 0.0) {
            return Err(FitError::Granularity(self.granularity));
        }
        // written so that NaN and infinite sizes are rejected too
        if !(self.min_size.is_finite() && self.max_size.is_finite())
            || !(self.min_size <= self.max_size)
        {
            return Err(FitError::SizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}

/// Builds [FitOptions] from the defaults, one field at a time. The `*_token`
/// setters accept the string forms of the options (`"middle"`, `"#f00"`, ...).
#[derive(Debug, Clone, Default)]
pub struct FitOptionsBuilder {
    options: FitOptions,
}

impl FitOptionsBuilder {
    pub fn min_size(mut self, size: f32) -> Self {
        self.options.min_size = size;
        self
    }

    pub fn max_size(mut self, size: f32) -> Self {
        self.options.max_size = size;
        self
    }

    pub fn granularity(mut self, step: f32) -> Self {
        self.options.granularity = step;
        self
    }

    pub fn h_align(mut self, align: HAlign) -> Self {
        self.options.h_align = align;
        self
    }

    pub fn h_align_token(self, token: &str) -> Result<Self, FitError> {
        Ok(self.h_align(token.parse()?))
    }

    pub fn v_align(mut self, align: VAlign) -> Self {
        self.options.v_align = align;
        self
    }

    pub fn v_align_token(self, token: &str) -> Result<Self, FitError> {
        Ok(self.v_align(token.parse()?))
    }

    pub fn fit_method(mut self, method: FitMethod) -> Self {
        self.options.fit_method = method;
        self
    }

    pub fn fit_method_token(self, token: &str) -> Result<Self, FitError> {
        Ok(self.fit_method(token.parse()?))
    }

    pub fn text_fill(mut self, colour: Colour) -> Self {
        self.options.text_fill = colour;
        self
    }

    pub fn text_fill_token(self, token: &str) -> Result<Self, FitError> {
        Ok(self.text_fill(token.parse()?))
    }

    pub fn rect_fill(mut self, paint: Option<Colour>) -> Self {
        self.options.rect_fill = paint;
        self
    }

    /// `"transparent"` clears the background fill
    pub fn rect_fill_token(self, token: &str) -> Result<Self, FitError> {
        Ok(self.rect_fill(Colour::parse_paint(token)?))
    }

    pub fn rect_fill_only_text(mut self, only_text: bool) -> Self {
        self.options.rect_fill_only_text = only_text;
        self
    }

    pub fn text_padding(mut self, padding: f32) -> Self {
        self.options.text_padding = padding;
        self
    }

    pub fn fill_padding(mut self, padding: f32) -> Self {
        self.options.fill_padding = padding;
        self
    }

    pub fn draw_rect(mut self, draw: bool) -> Self {
        self.options.draw_rect = draw;
        self
    }

    pub fn build(self) -> Result<FitOptions, FitError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// Where and how large fitted text ended up
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    /// The font size the search settled on
    pub font_size: f32,
    /// Measurements at [FitOutcome::font_size]
    pub metrics: TextMetrics,
    /// Baseline origin of the text, in surface coordinates
    pub origin: (f32, f32),
    /// Box around the placed text, from the baseline up by the measured height
    pub text_rect: Rect,
    /// The rectangle the text was fitted into, after text padding
    pub fit_rect: Rect,
    /// How many sizes were measured
    pub iterations: usize,
    /// `false` if the text overflows even at `min_size`. The text is still
    /// placed and drawn at that size.
    pub fits: bool,
}

fn check_font<F: Font + ?Sized>(font: &F) -> Result<(), FitError> {
    let units_per_em = font.units_per_em();
    if !(units_per_em.is_finite() && units_per_em > 0.0) {
        return Err(FitError::InvalidFont(format!(
            "units per em must be positive, got {units_per_em}"
        )));
    }
    Ok(())
}

fn fits_within(metrics: &TextMetrics, rect: &Rect) -> bool {
    metrics.width <= rect.width && metrics.height <= rect.height
}

/// Find the font size for `text` and where to place it, without drawing anything.
///
/// `rect` defaults to [Rect::DEFAULT_FIT]. Errors are only returned for invalid
/// options or an unusable font; text that does not fit even at `min_size` is
/// reported through [FitOutcome::fits].
pub fn layout_text<F: Font + ?Sized>(
    text: &str,
    font: &F,
    rect: Option<Rect>,
    options: &FitOptions,
) -> Result<FitOutcome, FitError> {
    check_font(font)?;
    options.validate()?;

    let rect = rect.unwrap_or(Rect::DEFAULT_FIT);
    let fit_rect = rect.pad(options.text_padding);

    // sizes are derived from the step count so fractional granularities don't drift
    let size_at = |step: u32| options.max_size - step as f32 * options.granularity;
    // a step landing on min_size may round to just below it
    let tolerance = options.granularity * 1e-4;

    let mut step: u32 = 0;
    let mut font_size = options.max_size;
    let mut metrics = measure(text, font, font_size, options.fit_method);
    let mut iterations = 1;

    while !fits_within(&metrics, &fit_rect)
        && size_at(step + 1) >= options.min_size - tolerance
    {
        step += 1;
        font_size = size_at(step).max(options.min_size);
        metrics = measure(text, font, font_size, options.fit_method);
        iterations += 1;
        trace!(
            font_size,
            width = metrics.width,
            height = metrics.height,
            "measured candidate size"
        );
    }

    let fits = fits_within(&metrics, &fit_rect);
    if !fits {
        debug!(
            font_size,
            width = metrics.width,
            height = metrics.height,
            "text overflows its rectangle at the minimum size"
        );
    }

    let text_width = metrics.width;
    let text_height = metrics.height;

    let mut y = match options.fit_method {
        FitMethod::Box => fit_rect.bottom() - metrics.actual_bounding_box_descent.abs(),
        FitMethod::CapHeight => fit_rect.bottom(),
    };
    match options.v_align {
        VAlign::Top => y = y - fit_rect.height + text_height,
        VAlign::Center => y += text_height / 2.0 - fit_rect.height / 2.0,
        VAlign::Bottom => {}
    }

    let mut x = fit_rect.x;
    match options.h_align {
        HAlign::Right => x += fit_rect.width - text_width,
        HAlign::Center => x += fit_rect.width / 2.0 - text_width / 2.0,
        HAlign::Left => {}
    }

    debug!(font_size, iterations, fits, x, y, "laid out text");

    Ok(FitOutcome {
        font_size,
        metrics,
        origin: (x, y),
        text_rect: Rect::new(x, y - text_height, text_width, text_height),
        fit_rect,
        iterations,
        fits,
    })
}

/// Fit `text` into `rect` and draw it onto `surface`.
///
/// All validation happens before the surface is touched; every style change
/// made while drawing is undone before returning.
pub fn fit_text<F: Font + ?Sized>(
    surface: &mut dyn Surface,
    text: &str,
    font: &F,
    rect: Option<Rect>,
    options: &FitOptions,
) -> Result<FitOutcome, FitError> {
    let outcome = layout_text(text, font, rect, options)?;
    let rect = rect.unwrap_or(Rect::DEFAULT_FIT);
    let (x, y) = outcome.origin;

    let mut surface = SurfaceGuard::new(surface);
    surface.set_fill_style(None);

    if let Some(paint) = options.rect_fill {
        let fill_rect = if options.rect_fill_only_text {
            outcome.text_rect
        } else {
            rect
        };
        let fill_rect = fill_rect.pad(options.fill_padding);

        surface.set_fill_style(Some(paint));
        surface.fill_rect(fill_rect.x, fill_rect.y, fill_rect.width, fill_rect.height);
        surface.set_fill_style(None);
    }

    match font.renderer() {
        Renderer::Outline(outline) => {
            let mut path = outline.path(text, x, y, outcome.font_size);
            path.fill = Some(options.text_fill);
            path.draw(&mut *surface);
        }
        Renderer::Direct(direct) => {
            surface.set_fill_style(Some(options.text_fill));
            direct.draw(&mut *surface, text, x, y, outcome.font_size);
            surface.set_fill_style(None);
        }
    }

    if options.draw_rect {
        let r = outcome.fit_rect;
        let mut debug_surface = SurfaceGuard::new(&mut *surface);
        debug_surface.set_stroke_style(Some(DEBUG_STROKE));
        // a fresh path, so the glyph outlines aren't stroked along with the rectangle
        debug_surface.begin_path();
        debug_surface.rect(r.x, r.y, r.width, r.height);
        debug_surface.stroke();
        debug_surface.set_stroke_style(None);
    }

    Ok(outcome)
}
