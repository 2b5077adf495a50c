//! A [Surface] that renders onto a single PDF page.

use crate::colour::Colour;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::surface::Surface;
use crate::transform::Transform;
use crate::FitError;
use pdf_writer::{Filter, Finish, Pdf};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
struct PaintState {
    fill: Option<Colour>,
    stroke: Option<Colour>,
}

/// Draws into the content stream of one PDF page.
///
/// Coordinates are top-left origin, y down, in points; the page's coordinate
/// system is flipped once at the start of the content stream. Like a canvas,
/// the current path survives painting until [Surface::begin_path] is called,
/// and painting with a transparent style draws nothing.
pub struct PdfSurface {
    size: PageSize,
    content: Vec<u8>,
    state: PaintState,
    saved: Vec<PaintState>,
    /// path construction operators since the last `begin_path`
    path: Vec<u8>,
    current_point: Option<(f32, f32)>,
    subpath_start: Option<(f32, f32)>,
    /// first failed write to the content stream, reported by `write`
    error: Option<std::io::Error>,
}

impl PdfSurface {
    pub fn new(size: PageSize) -> PdfSurface {
        let mut content = Vec::new();
        Transform::flip_y(size.1).write_to(&mut content);
        PdfSurface {
            size,
            content,
            state: PaintState::default(),
            saved: Vec::new(),
            path: Vec::new(),
            current_point: None,
            subpath_start: None,
            error: None,
        }
    }

    /// The uncompressed content stream written so far
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    fn check(&mut self, result: std::io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    fn paint(&mut self, colour: Option<Colour>, stroke: bool) {
        let Some(colour) = colour else {
            return;
        };
        if self.path.is_empty() {
            return;
        }
        let result = paint_path(&mut self.content, &self.path, colour, stroke);
        self.check(result);
    }

    /// Write the page out as a complete PDF document. The content stream is
    /// deflated.
    #[allow(clippy::write_with_newline)]
    pub fn write<W: Write>(self, mut w: W) -> Result<(), FitError> {
        let PdfSurface {
            size,
            mut content,
            saved,
            error,
            ..
        } = self;

        if let Some(err) = error {
            return Err(err.into());
        }

        // close any saves the caller left open so the stream stays balanced
        for _ in saved.iter() {
            write!(&mut content, "Q\n")?;
        }

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let page_id = refs.gen(RefType::Page);
        let content_id = refs.gen(RefType::Content);

        let mut writer = Pdf::new();
        writer.pages(page_tree_id).count(1).kids([page_id]);

        let mut page = writer.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, size.0, size.1).into());
        page.parent(page_tree_id);
        page.contents(content_id);
        page.finish();

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            content.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        debug!(
            raw = content.len(),
            compressed = compressed.len(),
            "writing page content"
        );
        let mut stream = writer.stream(content_id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.finish();

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour, stroke: bool) -> std::io::Result<()> {
    match (colour, stroke) {
        (Colour::RGB { r, g, b }, false) => write!(content, "{r} {g} {b} rg\n"),
        (Colour::RGB { r, g, b }, true) => write!(content, "{r} {g} {b} RG\n"),
        (Colour::CMYK { c, m, y, k }, false) => write!(content, "{c} {m} {y} {k} k\n"),
        (Colour::CMYK { c, m, y, k }, true) => write!(content, "{c} {m} {y} {k} K\n"),
        (Colour::Grey { g }, false) => write!(content, "{g} g\n"),
        (Colour::Grey { g }, true) => write!(content, "{g} G\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn paint_path(
    content: &mut Vec<u8>,
    path: &[u8],
    colour: Colour,
    stroke: bool,
) -> std::io::Result<()> {
    write_colour(content, colour, stroke)?;
    content.write_all(path)?;
    write!(content, "{}\n", if stroke { "S" } else { "f" })
}

#[allow(clippy::write_with_newline)]
fn fill_rect_ops(
    content: &mut Vec<u8>,
    colour: Colour,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> std::io::Result<()> {
    write_colour(content, colour, false)?;
    write!(content, "{x} {y} {width} {height} re\n")?;
    write!(content, "f\n")
}

#[allow(clippy::write_with_newline)]
impl Surface for PdfSurface {
    fn save(&mut self) {
        self.saved.push(self.state);
        let result = write!(&mut self.content, "q\n");
        self.check(result);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
            let result = write!(&mut self.content, "Q\n");
            self.check(result);
        }
    }

    fn set_fill_style(&mut self, paint: Option<Colour>) {
        self.state.fill = paint;
    }

    fn set_stroke_style(&mut self, paint: Option<Colour>) {
        self.state.stroke = paint;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if let Some(colour) = self.state.fill {
            let result = fill_rect_ops(&mut self.content, colour, x, y, width, height);
            self.check(result);
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.current_point = None;
        self.subpath_start = None;
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let result = write!(&mut self.path, "{x} {y} {width} {height} re\n");
        self.check(result);
        self.current_point = Some((x, y));
        self.subpath_start = Some((x, y));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let result = write!(&mut self.path, "{x} {y} m\n");
        self.check(result);
        self.current_point = Some((x, y));
        self.subpath_start = Some((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        if self.current_point.is_none() {
            self.move_to(x, y);
            return;
        }
        let result = write!(&mut self.path, "{x} {y} l\n");
        self.check(result);
        self.current_point = Some((x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x0, y0) = match self.current_point {
            Some(point) => point,
            None => {
                self.move_to(x1, y1);
                (x1, y1)
            }
        };
        // PDF has no quadratic segments, raise to a cubic
        let c1 = (x0 + 2.0 / 3.0 * (x1 - x0), y0 + 2.0 / 3.0 * (y1 - y0));
        let c2 = (x + 2.0 / 3.0 * (x1 - x), y + 2.0 / 3.0 * (y1 - y));
        self.curve_to(c1.0, c1.1, c2.0, c2.1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        if self.current_point.is_none() {
            self.move_to(x1, y1);
        }
        let result = write!(&mut self.path, "{x1} {y1} {x2} {y2} {x} {y} c\n");
        self.check(result);
        self.current_point = Some((x, y));
    }

    fn close_path(&mut self) {
        if self.current_point.is_some() {
            let result = write!(&mut self.path, "h\n");
            self.check(result);
            self.current_point = self.subpath_start;
        }
    }

    fn fill(&mut self) {
        self.paint(self.state.fill, false);
    }

    fn stroke(&mut self) {
        self.paint(self.state.stroke, true);
    }
}
