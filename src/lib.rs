//! Fit a single line of text into a rectangle.
//!
//! The font size is stepped down from a maximum until the measured text box
//! fits the rectangle (or a minimum size is reached), then the text is
//! aligned inside the rectangle and drawn onto a [Surface]. Fonts and
//! surfaces are capabilities: implement [Font] and [Surface] for your own
//! types, or use [TtfFont] and [PdfSurface].

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod fit;
pub use fit::*;

/// Font capabilities and a TrueType/OpenType implementation
pub mod font;
pub use font::{DirectRender, Font, Glyph, GlyphMetrics, OutlineRender, Renderer, TtfFont};

mod metrics;
pub use metrics::*;

pub mod pagesize;

mod path;
pub use path::*;

mod pdf;
pub use pdf::*;

mod recording;
pub use recording::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod surface;
pub use surface::*;

mod transform;
pub use transform::*;

#[cfg(test)]
pub(crate) mod testing;

/// Re-export PDF-writer, for callers that want to embed fitted content in their own documents
pub use pdf_writer;
