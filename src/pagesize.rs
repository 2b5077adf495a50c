//! Page sizes for [`PdfSurface`](crate::PdfSurface).

/// Page dimensions as (width, height) in points.
pub type PageSize = (f32, f32);

pub const LETTER: PageSize = (8.5 * 72.0, 11.0 * 72.0);
