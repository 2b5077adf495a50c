/// An axis-aligned rectangle in surface coordinates. The origin is the
/// top-left corner and y grows downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge
    pub x: f32,
    /// The y-coordinate of the top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The rectangle text is fitted into when the caller does not supply one
    pub const DEFAULT_FIT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Grow the rectangle by `padding` on all four sides. The width and height
    /// each change by twice the padding.
    pub fn pad(&self, padding: f32) -> Rect {
        Rect {
            x: self.x - padding,
            y: self.y - padding,
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }

    /// The y-coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::DEFAULT_FIT
    }
}

impl From<(f32, f32, f32, f32)> for Rect {
    fn from(r: (f32, f32, f32, f32)) -> Self {
        Rect::new(r.0, r.1, r.2, r.3)
    }
}

/// Convert to a PDF rectangle, which is specified by two opposite corners
impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x,
            y1: r.y,
            x2: r.right(),
            y2: r.bottom(),
        }
    }
}
