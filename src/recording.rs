//! A [Surface] that remembers what was done to it.

use crate::colour::Colour;
use crate::surface::Surface;

/// A single call made against a [RecordingSurface]
#[derive(Clone, PartialEq, Debug)]
pub enum SurfaceCall {
    Save,
    Restore,
    FillStyle(Option<Colour>),
    StrokeStyle(Option<Colour>),
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    BeginPath,
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    MoveTo(f32, f32),
    LineTo(f32, f32),
    QuadTo(f32, f32, f32, f32),
    CurveTo(f32, f32, f32, f32, f32, f32),
    ClosePath,
    Fill,
    Stroke,
}

/// Records every call in order instead of drawing. Useful for inspecting
/// exactly what a fit would draw, and for comparing two runs.
#[derive(Clone, Default, Debug)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    depth: usize,
}

impl RecordingSurface {
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<SurfaceCall> {
        self.calls
    }

    /// How many saves are currently outstanding
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.calls.push(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        // an unbalanced restore is a no-op on a canvas, mirror that
        self.depth = self.depth.saturating_sub(1);
        self.calls.push(SurfaceCall::Restore);
    }

    fn set_fill_style(&mut self, paint: Option<Colour>) {
        self.calls.push(SurfaceCall::FillStyle(paint));
    }

    fn set_stroke_style(&mut self, paint: Option<Colour>) {
        self.calls.push(SurfaceCall::StrokeStyle(paint));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(SurfaceCall::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(SurfaceCall::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(SurfaceCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.calls.push(SurfaceCall::LineTo(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.calls.push(SurfaceCall::QuadTo(x1, y1, x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.calls.push(SurfaceCall::CurveTo(x1, y1, x2, y2, x, y));
    }

    fn close_path(&mut self) {
        self.calls.push(SurfaceCall::ClosePath);
    }

    fn fill(&mut self) {
        self.calls.push(SurfaceCall::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(SurfaceCall::Stroke);
    }
}
