//! The drawing surface capability text is fitted onto.
//!
//! [Surface] models a small subset of a 2D canvas context: a stack of style
//! state, fill and stroke paints, rectangle fills, and path construction.
//! Coordinates are in surface units with the origin at the top-left and y
//! growing downward.

use crate::colour::Colour;
use std::ops::{Deref, DerefMut};

/// A 2D drawing context. A paint of `None` is transparent: painting with it
/// leaves the surface untouched.
pub trait Surface {
    /// Push the current style state
    fn save(&mut self);
    /// Pop the most recently saved style state
    fn restore(&mut self);

    fn set_fill_style(&mut self, paint: Option<Colour>);
    fn set_stroke_style(&mut self, paint: Option<Colour>);

    /// Fill a rectangle with the current fill style, without touching the current path
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Discard the current path and start a new, empty one
    fn begin_path(&mut self);
    /// Add a closed rectangle subpath to the current path
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32);
    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32);
    fn close_path(&mut self);

    /// Fill the current path with the current fill style. The path is kept.
    fn fill(&mut self);
    /// Stroke the current path with the current stroke style. The path is kept.
    fn stroke(&mut self);
}

/// Scoped acquisition of a surface's style state: saves on creation and
/// restores when dropped, so the save stack stays balanced on every exit path.
pub struct SurfaceGuard<'s> {
    surface: &'s mut dyn Surface,
}

impl<'s> SurfaceGuard<'s> {
    pub fn new(surface: &'s mut dyn Surface) -> SurfaceGuard<'s> {
        surface.save();
        SurfaceGuard { surface }
    }
}

impl Drop for SurfaceGuard<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

impl<'s> Deref for SurfaceGuard<'s> {
    type Target = dyn Surface + 's;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'s> DerefMut for SurfaceGuard<'s> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}
