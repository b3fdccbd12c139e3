//! A single drawn sample.

use crate::color::Color;

/// One painted dot: position, color, and brush size at the moment it was
/// drawn. Immutable once created; dots are only ever appended to a
/// [`Sketch`](crate::Sketch) and destroyed en masse when it is cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Horizontal position, `0.0` at the left edge.
    pub x: f32,
    /// Vertical position, `0.0` at the top edge.
    pub y: f32,
    pub color: Color,
    /// Brush size, within the session's [`BrushRange`](crate::BrushRange).
    pub size: f32,
}

impl Dot {
    pub const fn new(x: f32, y: f32, color: Color, size: f32) -> Self {
        Self { x, y, color, size }
    }
}
