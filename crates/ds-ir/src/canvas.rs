//! Canvas and brush configuration supplied by the UI layer.

/// Canvas dimensions in the drawing surface's own units (pixels, typically).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Valid brush size bounds. Dot sizes are expected to stay within these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushRange {
    pub min: f32,
    pub max: f32,
}

impl BrushRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a size to the brush bounds.
    pub fn clamp(&self, size: f32) -> f32 {
        size.clamp(self.min, self.max)
    }
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// The input range may be inverted (`in_min > in_max`). A degenerate input
/// range maps everything to `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_midpoint() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn map_range_endpoints() {
        assert_eq!(map_range(2.0, 2.0, 20.0, 0.2, 0.5), 0.2);
        assert_eq!(map_range(20.0, 2.0, 20.0, 0.2, 0.5), 0.5);
    }

    #[test]
    fn map_range_inverted_input() {
        // Canvas y grows downward, so pitch mapping uses an inverted range
        assert_eq!(map_range(0.0, 400.0, 0.0, 0.0, 13.0), 13.0);
        assert_eq!(map_range(400.0, 400.0, 0.0, 0.0, 13.0), 0.0);
    }

    #[test]
    fn map_range_extrapolates_outside_input() {
        assert_eq!(map_range(15.0, 0.0, 10.0, 0.0, 10.0), 15.0);
        assert_eq!(map_range(-5.0, 0.0, 10.0, 0.0, 10.0), -5.0);
    }

    #[test]
    fn map_range_degenerate_input_returns_out_min() {
        assert_eq!(map_range(3.0, 7.0, 7.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn brush_clamp() {
        let brush = BrushRange::new(2.0, 20.0);
        assert_eq!(brush.clamp(1.0), 2.0);
        assert_eq!(brush.clamp(5.0), 5.0);
        assert_eq!(brush.clamp(25.0), 20.0);
    }
}
