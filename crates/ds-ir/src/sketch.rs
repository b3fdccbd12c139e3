//! The stroke store: the ordered collection of drawn dots.

use alloc::vec::Vec;

use crate::dot::Dot;

/// Ordered sequence of dots, insertion order = drawing order.
///
/// Append-only while drawing; playback sorts its own snapshot by `x`, so
/// the stored order is never rearranged. Identical dots may repeat — there
/// is no duplicate detection.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    dots: Vec<Dot>,
}

impl Sketch {
    pub fn new() -> Self {
        Self { dots: Vec::new() }
    }

    /// Append a dot. Visual feedback for the dot is the input adapter's
    /// concern; this only records it.
    pub fn add_dot(&mut self, dot: Dot) {
        self.dots.push(dot);
    }

    /// Remove every dot.
    pub fn clear(&mut self) {
        self.dots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }
}
