//! Sketch-to-tone scheduling.
//!
//! Quantizes a sketch's dots into a fixed time grid and produces the
//! ordered list of `ToneEvent`s for one playback pass. Pure: the same
//! sketch and configuration always yield the same events.

use alloc::vec::Vec;
use core::cmp::Ordering;

use ds_ir::{map_range, BrushRange, CanvasSize, Dot, Palette, Sketch, ToneEvent};

use crate::pitch::resolve_pitch;

/// Length of one playback pass in seconds.
pub const TOTAL_PLAYBACK_SECS: f64 = 8.0;

/// Grid density: four note slots per second.
pub const NOTES_PER_SECOND: u32 = 4;

/// Number of time slots in a pass (`TOTAL_PLAYBACK_SECS * NOTES_PER_SECOND`).
pub const NUM_TIME_STEPS: usize = 32;

/// Duration of one slot in seconds.
pub const TIME_STEP_SECS: f64 = TOTAL_PLAYBACK_SECS / 32.0;

/// Loudness bounds the brush size range maps onto.
pub const LOUDNESS_RANGE: (f32, f32) = (0.2, 0.5);

/// Duration bounds (seconds) the brush size range maps onto.
pub const DURATION_RANGE: (f32, f32) = (0.8, 1.5);

/// Schedule one playback pass over the sketch.
///
/// Dots are snapshot-sorted by `x` (stable, so drawing order breaks ties),
/// bucketed into [`NUM_TIME_STEPS`] slots across the canvas width, and each
/// non-empty slot contributes exactly one tone: its topmost dot (minimum
/// `y`, first-drawn on ties). Start times are `now + slot * TIME_STEP_SECS`
/// on the caller's engine clock.
pub fn schedule_sketch(
    sketch: &Sketch,
    canvas: CanvasSize,
    brush: BrushRange,
    palette: &Palette,
    now: f64,
) -> Vec<ToneEvent> {
    let mut dots: Vec<Dot> = sketch.dots().to_vec();
    dots.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    // One representative per slot: keep the first dot with the smallest y.
    let mut slots: [Option<Dot>; NUM_TIME_STEPS] = [None; NUM_TIME_STEPS];
    for dot in &dots {
        let Some(slot) = slot_for_x(dot.x, canvas.width) else {
            continue;
        };
        match slots[slot] {
            Some(best) if best.y <= dot.y => {}
            _ => slots[slot] = Some(*dot),
        }
    }

    let mut events = Vec::new();
    for (slot, dot) in slots.iter().enumerate() {
        let Some(dot) = dot else { continue };
        let start = now + slot as f64 * TIME_STEP_SECS;
        let note = resolve_pitch(dot, canvas.height, palette);
        let loudness = map_range(
            dot.size,
            brush.min,
            brush.max,
            LOUDNESS_RANGE.0,
            LOUDNESS_RANGE.1,
        );
        let duration = map_range(
            dot.size,
            brush.min,
            brush.max,
            DURATION_RANGE.0,
            DURATION_RANGE.1,
        );
        events.push(ToneEvent::new(start, note, loudness, duration));
    }
    events
}

/// Slot index for a horizontal position, or `None` when it falls outside
/// the grid.
///
/// The mapping lands on `[0, NUM_TIME_STEPS - 1]` and flooring cannot
/// reach `NUM_TIME_STEPS` even at `x == width`; the upper check stays as a
/// boundary clamp for positions past the canvas edge.
pub fn slot_for_x(x: f32, canvas_width: f32) -> Option<usize> {
    let raw = map_range(x, 0.0, canvas_width, 0.0, (NUM_TIME_STEPS - 1) as f32);
    let slot = libm::floorf(raw) as i64;
    if (0..NUM_TIME_STEPS as i64).contains(&slot) {
        Some(slot as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_ir::Color;

    const CANVAS: CanvasSize = CanvasSize::new(600.0, 400.0);
    const BRUSH: BrushRange = BrushRange::new(2.0, 20.0);

    fn schedule(sketch: &Sketch) -> Vec<ToneEvent> {
        schedule_sketch(sketch, CANVAS, BRUSH, &Palette::default(), 0.0)
    }

    #[test]
    fn empty_sketch_schedules_nothing() {
        assert!(schedule(&Sketch::new()).is_empty());
    }

    #[test]
    fn two_corner_dots_land_in_the_outer_slots() {
        // A low red note at the start, a high green note near the end.
        let mut sketch = Sketch::new();
        sketch.add_dot(Dot::new(10.0, 400.0, Color::Red, 5.0));
        sketch.add_dot(Dot::new(590.0, 0.0, Color::Green, 20.0));

        let events = schedule(&sketch);
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].start_time, 0.0);
        assert_eq!(events[0].note, 60);
        assert!((events[0].loudness - 0.25).abs() < 1e-6);

        let last_slot = (events[1].start_time / TIME_STEP_SECS).round() as usize;
        assert!(last_slot >= NUM_TIME_STEPS - 2);
        assert_eq!(events[1].note, 95);
        assert!((events[1].loudness - 0.5).abs() < 1e-6);
        assert!((events[1].duration - 1.5).abs() < 1e-6);
    }

    #[test]
    fn same_slot_keeps_only_the_topmost_dot() {
        let mut sketch = Sketch::new();
        sketch.add_dot(Dot::new(300.0, 350.0, Color::Red, 5.0));
        sketch.add_dot(Dot::new(300.0, 50.0, Color::Red, 5.0));

        let events = schedule(&sketch);
        assert_eq!(events.len(), 1);
        // y = 50 sits near the top, so the note must be well above the root
        assert!(events[0].note > 72);
    }

    #[test]
    fn topmost_tie_keeps_the_first_drawn_dot() {
        let mut sketch = Sketch::new();
        sketch.add_dot(Dot::new(300.0, 50.0, Color::Red, 2.0));
        sketch.add_dot(Dot::new(300.0, 50.0, Color::Red, 20.0));

        let events = schedule(&sketch);
        assert_eq!(events.len(), 1);
        // The first dot's size (2.0) maps to the minimum loudness
        assert!((events[0].loudness - 0.2).abs() < 1e-6);
    }

    #[test]
    fn dots_outside_the_canvas_are_dropped() {
        let mut sketch = Sketch::new();
        sketch.add_dot(Dot::new(-40.0, 100.0, Color::Red, 5.0));
        sketch.add_dot(Dot::new(700.0, 100.0, Color::Red, 5.0));
        assert!(schedule(&sketch).is_empty());
    }

    #[test]
    fn right_edge_maps_to_the_last_slot() {
        assert_eq!(slot_for_x(600.0, 600.0), Some(NUM_TIME_STEPS - 1));
        assert_eq!(slot_for_x(0.0, 600.0), Some(0));
        assert_eq!(slot_for_x(600.1, 600.0), Some(NUM_TIME_STEPS - 1));
        assert_eq!(slot_for_x(650.0, 600.0), None);
    }

    #[test]
    fn events_come_out_in_slot_order() {
        let mut sketch = Sketch::new();
        // Drawn right-to-left; playback must still run left-to-right
        sketch.add_dot(Dot::new(500.0, 200.0, Color::Blue, 10.0));
        sketch.add_dot(Dot::new(100.0, 200.0, Color::Blue, 10.0));
        sketch.add_dot(Dot::new(300.0, 200.0, Color::Blue, 10.0));

        let events = schedule(&sketch);
        assert_eq!(events.len(), 3);
        assert!(events[0].start_time < events[1].start_time);
        assert!(events[1].start_time < events[2].start_time);
    }

    #[test]
    fn scheduling_is_deterministic() {
        let mut sketch = Sketch::new();
        sketch.add_dot(Dot::new(120.0, 80.0, Color::Yellow, 7.0));
        sketch.add_dot(Dot::new(120.5, 310.0, Color::Purple, 12.0));
        sketch.add_dot(Dot::new(480.0, 40.0, Color::Green, 18.0));

        assert_eq!(schedule(&sketch), schedule(&sketch));
    }

    #[test]
    fn start_times_are_offset_by_the_caller_clock() {
        let mut sketch = Sketch::new();
        sketch.add_dot(Dot::new(0.0, 200.0, Color::Red, 5.0));

        let events = schedule_sketch(&sketch, CANVAS, BRUSH, &Palette::default(), 12.5);
        assert_eq!(events[0].start_time, 12.5);
    }

    #[test]
    fn brush_size_maps_loudness_and_duration() {
        let mut sketch = Sketch::new();
        sketch.add_dot(Dot::new(0.0, 200.0, Color::Red, 11.0)); // midpoint size

        let events = schedule(&sketch);
        assert!((events[0].loudness - 0.35).abs() < 1e-6);
        assert!((events[0].duration - 1.15).abs() < 1e-6);
    }

    #[test]
    fn grid_constants_line_up() {
        assert_eq!(NUM_TIME_STEPS, 32);
        assert!((TIME_STEP_SECS - 0.25).abs() < 1e-12);
    }
}
