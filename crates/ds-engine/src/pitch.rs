//! Drawing-position-to-pitch mapping.
//!
//! A dot's vertical position picks a degree out of two octaves of its
//! color's scale; the top of the canvas is the highest degree.

use ds_ir::{map_range, Dot, Palette};

/// Resolve a dot to a MIDI note number.
///
/// The degree index is the dot's `y` mapped from `[canvas_height, 0]`
/// (inverted — the canvas grows downward) onto `[0, span - 1]`, floored
/// and clamped. Out-of-range `y` clamps to the nearest edge degree; there
/// are no error cases.
pub fn resolve_pitch(dot: &Dot, canvas_height: f32, palette: &Palette) -> u8 {
    let scale = palette.scale_for(dot.color);
    let span = scale.degree_span();
    let raw = map_range(dot.y, canvas_height, 0.0, 0.0, (span - 1) as f32);
    let degree = (libm::floorf(raw) as i32).clamp(0, span as i32 - 1) as usize;
    scale.note_for_degree(degree)
}

/// Equal-tempered note-to-frequency conversion, A4 = 440 Hz.
pub fn note_to_freq(note: u8) -> f32 {
    440.0 * libm::powf(2.0, (note as f32 - 69.0) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_ir::{Color, Palette, ScaleSpec};

    const CANVAS_HEIGHT: f32 = 400.0;

    fn red_dot(y: f32) -> Dot {
        Dot::new(0.0, y, Color::Red, 5.0)
    }

    #[test]
    fn bottom_of_canvas_is_the_root() {
        let palette = Palette::default();
        assert_eq!(resolve_pitch(&red_dot(400.0), CANVAS_HEIGHT, &palette), 60);
    }

    #[test]
    fn top_of_canvas_is_the_highest_degree() {
        // Major scale, two octaves: degree 13 = 60 + 12 + 11
        let palette = Palette::default();
        assert_eq!(resolve_pitch(&red_dot(0.0), CANVAS_HEIGHT, &palette), 83);
    }

    #[test]
    fn green_octave_offset_shifts_up() {
        let palette = Palette::default();
        let dot = Dot::new(0.0, 0.0, Color::Green, 5.0);
        assert_eq!(resolve_pitch(&dot, CANVAS_HEIGHT, &palette), 95);
    }

    #[test]
    fn pitch_is_non_increasing_as_y_grows() {
        let palette = Palette::default();
        let mut previous = u8::MAX;
        for y in 0..=400 {
            let note = resolve_pitch(&red_dot(y as f32), CANVAS_HEIGHT, &palette);
            assert!(note <= previous, "pitch rose at y = {}", y);
            previous = note;
        }
    }

    #[test]
    fn out_of_range_y_clamps_to_the_edges() {
        let palette = Palette::default();
        let top = resolve_pitch(&red_dot(0.0), CANVAS_HEIGHT, &palette);
        let bottom = resolve_pitch(&red_dot(400.0), CANVAS_HEIGHT, &palette);
        assert_eq!(resolve_pitch(&red_dot(-50.0), CANVAS_HEIGHT, &palette), top);
        assert_eq!(resolve_pitch(&red_dot(900.0), CANVAS_HEIGHT, &palette), bottom);
    }

    #[test]
    fn unmapped_color_uses_the_default_scale() {
        let mut palette = Palette::empty();
        palette.set(Color::Green, ScaleSpec::major(12));
        // Purple has no entry, so it resolves exactly like the default major
        let purple = Dot::new(0.0, 400.0, Color::Purple, 5.0);
        assert_eq!(resolve_pitch(&purple, CANVAS_HEIGHT, &palette), 60);
    }

    #[test]
    fn a4_is_440() {
        assert!((note_to_freq(69) - 440.0).abs() < 1e-3);
    }

    #[test]
    fn octave_doubles_frequency() {
        let c4 = note_to_freq(60);
        let c5 = note_to_freq(72);
        assert!((c5 / c4 - 2.0).abs() < 1e-4);
    }

    #[test]
    fn middle_c_frequency() {
        assert!((note_to_freq(60) - 261.626).abs() < 0.01);
    }
}
