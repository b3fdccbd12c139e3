//! Scales and the color-to-scale palette.

use arrayvec::ArrayVec;

use crate::color::Color;

/// The fixed root all scales are built from (middle C in MIDI numbering).
pub const ROOT_NOTE: u8 = 60;

/// A named set of semitone intervals plus an octave offset, selected by
/// drawing color. Two octaves of the scale are rendered across the canvas
/// height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaleSpec {
    /// Whole-scale shift in semitones (±12 for an octave).
    pub octave_offset: i8,
    intervals: ArrayVec<u8, 12>,
}

impl ScaleSpec {
    /// Build a scale from semitone offsets relative to the root.
    ///
    /// An empty slice yields the root-only scale; entries past the
    /// twelfth are ignored. `note_for_degree` always has at least one
    /// interval to index.
    pub fn new(octave_offset: i8, intervals: &[u8]) -> Self {
        let mut intervals: ArrayVec<u8, 12> = intervals.iter().copied().take(12).collect();
        if intervals.is_empty() {
            intervals.push(0);
        }
        Self { octave_offset, intervals }
    }

    /// Diatonic major.
    pub fn major(octave_offset: i8) -> Self {
        Self::new(octave_offset, &[0, 2, 4, 5, 7, 9, 11])
    }

    /// Natural minor.
    pub fn natural_minor(octave_offset: i8) -> Self {
        Self::new(octave_offset, &[0, 2, 3, 5, 7, 8, 10])
    }

    /// Major pentatonic.
    pub fn major_pentatonic(octave_offset: i8) -> Self {
        Self::new(octave_offset, &[0, 2, 4, 7, 9])
    }

    /// Minor pentatonic.
    pub fn minor_pentatonic(octave_offset: i8) -> Self {
        Self::new(octave_offset, &[0, 3, 5, 7, 10])
    }

    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of scale degrees rendered across the canvas (two octaves).
    pub fn degree_span(&self) -> usize {
        2 * self.intervals.len()
    }

    /// Note number for a degree index in `[0, degree_span)`.
    pub fn note_for_degree(&self, degree: usize) -> u8 {
        let len = self.intervals.len();
        let octave = (degree / len) as i16;
        let interval = self.intervals[degree % len] as i16;
        (ROOT_NOTE as i16 + self.octave_offset as i16 + 12 * octave + interval) as u8
    }
}

impl Default for ScaleSpec {
    /// The fallback scale: diatonic major with no octave offset.
    fn default() -> Self {
        Self::major(0)
    }
}

/// Maps drawing colors to scales. Colors without an entry resolve to the
/// default scale, so an unmapped color is never an error.
#[derive(Clone, Debug)]
pub struct Palette {
    scales: [Option<ScaleSpec>; Color::COUNT],
    fallback: ScaleSpec,
}

impl Palette {
    /// A palette with no color entries; every color resolves to the
    /// default scale.
    pub fn empty() -> Self {
        Self {
            scales: [None, None, None, None, None, None],
            fallback: ScaleSpec::default(),
        }
    }

    pub fn set(&mut self, color: Color, spec: ScaleSpec) {
        self.scales[color.index()] = Some(spec);
    }

    /// Scale for a color, falling back to the default scale when the
    /// palette has no entry.
    pub fn scale_for(&self, color: Color) -> &ScaleSpec {
        self.scales[color.index()].as_ref().unwrap_or(&self.fallback)
    }
}

impl Default for Palette {
    /// The stock palette: warm colors in the root octave, green and
    /// yellow an octave up, blue an octave down.
    fn default() -> Self {
        let mut palette = Palette::empty();
        palette.set(Color::Red, ScaleSpec::major(0));
        palette.set(Color::Orange, ScaleSpec::major_pentatonic(0));
        palette.set(Color::Yellow, ScaleSpec::major_pentatonic(12));
        palette.set(Color::Green, ScaleSpec::major(12));
        palette.set(Color::Blue, ScaleSpec::minor_pentatonic(-12));
        palette.set(Color::Purple, ScaleSpec::natural_minor(0));
        palette
    }
}
