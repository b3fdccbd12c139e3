//! Scheduled tone events.

/// Loudness used when a tone is scheduled without an explicit level.
pub const DEFAULT_LOUDNESS: f32 = 0.3;

/// Duration in seconds used when a tone is scheduled without one.
pub const DEFAULT_DURATION: f32 = 1.0;

/// One tone to be synthesized: produced by the scheduler, consumed by the
/// engine, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneEvent {
    /// Absolute start time in seconds on the engine's clock.
    pub start_time: f64,
    /// MIDI note number.
    pub note: u8,
    /// Peak amplitude in `(0, 1]`.
    pub loudness: f32,
    /// Envelope length in seconds (the voice lives slightly longer).
    pub duration: f32,
}

impl ToneEvent {
    pub const fn new(start_time: f64, note: u8, loudness: f32, duration: f32) -> Self {
        Self { start_time, note, loudness, duration }
    }

    /// A tone with the default loudness and duration.
    pub const fn with_defaults(start_time: f64, note: u8) -> Self {
        Self::new(start_time, note, DEFAULT_LOUDNESS, DEFAULT_DURATION)
    }
}
