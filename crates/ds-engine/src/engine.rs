//! Mixing engine: bounded voice pool, engine clock, block rendering.

use ds_ir::ToneEvent;
use heapless::Vec as VoiceVec;

use crate::frame::Frame;
use crate::voice::Voice;

/// Maximum simultaneous voices. One playback pass schedules at most one
/// tone per slot (32), so this leaves headroom for an overlapping pass.
pub const MAX_VOICES: usize = 64;

/// The mixing engine. Owns the voice pool and a frame clock that is the
/// time base for scheduled tones; rendering never blocks and never
/// allocates.
pub struct Engine {
    sample_rate: u32,
    frames_rendered: u64,
    voices: VoiceVec<Voice, MAX_VOICES>,
}

impl Engine {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            frames_rendered: 0,
            voices: VoiceVec::new(),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Frames rendered so far (the engine clock).
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Engine clock in seconds. Tone start times are expressed on this
    /// clock.
    pub fn now(&self) -> f64 {
        self.frames_rendered as f64 / self.sample_rate as f64
    }

    /// Submit a scheduled tone. Returns `false` when the voice pool is
    /// full and the tone was dropped.
    pub fn submit(&mut self, event: &ToneEvent) -> bool {
        self.voices.push(Voice::new(event, self.sample_rate)).is_ok()
    }

    /// Voices in the pool, pending ones included.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Whether nothing is sounding or pending.
    pub fn is_idle(&self) -> bool {
        self.voices.is_empty()
    }

    /// Render one frame, retiring voices whose lifetime has elapsed.
    pub fn render_frame(&mut self) -> Frame {
        let frame = self.frames_rendered;
        let mut out = 0.0f32;

        let mut i = 0;
        while i < self.voices.len() {
            if self.voices[i].is_finished(frame) {
                self.voices.swap_remove(i);
                continue;
            }
            out += self.voices[i].sample(frame);
            i += 1;
        }

        self.frames_rendered += 1;
        Frame::mono(out).clamped()
    }

    /// Render a block of frames.
    pub fn render_block(&mut self, out: &mut [Frame]) {
        for frame in out.iter_mut() {
            *frame = self.render_frame();
        }
    }
}
