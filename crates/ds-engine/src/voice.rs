//! A single scheduled tone: five sine partials under one envelope.

use core::f32::consts::TAU;

use ds_ir::ToneEvent;
use libm::sinf;

use crate::envelope::ToneEnvelope;
use crate::pitch::note_to_freq;

/// Number of partials in the composite timbre.
pub const NUM_PARTIALS: usize = 5;

/// Frequency ratios of the partials. Deliberately inharmonic for a
/// metallic, music-box character.
pub const PARTIAL_RATIOS: [f32; NUM_PARTIALS] = [1.0, 2.01, 3.03, 4.05, 5.8];

/// Relative gain of each partial before the master envelope.
pub const PARTIAL_GAINS: [f32; NUM_PARTIALS] = [1.0, 0.7, 0.5, 0.3, 0.15];

/// Extra render time in seconds past the envelope tail before a voice is
/// force-retired, bounding its lifetime.
pub const RELEASE_MARGIN_SECS: f32 = 0.1;

/// Render state for one tone. Created from a [`ToneEvent`] at submission,
/// silent until its start frame, retired at its stop frame.
#[derive(Clone, Copy, Debug)]
pub struct Voice {
    start_frame: u64,
    stop_frame: u64,
    envelope: ToneEnvelope,
    phases: [f32; NUM_PARTIALS],
    phase_incs: [f32; NUM_PARTIALS],
    inv_sample_rate: f32,
}

impl Voice {
    pub fn new(event: &ToneEvent, sample_rate: u32) -> Self {
        let freq = note_to_freq(event.note);
        let start_secs = if event.start_time > 0.0 { event.start_time } else { 0.0 };
        let start_frame = (start_secs * sample_rate as f64) as u64;
        let lifetime = event.duration + RELEASE_MARGIN_SECS;
        let stop_frame = start_frame + (lifetime * sample_rate as f32) as u64;

        let mut phase_incs = [0.0; NUM_PARTIALS];
        for (inc, ratio) in phase_incs.iter_mut().zip(PARTIAL_RATIOS) {
            *inc = TAU * freq * ratio / sample_rate as f32;
        }

        Self {
            start_frame,
            stop_frame,
            envelope: ToneEnvelope::new(event.loudness, event.duration),
            phases: [0.0; NUM_PARTIALS],
            phase_incs,
            inv_sample_rate: 1.0 / sample_rate as f32,
        }
    }

    /// Whether the voice's bounded lifetime has elapsed at this frame.
    pub fn is_finished(&self, frame: u64) -> bool {
        frame >= self.stop_frame
    }

    /// Render the voice's contribution at an absolute engine frame.
    ///
    /// Must be called with monotonically increasing frames; the partial
    /// phases only advance while the voice is sounding.
    pub fn sample(&mut self, frame: u64) -> f32 {
        if frame < self.start_frame {
            return 0.0;
        }
        let t = (frame - self.start_frame) as f32 * self.inv_sample_rate;
        let amp = self.envelope.amplitude(t);

        let mut sum = 0.0;
        for i in 0..NUM_PARTIALS {
            sum += PARTIAL_GAINS[i] * sinf(self.phases[i]);
            self.phases[i] += self.phase_incs[i];
            if self.phases[i] > TAU {
                self.phases[i] -= TAU;
            }
        }
        amp * sum
    }
}
