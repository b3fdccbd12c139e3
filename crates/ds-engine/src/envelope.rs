//! Master amplitude envelope shared by all partials of a tone.

use libm::powf;

/// Linear attack length in seconds.
pub const ATTACK_SECS: f32 = 0.005;

/// Fraction of the duration at which the first decay segment ends.
pub const DECAY_SPLIT: f32 = 0.3;

/// Fraction of the peak loudness reached at the decay split.
pub const DECAY_LEVEL: f32 = 0.1;

/// Near-silent floor for exponential segments. An exponential ramp must
/// never target exactly zero.
pub const ENV_FLOOR: f32 = 1.0e-4;

/// Attack/decay amplitude shape of one tone: zero at the start, linear
/// ramp to the peak at [`ATTACK_SECS`], constant-ratio decay to a tenth of
/// the peak at 30% of the duration, then constant-ratio decay to
/// [`ENV_FLOOR`] at the full duration.
#[derive(Clone, Copy, Debug)]
pub struct ToneEnvelope {
    loudness: f32,
    duration: f32,
}

impl ToneEnvelope {
    pub fn new(loudness: f32, duration: f32) -> Self {
        Self {
            loudness: loudness.max(ENV_FLOOR),
            duration: duration.max(2.0 * ATTACK_SECS),
        }
    }

    /// Amplitude at `t` seconds after the tone's start.
    ///
    /// Past the full duration the envelope holds the floor; the voice is
    /// retired shortly after.
    pub fn amplitude(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t < ATTACK_SECS {
            return self.loudness * t / ATTACK_SECS;
        }
        let split = DECAY_SPLIT * self.duration;
        let mid = (self.loudness * DECAY_LEVEL).max(ENV_FLOOR);
        if t < split {
            let u = (t - ATTACK_SECS) / (split - ATTACK_SECS);
            return exp_ramp(self.loudness, mid, u);
        }
        if t < self.duration {
            let u = (t - split) / (self.duration - split);
            return exp_ramp(mid, ENV_FLOOR, u);
        }
        ENV_FLOOR
    }
}

/// Constant-ratio interpolation from `from` to `to` at normalized
/// position `u` in `[0, 1]`. Both endpoints must be positive.
fn exp_ramp(from: f32, to: f32, u: f32) -> f32 {
    from * powf(to / from, u)
}
