//! Playback engine for dotsong.
//!
//! Turns a sketch of colored dots into scheduled tones and renders them
//! as audio frames: the scheduler quantizes dots into a fixed time grid,
//! the pitch mapper resolves each dot's note through its color's scale,
//! and the engine mixes additive-synthesis voices on its own clock.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod engine;
mod envelope;
mod frame;
mod pitch;
pub mod scheduler;
mod voice;

pub use engine::{Engine, MAX_VOICES};
pub use envelope::{ToneEnvelope, ATTACK_SECS, ENV_FLOOR};
pub use frame::Frame;
pub use pitch::{note_to_freq, resolve_pitch};
pub use scheduler::{
    schedule_sketch, NUM_TIME_STEPS, TIME_STEP_SECS, TOTAL_PLAYBACK_SECS,
};
pub use voice::{Voice, PARTIAL_GAINS, PARTIAL_RATIOS, RELEASE_MARGIN_SECS};
