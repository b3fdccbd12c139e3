//! Audio output trait and error types.

use ds_engine::Frame;

/// Error type for audio operations.
#[derive(Debug)]
pub enum AudioError {
    /// Failed to initialize audio device
    DeviceInit(String),
    /// Failed to create audio stream
    StreamCreate(String),
    /// Playback error
    Playback(String),
    /// No audio device available
    NoDevice,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::DeviceInit(msg) => write!(f, "Device init error: {}", msg),
            AudioError::StreamCreate(msg) => write!(f, "Stream create error: {}", msg),
            AudioError::Playback(msg) => write!(f, "Playback error: {}", msg),
            AudioError::NoDevice => write!(f, "No audio device available"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Sink for rendered phrase audio.
///
/// Some platforms suspend an output that has been idle between phrases,
/// so the render thread issues `start` again at the top of every
/// playback pass; implementations must treat it as resume when the
/// stream is already live.
pub trait AudioOutput {
    /// Sample rate the engine must render at.
    fn sample_rate(&self) -> u32;

    /// Write frames to the output, non-blocking; frames are dropped when
    /// the device buffer is full.
    fn write(&mut self, frames: &[Frame]);

    /// Start the output, or resume it after an idle suspension.
    fn start(&mut self) -> Result<(), AudioError>;

    /// Stop the output; a later `start` brings it back.
    fn stop(&mut self) -> Result<(), AudioError>;
}
