//! Headless controller for dotsong.
//!
//! Owns the sketch and the session configuration and manages the audio
//! render thread. Input adapters (pointer capture, a CLI, tests) drive it
//! through `add_point`, `clear_all`, and `play`; the visual side of a
//! drawn dot is their concern, the data append happens here.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

use ds_audio::{AudioOutput, CpalOutput};
use ds_engine::{schedule_sketch, Engine};
use ds_ir::Dot;

// Re-export common types so callers don't need ds-ir/ds-engine directly.
pub use ds_audio::AudioError;
pub use ds_engine::Frame;
pub use ds_ir::{BrushRange, CanvasSize, Color, Palette, ScaleSpec, Sketch, ToneEvent};

/// Commands the audio render thread consumes between blocks.
#[derive(Clone, Debug)]
enum AudioCommand {
    /// Submit a scheduled tone to the engine.
    Tone(ToneEvent),
    /// Resume the output stream if the platform suspended it.
    Resume,
}

/// Frames rendered per loop iteration on the audio thread.
const BLOCK_FRAMES: usize = 256;

/// Command channel depth; a full playback pass is 32 tones.
const COMMAND_QUEUE_DEPTH: usize = 256;

/// Drawing-to-music controller — owns a sketch and plays it on demand.
///
/// The audio backend is lazily initialized on the first non-empty
/// [`play`](Controller::play) and torn down on drop. Calling `play` again
/// while tones are still sounding schedules an independent batch; nothing
/// is cancelled.
pub struct Controller {
    sketch: Sketch,
    canvas: CanvasSize,
    brush: BrushRange,
    palette: Palette,
    audio: Option<AudioHandle>,
}

struct AudioHandle {
    tx: Sender<AudioCommand>,
    sample_rate: u32,
    clock_frames: Arc<AtomicU64>,
    active_tones: Arc<AtomicU64>,
    stop_signal: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl AudioHandle {
    /// Engine clock in seconds, as last published by the render thread.
    fn clock_secs(&self) -> f64 {
        self.clock_frames.load(Ordering::Relaxed) as f64 / self.sample_rate as f64
    }

    fn send(&self, cmd: AudioCommand) {
        if self.tx.try_send(cmd).is_err() {
            log::warn!("audio command queue full; command dropped");
        }
    }
}

impl Controller {
    pub fn new(canvas: CanvasSize, brush: BrushRange) -> Self {
        Self {
            sketch: Sketch::new(),
            canvas,
            brush,
            palette: Palette::default(),
            audio: None,
        }
    }

    // --- Configuration ---

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn brush(&self) -> BrushRange {
        self.brush
    }

    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    pub fn set_brush(&mut self, brush: BrushRange) {
        self.brush = brush;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    // --- Sketch operations ---

    /// Record one drawn dot. Sizes outside the brush range are clamped.
    pub fn add_point(&mut self, x: f32, y: f32, color: Color, size: f32) {
        self.sketch.add_dot(Dot::new(x, y, color, self.brush.clamp(size)));
    }

    /// Reset the sketch to empty.
    pub fn clear_all(&mut self) {
        self.sketch.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.sketch.is_empty()
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    // --- Playback ---

    /// Schedule one playback pass over the current sketch.
    ///
    /// An empty sketch is a logged no-op. Otherwise the audio thread is
    /// lazily started (and resumed, for platforms that suspend idle
    /// outputs), the sketch is scheduled against the engine clock, and
    /// the tones are handed to the render thread. Returns an error only
    /// when the audio backend cannot be brought up.
    pub fn play(&mut self) -> Result<(), AudioError> {
        if self.sketch.is_empty() {
            log::debug!("play requested with an empty sketch; nothing to schedule");
            return Ok(());
        }

        self.ensure_audio()?;
        let audio = match self.audio.as_ref() {
            Some(handle) => handle,
            None => return Err(AudioError::NoDevice),
        };
        audio.send(AudioCommand::Resume);

        let now = audio.clock_secs();
        let events = schedule_sketch(&self.sketch, self.canvas, self.brush, &self.palette, now);
        log::debug!("scheduling {} tones from t = {:.3}s", events.len(), now);
        for event in events {
            audio.send(AudioCommand::Tone(event));
        }
        Ok(())
    }

    /// Whether any scheduled tones are still pending or sounding.
    pub fn is_playing(&self) -> bool {
        self.audio
            .as_ref()
            .is_some_and(|a| a.active_tones.load(Ordering::Relaxed) > 0)
    }

    fn ensure_audio(&mut self) -> Result<(), AudioError> {
        if self.audio.is_none() {
            match start_audio_thread() {
                Ok(handle) => self.audio = Some(handle),
                Err(e) => {
                    log::warn!("audio backend unavailable: {}", e);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    // --- Offline rendering ---

    /// Render the current sketch from clock zero without an audio device.
    ///
    /// Stops at `max_frames` or when the last voice retires, whichever
    /// comes first. Used by tests and headless callers.
    pub fn render_frames(&self, sample_rate: u32, max_frames: usize) -> Vec<Frame> {
        let mut engine = Engine::new(sample_rate);
        for event in schedule_sketch(&self.sketch, self.canvas, self.brush, &self.palette, 0.0) {
            if !engine.submit(&event) {
                log::warn!("voice pool full; tone at {:.3}s dropped", event.start_time);
            }
        }

        let mut frames = Vec::with_capacity(max_frames);
        while !engine.is_idle() && frames.len() < max_frames {
            frames.push(engine.render_frame());
        }
        frames
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(mut audio) = self.audio.take() {
            audio.stop_signal.store(true, Ordering::Relaxed);
            if let Some(handle) = audio.thread.take() {
                let _ = handle.join();
            }
        }
    }
}

fn start_audio_thread() -> Result<AudioHandle, AudioError> {
    let (tx, rx) = crossbeam_channel::bounded::<AudioCommand>(COMMAND_QUEUE_DEPTH);
    let (ready_tx, ready_rx) = crossbeam_channel::bounded::<Result<u32, AudioError>>(1);

    let clock_frames = Arc::new(AtomicU64::new(0));
    let active_tones = Arc::new(AtomicU64::new(0));
    let stop_signal = Arc::new(AtomicBool::new(false));

    let clock = clock_frames.clone();
    let active = active_tones.clone();
    let stop = stop_signal.clone();

    let thread = std::thread::spawn(move || {
        audio_thread(rx, ready_tx, clock, active, stop);
    });

    match ready_rx.recv() {
        Ok(Ok(sample_rate)) => Ok(AudioHandle {
            tx,
            sample_rate,
            clock_frames,
            active_tones,
            stop_signal,
            thread: Some(thread),
        }),
        Ok(Err(e)) => {
            let _ = thread.join();
            Err(e)
        }
        Err(_) => {
            let _ = thread.join();
            Err(AudioError::DeviceInit(
                "audio thread exited during init".into(),
            ))
        }
    }
}

/// Render loop: drain commands, render a block, push it to the device.
///
/// `write_spin` paces the loop against the device's real-time clock, so
/// command draining happens once per block (~6ms at 44.1kHz).
fn audio_thread(
    rx: Receiver<AudioCommand>,
    ready_tx: Sender<Result<u32, AudioError>>,
    clock: Arc<AtomicU64>,
    active: Arc<AtomicU64>,
    stop: Arc<AtomicBool>,
) {
    let (mut output, consumer) = match CpalOutput::new() {
        Ok(v) => v,
        Err(e) => {
            let _ = ready_tx.send(Err(e));
            return;
        }
    };
    if let Err(e) = output.build_stream(consumer) {
        let _ = ready_tx.send(Err(e));
        return;
    }
    if let Err(e) = output.start() {
        let _ = ready_tx.send(Err(e));
        return;
    }

    let sample_rate = output.sample_rate();
    let _ = ready_tx.send(Ok(sample_rate));

    let mut engine = Engine::new(sample_rate);
    let mut block = [Frame::silence(); BLOCK_FRAMES];

    while !stop.load(Ordering::Relaxed) {
        while let Ok(cmd) = rx.try_recv() {
            match cmd {
                AudioCommand::Tone(event) => {
                    if !engine.submit(&event) {
                        log::warn!("voice pool full; tone at {:.3}s dropped", event.start_time);
                    }
                }
                AudioCommand::Resume => {
                    if let Err(e) = output.start() {
                        log::warn!("audio resume failed: {}", e);
                    }
                }
            }
        }

        engine.render_block(&mut block);
        for frame in &block {
            output.write_spin(*frame);
        }

        clock.store(engine.frames_rendered(), Ordering::Relaxed);
        active.store(engine.active_voices() as u64, Ordering::Relaxed);
    }

    let _ = output.stop();
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: CanvasSize = CanvasSize::new(600.0, 400.0);
    const BRUSH: BrushRange = BrushRange::new(2.0, 20.0);

    fn controller() -> Controller {
        Controller::new(CANVAS, BRUSH)
    }

    #[test]
    fn starts_empty() {
        let ctrl = controller();
        assert!(ctrl.is_empty());
        assert!(!ctrl.is_playing());
    }

    #[test]
    fn add_point_records_and_clamps_size() {
        let mut ctrl = controller();
        ctrl.add_point(10.0, 20.0, Color::Red, 100.0);
        assert_eq!(ctrl.sketch().len(), 1);
        assert_eq!(ctrl.sketch().dots()[0].size, 20.0);
    }

    #[test]
    fn clear_all_empties_the_sketch() {
        let mut ctrl = controller();
        ctrl.add_point(10.0, 20.0, Color::Red, 5.0);
        ctrl.clear_all();
        assert!(ctrl.is_empty());
    }

    #[test]
    fn empty_sketch_renders_no_frames() {
        let ctrl = controller();
        assert!(ctrl.render_frames(44100, 44100).is_empty());
    }

    #[test]
    fn offline_render_produces_sound() {
        let mut ctrl = controller();
        ctrl.add_point(10.0, 300.0, Color::Red, 8.0);
        ctrl.add_point(300.0, 100.0, Color::Green, 12.0);

        let frames = ctrl.render_frames(44100, 44100 * 10);
        assert!(!frames.is_empty());
        let energy: f32 = frames.iter().map(|f| f.left.abs()).sum();
        assert!(energy > 1.0);
    }

    #[test]
    fn offline_render_is_deterministic() {
        let mut ctrl = controller();
        ctrl.add_point(50.0, 120.0, Color::Blue, 6.0);
        ctrl.add_point(450.0, 340.0, Color::Purple, 15.0);

        let a = ctrl.render_frames(44100, 22050);
        let b = ctrl.render_frames(44100, 22050);
        assert_eq!(a, b);
    }

    #[test]
    fn play_leaves_the_controller_usable() {
        let mut ctrl = controller();
        ctrl.add_point(10.0, 300.0, Color::Red, 8.0);
        // With or without an audio device, play must return cleanly and
        // schedule from the sketch and configuration as they stand.
        let _ = ctrl.play();
        assert_eq!(ctrl.sketch().len(), 1);
        assert!(!ctrl.render_frames(44100, 1000).is_empty());
    }

    #[test]
    fn render_respects_the_frame_cap() {
        let mut ctrl = controller();
        ctrl.add_point(10.0, 300.0, Color::Red, 8.0);
        let frames = ctrl.render_frames(44100, 1000);
        assert_eq!(frames.len(), 1000);
    }
}
