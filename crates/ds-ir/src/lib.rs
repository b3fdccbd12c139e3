//! Core IR types for the dotsong engine.
//!
//! This crate defines the intermediate representation shared by the
//! engine and the controller: drawn dots, the sketch that collects them,
//! the color palette with its scale assignments, and the tone events the
//! scheduler produces.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod canvas;
mod color;
mod dot;
mod scale;
mod sketch;
mod tone;

pub use canvas::{map_range, BrushRange, CanvasSize};
pub use color::Color;
pub use dot::Dot;
pub use scale::{Palette, ScaleSpec, ROOT_NOTE};
pub use sketch::Sketch;
pub use tone::{ToneEvent, DEFAULT_DURATION, DEFAULT_LOUDNESS};
