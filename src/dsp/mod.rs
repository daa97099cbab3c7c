//! DSP: tone synthesis and WAV output.
//!
//! Everything here is pure and deterministic: the same code and config
//! always produce the same samples, with no dependency on wall-clock time.

pub mod oscillator;
pub mod renderer;
pub mod synth;

pub use synth::{SignalBuffer, synthesize};
