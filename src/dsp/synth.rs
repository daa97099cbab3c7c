//! Synthesizer: renders a MorseCode to a signal buffer.

use std::ops::Range;

use tracing::debug;

use crate::config::MorseConfig;
use crate::error::{MorseError, Result};
use crate::timeline::{self, SegmentKind};
use crate::token::MorseCode;

use super::oscillator::{Oscillator, silence_into};
use super::renderer;

/// Mono samples at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBuffer {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

impl SignalBuffer {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playing time in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn chunk(&self, range: Range<usize>) -> &[f64] {
        let end = range.end.min(self.samples.len());
        let start = range.start.min(end);
        &self.samples[start..end]
    }

    /// Samples narrowed to `f32`, the format audio devices accept.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples.iter().map(|&s| s as f32).collect()
    }

    /// Encode as a 16-bit mono PCM WAV file.
    pub fn to_wav(&self) -> Vec<u8> {
        renderer::render_wav(&self.samples, self.sample_rate)
    }
}

/// Number of samples `synthesize` produces for `code`, or `InvalidParameter`
/// if the signal would not fit in memory.
pub fn signal_len(code: &MorseCode, config: &MorseConfig) -> Result<usize> {
    timeline::steps(code)
        .flat_map(|step| step.segments.iter())
        .try_fold(0usize, |total, seg| total.checked_add(config.samples_for(seg.units)))
        .ok_or_else(|| too_long(config))
}

fn too_long(config: &MorseConfig) -> MorseError {
    MorseError::invalid(
        "dot_duration",
        format!("{} seconds makes the signal too long", config.dot_duration),
    )
}

/// Render `code` to audio.
///
/// Each symbol's segments are emitted in order: a tone or a silence of the
/// symbol's length, then the one-unit gap. Segment sample counts truncate
/// `sample_rate * seconds`, so the length depends only on the symbols and
/// the config.
pub fn synthesize(code: &MorseCode, config: &MorseConfig) -> Result<SignalBuffer> {
    config.validate()?;

    let total = signal_len(code, config)?;
    let mut samples: Vec<f64> = Vec::new();
    samples
        .try_reserve_exact(total)
        .map_err(|_| too_long(config))?;

    let osc = Oscillator {
        frequency: config.frequency,
        amplitude: config.amplitude,
    };

    for step in timeline::steps(code) {
        for seg in step.segments {
            let n = config.samples_for(seg.units);
            match seg.kind {
                SegmentKind::Tone => {
                    let secs = config.dot_duration * seg.units as f64;
                    osc.render_into(&mut samples, n, secs);
                }
                SegmentKind::Silence => silence_into(&mut samples, n),
            }
        }
    }

    debug!(
        samples = samples.len(),
        sample_rate = config.sample_rate,
        "synthesized morse signal"
    );

    Ok(SignalBuffer {
        samples,
        sample_rate: config.sample_rate,
    })
}
