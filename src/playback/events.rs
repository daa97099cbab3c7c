//! Playback events: the timed on/off stream that drives a blink indicator.

use std::ops::Range;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::config::MorseConfig;
use crate::dsp::synth::signal_len;
use crate::error::Result;
use crate::timeline::{self, SegmentKind};
use crate::token::{MorseCode, Symbol};

/// State of the visual indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Light {
    On,
    Off,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// Hold the light in `light` for `duration`, while the audio sink
    /// renders `samples` of the signal buffer.
    Signal {
        symbol: Symbol,
        light: Light,
        #[serde(rename = "durationMs", serialize_with = "millis")]
        duration: Duration,
        samples: Range<usize>,
    },
    /// Legibility pause after each symbol. Both sinks stay idle.
    Pause {
        #[serde(rename = "durationMs", serialize_with = "millis")]
        duration: Duration,
    },
    Done,
}

fn millis<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

impl PlaybackEvent {
    pub fn duration(&self) -> Duration {
        match self {
            PlaybackEvent::Signal { duration, .. } | PlaybackEvent::Pause { duration } => {
                *duration
            }
            PlaybackEvent::Done => Duration::ZERO,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, PlaybackEvent::Done)
    }
}

/// Lazily schedule the events for `code`.
///
/// For every symbol: one `Signal` per timeline segment (tones light the
/// indicator, silences turn it off), then a `Pause` of the configured
/// pacing if that is non-zero. The stream always ends with a single `Done`.
/// Sample ranges are contiguous and cover exactly the buffer that
/// `synthesize` produces for the same code and config. Configs whose
/// durations or sample counts cannot be represented are rejected up front.
pub fn schedule_playback<'a>(
    code: &'a MorseCode,
    config: &MorseConfig,
) -> Result<impl Iterator<Item = PlaybackEvent> + use<'a>> {
    config.validate()?;
    signal_len(code, config)?;
    let config = config.clone();
    let pause = config.pacing_duration();
    let mut cursor = 0usize;

    let events = timeline::steps(code)
        .flat_map(move |step| {
            let mut out = Vec::with_capacity(step.segments.len() + 1);
            for seg in step.segments {
                let n = config.samples_for(seg.units);
                out.push(PlaybackEvent::Signal {
                    symbol: step.symbol,
                    light: match seg.kind {
                        SegmentKind::Tone => Light::On,
                        SegmentKind::Silence => Light::Off,
                    },
                    duration: config.unit_duration(seg.units),
                    samples: cursor..cursor + n,
                });
                cursor += n;
            }
            if !pause.is_zero() {
                out.push(PlaybackEvent::Pause { duration: pause });
            }
            out
        })
        .chain(std::iter::once(PlaybackEvent::Done));

    Ok(events)
}

/// Total on/off time of a stream, ignoring pauses.
pub fn signal_time<'a>(events: impl IntoIterator<Item = &'a PlaybackEvent>) -> Duration {
    events
        .into_iter()
        .filter(|e| matches!(e, PlaybackEvent::Signal { .. }))
        .map(PlaybackEvent::duration)
        .fold(Duration::ZERO, Duration::saturating_add)
}
