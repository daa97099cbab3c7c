//! Sine tone generator for keyed segments.

use std::f64::consts::PI;

/// A fixed-frequency sine source.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    pub frequency: f64,
    pub amplitude: f64,
}

impl Oscillator {
    pub fn new(frequency: f64) -> Self {
        Oscillator {
            frequency,
            amplitude: 1.0,
        }
    }

    /// Append `num_samples` of tone spanning `duration` seconds.
    ///
    /// Sample times are evenly spaced over the closed interval
    /// `[0, duration]`: the first sample sits at t=0 and the last at
    /// t=duration. Every segment restarts at phase zero.
    pub fn render_into(&self, out: &mut Vec<f64>, num_samples: usize, duration: f64) {
        let step = if num_samples > 1 {
            duration / (num_samples - 1) as f64
        } else {
            0.0
        };
        out.extend((0..num_samples).map(|i| {
            let t = i as f64 * step;
            self.amplitude * (2.0 * PI * self.frequency * t).sin()
        }));
    }
}

/// Append `num_samples` of silence.
pub fn silence_into(out: &mut Vec<f64>, num_samples: usize) {
    out.resize(out.len() + num_samples, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_zero_at_start() {
        let mut out = Vec::new();
        Oscillator::new(800.0).render_into(&mut out, 800, 0.1);
        assert_eq!(out.len(), 800);
        assert!(out[0].abs() < 1e-12, "Sine should start at 0, got {}", out[0]);
    }

    #[test]
    fn last_sample_lands_on_segment_end() {
        let mut out = Vec::new();
        let (f, d) = (800.0, 0.1);
        Oscillator::new(f).render_into(&mut out, 800, d);
        let expected = (2.0 * PI * f * d).sin();
        assert!((out[799] - expected).abs() < 1e-9);
    }

    #[test]
    fn sine_range_respects_amplitude() {
        let mut out = Vec::new();
        let osc = Oscillator {
            frequency: 440.0,
            amplitude: 0.5,
        };
        osc.render_into(&mut out, 44100, 1.0);
        for s in &out {
            assert!(s.abs() <= 0.5 + 1e-12, "Sine out of range: {s}");
        }
    }

    #[test]
    fn single_sample_segment() {
        let mut out = Vec::new();
        Oscillator::new(440.0).render_into(&mut out, 1, 0.001);
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn silence_appends_zeros() {
        let mut out = vec![1.0];
        silence_into(&mut out, 3);
        assert_eq!(out, vec![1.0, 0.0, 0.0, 0.0]);
    }
}
