use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ConfigError, MorseError, Result};
use crate::timeline::LONGEST_SEGMENT;

// ── Conversion Configuration ────────────────────────────────

/// Sound and timing parameters for one conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MorseConfig {
    /// Samples per second.
    pub sample_rate: u32,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Length of one dot (the timing unit) in seconds.
    pub dot_duration: f64,
    /// Extra pause after every symbol of the blink animation, in seconds.
    pub pacing: f64,
    /// Peak amplitude of the tone [0, 1].
    pub amplitude: f64,
}

impl Default for MorseConfig {
    fn default() -> Self {
        MorseConfig {
            sample_rate: 8000,
            frequency: 800.0,
            dot_duration: 0.1,
            pacing: 0.2,
            amplitude: 1.0,
        }
    }
}

impl MorseConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MorseConfig = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(MorseError::invalid("sample_rate", "must be positive"));
        }
        if !self.dot_duration.is_finite() || self.dot_duration <= 0.0 {
            return Err(MorseError::invalid(
                "dot_duration",
                format!("must be a positive number of seconds, got {}", self.dot_duration),
            ));
        }
        // The longest segment must fit both a Duration and a sample count.
        let longest = self.dot_duration * LONGEST_SEGMENT as f64;
        if Duration::try_from_secs_f64(longest).is_err()
            || self.sample_rate as f64 * longest >= usize::MAX as f64
        {
            return Err(MorseError::invalid(
                "dot_duration",
                format!("{} seconds is too long", self.dot_duration),
            ));
        }
        if !self.frequency.is_finite() || self.frequency < 0.0 {
            return Err(MorseError::invalid(
                "frequency",
                format!("must be a non-negative number of Hz, got {}", self.frequency),
            ));
        }
        if !self.pacing.is_finite() || self.pacing < 0.0 {
            return Err(MorseError::invalid(
                "pacing",
                format!("must be a non-negative number of seconds, got {}", self.pacing),
            ));
        }
        if Duration::try_from_secs_f64(self.pacing).is_err() {
            return Err(MorseError::invalid(
                "pacing",
                format!("{} seconds is too long", self.pacing),
            ));
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(MorseError::invalid(
                "amplitude",
                format!("must be within [0, 1], got {}", self.amplitude),
            ));
        }
        Ok(())
    }

    /// Number of samples spanning `units` dot lengths (truncating).
    /// Exact for any validated config and `units <= LONGEST_SEGMENT`.
    pub fn samples_for(&self, units: u32) -> usize {
        (self.sample_rate as f64 * (self.dot_duration * units as f64)) as usize
    }

    /// Wall-clock length of `units` dot lengths. Only call on a validated
    /// config with `units <= LONGEST_SEGMENT`.
    pub fn unit_duration(&self, units: u32) -> Duration {
        Duration::from_secs_f64(self.dot_duration * units as f64)
    }

    pub fn pacing_duration(&self) -> Duration {
        Duration::from_secs_f64(self.pacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_settings() {
        let c = MorseConfig::default();
        assert_eq!(c.sample_rate, 8000);
        assert_eq!(c.frequency, 800.0);
        assert_eq!(c.dot_duration, 0.1);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn truncating_sample_counts() {
        let c = MorseConfig::default();
        assert_eq!(c.samples_for(1), 800);
        assert_eq!(c.samples_for(3), 2400);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let zero_rate = MorseConfig {
            sample_rate: 0,
            ..MorseConfig::default()
        };
        assert!(matches!(
            zero_rate.validate(),
            Err(MorseError::InvalidParameter { name: "sample_rate", .. })
        ));

        for dot in [0.0, -0.1, f64::NAN] {
            let c = MorseConfig {
                dot_duration: dot,
                ..MorseConfig::default()
            };
            assert!(matches!(
                c.validate(),
                Err(MorseError::InvalidParameter { name: "dot_duration", .. })
            ));
        }
    }

    #[test]
    fn rejects_durations_too_long_to_schedule() {
        assert!(matches!(
            MorseConfig::from_json(r#"{"pacing": 1e20}"#),
            Err(MorseError::InvalidParameter { name: "pacing", .. })
        ));
        for json in [r#"{"dotDuration": 1e300}"#, r#"{"dotDuration": 1e19}"#] {
            assert!(matches!(
                MorseConfig::from_json(json),
                Err(MorseError::InvalidParameter { name: "dot_duration", .. })
            ));
        }
        // fits a Duration, but not a sample count at this rate
        let c = MorseConfig {
            sample_rate: u32::MAX,
            dot_duration: 1e10,
            ..MorseConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn long_but_representable_durations_are_accepted() {
        let c = MorseConfig::from_json(r#"{"dotDuration": 3600, "pacing": 86400}"#).unwrap();
        assert_eq!(c.unit_duration(3), Duration::from_secs(3 * 3600));
        assert_eq!(c.pacing_duration(), Duration::from_secs(86400));
    }

    #[test]
    fn json_uses_camel_case_and_defaults() {
        let c = MorseConfig::from_json(r#"{"sampleRate": 44100, "frequency": 600}"#).unwrap();
        assert_eq!(c.sample_rate, 44100);
        assert_eq!(c.frequency, 600.0);
        assert_eq!(c.dot_duration, 0.1);
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            MorseConfig::from_json("{not json"),
            Err(MorseError::Config(_))
        ));
        assert!(matches!(
            MorseConfig::from_json(r#"{"dotDuration": 0}"#),
            Err(MorseError::InvalidParameter { .. })
        ));
    }
}
