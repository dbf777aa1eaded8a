//! Feedback configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::FeedbackResult;
use crate::curve::FadeCurve;
use crate::platform::AudioSessionConfig;

/// Delay before a celebration's completion callback fires
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 200;

/// Volume steps in a fade-in ramp
pub const DEFAULT_FADE_STEPS: u32 = 10;

/// Upper bound on fade-in steps
pub const MAX_FADE_STEPS: u32 = 100;

/// Orchestrator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Sound playback on at startup
    pub enabled: bool,
    /// Haptics on at startup
    pub haptic_enabled: bool,
    /// Global volume at startup (0.0-1.0)
    pub volume: f32,
    /// Delay before `on_complete` after the immediate cues finish
    pub completion_delay_ms: u64,
    pub fade_steps: u32,
    pub fade_curve: FadeCurve,
    /// Session requested first
    pub session: AudioSessionConfig,
    /// Session requested once if the first attempt fails
    pub fallback_session: AudioSessionConfig,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            haptic_enabled: true,
            volume: 1.0,
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
            fade_steps: DEFAULT_FADE_STEPS,
            fade_curve: FadeCurve::Sine,
            session: AudioSessionConfig::primary(),
            fallback_session: AudioSessionConfig::reduced(),
        }
    }
}

impl FeedbackConfig {
    /// Parse from JSON; missing fields take defaults and volume is clamped
    pub fn from_json(json: &str) -> FeedbackResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.volume = clamp_volume(config.volume);
        config.fade_steps = clamp_fade_steps(config.fade_steps);
        Ok(config)
    }

    #[inline]
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }
}

/// Clamp a volume into [0, 1]; NaN becomes silence
#[inline]
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

/// Clamp a fade step count into `1..=MAX_FADE_STEPS`
#[inline]
pub fn clamp_fade_steps(steps: u32) -> u32 {
    steps.clamp(1, MAX_FADE_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FeedbackConfig::default();
        assert!(config.enabled);
        assert_eq!(config.completion_delay(), Duration::from_millis(200));
        assert_eq!(config.fallback_session, AudioSessionConfig::reduced());
    }

    #[test]
    fn test_from_json_partial() {
        let config = FeedbackConfig::from_json(r#"{"volume": 3.5, "fade_curve": "s_curve"}"#).unwrap();
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.fade_curve, FadeCurve::SCurve);
        assert!(config.haptic_enabled);
    }

    #[test]
    fn test_fade_steps_bounded_on_load() {
        let huge = FeedbackConfig::from_json(r#"{"fade_steps": 4294967295}"#).unwrap();
        assert_eq!(huge.fade_steps, MAX_FADE_STEPS);

        let zero = FeedbackConfig::from_json(r#"{"fade_steps": 0}"#).unwrap();
        assert_eq!(zero.fade_steps, 1);
    }

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(-0.5), 0.0);
        assert_eq!(clamp_volume(0.42), 0.42);
        assert_eq!(clamp_volume(f32::INFINITY), 1.0);
        assert_eq!(clamp_volume(f32::NAN), 0.0);
    }
}
