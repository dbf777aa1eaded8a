//! Celebration cue tables
//!
//! Each performance level owns a list of `{action, delay}` cues. Zero-delay
//! cues fire together when the celebration starts; the rest are scheduled.

use ff_core::{HapticPattern, PerformanceLevel, SoundId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a cue does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum FeedbackAction {
    Sound(SoundId),
    Haptic(HapticPattern),
}

/// One timed action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackCue {
    pub action: FeedbackAction,
    /// Offset from the start of the celebration
    #[serde(default)]
    pub delay_ms: u64,
}

impl FeedbackCue {
    pub fn sound(id: SoundId) -> Self {
        Self {
            action: FeedbackAction::Sound(id),
            delay_ms: 0,
        }
    }

    pub fn haptic(pattern: HapticPattern) -> Self {
        Self {
            action: FeedbackAction::Haptic(pattern),
            delay_ms: 0,
        }
    }

    pub fn after_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.delay_ms == 0
    }
}

/// Cues for every performance level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueTable {
    pub epic: Vec<FeedbackCue>,
    pub great: Vec<FeedbackCue>,
    pub good: Vec<FeedbackCue>,
    pub supportive: Vec<FeedbackCue>,
}

impl Default for CueTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CueTable {
    /// Bundled celebration choreography
    pub fn builtin() -> Self {
        Self {
            epic: vec![
                FeedbackCue::sound(SoundId::Fanfare),
                FeedbackCue::haptic(HapticPattern::Heavy),
                FeedbackCue::haptic(HapticPattern::Success).after_ms(150),
                FeedbackCue::sound(SoundId::Celebration).after_ms(400),
                FeedbackCue::haptic(HapticPattern::Medium).after_ms(400),
            ],
            great: vec![
                FeedbackCue::sound(SoundId::Celebration),
                FeedbackCue::haptic(HapticPattern::Success),
                FeedbackCue::haptic(HapticPattern::Light).after_ms(200),
            ],
            good: vec![
                FeedbackCue::sound(SoundId::Correct),
                FeedbackCue::haptic(HapticPattern::Light),
            ],
            supportive: vec![
                FeedbackCue::sound(SoundId::Encouragement),
                FeedbackCue::haptic(HapticPattern::Selection),
            ],
        }
    }

    pub fn for_level(&self, level: PerformanceLevel) -> &[FeedbackCue] {
        match level {
            PerformanceLevel::Epic => &self.epic,
            PerformanceLevel::Great => &self.great,
            PerformanceLevel::Good => &self.good,
            PerformanceLevel::Supportive => &self.supportive,
        }
    }

    /// Replace the cues of one level
    pub fn set(&mut self, level: PerformanceLevel, cues: Vec<FeedbackCue>) {
        match level {
            PerformanceLevel::Epic => self.epic = cues,
            PerformanceLevel::Great => self.great = cues,
            PerformanceLevel::Good => self.good = cues,
            PerformanceLevel::Supportive => self.supportive = cues,
        }
    }

    /// Latest cue offset for a level
    pub fn span(&self, level: PerformanceLevel) -> Duration {
        self.for_level(level)
            .iter()
            .map(FeedbackCue::delay)
            .max()
            .unwrap_or_default()
    }
}
