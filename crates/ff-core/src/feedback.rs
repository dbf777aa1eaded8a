//! Feedback vocabulary
//!
//! Sound identifiers and semantic haptic patterns shared by the celebration
//! configs and the feedback orchestrator.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// SOUND ID
// ═══════════════════════════════════════════════════════════════════════════════

/// Identifier of a bundled sound asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundId {
    Correct,
    Incorrect,
    Tap,
    Encouragement,
    Celebration,
    Fanfare,
    Achievement,
    LevelUp,
    Streak,
    PerfectScore,
}

impl SoundId {
    /// Stable string key (matches the serde name)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Tap => "tap",
            Self::Encouragement => "encouragement",
            Self::Celebration => "celebration",
            Self::Fanfare => "fanfare",
            Self::Achievement => "achievement",
            Self::LevelUp => "level_up",
            Self::Streak => "streak",
            Self::PerfectScore => "perfect_score",
        }
    }

    /// Every bundled sound
    pub fn all() -> [SoundId; 10] {
        [
            Self::Correct,
            Self::Incorrect,
            Self::Tap,
            Self::Encouragement,
            Self::Celebration,
            Self::Fanfare,
            Self::Achievement,
            Self::LevelUp,
            Self::Streak,
            Self::PerfectScore,
        ]
    }
}

impl std::fmt::Display for SoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HAPTIC PATTERN
// ═══════════════════════════════════════════════════════════════════════════════

/// Semantic vibration intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
    #[default]
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
    Selection,
}

impl HapticPattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Selection => "selection",
        }
    }
}

impl std::fmt::Display for HapticPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
