//! Celebration Configs
//!
//! One declarative bundle per performance level. The table is built once and
//! every lookup hands out a fresh copy, so callers may adapt it freely.

use ff_core::{HapticPattern, PerformanceLevel, SoundId};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIG PARTS
// ═══════════════════════════════════════════════════════════════════════════════

/// How loud the celebration is overall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationIntensity {
    Gentle,
    Moderate,
    High,
    Maximum,
}

/// Color triple (hex strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebrationColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl CelebrationColors {
    fn new(primary: &str, secondary: &str, accent: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }
}

/// Visual effect flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CelebrationEffects {
    pub confetti: bool,
    pub particles: bool,
    pub glow: bool,
    pub shake: bool,
    pub bounce: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// CELEBRATION CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything the result screen needs to celebrate one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationConfig {
    pub level: PerformanceLevel,
    pub intensity: CelebrationIntensity,
    pub title: String,
    pub subtitle: String,
    pub emoji: String,
    pub colors: CelebrationColors,
    pub effects: CelebrationEffects,
    /// Sound to play when the screen appears
    pub sound: SoundId,
    /// Haptic to fire when the screen appears
    pub haptic: HapticPattern,
    /// How long the animation runs (ms)
    pub duration_ms: u64,
    /// Headline messages, one is picked per display
    pub messages: Vec<String>,
    /// Secondary encouragement lines
    pub encouragements: Vec<String>,
}

impl CelebrationConfig {
    /// Pick one headline message from the pool
    pub fn pick_message<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.messages.choose(rng).map(String::as_str)
    }

    /// Pick one encouragement line from the pool
    pub fn pick_encouragement<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.encouragements.choose(rng).map(String::as_str)
    }

    /// Fresh configs for every level, strongest first
    pub fn all_levels() -> Vec<CelebrationConfig> {
        PerformanceLevel::all()
            .into_iter()
            .map(get_celebration_config)
            .collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static CELEBRATION_TABLE: LazyLock<[CelebrationConfig; 4]> = LazyLock::new(|| {
    [
        CelebrationConfig {
            level: PerformanceLevel::Epic,
            intensity: CelebrationIntensity::Maximum,
            title: "Outstanding!".to_string(),
            subtitle: "You absolutely crushed it!".to_string(),
            emoji: "🏆".to_string(),
            colors: CelebrationColors::new("#FFD700", "#FFA500", "#FF6B6B"),
            effects: CelebrationEffects {
                confetti: true,
                particles: true,
                glow: true,
                shake: false,
                bounce: true,
            },
            sound: SoundId::Fanfare,
            haptic: HapticPattern::Heavy,
            duration_ms: 4000,
            messages: strings(&[
                "Phenomenal work!",
                "You're a true master!",
                "Legendary performance!",
                "Absolutely brilliant!",
            ]),
            encouragements: strings(&[
                "Keep setting the bar this high.",
                "Ready for an even tougher challenge?",
            ]),
        },
        CelebrationConfig {
            level: PerformanceLevel::Great,
            intensity: CelebrationIntensity::High,
            title: "Great Job!".to_string(),
            subtitle: "Excellent performance!".to_string(),
            emoji: "🌟".to_string(),
            colors: CelebrationColors::new("#4CAF50", "#8BC34A", "#CDDC39"),
            effects: CelebrationEffects {
                confetti: true,
                particles: false,
                glow: false,
                shake: false,
                bounce: true,
            },
            sound: SoundId::Celebration,
            haptic: HapticPattern::Success,
            duration_ms: 3000,
            messages: strings(&[
                "Impressive work!",
                "You really know your stuff!",
                "Fantastic effort!",
            ]),
            encouragements: strings(&[
                "Epic is within reach.",
                "A little more practice and you'll be unstoppable.",
            ]),
        },
        CelebrationConfig {
            level: PerformanceLevel::Good,
            intensity: CelebrationIntensity::Moderate,
            title: "Well Done!".to_string(),
            subtitle: "Solid effort!".to_string(),
            emoji: "👍".to_string(),
            colors: CelebrationColors::new("#2196F3", "#03A9F4", "#00BCD4"),
            effects: CelebrationEffects {
                confetti: false,
                particles: false,
                glow: false,
                shake: false,
                bounce: true,
            },
            sound: SoundId::Correct,
            haptic: HapticPattern::Light,
            duration_ms: 2000,
            messages: strings(&[
                "Nice work!",
                "You're making progress!",
                "Good job, keep going!",
            ]),
            encouragements: strings(&[
                "Review the missed questions to level up.",
                "Every attempt makes you stronger.",
            ]),
        },
        CelebrationConfig {
            level: PerformanceLevel::Supportive,
            intensity: CelebrationIntensity::Gentle,
            title: "Keep Going!".to_string(),
            subtitle: "Every expert was once a beginner".to_string(),
            emoji: "💪".to_string(),
            colors: CelebrationColors::new("#9C27B0", "#BA68C8", "#E1BEE7"),
            effects: CelebrationEffects::default(),
            sound: SoundId::Encouragement,
            haptic: HapticPattern::Selection,
            duration_ms: 1500,
            messages: strings(&[
                "Don't give up!",
                "Practice makes perfect!",
                "You've got this!",
            ]),
            encouragements: strings(&[
                "Try reviewing the topic before your next attempt.",
                "Small steps add up to big wins.",
            ]),
        },
    ]
});

/// Look up the static config for a level
pub fn get_celebration_config(level: PerformanceLevel) -> CelebrationConfig {
    let index = match level {
        PerformanceLevel::Epic => 0,
        PerformanceLevel::Great => 1,
        PerformanceLevel::Good => 2,
        PerformanceLevel::Supportive => 3,
    };
    CELEBRATION_TABLE[index].clone()
}
