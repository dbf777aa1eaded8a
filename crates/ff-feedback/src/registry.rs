//! Sound Registry
//!
//! Static mapping from sound id to bundled asset and playback defaults.

use ff_core::SoundId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::FeedbackResult;

/// Bundled asset and its playback defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundDefinition {
    /// Bundle-relative asset path
    pub asset: String,
    /// Default volume (0.0-1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default)]
    pub looping: bool,
    /// Fade-in duration (0 = start at full volume)
    #[serde(default)]
    pub fade_in_ms: u64,
    /// Estimated length, used to schedule completion callbacks
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_volume() -> f32 {
    0.8
}

fn default_duration_ms() -> u64 {
    1000
}

impl SoundDefinition {
    pub fn new(asset: impl Into<String>, volume: f32, duration_ms: u64) -> Self {
        Self {
            asset: asset.into(),
            volume,
            looping: false,
            fade_in_ms: 0,
            duration_ms,
        }
    }

    pub fn with_fade_in(mut self, fade_in_ms: u64) -> Self {
        self.fade_in_ms = fade_in_ms;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    #[inline]
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Sound id → definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundRegistry {
    sounds: HashMap<SoundId, SoundDefinition>,
}

impl SoundRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled sound set
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(SoundId::Correct, SoundDefinition::new("sounds/correct.mp3", 0.7, 600));
        registry.insert(SoundId::Incorrect, SoundDefinition::new("sounds/incorrect.mp3", 0.6, 700));
        registry.insert(SoundId::Tap, SoundDefinition::new("sounds/tap.mp3", 0.4, 100));
        registry.insert(
            SoundId::Encouragement,
            SoundDefinition::new("sounds/encouragement.mp3", 0.6, 1500).with_fade_in(200),
        );
        registry.insert(SoundId::Celebration, SoundDefinition::new("sounds/celebration.mp3", 0.8, 2500));
        registry.insert(
            SoundId::Fanfare,
            SoundDefinition::new("sounds/fanfare.mp3", 0.9, 3500).with_fade_in(150),
        );
        registry.insert(SoundId::Achievement, SoundDefinition::new("sounds/achievement.mp3", 0.8, 2000));
        registry.insert(SoundId::LevelUp, SoundDefinition::new("sounds/level_up.mp3", 0.8, 2200));
        registry.insert(SoundId::Streak, SoundDefinition::new("sounds/streak.mp3", 0.7, 1200));
        registry.insert(
            SoundId::PerfectScore,
            SoundDefinition::new("sounds/perfect_score.mp3", 0.9, 3000),
        );
        registry
    }

    /// Parse a registry from JSON (`{"correct": {"asset": ...}, ...}`)
    pub fn from_json(json: &str) -> FeedbackResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay another registry's entries on this one
    pub fn merged_with(mut self, overrides: SoundRegistry) -> Self {
        self.sounds.extend(overrides.sounds);
        self
    }

    pub fn insert(&mut self, id: SoundId, definition: SoundDefinition) {
        self.sounds.insert(id, definition);
    }

    pub fn get(&self, id: SoundId) -> Option<&SoundDefinition> {
        self.sounds.get(&id)
    }

    pub fn contains(&self, id: SoundId) -> bool {
        self.sounds.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<SoundId> {
        let mut ids: Vec<SoundId> = self.sounds.keys().copied().collect();
        ids.sort();
        ids
    }
}
