//! User Stats
//!
//! Caller-owned learner statistics. The celebration core only reads them;
//! persisting updates is the caller's job.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Aggregate statistics for one learner
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub total_exams: u32,
    pub total_correct: u32,
    /// Current daily streak, in days
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Mean score percentage over all exams
    pub average_score: f64,
    /// Subject → mastery percentage
    pub subject_mastery: HashMap<String, f64>,
    /// Achievement ids already granted
    pub achievements: HashSet<String>,
    pub level: u32,
    pub xp: u64,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
}

impl UserStats {
    pub fn new() -> Self {
        Self {
            level: 1,
            ..Self::default()
        }
    }

    /// Whether an achievement id was already granted
    #[inline]
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.contains(id)
    }

    /// Mastery percentage for a subject (0 when unknown)
    pub fn mastery(&self, subject: &str) -> f64 {
        self.subject_mastery.get(subject).copied().unwrap_or(0.0)
    }

    /// Whether the weekly goal has been reached
    pub fn weekly_goal_met(&self) -> bool {
        self.weekly_goal > 0 && self.weekly_progress >= self.weekly_goal
    }

    pub fn with_achievements<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.achievements = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_total_exams(mut self, total_exams: u32) -> Self {
        self.total_exams = total_exams;
        self
    }

    pub fn with_streak(mut self, current_streak: u32) -> Self {
        self.current_streak = current_streak;
        self.longest_streak = self.longest_streak.max(current_streak);
        self
    }

    pub fn with_xp(mut self, xp: u64, level: u32) -> Self {
        self.xp = xp;
        self.level = level;
        self
    }
}
