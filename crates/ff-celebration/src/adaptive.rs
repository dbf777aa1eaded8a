//! Adaptive celebration
//!
//! Starts from the base config for the result's level and applies context
//! rules in a fixed order. Each rule touches only its own fields; when two
//! rules touch the same field the later one wins.

use ff_core::{Difficulty, ExamResult, PerformanceLevel, UserStats};
use serde::{Deserialize, Serialize};

use crate::classifier::get_performance_level;
use crate::config::{CelebrationConfig, get_celebration_config};

/// Minimum percentage for the expert-difficulty override
pub const EXPERT_OVERRIDE_THRESHOLD: f64 = 70.0;

pub const IMPROVED_SUFFIX: &str = " (Improved!)";
pub const GOAL_EXCEEDED_SUFFIX: &str = " (Goal Exceeded!)";
pub const IMPROVED_SUBTITLE: &str = "You're getting better every time!";
pub const FIRST_ATTEMPT_MESSAGE: &str = "Amazing first attempt! You're off to a great start!";
pub const EXPERT_TITLE: &str = "Expert Level Conquered!";

/// Context flags supplied by the result flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationContext {
    /// Score beat the learner's previous attempt
    pub is_improvement: bool,
    pub is_first_attempt: bool,
    /// Weekly goal exceeded by this exam
    pub exceeds_goal: bool,
}

impl AdaptationContext {
    pub fn improvement() -> Self {
        Self {
            is_improvement: true,
            ..Self::default()
        }
    }

    /// Derive flags from the records themselves
    ///
    /// Improvement means beating the running average; the goal counts as
    /// exceeded once this exam pushes weekly progress past the goal.
    pub fn from_records(result: &ExamResult, stats: &UserStats) -> Self {
        Self {
            is_improvement: stats.total_exams > 0 && result.percentage > stats.average_score,
            is_first_attempt: result.is_first_attempt(),
            exceeds_goal: stats.weekly_goal > 0 && stats.weekly_progress >= stats.weekly_goal,
        }
    }
}

/// Build a celebration tailored to the result and context
///
/// `stats` is accepted for parity with the other evaluators; none of the
/// current rules read it.
pub fn get_adaptive_celebration(
    result: &ExamResult,
    _stats: &UserStats,
    context: &AdaptationContext,
) -> CelebrationConfig {
    let level = get_performance_level(result.percentage);
    let mut config = get_celebration_config(level);

    if context.is_improvement && level != PerformanceLevel::Epic {
        config.title.push_str(IMPROVED_SUFFIX);
        config.subtitle = IMPROVED_SUBTITLE.to_string();
        config.effects.glow = true;
    }

    if context.is_first_attempt {
        config.messages.insert(0, FIRST_ATTEMPT_MESSAGE.to_string());
    }

    if context.exceeds_goal {
        config.title.push_str(GOAL_EXCEEDED_SUFFIX);
        config.effects.bounce = true;
    }

    if result.difficulty == Difficulty::Expert && result.percentage >= EXPERT_OVERRIDE_THRESHOLD {
        config.title = EXPERT_TITLE.to_string();
        config.effects.particles = true;
    }

    log::debug!(
        "[Celebration] {} at {:.1}% → \"{}\"",
        level,
        result.percentage,
        config.title
    );

    config
}
