//! Exam evaluation pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ff_achievement::{
    Achievement, AchievementEngine, achievement_xp, calculate_xp_bonus, level_for_xp,
};
use ff_celebration::{AdaptationContext, CelebrationConfig, get_adaptive_celebration, get_performance_level};
use ff_core::{ExamResult, PerformanceLevel, UserStats};
use ff_feedback::{CelebrationHandle, CelebrationOptions, FeedbackOrchestrator};

/// Everything the result screen shows for one exam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamEvaluation {
    pub level: PerformanceLevel,
    /// Adapted celebration bundle for the UI
    pub celebration: CelebrationConfig,
    /// Newly unlocked, in table order
    pub achievements: Vec<Achievement>,
    /// Exam XP bonus
    pub xp_bonus: u64,
    /// Sum of the unlocked achievements' rewards
    pub achievement_xp: u64,
    pub total_xp: u64,
    /// Level after adding `total_xp` to the learner's XP
    pub new_level: u32,
    pub leveled_up: bool,
}

impl ExamEvaluation {
    pub fn has_achievements(&self) -> bool {
        !self.achievements.is_empty()
    }

    /// Record the evaluation into caller-owned stats
    ///
    /// Grants the achievement ids, adds XP and updates the level. Exam
    /// counters and averages are left to the caller.
    pub fn apply_to(&self, stats: &mut UserStats) {
        stats
            .achievements
            .extend(self.achievements.iter().map(|a| a.id.clone()));
        stats.xp = stats.xp.saturating_add(self.total_xp);
        stats.level = stats.level.max(self.new_level);
    }
}

/// Runs the classifier, achievement engine and XP calculator together
#[derive(Debug, Clone, Default)]
pub struct ExamEvaluator {
    engine: AchievementEngine,
}

impl ExamEvaluator {
    /// Evaluator over the built-in achievement table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: AchievementEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &AchievementEngine {
        &self.engine
    }

    /// Evaluate an exam, stamping achievements with the current time
    pub fn evaluate(
        &self,
        result: &ExamResult,
        stats: &UserStats,
        context: &AdaptationContext,
    ) -> ExamEvaluation {
        self.evaluate_at(result, stats, context, Utc::now())
    }

    /// Evaluate an exam, stamping achievements with `now`
    pub fn evaluate_at(
        &self,
        result: &ExamResult,
        stats: &UserStats,
        context: &AdaptationContext,
        now: DateTime<Utc>,
    ) -> ExamEvaluation {
        if let Err(err) = result.validate() {
            log::warn!("[Evaluation] Inconsistent exam record for {}: {}", result.subject, err);
        }

        let level = get_performance_level(result.percentage);
        let celebration = get_adaptive_celebration(result, stats, context);

        let achievements = self.engine.check_achievements_at(result, stats, now);
        let xp_bonus = calculate_xp_bonus(result, stats);
        let achievement_xp = achievement_xp(&achievements);
        let total_xp = xp_bonus.saturating_add(achievement_xp);

        let new_level = level_for_xp(stats.xp.saturating_add(total_xp));
        let leveled_up = new_level > stats.level;

        log::info!(
            "[Evaluation] {} {:.1}% → {}, {} achievement(s), +{} XP{}",
            result.subject,
            result.percentage,
            level,
            achievements.len(),
            total_xp,
            if leveled_up { ", level up" } else { "" }
        );

        ExamEvaluation {
            level,
            celebration,
            achievements,
            xp_bonus,
            achievement_xp,
            total_xp,
            new_level,
            leveled_up,
        }
    }
}

/// Evaluate an exam against the built-in achievement table
pub fn evaluate_exam(
    result: &ExamResult,
    stats: &UserStats,
    context: &AdaptationContext,
) -> ExamEvaluation {
    ExamEvaluator::new().evaluate(result, stats, context)
}

/// Fire the feedback for an evaluation
///
/// Runs the level's celebration cues, then the achievement cue if anything
/// was unlocked. The returned handle owns the celebration's delayed cues.
pub async fn celebrate(
    feedback: &FeedbackOrchestrator,
    evaluation: &ExamEvaluation,
) -> CelebrationHandle {
    let handle = feedback
        .execute_celebration_feedback(evaluation.level, CelebrationOptions::default())
        .await;

    if evaluation.has_achievements() {
        feedback.play_achievement_feedback().await;
    }
    handle
}
