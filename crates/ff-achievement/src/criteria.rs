//! Achievement Criteria
//!
//! The built-in rule table. Order matters: the engine evaluates and reports
//! criteria in exactly this order.

use ff_core::{Difficulty, ExamResult, UserStats};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// Achievement rarity, commonest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

/// Progress towards a countable achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub current: u32,
    pub total: u32,
}

impl AchievementProgress {
    /// Progress capped at `total`
    pub fn capped(current: u32, total: u32) -> Self {
        Self {
            current: current.min(total),
            total,
        }
    }

    /// Completion ratio (0.0-1.0)
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// Pure predicate over an exam result and the stats before it
pub type ConditionFn = fn(&ExamResult, &UserStats) -> bool;

/// Pure progress measure over an exam result and the stats before it
pub type ProgressFn = fn(&ExamResult, &UserStats) -> AchievementProgress;

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct AchievementCriterion {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub xp_reward: u32,
    pub condition: ConditionFn,
    pub progress: Option<ProgressFn>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// THRESHOLDS
// ═══════════════════════════════════════════════════════════════════════════════

pub const EXCELLENT_PERCENTAGE: f64 = 90.0;
pub const PERFECT_PERCENTAGE: f64 = 100.0;
pub const SPEED_DEMON_MIN_PERCENTAGE: f64 = 80.0;
pub const EXPERT_CONQUEROR_MIN_PERCENTAGE: f64 = 70.0;
/// Points above the running average that count as a comeback
pub const COMEBACK_MARGIN: f64 = 20.0;
pub const SUBJECT_MASTER_MIN_MASTERY: f64 = 80.0;

pub const STREAK_STARTER_DAYS: u32 = 3;
pub const WEEK_WARRIOR_DAYS: u32 = 7;
pub const MONTH_MASTER_DAYS: u32 = 30;
pub const HOT_STREAK_ANSWERS: u32 = 10;
pub const DEDICATED_LEARNER_EXAMS: u32 = 10;
pub const EXAM_VETERAN_EXAMS: u32 = 50;

/// Streak as seen by the rules: the better of the result and the stats
#[inline]
pub fn effective_streak(result: &ExamResult, stats: &UserStats) -> u32 {
    result.streak.max(stats.current_streak)
}

/// Exams completed including the one being evaluated
#[inline]
fn exams_including_current(stats: &UserStats) -> u32 {
    stats.total_exams.saturating_add(1)
}

// ═══════════════════════════════════════════════════════════════════════════════
// PREDICATES
// ═══════════════════════════════════════════════════════════════════════════════

fn is_first_exam(_: &ExamResult, stats: &UserStats) -> bool {
    stats.total_exams == 0
}

fn is_excellent(result: &ExamResult, _: &UserStats) -> bool {
    result.percentage >= EXCELLENT_PERCENTAGE
}

fn is_perfect(result: &ExamResult, _: &UserStats) -> bool {
    result.percentage >= PERFECT_PERCENTAGE
}

fn has_streak_start(result: &ExamResult, stats: &UserStats) -> bool {
    effective_streak(result, stats) >= STREAK_STARTER_DAYS
}

fn streak_start_progress(result: &ExamResult, stats: &UserStats) -> AchievementProgress {
    AchievementProgress::capped(effective_streak(result, stats), STREAK_STARTER_DAYS)
}

fn has_week_streak(result: &ExamResult, stats: &UserStats) -> bool {
    effective_streak(result, stats) >= WEEK_WARRIOR_DAYS
}

fn week_streak_progress(result: &ExamResult, stats: &UserStats) -> AchievementProgress {
    AchievementProgress::capped(effective_streak(result, stats), WEEK_WARRIOR_DAYS)
}

fn has_month_streak(result: &ExamResult, stats: &UserStats) -> bool {
    effective_streak(result, stats) >= MONTH_MASTER_DAYS
}

fn month_streak_progress(result: &ExamResult, stats: &UserStats) -> AchievementProgress {
    AchievementProgress::capped(effective_streak(result, stats), MONTH_MASTER_DAYS)
}

fn is_speedy(result: &ExamResult, _: &UserStats) -> bool {
    result.finished_in_half_time() && result.percentage >= SPEED_DEMON_MIN_PERCENTAGE
}

fn conquered_expert(result: &ExamResult, _: &UserStats) -> bool {
    result.difficulty == Difficulty::Expert
        && result.percentage >= EXPERT_CONQUEROR_MIN_PERCENTAGE
}

fn is_comeback(result: &ExamResult, stats: &UserStats) -> bool {
    result.previous_attempts > 0
        && stats.total_exams > 0
        && result.percentage >= stats.average_score + COMEBACK_MARGIN
}

fn has_hot_streak(result: &ExamResult, _: &UserStats) -> bool {
    result.longest_correct_run() >= HOT_STREAK_ANSWERS
}

fn hot_streak_progress(result: &ExamResult, _: &UserStats) -> AchievementProgress {
    AchievementProgress::capped(result.longest_correct_run(), HOT_STREAK_ANSWERS)
}

fn mastered_subject(result: &ExamResult, stats: &UserStats) -> bool {
    result.percentage >= EXCELLENT_PERCENTAGE
        && stats.mastery(&result.subject) >= SUBJECT_MASTER_MIN_MASTERY
}

fn is_dedicated(_: &ExamResult, stats: &UserStats) -> bool {
    exams_including_current(stats) >= DEDICATED_LEARNER_EXAMS
}

fn dedication_progress(_: &ExamResult, stats: &UserStats) -> AchievementProgress {
    AchievementProgress::capped(exams_including_current(stats), DEDICATED_LEARNER_EXAMS)
}

fn is_veteran(_: &ExamResult, stats: &UserStats) -> bool {
    exams_including_current(stats) >= EXAM_VETERAN_EXAMS
}

fn veteran_progress(_: &ExamResult, stats: &UserStats) -> AchievementProgress {
    AchievementProgress::capped(exams_including_current(stats), EXAM_VETERAN_EXAMS)
}

// ═══════════════════════════════════════════════════════════════════════════════
// BUILT-IN TABLE
// ═══════════════════════════════════════════════════════════════════════════════

/// Built-in achievements in evaluation order
pub static BUILTIN_CRITERIA: &[AchievementCriterion] = &[
    AchievementCriterion {
        id: "first_steps",
        title: "First Steps",
        description: "Complete your first exam",
        icon: "🎯",
        rarity: Rarity::Common,
        xp_reward: 50,
        condition: is_first_exam,
        progress: None,
    },
    AchievementCriterion {
        id: "excellent_performer",
        title: "Excellent Performer",
        description: "Score 90% or higher on an exam",
        icon: "⭐",
        rarity: Rarity::Uncommon,
        xp_reward: 100,
        condition: is_excellent,
        progress: None,
    },
    AchievementCriterion {
        id: "perfect_score",
        title: "Perfectionist",
        description: "Score 100% on an exam",
        icon: "💯",
        rarity: Rarity::Rare,
        xp_reward: 200,
        condition: is_perfect,
        progress: None,
    },
    AchievementCriterion {
        id: "streak_starter",
        title: "Streak Starter",
        description: "Study 3 days in a row",
        icon: "🔥",
        rarity: Rarity::Common,
        xp_reward: 75,
        condition: has_streak_start,
        progress: Some(streak_start_progress),
    },
    AchievementCriterion {
        id: "week_warrior",
        title: "Week Warrior",
        description: "Study 7 days in a row",
        icon: "⚡",
        rarity: Rarity::Rare,
        xp_reward: 150,
        condition: has_week_streak,
        progress: Some(week_streak_progress),
    },
    AchievementCriterion {
        id: "month_master",
        title: "Month Master",
        description: "Study 30 days in a row",
        icon: "👑",
        rarity: Rarity::Legendary,
        xp_reward: 500,
        condition: has_month_streak,
        progress: Some(month_streak_progress),
    },
    AchievementCriterion {
        id: "speed_demon",
        title: "Speed Demon",
        description: "Score 80% or more using at most half the time limit",
        icon: "🚀",
        rarity: Rarity::Rare,
        xp_reward: 150,
        condition: is_speedy,
        progress: None,
    },
    AchievementCriterion {
        id: "expert_conqueror",
        title: "Expert Conqueror",
        description: "Score 70% or more on an expert exam",
        icon: "🧠",
        rarity: Rarity::Epic,
        xp_reward: 300,
        condition: conquered_expert,
        progress: None,
    },
    AchievementCriterion {
        id: "comeback_kid",
        title: "Comeback Kid",
        description: "Beat your average by 20 points on a retake",
        icon: "📈",
        rarity: Rarity::Uncommon,
        xp_reward: 100,
        condition: is_comeback,
        progress: None,
    },
    AchievementCriterion {
        id: "hot_streak",
        title: "Hot Streak",
        description: "Answer 10 questions in a row correctly",
        icon: "🎯",
        rarity: Rarity::Uncommon,
        xp_reward: 100,
        condition: has_hot_streak,
        progress: Some(hot_streak_progress),
    },
    AchievementCriterion {
        id: "subject_master",
        title: "Subject Master",
        description: "Score 90% or more in a subject you have mastered",
        icon: "🎓",
        rarity: Rarity::Epic,
        xp_reward: 250,
        condition: mastered_subject,
        progress: None,
    },
    AchievementCriterion {
        id: "dedicated_learner",
        title: "Dedicated Learner",
        description: "Complete 10 exams",
        icon: "📚",
        rarity: Rarity::Uncommon,
        xp_reward: 100,
        condition: is_dedicated,
        progress: Some(dedication_progress),
    },
    AchievementCriterion {
        id: "exam_veteran",
        title: "Exam Veteran",
        description: "Complete 50 exams",
        icon: "🏅",
        rarity: Rarity::Epic,
        xp_reward: 400,
        condition: is_veteran,
        progress: Some(veteran_progress),
    },
];
