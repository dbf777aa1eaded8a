//! Achievement Engine
//!
//! Walks the criteria table in declaration order and reports every newly
//! satisfied achievement. `UserStats::achievements` is the only idempotence
//! guard: an owned id is skipped before its predicate is even evaluated.

use chrono::{DateTime, Utc};
use ff_core::{ExamResult, UserStats};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

use crate::criteria::{AchievementCriterion, AchievementProgress, BUILTIN_CRITERIA, Rarity};
use crate::{AchievementError, AchievementResult};

/// An unlocked achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub xp_reward: u32,
    pub unlocked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<AchievementProgress>,
}

impl Achievement {
    fn unlock(criterion: &AchievementCriterion, progress: Option<AchievementProgress>, now: DateTime<Utc>) -> Self {
        Self {
            id: criterion.id.to_string(),
            title: criterion.title.to_string(),
            description: criterion.description.to_string(),
            icon: criterion.icon.to_string(),
            rarity: criterion.rarity,
            xp_reward: criterion.xp_reward,
            unlocked_at: now,
            progress,
        }
    }
}

/// Progress towards an achievement that is still locked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockedProgress {
    pub id: String,
    pub title: String,
    pub rarity: Rarity,
    pub progress: AchievementProgress,
}

/// Evaluates a criteria table
#[derive(Debug, Clone)]
pub struct AchievementEngine {
    criteria: Cow<'static, [AchievementCriterion]>,
}

impl Default for AchievementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementEngine {
    /// Engine over the built-in table
    pub fn new() -> Self {
        Self {
            criteria: Cow::Borrowed(BUILTIN_CRITERIA),
        }
    }

    /// Engine over a custom table
    ///
    /// Rejects tables with empty or duplicate ids.
    pub fn with_criteria(criteria: Vec<AchievementCriterion>) -> AchievementResult<Self> {
        validate_table(&criteria)?;
        Ok(Self {
            criteria: Cow::Owned(criteria),
        })
    }

    /// Criteria in evaluation order
    pub fn criteria(&self) -> &[AchievementCriterion] {
        &self.criteria
    }

    /// Look up a criterion by id
    pub fn criterion(&self, id: &str) -> Option<&AchievementCriterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Newly unlocked achievements, stamped with the current time
    pub fn check_achievements(&self, result: &ExamResult, stats: &UserStats) -> Vec<Achievement> {
        self.check_achievements_at(result, stats, Utc::now())
    }

    /// Newly unlocked achievements, stamped with `now`
    ///
    /// Output order matches table order. Several criteria may fire for a
    /// single result; all of them are returned.
    pub fn check_achievements_at(
        &self,
        result: &ExamResult,
        stats: &UserStats,
        now: DateTime<Utc>,
    ) -> Vec<Achievement> {
        let unlocked: Vec<Achievement> = self
            .criteria
            .iter()
            .filter(|c| !stats.has_achievement(c.id))
            .filter(|c| (c.condition)(result, stats))
            .map(|c| {
                let progress = c.progress.map(|f| f(result, stats));
                Achievement::unlock(c, progress, now)
            })
            .collect();

        for achievement in &unlocked {
            log::debug!(
                "[Achievements] Unlocked {} ({}, +{} XP)",
                achievement.id,
                achievement.rarity.display_name(),
                achievement.xp_reward
            );
        }

        unlocked
    }

    /// Progress for criteria that are neither owned nor satisfied now
    pub fn progress_report(&self, result: &ExamResult, stats: &UserStats) -> Vec<LockedProgress> {
        self.criteria
            .iter()
            .filter(|c| !stats.has_achievement(c.id))
            .filter(|c| !(c.condition)(result, stats))
            .filter_map(|c| {
                c.progress.map(|f| LockedProgress {
                    id: c.id.to_string(),
                    title: c.title.to_string(),
                    rarity: c.rarity,
                    progress: f(result, stats),
                })
            })
            .collect()
    }
}

/// Total XP granted by a batch of achievements
pub fn achievement_xp(achievements: &[Achievement]) -> u64 {
    achievements.iter().map(|a| u64::from(a.xp_reward)).sum()
}

fn validate_table(criteria: &[AchievementCriterion]) -> AchievementResult<()> {
    let mut seen = HashSet::with_capacity(criteria.len());
    for (index, criterion) in criteria.iter().enumerate() {
        if criterion.id.is_empty() {
            return Err(AchievementError::EmptyId(index));
        }
        if !seen.insert(criterion.id) {
            return Err(AchievementError::DuplicateId(criterion.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_core::Difficulty;

    fn always(_: &ExamResult, _: &UserStats) -> bool {
        true
    }

    fn never(_: &ExamResult, _: &UserStats) -> bool {
        false
    }

    fn criterion(id: &'static str, condition: crate::ConditionFn) -> AchievementCriterion {
        AchievementCriterion {
            id,
            title: "Test",
            description: "Test criterion",
            icon: "🧪",
            rarity: Rarity::Common,
            xp_reward: 10,
            condition,
            progress: None,
        }
    }

    #[test]
    fn test_builtin_table_validates() {
        assert!(validate_table(BUILTIN_CRITERIA).is_ok());
    }

    #[test]
    fn test_custom_table_order() {
        let engine = AchievementEngine::with_criteria(vec![
            criterion("c", always),
            criterion("a", always),
            criterion("b", never),
        ])
        .unwrap();

        let result = ExamResult::new("any", Difficulty::Beginner, 1, 1);
        let ids: Vec<String> = engine
            .check_achievements(&result, &UserStats::new())
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        let dup = AchievementEngine::with_criteria(vec![criterion("x", always), criterion("x", never)]);
        assert_eq!(dup.unwrap_err(), AchievementError::DuplicateId("x".into()));

        let empty = AchievementEngine::with_criteria(vec![criterion("", always)]);
        assert_eq!(empty.unwrap_err(), AchievementError::EmptyId(0));
    }

    #[test]
    fn test_owned_id_skipped() {
        let engine = AchievementEngine::with_criteria(vec![criterion("only", always)]).unwrap();
        let result = ExamResult::new("any", Difficulty::Beginner, 1, 1);
        let stats = UserStats::new().with_achievements(["only"]);
        assert!(engine.check_achievements(&result, &stats).is_empty());
    }

    #[test]
    fn test_lookup() {
        let engine = AchievementEngine::new();
        assert_eq!(engine.criterion("perfect_score").map(|c| c.rarity), Some(Rarity::Rare));
        assert!(engine.criterion("missing").is_none());
    }

    #[test]
    fn test_achievement_xp_sum() {
        let engine = AchievementEngine::new();
        let result = ExamResult::new("any", Difficulty::Beginner, 10, 10);
        let unlocked = engine.check_achievements(&result, &UserStats::new());
        let expected: u64 = unlocked.iter().map(|a| a.xp_reward as u64).sum();
        assert_eq!(achievement_xp(&unlocked), expected);
        assert!(expected > 0);
    }
}
