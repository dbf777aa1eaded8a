//! XP Calculator
//!
//! Bonus XP for one exam:
//!
//! | Factor         | Condition                         | Multiplier |
//! |----------------|-----------------------------------|------------|
//! | Base           | `floor(percentage * 10)`          | -          |
//! | Difficulty     | beginner / intermediate / advanced / expert | 1.0 / 1.2 / 1.5 / 2.0 |
//! | Speed          | `time_spent <= time_limit * 0.5`  | 1.3        |
//! | Streak         | streak ≥ 7 days                   | 1.2        |
//! | First attempt  | no previous attempts              | 1.1        |
//!
//! Multipliers are held as integer percentages and the product is floored
//! exactly once, so the result does not depend on application order or on
//! binary float rounding.

use ff_core::{Difficulty, ExamResult, UserStats};
use serde::{Deserialize, Serialize};

use crate::criteria::effective_streak;

/// Base XP per score percent
pub const BASE_XP_PER_PERCENT: f64 = 10.0;

/// Multipliers are expressed in hundredths
pub const MULTIPLIER_SCALE: u64 = 100;

pub const SPEED_BONUS_PCT: u64 = 130;
pub const STREAK_BONUS_PCT: u64 = 120;
pub const FIRST_ATTEMPT_BONUS_PCT: u64 = 110;

/// Streak length that earns the streak bonus
pub const STREAK_BONUS_DAYS: u32 = 7;

/// XP needed per level step; level `n` starts at `LEVEL_XP_STEP * n(n-1)/2`
pub const LEVEL_XP_STEP: u64 = 1000;

/// Difficulty multiplier in hundredths
pub fn difficulty_multiplier_pct(difficulty: Difficulty) -> u64 {
    match difficulty {
        Difficulty::Beginner => 100,
        Difficulty::Intermediate => 120,
        Difficulty::Advanced => 150,
        Difficulty::Expert => 200,
    }
}

/// Individual factors behind an XP bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpBreakdown {
    pub base: u64,
    pub difficulty_pct: u64,
    pub speed_pct: u64,
    pub streak_pct: u64,
    pub first_attempt_pct: u64,
    pub total: u64,
}

impl XpBreakdown {
    /// Combined multiplier as a float (display only)
    pub fn multiplier(&self) -> f64 {
        let scale = MULTIPLIER_SCALE as f64;
        (self.difficulty_pct as f64 / scale)
            * (self.speed_pct as f64 / scale)
            * (self.streak_pct as f64 / scale)
            * (self.first_attempt_pct as f64 / scale)
    }
}

/// Factor-by-factor XP computation
pub fn xp_breakdown(result: &ExamResult, stats: &UserStats) -> XpBreakdown {
    // Negative and NaN percentages saturate to zero.
    let base = (result.percentage * BASE_XP_PER_PERCENT).floor().max(0.0) as u64;

    let difficulty_pct = difficulty_multiplier_pct(result.difficulty);
    let speed_pct = if result.finished_in_half_time() {
        SPEED_BONUS_PCT
    } else {
        MULTIPLIER_SCALE
    };
    let streak_pct = if effective_streak(result, stats) >= STREAK_BONUS_DAYS {
        STREAK_BONUS_PCT
    } else {
        MULTIPLIER_SCALE
    };
    let first_attempt_pct = if result.is_first_attempt() {
        FIRST_ATTEMPT_BONUS_PCT
    } else {
        MULTIPLIER_SCALE
    };

    let numerator = u128::from(base)
        * u128::from(difficulty_pct)
        * u128::from(speed_pct)
        * u128::from(streak_pct)
        * u128::from(first_attempt_pct);
    let denominator = u128::from(MULTIPLIER_SCALE).pow(4);
    let total = u64::try_from(numerator / denominator).unwrap_or(u64::MAX);

    XpBreakdown {
        base,
        difficulty_pct,
        speed_pct,
        streak_pct,
        first_attempt_pct,
        total,
    }
}

/// Bonus XP for an exam
pub fn calculate_xp_bonus(result: &ExamResult, stats: &UserStats) -> u64 {
    xp_breakdown(result, stats).total
}

/// Total XP at which a level starts (saturates at `u64::MAX`)
pub fn xp_for_level(level: u32) -> u64 {
    let n = u64::from(level.max(1));
    (LEVEL_XP_STEP / 2).saturating_mul(n).saturating_mul(n - 1)
}

/// Level reached with a given XP total (levels start at 1)
///
/// Largest `L` with `step/2 * L(L-1) <= xp`, i.e. `(2L-1)^2 <= 4k+1` for
/// `k = xp / (step/2)`.
pub fn level_for_xp(xp: u64) -> u32 {
    let k = xp / (LEVEL_XP_STEP / 2);
    let level = (k.saturating_mul(4).saturating_add(1).isqrt() + 1) / 2;
    u32::try_from(level).unwrap_or(u32::MAX)
}
