//! # Achievement Engine
//!
//! Rule-table achievements and XP rewards for completed exams.
//!
//! - **Criteria**: static, ordered table of `(id, predicate, progress, rarity, reward)`
//! - **Engine**: evaluates the table against an exam result and user stats,
//!   skipping achievements the user already owns
//! - **XP**: multiplicative bonus over score, difficulty, speed, streak and
//!   first attempt, floored once
//!
//! Everything here is pure: no I/O, and `UserStats` is only read.

pub mod criteria;
pub mod engine;
pub mod xp;

pub use criteria::*;
pub use engine::*;
pub use xp::*;

use thiserror::Error;

/// Achievement error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AchievementError {
    #[error("Duplicate achievement id: {0}")]
    DuplicateId(String),

    #[error("Achievement criterion at position {0} has an empty id")]
    EmptyId(usize),
}

pub type AchievementResult<T> = Result<T, AchievementError>;
