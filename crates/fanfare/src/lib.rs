//! # Fanfare: Exam Celebration Core
//!
//! Turns a finished exam into everything the result screen needs:
//!
//! - **Classification**: score → [`PerformanceLevel`] → [`CelebrationConfig`]
//! - **Achievements**: newly unlocked rule-table achievements
//! - **XP**: exam bonus, achievement rewards, resulting level
//! - **Feedback**: sound + haptic celebration via [`FeedbackOrchestrator`]
//!
//! ## Flow
//!
//! ```text
//! ExamResult + UserStats
//!     │
//!     ├── get_performance_level ──▶ get_adaptive_celebration ──▶ CelebrationConfig
//!     ├── AchievementEngine::check_achievements ───────────────▶ Vec<Achievement>
//!     └── calculate_xp_bonus ──────────────────────────────────▶ XP / level
//!           │
//!           v
//!     ExamEvaluation ──▶ UI renders ──▶ celebrate(&feedback, &evaluation)
//! ```
//!
//! Evaluation is pure. Persisting achievements and XP stays with the caller,
//! see [`ExamEvaluation::apply_to`].

pub mod evaluation;

pub use evaluation::*;

pub use ff_achievement as achievement;
pub use ff_celebration as celebration;
pub use ff_core as model;
pub use ff_feedback as feedback;

pub use ff_achievement::{Achievement, AchievementEngine, Rarity};
pub use ff_celebration::{AdaptationContext, CelebrationConfig};
pub use ff_core::{Difficulty, ExamResult, PerformanceLevel, QuestionOutcome, UserStats};
pub use ff_feedback::{CelebrationHandle, FeedbackOrchestrator};
