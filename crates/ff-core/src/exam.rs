//! Exam Result
//!
//! Immutable record produced once per completed exam by the exam-taking flow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{CoreError, CoreResult};

// ═══════════════════════════════════════════════════════════════════════════════
// DIFFICULTY
// ═══════════════════════════════════════════════════════════════════════════════

/// Exam difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// All tiers, easiest first
    pub fn all() -> [Difficulty; 4] {
        [
            Self::Beginner,
            Self::Intermediate,
            Self::Advanced,
            Self::Expert,
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// QUESTION OUTCOME
// ═══════════════════════════════════════════════════════════════════════════════

/// Per-question correctness and time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub correct: bool,
    /// Seconds spent on this question
    pub time_spent: u32,
}

impl QuestionOutcome {
    pub fn new(correct: bool, time_spent: u32) -> Self {
        Self {
            correct,
            time_spent,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXAM RESULT
// ═══════════════════════════════════════════════════════════════════════════════

/// Outcome of one completed exam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    /// Raw points scored
    pub score: u32,
    /// Score percentage (0-100)
    pub percentage: f64,
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Seconds spent on the whole exam
    pub time_spent: u32,
    /// Seconds allowed (0 = untimed)
    pub time_limit: u32,
    pub difficulty: Difficulty,
    pub subject: String,
    #[serde(default)]
    pub topics: BTreeSet<String>,
    /// Earlier attempts at this exam
    #[serde(default)]
    pub previous_attempts: u32,
    /// Current daily streak, in days
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub questions: Vec<QuestionOutcome>,
}

impl ExamResult {
    /// Create a result from answer counts
    ///
    /// `score` is the number of correct answers and `percentage` is derived
    /// from the counts (0 when there are no questions).
    pub fn new(
        subject: impl Into<String>,
        difficulty: Difficulty,
        correct_answers: u32,
        total_questions: u32,
    ) -> Self {
        let percentage = if total_questions == 0 {
            0.0
        } else {
            f64::from(correct_answers) * 100.0 / f64::from(total_questions)
        };

        Self {
            score: correct_answers,
            percentage,
            total_questions,
            correct_answers,
            time_spent: 0,
            time_limit: 0,
            difficulty,
            subject: subject.into(),
            topics: BTreeSet::new(),
            previous_attempts: 0,
            streak: 0,
            questions: Vec::new(),
        }
    }

    /// Override the derived percentage
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Set time spent and time limit (seconds)
    pub fn with_timing(mut self, time_spent: u32, time_limit: u32) -> Self {
        self.time_spent = time_spent;
        self.time_limit = time_limit;
        self
    }

    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = streak;
        self
    }

    pub fn with_previous_attempts(mut self, previous_attempts: u32) -> Self {
        self.previous_attempts = previous_attempts;
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the per-question list
    pub fn with_questions(mut self, questions: Vec<QuestionOutcome>) -> Self {
        let total = questions
            .iter()
            .map(|q| q.time_spent)
            .fold(0u32, u32::saturating_add);
        self.time_spent = self.time_spent.max(total);
        self.questions = questions;
        self
    }

    /// Whether this is the first attempt at the exam
    #[inline]
    pub fn is_first_attempt(&self) -> bool {
        self.previous_attempts == 0
    }

    /// Whether the exam finished within half the time limit
    ///
    /// Untimed exams never count as fast.
    #[inline]
    pub fn finished_in_half_time(&self) -> bool {
        self.time_limit > 0 && u64::from(self.time_spent) * 2 <= u64::from(self.time_limit)
    }

    /// Longest run of consecutive correct answers
    pub fn longest_correct_run(&self) -> u32 {
        let mut best = 0;
        let mut run = 0;
        for q in &self.questions {
            if q.correct {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    /// Check the record for internal consistency
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=100.0).contains(&self.percentage) {
            return Err(CoreError::InvalidPercentage(self.percentage));
        }
        if self.correct_answers > self.total_questions {
            return Err(CoreError::AnswerCountMismatch {
                correct: self.correct_answers,
                total: self.total_questions,
            });
        }
        if !self.questions.is_empty() && self.questions.len() != self.total_questions as usize {
            return Err(CoreError::QuestionCountMismatch {
                expected: self.total_questions,
                actual: self.questions.len(),
            });
        }
        Ok(())
    }
}
