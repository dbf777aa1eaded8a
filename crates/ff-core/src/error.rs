//! Error types for Fanfare core records

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Percentage out of range: {0}")]
    InvalidPercentage(f64),

    #[error("Correct answers ({correct}) exceed total questions ({total})")]
    AnswerCountMismatch { correct: u32, total: u32 },

    #[error("Question list has {actual} entries, expected {expected}")]
    QuestionCountMismatch { expected: u32, actual: usize },
}

/// Result type alias
pub type CoreResult<T> = Result<T, CoreError>;
