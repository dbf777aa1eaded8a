//! ff-core: Shared types for Fanfare
//!
//! Plain data handed to the celebration core by the exam-taking flow, plus the
//! small vocabulary (levels, sound ids, haptic patterns) every other crate
//! speaks.

mod error;
mod exam;
mod feedback;
mod level;
mod stats;

pub use error::*;
pub use exam::*;
pub use feedback::*;
pub use level::*;
pub use stats::*;
