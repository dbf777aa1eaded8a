//! Performance Level

use serde::{Deserialize, Serialize};

/// Performance band derived from a score percentage
///
/// Ordered weakest to strongest, so `Epic > Great > Good > Supportive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Supportive,
    Good,
    Great,
    Epic,
}

impl PerformanceLevel {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Supportive => "Supportive",
            Self::Good => "Good",
            Self::Great => "Great",
            Self::Epic => "Epic",
        }
    }

    /// Get level index (for ordering)
    pub fn index(&self) -> u8 {
        match self {
            Self::Supportive => 0,
            Self::Good => 1,
            Self::Great => 2,
            Self::Epic => 3,
        }
    }

    /// All levels, strongest first
    pub fn all() -> [PerformanceLevel; 4] {
        [Self::Epic, Self::Great, Self::Good, Self::Supportive]
    }
}

impl std::fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
