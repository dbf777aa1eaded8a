//! Score classification

use ff_core::PerformanceLevel;

/// Lowest percentage classified as [`PerformanceLevel::Epic`]
pub const EPIC_THRESHOLD: f64 = 90.0;

/// Lowest percentage classified as [`PerformanceLevel::Great`]
pub const GREAT_THRESHOLD: f64 = 75.0;

/// Lowest percentage classified as [`PerformanceLevel::Good`]
pub const GOOD_THRESHOLD: f64 = 60.0;

/// Great threshold used by the results screen's local helper.
///
/// It disagrees with [`GREAT_THRESHOLD`]; classification here never uses it.
/// Kept visible so the mismatch stays flagged until the UI is aligned.
pub const LEGACY_UI_GREAT_THRESHOLD: f64 = 70.0;

/// Classify a score percentage
///
/// Bands are half-open and cover the whole line: `[90, ∞)` epic,
/// `[75, 90)` great, `[60, 75)` good, everything else (including NaN)
/// supportive.
pub fn get_performance_level(percentage: f64) -> PerformanceLevel {
    match percentage {
        p if p >= EPIC_THRESHOLD => PerformanceLevel::Epic,
        p if p >= GREAT_THRESHOLD => PerformanceLevel::Great,
        p if p >= GOOD_THRESHOLD => PerformanceLevel::Good,
        _ => PerformanceLevel::Supportive,
    }
}

/// Lowest percentage that reaches a level
pub fn level_threshold(level: PerformanceLevel) -> f64 {
    match level {
        PerformanceLevel::Epic => EPIC_THRESHOLD,
        PerformanceLevel::Great => GREAT_THRESHOLD,
        PerformanceLevel::Good => GOOD_THRESHOLD,
        PerformanceLevel::Supportive => 0.0,
    }
}
