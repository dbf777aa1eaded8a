//! Haptic mapping
//!
//! Semantic patterns resolve to exactly one platform primitive.

use ff_core::HapticPattern;
use serde::{Deserialize, Serialize};

use crate::platform::{HapticBackend, PlatformError};

/// Impact feedback strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Notification feedback kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// Platform haptic primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPrimitive {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    Selection,
}

impl HapticPrimitive {
    /// Resolve a semantic pattern
    pub fn for_pattern(pattern: HapticPattern) -> Self {
        match pattern {
            HapticPattern::Light => Self::Impact(ImpactStyle::Light),
            HapticPattern::Medium => Self::Impact(ImpactStyle::Medium),
            HapticPattern::Heavy => Self::Impact(ImpactStyle::Heavy),
            HapticPattern::Success => Self::Notification(NotificationKind::Success),
            HapticPattern::Warning => Self::Notification(NotificationKind::Warning),
            HapticPattern::Error => Self::Notification(NotificationKind::Error),
            HapticPattern::Selection => Self::Selection,
        }
    }

    /// Fire this primitive on a backend
    pub async fn dispatch(self, backend: &dyn HapticBackend) -> Result<(), PlatformError> {
        match self {
            Self::Impact(style) => backend.impact(style).await,
            Self::Notification(kind) => backend.notification(kind).await,
            Self::Selection => backend.selection().await,
        }
    }
}
