//! Fanfare Feedback Orchestrator
//!
//! Synchronized sound + haptic feedback for the results screen:
//! - Audio session lifecycle with one fallback attempt, then silent degradation
//! - Sound cache with load-once semantics and evict-on-failure
//! - Semantic haptic patterns mapped onto platform primitives
//! - Per-level celebration cue tables run as a cancellable task set
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   FEEDBACK ORCHESTRATOR                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   Result UI                         FeedbackOrchestrator        │
//! │   ┌──────────────────────┐         ┌──────────────────────┐     │
//! │   │ execute_celebration_ │         │ AudioState machine   │     │
//! │   │   feedback(level)    │────────▶│ SoundCache           │     │
//! │   │ play_sound(id)       │         │ CueTable             │     │
//! │   │ execute_haptic(p)    │         └──────────┬───────────┘     │
//! │   └──────────────────────┘                    │                 │
//! │                                  ┌────────────┴────────────┐    │
//! │                                  ▼                         ▼    │
//! │                          ┌──────────────┐        ┌─────────────┐│
//! │                          │ AudioBackend │        │HapticBackend││
//! │                          └──────────────┘        └─────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ff_feedback::{FeedbackOrchestrator, FeedbackConfig};
//!
//! let feedback = FeedbackOrchestrator::builder(audio, haptics)
//!     .config(FeedbackConfig::default())
//!     .build();
//! feedback.init().await;
//! feedback.preload_sounds(&[SoundId::Correct, SoundId::Fanfare]).await;
//!
//! let celebration = feedback
//!     .execute_celebration_feedback(PerformanceLevel::Epic, CelebrationOptions::default())
//!     .await;
//! // Dismissed early? Drop pending cues.
//! celebration.cancel();
//! ```

pub mod cache;
pub mod config;
pub mod cues;
pub mod curve;
pub mod haptic;
pub mod handle;
pub mod orchestrator;
pub mod platform;
pub mod registry;

pub use cache::{CacheState, SoundCache};
pub use config::FeedbackConfig;
pub use cues::{CueTable, FeedbackAction, FeedbackCue};
pub use curve::FadeCurve;
pub use haptic::{HapticPrimitive, ImpactStyle, NotificationKind};
pub use handle::CelebrationHandle;
pub use orchestrator::{
    AudioState, Callback, CelebrationOptions, FeedbackOrchestrator, FeedbackOrchestratorBuilder,
    FeedbackOutcome, HapticOptions, PlaySoundOptions, PreloadReport, SkipReason,
};
pub use platform::{AudioBackend, AudioHandle, AudioSessionConfig, HapticBackend, PlatformError};
pub use registry::{SoundDefinition, SoundRegistry};

pub use ff_core::{HapticPattern, PerformanceLevel, SoundId};

use thiserror::Error;

/// Feedback error types
///
/// These never cross the orchestrator's public playback API; they are
/// logged at the boundary and turned into a [`FeedbackOutcome`].
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Unknown sound: {0}")]
    UnknownSound(SoundId),

    #[error("Failed to load sound {id}: {source}")]
    Load {
        id: SoundId,
        #[source]
        source: PlatformError,
    },

    #[error("Failed to play sound {id}: {source}")]
    Playback {
        id: SoundId,
        #[source]
        source: PlatformError,
    },

    #[error("Haptic {pattern} failed: {source}")]
    Haptic {
        pattern: HapticPattern,
        #[source]
        source: PlatformError,
    },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type FeedbackResult<T> = Result<T, FeedbackError>;
