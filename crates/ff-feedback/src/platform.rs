//! Platform bindings
//!
//! The only I/O the feedback core performs goes through these two traits.
//! Mobile shells implement them over the native audio player and haptic
//! engine; tests implement them with recording fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::haptic::{ImpactStyle, NotificationKind};

/// Opaque handle to a loaded, playable sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioHandle(pub u64);

/// Error reported by a platform binding
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Audio session unavailable: {0}")]
    Session(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Invalid handle: {0:?}")]
    InvalidHandle(AudioHandle),

    #[error("Haptics unsupported on this device")]
    HapticsUnsupported,

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Audio session setup requested from the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSessionConfig {
    /// Play even when the ringer switch is silent
    pub plays_in_silent_mode: bool,
    /// Let other apps' audio keep playing
    pub mix_with_others: bool,
    /// Lower other apps' audio while ours plays
    pub duck_others: bool,
    pub stays_active_in_background: bool,
}

impl Default for AudioSessionConfig {
    fn default() -> Self {
        Self::primary()
    }
}

impl AudioSessionConfig {
    /// Full-featured session
    pub fn primary() -> Self {
        Self {
            plays_in_silent_mode: true,
            mix_with_others: false,
            duck_others: true,
            stays_active_in_background: false,
        }
    }

    /// Minimal session tried after the primary one fails
    pub fn reduced() -> Self {
        Self {
            plays_in_silent_mode: false,
            mix_with_others: true,
            duck_others: false,
            stays_active_in_background: false,
        }
    }
}

/// Platform audio player
#[async_trait]
pub trait AudioBackend: Send + Sync {
    /// Configure the process audio session
    async fn configure_session(&self, config: &AudioSessionConfig) -> Result<(), PlatformError>;

    /// Load a bundled asset
    async fn load(&self, asset: &str, looping: bool) -> Result<AudioHandle, PlatformError>;

    async fn set_position(&self, handle: AudioHandle, position: Duration) -> Result<(), PlatformError>;

    /// Set playback volume (0.0-1.0)
    async fn set_volume(&self, handle: AudioHandle, volume: f32) -> Result<(), PlatformError>;

    async fn play(&self, handle: AudioHandle) -> Result<(), PlatformError>;

    async fn stop(&self, handle: AudioHandle) -> Result<(), PlatformError>;

    /// Release a loaded asset
    async fn unload(&self, handle: AudioHandle) -> Result<(), PlatformError>;
}

/// Platform haptic engine
#[async_trait]
pub trait HapticBackend: Send + Sync {
    async fn impact(&self, style: ImpactStyle) -> Result<(), PlatformError>;

    async fn notification(&self, kind: NotificationKind) -> Result<(), PlatformError>;

    async fn selection(&self) -> Result<(), PlatformError>;
}
