//! Feedback Orchestrator
//!
//! Long-lived service that owns the audio session state, the sound cache and
//! haptic dispatch. Construct one per app and pass it to whoever needs it;
//! clones share the same state.
//!
//! ## Audio session states
//!
//! ```text
//! Uninitialized ──▶ Initializing ──ok──▶ Ready
//!                        │
//!                        └──err──▶ FallbackInitializing ──ok──▶ Ready (degraded)
//!                                           │
//!                                           └──err──▶ Disabled
//! ```
//!
//! No public method returns an error. Failures are logged and reported as
//! a [`FeedbackOutcome`], and a `Disabled` session turns playback into a no-op.

use futures_util::future::join_all;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

use ff_core::{HapticPattern, PerformanceLevel, SoundId};

use crate::cache::{CacheState, SoundCache};
use crate::config::{FeedbackConfig, clamp_fade_steps, clamp_volume};
use crate::cues::{CueTable, FeedbackAction};
use crate::handle::CelebrationHandle;
use crate::haptic::HapticPrimitive;
use crate::platform::{AudioBackend, AudioHandle, HapticBackend, PlatformError};
use crate::registry::{SoundDefinition, SoundRegistry};
use crate::{FeedbackError, FeedbackResult};

// ═══════════════════════════════════════════════════════════════════════════════
// STATE & OUTCOMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Audio session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioState {
    Uninitialized,
    Initializing,
    FallbackInitializing,
    /// Session up; `degraded` when only the fallback config worked
    Ready { degraded: bool },
    /// Both attempts failed; audio calls are no-ops
    Disabled,
}

impl AudioState {
    #[inline]
    pub fn is_playable(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Whether initialization has finished, successfully or not
    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready { .. } | Self::Disabled)
    }
}

/// Why a feedback call did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Sound playback switched off
    Muted,
    /// Haptics switched off
    HapticsOff,
    /// Audio session disabled
    AudioUnavailable,
    /// Sound is not in the cache
    NotLoaded,
}

/// Result of one feedback call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackOutcome {
    Played,
    Skipped(SkipReason),
    /// Failed and logged
    Failed,
}

impl FeedbackOutcome {
    #[inline]
    pub fn is_played(&self) -> bool {
        matches!(self, Self::Played)
    }
}

/// Result of a preload batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: Vec<SoundId>,
    pub failed: Vec<SoundId>,
    /// Not attempted because audio is unavailable
    pub skipped: Vec<SoundId>,
}

impl PreloadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OPTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// One-shot completion callback
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Options for [`FeedbackOrchestrator::play_sound`]
#[derive(Default)]
pub struct PlaySoundOptions {
    /// Wait before playing
    pub delay: Duration,
    /// Overrides the sound's default volume (before global volume)
    pub volume: Option<f32>,
    /// Overrides the sound's default fade-in
    pub fade_in: Option<Duration>,
    /// Called once the sound's estimated duration has elapsed
    pub on_complete: Option<Callback>,
}

impl PlaySoundOptions {
    pub fn delayed(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_fade_in(mut self, fade_in: Duration) -> Self {
        self.fade_in = Some(fade_in);
        self
    }

    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

/// Options for [`FeedbackOrchestrator::execute_haptic`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HapticOptions {
    pub delay: Duration,
}

/// Options for [`FeedbackOrchestrator::execute_celebration_feedback`]
#[derive(Default)]
pub struct CelebrationOptions {
    /// Called shortly after the immediate cues, without waiting for delayed ones
    pub on_complete: Option<Callback>,
}

impl CelebrationOptions {
    pub fn on_complete(callback: impl FnOnce() + Send + 'static) -> Self {
        Self {
            on_complete: Some(Box::new(callback)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SHARED STATE
// ═══════════════════════════════════════════════════════════════════════════════

/// Runtime switches, changed through setters
#[derive(Debug, Clone, Copy)]
struct Settings {
    enabled: bool,
    haptic_enabled: bool,
    volume: f32,
}

struct Shared {
    audio: Arc<dyn AudioBackend>,
    haptics: Arc<dyn HapticBackend>,
    registry: SoundRegistry,
    cues: CueTable,
    config: FeedbackConfig,
    settings: RwLock<Settings>,
    state: RwLock<AudioState>,
    /// Serializes session setup
    init_lock: tokio::sync::Mutex<()>,
    cache: SoundCache,
}

// ═══════════════════════════════════════════════════════════════════════════════
// BUILDER
// ═══════════════════════════════════════════════════════════════════════════════

/// Builder for [`FeedbackOrchestrator`]
pub struct FeedbackOrchestratorBuilder {
    audio: Arc<dyn AudioBackend>,
    haptics: Arc<dyn HapticBackend>,
    config: FeedbackConfig,
    registry: SoundRegistry,
    cues: CueTable,
}

impl FeedbackOrchestratorBuilder {
    pub fn config(mut self, config: FeedbackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(mut self, registry: SoundRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn cues(mut self, cues: CueTable) -> Self {
        self.cues = cues;
        self
    }

    pub fn build(self) -> FeedbackOrchestrator {
        let settings = Settings {
            enabled: self.config.enabled,
            haptic_enabled: self.config.haptic_enabled,
            volume: clamp_volume(self.config.volume),
        };
        let mut config = self.config;
        config.fade_steps = clamp_fade_steps(config.fade_steps);

        FeedbackOrchestrator {
            shared: Arc::new(Shared {
                audio: self.audio,
                haptics: self.haptics,
                registry: self.registry,
                cues: self.cues,
                config,
                settings: RwLock::new(settings),
                state: RwLock::new(AudioState::Uninitialized),
                init_lock: tokio::sync::Mutex::new(()),
                cache: SoundCache::new(),
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ORCHESTRATOR
// ═══════════════════════════════════════════════════════════════════════════════

/// Sound + haptic feedback service
#[derive(Clone)]
pub struct FeedbackOrchestrator {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for FeedbackOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackOrchestrator")
            .field("state", &self.audio_state())
            .field("cached", &self.shared.cache.len())
            .finish()
    }
}

impl FeedbackOrchestrator {
    /// Start building an orchestrator over the given platform bindings
    pub fn builder(
        audio: Arc<dyn AudioBackend>,
        haptics: Arc<dyn HapticBackend>,
    ) -> FeedbackOrchestratorBuilder {
        FeedbackOrchestratorBuilder {
            audio,
            haptics,
            config: FeedbackConfig::default(),
            registry: SoundRegistry::builtin(),
            cues: CueTable::builtin(),
        }
    }

    /// Orchestrator with default config, bundled sounds and cues
    pub fn new(audio: Arc<dyn AudioBackend>, haptics: Arc<dyn HapticBackend>) -> Self {
        Self::builder(audio, haptics).build()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Set up the audio session
    ///
    /// Tries the primary session config, then the fallback config once.
    /// Idempotent: once settled, returns the current state without touching
    /// the platform. Concurrent callers wait for the first one.
    pub async fn init(&self) -> AudioState {
        let _guard = self.shared.init_lock.lock().await;

        let current = self.audio_state();
        if current != AudioState::Uninitialized {
            return current;
        }

        self.set_state(AudioState::Initializing);
        let audio = &self.shared.audio;

        let state = match audio.configure_session(&self.shared.config.session).await {
            Ok(()) => {
                log::info!("[Feedback] Audio session ready");
                AudioState::Ready { degraded: false }
            }
            Err(err) => {
                log::warn!("[Feedback] Audio session setup failed ({}), trying fallback", err);
                self.set_state(AudioState::FallbackInitializing);

                match audio.configure_session(&self.shared.config.fallback_session).await {
                    Ok(()) => {
                        log::warn!("[Feedback] Audio session running on fallback config");
                        AudioState::Ready { degraded: true }
                    }
                    Err(err) => {
                        log::error!("[Feedback] Fallback audio session failed ({}), audio disabled", err);
                        AudioState::Disabled
                    }
                }
            }
        };

        self.set_state(state);
        state
    }

    /// Release every cached sound and return to `Uninitialized`
    pub async fn shutdown(&self) {
        self.cleanup().await;
        let _guard = self.shared.init_lock.lock().await;
        self.set_state(AudioState::Uninitialized);
        log::info!("[Feedback] Shut down");
    }

    /// Unload and forget every cached sound; safe to call repeatedly
    pub async fn cleanup(&self) {
        let drained = self.shared.cache.drain();
        if drained.is_empty() {
            return;
        }

        let count = drained.len();
        for (id, handle) in drained {
            self.unload(id, handle).await;
        }
        log::info!("[Feedback] Released {} cached sound(s)", count);
    }

    pub fn audio_state(&self) -> AudioState {
        *self.shared.state.read()
    }

    pub fn cache_state(&self, id: SoundId) -> CacheState {
        self.shared.cache.state(id)
    }

    fn set_state(&self, state: AudioState) {
        *self.shared.state.write() = state;
    }

    /// Settle the session if needed; true when audio can play
    async fn ensure_audio(&self) -> bool {
        let state = self.audio_state();
        let state = if state.is_settled() { state } else { self.init().await };
        state.is_playable()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SETTINGS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn set_enabled(&self, enabled: bool) {
        self.shared.settings.write().enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.settings.read().enabled
    }

    pub fn set_haptic_enabled(&self, enabled: bool) {
        self.shared.settings.write().haptic_enabled = enabled;
    }

    pub fn is_haptic_enabled(&self) -> bool {
        self.shared.settings.read().haptic_enabled
    }

    /// Set global volume, clamped to [0, 1]
    pub fn set_volume(&self, volume: f32) {
        self.shared.settings.write().volume = clamp_volume(volume);
    }

    /// Global volume (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.shared.settings.read().volume
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SOUND
    // ═══════════════════════════════════════════════════════════════════════════

    /// Load sounds ahead of time
    ///
    /// Loads run concurrently. Failures are logged and reported, never
    /// propagated.
    pub async fn preload_sounds(&self, ids: &[SoundId]) -> PreloadReport {
        if !self.ensure_audio().await {
            log::debug!("[Feedback] Audio unavailable, skipping preload of {} sound(s)", ids.len());
            return PreloadReport {
                skipped: ids.to_vec(),
                ..PreloadReport::default()
            };
        }

        let results = join_all(ids.iter().map(|&id| async move { (id, self.load(id).await) })).await;

        let mut report = PreloadReport::default();
        for (id, result) in results {
            match result {
                Ok(_) => report.loaded.push(id),
                Err(err) => {
                    log::warn!("[Feedback] Preload: {}", err);
                    report.failed.push(id);
                }
            }
        }

        log::info!(
            "[Feedback] Preloaded {}/{} sound(s)",
            report.loaded.len(),
            ids.len()
        );
        report
    }

    /// Play a sound
    ///
    /// Loads on demand, rewinds for replay and applies
    /// `(options.volume ?? sound.volume) * global volume`. A failed play
    /// evicts the sound so the next call reloads it.
    pub async fn play_sound(&self, id: SoundId, options: PlaySoundOptions) -> FeedbackOutcome {
        let PlaySoundOptions {
            delay,
            volume,
            fade_in,
            on_complete,
        } = options;

        if !self.is_enabled() {
            log::debug!("[Feedback] Sound off, skipping {}", id);
            return FeedbackOutcome::Skipped(SkipReason::Muted);
        }

        if self.audio_state() == AudioState::Disabled {
            log::debug!("[Feedback] Audio unavailable, skipping {}", id);
            return FeedbackOutcome::Skipped(SkipReason::AudioUnavailable);
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
            if !self.is_enabled() {
                log::debug!("[Feedback] Sound turned off during delay, skipping {}", id);
                return FeedbackOutcome::Skipped(SkipReason::Muted);
            }
        }

        if !self.ensure_audio().await {
            log::debug!("[Feedback] Audio unavailable, skipping {}", id);
            return FeedbackOutcome::Skipped(SkipReason::AudioUnavailable);
        }

        match self.play_loaded(id, volume, fade_in).await {
            Ok(duration) => {
                if let Some(callback) = on_complete {
                    tokio::spawn(async move {
                        tokio::time::sleep(duration).await;
                        callback();
                    });
                }
                FeedbackOutcome::Played
            }
            Err(err) => {
                log::warn!("[Feedback] {}", err);
                FeedbackOutcome::Failed
            }
        }
    }

    /// Play sounds one after another, `gap` apart after each estimated end
    pub async fn play_sequence(&self, ids: &[SoundId], gap: Duration) -> Vec<FeedbackOutcome> {
        let mut outcomes = Vec::with_capacity(ids.len());
        for (index, &id) in ids.iter().enumerate() {
            outcomes.push(self.play_sound(id, PlaySoundOptions::default()).await);

            if index + 1 < ids.len() {
                let length = self
                    .shared
                    .registry
                    .get(id)
                    .map(SoundDefinition::duration)
                    .unwrap_or_default();
                tokio::time::sleep(length + gap).await;
            }
        }
        outcomes
    }

    /// Stop a sound if it is loaded
    pub async fn stop_sound(&self, id: SoundId) -> FeedbackOutcome {
        let Some(handle) = self.shared.cache.get(id) else {
            return FeedbackOutcome::Skipped(SkipReason::NotLoaded);
        };

        match self.shared.audio.stop(handle).await {
            Ok(()) => FeedbackOutcome::Played,
            Err(source) => {
                log::warn!("[Feedback] {}", FeedbackError::Playback { id, source });
                self.evict(id).await;
                FeedbackOutcome::Failed
            }
        }
    }

    /// Stop every loaded sound (best effort)
    pub async fn stop_all(&self) {
        for (id, _) in self.shared.cache.loaded() {
            self.stop_sound(id).await;
        }
    }

    async fn load(&self, id: SoundId) -> FeedbackResult<(AudioHandle, SoundDefinition)> {
        let definition = self
            .shared
            .registry
            .get(id)
            .cloned()
            .ok_or(FeedbackError::UnknownSound(id))?;

        let audio = Arc::clone(&self.shared.audio);
        let asset = definition.asset.clone();
        let looping = definition.looping;

        let handle = self
            .shared
            .cache
            .get_or_load(id, move || async move {
                log::debug!("[SoundCache] Loading {} from {}", id, asset);
                audio.load(&asset, looping).await
            })
            .await
            .map_err(|source| FeedbackError::Load { id, source })?;

        Ok((handle, definition))
    }

    /// Returns the estimated playback length
    async fn play_loaded(
        &self,
        id: SoundId,
        volume: Option<f32>,
        fade_in: Option<Duration>,
    ) -> FeedbackResult<Duration> {
        let (handle, definition) = self.load(id).await?;

        let target = clamp_volume(volume.unwrap_or(definition.volume)) * self.volume();
        let fade = fade_in.unwrap_or_else(|| definition.fade_in());

        if let Err(source) = self.start_playback(handle, target, fade).await {
            self.evict(id).await;
            return Err(FeedbackError::Playback { id, source });
        }

        Ok(definition.duration())
    }

    async fn start_playback(
        &self,
        handle: AudioHandle,
        target: f32,
        fade: Duration,
    ) -> Result<(), PlatformError> {
        let audio = &self.shared.audio;
        audio.set_position(handle, Duration::ZERO).await?;

        if fade.is_zero() {
            audio.set_volume(handle, target).await?;
            return audio.play(handle).await;
        }

        audio.set_volume(handle, 0.0).await?;
        audio.play(handle).await?;

        let ramp = self.shared.config.fade_curve.ramp(self.shared.config.fade_steps);
        let step = fade / ramp.len() as u32;
        for gain in ramp {
            tokio::time::sleep(step).await;
            audio.set_volume(handle, target * gain).await?;
        }
        Ok(())
    }

    async fn evict(&self, id: SoundId) {
        if let Some(handle) = self.shared.cache.evict(id) {
            self.unload(id, handle).await;
        }
    }

    async fn unload(&self, id: SoundId, handle: AudioHandle) {
        if let Err(err) = self.shared.audio.unload(handle).await {
            log::warn!("[SoundCache] Failed to unload {}: {}", id, err);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // HAPTICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fire a haptic pattern; failures are logged, never fatal
    pub async fn execute_haptic(&self, pattern: HapticPattern, options: HapticOptions) -> FeedbackOutcome {
        if !self.is_haptic_enabled() {
            log::debug!("[Feedback] Haptics off, skipping {}", pattern);
            return FeedbackOutcome::Skipped(SkipReason::HapticsOff);
        }

        if !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
            if !self.is_haptic_enabled() {
                return FeedbackOutcome::Skipped(SkipReason::HapticsOff);
            }
        }

        match HapticPrimitive::for_pattern(pattern)
            .dispatch(self.shared.haptics.as_ref())
            .await
        {
            Ok(()) => FeedbackOutcome::Played,
            Err(source) => {
                log::warn!("[Feedback] {}", FeedbackError::Haptic { pattern, source });
                FeedbackOutcome::Failed
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // COMPOSITE FEEDBACK
    // ═══════════════════════════════════════════════════════════════════════════

    /// Run the celebration cues for a level
    ///
    /// Zero-delay cues fire together and are awaited. Delayed cues and the
    /// `on_complete` timer go into the returned handle's task set and are not
    /// awaited, so `on_complete` may run before every delayed cue has fired.
    pub async fn execute_celebration_feedback(
        &self,
        level: PerformanceLevel,
        options: CelebrationOptions,
    ) -> CelebrationHandle {
        let (immediate, delayed): (Vec<_>, Vec<_>) = self
            .shared
            .cues
            .for_level(level)
            .iter()
            .copied()
            .partition(|cue| cue.is_immediate());

        let mut tasks = JoinSet::new();
        for cue in delayed {
            let this = self.clone();
            tasks.spawn(async move {
                tokio::time::sleep(cue.delay()).await;
                this.run_action(cue.action).await;
            });
        }

        join_all(immediate.iter().map(|cue| self.run_action(cue.action))).await;

        if let Some(callback) = options.on_complete {
            let delay = self.shared.config.completion_delay();
            tasks.spawn(async move {
                tokio::time::sleep(delay).await;
                callback();
            });
        }

        log::debug!(
            "[Feedback] {} celebration started, {} scheduled task(s)",
            level,
            tasks.len()
        );
        CelebrationHandle::new(level, tasks)
    }

    /// Sound and haptic for an answered question
    pub async fn play_answer_feedback(&self, correct: bool) -> (FeedbackOutcome, FeedbackOutcome) {
        let (sound, haptic) = if correct {
            (SoundId::Correct, HapticPattern::Success)
        } else {
            (SoundId::Incorrect, HapticPattern::Error)
        };

        tokio::join!(
            self.play_sound(sound, PlaySoundOptions::default()),
            self.execute_haptic(haptic, HapticOptions::default()),
        )
    }

    /// Sound and haptic for an achievement unlock
    pub async fn play_achievement_feedback(&self) -> (FeedbackOutcome, FeedbackOutcome) {
        tokio::join!(
            self.play_sound(SoundId::Achievement, PlaySoundOptions::default()),
            self.execute_haptic(HapticPattern::Success, HapticOptions::default()),
        )
    }

    async fn run_action(&self, action: FeedbackAction) -> FeedbackOutcome {
        match action {
            FeedbackAction::Sound(id) => self.play_sound(id, PlaySoundOptions::default()).await,
            FeedbackAction::Haptic(pattern) => {
                self.execute_haptic(pattern, HapticOptions::default()).await
            }
        }
    }
}
