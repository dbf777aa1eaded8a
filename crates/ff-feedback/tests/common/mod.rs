//! Recording platform fakes with failure injection

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use ff_feedback::{
    AudioBackend, AudioHandle, AudioSessionConfig, FeedbackConfig, FeedbackOrchestrator,
    HapticBackend, ImpactStyle, NotificationKind, PlatformError,
};

// ═══════════════════════════════════════════════════════════════════════════════
// AUDIO
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Configure(AudioSessionConfig),
    Load(String),
    SetPosition(AudioHandle, Duration),
    SetVolume(AudioHandle, f32),
    Play(AudioHandle),
    Stop(AudioHandle),
    Unload(AudioHandle),
}

#[derive(Default)]
pub struct FakeAudio {
    calls: Mutex<Vec<AudioCall>>,
    /// Remaining configure_session calls that fail
    session_failures: AtomicU32,
    failing_assets: Mutex<HashSet<String>>,
    /// Remaining play calls that fail
    play_failures: AtomicU32,
    load_delay_ms: AtomicU64,
    next_handle: AtomicU64,
}

impl FakeAudio {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_session_failures(failures: u32) -> Arc<Self> {
        let audio = Self::default();
        audio.session_failures.store(failures, Ordering::SeqCst);
        Arc::new(audio)
    }

    pub fn fail_asset(&self, asset: &str) {
        self.failing_assets.lock().insert(asset.to_string());
    }

    pub fn heal_asset(&self, asset: &str) {
        self.failing_assets.lock().remove(asset);
    }

    pub fn fail_next_plays(&self, count: u32) {
        self.play_failures.store(count, Ordering::SeqCst);
    }

    pub fn set_load_delay(&self, delay: Duration) {
        self.load_delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.lock().clone()
    }

    pub fn loads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                AudioCall::Load(asset) => Some(asset),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&AudioCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    pub fn plays(&self) -> usize {
        self.count(|c| matches!(c, AudioCall::Play(_)))
    }

    pub fn volumes(&self) -> Vec<f32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                AudioCall::SetVolume(_, v) => Some(v),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: AudioCall) {
        self.calls.lock().push(call);
    }

    fn take_failure(counter: &AtomicU32) -> bool {
        counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl AudioBackend for FakeAudio {
    async fn configure_session(&self, config: &AudioSessionConfig) -> Result<(), PlatformError> {
        self.record(AudioCall::Configure(config.clone()));
        if Self::take_failure(&self.session_failures) {
            return Err(PlatformError::Session("simulated".into()));
        }
        Ok(())
    }

    async fn load(&self, asset: &str, _looping: bool) -> Result<AudioHandle, PlatformError> {
        self.record(AudioCall::Load(asset.to_string()));

        let delay = self.load_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.failing_assets.lock().contains(asset) {
            return Err(PlatformError::AssetNotFound(asset.to_string()));
        }
        Ok(AudioHandle(self.next_handle.fetch_add(1, Ordering::SeqCst) + 1))
    }

    async fn set_position(&self, handle: AudioHandle, position: Duration) -> Result<(), PlatformError> {
        self.record(AudioCall::SetPosition(handle, position));
        Ok(())
    }

    async fn set_volume(&self, handle: AudioHandle, volume: f32) -> Result<(), PlatformError> {
        self.record(AudioCall::SetVolume(handle, volume));
        Ok(())
    }

    async fn play(&self, handle: AudioHandle) -> Result<(), PlatformError> {
        self.record(AudioCall::Play(handle));
        if Self::take_failure(&self.play_failures) {
            return Err(PlatformError::Backend("player crashed".into()));
        }
        Ok(())
    }

    async fn stop(&self, handle: AudioHandle) -> Result<(), PlatformError> {
        self.record(AudioCall::Stop(handle));
        Ok(())
    }

    async fn unload(&self, handle: AudioHandle) -> Result<(), PlatformError> {
        self.record(AudioCall::Unload(handle));
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HAPTICS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCall {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    Selection,
}

#[derive(Default)]
pub struct FakeHaptics {
    calls: Mutex<Vec<HapticCall>>,
    failing: AtomicBool,
}

impl FakeHaptics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<HapticCall> {
        self.calls.lock().clone()
    }

    pub fn contains(&self, call: HapticCall) -> bool {
        self.calls.lock().contains(&call)
    }

    fn record(&self, call: HapticCall) -> Result<(), PlatformError> {
        self.calls.lock().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(PlatformError::HapticsUnsupported);
        }
        Ok(())
    }
}

#[async_trait]
impl HapticBackend for FakeHaptics {
    async fn impact(&self, style: ImpactStyle) -> Result<(), PlatformError> {
        self.record(HapticCall::Impact(style))
    }

    async fn notification(&self, kind: NotificationKind) -> Result<(), PlatformError> {
        self.record(HapticCall::Notification(kind))
    }

    async fn selection(&self) -> Result<(), PlatformError> {
        self.record(HapticCall::Selection)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn orchestrator(audio: &Arc<FakeAudio>, haptics: &Arc<FakeHaptics>) -> FeedbackOrchestrator {
    orchestrator_with(audio, haptics, FeedbackConfig::default())
}

pub fn orchestrator_with(
    audio: &Arc<FakeAudio>,
    haptics: &Arc<FakeHaptics>,
    config: FeedbackConfig,
) -> FeedbackOrchestrator {
    init_logging();
    FeedbackOrchestrator::builder(audio.clone(), haptics.clone())
        .config(config)
        .build()
}
