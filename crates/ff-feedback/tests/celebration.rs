//! Celebration choreography tests

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use common::{FakeAudio, FakeHaptics, HapticCall, orchestrator};
use ff_feedback::{
    CelebrationOptions, CueTable, FeedbackCue, FeedbackOrchestrator, HapticPattern, ImpactStyle,
    NotificationKind, PerformanceLevel, SoundId,
};

// ═══════════════════════════════════════════════════════════════════════════════
// TEST FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

fn completion_flag() -> (Arc<AtomicBool>, CelebrationOptions) {
    let done = Arc::new(AtomicBool::new(false));
    let flag = done.clone();
    let options = CelebrationOptions::on_complete(move || flag.store(true, Ordering::SeqCst));
    (done, options)
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCHEDULING
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test(start_paused = true)]
async fn test_immediate_cues_fire_before_return() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);

    let handle = feedback
        .execute_celebration_feedback(PerformanceLevel::Great, CelebrationOptions::default())
        .await;

    assert_eq!(handle.level(), PerformanceLevel::Great);
    assert_eq!(audio.loads(), vec!["sounds/celebration.mp3".to_string()]);
    assert_eq!(
        haptics.calls(),
        vec![HapticCall::Notification(NotificationKind::Success)]
    );
    // Light impact at 200 ms is still pending
    assert_eq!(handle.pending(), 1);

    handle.wait().await;
    assert!(haptics.contains(HapticCall::Impact(ImpactStyle::Light)));
}

#[tokio::test(start_paused = true)]
async fn test_epic_full_choreography() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);

    feedback
        .execute_celebration_feedback(PerformanceLevel::Epic, CelebrationOptions::default())
        .await
        .wait()
        .await;

    assert_eq!(
        audio.loads(),
        vec!["sounds/fanfare.mp3".to_string(), "sounds/celebration.mp3".to_string()]
    );
    let calls = haptics.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], HapticCall::Impact(ImpactStyle::Heavy));
    assert!(calls.contains(&HapticCall::Notification(NotificationKind::Success)));
    assert_eq!(calls[2], HapticCall::Impact(ImpactStyle::Medium));
}

#[tokio::test(start_paused = true)]
async fn test_on_complete_does_not_wait_for_delayed_cues() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);

    let done = Arc::new(AtomicBool::new(false));
    let medium_at_completion = Arc::new(AtomicBool::new(true));
    let options = {
        let done = done.clone();
        let seen = medium_at_completion.clone();
        let haptics = haptics.clone();
        CelebrationOptions::on_complete(move || {
            seen.store(haptics.contains(HapticCall::Impact(ImpactStyle::Medium)), Ordering::SeqCst);
            done.store(true, Ordering::SeqCst);
        })
    };

    feedback
        .execute_celebration_feedback(PerformanceLevel::Epic, options)
        .await
        .wait()
        .await;

    assert!(done.load(Ordering::SeqCst));
    // Completion fired at ~350 ms, the medium impact at 400 ms
    assert!(!medium_at_completion.load(Ordering::SeqCst));
    assert!(haptics.contains(HapticCall::Impact(ImpactStyle::Medium)));
}

#[tokio::test(start_paused = true)]
async fn test_on_complete_after_completion_delay() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);
    let (done, options) = completion_flag();

    let _handle = feedback
        .execute_celebration_feedback(PerformanceLevel::Good, options)
        .await;
    assert!(!done.load(Ordering::SeqCst));

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(done.load(Ordering::SeqCst));
}

// ═══════════════════════════════════════════════════════════════════════════════
// CANCELLATION
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_cues() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);
    let (done, options) = completion_flag();

    let handle = feedback
        .execute_celebration_feedback(PerformanceLevel::Great, options)
        .await;
    assert_eq!(handle.pending(), 2);
    handle.cancel();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(!haptics.contains(HapticCall::Impact(ImpactStyle::Light)));
    assert!(!done.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn test_dropped_handle_keeps_running() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);
    let (done, options) = completion_flag();

    let handle = feedback
        .execute_celebration_feedback(PerformanceLevel::Great, options)
        .await;
    drop(handle);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(haptics.contains(HapticCall::Impact(ImpactStyle::Light)));
    assert!(done.load(Ordering::SeqCst));
}

// ═══════════════════════════════════════════════════════════════════════════════
// DEGRADATION & CUSTOM CUES
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test(start_paused = true)]
async fn test_celebration_without_audio() {
    let (audio, haptics) = (FakeAudio::with_session_failures(2), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);
    let (done, options) = completion_flag();

    feedback
        .execute_celebration_feedback(PerformanceLevel::Supportive, options)
        .await
        .wait()
        .await;

    assert!(audio.loads().is_empty());
    assert_eq!(haptics.calls(), vec![HapticCall::Selection]);
    assert!(done.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn test_muted_celebration_keeps_haptics() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    let feedback = orchestrator(&audio, &haptics);
    feedback.set_enabled(false);

    feedback
        .execute_celebration_feedback(PerformanceLevel::Good, CelebrationOptions::default())
        .await
        .wait()
        .await;

    assert!(audio.calls().is_empty());
    assert_eq!(haptics.calls(), vec![HapticCall::Impact(ImpactStyle::Light)]);
}

#[tokio::test(start_paused = true)]
async fn test_custom_cue_table() {
    let (audio, haptics) = (FakeAudio::new(), FakeHaptics::new());
    common::init_logging();

    let mut cues = CueTable::builtin();
    cues.set(
        PerformanceLevel::Good,
        vec![
            FeedbackCue::haptic(HapticPattern::Warning),
            FeedbackCue::sound(SoundId::Streak).after_ms(300),
        ],
    );
    let feedback = FeedbackOrchestrator::builder(audio.clone(), haptics.clone())
        .cues(cues)
        .build();

    let handle = feedback
        .execute_celebration_feedback(PerformanceLevel::Good, CelebrationOptions::default())
        .await;
    assert!(audio.loads().is_empty());
    handle.wait().await;

    assert_eq!(audio.loads(), vec!["sounds/streak.mp3".to_string()]);
    assert_eq!(
        haptics.calls(),
        vec![HapticCall::Notification(NotificationKind::Warning)]
    );
}
