//! Exam-to-feedback pipeline tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use fanfare::feedback::{
    AudioBackend, AudioHandle, AudioSessionConfig, HapticBackend, ImpactStyle, NotificationKind,
    PlatformError,
};
use fanfare::{
    AdaptationContext, Difficulty, ExamEvaluator, ExamResult, FeedbackOrchestrator,
    PerformanceLevel, UserStats, celebrate, evaluate_exam,
};

// ═══════════════════════════════════════════════════════════════════════════════
// TEST FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

/// Records loaded assets and haptic calls as plain strings
#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl Recorder {
    fn push(&self, event: impl Into<String>) -> Result<(), PlatformError> {
        self.events.lock().push(event.into());
        Ok(())
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl AudioBackend for Recorder {
    async fn configure_session(&self, _config: &AudioSessionConfig) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn load(&self, asset: &str, _looping: bool) -> Result<AudioHandle, PlatformError> {
        self.push(format!("load {asset}"))?;
        Ok(AudioHandle(1))
    }

    async fn set_position(&self, _handle: AudioHandle, _position: Duration) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn set_volume(&self, _handle: AudioHandle, _volume: f32) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn play(&self, _handle: AudioHandle) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn stop(&self, _handle: AudioHandle) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn unload(&self, _handle: AudioHandle) -> Result<(), PlatformError> {
        Ok(())
    }
}

#[async_trait]
impl HapticBackend for Recorder {
    async fn impact(&self, style: ImpactStyle) -> Result<(), PlatformError> {
        self.push(format!("impact {style:?}"))
    }

    async fn notification(&self, kind: NotificationKind) -> Result<(), PlatformError> {
        self.push(format!("notification {kind:?}"))
    }

    async fn selection(&self) -> Result<(), PlatformError> {
        self.push("selection")
    }
}

fn advanced_scenario() -> (ExamResult, UserStats) {
    let result = ExamResult::new("physics", Difficulty::Advanced, 19, 20)
        .with_streak(3)
        .with_previous_attempts(1);
    let mut stats = UserStats::new().with_total_exams(5).with_streak(3);
    stats.average_score = 82.0;
    (result, stats)
}

// ═══════════════════════════════════════════════════════════════════════════════
// EVALUATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_advanced_scenario_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (result, stats) = advanced_scenario();

    let eval = evaluate_exam(&result, &stats, &AdaptationContext::default());

    assert_eq!(eval.level, PerformanceLevel::Epic);
    assert_eq!(eval.celebration.title, "Outstanding!");
    let ids: Vec<_> = eval.achievements.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["excellent_performer", "streak_starter"]);
    assert_eq!(eval.xp_bonus, 1425);
    assert_eq!(eval.achievement_xp, 175);
    assert_eq!(eval.total_xp, 1600);
}

#[test]
fn test_context_flags_reach_the_config() {
    let result = ExamResult::new("physics", Difficulty::Expert, 16, 20);
    let stats = UserStats::new().with_total_exams(2);
    let context = AdaptationContext {
        is_improvement: true,
        is_first_attempt: true,
        exceeds_goal: false,
    };

    let eval = evaluate_exam(&result, &stats, &context);

    assert_eq!(eval.level, PerformanceLevel::Great);
    // Expert override wins the title; improvement still forced glow
    assert_eq!(eval.celebration.title, "Expert Level Conquered!");
    assert!(eval.celebration.effects.glow);
    assert!(eval.celebration.effects.particles);
}

#[test]
fn test_evaluation_serializes_for_the_ui() {
    let (result, stats) = advanced_scenario();
    let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
    let eval = ExamEvaluator::new().evaluate_at(&result, &stats, &AdaptationContext::default(), now);

    let json = serde_json::to_value(&eval).unwrap();
    assert_eq!(json["level"], "epic");
    assert_eq!(json["achievements"][0]["id"], "excellent_performer");

    let back: fanfare::ExamEvaluation = serde_json::from_value(json).unwrap();
    assert_eq!(back, eval);
}

// ═══════════════════════════════════════════════════════════════════════════════
// FEEDBACK
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test(start_paused = true)]
async fn test_celebrate_plays_level_and_achievement_cues() {
    let recorder = Arc::new(Recorder::default());
    let feedback = FeedbackOrchestrator::new(recorder.clone(), recorder.clone());

    let (result, stats) = advanced_scenario();
    let eval = evaluate_exam(&result, &stats, &AdaptationContext::default());

    celebrate(&feedback, &eval).await.wait().await;

    let events = recorder.events();
    assert_eq!(events[0], "load sounds/fanfare.mp3");
    assert!(events.contains(&"impact Heavy".to_string()));
    assert!(events.contains(&"load sounds/achievement.mp3".to_string()));
    assert!(events.contains(&"load sounds/celebration.mp3".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_celebrate_without_achievements() {
    let recorder = Arc::new(Recorder::default());
    let feedback = FeedbackOrchestrator::new(recorder.clone(), recorder.clone());

    let result = ExamResult::new("art", Difficulty::Beginner, 13, 20).with_previous_attempts(2);
    let mut stats = UserStats::new().with_total_exams(3);
    stats.average_score = 70.0;
    let eval = evaluate_exam(&result, &stats, &AdaptationContext::default());
    assert!(!eval.has_achievements());

    celebrate(&feedback, &eval).await.wait().await;

    assert_eq!(
        recorder.events(),
        vec!["load sounds/correct.mp3".to_string(), "impact Light".to_string()]
    );
}
